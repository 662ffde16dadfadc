//! # delauncher-ini
//!
//! Order-preserving section/property table for INI-style launcher files.
//!
//! Tokenizing is done by `rust-ini`; this crate adapts its output into an
//! [`IniTable`] with a stable global section at index [`GLOBAL_SECTION`],
//! sections in first-seen order and repeated keys kept in file order.

pub mod errors;
pub mod parser;
pub mod table;

pub use errors::IniError;
pub use parser::parse;
pub use table::{GLOBAL_SECTION, IniTable, Property, Section};
