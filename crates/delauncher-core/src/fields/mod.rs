//! Section-to-field compilation.
//!
//! Every non-global section of a launcher file describes one field. Its
//! `type` property picks the [`FieldKind`]; the remaining properties fill in
//! the kind's parameters.

pub mod choices;
pub mod coercion;
pub mod compiler;
pub mod registry;
pub mod types;

pub use choices::parse_choices;
pub use compiler::compile;
pub use registry::resolve;
pub use types::{
    CheckboxParams, CompiledFields, Diagnostic, DropdownParams, FieldKind, FieldSpec, KindParams,
};

/// Property naming the control type of a section.
pub const KEY_TYPE: &str = "type";
/// Property holding the display label.
pub const KEY_LABEL: &str = "label";
/// Property holding the initial value.
pub const KEY_DEFAULT: &str = "default";
/// Property holding the comma-separated dropdown choices.
pub const KEY_VALUES: &str = "values";
