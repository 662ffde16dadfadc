//! delauncher-core: configuration-to-field-model compiler
//!
//! Turns a parsed launcher file into a [`WindowSpec`] and an ordered list of
//! [`FieldSpec`]s that any presentation layer can render. Compilation never
//! fails: missing or malformed values fall back to defaults, and unknown
//! control types become [`Diagnostic`]s.
//!
//! # Main Entry Points
//!
//! - [`loading`] - Resolve and load a launcher file
//! - [`fields`] - Compile sections into field specs
//! - [`window`] - Resolve window settings from the global section
//! - [`values`] - Field values handed off by the "Run" action

pub mod errors;
pub mod events;
pub mod fields;
pub mod loading;
pub mod logging;
pub mod values;
pub mod window;

pub use delauncher_ini::{GLOBAL_SECTION, IniError, IniTable, Section};

pub use errors::{DelauncherError, LoadError, ValueError};
pub use fields::{
    CheckboxParams, CompiledFields, Diagnostic, DropdownParams, FieldKind, FieldSpec, KindParams,
    compile,
};
pub use loading::{DEFAULT_CONFIG_FILENAME, Launcher, load_launcher, resolve_config_path};
pub use values::{FieldValue, FieldValues};
pub use window::{WindowSpec, resolve_window};

// Re-export logging initialization
pub use logging::init_logging;
