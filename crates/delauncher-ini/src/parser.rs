//! Adapter from `rust-ini` into [`IniTable`].
//!
//! Quote stripping and backslash escapes are turned off so values reach the
//! field compiler exactly as written, minus surrounding whitespace.

use ini::{Ini, ParseOption};
use tracing::debug;

use crate::errors::IniError;
use crate::table::{GLOBAL_SECTION, IniTable};

const BOM: char = '\u{feff}';

/// Tokenize `text` into an [`IniTable`].
///
/// Properties before the first header land in the global section. A header
/// seen twice re-opens the first section of that name.
///
/// # Errors
///
/// Returns [`IniError::Syntax`] when `rust-ini` rejects the text, e.g. a
/// key with no `=` or `:` separator.
pub fn parse(text: &str) -> Result<IniTable, IniError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(text, options)?;

    let mut table = IniTable::new();
    let mut properties = 0usize;
    for (name, section) in ini.iter() {
        let index = match name {
            None => GLOBAL_SECTION,
            Some(name) => table.push_section(name),
        };
        for (key, value) in section.iter() {
            table.push_property(index, key, value);
            properties += 1;
        }
    }

    debug!(
        event = "ini.parse.completed",
        sections = table.section_count(),
        properties = properties
    );

    Ok(table)
}
