//! Known control type names.
//!
//! Lookup is an exact byte comparison: no trimming and no case folding, so
//! `"Checkbox"` or `" checkbox"` resolve to [`FieldKind::Unrecognized`].
//! New kinds are added by extending [`KNOWN_TYPES`].

use super::types::FieldKind;

/// Type name + kind pairs.
const KNOWN_TYPES: &[(&str, FieldKind)] = &[
    ("checkbox", FieldKind::Checkbox),
    ("dropdown", FieldKind::Dropdown),
];

/// Resolve a section's `type` value to a field kind.
pub fn resolve(type_name: &str) -> FieldKind {
    KNOWN_TYPES
        .iter()
        .find(|(name, _)| *name == type_name)
        .map_or(FieldKind::Unrecognized, |(_, kind)| *kind)
}

pub fn known_type_names() -> impl Iterator<Item = &'static str> {
    KNOWN_TYPES.iter().map(|(name, _)| *name)
}

pub fn supported_types_string() -> String {
    let mut names: Vec<&str> = known_type_names().collect();
    names.sort();
    names.join(", ")
}
