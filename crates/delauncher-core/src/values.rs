//! Field values collected when the user triggers "Run".
//!
//! A [`FieldValues`] map starts from the compiled defaults and accepts
//! user-entered overrides. What happens to it afterwards is up to the
//! caller.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::errors::ValueError;
use crate::fields::{FieldSpec, KindParams};

/// Current value of one control.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checked(bool),
    Selected(i64),
}

/// Ordered `identifier -> value` map, in field order.
///
/// Fields of an unrecognized kind have no control and therefore no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    fields: Vec<FieldSpec>,
    entries: Vec<(String, FieldValue)>,
}

impl FieldValues {
    /// Seed one entry per renderable field from its compiled default.
    pub fn from_fields(fields: &[FieldSpec]) -> Self {
        let entries = fields
            .iter()
            .filter_map(|field| {
                let value = match &field.params {
                    KindParams::Checkbox(p) => FieldValue::Checked(p.default_checked),
                    KindParams::Dropdown(p) => FieldValue::Selected(p.default_index),
                    KindParams::Unrecognized => return None,
                };
                Some((field.identifier.clone(), value))
            })
            .collect();

        Self {
            fields: fields.to_vec(),
            entries,
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set a field from user input.
    ///
    /// Checkboxes take `true` or `false`. Dropdowns take a choice string
    /// (first match wins) or an index into the choice list.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when the field does not exist, has no
    /// control, or `raw` does not fit its kind.
    pub fn set(&mut self, identifier: &str, raw: &str) -> Result<(), ValueError> {
        let field = self
            .fields
            .iter()
            .find(|f| f.identifier == identifier)
            .ok_or_else(|| ValueError::UnknownField {
                identifier: identifier.to_string(),
            })?;

        let value = match &field.params {
            KindParams::Checkbox(_) => match raw {
                "true" => FieldValue::Checked(true),
                "false" => FieldValue::Checked(false),
                _ => {
                    return Err(ValueError::InvalidBoolean {
                        identifier: identifier.to_string(),
                        value: raw.to_string(),
                    });
                }
            },
            KindParams::Dropdown(params) => {
                let by_name = params.choices.iter().position(|c| c == raw);
                let by_index = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|i| *i < params.choices.len());
                match by_name.or(by_index) {
                    Some(index) => FieldValue::Selected(index as i64),
                    None => {
                        return Err(ValueError::InvalidChoice {
                            identifier: identifier.to_string(),
                            value: raw.to_string(),
                            choices: params.choices.join(", "),
                        });
                    }
                }
            }
            KindParams::Unrecognized => {
                return Err(ValueError::NotEditable {
                    identifier: identifier.to_string(),
                });
            }
        };

        debug!(
            event = "core.values.value_set",
            identifier = identifier,
            value = ?value
        );

        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| id == identifier) {
            entry.1 = value;
        }
        Ok(())
    }

    /// Apply an `ID=VALUE` assignment, splitting on the first `=`.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ValueError> {
        let (identifier, raw) =
            assignment
                .split_once('=')
                .ok_or_else(|| ValueError::MalformedAssignment {
                    assignment: assignment.to_string(),
                })?;
        self.set(identifier, raw)
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (identifier, value) in &self.entries {
            map.serialize_entry(identifier, value)?;
        }
        map.end()
    }
}
