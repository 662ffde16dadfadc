//! Field model produced by the compiler.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classified control type of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Checkbox,
    Dropdown,
    Unrecognized,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Checkbox => "checkbox",
            FieldKind::Dropdown => "dropdown",
            FieldKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxParams {
    pub default_checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownParams {
    pub choices: Vec<String>,
    /// Initially selected choice. Not checked against `choices`; an
    /// out-of-range index is left for the renderer to handle.
    pub default_index: i64,
}

impl DropdownParams {
    /// The initially selected choice, if `default_index` points at one.
    pub fn selected_choice(&self) -> Option<&str> {
        usize::try_from(self.default_index)
            .ok()
            .and_then(|i| self.choices.get(i))
            .map(String::as_str)
    }
}

/// Kind-specific parameters of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum KindParams {
    Checkbox(CheckboxParams),
    Dropdown(DropdownParams),
    Unrecognized,
}

impl KindParams {
    pub fn kind(&self) -> FieldKind {
        match self {
            KindParams::Checkbox(_) => FieldKind::Checkbox,
            KindParams::Dropdown(_) => FieldKind::Dropdown,
            KindParams::Unrecognized => FieldKind::Unrecognized,
        }
    }
}

/// Compiled, immutable description of one renderable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Section name; unique within a launcher file.
    pub identifier: String,
    pub label: String,
    #[serde(flatten)]
    pub params: KindParams,
}

impl FieldSpec {
    pub fn kind(&self) -> FieldKind {
        self.params.kind()
    }
}

/// Non-fatal note about a section the compiler could not fully understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub section_name: String,
    /// Raw `type` value that failed to resolve.
    pub type_name: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} '{}'",
            self.section_name, self.message, self.type_name
        )
    }
}

/// Output of [`crate::fields::compile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledFields {
    pub fields: Vec<FieldSpec>,
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown(choices: &[&str], default_index: i64) -> DropdownParams {
        DropdownParams {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            default_index,
        }
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Checkbox.to_string(), "checkbox");
        assert_eq!(FieldKind::Dropdown.to_string(), "dropdown");
        assert_eq!(FieldKind::Unrecognized.to_string(), "unrecognized");
    }

    #[test]
    fn test_selected_choice_in_range() {
        let params = dropdown(&["info", "warn", "error"], 1);
        assert_eq!(params.selected_choice(), Some("warn"));
    }

    #[test]
    fn test_selected_choice_out_of_range() {
        assert_eq!(dropdown(&["info"], 7).selected_choice(), None);
        assert_eq!(dropdown(&["info"], -1).selected_choice(), None);
    }

    #[test]
    fn test_field_spec_kind_follows_params() {
        let field = FieldSpec {
            identifier: "Log Level".to_string(),
            label: "Log Level".to_string(),
            params: KindParams::Dropdown(dropdown(&["a"], 0)),
        };
        assert_eq!(field.kind(), FieldKind::Dropdown);
    }

    #[test]
    fn test_field_spec_json_shape() {
        let field = FieldSpec {
            identifier: "Debug Mode".to_string(),
            label: "Debug".to_string(),
            params: KindParams::Checkbox(CheckboxParams {
                default_checked: true,
            }),
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "identifier": "Debug Mode",
                "label": "Debug",
                "kind": "checkbox",
                "default_checked": true
            })
        );

        let back: FieldSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_unrecognized_field_json_shape() {
        let field = FieldSpec {
            identifier: "Volume".to_string(),
            label: "Volume".to_string(),
            params: KindParams::Unrecognized,
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["kind"], "unrecognized");
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic {
            section_name: "Volume".to_string(),
            type_name: "slider".to_string(),
            message: "unknown control type".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "[Volume] unknown control type 'slider'"
        );
    }
}
