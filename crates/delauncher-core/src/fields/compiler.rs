//! Compile launcher sections into field specs.

use delauncher_ini::{IniTable, Section};
use tracing::{debug, info, warn};

use super::choices::parse_choices;
use super::coercion::{get_boolean, get_integer, get_string};
use super::registry::{self, supported_types_string};
use super::types::{
    CheckboxParams, CompiledFields, Diagnostic, DropdownParams, FieldKind, FieldSpec, KindParams,
};
use super::{KEY_DEFAULT, KEY_LABEL, KEY_TYPE, KEY_VALUES};

/// Message attached to every unresolved-type diagnostic.
pub const UNKNOWN_TYPE_MESSAGE: &str = "unknown control type";

/// Compile every non-global section of `table`, in order.
///
/// Never fails. Missing or malformed properties fall back to defaults; a
/// section whose `type` does not resolve still yields a
/// [`KindParams::Unrecognized`] field plus one [`Diagnostic`].
pub fn compile(table: &IniTable) -> CompiledFields {
    debug!(
        event = "core.fields.compile_started",
        sections = table.section_count()
    );

    let mut compiled = CompiledFields::default();

    for section in table.named_sections() {
        let (field, diagnostic) = compile_section(section);

        debug!(
            event = "core.fields.field_compiled",
            identifier = %field.identifier,
            kind = %field.kind()
        );

        if let Some(diagnostic) = diagnostic {
            warn!(
                event = "core.fields.unknown_type",
                section = %diagnostic.section_name,
                type_name = %diagnostic.type_name,
                supported_types = %supported_types_string()
            );
            compiled.diagnostics.push(diagnostic);
        }

        compiled.fields.push(field);
    }

    info!(
        event = "core.fields.compile_completed",
        fields = compiled.fields.len(),
        diagnostics = compiled.diagnostics.len()
    );

    compiled
}

fn compile_section(section: &Section) -> (FieldSpec, Option<Diagnostic>) {
    let identifier = section.name().to_string();
    let type_name = get_string(section, KEY_TYPE, "");
    let label = get_string(section, KEY_LABEL, &identifier);

    let mut diagnostic = None;
    let params = match registry::resolve(&type_name) {
        FieldKind::Checkbox => KindParams::Checkbox(CheckboxParams {
            default_checked: get_boolean(section, KEY_DEFAULT, false),
        }),
        FieldKind::Dropdown => KindParams::Dropdown(DropdownParams {
            choices: parse_choices(&get_string(section, KEY_VALUES, "")),
            default_index: get_integer(section, KEY_DEFAULT, 0),
        }),
        FieldKind::Unrecognized => {
            diagnostic = Some(Diagnostic {
                section_name: identifier.clone(),
                type_name,
                message: UNKNOWN_TYPE_MESSAGE.to_string(),
            });
            KindParams::Unrecognized
        }
    };

    (
        FieldSpec {
            identifier,
            label,
            params,
        },
        diagnostic,
    )
}
