use clap::ArgMatches;
use delauncher_core::Diagnostic;
use delauncher_core::fields::registry::supported_types_string;
use serde::Serialize;
use tracing::{error, info};

use crate::color;

use super::helpers::{config_path, load_launcher_or_report};

#[derive(Serialize)]
struct CheckReport<'a> {
    path: String,
    fields: usize,
    diagnostics: &'a [Diagnostic],
}

pub fn handle_check_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let strict = matches.get_flag("strict");
    let path = config_path(matches);

    info!(
        event = "cli.check_started",
        path = %path.display(),
        strict = strict,
        json_output = json_output
    );

    let launcher = load_launcher_or_report(&path)?;

    if json_output {
        let report = CheckReport {
            path: path.display().to_string(),
            fields: launcher.fields.len(),
            diagnostics: &launcher.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for diagnostic in &launcher.diagnostics {
            println!("{} {}", color::warning("⚠"), diagnostic);
        }
        if launcher.has_diagnostics() {
            println!(
                "{}",
                color::muted(&format!(
                    "Supported control types: {}",
                    supported_types_string()
                ))
            );
        }

        let summary = format!(
            "{} field(s) compiled from {}, {} diagnostic(s)",
            launcher.fields.len(),
            path.display(),
            launcher.diagnostics.len()
        );
        if launcher.has_diagnostics() {
            println!("{}", color::warning(&summary));
        } else {
            println!("{} {}", color::success("✓"), summary);
        }
    }

    if strict && launcher.has_diagnostics() {
        error!(
            event = "cli.check_failed",
            diagnostics = launcher.diagnostics.len()
        );
        if !json_output {
            eprintln!("Check failed: diagnostics reported in strict mode");
        }
        return Err("diagnostics reported in strict mode".into());
    }

    info!(
        event = "cli.check_completed",
        fields = launcher.fields.len(),
        diagnostics = launcher.diagnostics.len()
    );
    Ok(())
}
