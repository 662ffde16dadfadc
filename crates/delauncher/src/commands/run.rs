use clap::ArgMatches;
use delauncher_core::{FieldValues, events};
use tracing::{error, info};

use super::helpers::{config_path, load_launcher_or_report, warn_diagnostics};

/// Build the value map handed off by the "Run" action and print it as JSON.
pub fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let assignments: Vec<&String> = matches
        .get_many::<String>("set")
        .map(|values| values.collect())
        .unwrap_or_default();
    let path = config_path(matches);

    info!(
        event = "cli.run_started",
        path = %path.display(),
        overrides = assignments.len()
    );

    let launcher = load_launcher_or_report(&path)?;
    warn_diagnostics(&launcher);

    let mut values = FieldValues::from_fields(&launcher.fields);
    for assignment in assignments {
        if let Err(e) = values.apply_assignment(assignment) {
            eprintln!("Invalid --set value: {}", e);
            error!(
                event = "cli.run_override_failed",
                assignment = %assignment,
                error = %e
            );
            events::log_app_error(&e);
            return Err(e.into());
        }
    }

    println!("{}", serde_json::to_string_pretty(&values)?);

    info!(event = "cli.run_completed", values = values.len());
    Ok(())
}
