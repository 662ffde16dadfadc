use clap::ArgMatches;
use tracing::info;

use crate::table::FieldTable;

use super::helpers::{config_path, load_launcher_or_report, warn_diagnostics};

pub fn handle_fields_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let path = config_path(matches);

    info!(
        event = "cli.fields_started",
        path = %path.display(),
        json_output = json_output
    );

    let launcher = load_launcher_or_report(&path)?;
    warn_diagnostics(&launcher);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&launcher.fields)?);
    } else if launcher.fields.is_empty() {
        println!("No fields defined in {}.", path.display());
    } else {
        FieldTable::new(&launcher.fields).print_table(&launcher.fields);
    }

    info!(
        event = "cli.fields_completed",
        count = launcher.fields.len()
    );
    Ok(())
}
