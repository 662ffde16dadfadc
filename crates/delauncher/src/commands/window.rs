use clap::ArgMatches;
use tracing::info;

use crate::color;

use super::helpers::{config_path, load_launcher_or_report, warn_diagnostics};

pub fn handle_window_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let path = config_path(matches);

    info!(
        event = "cli.window_started",
        path = %path.display(),
        json_output = json_output
    );

    let launcher = load_launcher_or_report(&path)?;
    warn_diagnostics(&launcher);
    let window = &launcher.window;

    if json_output {
        println!("{}", serde_json::to_string_pretty(window)?);
    } else {
        println!("Title:  {}", color::accent(&window.title));
        println!("Size:   {}x{}", window.width, window.height);
    }

    info!(event = "cli.window_completed");
    Ok(())
}
