use clap::ArgMatches;
use delauncher_core::events;
use tracing::error;

mod check;
mod fields;
mod helpers;
mod run;
mod window;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches),
        Some(("fields", sub_matches)) => fields::handle_fields_command(sub_matches),
        Some(("window", sub_matches)) => window::handle_window_command(sub_matches),
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
