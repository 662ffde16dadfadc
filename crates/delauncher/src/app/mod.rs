mod global;
mod launcher;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(launcher::check_command())
        .subcommand(launcher::fields_command())
        .subcommand(launcher::window_command())
        .subcommand(launcher::run_command())
}
