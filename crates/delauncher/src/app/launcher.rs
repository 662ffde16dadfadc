use clap::{Arg, ArgAction, Command};

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

pub fn check_command() -> Command {
    Command::new("check")
        .about("Compile the launcher file and report diagnostics")
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with an error when any diagnostic is reported")
                .action(ArgAction::SetTrue),
        )
        .arg(json_arg())
}

pub fn fields_command() -> Command {
    Command::new("fields")
        .about("List compiled fields in display order")
        .arg(json_arg())
}

pub fn window_command() -> Command {
    Command::new("window")
        .about("Show the resolved window settings")
        .arg(json_arg())
}

pub fn run_command() -> Command {
    Command::new("run")
        .about("Collect field values and print them as JSON")
        .long_about("Starts from each field's default, applies --set overrides, and prints the resulting identifier-to-value map as JSON. Nothing is launched.")
        .arg(
            Arg::new("set")
                .long("set")
                .short('s')
                .value_name("ID=VALUE")
                .help("Override a field value (checkbox: true/false, dropdown: choice or index)")
                .action(ArgAction::Append),
        )
}
