use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("delauncher")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile launcher INI files into typed field models")
        .long_about("delauncher reads a sectioned INI file describing labeled input fields (checkboxes, dropdowns) and compiles it into an ordered field model. Unknown control types never abort loading: they are reported as diagnostics and kept as placeholders.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Launcher file to load (default: $DELAUNCHER_CONFIG, then ./delauncher.ini)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
