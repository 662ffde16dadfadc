use delauncher_core::init_logging;

mod app;
pub(crate) mod color;
mod commands;
mod table;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Handle --no-color before any output
    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    // Logs stay off unless -v is given
    init_logging(!matches.get_flag("verbose"));

    // Handlers report their own failures on stderr.
    if commands::run_command(&matches).is_err() {
        std::process::exit(1);
    }
}
