use std::path::{Path, PathBuf};

use clap::ArgMatches;
use delauncher_core::fields::registry::supported_types_string;
use delauncher_core::{Launcher, events, load_launcher, resolve_config_path};
use tracing::{error, warn};

/// Resolve the launcher file from `--config` / `$DELAUNCHER_CONFIG`.
pub(crate) fn config_path(matches: &ArgMatches) -> PathBuf {
    let explicit = matches.get_one::<String>("config").map(Path::new);
    resolve_config_path(explicit)
}

/// Load the launcher file, printing a user-facing message on failure.
pub(crate) fn load_launcher_or_report(
    path: &Path,
) -> Result<Launcher, Box<dyn std::error::Error>> {
    match load_launcher(path) {
        Ok(launcher) => Ok(launcher),
        Err(e) => {
            eprintln!("Failed to load launcher: {}", e);
            eprintln!(
                "Tip: Pass --config <path> or set DELAUNCHER_CONFIG to point at your launcher file."
            );
            error!(
                event = "cli.config.load_failed",
                path = %path.display(),
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Print diagnostics as warnings on stderr, keeping stdout for data.
pub(crate) fn warn_diagnostics(launcher: &Launcher) {
    for diagnostic in &launcher.diagnostics {
        eprintln!("Warning: {}", diagnostic);
        warn!(
            event = "cli.diagnostic_reported",
            section = %diagnostic.section_name,
            type_name = %diagnostic.type_name
        );
    }
    if launcher.has_diagnostics() {
        eprintln!("Supported control types: {}", supported_types_string());
    }
}
