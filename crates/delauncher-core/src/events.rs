//! Application lifecycle events shared by every front end.

use tracing::{error, info, warn};

use crate::errors::DelauncherError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an application error, as a warning when the user caused it.
pub fn log_app_error(error: &dyn DelauncherError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error_message = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error
        );
    }
}
