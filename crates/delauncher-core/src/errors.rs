use std::error::Error;
use std::path::PathBuf;

use delauncher_ini::IniError;

/// Base trait for all application errors
pub trait DelauncherError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Failure to obtain the launcher file.
///
/// Only raised before compilation starts; compiling a table never fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Config file not found: '{}'", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Could not read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: IniError,
    },
}

impl DelauncherError for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            LoadError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            LoadError::Io { .. } => "CONFIG_IO_ERROR",
            LoadError::Parse { .. } => "CONFIG_PARSE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            LoadError::ConfigNotFound { .. } | LoadError::Parse { .. }
        )
    }
}

/// A user-entered value that does not fit the field it targets.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Unknown field '{identifier}'")]
    UnknownField { identifier: String },

    #[error("Field '{identifier}' has an unknown control type and cannot take a value")]
    NotEditable { identifier: String },

    #[error("Invalid value '{value}' for checkbox '{identifier}'. Expected 'true' or 'false'")]
    InvalidBoolean { identifier: String, value: String },

    #[error("Invalid choice '{value}' for dropdown '{identifier}'. Valid choices: {choices}")]
    InvalidChoice {
        identifier: String,
        value: String,
        choices: String,
    },

    #[error("Invalid assignment '{assignment}'. Expected ID=VALUE")]
    MalformedAssignment { assignment: String },
}

impl DelauncherError for ValueError {
    fn error_code(&self) -> &'static str {
        match self {
            ValueError::UnknownField { .. } => "UNKNOWN_FIELD",
            ValueError::NotEditable { .. } => "FIELD_NOT_EDITABLE",
            ValueError::InvalidBoolean { .. } => "INVALID_BOOLEAN",
            ValueError::InvalidChoice { .. } => "INVALID_CHOICE",
            ValueError::MalformedAssignment { .. } => "MALFORMED_ASSIGNMENT",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_not_found_display() {
        let error = LoadError::ConfigNotFound {
            path: PathBuf::from("delauncher.ini"),
        };
        assert_eq!(error.to_string(), "Config file not found: 'delauncher.ini'");
        assert_eq!(error.error_code(), "CONFIG_NOT_FOUND");
        assert!(error.is_user_error());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = LoadError::Io {
            path: PathBuf::from("/etc/launcher.ini"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("/etc/launcher.ini"));
        assert!(error.to_string().contains("denied"));
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_parse_error_is_user_error() {
        let source = delauncher_ini::parse("[a]\nlabel").unwrap_err();
        let error = LoadError::Parse {
            path: PathBuf::from("delauncher.ini"),
            source,
        };
        assert!(
            error
                .to_string()
                .starts_with("Could not parse config file 'delauncher.ini': ")
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_choice_display() {
        let error = ValueError::InvalidChoice {
            identifier: "Log Level".to_string(),
            value: "trace".to_string(),
            choices: "info, warn, error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid choice 'trace' for dropdown 'Log Level'. Valid choices: info, warn, error"
        );
        assert_eq!(error.error_code(), "INVALID_CHOICE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LoadError>();
        assert_send_sync::<ValueError>();
    }
}
