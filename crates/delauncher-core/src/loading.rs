//! Launcher file resolution and loading.
//!
//! # Config Path Resolution
//!
//! The launcher file is looked up in the following order (first match wins):
//! 1. **Explicit path** - `--config <path>` on the command line
//! 2. **Environment** - `$DELAUNCHER_CONFIG`, when set and non-empty
//! 3. **Working directory** - `./delauncher.ini`

use std::fs;
use std::path::{Path, PathBuf};

use delauncher_ini::{IniError, IniTable};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::LoadError;
use crate::fields::{Diagnostic, FieldSpec, compile};
use crate::window::{WindowSpec, resolve_window};

pub const DEFAULT_CONFIG_FILENAME: &str = "delauncher.ini";

/// Environment variable overriding the default config location.
pub const CONFIG_ENV_VAR: &str = "DELAUNCHER_CONFIG";

/// Everything a renderer needs to build the launcher window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Launcher {
    pub window: WindowSpec,
    pub fields: Vec<FieldSpec>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Launcher {
    /// Resolve the window and compile the fields of an already parsed table.
    pub fn from_table(table: &IniTable) -> Self {
        let window = resolve_window(table);
        let compiled = compile(table);
        Self {
            window,
            fields: compiled.fields,
            diagnostics: compiled.diagnostics,
        }
    }

    /// Tokenize `text` and build the launcher from it.
    pub fn parse(text: &str) -> Result<Self, IniError> {
        Ok(Self::from_table(&delauncher_ini::parse(text)?))
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Pick the launcher file to load.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CONFIG_FILENAME),
    }
}

/// Read and compile the launcher file at `path`.
///
/// # Errors
///
/// Returns `LoadError::ConfigNotFound` if the file does not exist,
/// `LoadError::Io` for any other read failure and `LoadError::Parse` when
/// the text cannot be tokenized. Unknown control types and bad values are
/// diagnostics, not errors.
pub fn load_launcher(path: &Path) -> Result<Launcher, LoadError> {
    debug!(event = "core.config.load_started", path = %path.display());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let launcher = Launcher::parse(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        event = "core.config.load_completed",
        path = %path.display(),
        fields = launcher.fields.len(),
        diagnostics = launcher.diagnostics.len()
    );

    Ok(launcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{CheckboxParams, DropdownParams, FieldKind, KindParams};
    use std::fs;

    const LAUNCHER: &str = "\
window_title = My Launcher

[Debug Mode]
type = checkbox
default = true

[Log Level]
type = dropdown
values = info,warn,error
default = 1
";

    #[test]
    fn test_launcher_parse_end_to_end() {
        let launcher = Launcher::parse(LAUNCHER).unwrap();

        assert_eq!(
            launcher.window,
            WindowSpec {
                title: "My Launcher".to_string(),
                width: 640,
                height: 320,
            }
        );
        assert!(!launcher.has_diagnostics());
        assert_eq!(launcher.fields.len(), 2);
        assert_eq!(
            launcher.fields[0].params,
            KindParams::Checkbox(CheckboxParams {
                default_checked: true
            })
        );
        assert_eq!(
            launcher.fields[1].params,
            KindParams::Dropdown(DropdownParams {
                choices: vec!["info".into(), "warn".into(), "error".into()],
                default_index: 1,
            })
        );
    }

    #[test]
    fn test_launcher_parse_unknown_kind() {
        let launcher = Launcher::parse("[Volume]\ntype = slider\n").unwrap();
        assert_eq!(launcher.fields.len(), 1);
        assert_eq!(launcher.fields[0].kind(), FieldKind::Unrecognized);
        assert_eq!(launcher.diagnostics.len(), 1);
        assert_eq!(launcher.diagnostics[0].section_name, "Volume");
    }

    #[test]
    fn test_load_launcher_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, LAUNCHER).unwrap();

        let launcher = load_launcher(&path).unwrap();
        assert_eq!(launcher, Launcher::parse(LAUNCHER).unwrap());
    }

    #[test]
    fn test_load_launcher_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.ini");

        let err = load_launcher(&path).unwrap_err();
        assert!(matches!(err, LoadError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("missing.ini"));
    }

    #[test]
    fn test_load_launcher_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, "[Debug Mode]\ntype = checkbox\nlabel").unwrap();

        let err = load_launcher(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILENAME));
    }

    #[test]
    fn test_load_launcher_directory_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_launcher(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_resolve_config_path_explicit_wins() {
        temp_env::with_var(CONFIG_ENV_VAR, Some("/from/env.ini"), || {
            let path = resolve_config_path(Some(Path::new("/explicit.ini")));
            assert_eq!(path, PathBuf::from("/explicit.ini"));
        });
    }

    #[test]
    fn test_resolve_config_path_env() {
        temp_env::with_var(CONFIG_ENV_VAR, Some("/from/env.ini"), || {
            assert_eq!(resolve_config_path(None), PathBuf::from("/from/env.ini"));
        });
    }

    #[test]
    fn test_resolve_config_path_default() {
        temp_env::with_var_unset(CONFIG_ENV_VAR, || {
            assert_eq!(
                resolve_config_path(None),
                PathBuf::from(DEFAULT_CONFIG_FILENAME)
            );
        });
        temp_env::with_var(CONFIG_ENV_VAR, Some(""), || {
            assert_eq!(
                resolve_config_path(None),
                PathBuf::from(DEFAULT_CONFIG_FILENAME)
            );
        });
    }
}
