//! Window settings from the global section.

use delauncher_ini::IniTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fields::coercion::{get_integer, get_string};

pub const KEY_WINDOW_TITLE: &str = "window_title";
pub const KEY_WINDOW_WIDTH: &str = "window_width";
pub const KEY_WINDOW_HEIGHT: &str = "window_height";

pub const DEFAULT_WINDOW_TITLE: &str = "Default";
pub const DEFAULT_WINDOW_WIDTH: i64 = 640;
pub const DEFAULT_WINDOW_HEIGHT: i64 = 320;

/// Top-level window settings for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub title: String,
    pub width: i64,
    pub height: i64,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Read the window settings from the global section, defaulting each one.
///
/// Sizes are taken as written; non-positive values are not rejected here.
pub fn resolve_window(table: &IniTable) -> WindowSpec {
    let global = table.global();
    let window = WindowSpec {
        title: get_string(global, KEY_WINDOW_TITLE, DEFAULT_WINDOW_TITLE),
        width: get_integer(global, KEY_WINDOW_WIDTH, DEFAULT_WINDOW_WIDTH),
        height: get_integer(global, KEY_WINDOW_HEIGHT, DEFAULT_WINDOW_HEIGHT),
    };

    debug!(
        event = "core.window.resolved",
        title = %window.title,
        width = window.width,
        height = window.height
    );

    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use delauncher_ini::parse;

    #[test]
    fn test_resolve_window_defaults() {
        let window = resolve_window(&IniTable::new());
        assert_eq!(
            window,
            WindowSpec {
                title: "Default".to_string(),
                width: 640,
                height: 320,
            }
        );
        assert_eq!(window, WindowSpec::default());
    }

    #[test]
    fn test_resolve_window_title_only() {
        let window = resolve_window(&parse("window_title = My Launcher\n").unwrap());
        assert_eq!(window.title, "My Launcher");
        assert_eq!(window.width, 640);
        assert_eq!(window.height, 320);
    }

    #[test]
    fn test_resolve_window_all_set() {
        let table = parse(
            "window_title = Tools\nwindow_width = 1024\nwindow_height = 768px\n",
        )
        .unwrap();
        let window = resolve_window(&table);
        assert_eq!(
            window,
            WindowSpec {
                title: "Tools".to_string(),
                width: 1024,
                height: 768,
            }
        );
    }

    #[test]
    fn test_resolve_window_ignores_named_sections() {
        let table = parse("[Field]\nwindow_title = Nope\nwindow_width = 10\n").unwrap();
        let window = resolve_window(&table);
        assert_eq!(window, WindowSpec::default());
    }

    #[test]
    fn test_resolve_window_malformed_size_falls_back() {
        let window = resolve_window(&parse("window_width = wide\n").unwrap());
        assert_eq!(window.width, 640);
    }
}
