//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! internal flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use delauncher_core::FieldKind;

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

/// Type-safe RGB color with compile-time hex-to-component conversion.
#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const ACCENT: Rgb = Rgb::from_hex(0x7CB4C8); // Identifiers
const SUCCESS: Rgb = Rgb::from_hex(0x6B8F5E);
const WARNING: Rgb = Rgb::from_hex(0xC49A5C);
const KIND: Rgb = Rgb::from_hex(0xA088B0); // Field kinds
const MUTED: Rgb = Rgb::from_hex(0x5C6370); // Borders, hints

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

/// Field identifiers and other primary values.
pub fn accent(text: &str) -> String {
    paint(text, ACCENT)
}

pub fn success(text: &str) -> String {
    paint(text, SUCCESS)
}

pub fn warning(text: &str) -> String {
    paint(text, WARNING)
}

pub fn muted(text: &str) -> String {
    paint(text, MUTED)
}

/// Bold bright text (headers).
pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Color a field kind label; unrecognized kinds stand out as warnings.
pub fn kind(text: &str, kind: FieldKind) -> String {
    match kind {
        FieldKind::Unrecognized => warning(text),
        FieldKind::Checkbox | FieldKind::Dropdown => paint(text, KIND),
    }
}
