use unicode_width::UnicodeWidthStr;

use delauncher_core::{FieldSpec, KindParams};

use crate::color;

/// Box-drawn table of compiled fields.
pub struct FieldTable {
    identifier_width: usize,
    label_width: usize,
    kind_width: usize,
    default_width: usize,
    choices_width: usize,
}

impl FieldTable {
    pub fn new(fields: &[FieldSpec]) -> Self {
        // Minimum widths = header label lengths
        let mut identifier_width = "ID".len();
        let mut label_width = "Label".len();
        let mut kind_width = "Kind".len();
        let mut default_width = "Default".len();
        let mut choices_width = "Choices".len();

        for field in fields {
            identifier_width = identifier_width.max(display_width(&field.identifier));
            label_width = label_width.max(display_width(&field.label));
            kind_width = kind_width.max(display_width(field.kind().as_str()));
            default_width = default_width.max(display_width(&default_display(field)));
            choices_width = choices_width.max(display_width(&choices_display(field)));
        }

        Self {
            identifier_width,
            label_width,
            kind_width,
            default_width,
            choices_width,
        }
    }

    pub fn print_table(&self, fields: &[FieldSpec]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.header_row());
        println!("{}", self.border('├', '┼', '┤'));
        for field in fields {
            self.print_row(field);
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn print_row(&self, field: &FieldSpec) {
        let sep = color::muted("│");
        println!(
            "{sep} {} {sep} {} {sep} {} {sep} {} {sep} {} {sep}",
            color::accent(&pad(&field.identifier, self.identifier_width)),
            pad(&field.label, self.label_width),
            color::kind(&pad(field.kind().as_str(), self.kind_width), field.kind()),
            pad(&default_display(field), self.default_width),
            pad(&choices_display(field), self.choices_width),
        );
    }

    fn header_row(&self) -> String {
        let sep = color::muted("│");
        format!(
            "{sep} {} {sep} {} {sep} {} {sep} {} {sep} {} {sep}",
            color::bold(&pad("ID", self.identifier_width)),
            color::bold(&pad("Label", self.label_width)),
            color::bold(&pad("Kind", self.kind_width)),
            color::bold(&pad("Default", self.default_width)),
            color::bold(&pad("Choices", self.choices_width)),
        )
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = [
            self.identifier_width,
            self.label_width,
            self.kind_width,
            self.default_width,
            self.choices_width,
        ]
        .iter()
        .map(|width| "─".repeat(width + 2))
        .collect();
        color::muted(&format!(
            "{left}{}{right}",
            segments.join(&mid.to_string())
        ))
    }
}

/// Human-readable initial value of a field.
fn default_display(field: &FieldSpec) -> String {
    match &field.params {
        KindParams::Checkbox(p) if p.default_checked => "checked".to_string(),
        KindParams::Checkbox(_) => "unchecked".to_string(),
        KindParams::Dropdown(p) => match p.selected_choice() {
            Some(choice) => choice.to_string(),
            None => format!("#{} (out of range)", p.default_index),
        },
        KindParams::Unrecognized => "-".to_string(),
    }
}

fn choices_display(field: &FieldSpec) -> String {
    match &field.params {
        KindParams::Dropdown(p) => p.choices.join(", "),
        _ => "-".to_string(),
    }
}

/// Compute the terminal display width of a string.
///
/// Wide characters (CJK, emoji) count as 2 columns.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad a string to a minimum display width without truncating.
pub(crate) fn pad(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(min_width - width))
    }
}
