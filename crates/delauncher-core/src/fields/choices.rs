//! Comma-separated choice lists.

/// Split `raw` on `,` into owned choices.
///
/// Segments are kept byte-for-byte: no trimming, no dedup. An empty string
/// yields one empty choice, and leading, trailing or doubled commas yield
/// empty entries.
pub fn parse_choices(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
