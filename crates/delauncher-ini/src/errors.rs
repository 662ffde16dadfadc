/// Launcher text that `rust-ini` refuses to tokenize.
#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("Malformed launcher file at {0}")]
    Syntax(#[from] ini::ParseError),
}
