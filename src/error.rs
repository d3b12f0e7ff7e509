use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoundexError {
    /// The input is not a textual value. The encoders themselves only accept
    /// `&str`, so this is raised at the process boundary, e.g. for a
    /// non-UTF-8 command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgumentType(String),

    /// The input is textual but not an encodable name: empty, or containing
    /// a character outside the letter-code table.
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, SoundexError>;
