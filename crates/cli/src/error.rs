use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    #[error("length {length} is outside the range {min}..={max}")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("count must be at least one")]
    InvalidCount,

    #[error(transparent)]
    Password(#[from] passgen_password::Error),

    #[error(transparent)]
    Clipboard(#[from] passgen_clipboard::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error(transparent)]
    ShellWords(#[from] shell_words::ParseError),
}
