#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Native system clipboard that can clear copied text
//! after a timeout.
mod error;
mod native;

pub use error::Error;
pub use native::{Clipboard, DEFAULT_TIMEOUT};

/// Result type for the clipboard library.
pub type Result<T> = std::result::Result<T, Error>;
