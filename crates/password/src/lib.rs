#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Password generation from character classes with a
//! heuristic strength rating.
//!
//! The two core operations are [`generate`] and [`score`];
//! both take the length and enabled classes explicitly and
//! hold no state between calls. [`PasswordSession`] threads
//! caller state between interactions.

mod charset;
mod error;
pub mod generator;
pub mod session;
mod strength;

pub use charset::{
    CharacterClass, ClassSet, DIGITS, ROMAN_LOWER, ROMAN_UPPER, SYMBOLS,
};
pub use error::Error;
pub use generator::{
    generate, generate_with, measure_entropy, shuffle, GenerationRequest,
    PasswordResult, RandomIndex,
};
pub use session::{LengthRange, Outcome, PasswordSession, PLACEHOLDER};
pub use strength::{score, StrengthLevel, StrengthResult, Tone};

pub use secrecy;
pub use zxcvbn;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
