//! Caller owned generator state.
//!
//! A session holds the current length, the enabled classes and
//! the last generated password. Every change regenerates the
//! password and rates the new state, the same cycle a slider
//! move or checkbox toggle triggers in a graphical front end.
use crate::{
    csprng, generate_with, CharacterClass, Error, GenerationRequest,
    RandomIndex, Result, StrengthResult,
};
use enum_iterator::cardinality;
use secrecy::{ExposeSecret, SecretString};

/// Text shown in place of a password when no class is enabled.
pub const PLACEHOLDER: &str = "Select at least one option";

/// Default minimum length.
pub const DEFAULT_MIN_LENGTH: usize = 1;
/// Default maximum length.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Inclusive bounds for the selectable length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl LengthRange {
    /// Create a length range.
    ///
    /// The minimum must be positive and less than the maximum,
    /// and the maximum must fit one character of every class so
    /// a raised length never leaves the range.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min >= max || max < cardinality::<CharacterClass>() {
            return Err(Error::InvalidRange(min, max));
        }
        Ok(Self { min, max })
    }

    /// Smallest selectable length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest selectable length.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Determine if a length is within bounds.
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    /// Clamp a length into bounds.
    pub fn clamp(&self, length: usize) -> usize {
        length.clamp(self.min, self.max)
    }

    /// Fraction of the slider track that is filled for a length.
    pub fn fill_fraction(&self, length: usize) -> f64 {
        let length = self.clamp(length);
        (length - self.min) as f64 / (self.max - self.min) as f64
    }
}

/// Result of a session interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Length after any adjustment, callers should
    /// display this value.
    pub length: usize,
    /// Whether a password was generated.
    pub generated: bool,
    /// Strength of the current state.
    pub strength: StrengthResult,
}

/// Generator state threaded between interactions.
#[derive(Debug)]
pub struct PasswordSession {
    request: GenerationRequest,
    range: LengthRange,
    password: Option<SecretString>,
}

impl Default for PasswordSession {
    fn default() -> Self {
        Self::new(Default::default(), Default::default())
    }
}

impl PasswordSession {
    /// Create a session, no password is generated until
    /// the first interaction.
    pub fn new(mut request: GenerationRequest, range: LengthRange) -> Self {
        request.length = range.clamp(request.length);
        Self {
            request,
            range,
            password: None,
        }
    }

    /// Current request.
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Length bounds.
    pub fn range(&self) -> &LengthRange {
        &self.range
    }

    /// Last generated password.
    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    /// Text to display for the current state.
    pub fn display(&self) -> &str {
        self.password
            .as_ref()
            .map(|p| p.expose_secret())
            .unwrap_or(PLACEHOLDER)
    }

    /// Outcome for the current state without regenerating.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            length: self.request.length,
            generated: self.password.is_some(),
            strength: self.request.strength(),
        }
    }

    /// Change the length and regenerate.
    pub fn set_length(&mut self, length: usize) -> Outcome {
        self.request.length = self.range.clamp(length);
        self.refresh()
    }

    /// Enable or disable a class and regenerate.
    pub fn set_class(
        &mut self,
        class: CharacterClass,
        enabled: bool,
    ) -> Outcome {
        self.request.classes.set(class, enabled);
        self.refresh()
    }

    /// Flip a class and regenerate.
    pub fn toggle_class(&mut self, class: CharacterClass) -> Outcome {
        self.request.classes.toggle(class);
        self.refresh()
    }

    /// Regenerate with the current state.
    pub fn refresh(&mut self) -> Outcome {
        self.refresh_with(&mut csprng())
    }

    /// Regenerate drawing from the given random source.
    pub fn refresh_with<R: RandomIndex + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Outcome {
        // Reflect the raised length back into the state
        self.request.length = self.request.effective_length();

        let generated =
            match generate_with(rng, self.request.length, &self.request.classes)
            {
                Ok(password) => {
                    self.password = Some(password);
                    true
                }
                Err(e) => {
                    tracing::debug!(error = %e, "session::no_password");
                    self.password = None;
                    false
                }
            };

        let strength = self.request.strength();
        tracing::debug!(
            length = self.request.length,
            classes = %self.request.classes,
            score = strength.score,
            "session::refresh"
        );

        Outcome {
            length: self.request.length,
            generated,
            strength,
        }
    }
}
