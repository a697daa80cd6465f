//! Utility for generating random passwords.
use crate::{
    csprng, score, CharacterClass, ClassSet, Error, Result, StrengthResult,
};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{zxcvbn, Entropy};

/// Default password length.
pub const DEFAULT_LENGTH: usize = 10;

/// Source of uniformly distributed indices.
///
/// Every [`rand::Rng`] is a source; tests may inject a seeded
/// generator for reproducible output.
pub trait RandomIndex {
    /// Random integer in the half-open range `[min, max)`.
    fn random_index(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomIndex for R {
    fn random_index(&mut self, min: usize, max: usize) -> usize {
        self.gen_range(min..max)
    }
}

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Generate a password using the default random source.
///
/// When `length` is less than the number of enabled classes
/// the password is as long as the number of classes.
pub fn generate(length: usize, classes: &ClassSet) -> Result<SecretString> {
    generate_with(&mut csprng(), length, classes)
}

/// Generate a password drawing from the given random source.
///
/// One character from each enabled class is placed first in
/// canonical class order, remaining positions pick a class
/// and then a character uniformly, and the whole sequence is
/// shuffled afterwards.
pub fn generate_with<R: RandomIndex + ?Sized>(
    rng: &mut R,
    length: usize,
    classes: &ClassSet,
) -> Result<SecretString> {
    if classes.is_empty() {
        return Err(Error::NoClassSelected);
    }

    let enabled: Vec<CharacterClass> = classes.iter().copied().collect();
    let length = length.max(enabled.len());

    let mut characters = Vec::with_capacity(length);
    for class in &enabled {
        characters.push(pick(rng, class));
    }
    for _ in enabled.len()..length {
        let class = &enabled[rng.random_index(0, enabled.len())];
        characters.push(pick(rng, class));
    }

    shuffle(rng, &mut characters);
    Ok(SecretString::from(characters.into_iter().collect::<String>()))
}

/// Fisher-Yates shuffle, scanning from the last index to the first.
pub fn shuffle<T, R: RandomIndex + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.random_index(0, i + 1);
        items.swap(i, j);
    }
}

fn pick<R: RandomIndex + ?Sized>(rng: &mut R, class: &CharacterClass) -> char {
    let alphabet = class.alphabet();
    char::from(alphabet[rng.random_index(0, alphabet.len())])
}

/// Generated password result.
#[derive(Debug)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// Heuristic strength of the request.
    pub strength: StrengthResult,
    /// The computed entropy for the password.
    pub entropy: Entropy,
}

/// Length and character classes for password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Requested length.
    pub length: usize,
    /// Enabled character classes.
    pub classes: ClassSet,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::from([
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
            ]),
        }
    }
}

impl GenerationRequest {
    /// Create a new request.
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    /// Length actually generated, never less than the
    /// number of enabled classes.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.classes.len())
    }

    /// Heuristic strength for this request.
    pub fn strength(&self) -> StrengthResult {
        score(self.length, &self.classes)
    }

    /// Generate a random password.
    pub fn one(&self) -> Result<PasswordResult> {
        self.one_with(&mut csprng())
    }

    /// Generate a random password from the given source.
    pub fn one_with<R: RandomIndex + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PasswordResult> {
        let password = generate_with(rng, self.length, &self.classes)?;
        let entropy = measure_entropy(password.expose_secret(), &[]);
        Ok(PasswordResult {
            password,
            strength: self.strength(),
            entropy,
        })
    }

    /// Generate multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let rng = &mut csprng();
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one_with(rng)?);
        }
        Ok(results)
    }
}
