//! Character classes and the sets of classes enabled for generation.
use crate::Error;
use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Uppercase roman letters.
pub const ROMAN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase roman letters.
pub const ROMAN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
/// Numerical digits.
pub const DIGITS: &str = "0123456789";
/// Punctuation symbols.
pub const SYMBOLS: &str = "~!@#$%^&*()_-+={[}]|:;<,>.?/";

/// Category of characters with a fixed alphabet.
///
/// Declaration order is the canonical order used when
/// iterating a [`ClassSet`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sequence,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// Uppercase letters.
    #[serde(alias = "upper")]
    Uppercase,
    /// Lowercase letters.
    #[serde(alias = "lower")]
    Lowercase,
    /// Digits.
    #[serde(alias = "digits", alias = "number", alias = "numbers")]
    Digit,
    /// Symbols.
    #[serde(alias = "symbols")]
    Symbol,
}

impl CharacterClass {
    /// Alphabet for this class.
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            Self::Uppercase => ROMAN_UPPER.as_bytes(),
            Self::Lowercase => ROMAN_LOWER.as_bytes(),
            Self::Digit => DIGITS.as_bytes(),
            Self::Symbol => SYMBOLS.as_bytes(),
        }
    }

    /// Determine if a character belongs to this class.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// Find the class a character belongs to.
    pub fn of(c: char) -> Option<Self> {
        all::<Self>().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Uppercase => "uppercase",
                Self::Lowercase => "lowercase",
                Self::Digit => "digit",
                Self::Symbol => "symbol",
            }
        )
    }
}

impl FromStr for CharacterClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "upper" | "uppercase" => Ok(Self::Uppercase),
            "l" | "lower" | "lowercase" => Ok(Self::Lowercase),
            "d" | "n" | "digit" | "digits" | "number" | "numbers" => {
                Ok(Self::Digit)
            }
            "s" | "symbol" | "symbols" => Ok(Self::Symbol),
            _ => Err(Error::UnknownClass(s.to_owned())),
        }
    }
}

/// Set of enabled character classes.
#[derive(
    Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClassSet(BTreeSet<CharacterClass>);

impl ClassSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set with every character class enabled.
    pub fn all() -> Self {
        Self(all::<CharacterClass>().collect())
    }

    /// Number of enabled classes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if no classes are enabled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Determine if a class is enabled.
    pub fn contains(&self, class: &CharacterClass) -> bool {
        self.0.contains(class)
    }

    /// Enable a class.
    pub fn insert(&mut self, class: CharacterClass) -> bool {
        self.0.insert(class)
    }

    /// Disable a class.
    pub fn remove(&mut self, class: &CharacterClass) -> bool {
        self.0.remove(class)
    }

    /// Enable or disable a class.
    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(&class);
        }
    }

    /// Flip a class, returns whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        if self.remove(&class) {
            false
        } else {
            self.insert(class)
        }
    }

    /// Iterate the enabled classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterClass> {
        self.0.iter()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<T: IntoIterator<Item = CharacterClass>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[CharacterClass; N]> for ClassSet {
    fn from(value: [CharacterClass; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = &'a CharacterClass;
    type IntoIter = std::collections::btree_set::Iter<'a, CharacterClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> =
            self.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}

impl FromStr for ClassSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::new();
        for name in s.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if name.eq_ignore_ascii_case("all") {
                set.0.extend(all::<CharacterClass>());
            } else {
                set.insert(name.parse()?);
            }
        }
        Ok(set)
    }
}
