//! Heuristic strength rating from class diversity and length.
use crate::ClassSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length that earns the full length bonus.
pub const LONG_LENGTH: usize = 12;
/// Length that earns the partial length bonus.
pub const MEDIUM_LENGTH: usize = 8;

/// Qualitative strength level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    /// Very weak.
    VeryWeak,
    /// Weak.
    Weak,
    /// Medium.
    Medium,
    /// Strong.
    Strong,
    /// Very strong.
    VeryStrong,
}

impl StrengthLevel {
    /// Level for a total score, thresholds evaluated highest first.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 5 => Self::VeryStrong,
            4 => Self::Strong,
            3 => Self::Medium,
            2 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    /// Fraction of the indicator to fill.
    pub fn display_fraction(&self) -> f64 {
        match self {
            Self::VeryStrong => 1.0,
            Self::Strong => 0.8,
            Self::Medium => 0.6,
            Self::Weak => 0.4,
            Self::VeryWeak => 0.2,
        }
    }

    /// Tone used to color the indicator.
    pub fn tone(&self) -> Tone {
        match self {
            Self::VeryStrong | Self::Strong => Tone::Success,
            Self::Medium => Tone::Warning,
            Self::Weak | Self::VeryWeak => Tone::Danger,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::VeryWeak => "Very Weak",
                Self::Weak => "Weak",
                Self::Medium => "Medium",
                Self::Strong => "Strong",
                Self::VeryStrong => "Very Strong",
            }
        )
    }
}

/// Indicator tone for a strength level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Acceptable strength.
    Success,
    /// Borderline strength.
    Warning,
    /// Insufficient strength.
    Danger,
}

/// Strength rating for a length and set of classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthResult {
    /// Qualitative level.
    pub level: StrengthLevel,
    /// Total score in the range 0 to 6.
    pub score: u8,
    /// Fraction of the indicator to fill.
    pub display_fraction: f64,
}

/// Rate the strength of passwords generated with the given
/// length and classes.
///
/// One point per enabled class, plus two points when the length
/// is at least twelve or one point when it is at least eight.
pub fn score(length: usize, classes: &ClassSet) -> StrengthResult {
    let base = classes.len() as u8;
    let bonus = if length >= LONG_LENGTH {
        2
    } else if length >= MEDIUM_LENGTH {
        1
    } else {
        0
    };
    let score = base + bonus;
    let level = StrengthLevel::from_score(score);
    StrengthResult {
        level,
        score,
        display_fraction: level.display_fraction(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::CharacterClass;

    #[test]
    fn strength_medium() {
        let classes = ClassSet::from([
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
        ]);
        let result = score(10, &classes);
        assert_eq!(3, result.score);
        assert_eq!(StrengthLevel::Medium, result.level);
        assert_eq!(0.6, result.display_fraction);
        assert_eq!(Tone::Warning, result.level.tone());
    }

    #[test]
    fn strength_very_strong() {
        let result = score(16, &ClassSet::all());
        assert_eq!(6, result.score);
        assert_eq!(StrengthLevel::VeryStrong, result.level);
        assert_eq!(1.0, result.display_fraction);
        assert_eq!("Very Strong", result.level.to_string());
    }

    #[test]
    fn strength_no_classes() {
        let result = score(10, &ClassSet::new());
        assert_eq!(1, result.score);
        assert_eq!(StrengthLevel::VeryWeak, result.level);
        assert_eq!(0.2, result.display_fraction);

        let result = score(4, &ClassSet::new());
        assert_eq!(0, result.score);
        assert_eq!(Tone::Danger, result.level.tone());
    }

    #[test]
    fn strength_length_thresholds() {
        let classes = ClassSet::from([CharacterClass::Digit]);
        assert_eq!(1, score(7, &classes).score);
        assert_eq!(2, score(8, &classes).score);
        assert_eq!(2, score(11, &classes).score);
        assert_eq!(3, score(12, &classes).score);
    }

    #[test]
    fn strength_levels() {
        let expected = [
            (0, StrengthLevel::VeryWeak),
            (1, StrengthLevel::VeryWeak),
            (2, StrengthLevel::Weak),
            (3, StrengthLevel::Medium),
            (4, StrengthLevel::Strong),
            (5, StrengthLevel::VeryStrong),
            (6, StrengthLevel::VeryStrong),
        ];
        for (value, level) in expected {
            assert_eq!(level, StrengthLevel::from_score(value));
        }
    }
}
