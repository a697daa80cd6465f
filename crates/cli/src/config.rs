//! Settings loaded from a TOML file.
use passgen_password::{
    generator::DEFAULT_LENGTH, CharacterClass, ClassSet, GenerationRequest,
    LengthRange,
};
use passgen_clipboard::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Largest length accepted on the command line by default.
pub const DEFAULT_MAX_LENGTH: usize = 64;

/// Default values for generation and copying.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default password length.
    pub length: usize,

    /// Character classes enabled when none are given.
    pub classes: ClassSet,

    /// Smallest accepted length.
    pub min_length: usize,

    /// Largest accepted length.
    pub max_length: usize,

    /// Number of passwords to generate.
    pub count: usize,

    /// Seconds before copied text is cleared,
    /// zero disables clearing.
    pub clipboard_timeout: u16,

    /// Path the file was loaded from.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::from([
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
            ]),
            min_length: 1,
            max_length: DEFAULT_MAX_LENGTH,
            count: 1,
            clipboard_timeout: DEFAULT_TIMEOUT,
            file: None,
        }
    }
}

impl Settings {
    /// Load settings from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = toml::from_str(&contents)?;
        settings.check_length(settings.length)?;
        if settings.count == 0 {
            return Err(Error::InvalidCount);
        }
        settings.file = Some(path.as_ref().to_path_buf());
        tracing::debug!(
            file = %path.as_ref().display(),
            "settings::load"
        );
        Ok(settings)
    }

    /// Load settings from a file when a path is given
    /// otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Default::default()),
        }
    }

    /// File these settings were loaded from.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Accepted length range.
    pub fn range(&self) -> Result<LengthRange> {
        Ok(LengthRange::new(self.min_length, self.max_length)?)
    }

    /// Request using the default length and classes.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes.clone())
    }

    /// Check a length is within the accepted range.
    pub fn check_length(&self, length: usize) -> Result<usize> {
        let range = self.range()?;
        if !range.contains(length) {
            return Err(Error::InvalidLength {
                length,
                min: range.min(),
                max: range.max(),
            });
        }
        Ok(length)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn settings_defaults() -> Result<()> {
        let settings = Settings::load_or_default(None)?;
        assert_eq!(10, settings.length);
        assert_eq!(2, settings.classes.len());
        assert_eq!(1, settings.count);
        assert_eq!(90, settings.clipboard_timeout);
        assert!(settings.file().is_none());
        Ok(())
    }

    #[test]
    fn settings_load_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            r#"
length = 16
classes = ["upper", "digits", "symbol"]
max_length = 32
clipboard_timeout = 0
"#
        )?;

        let settings = Settings::load(file.path())?;
        assert_eq!(16, settings.length);
        assert_eq!(
            ClassSet::from([
                CharacterClass::Uppercase,
                CharacterClass::Digit,
                CharacterClass::Symbol,
            ]),
            settings.classes
        );
        assert_eq!(1, settings.min_length);
        assert_eq!(32, settings.max_length);
        assert_eq!(0, settings.clipboard_timeout);
        assert_eq!(Some(file.path()), settings.file());

        assert_eq!(32, settings.check_length(32)?);
        assert!(settings.check_length(33).is_err());
        assert!(settings.check_length(0).is_err());
        Ok(())
    }

    #[test]
    fn settings_reject_bad_range() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "min_length = 8\nmax_length = 4")?;
        assert!(matches!(
            Settings::load(file.path()),
            Err(Error::Password(_))
        ));
        Ok(())
    }

    #[test]
    fn settings_reject_default_length_outside_range() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "max_length = 8")?;
        assert!(matches!(
            Settings::load(file.path()),
            Err(Error::InvalidLength {
                length: 10,
                min: 1,
                max: 8
            })
        ));

        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "length = 6\nmax_length = 8")?;
        let settings = Settings::load(file.path())?;
        assert_eq!(6, settings.length);
        Ok(())
    }

    #[test]
    fn settings_missing_file() {
        assert!(matches!(
            Settings::load("does-not-exist.toml"),
            Err(Error::NotFile(_))
        ));
    }
}
