use clap::Args;
use passgen_password::{CharacterClass, ClassSet};

pub mod generate;
pub mod shell;
pub mod strength;

pub use generate::GenerateArgs;
pub use strength::StrengthArgs;

/// Character class selection shared by commands.
#[derive(Args, Debug, Default, Clone)]
pub struct ClassArgs {
    /// Include uppercase letters.
    #[clap(short, long)]
    pub upper: bool,

    /// Include lowercase letters.
    #[clap(short = 'L', long)]
    pub lower: bool,

    /// Include digits.
    #[clap(short, long)]
    pub digits: bool,

    /// Include symbols.
    #[clap(short, long)]
    pub symbols: bool,

    /// Comma separated classes, for example "upper,digit" or "all".
    #[clap(long)]
    pub classes: Option<ClassSet>,
}

impl ClassArgs {
    /// Selected classes or the defaults when nothing was selected.
    pub fn resolve(&self, defaults: &ClassSet) -> ClassSet {
        let mut selected = self.classes.clone().unwrap_or_default();
        let flags = [
            (self.upper, CharacterClass::Uppercase),
            (self.lower, CharacterClass::Lowercase),
            (self.digits, CharacterClass::Digit),
            (self.symbols, CharacterClass::Symbol),
        ];
        for (enabled, class) in flags {
            if enabled {
                selected.insert(class);
            }
        }

        if self.classes.is_none() && selected.is_empty() {
            defaults.clone()
        } else {
            selected
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn class_args_defaults() {
        let defaults = ClassSet::all();
        assert_eq!(defaults, ClassArgs::default().resolve(&defaults));
    }

    #[test]
    fn class_args_union() -> Result<()> {
        let args = ClassArgs {
            digits: true,
            classes: Some("upper".parse()?),
            ..Default::default()
        };
        let classes = args.resolve(&ClassSet::all());
        assert_eq!(
            ClassSet::from([CharacterClass::Uppercase, CharacterClass::Digit]),
            classes
        );
        Ok(())
    }

    #[test]
    fn class_args_explicit_empty() -> Result<()> {
        let args = ClassArgs {
            classes: Some("".parse()?),
            ..Default::default()
        };
        assert!(args.resolve(&ClassSet::all()).is_empty());
        Ok(())
    }
}
