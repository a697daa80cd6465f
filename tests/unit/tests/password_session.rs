use anyhow::Result;
use passgen_password::{
    secrecy::ExposeSecret, CharacterClass, ClassSet, GenerationRequest,
    LengthRange, PasswordSession, StrengthLevel, PLACEHOLDER,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn session_checkbox_flow() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let request =
        GenerationRequest::new(2, ClassSet::from([CharacterClass::Lowercase]));
    let mut session = PasswordSession::new(request, LengthRange::new(1, 20)?);

    let outcome = session.refresh_with(&mut rng);
    assert!(outcome.generated);
    assert_eq!(2, outcome.length);

    // Enabling more classes than the length raises the length
    session.set_class(CharacterClass::Digit, true);
    let outcome = session.set_class(CharacterClass::Symbol, true);
    assert_eq!(3, outcome.length);
    assert_eq!(3, session.display().len());
    assert_eq!(StrengthLevel::Medium, outcome.strength.level);

    // Disabling classes keeps the raised length
    let outcome = session.set_class(CharacterClass::Symbol, false);
    assert_eq!(3, outcome.length);
    Ok(())
}

#[test]
fn session_empty_selection_clears_password() {
    let mut session = PasswordSession::new(
        GenerationRequest::new(12, ClassSet::from([CharacterClass::Digit])),
        Default::default(),
    );
    session.refresh();
    assert!(session.password().is_some());

    let outcome = session.toggle_class(CharacterClass::Digit);
    assert!(!outcome.generated);
    assert!(session.password().is_none());
    assert_eq!(PLACEHOLDER, session.display());
    assert_eq!(2, outcome.strength.score);
    assert_eq!(StrengthLevel::Weak, outcome.strength.level);

    let outcome = session.toggle_class(CharacterClass::Digit);
    assert!(outcome.generated);
    assert_eq!(12, session.password().unwrap().expose_secret().len());
}

#[test]
fn session_outcome_without_regenerating() {
    let mut session = PasswordSession::default();
    session.refresh();
    let before = session.display().to_owned();
    let outcome = session.outcome();
    assert_eq!(before, session.display());
    assert_eq!(10, outcome.length);
    assert!(outcome.generated);
}
