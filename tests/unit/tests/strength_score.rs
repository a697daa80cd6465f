use passgen_password::{
    score, CharacterClass, ClassSet, StrengthLevel, Tone,
};

#[test]
fn score_two_classes_medium_length() {
    let classes =
        ClassSet::from([CharacterClass::Uppercase, CharacterClass::Lowercase]);
    let result = score(10, &classes);
    assert_eq!(3, result.score);
    assert_eq!(StrengthLevel::Medium, result.level);
    assert_eq!(0.6, result.display_fraction);
}

#[test]
fn score_all_classes_long() {
    let result = score(16, &ClassSet::all());
    assert_eq!(6, result.score);
    assert_eq!(StrengthLevel::VeryStrong, result.level);
    assert_eq!(1.0, result.display_fraction);
    assert_eq!(Tone::Success, result.level.tone());
}

#[test]
fn score_empty_classes() {
    let result = score(10, &ClassSet::new());
    // Base score is zero, only the length bonus counts
    assert_eq!(1, result.score);
    assert_eq!(StrengthLevel::VeryWeak, result.level);
}

#[test]
fn score_deterministic() {
    let classes = ClassSet::from([CharacterClass::Digit]);
    for length in 0..32 {
        assert_eq!(score(length, &classes), score(length, &classes));
    }
}

#[test]
fn score_monotonic_in_length() {
    let subsets = [
        ClassSet::new(),
        ClassSet::from([CharacterClass::Symbol]),
        ClassSet::from([CharacterClass::Uppercase, CharacterClass::Digit]),
        ClassSet::all(),
    ];
    for classes in subsets {
        let mut previous = score(0, &classes);
        for length in 1..=20 {
            let current = score(length, &classes);
            assert!(current.score >= previous.score);
            assert!(current.level >= previous.level);
            assert!(current.display_fraction >= previous.display_fraction);
            previous = current;
        }
    }
}

#[test]
fn score_json_shape() -> anyhow::Result<()> {
    let value = serde_json::to_value(score(12, &ClassSet::all()))?;
    assert_eq!("very-strong", value["level"]);
    assert_eq!(6, value["score"]);
    assert_eq!(1.0, value["displayFraction"]);
    Ok(())
}
