use anyhow::Result;
use passgen_password::{
    generate, generate_with, secrecy::ExposeSecret, CharacterClass,
    ClassSet, Error,
};
use rand::{rngs::StdRng, SeedableRng};

/// Every subset of the four classes except the empty set.
fn class_subsets() -> Vec<ClassSet> {
    let classes = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];
    (1u8..16)
        .map(|mask| {
            classes
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, class)| *class)
                .collect()
        })
        .collect()
}

fn assert_coverage(password: &str, classes: &ClassSet) {
    for class in classes {
        assert!(password.chars().any(|c| class.contains(c)));
    }
    for c in password.chars() {
        let class = CharacterClass::of(c).unwrap();
        assert!(classes.contains(&class), "{} not enabled", class);
    }
}

#[test]
fn generate_length_and_coverage() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    for classes in class_subsets() {
        for length in 1..=24 {
            let password = generate_with(&mut rng, length, &classes)?;
            let password = password.expose_secret();
            assert_eq!(length.max(classes.len()), password.len());
            assert_coverage(password, &classes);
        }
    }
    Ok(())
}

#[test]
fn generate_short_length_one_of_each() -> Result<()> {
    let classes = ClassSet::from([
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
    ]);
    for _ in 0..50 {
        let password = generate(2, &classes)?;
        let password = password.expose_secret();
        assert_eq!(3, password.len());
        for class in &classes {
            assert_eq!(
                1,
                password.chars().filter(|c| class.contains(*c)).count()
            );
        }
    }
    Ok(())
}

#[test]
fn generate_no_class_selected() {
    for length in [0, 1, 10, 64] {
        assert!(matches!(
            generate(length, &ClassSet::new()),
            Err(Error::NoClassSelected)
        ));
    }
}

#[test]
fn generate_mandatory_positions_vary() -> Result<()> {
    // Lowercase is placed first before shuffling
    let classes =
        ClassSet::from([CharacterClass::Lowercase, CharacterClass::Symbol]);
    let mut rng = StdRng::seed_from_u64(99);
    let mut first = 0;
    let trials = 400;
    for _ in 0..trials {
        let password = generate_with(&mut rng, 8, &classes)?;
        if password
            .expose_secret()
            .starts_with(|c: char| CharacterClass::Symbol.contains(c))
        {
            first += 1;
        }
    }
    assert!(first > 0);
    assert!(first < trials);
    Ok(())
}
