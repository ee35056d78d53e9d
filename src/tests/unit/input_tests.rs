//! Input validation tests

use rstest::rstest;

use crate::core::models::{BirthMonth, UserInput, ValidationError};

#[rstest]
#[case("January", BirthMonth::January)]
#[case("February", BirthMonth::February)]
#[case("March", BirthMonth::March)]
#[case("April", BirthMonth::April)]
#[case("May", BirthMonth::May)]
#[case("June", BirthMonth::June)]
#[case("July", BirthMonth::July)]
#[case("August", BirthMonth::August)]
#[case("September", BirthMonth::September)]
#[case("October", BirthMonth::October)]
#[case("November", BirthMonth::November)]
#[case("December", BirthMonth::December)]
fn test_all_months_parse(#[case] raw: &str, #[case] expected: BirthMonth) {
    let input = UserInput::parse("Timmy", raw).unwrap();
    assert_eq!(input.birth_month, expected);
}

#[rstest]
#[case("Smarch")]
#[case("")]
#[case("april")]
#[case("Apr")]
fn test_invalid_months_rejected(#[case] raw: &str) {
    assert!(matches!(
        UserInput::parse("Timmy", raw),
        Err(ValidationError::InvalidMonth(_))
    ));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_names_rejected(#[case] raw: &str) {
    assert_eq!(
        UserInput::parse(raw, "April"),
        Err(ValidationError::EmptyName)
    );
}
