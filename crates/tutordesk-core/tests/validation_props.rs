use proptest::prelude::*;
use tutordesk_core::rules::validation::{
    validate_new_student, validate_new_tutor, MAX_AGE, MAX_CLASS_YEAR, MAX_TEXT_LEN,
};
use tutordesk_core::{NewStudent, NewTutor};

proptest! {
    #[test]
    fn prop_in_range_students_are_accepted(
        name in "[A-Za-z][A-Za-z ]{0,40}",
        major in "[A-Za-z][A-Za-z ]{0,40}",
        age in 0..=MAX_AGE,
        class_year in 0..=MAX_CLASS_YEAR,
    ) {
        let input = NewStudent::new("user", "pw", name, age, class_year, major);
        prop_assert!(validate_new_student(&input).is_ok());
    }

    #[test]
    fn prop_out_of_range_age_is_rejected(age in prop_oneof![i64::MIN..0, (MAX_AGE + 1)..i64::MAX]) {
        let input = NewStudent::new("user", "pw", "Name", age, 2022, "Math");
        prop_assert!(validate_new_student(&input).is_err());
    }

    #[test]
    fn prop_overlong_area_is_rejected(extra in 1usize..50) {
        let area = "a".repeat(MAX_TEXT_LEN + extra);
        let input = NewTutor::new("user", "pw", "Name", 30, area, 10);
        prop_assert!(validate_new_tutor(&input).is_err());
    }

    #[test]
    fn prop_non_negative_cost_is_accepted(cost in 0i64..1_000_000) {
        let input = NewTutor::new("user", "pw", "Name", 30, "Math", cost);
        prop_assert!(validate_new_tutor(&input).is_ok());
    }
}
