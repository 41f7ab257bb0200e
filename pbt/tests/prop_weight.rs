//! q 値のプロパティテスト

use pbt::qvalue_string;
use proptest::prelude::*;
use shiguredo_contenttype::{Error, Weight};

proptest! {
    #[test]
    fn shortest_form_round_trip(value in 0u16..=1000) {
        let weight = Weight::parse(&qvalue_string(value)).unwrap();
        prop_assert_eq!(weight.value(), value);
        prop_assert_eq!(weight.to_string(), qvalue_string(value));
    }

    #[test]
    fn three_digit_fraction(value in 0u16..1000) {
        let weight = Weight::parse(&format!("0.{:03}", value)).unwrap();
        prop_assert_eq!(weight.value(), value);
    }

    #[test]
    fn more_than_three_digits_rejected(digits in "[0-9]{4,6}") {
        prop_assert_eq!(Weight::parse(&format!("0.{}", digits)), Err(Error::InvalidWeight));
        prop_assert_eq!(Weight::parse(&format!("1.{}", digits)), Err(Error::InvalidWeight));
    }

    #[test]
    fn greater_than_one_rejected(value in 1u16..1000) {
        prop_assert_eq!(Weight::parse(&format!("1.{:03}", value)), Err(Error::InvalidWeight));
    }

    #[test]
    fn arbitrary_input_never_exceeds_max(input in "\\PC{0,8}") {
        if let Ok(weight) = Weight::parse(&input) {
            prop_assert!(weight <= Weight::MAX);
        }
    }
}
