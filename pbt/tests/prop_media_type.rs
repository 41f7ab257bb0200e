//! MediaType のプロパティテスト

use pbt::{lowercase_token, mixed_case_token, unique_parameters};
use proptest::prelude::*;
use shiguredo_contenttype::{Error, MediaType, Parameters};

fn media_type_with_parameters() -> impl Strategy<Value = MediaType> {
    (lowercase_token(), lowercase_token(), unique_parameters(4)).prop_map(
        |(media_type, subtype, parameters)| {
            MediaType::new(&media_type, &subtype)
                .with_parameters(parameters.into_iter().collect::<Parameters>())
                .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn display_then_parse_round_trip(mt in media_type_with_parameters()) {
        let displayed = mt.to_string();
        prop_assert_eq!(MediaType::parse(&displayed), Ok(mt));
    }

    #[test]
    fn builder_normalizes_case(key in mixed_case_token(), value in mixed_case_token()) {
        let mt = MediaType::new("A", "B").with_parameter(&key, &value).unwrap();
        let lowered = value.to_ascii_lowercase();
        prop_assert_eq!(mt.parameter(&key.to_ascii_lowercase()), Some(lowered.as_str()));
        prop_assert_eq!(MediaType::parse(&mt.to_string()), Ok(mt));
    }

    #[test]
    fn built_media_type_round_trips_or_is_rejected(value in "\\PC{0,12}|[\\x00-\\x7f]{0,12}") {
        match MediaType::new("a", "b").with_parameter("c", &value) {
            Ok(mt) => prop_assert_eq!(MediaType::parse(&mt.to_string()), Ok(mt)),
            Err(e) => prop_assert_eq!(e, Error::InvalidParameter),
        }
    }

    #[test]
    fn parse_normalizes_case(media_type in mixed_case_token(), subtype in mixed_case_token()) {
        let mt = MediaType::parse(&format!("{}/{}", media_type, subtype)).unwrap();
        prop_assert_eq!(mt.media_type(), media_type.to_ascii_lowercase());
        prop_assert_eq!(mt.subtype(), subtype.to_ascii_lowercase());
    }

    #[test]
    fn parse_rejects_trailing_garbage(mt in media_type_with_parameters(), garbage in "[/,@\\[\\]{}?]{1,3}") {
        let input = format!("{}{}", mt.mime(), garbage);
        prop_assert!(MediaType::parse(&input).is_err());
    }

    #[test]
    fn parse_rejects_extra_subtype(media_type in lowercase_token(), subtype in lowercase_token(), extra in lowercase_token()) {
        let input = format!("{}/{}/{}", media_type, subtype, extra);
        prop_assert_eq!(MediaType::parse(&input), Err(Error::InvalidMediaType));
    }

    #[test]
    fn parse_or_empty_agrees_with_parse(input in "\\PC{0,32}") {
        match MediaType::parse(&input) {
            Ok(mt) => prop_assert_eq!(MediaType::parse_or_empty(&input), mt),
            Err(_) => prop_assert!(MediaType::parse_or_empty(&input).is_empty()),
        }
    }

    #[test]
    fn parameter_order_does_not_affect_equality(parameters in unique_parameters(4)) {
        let forward = MediaType::new("a", "b")
            .with_parameters(parameters.iter().cloned().collect())
            .unwrap();
        let backward = MediaType::new("a", "b")
            .with_parameters(parameters.iter().rev().cloned().collect())
            .unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn wildcard_matches_everything(mt in media_type_with_parameters()) {
        prop_assert!(MediaType::new("*", "*").matches(&mt));
        prop_assert!(MediaType::new(mt.media_type(), "*").matches(&mt));
        prop_assert!(mt.matches(&mt));
        prop_assert!(mt.equals_mime(&MediaType::new(mt.media_type(), mt.subtype())));
    }
}
