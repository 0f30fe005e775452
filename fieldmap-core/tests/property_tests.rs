//! Property-based tests for the case converter

use fieldmap_core::snake_to_camel;
use proptest::prelude::*;

proptest! {
    #[test]
    fn conversion_removes_all_separators(input in "[a-z0-9_]{0,32}") {
        let converted = snake_to_camel(&input);
        prop_assert!(!converted.contains('_'));
    }

    #[test]
    fn separator_free_input_is_unchanged(input in "[a-zA-Z0-9]{0,32}") {
        prop_assert_eq!(snake_to_camel(&input), input);
    }

    #[test]
    fn second_pass_is_identity(input in "[a-z0-9_]{0,32}") {
        let once = snake_to_camel(&input);
        prop_assert_eq!(snake_to_camel(&once), once.clone());
    }

    #[test]
    fn first_component_is_preserved(
        head in "[a-z][a-z0-9]{0,8}",
        tail in "[a-z][a-z0-9]{0,8}",
    ) {
        let converted = snake_to_camel(&format!("{head}_{tail}"));
        prop_assert!(converted.starts_with(&head));
    }

    #[test]
    fn ascii_output_length_equals_non_separator_count(input in "[a-z_]{0,32}") {
        // ASCII uppercasing is one-to-one, so only separators disappear
        let converted = snake_to_camel(&input);
        let expected = input.chars().filter(|c| *c != '_').count();
        prop_assert_eq!(converted.chars().count(), expected);
    }
}
