//! Unit tests for word helpers

use core_types::{from_bool, is_truthy, to_index, word, Word};

#[test]
fn test_words_are_unbounded() {
    let a: Word = word(34_915_192);
    let product = &a * &a;
    assert_eq!(product.to_string(), "1219070632396864");

    let big = &product * &product;
    assert_eq!(big.to_string(), "1486133206772489918753597034496");
}

#[test]
fn test_truthiness_matches_jump_semantics() {
    assert!(is_truthy(&word(5)));
    assert!(is_truthy(&word(-5)));
    assert!(!is_truthy(&word(0)));
}

#[test]
fn test_comparison_encoding() {
    assert_eq!(from_bool(word(1) < word(2)), word(1));
    assert_eq!(from_bool(word(2) == word(3)), word(0));
}

#[test]
fn test_negative_words_are_not_indices() {
    assert_eq!(to_index(&word(-1)), None);
    assert_eq!(to_index(&word(99)), Some(99));
}
