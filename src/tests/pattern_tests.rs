use crate::{CharRange, Pattern, PatternElement, Quantifier};

#[test]
fn test_push_merges_adjacent_literals() {
    let mut pattern = Pattern::new();
    pattern.push(PatternElement::literal("ab"));
    pattern.push(PatternElement::literal("c"));
    pattern.push_char('d');
    assert_eq!(pattern.elements(), &[PatternElement::literal("abcd")]);
}

#[test]
fn test_push_after_non_literal_starts_new_run() {
    let mut pattern = Pattern::new();
    pattern.push_char('a');
    pattern.push(PatternElement::Quantifier(Quantifier::ONE_OR_MORE));
    pattern.push_char('b');
    assert_eq!(pattern.len(), 3);
    assert_eq!(pattern.elements()[2], PatternElement::literal("b"));
}

#[test]
fn test_from_vec_upholds_literal_invariant() {
    let pattern = Pattern::from(vec![
        PatternElement::literal("a"),
        PatternElement::literal(""),
        PatternElement::literal("b"),
        PatternElement::group(vec![]),
        PatternElement::literal(""),
    ]);
    assert_eq!(
        pattern.elements(),
        &[PatternElement::literal("ab"), PatternElement::group(vec![])]
    );
}

#[test]
fn test_quantifier_constants() {
    assert_eq!(Quantifier::ZERO_OR_MORE, Quantifier { min: 0, max: None });
    assert_eq!(Quantifier::ONE_OR_MORE, Quantifier { min: 1, max: None });
    assert_eq!(Quantifier::ZERO_OR_ONE, Quantifier { min: 0, max: Some(1) });
}

#[test]
fn test_pattern_clone_and_equality() {
    let pattern = Pattern::from(vec![
        PatternElement::literal("a"),
        PatternElement::group(vec![PatternElement::literal("b")]),
        PatternElement::quantifier(2, Some(3)),
    ]);
    let cloned = pattern.clone();
    assert_eq!(pattern, cloned);
    assert_ne!(pattern, Pattern::new());
}

#[test]
fn test_pattern_debug() {
    let element = PatternElement::quantifier(2, Some(3));
    let debug_output = format!("{:?}", element);
    assert!(debug_output.contains("Quantifier"));
    assert!(debug_output.contains("min: 2"));
    assert!(debug_output.contains("max: Some(3)"));
}

#[test]
fn test_one_of_is_constructible() {
    let range = CharRange::new("a", "z");
    assert_eq!(range.from, "a");
    assert_eq!(range.to, "z");
    let element = PatternElement::OneOf(vec![range.clone()]);
    assert_eq!(element, PatternElement::OneOf(vec![range]));
}
