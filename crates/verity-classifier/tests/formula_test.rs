use verity_classifier::{classify, combine, decide, partial_score};
use verity_core::config::LikelihoodFormula;
use verity_core::models::Label;

#[test]
fn partial_score_multiplies_prior_and_conditionals() {
    assert_eq!(partial_score(0.5, &[0.5, 1.0, 0.25]), 0.0625);
    assert_eq!(partial_score(0.3, &[]), 0.3);
    assert_eq!(partial_score(0.9, &[0.4, 0.0, 1.0]), 0.0);
}

#[test]
fn zero_class_a_score_returns_one() {
    let out = combine(0.0, 0.2, LikelihoodFormula::Literal);
    assert_eq!(out.score, 1.0);
    assert!(out.degenerate);
}

#[test]
fn zero_class_b_score_returns_zero() {
    let out = combine(0.2, 0.0, LikelihoodFormula::Literal);
    assert_eq!(out.score, 0.0);
    assert!(out.degenerate);
}

#[test]
fn both_zero_takes_class_a_branch() {
    for formula in [LikelihoodFormula::Literal, LikelihoodFormula::Normalized] {
        assert_eq!(combine(0.0, 0.0, formula).score, 1.0);
    }
}

#[test]
fn literal_formula_reduces_to_reciprocal_of_class_b() {
    let out = combine(0.08, 0.04, LikelihoodFormula::Literal);
    assert!(!out.degenerate);
    assert!((out.score - 25.0).abs() < 1e-9);

    // Class A's own score does not move the result.
    let other = combine(0.001, 0.04, LikelihoodFormula::Literal);
    assert!((other.score - out.score).abs() < 1e-9);
}

#[test]
fn normalized_formula_is_posterior_of_class_a() {
    let out = combine(0.03, 0.01, LikelihoodFormula::Normalized);
    assert!(!out.degenerate);
    assert!((out.score - 0.75).abs() < 1e-12);
}

#[test]
fn classify_applies_degenerate_policy_per_class() {
    let score = classify(
        2.0 / 3.0,
        &[0.5, 0.0, 0.0],
        1.0 / 3.0,
        &[1.0, 1.0, 1.0],
        LikelihoodFormula::Literal,
    );
    assert_eq!(score, 1.0);

    let score = classify(
        2.0 / 3.0,
        &[0.5, 1.0, 1.0],
        1.0 / 3.0,
        &[1.0, 0.0, 0.0],
        LikelihoodFormula::Literal,
    );
    assert_eq!(score, 0.0);
}

#[test]
fn classify_is_idempotent() {
    let args = (0.4, [0.5, 0.25, 0.75], 0.6, [0.2, 0.5, 0.1]);
    for formula in [LikelihoodFormula::Literal, LikelihoodFormula::Normalized] {
        let first = classify(args.0, &args.1, args.2, &args.3, formula);
        let second = classify(args.0, &args.1, args.2, &args.3, formula);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn decide_splits_at_threshold() {
    assert_eq!(decide(0.0, 0.5), Label::Genuine);
    assert_eq!(decide(0.4999, 0.5), Label::Genuine);
    assert_eq!(decide(0.5, 0.5), Label::Fabricated);
    assert_eq!(decide(1.0, 0.5), Label::Fabricated);
    // Unbounded literal scores still land on class A.
    assert_eq!(decide(27.0, 0.5), Label::Fabricated);
}
