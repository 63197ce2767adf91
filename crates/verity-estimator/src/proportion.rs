use verity_core::models::{Attribute, LabeledExample};

/// `|examples| / total`, or `0.0` when `total` is zero.
pub fn class_prior(examples: &[&LabeledExample], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    examples.len() as f64 / total as f64
}

/// Fraction of `class_examples` whose `attribute` equals `value`.
///
/// Returns `0.0` for an empty class. The `"unknown"` sentinel never matches.
pub fn conditional_proportion(
    class_examples: &[&LabeledExample],
    attribute: Attribute,
    value: &str,
) -> f64 {
    if class_examples.is_empty() {
        return 0.0;
    }
    let matching = class_examples
        .iter()
        .filter(|e| e.features().matches(attribute, value))
        .count();
    matching as f64 / class_examples.len() as f64
}
