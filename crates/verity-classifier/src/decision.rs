use verity_core::models::Label;

/// Map a class-A score to a decision: below `threshold` is class B.
///
/// The literal formula's scores are not bounded to `[0, 1]`; the rule is
/// applied to them unchanged.
pub fn decide(score: f64, threshold: f64) -> Label {
    if score < threshold {
        Label::Genuine
    } else {
        Label::Fabricated
    }
}
