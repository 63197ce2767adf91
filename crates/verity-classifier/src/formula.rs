use verity_core::config::LikelihoodFormula;

/// Naive Bayes numerator: the prior times every conditional proportion.
///
/// Not normalized by the evidence term, so not a probability on its own.
pub fn partial_score(prior: f64, conditionals: &[f64]) -> f64 {
    conditionals.iter().fold(prior, |acc, c| acc * c)
}

/// A combined score and whether a zero partial score decided it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combined {
    pub score: f64,
    pub degenerate: bool,
}

/// Combine two partial scores into a class-A score.
///
/// ```text
/// a == 0            -> 1.0
/// b == 0            -> 0.0
/// Literal           -> a / (a * b)
/// Normalized        -> a / (a + b)
/// ```
///
/// The zero checks come first and are asymmetric: when both scores are
/// zero the result is `1.0`.
pub fn combine(score_a: f64, score_b: f64, formula: LikelihoodFormula) -> Combined {
    if score_a == 0.0 {
        return Combined {
            score: 1.0,
            degenerate: true,
        };
    }
    if score_b == 0.0 {
        return Combined {
            score: 0.0,
            degenerate: true,
        };
    }

    let score = match formula {
        LikelihoodFormula::Literal => score_a / (score_a * score_b),
        LikelihoodFormula::Normalized => score_a / (score_a + score_b),
    };
    Combined {
        score,
        degenerate: false,
    }
}

/// Score class A from raw priors and conditionals for both classes.
pub fn classify(
    a_prior: f64,
    a_conditionals: &[f64],
    b_prior: f64,
    b_conditionals: &[f64],
    formula: LikelihoodFormula,
) -> f64 {
    let score_a = partial_score(a_prior, a_conditionals);
    let score_b = partial_score(b_prior, b_conditionals);
    combine(score_a, score_b, formula).score
}
