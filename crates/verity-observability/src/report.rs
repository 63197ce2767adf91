//! Reporting collaborators: render a classification result for display.

use std::io::Write;

use serde::{Deserialize, Serialize};
use verity_core::config::LikelihoodFormula;
use verity_core::errors::VerityResult;
use verity_core::models::{Attribute, ClassLabels, ClassPair, ClassificationResult, Label};
use verity_core::traits::IReporter;

/// One modeled attribute's contribution to the partial scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub attribute: Attribute,
    pub value: String,
    pub conditionals: ClassPair<f64>,
}

/// Display-ready view of a [`ClassificationResult`], with the decision
/// expressed as the raw label string of the training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub score: f64,
    pub decision: String,
    pub class: Label,
    pub partial_scores: ClassPair<f64>,
    pub formula: LikelihoodFormula,
    pub degenerate: bool,
    pub evidence: Vec<EvidenceEntry>,
}

impl ClassificationReport {
    pub fn new(result: &ClassificationResult, labels: &ClassLabels) -> Self {
        Self {
            score: result.score,
            decision: labels.raw(result.decision).to_string(),
            class: result.decision,
            partial_scores: result.partial_scores,
            formula: result.formula,
            degenerate: result.degenerate,
            evidence: result
                .evidence
                .iter()
                .map(|(attribute, value, conditionals)| EvidenceEntry {
                    attribute: *attribute,
                    value: value.clone(),
                    conditionals: *conditionals,
                })
                .collect(),
        }
    }
}

/// Plain-text reporter: the score line and the decision line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter {
    /// Also print partial scores and per-attribute conditionals.
    pub verbose: bool,
}

impl TextReporter {
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl IReporter for TextReporter {
    fn report(
        &self,
        result: &ClassificationResult,
        labels: &ClassLabels,
        out: &mut dyn Write,
    ) -> VerityResult<()> {
        writeln!(out, "Probability article is fake: {}", result.score)?;
        writeln!(
            out,
            "Classification of new article: {}",
            labels.raw(result.decision)
        )?;

        if self.verbose {
            writeln!(
                out,
                "  formula: {}{}",
                result.formula,
                if result.degenerate { " (degenerate)" } else { "" }
            )?;
            writeln!(
                out,
                "  partial scores: {}={} {}={}",
                labels.raw(Label::Fabricated),
                result.partial_scores.fabricated,
                labels.raw(Label::Genuine),
                result.partial_scores.genuine
            )?;
            for (attribute, value, conditionals) in &result.evidence {
                writeln!(
                    out,
                    "  {attribute}={value}: {}={} {}={}",
                    labels.raw(Label::Fabricated),
                    conditionals.fabricated,
                    labels.raw(Label::Genuine),
                    conditionals.genuine
                )?;
            }
        }
        Ok(())
    }
}

/// JSON reporter: one [`ClassificationReport`] object per result.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter {
    pub pretty: bool,
}

impl IReporter for JsonReporter {
    fn report(
        &self,
        result: &ClassificationResult,
        labels: &ClassLabels,
        out: &mut dyn Write,
    ) -> VerityResult<()> {
        let report = ClassificationReport::new(result, labels);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &report)?;
        } else {
            serde_json::to_writer(&mut *out, &report)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
