use serde::{Deserialize, Serialize};

use super::{Attribute, ClassPair, Label};
use crate::errors::{VerityError, VerityResult};

/// Conditional proportions of one attribute value, per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueProportions {
    pub value: String,
    pub proportions: ClassPair<f64>,
}

/// Every enumerated value of one modeled attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeProportions {
    pub attribute: Attribute,
    pub values: Vec<ValueProportions>,
}

impl AttributeProportions {
    /// Proportion of `value` within `label`, or `0.0` when `value` is not
    /// one of the enumerated buckets.
    pub fn proportion(&self, label: Label, value: &str) -> f64 {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map_or(0.0, |v| *v.proportions.get(label))
    }

    /// Sum over all enumerated values for one class. At most `1.0`.
    pub fn sum(&self, label: Label) -> f64 {
        self.values.iter().map(|v| *v.proportions.get(label)).sum()
    }
}

/// Snapshot of class priors and per-class conditional proportions.
///
/// Built once per training set by the estimator and read-only afterwards,
/// so it can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionTable {
    total: usize,
    class_counts: ClassPair<usize>,
    priors: ClassPair<f64>,
    attributes: Vec<AttributeProportions>,
}

impl ProportionTable {
    pub fn new(
        total: usize,
        class_counts: ClassPair<usize>,
        priors: ClassPair<f64>,
        attributes: Vec<AttributeProportions>,
    ) -> Self {
        Self {
            total,
            class_counts,
            priors,
            attributes,
        }
    }

    /// Prior denominator used when the table was built.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn class_count(&self, label: Label) -> usize {
        *self.class_counts.get(label)
    }

    pub fn prior(&self, label: Label) -> f64 {
        *self.priors.get(label)
    }

    pub fn priors(&self) -> ClassPair<f64> {
        self.priors
    }

    pub fn attributes(&self) -> &[AttributeProportions] {
        &self.attributes
    }

    /// Modeled attributes in estimation order.
    pub fn modeled_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes.iter().map(|a| a.attribute)
    }

    pub fn is_modeled(&self, attribute: Attribute) -> bool {
        self.find(attribute).is_some()
    }

    /// P(attribute = value | label). Unmodeled attributes and values outside
    /// the enumerated set both yield `0.0`.
    pub fn conditional(&self, label: Label, attribute: Attribute, value: &str) -> f64 {
        self.find(attribute)
            .map_or(0.0, |a| a.proportion(label, value))
    }

    /// Like [`conditional`](Self::conditional) but reports unmodeled attributes.
    pub fn try_conditional(
        &self,
        label: Label,
        attribute: Attribute,
        value: &str,
    ) -> VerityResult<f64> {
        self.find(attribute)
            .map(|a| a.proportion(label, value))
            .ok_or_else(|| VerityError::UnmodeledAttribute {
                attribute: attribute.name().to_string(),
            })
    }

    /// Sum of conditionals over the enumerated values of `attribute` for one
    /// class. `1.0` when no example of that class had an unrecognized value.
    pub fn conditional_sum(&self, label: Label, attribute: Attribute) -> f64 {
        self.find(attribute).map_or(0.0, |a| a.sum(label))
    }

    fn find(&self, attribute: Attribute) -> Option<&AttributeProportions> {
        self.attributes.iter().find(|a| a.attribute == attribute)
    }
}
