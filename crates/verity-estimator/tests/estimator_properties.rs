use proptest::prelude::*;
use verity_core::models::*;
use verity_estimator::{class_prior, conditional_proportion, partition, ProportionEstimator};

fn arb_value(attribute: Attribute) -> impl Strategy<Value = String> {
    let mut choices: Vec<String> = attribute.vocabulary().iter().map(|v| v.to_string()).collect();
    choices.push("unknown".to_string());
    prop::sample::select(choices)
}

fn arb_known_value(attribute: Attribute) -> impl Strategy<Value = String> {
    let choices: Vec<String> = attribute.vocabulary().iter().map(|v| v.to_string()).collect();
    prop::sample::select(choices)
}

fn arb_label() -> impl Strategy<Value = Label> {
    prop_oneof![Just(Label::Fabricated), Just(Label::Genuine)]
}

fn arb_example() -> impl Strategy<Value = LabeledExample> {
    (
        arb_value(Attribute::SourceTrust),
        arb_value(Attribute::LengthBucket),
        arb_value(Attribute::KeywordDensity),
        arb_label(),
    )
        .prop_map(|(s, l, k, label)| {
            LabeledExample::new(FeatureVector::new(s, l, "unknown", "unknown", "unknown", k), label)
        })
}

fn arb_known_example() -> impl Strategy<Value = LabeledExample> {
    (
        arb_known_value(Attribute::SourceTrust),
        arb_known_value(Attribute::LengthBucket),
        arb_known_value(Attribute::KeywordDensity),
        arb_label(),
    )
        .prop_map(|(s, l, k, label)| {
            LabeledExample::new(FeatureVector::new(s, l, "unknown", "unknown", "unknown", k), label)
        })
}

proptest! {
    #[test]
    fn priors_sum_to_one_when_all_labels_recognized(
        examples in prop::collection::vec(arb_example(), 1..60),
    ) {
        let table = ProportionEstimator::new().estimate(&TrainingSet::new(examples));
        let sum = table.prior(Label::Fabricated) + table.prior(Label::Genuine);
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn conditional_sums_are_one_without_unknowns(
        examples in prop::collection::vec(arb_known_example(), 1..60),
    ) {
        let table = ProportionEstimator::new().estimate(&TrainingSet::new(examples));
        for label in Label::ALL {
            for attribute in Attribute::DEFAULT_MODELED {
                let sum = table.conditional_sum(label, attribute);
                if table.class_count(label) == 0 {
                    prop_assert_eq!(sum, 0.0);
                } else {
                    prop_assert!((sum - 1.0).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn conditional_sums_never_exceed_one(
        examples in prop::collection::vec(arb_example(), 0..60),
    ) {
        let set = TrainingSet::new(examples);
        let table = ProportionEstimator::new().estimate(&set);
        let split = partition(set.iter());
        for label in Label::ALL {
            for attribute in Attribute::DEFAULT_MODELED {
                let sum = table.conditional_sum(label, attribute);
                prop_assert!(sum <= 1.0 + 1e-9);
                let has_unknown = split
                    .class(label)
                    .iter()
                    .any(|e| e.features().is_unknown(attribute));
                if has_unknown {
                    prop_assert!(sum < 1.0);
                }
            }
        }
    }

    #[test]
    fn proportions_are_finite_and_bounded(
        examples in prop::collection::vec(arb_example(), 0..40),
        total in 0usize..100,
    ) {
        let set = TrainingSet::new(examples);
        let split = partition(set.iter());
        for label in Label::ALL {
            let class = split.class(label);
            let prior = class_prior(class, total.max(class.len()));
            prop_assert!(prior.is_finite() && (0.0..=1.0).contains(&prior));
            for attribute in Attribute::DEFAULT_MODELED {
                for value in attribute.vocabulary() {
                    let p = conditional_proportion(class, attribute, value);
                    prop_assert!(p.is_finite() && (0.0..=1.0).contains(&p));
                }
            }
        }
    }

    #[test]
    fn estimation_is_deterministic(
        examples in prop::collection::vec(arb_example(), 0..40),
    ) {
        let set = TrainingSet::new(examples);
        let estimator = ProportionEstimator::new();
        prop_assert_eq!(estimator.estimate(&set), estimator.estimate(&set));
    }
}
