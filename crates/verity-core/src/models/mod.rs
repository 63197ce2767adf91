pub mod attribute;
pub mod class_pair;
pub mod classification_result;
pub mod feature_vector;
pub mod label;
pub mod labeled_example;
pub mod proportion_table;
pub mod training_set;

pub use attribute::Attribute;
pub use class_pair::ClassPair;
pub use classification_result::ClassificationResult;
pub use feature_vector::FeatureVector;
pub use label::{ClassLabels, Label};
pub use labeled_example::{LabeledExample, RawExample};
pub use proportion_table::{AttributeProportions, ProportionTable, ValueProportions};
pub use training_set::TrainingSet;
