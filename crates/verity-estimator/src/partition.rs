use verity_core::models::{Label, LabeledExample};

/// Training examples split by class, in input order.
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    pub fabricated: Vec<&'a LabeledExample>,
    pub genuine: Vec<&'a LabeledExample>,
}

impl<'a> Partition<'a> {
    pub fn class(&self, label: Label) -> &[&'a LabeledExample] {
        match label {
            Label::Fabricated => &self.fabricated,
            Label::Genuine => &self.genuine,
        }
    }
}

/// Split examples into the two classes.
///
/// Labels are checked at ingestion, so every example lands in exactly one
/// class; examples with unrecognized labels never reach this point.
pub fn partition<'a, I>(examples: I) -> Partition<'a>
where
    I: IntoIterator<Item = &'a LabeledExample>,
{
    let mut out = Partition::default();
    for example in examples {
        match example.label() {
            Label::Fabricated => out.fabricated.push(example),
            Label::Genuine => out.genuine.push(example),
        }
    }
    out
}
