use std::io::Write;

use crate::errors::VerityResult;
use crate::models::{ClassLabels, ClassificationResult};

/// Renders classification results for display. The core never prints.
pub trait IReporter {
    fn report(
        &self,
        result: &ClassificationResult,
        labels: &ClassLabels,
        out: &mut dyn Write,
    ) -> VerityResult<()>;
}
