use heval_types::{EvalItem, EvalResult, EvaluationKind};

use crate::evaluator::Evaluator;

/// Case-insensitive substring test: does the output contain the expected
/// value? Boolean-valued score.
pub struct ContainsEvaluator;

impl Evaluator for ContainsEvaluator {
    fn name(&self) -> &'static str {
        "Contains"
    }

    fn kind(&self) -> EvaluationKind {
        EvaluationKind::Contains
    }

    fn evaluate(&self, item: &EvalItem) -> EvalResult {
        let matched = item
            .output
            .to_lowercase()
            .contains(&item.expected.to_lowercase());
        EvalResult::new(
            self.name(),
            self.kind().as_str(),
            if matched { 1.0 } else { 0.0 },
            matched,
            if matched {
                "Expected value found in output"
            } else {
                "Expected value not found in output"
            },
        )
    }
}
