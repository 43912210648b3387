use std::collections::HashSet;

use heval_types::{EvalItem, EvalResult, EvaluationKind};

use crate::evaluator::Evaluator;

const MATCH_THRESHOLD: f64 = 0.5;

/// Token-set overlap: lowercase, whitespace-tokenize, collapse duplicates,
/// then `|intersection| / |union|`. Two empty token sets score 1.
pub struct JaccardEvaluator;

impl Evaluator for JaccardEvaluator {
    fn name(&self) -> &'static str {
        "Jaccard Similarity"
    }

    fn kind(&self) -> EvaluationKind {
        EvaluationKind::Jaccard
    }

    fn evaluate(&self, item: &EvalItem) -> EvalResult {
        let output = item.output.to_lowercase();
        let expected = item.expected.to_lowercase();
        let output_tokens: HashSet<&str> = output.split_whitespace().collect();
        let expected_tokens: HashSet<&str> = expected.split_whitespace().collect();

        let intersection = output_tokens.intersection(&expected_tokens).count();
        let union = output_tokens.union(&expected_tokens).count();
        let score = if union == 0 {
            1.0
        } else {
            intersection as f64 / union as f64
        };

        EvalResult::new(
            self.name(),
            self.kind().as_str(),
            score,
            score > MATCH_THRESHOLD,
            format!(
                "Jaccard index: {:.2}%, Intersection: {}, Union: {}",
                score * 100.0,
                intersection,
                union
            ),
        )
    }
}
