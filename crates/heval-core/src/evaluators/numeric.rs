use heval_types::{EvalItem, EvalResult, EvaluationKind};

use crate::evaluator::Evaluator;

/// Absolute-difference comparison of two parsed floats.
///
/// Fails closed: a side that does not parse yields score 0 and an
/// unmatched verdict, never an error. Outside tolerance the score falls
/// back to relative error against the expected value; an expected value
/// of exactly zero scores 0 there, since relative error is undefined.
pub struct NumericEvaluator;

impl NumericEvaluator {
    fn parse_failure(&self, side: &str, raw: &str) -> EvalResult {
        EvalResult::new(
            self.name(),
            self.kind().as_str(),
            0.0,
            false,
            format!("Invalid numeric value for {side}: {raw:?}"),
        )
    }
}

impl Evaluator for NumericEvaluator {
    fn name(&self) -> &'static str {
        "Numeric Difference"
    }

    fn kind(&self) -> EvaluationKind {
        EvaluationKind::Numeric
    }

    fn evaluate(&self, item: &EvalItem) -> EvalResult {
        let output = match item.output.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => return self.parse_failure("output", &item.output),
        };
        let expected = match item.expected.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => return self.parse_failure("expected", &item.expected),
        };

        let tolerance = item.tolerance_or_default();
        let difference = (output - expected).abs();
        let matched = difference <= tolerance;
        let score = if matched {
            1.0
        } else if expected == 0.0 {
            0.0
        } else {
            (1.0 - difference / expected.abs()).max(0.0)
        };

        EvalResult::new(
            self.name(),
            self.kind().as_str(),
            score,
            matched,
            format!(
                "Difference: {:.4}, Tolerance: {}, Within tolerance: {}",
                difference, tolerance, matched
            ),
        )
    }
}
