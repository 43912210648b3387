use heval_types::{EvalItem, EvalResult, EvaluationKind};

use crate::evaluator::Evaluator;

/// Case-sensitive, code-point equality of output and expected.
pub struct ExactMatchEvaluator;

impl Evaluator for ExactMatchEvaluator {
	fn name(&self) -> &'static str {
		"Exact Match"
	}

	fn kind(&self) -> EvaluationKind {
		EvaluationKind::Exact
	}

	fn evaluate(&self, item: &EvalItem) -> EvalResult {
		let matched = item.output == item.expected;
		EvalResult::new(
			self.name(),
			self.kind().as_str(),
			if matched { 1.0 } else { 0.0 },
			matched,
			if matched { "Exact match found" } else { "No exact match" },
		)
	}
}

/// Equality after a locale-independent lowercase fold of both sides.
pub struct CaseInsensitiveEvaluator;

impl Evaluator for CaseInsensitiveEvaluator {
	fn name(&self) -> &'static str {
		"Case Insensitive Match"
	}

	fn kind(&self) -> EvaluationKind {
		EvaluationKind::CaseInsensitive
	}

	fn evaluate(&self, item: &EvalItem) -> EvalResult {
		let matched = item.output.to_lowercase() == item.expected.to_lowercase();
		EvalResult::new(
			self.name(),
			self.kind().as_str(),
			if matched { 1.0 } else { 0.0 },
			matched,
			if matched { "Match found (case-insensitive)" } else { "No match found" },
		)
	}
}
