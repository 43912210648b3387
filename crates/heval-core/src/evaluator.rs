use heval_types::{EvalItem, EvalResult, EvaluationKind};

use crate::evaluators::{
    contains::ContainsEvaluator,
    exact::{CaseInsensitiveEvaluator, ExactMatchEvaluator},
    jaccard::JaccardEvaluator,
    json::JsonDiffEvaluator,
    levenshtein::LevenshteinEvaluator,
    numeric::NumericEvaluator,
};

/// A pure, synchronous comparison of one item against its reference.
///
/// Evaluators are total: malformed per-item data (unparseable numbers or
/// JSON) degrades to a zero-scored, unmatched result instead of an error.
pub trait Evaluator: Send + Sync {
    /// Human-readable name, e.g. "Levenshtein Distance".
    fn name(&self) -> &'static str;

    /// The kind this evaluator answers for.
    fn kind(&self) -> EvaluationKind;

    fn evaluate(&self, item: &EvalItem) -> EvalResult;
}

/// Type-keyed dispatch over the closed kind enumeration. Adding a kind
/// extends this mapping; existing evaluators are never modified.
pub fn evaluator_for(kind: EvaluationKind) -> Box<dyn Evaluator> {
    match kind {
        EvaluationKind::Exact => Box::new(ExactMatchEvaluator),
        EvaluationKind::CaseInsensitive => Box::new(CaseInsensitiveEvaluator),
        EvaluationKind::Levenshtein => Box::new(LevenshteinEvaluator),
        EvaluationKind::Numeric => Box::new(NumericEvaluator),
        EvaluationKind::Json => Box::new(JsonDiffEvaluator),
        EvaluationKind::Jaccard => Box::new(JaccardEvaluator),
        EvaluationKind::Contains => Box::new(ContainsEvaluator),
    }
}

/// Applies the evaluator for `kind` to every item in order: result `i`
/// corresponds to item `i`. This is the sequential reference semantics;
/// `runner::Eval` layers ordered concurrency on top of it.
pub fn evaluate_batch(items: &[EvalItem], kind: EvaluationKind) -> Vec<EvalResult> {
    let evaluator = evaluator_for(kind);
    items.iter().map(|item| evaluator.evaluate(item)).collect()
}
