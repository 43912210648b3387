use heval_types::{EvalItem, EvalResult, EvaluationKind};
use strsim::levenshtein;

use crate::evaluator::Evaluator;

/// Similarity above which two strings count as matched.
const MATCH_THRESHOLD: f64 = 0.8;

/// Edit-distance similarity: `1 − distance / max(char_len)`, floored at 0.
/// Two empty strings are a perfect match.
pub struct LevenshteinEvaluator;

impl Evaluator for LevenshteinEvaluator {
    fn name(&self) -> &'static str {
        "Levenshtein Distance"
    }

    fn kind(&self) -> EvaluationKind {
        EvaluationKind::Levenshtein
    }

    fn evaluate(&self, item: &EvalItem) -> EvalResult {
        let distance = levenshtein(&item.output, &item.expected);
        let max_len = item.output.chars().count().max(item.expected.chars().count());
        let score = if max_len == 0 {
            1.0
        } else {
            (1.0 - distance as f64 / max_len as f64).max(0.0)
        };

        EvalResult::new(
            self.name(),
            self.kind().as_str(),
            score,
            score > MATCH_THRESHOLD,
            format!(
                "Edit distance: {}, Similarity: {:.2}%",
                distance,
                score * 100.0
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        let result = LevenshteinEvaluator.evaluate(&EvalItem::new("q", "hello", "hello"));
        assert_eq!(result.score, 1.0);
        assert!(result.metadata.matched);
    }

    #[test]
    fn both_empty_is_a_perfect_match() {
        let result = LevenshteinEvaluator.evaluate(&EvalItem::new("q", "", ""));
        assert_eq!(result.score, 1.0);
        assert!(result.metadata.matched);
    }

    #[test]
    fn empty_against_nonempty_scores_zero() {
        let result = LevenshteinEvaluator.evaluate(&EvalItem::new("q", "", "hello"));
        assert_eq!(result.score, 0.0);
        assert!(!result.metadata.matched);
    }

    #[test]
    fn close_match_scores_high_but_below_one() {
        let result = LevenshteinEvaluator
            .evaluate(&EvalItem::new("q", "William Shakespear", "William Shakespeare"));
        assert!(result.score > 0.9);
        assert!(result.score < 1.0);
        assert!(result.metadata.matched);
        assert!(result.metadata.details.contains("Edit distance: 1"));
    }

    #[test]
    fn disjoint_strings_score_zero() {
        let result = LevenshteinEvaluator.evaluate(&EvalItem::new("q", "abc", "xyz"));
        assert_eq!(result.score, 0.0);
        assert!(!result.metadata.matched);
    }

    #[test]
    fn distance_counts_chars_not_bytes() {
        let result = LevenshteinEvaluator.evaluate(&EvalItem::new("q", "héllo", "hello"));
        assert!((result.score - 0.8).abs() < 1e-12);
    }
}
