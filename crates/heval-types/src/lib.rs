use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};
use thiserror::Error;

/// Numeric tolerance applied when an item does not carry its own.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// One comparison request: the text being evaluated against a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalItem {
	/// Prompt/context the output came from. Carried through for reporting, never compared.
	pub input: String,
	pub output: String,
	pub expected: String,
	/// Only meaningful for numeric comparison.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tolerance: Option<f64>,
}

impl EvalItem {
	pub fn new(
		input: impl Into<String>,
		output: impl Into<String>,
		expected: impl Into<String>,
	) -> Self {
		Self {
			input: input.into(),
			output: output.into(),
			expected: expected.into(),
			tolerance: None,
		}
	}

	pub fn with_tolerance(mut self, tolerance: f64) -> Self {
		self.tolerance = Some(tolerance);
		self
	}

	pub fn tolerance_or_default(&self) -> f64 {
		self.tolerance.unwrap_or(DEFAULT_TOLERANCE)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalMetadata {
	/// Stable machine-readable kind id, e.g. "case_insensitive".
	#[serde(rename = "evaluationType")]
	pub evaluation_type: String,
	/// Enough detail to reconstruct the decision (raw distance, first diverging path, ...).
	pub details: String,
	/// Pass/fail verdict under the evaluator's own threshold, independent of `score`.
	pub matched: bool,
}

/// One comparison outcome, produced 1:1 and order-preserving with its item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
	pub name: String,
	/// Normalized to `[0, 1]`; `1` is a perfect match.
	pub score: f64,
	pub metadata: EvalMetadata,
}

impl EvalResult {
	/// Builds a result, clamping the score into `[0, 1]`.
	pub fn new(
		name: impl Into<String>,
		evaluation_type: impl Into<String>,
		score: f64,
		matched: bool,
		details: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			score: score.clamp(0.0, 1.0),
			metadata: EvalMetadata {
				evaluation_type: evaluation_type.into(),
				details: details.into(),
				matched,
			},
		}
	}
}

/// Closed set of heuristic comparison algorithms. Adding a kind means adding
/// one evaluator and one dispatch arm; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
	Exact,
	CaseInsensitive,
	Levenshtein,
	Numeric,
	Json,
	Jaccard,
	Contains,
}

impl EvaluationKind {
	pub const ALL: [EvaluationKind; 7] = [
		EvaluationKind::Exact,
		EvaluationKind::CaseInsensitive,
		EvaluationKind::Levenshtein,
		EvaluationKind::Numeric,
		EvaluationKind::Json,
		EvaluationKind::Jaccard,
		EvaluationKind::Contains,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			EvaluationKind::Exact => "exact",
			EvaluationKind::CaseInsensitive => "case_insensitive",
			EvaluationKind::Levenshtein => "levenshtein",
			EvaluationKind::Numeric => "numeric",
			EvaluationKind::Json => "json",
			EvaluationKind::Jaccard => "jaccard",
			EvaluationKind::Contains => "contains",
		}
	}
}

impl fmt::Display for EvaluationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Configuration error: a kind selector outside the closed enumeration.
/// Surfaced before any item is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown evaluation kind '{0}' (expected one of: exact, case_insensitive, levenshtein, numeric, json, jaccard, contains)")]
pub struct UnknownKindError(pub String);

impl FromStr for EvaluationKind {
	type Err = UnknownKindError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"exact" => Ok(EvaluationKind::Exact),
			"case_insensitive" => Ok(EvaluationKind::CaseInsensitive),
			"levenshtein" => Ok(EvaluationKind::Levenshtein),
			"numeric" => Ok(EvaluationKind::Numeric),
			"json" => Ok(EvaluationKind::Json),
			"jaccard" => Ok(EvaluationKind::Jaccard),
			"contains" => Ok(EvaluationKind::Contains),
			other => Err(UnknownKindError(other.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSummary {
	pub total: usize,
	pub passed: usize,
	pub pass_rate: f64,
	pub avg_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
	pub results: Vec<EvalResult>,
	pub summary: EvalSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
struct SummaryRow {
	item: usize,
	evaluator: String,
	score: f64,
	matched: String,
	details: String,
}

impl EvalReport {
	pub fn from_results(results: Vec<EvalResult>) -> Self {
		let summary = Self::summarize(&results);
		Self { results, summary }
	}

	pub fn summarize(results: &[EvalResult]) -> EvalSummary {
		let total = results.len();
		let passed = results.iter().filter(|r| r.metadata.matched).count();
		let score_sum: f64 = results.iter().map(|r| r.score).sum();

		let pass_rate = if total == 0 { 0.0 } else { passed as f64 / total as f64 };
		let avg_score = if total == 0 { 0.0 } else { score_sum / total as f64 };

		EvalSummary { total, passed, pass_rate, avg_score }
	}

	pub fn summary_table(&self) -> String {
		let rows: Vec<SummaryRow> = self.results.iter().enumerate().map(|(idx, r)| {
			SummaryRow {
				item: idx + 1,
				evaluator: r.name.clone(),
				score: r.score,
				matched: (if r.metadata.matched { "✓" } else { "✗" }).to_string(),
				details: truncate(r.metadata.details.clone(), 64),
			}
		}).collect();

		let table = Table::new(rows);
		let table_str = table.to_string();

		let summary_text = format!(
			"Total: {}  Passed: {}  Pass rate: {:.1}%  Avg score: {:.3}",
			self.summary.total,
			self.summary.passed,
			self.summary.pass_rate * 100.0,
			self.summary.avg_score
		);

		format!("{}\n\n{}\n", table_str, summary_text)
	}
}

fn truncate(s: String, max_len: usize) -> String {
	if s.chars().count() <= max_len {
		return s;
	}
	let mut truncated = s.chars().take(max_len.saturating_sub(1)).collect::<String>();
	truncated.push('…');
	truncated
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_round_trips_through_str() {
		for kind in EvaluationKind::ALL {
			assert_eq!(kind.as_str().parse::<EvaluationKind>().unwrap(), kind);
		}
	}

	#[test]
	fn unknown_kind_is_rejected() {
		let err = "fuzzy".parse::<EvaluationKind>().unwrap_err();
		assert_eq!(err, UnknownKindError("fuzzy".to_string()));
		assert!(err.to_string().contains("unknown evaluation kind"));
	}

	#[test]
	fn kind_serializes_snake_case() {
		let json = serde_json::to_string(&EvaluationKind::CaseInsensitive).unwrap();
		assert_eq!(json, "\"case_insensitive\"");
		let kind: EvaluationKind = serde_json::from_str("\"jaccard\"").unwrap();
		assert_eq!(kind, EvaluationKind::Jaccard);
	}

	#[test]
	fn result_score_is_clamped() {
		let high = EvalResult::new("x", "exact", 1.5, true, "");
		assert_eq!(high.score, 1.0);
		let low = EvalResult::new("x", "exact", -0.2, false, "");
		assert_eq!(low.score, 0.0);
	}

	#[test]
	fn metadata_uses_camel_case_key() {
		let result = EvalResult::new("Exact Match", "exact", 1.0, true, "Exact match found");
		let json = serde_json::to_string(&result).unwrap();
		assert!(json.contains("\"evaluationType\":\"exact\""));
	}

	#[test]
	fn tolerance_defaults_when_absent() {
		let item = EvalItem::new("q", "3.14", "3.14");
		assert_eq!(item.tolerance_or_default(), DEFAULT_TOLERANCE);
		let item = item.with_tolerance(0.5);
		assert_eq!(item.tolerance_or_default(), 0.5);
	}

	#[test]
	fn item_parses_from_json_record() {
		let item: EvalItem = serde_json::from_str(
			r#"{"input":"q","output":"3.14","expected":"3.15","tolerance":0.1}"#,
		)
		.unwrap();
		assert_eq!(item.tolerance, Some(0.1));
		assert_eq!(item.expected, "3.15");
	}

	#[test]
	fn summarize_counts_matches_and_means_scores() {
		let results = vec![
			EvalResult::new("Exact Match", "exact", 1.0, true, ""),
			EvalResult::new("Exact Match", "exact", 0.0, false, ""),
			EvalResult::new("Exact Match", "exact", 0.5, false, ""),
		];
		let summary = EvalReport::summarize(&results);
		assert_eq!(summary.total, 3);
		assert_eq!(summary.passed, 1);
		assert!((summary.pass_rate - 1.0 / 3.0).abs() < 1e-12);
		assert!((summary.avg_score - 0.5).abs() < 1e-12);
	}

	#[test]
	fn summarize_empty_batch_is_zeroed() {
		let summary = EvalReport::summarize(&[]);
		assert_eq!(summary.total, 0);
		assert_eq!(summary.passed, 0);
		assert_eq!(summary.pass_rate, 0.0);
		assert_eq!(summary.avg_score, 0.0);
	}

	#[test]
	fn summary_table_lists_every_result() {
		let report = EvalReport::from_results(vec![
			EvalResult::new("Contains", "contains", 1.0, true, "Expected value found in output"),
			EvalResult::new("Contains", "contains", 0.0, false, "Expected value not found in output"),
		]);
		let table = report.summary_table();
		assert!(table.contains("Contains"));
		assert!(table.contains("Total: 2  Passed: 1"));
	}
}
