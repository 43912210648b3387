use heval_types::{EvalItem, EvalResult, EvaluationKind};
use serde_json::Value;

use crate::evaluator::Evaluator;

/// Score penalty per structural difference; the score floors at 0.
const DIFF_PENALTY: f64 = 0.1;

/// Recursive structural diff of two JSON documents.
///
/// Objects compare over the symmetric union of their keys, arrays over the
/// union of their indices; key order is irrelevant. Each leaf discrepancy
/// ("missing in output", "extra in output", type/null/value mismatch) is
/// reported with its dot-separated path. Unparseable JSON on either side
/// fails closed with score 0.
pub struct JsonDiffEvaluator;

impl JsonDiffEvaluator {
    fn invalid_json(&self, side: &str, err: &serde_json::Error) -> EvalResult {
        EvalResult::new(
            self.name(),
            self.kind().as_str(),
            0.0,
            false,
            format!("Invalid JSON in {side}: {err}"),
        )
    }
}

impl Evaluator for JsonDiffEvaluator {
    fn name(&self) -> &'static str {
        "JSON Diff"
    }

    fn kind(&self) -> EvaluationKind {
        EvaluationKind::Json
    }

    fn evaluate(&self, item: &EvalItem) -> EvalResult {
        let output: Value = match serde_json::from_str(&item.output) {
            Ok(v) => v,
            Err(err) => return self.invalid_json("output", &err),
        };
        let expected: Value = match serde_json::from_str(&item.expected) {
            Ok(v) => v,
            Err(err) => return self.invalid_json("expected", &err),
        };

        let mut differences = Vec::new();
        diff_values(&output, &expected, "", &mut differences);

        let matched = differences.is_empty();
        let score = if matched {
            1.0
        } else {
            (1.0 - DIFF_PENALTY * differences.len() as f64).max(0.0)
        };
        let details = if matched {
            "JSON structures match".to_string()
        } else {
            format!("Differences found: {}", differences.join(", "))
        };

        EvalResult::new(self.name(), self.kind().as_str(), score, matched, details)
    }
}

/// The root path renders as `$`; nested paths are dot-separated.
fn label(path: &str) -> &str {
    if path.is_empty() {
        "$"
    } else {
        path
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn diff_values(output: &Value, expected: &Value, path: &str, diffs: &mut Vec<String>) {
    match (output, expected) {
        (Value::Null, Value::Null) => {}
        (Value::Null, _) | (_, Value::Null) => {
            diffs.push(format!("{}: null mismatch", label(path)));
        }
        (Value::Object(out), Value::Object(exp)) => {
            for (key, out_val) in out {
                let child = child_path(path, key);
                match exp.get(key) {
                    Some(exp_val) => diff_values(out_val, exp_val, &child, diffs),
                    None => diffs.push(format!("{child}: extra in output")),
                }
            }
            for key in exp.keys() {
                if !out.contains_key(key) {
                    diffs.push(format!("{}: missing in output", child_path(path, key)));
                }
            }
        }
        (Value::Array(out), Value::Array(exp)) => {
            for (idx, out_val) in out.iter().enumerate() {
                let child = child_path(path, &idx.to_string());
                match exp.get(idx) {
                    Some(exp_val) => diff_values(out_val, exp_val, &child, diffs),
                    None => diffs.push(format!("{child}: extra in output")),
                }
            }
            for idx in out.len()..exp.len() {
                diffs.push(format!("{}: missing in output", child_path(path, &idx.to_string())));
            }
        }
        (Value::Bool(a), Value::Bool(b)) => {
            if a != b {
                diffs.push(format!("{}: value mismatch", label(path)));
            }
        }
        (Value::Number(a), Value::Number(b)) => {
            // 1 and 1.0 compare equal.
            let equal = match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            };
            if !equal {
                diffs.push(format!("{}: value mismatch", label(path)));
            }
        }
        (Value::String(a), Value::String(b)) => {
            if a != b {
                diffs.push(format!("{}: value mismatch", label(path)));
            }
        }
        _ => diffs.push(format!("{}: type mismatch", label(path))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(output: &str, expected: &str) -> EvalItem {
        EvalItem::new("q", output, expected)
    }

    #[test]
    fn key_order_is_irrelevant() {
        let result = JsonDiffEvaluator.evaluate(&item(r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#));
        assert_eq!(result.score, 1.0);
        assert!(result.metadata.matched);
    }

    #[test]
    fn missing_key_is_reported_by_path() {
        let result = JsonDiffEvaluator
            .evaluate(&item(r#"{"name":"John"}"#, r#"{"name":"John","age":30}"#));
        assert!(!result.metadata.matched);
        assert!(result.metadata.details.contains("age: missing in output"));
        assert!((result.score - 0.9).abs() < 1e-12);
    }

    #[test]
    fn extra_key_is_reported_by_path() {
        let result = JsonDiffEvaluator
            .evaluate(&item(r#"{"name":"John","age":30}"#, r#"{"name":"John"}"#));
        assert!(!result.metadata.matched);
        assert!(result.metadata.details.contains("age: extra in output"));
    }

    #[test]
    fn nested_paths_are_dot_separated() {
        let result = JsonDiffEvaluator.evaluate(&item(
            r#"{"user":{"name":"Jane","tags":["a","b"]}}"#,
            r#"{"user":{"name":"John","tags":["a","c"]}}"#,
        ));
        assert!(result.metadata.details.contains("user.name: value mismatch"));
        assert!(result.metadata.details.contains("user.tags.1: value mismatch"));
    }

    #[test]
    fn root_type_mismatch_uses_root_label() {
        let result = JsonDiffEvaluator.evaluate(&item("[1,2]", r#"{"a":1}"#));
        assert!(!result.metadata.matched);
        assert!(result.metadata.details.contains("$: type mismatch"));
    }

    #[test]
    fn null_mismatch_is_its_own_leaf() {
        let result = JsonDiffEvaluator.evaluate(&item(r#"{"a":null}"#, r#"{"a":1}"#));
        assert!(result.metadata.details.contains("a: null mismatch"));
    }

    #[test]
    fn array_length_mismatch_reports_indices() {
        let result = JsonDiffEvaluator.evaluate(&item("[1]", "[1,2,3]"));
        assert!(result.metadata.details.contains("1: missing in output"));
        assert!(result.metadata.details.contains("2: missing in output"));
        assert!((result.score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn invalid_json_fails_closed() {
        let result = JsonDiffEvaluator.evaluate(&item("{not json", r#"{"a":1}"#));
        assert_eq!(result.score, 0.0);
        assert!(!result.metadata.matched);
        assert!(result.metadata.details.contains("Invalid JSON in output"));

        let result = JsonDiffEvaluator.evaluate(&item(r#"{"a":1}"#, "{not json"));
        assert!(result.metadata.details.contains("Invalid JSON in expected"));
    }

    #[test]
    fn many_differences_floor_the_score_at_zero() {
        let output = r#"{"a":1,"b":2,"c":3,"d":4,"e":5,"f":6}"#;
        let expected = r#"{"g":1,"h":2,"i":3,"j":4,"k":5,"l":6}"#;
        let result = JsonDiffEvaluator.evaluate(&item(output, expected));
        assert_eq!(result.score, 0.0);
        assert!(!result.metadata.matched);
    }

    #[test]
    fn integer_and_float_forms_compare_equal() {
        let result = JsonDiffEvaluator.evaluate(&item(r#"{"a":1}"#, r#"{"a":1.0}"#));
        assert!(result.metadata.matched);
    }
}
