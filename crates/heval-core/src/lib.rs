//! heval-core: deterministic heuristic evaluation engine.
//! Score generated text against expected references with pure, reproducible
//! comparison algorithms; run batches with order-preserving concurrency.
//! See `examples/simple.rs` for a quickstart.

pub mod config;
pub mod datasource;
pub mod evaluator;
pub mod report;
pub mod runner;
pub mod testing;

pub mod evaluators {
    pub mod contains;
    pub mod exact;
    pub mod jaccard;
    pub mod json;
    pub mod levenshtein;
    pub mod numeric;
}

pub use config::RunConfig;
pub use datasource::{ItemSource, JsonFileSource, VecSource};
pub use evaluator::{evaluate_batch, evaluator_for, Evaluator};
pub use evaluators::{
    contains::ContainsEvaluator,
    exact::{CaseInsensitiveEvaluator, ExactMatchEvaluator},
    jaccard::JaccardEvaluator,
    json::JsonDiffEvaluator,
    levenshtein::LevenshteinEvaluator,
    numeric::NumericEvaluator,
};
pub use heval_types::{
    EvalItem, EvalMetadata, EvalReport, EvalResult, EvalSummary, EvaluationKind,
    UnknownKindError, DEFAULT_TOLERANCE,
};
pub use runner::{Eval, EvalBuilder};
