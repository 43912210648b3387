use std::sync::Arc;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use heval_types::{EvalReport, EvalResult, EvaluationKind};

use crate::datasource::ItemSource;
use crate::evaluator::{evaluator_for, Evaluator};

pub struct EvalBuilder {
	source: Option<Arc<dyn ItemSource>>,
	kind: Option<EvaluationKind>,
	concurrency: usize,
}

impl EvalBuilder {
	pub fn new() -> Self {
		Self {
			source: None,
			kind: None,
			concurrency: 8,
		}
	}

	pub fn source(mut self, source: Arc<dyn ItemSource>) -> Self {
		self.source = Some(source);
		self
	}

	pub fn kind(mut self, kind: EvaluationKind) -> Self {
		self.kind = Some(kind);
		self
	}

	pub fn concurrency(mut self, n: usize) -> Self {
		self.concurrency = n.max(1);
		self
	}

	pub fn build(self) -> Result<Eval> {
		Ok(Eval {
			source: self.source.ok_or_else(|| anyhow::anyhow!("source must be set"))?,
			kind: self.kind.ok_or_else(|| anyhow::anyhow!("kind must be set"))?,
			concurrency: self.concurrency,
		})
	}
}

impl Default for EvalBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Batch run: one kind applied to every item of one source.
///
/// Items never interact, so they may be evaluated in-flight concurrently;
/// results are reassembled in input order before returning.
pub struct Eval {
	source: Arc<dyn ItemSource>,
	kind: EvaluationKind,
	concurrency: usize,
}

impl Eval {
	pub fn builder() -> EvalBuilder {
		EvalBuilder::new()
	}

	pub async fn run(&self) -> Result<EvalReport> {
		let items = self.source.load().await?;
		let evaluator: Arc<dyn Evaluator> = Arc::from(evaluator_for(self.kind));

		let stream = stream::iter(items.into_iter()).map(move |item| {
			let evaluator = evaluator.clone();
			async move { evaluator.evaluate(&item) }
		});

		// buffered, not buffer_unordered: result i must line up with item i.
		let results: Vec<EvalResult> = stream.buffered(self.concurrency).collect().await;
		Ok(EvalReport::from_results(results))
	}
}
