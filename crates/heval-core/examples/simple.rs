use std::sync::Arc;

use heval_core::{Eval, EvalItem, EvaluationKind, JsonFileSource, VecSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Example 1: Inline items
    let items = vec![
        EvalItem::new("capital of France", "Paris", "paris"),
        EvalItem::new("capital of Italy", "Rome", "Rome"),
    ];
    let source = Arc::new(VecSource::new(items));

    let eval = Eval::builder()
        .source(source)
        .kind(EvaluationKind::CaseInsensitive)
        .concurrency(8)
        .build()?;

    let report = eval.run().await?;
    println!("{}", report.summary_table());

    // Example 2: Load from a JSON array file if provided
    if let Some(path) = std::env::args().nth(1) {
        let source = Arc::new(JsonFileSource::new(path));
        let eval = Eval::builder()
            .source(source)
            .kind(EvaluationKind::Levenshtein)
            .build()?;
        let report = eval.run().await?;
        println!("{}", report.summary_table());
    }

    Ok(())
}
