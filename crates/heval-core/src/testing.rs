use anyhow::Result;
use heval_types::EvalReport;

/// Assert the share of matched items meets a threshold.
///
/// Use this in your `#[tokio::test]` functions.
///
/// # Example
/// ```ignore
/// #[tokio::test]
/// async fn test_my_outputs() -> Result<()> {
///     let eval = Eval::builder()
///         .source(source)
///         .kind(EvaluationKind::Jaccard)
///         .build()?;
///
///     let report = eval.run().await?;
///
///     // Assert 80% pass rate
///     assert_pass_rate(&report, 0.8)?;
///
///     Ok(())
/// }
/// ```
pub fn assert_pass_rate(report: &EvalReport, min_pass_rate: f64) -> Result<()> {
    if report.summary.pass_rate < min_pass_rate {
        anyhow::bail!(
            "Evaluation failed: pass rate {:.1}% is below threshold {:.1}%\n{}",
            report.summary.pass_rate * 100.0,
            min_pass_rate * 100.0,
            report.summary_table()
        );
    }
    Ok(())
}

/// Assert the mean normalized score meets a threshold.
pub fn assert_avg_score(report: &EvalReport, min_avg_score: f64) -> Result<()> {
    if report.summary.avg_score < min_avg_score {
        anyhow::bail!(
            "Evaluation failed: avg score {:.3} is below threshold {:.3}\n{}",
            report.summary.avg_score,
            min_avg_score,
            report.summary_table()
        );
    }
    Ok(())
}

/// Assert every item matched.
pub fn assert_all_matched(report: &EvalReport) -> Result<()> {
    if report.summary.passed != report.summary.total {
        anyhow::bail!(
            "Evaluation failed: {}/{} items matched\n{}",
            report.summary.passed,
            report.summary.total,
            report.summary_table()
        );
    }
    Ok(())
}
