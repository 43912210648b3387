use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use heval_core::{
	report, Eval, EvaluationKind, ItemSource, JsonFileSource, RunConfig, VecSource,
};

#[derive(Debug, Parser)]
#[command(name = "heval", about = "Score generated text against references with heuristic evaluators")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	Run(RunArgs),
	/// List the available evaluation kinds
	Kinds,
}

#[derive(Debug, Clone, Parser)]
struct RunArgs {
	/// JSON array file of items: { "input": string, "output": string, "expected": string, "tolerance"?: number }
	#[arg(long, required_unless_present = "config")]
	data: Option<PathBuf>,

	/// Evaluation kind: exact, case_insensitive, levenshtein, numeric, json, jaccard, contains
	#[arg(long, required_unless_present = "config")]
	kind: Option<String>,

	/// YAML run config (alternative to --data/--kind)
	#[arg(long, conflicts_with_all = ["data", "kind"])]
	config: Option<PathBuf>,

	/// Concurrency (items in-flight)
	#[arg(long, default_value_t = 8)]
	concurrency: usize,

	/// Print the full per-item report in addition to the summary table
	#[arg(long, action = ArgAction::SetTrue)]
	verbose: bool,

	/// Write the JSON report artifact to a file
	#[arg(long)]
	json_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	match cli.command {
		Commands::Run(args) => run(args).await?,
		Commands::Kinds => {
			for kind in EvaluationKind::ALL {
				println!("{kind}");
			}
		}
	}
	Ok(())
}

async fn run(args: RunArgs) -> Result<()> {
	// Resolve the kind before any item is loaded; an unknown kind aborts
	// here with the valid kinds listed.
	let (kind, data, concurrency) = match (args.config, args.kind, args.data) {
		(Some(path), _, _) => {
			let config = RunConfig::load(path).await?;
			(config.kind, config.data, config.concurrency)
		}
		(None, Some(kind), Some(data)) => {
			(kind.parse::<EvaluationKind>()?, data, args.concurrency)
		}
		_ => anyhow::bail!("either --config or both --kind and --data are required"),
	};

	// Load items once so the verbose report can echo them alongside results.
	let items = JsonFileSource::new(&data).load().await?;

	let eval = Eval::builder()
		.source(Arc::new(VecSource::new(items.clone())))
		.kind(kind)
		.concurrency(concurrency)
		.build()?;

	let evaluation = eval.run().await?;

	if args.verbose {
		println!("{}", report::render_text(&items, &evaluation));
	}
	println!("{}", evaluation.summary_table());

	if let Some(path) = args.json_out {
		report::write_json(&path, &evaluation).await?;
		println!("Report written to {}", path.display());
	}

	Ok(())
}
