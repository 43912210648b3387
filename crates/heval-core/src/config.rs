use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use heval_types::EvaluationKind;
use serde::{Deserialize, Serialize};

/// YAML run configuration, an alternative to spelling flags on the CLI.
///
/// ```yaml
/// kind: jaccard
/// data: items.json
/// concurrency: 16
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub kind: EvaluationKind,
    pub data: PathBuf,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_concurrency() -> usize {
    8
}

impl RunConfig {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;
        serde_yaml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))
    }
}
