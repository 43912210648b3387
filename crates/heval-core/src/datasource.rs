use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use heval_types::EvalItem;

/// Yields the ordered batch of items a run evaluates.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn load(&self) -> Result<Vec<EvalItem>>;
}

pub struct VecSource {
    items: Vec<EvalItem>,
}

impl VecSource {
    pub fn new(items: Vec<EvalItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemSource for VecSource {
    async fn load(&self) -> Result<Vec<EvalItem>> {
        Ok(self.items.clone())
    }
}

/// Reads a JSON array file where every element is
/// `{ "input": string, "output": string, "expected": string, "tolerance"?: number }`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ItemSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<EvalItem>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {:?}", self.path))?;
        parse_items(&content).with_context(|| format!("Invalid items file {:?}", self.path))
    }
}

/// Validates the file shape without touching the filesystem.
pub fn parse_items(content: &str) -> Result<Vec<EvalItem>> {
    let value: serde_json::Value = serde_json::from_str(content).context("not valid JSON")?;
    let array = value
        .as_array()
        .ok_or_else(|| anyhow!("expected a JSON array of items"))?;

    let mut items = Vec::with_capacity(array.len());
    for (idx, element) in array.iter().enumerate() {
        let item: EvalItem = serde_json::from_value(element.clone())
            .with_context(|| format!("item {idx}: missing or mistyped field"))?;
        items.push(item);
    }
    Ok(items)
}
