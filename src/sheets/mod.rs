pub mod rest;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;

/// A grid of cell values addressed by A1-notation ranges.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Rows in the range, with trailing blank rows and cells trimmed.
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>>;

    /// Replace the range's contents with `rows`, starting at its top-left cell.
    async fn write_range(&self, range: &str, rows: &[Vec<String>]) -> Result<()>;
}
