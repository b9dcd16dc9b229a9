pub mod gmail;

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Fire-and-forget plain-text message.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}
