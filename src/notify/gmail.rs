use super::Notifier;
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use std::time::Duration;

/// Sends mail as the token's owner through the Gmail `messages.send` endpoint.
pub struct GmailClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl GmailClient {
    pub fn new(base_url: &str, access_token: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }
}

#[async_trait]
impl Notifier for GmailClient {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let url = format!("{}/gmail/v1/users/me/messages/send", self.base_url);
        let payload = serde_json::json!({ "raw": encode_raw(to, subject, body) });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await
            .context("send message request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("send message failed ({}): {}", status, body);
        }
        tracing::debug!(to = %to, subject = %subject, "message sent");
        Ok(())
    }
}

/// RFC 5322 message, base64url-encoded as `messages.send` expects.
fn encode_raw(to: &str, subject: &str, body: &str) -> String {
    base64::engine::general_purpose::URL_SAFE.encode(build_message(to, subject, body))
}

fn build_message(to: &str, subject: &str, body: &str) -> String {
    let body = body.replace("\r\n", "\n").replace('\n', "\r\n");
    format!(
        "To: {}\r\n\
         Subject: {}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: text/plain; charset=\"UTF-8\"\r\n\
         Content-Transfer-Encoding: 8bit\r\n\
         \r\n\
         {}",
        to.trim(),
        encode_header(subject),
        body
    )
}

/// RFC 2047 encoded-word for anything outside printable ASCII.
fn encode_header(value: &str) -> String {
    if value.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return value.to_string();
    }
    format!(
        "=?UTF-8?B?{}?=",
        base64::engine::general_purpose::STANDARD.encode(value)
    )
}
