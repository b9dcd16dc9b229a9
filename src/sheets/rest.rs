use super::types::*;
use super::TabularStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    access_token: String,
}

impl SheetsClient {
    pub fn new(
        base_url: &str,
        spreadsheet_id: &str,
        access_token: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            access_token,
        })
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}` with the range percent-encoded.
    fn values_url(&self, range: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid Sheets API base URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Sheets API base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }
}

#[async_trait]
impl TabularStore for SheetsClient {
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(range)?;
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .with_context(|| format!("GET values {} failed", range))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GET values {} failed ({}): {}", range, status, body);
        }

        let parsed: ValueRange = resp
            .json()
            .await
            .with_context(|| format!("failed to parse values response for {}", range))?;
        tracing::debug!(range = %range, rows = parsed.values.len(), "read range");
        Ok(parsed.values)
    }

    async fn write_range(&self, range: &str, rows: &[Vec<String>]) -> Result<()> {
        let url = self.values_url(range)?;
        let body = ValueRange {
            range: range.to_string(),
            major_dimension: Some("ROWS".to_string()),
            values: rows.to_vec(),
        };

        let resp = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&body)
            .send()
            .await
            .with_context(|| format!("PUT values {} failed", range))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("PUT values {} failed ({}): {}", range, status, body);
        }

        let updated: UpdateValuesResponse = resp
            .json()
            .await
            .with_context(|| format!("failed to parse update response for {}", range))?;
        tracing::debug!(
            range = %range,
            updated_rows = updated.updated_rows,
            updated_cells = updated.updated_cells,
            "wrote range"
        );
        Ok(())
    }
}
