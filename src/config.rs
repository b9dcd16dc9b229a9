use crate::error::{SelectionError, SelectionResult};
use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::Path;

const ENV_FILE: &str = ".env";
const ACCESS_TOKEN_VAR: &str = "GOOGLE_ACCESS_TOKEN";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub sheets: SheetsConfig,
    pub mail: MailConfig,
    pub selection: SelectionConfig,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    #[serde(default = "default_sheets_api_base")]
    pub api_base: String,
    /// Columns: name | category | last contacted | last selected
    #[serde(default = "default_contacts_range")]
    pub contacts_range: String,
    /// Columns: code | description | frequency (weeks)
    #[serde(default = "default_categories_range")]
    pub categories_range: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    pub recipient: String,
    #[serde(default = "default_mail_api_base")]
    pub api_base: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_preamble")]
    pub preamble: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SelectionConfig {
    /// IANA zone name, e.g. "America/Toronto".
    pub timezone: String,
    pub max_contacts_per_week: usize,
    #[serde(default)]
    pub due_basis: DueBasis,
}

/// Which date column a contact's recontact interval is measured from.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DueBasis {
    #[default]
    LastSelected,
    LastContacted,
}

fn default_request_timeout_ms() -> u64 { 10_000 }
fn default_sheets_api_base() -> String { "https://sheets.googleapis.com".to_string() }
fn default_contacts_range() -> String { "Names!A2:D1000".to_string() }
fn default_categories_range() -> String { "Categories!A2:C5".to_string() }
fn default_mail_api_base() -> String { "https://gmail.googleapis.com".to_string() }
fn default_subject() -> String { "Weekly Contacts".to_string() }
fn default_preamble() -> String { "Reach out to your contacts this week:\n".to_string() }

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Reject settings that would only blow up halfway through a run.
    pub fn validate(&self) -> SelectionResult<()> {
        if self.sheets.spreadsheet_id.trim().is_empty() {
            return Err(config_error("sheets.spreadsheet_id is empty"));
        }
        if self.sheets.contacts_range.trim().is_empty() {
            return Err(config_error("sheets.contacts_range is empty"));
        }
        if self.sheets.categories_range.trim().is_empty() {
            return Err(config_error("sheets.categories_range is empty"));
        }
        let recipient = self.mail.recipient.trim();
        if recipient.is_empty() || !recipient.contains('@') {
            return Err(config_error(format!(
                "mail.recipient {:?} is not an email address",
                self.mail.recipient
            )));
        }
        // Both end up in message headers.
        if has_line_break(recipient) || has_line_break(&self.mail.subject) {
            return Err(config_error("mail.recipient and mail.subject must be a single line"));
        }
        self.timezone()?;
        Ok(())
    }

    pub fn timezone(&self) -> SelectionResult<Tz> {
        let name = self.selection.timezone.trim();
        name.parse::<Tz>().map_err(|e| {
            config_error(format!("selection.timezone {:?} is not an IANA zone: {}", name, e))
        })
    }

    /// Load .env file into process environment. Real env vars take precedence.
    pub fn load_env_file() {
        let path = Path::new(ENV_FILE);
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return,
        };
        // Strip BOM if present (common on Windows-created files)
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        for line in content.lines() {
            let line = line.trim().trim_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
    }

    /// OAuth access token with the spreadsheets and gmail.send scopes.
    /// Runs are unattended, so there is no interactive fallback.
    pub fn access_token() -> SelectionResult<String> {
        match std::env::var(ACCESS_TOKEN_VAR) {
            Ok(token) if !sanitize_key(&token).is_empty() => Ok(sanitize_key(&token)),
            _ => Err(config_error(format!("{} is not set", ACCESS_TOKEN_VAR))),
        }
    }
}

fn config_error(msg: impl Into<String>) -> SelectionError {
    SelectionError::Configuration(msg.into())
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\r', '\n'])
}

/// Strip carriage returns, BOM, and other invisible chars from a key/path value.
fn sanitize_key(raw: &str) -> String {
    raw.replace(['\r', '\u{feff}', '\u{200b}'], "")
        .trim()
        .to_string()
}
