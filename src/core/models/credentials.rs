use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::global_constants::{
    ERROR_CONTEXT_READ_CREDENTIALS, LOG_TAG_CREDENTIALS, MESSAGE_CREDENTIALS_LINES,
};

/// API access loaded once at startup and shared read-only for the whole run.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub access_token: String,
    pub budget_id: String,
    pub account_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("budget_id", &self.budget_id)
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl Credentials {
    /// Expects the token, budget id and account id on the first three lines.
    pub fn parse(contents: &str) -> Result<Self> {
        let lines: Vec<&str> = contents.lines().map(str::trim).collect();

        if lines.len() < 3 {
            anyhow::bail!(MESSAGE_CREDENTIALS_LINES);
        }

        let (access_token, budget_id, account_id) = (lines[0], lines[1], lines[2]);

        for (name, value) in [
            ("YNAB_ACCESS_TOKEN", access_token),
            ("BUDGET_ID", budget_id),
            ("ACCOUNT_ID", account_id),
        ] {
            if value.is_empty() {
                anyhow::bail!("credentials file has an empty {} line", name);
            }
        }

        Ok(Self {
            access_token: access_token.to_string(),
            budget_id: budget_id.to_string(),
            account_id: account_id.to_string(),
        })
    }

    pub async fn load(path: &Path) -> Result<Self> {
        log::info!("{} Loading credentials from {:?}", LOG_TAG_CREDENTIALS, path);

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("{}: {}", ERROR_CONTEXT_READ_CREDENTIALS, path.display()))?;

        let credentials = Self::parse(&contents)
            .with_context(|| format!("invalid credentials file: {}", path.display()))?;

        log::debug!(
            "{} Loaded credentials for budget {}",
            LOG_TAG_CREDENTIALS,
            credentials.budget_id
        );
        Ok(credentials)
    }
}
