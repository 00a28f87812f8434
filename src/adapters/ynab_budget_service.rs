use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::interfaces::adapters::BudgetService;
use crate::core::models::{Credentials, LineItem, TransactionBatch};

pub struct YnabBudgetService {
    client: reqwest::Client,
    credentials: Credentials,
    api_base_url: String,
    category_ids: HashMap<String, String>,
}

impl YnabBudgetService {
    pub fn build(
        credentials: Credentials,
        api_base_url: &str,
        request_timeout: Duration,
        category_ids: HashMap<String, String>,
    ) -> Result<Self> {
        log::info!(
            "[YNAB] Initializing budget service for budget {} (timeout {:?})",
            credentials.budget_id,
            request_timeout
        );

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            credentials,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            category_ids,
        })
    }

    fn transactions_url(&self) -> String {
        format!(
            "{}/budgets/{}/transactions",
            self.api_base_url,
            urlencoding::encode(&self.credentials.budget_id)
        )
    }
}

#[async_trait]
impl BudgetService for YnabBudgetService {
    async fn add_transactions(&self, line_items: &[LineItem], date: NaiveDate) -> Result<()> {
        let batch = TransactionBatch::build_from_line_items(
            line_items,
            &self.credentials.account_id,
            date,
            &self.category_ids,
        )?;

        let url = self.transactions_url();
        log::info!(
            "[YNAB] Posting {} transactions dated {}",
            batch.transactions.len(),
            date
        );
        log::debug!("[YNAB] Transactions URL: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.credentials.access_token)
            .json(&batch)
            .send()
            .await
            .context("Failed to send transactions request")?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("failed to add transactions ({}): {}", status, body);
        }

        log::info!("[YNAB] Transactions added successfully");
        Ok(())
    }
}
