use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::models::LineItem;

#[async_trait]
pub trait BudgetService: Send + Sync {
    async fn add_transactions(&self, line_items: &[LineItem], date: NaiveDate) -> Result<()>;
}
