use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::models::LineItem;
use crate::global_constants::{TRANSACTION_CLEARED_STATUS, TRANSACTION_MEMO};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub account_id: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub payee_name: String,
    pub category_id: Option<String>,
    pub memo: String,
    pub cleared: String,
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionBatch {
    pub transactions: Vec<Transaction>,
}

impl TransactionBatch {
    /// Receipt purchases are recorded as outflows, so amounts go out negative.
    pub fn build_from_line_items(
        line_items: &[LineItem],
        account_id: &str,
        date: NaiveDate,
        category_ids: &HashMap<String, String>,
    ) -> Result<Self> {
        let transactions = line_items
            .iter()
            .map(|item| {
                let milliunits = item.amount.to_milliunits().with_context(|| {
                    format!("failed to convert amount for {:?}", item.description)
                })?;

                Ok(Transaction {
                    account_id: account_id.to_string(),
                    date,
                    amount: -milliunits,
                    payee_name: item.description.clone(),
                    category_id: category_ids.get(&item.category).cloned(),
                    memo: TRANSACTION_MEMO.to_string(),
                    cleared: TRANSACTION_CLEARED_STATUS.to_string(),
                    approved: true,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { transactions })
    }
}
