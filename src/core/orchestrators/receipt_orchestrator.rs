use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::core::interfaces::adapters::{BudgetService, OcrService};
use crate::core::models::{CategoryMap, LineItem, ReceiptReport, RunSummary};
use crate::core::services::image_preprocessor;
use crate::core::services::{LineItemParser, ParsedLine};
use crate::global_constants::{ERROR_CONTEXT_READ_RECEIPTS, LOG_TAG_RECEIPTS};

pub struct ReceiptOrchestrator {
    ocr_service: Arc<dyn OcrService>,
    budget_service: Option<Arc<dyn BudgetService>>,
    line_item_parser: LineItemParser,
    category_map: CategoryMap,
}

impl ReceiptOrchestrator {
    /// Without a budget service, receipts are extracted and reported but never submitted.
    pub fn build(
        ocr_service: Arc<dyn OcrService>,
        budget_service: Option<Arc<dyn BudgetService>>,
        category_map: CategoryMap,
    ) -> Result<Self> {
        Ok(Self {
            ocr_service,
            budget_service,
            line_item_parser: LineItemParser::build()?,
            category_map,
        })
    }

    /// Regular files in the folder, sorted by name. Subdirectories are skipped.
    pub async fn list_receipt_files(receipts_directory: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(receipts_directory).await.with_context(|| {
            format!("{}: {}", ERROR_CONTEXT_READ_RECEIPTS, receipts_directory.display())
        })?;

        let mut receipt_files = Vec::new();
        while let Some(entry) = entries.next_entry().await.with_context(|| {
            format!("{}: {}", ERROR_CONTEXT_READ_RECEIPTS, receipts_directory.display())
        })? {
            let path = entry.path();
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_dir() => {
                    log::debug!("{} Skipping directory {:?}", LOG_TAG_RECEIPTS, path);
                }
                Ok(_) => receipt_files.push(path),
                Err(error) => {
                    log::warn!("{} Skipping unreadable entry {:?}: {}", LOG_TAG_RECEIPTS, path, error);
                }
            }
        }

        receipt_files.sort();
        Ok(receipt_files)
    }

    pub async fn process_directory(&self, receipts_directory: &Path) -> Result<RunSummary> {
        let receipt_files = Self::list_receipt_files(receipts_directory).await?;
        log::info!(
            "{} Found {} receipt files in {:?}",
            LOG_TAG_RECEIPTS,
            receipt_files.len(),
            receipts_directory
        );

        let mut summary = RunSummary::default();

        for receipt_path in &receipt_files {
            let file_name = Self::display_name(receipt_path);

            match self.process_receipt(receipt_path).await {
                Ok(report) => {
                    log::info!(
                        "{} {}: {} line items{}",
                        LOG_TAG_RECEIPTS,
                        file_name,
                        report.line_items.len(),
                        if report.submitted { ", submitted" } else { "" }
                    );
                    summary.record_success(report);
                }
                Err(error) => {
                    log::error!(
                        "{} failed to process receipt {}: {:#}",
                        LOG_TAG_RECEIPTS,
                        file_name,
                        error
                    );
                    summary.record_failure(&file_name, &error);
                }
            }
        }

        Ok(summary)
    }

    pub async fn process_receipt(&self, receipt_path: &Path) -> Result<ReceiptReport> {
        let file_name = Self::display_name(receipt_path);
        log::info!("{} Processing {}", LOG_TAG_RECEIPTS, file_name);

        let prepared_image = {
            let decoded_image = image_preprocessor::load_receipt_image(receipt_path)?;
            image_preprocessor::prepare_for_ocr(&decoded_image)
        };

        let ocr_result = self
            .ocr_service
            .extract_text_from_image(&prepared_image)
            .await
            .with_context(|| format!("OCR failed for {}", file_name))?;
        drop(prepared_image);

        if ocr_result.is_blank() {
            log::warn!("{} No text recognized in {}", LOG_TAG_RECEIPTS, file_name);
        }

        let parsed_lines = self.line_item_parser.parse_line_items(&ocr_result.full_text);
        let line_items = self.categorize_lines(parsed_lines);

        let submitted = match &self.budget_service {
            Some(budget_service) if !line_items.is_empty() => {
                let date = self.resolve_transaction_date(&ocr_result.full_text);
                budget_service
                    .add_transactions(&line_items, date)
                    .await
                    .with_context(|| format!("failed to add transactions for receipt {}", file_name))?;
                true
            }
            Some(_) => {
                log::info!("{} Nothing to submit for {}", LOG_TAG_RECEIPTS, file_name);
                false
            }
            None => false,
        };

        Ok(ReceiptReport {
            file_name,
            line_items,
            submitted,
        })
    }

    fn categorize_lines(&self, parsed_lines: Vec<ParsedLine>) -> Vec<LineItem> {
        parsed_lines
            .into_iter()
            .map(|line| {
                let category = self.category_map.categorize(&line.description).to_string();
                log::debug!(
                    "{} {} {} -> {}",
                    LOG_TAG_RECEIPTS,
                    line.description,
                    line.amount,
                    category
                );
                LineItem {
                    description: line.description,
                    amount: line.amount,
                    category,
                }
            })
            .collect()
    }

    fn resolve_transaction_date(&self, text: &str) -> NaiveDate {
        match self.line_item_parser.find_receipt_date(text) {
            Some(date) => date,
            None => {
                let today = Local::now().date_naive();
                log::info!(
                    "{} No date found on receipt, using {}",
                    LOG_TAG_RECEIPTS,
                    today
                );
                today
            }
        }
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}
