mod adapters;
mod core;
mod global_constants;
mod run_settings;

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{TesseractOcrService, YnabBudgetService};
use crate::core::interfaces::adapters::{BudgetService, OcrService};
use crate::core::models::{Credentials, RunSummary};
use crate::core::orchestrators::ReceiptOrchestrator;
use crate::global_constants::{
    APPLICATION_NAME, CREDENTIALS_FILE_NAME, LOG_TAG_MAIN, RECEIPTS_DIRECTORY,
    SETTINGS_FILE_NAME, STARTUP_BANNER,
};
use crate::run_settings::RunSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);
    log::info!("{} {}", LOG_TAG_MAIN, STARTUP_BANNER);

    let settings = RunSettings::load_or_default(Path::new(SETTINGS_FILE_NAME)).await?;
    let credentials = Credentials::load(Path::new(CREDENTIALS_FILE_NAME)).await?;

    let category_map = settings.category_map();
    log::info!(
        "{} Categories in priority order: {}",
        LOG_TAG_MAIN,
        category_map.categories().collect::<Vec<_>>().join(", ")
    );

    let ocr_service: Arc<dyn OcrService> =
        Arc::new(TesseractOcrService::build(&settings.ocr_language)?);

    let budget_service: Option<Arc<dyn BudgetService>> = if settings.submit_transactions {
        Some(Arc::new(YnabBudgetService::build(
            credentials,
            &settings.api_base_url,
            settings.request_timeout(),
            settings.category_ids.clone(),
        )?))
    } else {
        log::info!(
            "{} Transaction submission is disabled, set \"submit_transactions\" in {} to enable it",
            LOG_TAG_MAIN,
            SETTINGS_FILE_NAME
        );
        None
    };

    let orchestrator = ReceiptOrchestrator::build(ocr_service, budget_service, category_map)?;
    let summary = orchestrator
        .process_directory(Path::new(RECEIPTS_DIRECTORY))
        .await?;

    print!("{}", render_line_items(&summary)?);
    log_summary(&summary);

    Ok(())
}

/// Stdout carries only the categorized line items; everything else goes through the logger.
fn render_line_items(summary: &RunSummary) -> anyhow::Result<String> {
    let mut output = String::new();
    for report in &summary.receipts {
        output.push_str(&format!(
            "{}:\n{}\n",
            report.file_name,
            serde_json::to_string_pretty(&report.line_items)?
        ));
    }
    Ok(output)
}

fn log_summary(summary: &RunSummary) {
    log::info!(
        "{} Processed {} receipts: {} succeeded, {} failed, {} line items, {} submitted",
        LOG_TAG_MAIN,
        summary.attempted_count(),
        summary.receipts.len(),
        summary.failures.len(),
        summary.total_line_items(),
        summary.submitted_count()
    );

    for failure in &summary.failures {
        log::warn!("{} {} was skipped: {}", LOG_TAG_MAIN, failure.file_name, failure.error);
    }
}
