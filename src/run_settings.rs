use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{CategoryMap, CategoryRule};
use crate::global_constants::{
    self, DEFAULT_API_BASE_URL, DEFAULT_OCR_LANGUAGE, DEFAULT_REQUEST_TIMEOUT_SECONDS,
    LOG_TAG_SETTINGS,
};

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_ocr_language() -> String {
    DEFAULT_OCR_LANGUAGE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSettings {
    #[serde(default)]
    pub submit_transactions: bool,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
    #[serde(default)]
    pub categories: Option<Vec<CategoryRule>>,
    #[serde(default)]
    pub category_ids: HashMap<String, String>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            submit_transactions: false,
            api_base_url: default_api_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
            ocr_language: default_ocr_language(),
            categories: None,
            category_ids: HashMap::new(),
        }
    }
}

impl RunSettings {
    pub async fn load_or_default(settings_path: &Path) -> anyhow::Result<Self> {
        let settings_exist = tokio::fs::try_exists(settings_path)
            .await
            .with_context(|| format!("failed to check settings file: {}", settings_path.display()))?;

        if !settings_exist {
            log::info!(
                "{} No {} found, using defaults",
                LOG_TAG_SETTINGS,
                global_constants::SETTINGS_FILE_NAME
            );
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(settings_path)
            .await
            .with_context(|| format!("failed to read settings file: {}", settings_path.display()))?;
        let settings: RunSettings = serde_json::from_str(&contents)
            .with_context(|| format!("invalid settings file: {}", settings_path.display()))?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!(
            "{} Submit transactions: {}",
            LOG_TAG_SETTINGS,
            settings.submit_transactions
        );
        log::debug!("{} API base URL: {}", LOG_TAG_SETTINGS, settings.api_base_url);

        Ok(settings)
    }

    pub fn category_map(&self) -> CategoryMap {
        match &self.categories {
            Some(rules) => CategoryMap::build(rules.clone()),
            None => CategoryMap::default(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
