use serde::{Deserialize, Serialize};

use crate::global_constants::UNCATEGORIZED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: &str, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        }
    }
}

/// Ordered keyword table. When a description matches keywords from more than
/// one category, the category configured first wins.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::build(vec![
            CategoryRule::new("groceries", &["walmart", "whole foods", "grocery"]),
            CategoryRule::new("dining", &["restaurant", "cafe", "diner"]),
            CategoryRule::new("electronics", &["best buy", "electronics", "tech"]),
        ])
    }
}

impl CategoryMap {
    pub fn build(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| CategoryRule {
                category: rule.category,
                keywords: rule
                    .keywords
                    .iter()
                    .map(|keyword| keyword.trim().to_lowercase())
                    .filter(|keyword| !keyword.is_empty())
                    .collect(),
            })
            .collect();

        Self { rules }
    }

    pub fn categorize(&self, description: &str) -> &str {
        let description_lower = description.to_lowercase();

        self.rules
            .iter()
            .find(|rule| {
                rule.keywords
                    .iter()
                    .any(|keyword| description_lower.contains(keyword.as_str()))
            })
            .map(|rule| rule.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.category.as_str())
    }
}
