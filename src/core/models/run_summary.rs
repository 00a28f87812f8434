use serde::Serialize;

use crate::core::models::LineItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptReport {
    pub file_name: String,
    pub line_items: Vec<LineItem>,
    pub submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptFailure {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub receipts: Vec<ReceiptReport>,
    pub failures: Vec<ReceiptFailure>,
}

impl RunSummary {
    pub fn record_success(&mut self, report: ReceiptReport) {
        self.receipts.push(report);
    }

    pub fn record_failure(&mut self, file_name: &str, error: &anyhow::Error) {
        self.failures.push(ReceiptFailure {
            file_name: file_name.to_string(),
            error: format!("{:#}", error),
        });
    }

    pub fn total_line_items(&self) -> usize {
        self.receipts
            .iter()
            .map(|report| report.line_items.len())
            .sum()
    }

    pub fn submitted_count(&self) -> usize {
        self.receipts.iter().filter(|report| report.submitted).count()
    }

    pub fn attempted_count(&self) -> usize {
        self.receipts.len() + self.failures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Amount;

    fn create_report(file_name: &str, item_count: usize, submitted: bool) -> ReceiptReport {
        let line_items = (0..item_count)
            .map(|index| LineItem {
                description: format!("Item {}", index),
                amount: Amount::new("1.00"),
                category: "uncategorized".to_string(),
            })
            .collect();

        ReceiptReport {
            file_name: file_name.to_string(),
            line_items,
            submitted,
        }
    }

    #[test]
    fn test_counts_across_successes_and_failures() {
        let mut summary = RunSummary::default();
        summary.record_success(create_report("a.png", 2, true));
        summary.record_success(create_report("b.png", 3, false));
        summary.record_failure("c.png", &anyhow::anyhow!("could not read image"));

        assert_eq!(summary.total_line_items(), 5);
        assert_eq!(summary.submitted_count(), 1);
        assert_eq!(summary.attempted_count(), 3);
    }

    #[test]
    fn test_record_failure_keeps_full_context_chain() {
        let mut summary = RunSummary::default();
        let error = anyhow::anyhow!("unexpected EOF").context("could not read image");

        summary.record_failure("broken.jpg", &error);

        assert_eq!(summary.failures[0].file_name, "broken.jpg");
        assert_eq!(
            summary.failures[0].error,
            "could not read image: unexpected EOF"
        );
    }
}
