use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;

use crate::core::models::Amount;

/// A description followed by whitespace and an amount with exactly two decimals.
/// Matching stays on a single line and the description must contain a
/// non-space character. Digits are ASCII only.
const LINE_ITEM_PATTERN: &str = r"(?m)(\S[^\n]*?)[^\S\n]+([0-9]+\.[0-9]{2})";

const ISO_DATE_PATTERN: &str = r"\b([0-9]{4})-([0-9]{2})-([0-9]{2})\b";
const US_DATE_PATTERN: &str = r"\b([0-9]{1,2})/([0-9]{1,2})/([0-9]{4}|[0-9]{2})\b";

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub description: String,
    pub amount: Amount,
}

pub struct LineItemParser {
    line_item_regex: Regex,
    iso_date_regex: Regex,
    us_date_regex: Regex,
}

impl LineItemParser {
    pub fn build() -> Result<Self> {
        Ok(Self {
            line_item_regex: Regex::new(LINE_ITEM_PATTERN)
                .context("Failed to compile line item pattern")?,
            iso_date_regex: Regex::new(ISO_DATE_PATTERN)
                .context("Failed to compile ISO date pattern")?,
            us_date_regex: Regex::new(US_DATE_PATTERN)
                .context("Failed to compile US date pattern")?,
        })
    }

    /// Lines without a trailing amount are dropped, so totals printed on their
    /// own line or amounts split by OCR across lines are missed.
    pub fn parse_line_items(&self, text: &str) -> Vec<ParsedLine> {
        self.line_item_regex
            .captures_iter(text)
            .map(|captures| ParsedLine {
                description: captures[1].trim().to_string(),
                amount: Amount::new(&captures[2]),
            })
            .collect()
    }

    /// Earliest date printed on the receipt, scanning top to bottom.
    pub fn find_receipt_date(&self, text: &str) -> Option<NaiveDate> {
        let iso_dates = self.iso_date_regex.captures_iter(text).filter_map(|captures| {
            let position = captures.get(0)?.start();
            let date = Self::build_date(&captures[1], &captures[2], &captures[3])?;
            Some((position, date))
        });

        let us_dates = self.us_date_regex.captures_iter(text).filter_map(|captures| {
            let position = captures.get(0)?.start();
            let year = match captures[3].len() {
                2 => format!("20{}", &captures[3]),
                _ => captures[3].to_string(),
            };
            let date = Self::build_date(&year, &captures[1], &captures[2])?;
            Some((position, date))
        });

        iso_dates
            .chain(us_dates)
            .min_by_key(|(position, _)| *position)
            .map(|(_, date)| date)
    }

    fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_parser() -> LineItemParser {
        LineItemParser::build().unwrap()
    }

    fn as_pairs(lines: &[ParsedLine]) -> Vec<(&str, &str)> {
        lines
            .iter()
            .map(|line| (line.description.as_str(), line.amount.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_line_items_single_line() {
        let parser = create_parser();

        let lines = parser.parse_line_items("Whole Foods 23.45");

        assert_eq!(as_pairs(&lines), vec![("Whole Foods", "23.45")]);
    }

    #[test]
    fn test_parse_line_items_keeps_text_order() {
        let parser = create_parser();

        let lines = parser.parse_line_items("Best Buy 199.99\nCafe Luna 12.50");

        assert_eq!(
            as_pairs(&lines),
            vec![("Best Buy", "199.99"), ("Cafe Luna", "12.50")]
        );
    }

    #[test]
    fn test_parse_line_items_trims_description() {
        let parser = create_parser();

        let lines = parser.parse_line_items("   Milk 2%   \t 3.49  \n");

        assert_eq!(as_pairs(&lines), vec![("Milk 2%", "3.49")]);
    }

    #[test]
    fn test_parse_line_items_drops_non_matching_lines() {
        let parser = create_parser();
        let text = "THANK YOU FOR SHOPPING\nEggs 4.5\nBread 2.99\nCard ****1234\n";

        let lines = parser.parse_line_items(text);

        assert_eq!(as_pairs(&lines), vec![("Bread", "2.99")]);
    }

    #[test]
    fn test_parse_line_items_empty_text_yields_nothing() {
        let parser = create_parser();

        assert!(parser.parse_line_items("").is_empty());
        assert!(parser.parse_line_items("no prices here\n\n").is_empty());
    }

    #[test]
    fn test_parse_line_items_does_not_join_description_and_amount_across_lines() {
        let parser = create_parser();

        let lines = parser.parse_line_items("TOTAL\n12.50\n");

        assert!(lines.is_empty());
    }

    #[test]
    fn test_parse_line_items_skips_amount_without_description() {
        let parser = create_parser();

        let lines = parser.parse_line_items("    9.99\nSoap 1.25");

        assert_eq!(as_pairs(&lines), vec![("Soap", "1.25")]);
    }

    #[test]
    fn test_parse_line_items_finds_several_amounts_on_one_line() {
        let parser = create_parser();

        let lines = parser.parse_line_items("Apples 1.00 Pears 2.00");

        assert_eq!(as_pairs(&lines), vec![("Apples", "1.00"), ("Pears", "2.00")]);
    }

    #[test]
    fn test_parse_line_items_ignores_non_ascii_digits() {
        let parser = create_parser();

        let arabic_indic = "Tea \u{661}\u{662}.\u{665}\u{660}";
        let fullwidth = "Juice \u{ff11}.\u{ff12}\u{ff13}";

        let lines = parser.parse_line_items(&format!("{}\n{}\nMilk 3.49", arabic_indic, fullwidth));

        assert_eq!(as_pairs(&lines), vec![("Milk", "3.49")]);
        assert!(lines[0].amount.to_milliunits().is_ok());
    }

    #[test]
    fn test_find_receipt_date_reads_iso_date() {
        let parser = create_parser();

        let date = parser.find_receipt_date("Store #12\n2024-10-06 14:32\nMilk 3.49");

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 10, 6));
    }

    #[test]
    fn test_find_receipt_date_reads_us_date_with_short_year() {
        let parser = create_parser();

        let date = parser.find_receipt_date("Cafe Luna\n03/15/24\nLatte 4.50");

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_find_receipt_date_prefers_earliest_in_text() {
        let parser = create_parser();

        let date = parser.find_receipt_date("12/24/2023\nReturn by 2024-01-23");

        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 24));
    }

    #[test]
    fn test_find_receipt_date_skips_impossible_dates() {
        let parser = create_parser();

        let date = parser.find_receipt_date("13/45/2024\n2024-02-30\n02/29/2024");

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_find_receipt_date_none_without_date() {
        let parser = create_parser();

        assert_eq!(parser.find_receipt_date("Whole Foods 23.45"), None);
    }
}
