use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Currency amount exactly as it was read from the receipt, e.g. `"23.45"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts to thousandths of the currency unit without going through floats.
    pub fn to_milliunits(&self) -> Result<i64> {
        let text = self.0.trim();
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        if whole.is_empty()
            || fraction.len() > 3
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            anyhow::bail!("invalid amount: {:?}", self.0);
        }

        let whole_units: i64 = whole
            .parse()
            .with_context(|| format!("amount out of range: {:?}", self.0))?;
        let fraction_milliunits: i64 = format!("{:0<3}", fraction)
            .parse()
            .with_context(|| format!("invalid amount: {:?}", self.0))?;

        whole_units
            .checked_mul(1000)
            .and_then(|milliunits| milliunits.checked_add(fraction_milliunits))
            .with_context(|| format!("amount out of range: {:?}", self.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub amount: Amount,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_milliunits_scales_two_decimal_amount() {
        assert_eq!(Amount::new("23.45").to_milliunits().unwrap(), 23_450);
        assert_eq!(Amount::new("0.05").to_milliunits().unwrap(), 50);
        assert_eq!(Amount::new("199.99").to_milliunits().unwrap(), 199_990);
    }

    #[test]
    fn test_to_milliunits_accepts_whole_numbers() {
        assert_eq!(Amount::new("12").to_milliunits().unwrap(), 12_000);
    }

    #[test]
    fn test_to_milliunits_rejects_non_numeric_text() {
        assert!(Amount::new("12.ab").to_milliunits().is_err());
        assert!(Amount::new("-3.00").to_milliunits().is_err());
        assert!(Amount::new("").to_milliunits().is_err());
    }

    #[test]
    fn test_to_milliunits_rejects_overflow() {
        let error = Amount::new("99999999999999999999.99")
            .to_milliunits()
            .unwrap_err();

        assert!(format!("{:#}", error).contains("out of range"));
    }

    #[test]
    fn test_line_item_serializes_amount_as_plain_string() {
        let item = LineItem {
            description: "Whole Foods".to_string(),
            amount: Amount::new("23.45"),
            category: "groceries".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["amount"], "23.45");
        assert_eq!(json["category"], "groceries");
    }
}
