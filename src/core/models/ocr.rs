#[derive(Debug, Clone, PartialEq)]
pub struct OcrResult {
    pub full_text: String,
}

impl OcrResult {
    pub fn is_blank(&self) -> bool {
        self.full_text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_for_whitespace_only_text() {
        let result = OcrResult {
            full_text: " \n\t\n".to_string(),
        };

        assert!(result.is_blank());
    }

    #[test]
    fn test_is_blank_false_when_text_present() {
        let result = OcrResult {
            full_text: "Cafe Luna 12.50\n".to_string(),
        };

        assert!(!result.is_blank());
    }
}
