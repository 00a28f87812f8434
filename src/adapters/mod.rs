mod tesseract_ocr_service;
mod ynab_budget_service;

pub use tesseract_ocr_service::TesseractOcrService;
pub use ynab_budget_service::YnabBudgetService;
