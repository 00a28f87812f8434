mod budget_service;
mod ocr_service;

pub use budget_service::BudgetService;
pub use ocr_service::OcrService;
