mod category_map;
mod credentials;
mod line_item;
mod ocr;
mod run_summary;
mod transaction;

pub use category_map::{CategoryMap, CategoryRule};
pub use credentials::Credentials;
pub use line_item::{Amount, LineItem};
pub use ocr::OcrResult;
pub use run_summary::{ReceiptReport, RunSummary};
pub use transaction::TransactionBatch;
