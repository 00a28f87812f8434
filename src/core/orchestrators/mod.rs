mod receipt_orchestrator;

pub use receipt_orchestrator::ReceiptOrchestrator;
