pub const APPLICATION_NAME: &str = "Receipts to Budget";

pub const CREDENTIALS_FILE_NAME: &str = "credentials.txt";
pub const RECEIPTS_DIRECTORY: &str = "receipts";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_RECEIPTS: &str = "[RECEIPTS]";
pub const LOG_TAG_CREDENTIALS: &str = "[CREDENTIALS]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_PREPROCESS: &str = "[PREPROCESS]";

pub const DEFAULT_API_BASE_URL: &str = "https://api.youneedabudget.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

pub const THRESHOLD_CUTOFF: u8 = 150;

pub const UNCATEGORIZED: &str = "uncategorized";

pub const TRANSACTION_MEMO: &str = "Imported from receipt";
pub const TRANSACTION_CLEARED_STATUS: &str = "cleared";

pub const ERROR_CONTEXT_READ_CREDENTIALS: &str = "failed to read credentials file";
pub const ERROR_CONTEXT_READ_RECEIPTS: &str = "failed to read receipts folder";
pub const ERROR_CONTEXT_DECODE_IMAGE: &str = "could not read image";

pub const MESSAGE_CREDENTIALS_LINES: &str =
    "credentials file should contain at least three lines: YNAB_ACCESS_TOKEN, BUDGET_ID, ACCOUNT_ID";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Receipts to Budget                                    ║
║                                                        ║
║  Reading receipt images from ./receipts                ║
║  Credentials are loaded from ./credentials.txt         ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
