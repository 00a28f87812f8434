pub mod image_preprocessor;
mod line_item_parser;

pub use line_item_parser::{LineItemParser, ParsedLine};
