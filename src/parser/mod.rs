pub mod date;
pub mod row;

pub use date::normalize_date;
pub use row::{parse_row, KeywordFlag, ParsedRecord};
