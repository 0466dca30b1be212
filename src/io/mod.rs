pub mod reader;
pub mod writer;

pub use reader::read_title_column;
pub use writer::{output_paths, write_partition};
