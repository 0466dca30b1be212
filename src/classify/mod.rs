pub mod classifier;
pub mod prefix;

pub use classifier::{classify, classify_all, partition, Category, ClassifiedRecord};
pub use prefix::{series_prefix, PrefixCounts};
