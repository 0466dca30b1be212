use chrono::NaiveDate;

use super::prefix::{series_prefix, PrefixCounts};
use crate::parser::{normalize_date, KeywordFlag, ParsedRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Film,
    Series,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Film => "film",
            Category::Series => "series",
        }
    }
}

/// Final per-row record, ready for output partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub keyword_flag: KeywordFlag,
    pub category: Category,
}

/// Decide a record's category.
///
/// A keyword hit is a strong row-local signal and wins outright. Failing
/// that, a title prefix shared by at least two input rows suggests numbered
/// installments of the same series. Everything else is a film. The prefix
/// signal can misfire on franchise films sharing a colon-delimited prefix;
/// that trade-off is intended.
pub fn classify(record: &ParsedRecord, counts: &PrefixCounts) -> Category {
    if record.keyword_flag == KeywordFlag::Series {
        return Category::Series;
    }
    if counts.count(series_prefix(&record.title)) > 1 {
        return Category::Series;
    }
    Category::Film
}

/// Classify the whole batch: build the frequency table over all parsed
/// records, then map each record through `classify` and the date normalizer.
pub fn classify_all(records: Vec<ParsedRecord>) -> Vec<ClassifiedRecord> {
    let counts = PrefixCounts::build(&records);
    records
        .into_iter()
        .map(|record| {
            let category = classify(&record, &counts);
            ClassifiedRecord {
                date: normalize_date(&record.date_text),
                title: record.title,
                keyword_flag: record.keyword_flag,
                category,
            }
        })
        .collect()
}

/// Split classified records into (films, series).
pub fn partition(records: Vec<ClassifiedRecord>) -> (Vec<ClassifiedRecord>, Vec<ClassifiedRecord>) {
    records
        .into_iter()
        .partition(|r| r.category == Category::Film)
}
