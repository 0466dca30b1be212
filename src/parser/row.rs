use crate::keywords::KeywordSet;

/// Per-row signal extracted during parsing: a keyword hit marks the row as a
/// series before any cross-row analysis happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordFlag {
    Series,
    None,
}

/// Result of parsing one raw first-column cell of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub title: String,
    pub date_text: String,
    pub keyword_flag: KeywordFlag,
}

/// Parse one raw cell of the form `Title,"Date"`, possibly followed by stray
/// `;`-delimited junk from a malformed export.
///
/// Total: never fails. The worst a garbage cell produces is empty fields.
/// Everything from the first `;` on is discarded, then the cell is split at
/// the first `,` only (titles may contain no further commas, dates are
/// simple). Surrounding quotes are stripped from the date part and both
/// parts are trimmed.
pub fn parse_row(raw: &str, keywords: &KeywordSet) -> ParsedRecord {
    let cell = raw.split(';').next().unwrap_or("");

    let (title, date_text) = match cell.split_once(',') {
        Some((left, right)) => (left.trim(), right.trim().trim_matches('"')),
        None => (cell.trim(), ""),
    };

    let keyword_flag = if keywords.matches(title) {
        KeywordFlag::Series
    } else {
        KeywordFlag::None
    };

    ParsedRecord {
        title: title.to_string(),
        date_text: date_text.to_string(),
        keyword_flag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ParsedRecord {
        parse_row(raw, &KeywordSet::default())
    }

    #[test]
    fn splits_title_and_quoted_date() {
        let rec = parse("Foo Bar,\"01/02/20\"");
        assert_eq!(rec.title, "Foo Bar");
        assert_eq!(rec.date_text, "01/02/20");
        assert_eq!(rec.keyword_flag, KeywordFlag::None);
    }

    #[test]
    fn discards_trailing_semicolon_junk() {
        let rec = parse("Foo Bar,\"01/02/20\";;;garbage");
        assert_eq!(rec.title, "Foo Bar");
        assert_eq!(rec.date_text, "01/02/20");
    }

    #[test]
    fn splits_on_first_comma_only() {
        let rec = parse("Foo,01/02/20,extra");
        assert_eq!(rec.title, "Foo");
        assert_eq!(rec.date_text, "01/02/20,extra");
    }

    #[test]
    fn missing_comma_yields_empty_date() {
        let rec = parse("Just a Title");
        assert_eq!(rec.title, "Just a Title");
        assert_eq!(rec.date_text, "");
    }

    #[test]
    fn empty_input_yields_empty_fields() {
        let rec = parse("");
        assert_eq!(rec.title, "");
        assert_eq!(rec.date_text, "");
        assert_eq!(rec.keyword_flag, KeywordFlag::None);
    }

    #[test]
    fn keyword_in_title_sets_flag() {
        let rec = parse("Dark: Temporada 1,\"03/04/21\"");
        assert_eq!(rec.keyword_flag, KeywordFlag::Series);
    }

    #[test]
    fn reparse_of_clean_output_is_stable() {
        let first = parse("  Foo Bar , \"01/02/20\" ");
        let rejoined = format!("{},{}", first.title, first.date_text);
        let second = parse(&rejoined);
        assert_eq!(first, second);
    }
}
