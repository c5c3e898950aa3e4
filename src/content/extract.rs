//! Metadata heuristics applied to a post body

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::helpers::date::{month_year_to_date, parse_date};

/// Reading speed used for `minRead`
pub const WORDS_PER_MINUTE: usize = 200;

/// Paragraphs at or below this many characters never become the description
pub const MIN_PARAGRAPH_CHARS: usize = 50;

/// Descriptions are cut to this many characters
pub const MAX_DESCRIPTION_CHARS: usize = 200;

lazy_static! {
    static ref TOP_HEADING: Regex = Regex::new(r"(?m)^#[ \t]+(.+?)\s*$").unwrap();
    static ref BRACKETED: Regex = Regex::new(r"\[.*?\]").unwrap();
    static ref LINK: Regex = Regex::new(r"\[.*?\]\(.*?\)").unwrap();
    static ref MONTH_YEAR: Regex = Regex::new(r"\[([A-Za-z]+)\s+(\d{4})\]").unwrap();
}

/// Text of the first `# ` heading with bracketed annotations removed
pub fn extract_title(body: &str) -> Option<String> {
    let caps = TOP_HEADING.captures(body)?;
    let title = BRACKETED.replace_all(&caps[1], "");
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// First prose paragraph longer than [`MIN_PARAGRAPH_CHARS`], cut to
/// [`MAX_DESCRIPTION_CHARS`]
pub fn extract_description(body: &str) -> Option<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim_start();
        let cleaned = LINK.replace_all(line, "").replace("**", "");
        let cleaned = cleaned.trim();
        // Headings, block quotes and link-only lines are dropped but still
        // separate paragraphs
        if trimmed.starts_with('#') || trimmed.starts_with('>') || cleaned.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
            continue;
        }
        current.push(cleaned.to_string());
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    let paragraph = paragraphs
        .into_iter()
        .map(|p| p.trim().to_string())
        .find(|p| p.chars().count() > MIN_PARAGRAPH_CHARS)?;

    if paragraph.chars().count() > MAX_DESCRIPTION_CHARS {
        let cut: String = paragraph.chars().take(MAX_DESCRIPTION_CHARS).collect();
        Some(format!("{}...", cut))
    } else {
        Some(paragraph)
    }
}

/// `[Month Year]` anywhere in the body, as the first of that month
pub fn extract_date(body: &str) -> Option<NaiveDate> {
    MONTH_YEAR
        .captures_iter(body)
        .find_map(|caps| month_year_to_date(&caps[1], &caps[2]))
}

/// Body date, else the existing front-matter date, else `today`
pub fn resolve_date(body: &str, existing: Option<&str>, today: NaiveDate) -> NaiveDate {
    extract_date(body)
        .or_else(|| existing.and_then(parse_date))
        .unwrap_or(today)
}

/// Minutes to read at [`WORDS_PER_MINUTE`], never less than one
pub fn estimate_read_time(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_strips_annotation() {
        assert_eq!(
            extract_title("intro\n# My Post Title [Draft]\n\nbody"),
            Some("My Post Title".to_string())
        );
    }

    #[test]
    fn test_title_ignores_subheadings() {
        assert_eq!(extract_title("## Not this\n\ntext"), None);
        assert_eq!(
            extract_title("## Section\n# Real Title\n"),
            Some("Real Title".to_string())
        );
    }

    #[test]
    fn test_title_empty_after_strip() {
        assert_eq!(extract_title("# [October 2024]\n"), None);
    }

    #[test]
    fn test_description_skips_short_and_markup() {
        let body = "# Title\n\n> A quote that is long enough to count but is a quote anyway, really.\n\nShort one.\n\nThis **paragraph** has a [link](https://example.com) and is comfortably longer than fifty characters.\n";
        assert_eq!(
            extract_description(body),
            Some(
                "This paragraph has a  and is comfortably longer than fifty characters."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_description_joins_wrapped_lines() {
        let body = "First line of a paragraph that wraps\nonto a second line to pass the length bar.\n";
        assert_eq!(
            extract_description(body),
            Some(
                "First line of a paragraph that wraps onto a second line to pass the length bar."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_description_link_only_line_breaks_paragraph() {
        let body = "[Cover](https://example.com/cover.png)\nA first paragraph that is long enough to be picked as the summary.\n[Source](https://example.com)\nTrailing line.\n";
        assert_eq!(
            extract_description(body),
            Some("A first paragraph that is long enough to be picked as the summary.".to_string())
        );
    }

    #[test]
    fn test_description_truncates_long_paragraph() {
        let paragraph: String = "abcdefghij".repeat(25);
        assert_eq!(paragraph.len(), 250);
        let desc = extract_description(&paragraph).unwrap();
        assert_eq!(desc, format!("{}...", &paragraph[..200]));
    }

    #[test]
    fn test_description_exactly_max_is_untouched() {
        let paragraph: String = "x".repeat(200);
        assert_eq!(extract_description(&paragraph), Some(paragraph));
    }

    #[test]
    fn test_description_none_when_nothing_qualifies() {
        assert_eq!(extract_description("# Title\n\ntoo short\n"), None);
    }

    #[test]
    fn test_date_from_month_year() {
        assert_eq!(
            extract_date("Written [March 2023] on a train"),
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
    }

    #[test]
    fn test_date_skips_non_month_brackets() {
        assert_eq!(
            extract_date("[Draft 2024] then [October 2024]"),
            NaiveDate::from_ymd_opt(2024, 10, 1)
        );
    }

    #[test]
    fn test_resolve_date_priority() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(
            resolve_date("[May 2022]", Some("2020-01-01"), today),
            NaiveDate::from_ymd_opt(2022, 5, 1).unwrap()
        );
        assert_eq!(
            resolve_date("no token", Some("2020-01-01"), today),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(resolve_date("no token", Some("garbage"), today), today);
        assert_eq!(resolve_date("no token", None, today), today);
    }

    #[test]
    fn test_read_time() {
        assert_eq!(estimate_read_time(&"word ".repeat(400)), 2);
        assert_eq!(estimate_read_time(&"word ".repeat(401)), 3);
        assert_eq!(estimate_read_time("word"), 1);
        assert_eq!(estimate_read_time(""), 1);
    }
}
