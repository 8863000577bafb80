//! Hint extraction: derives structured filter hints (location, date,
//! company token, technology) from a free-text search query. Extractions
//! are independent and non-exclusive; any subset may be present.

use std::sync::OnceLock;

use regex::Regex;

use crate::vocab::{first_match, LOCATIONS, TECH_KEYWORDS};

/// Optional filter hints pulled out of a raw query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryHints {
    /// First known location found in the query, by list order.
    pub location: Option<&'static str>,
    /// First `yyyy-mm-dd` substring, kept as matched text. Calendar
    /// validity is checked at filter time, not here.
    pub date: Option<String>,
    /// The word immediately preceding the literal token "company".
    pub company: Option<String>,
    /// First known technology term found in the query.
    pub technology: Option<&'static str>,
}

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("valid regex"))
}

pub fn extract_hints(query: &str) -> QueryHints {
    let lower = query.to_lowercase();

    QueryHints {
        location: first_match(&lower, LOCATIONS),
        date: date_pattern().find(&lower).map(|m| m.as_str().to_string()),
        company: extract_company(&lower),
        technology: first_match(&lower, TECH_KEYWORDS),
    }
}

/// Heuristic: "X company" names X as the employer filter. No match if
/// "company" is absent or the first word.
fn extract_company(lower: &str) -> Option<String> {
    let words: Vec<&str> = lower.split_whitespace().collect();
    words
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &word)| word == "company")
        .map(|(i, _)| words[i - 1].to_string())
}
