//! Intent classification for chat messages.
//!
//! Classification is an ordered rule table: the first predicate that fires
//! decides the intent. Order is load-bearing (greetings beat job keywords,
//! thanks beats everything after it) and each rule is testable alone.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::vocab::{contains_any, CHAT_TECH_KEYWORDS, GREETINGS, JOB_KEYWORDS, LOCATIONS, THANKS};

/// What the classifier decided a message is.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Greeting,
    Thanks,
    /// A job query, carrying the derived search string to forward.
    JobQuery { search: String },
    /// Message orbits the topic ("career", "work") without a usable query.
    NearMiss,
    Unknown,
}

/// A trimmed message with its lowercased form, shared across rules.
struct Message<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> Message<'a> {
    fn new(raw: &'a str) -> Self {
        let raw = raw.trim();
        Message {
            raw,
            lower: raw.to_lowercase(),
        }
    }
}

type Rule = (fn(&Message) -> bool, fn(&Message) -> Intent);

/// First match wins, top to bottom.
const RULES: &[Rule] = &[
    (is_greeting, |_| Intent::Greeting),
    (is_thanks, |_| Intent::Thanks),
    (is_job_query, job_query),
    (is_near_miss, |_| Intent::NearMiss),
];

pub fn classify(message: &str) -> Intent {
    let message = Message::new(message);
    for (predicate, handler) in RULES {
        if predicate(&message) {
            return handler(&message);
        }
    }
    Intent::Unknown
}

fn is_greeting(msg: &Message) -> bool {
    contains_any(&msg.lower, GREETINGS)
}

fn is_thanks(msg: &Message) -> bool {
    contains_any(&msg.lower, THANKS)
}

/// A message is a job query if it mentions a role, technology, or location,
/// carries a `dd-mm-yyyy` / `dd/mm/yyyy` date, or is short enough (1 to 3
/// words) to read as a bare company name.
fn is_job_query(msg: &Message) -> bool {
    contains_any(&msg.lower, JOB_KEYWORDS)
        || contains_any(&msg.lower, CHAT_TECH_KEYWORDS)
        || contains_any(&msg.lower, LOCATIONS)
        || chat_date_pattern().is_match(&msg.lower)
        || is_bare_company(msg)
}

fn is_bare_company(msg: &Message) -> bool {
    matches!(msg.lower.split_whitespace().count(), 1..=3)
}

fn is_near_miss(msg: &Message) -> bool {
    ["career", "work", "profession"]
        .iter()
        .any(|w| msg.lower.contains(w))
}

/// Derives the search string to forward. A valid date rewrite overrides
/// the bare-company rewrite; keyword matches forward the message as-is.
fn job_query(msg: &Message) -> Intent {
    let mut search = msg.raw.to_string();

    if !contains_any(&msg.lower, JOB_KEYWORDS)
        && !contains_any(&msg.lower, CHAT_TECH_KEYWORDS)
        && !contains_any(&msg.lower, LOCATIONS)
        && is_bare_company(msg)
    {
        search = format!("{} company", msg.raw);
    }

    if let Some(date) = normalize_date(&msg.lower) {
        search = format!("software jobs posted on {date}");
    }

    Intent::JobQuery { search }
}

fn chat_date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(\d{1,2})[-/](\d{1,2})[-/](\d{4})\b").expect("valid regex")
    })
}

/// Converts the first `dd-mm-yyyy` / `dd/mm/yyyy` occurrence to
/// `yyyy-mm-dd`. Dates that do not exist on the calendar (31-04-2024)
/// yield `None`, silently dropping the rewrite.
pub fn normalize_date(text: &str) -> Option<String> {
    let caps = chat_date_pattern().captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}
