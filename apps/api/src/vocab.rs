//! Fixed vocabulary used by intent classification and result filtering.
//!
//! Everything here is static configuration data, not control flow: the
//! classifier and filters only ever ask "does this text contain a term from
//! list X". Extending coverage (new locations, new stacks) means editing a
//! slice, not a handler.

/// Greeting phrases. Substring match against the lowercased message.
pub const GREETINGS: &[&str] = &["hi", "hello", "hey", "good morning", "good evening"];

/// Thanks phrases. Checked after greetings, before job detection.
pub const THANKS: &[&str] = &["thank you", "thanks", "thx", "ty"];

/// Role words that mark a message as a job query.
pub const JOB_KEYWORDS: &[&str] = &[
    "job", "jobs", "developer", "engineer", "analyst", "designer", "manager", "intern", "hiring",
    "vacancy", "opening",
];

/// Technology terms extracted as the technology hint from a search string.
/// Deliberately excludes "software": the chat side rewrites date queries to
/// "software jobs posted on ...", and that word must not turn into a
/// title/description filter.
pub const TECH_KEYWORDS: &[&str] = &[
    "python", "java", "react", "node", "aws", "ml", "ai", "data", "sql", "cloud", "devops",
    "full stack", "backend", "frontend",
];

/// Technology terms that mark a chat message as a job query. Superset of
/// [`TECH_KEYWORDS`]: "software" counts for detection but never as a hint.
pub const CHAT_TECH_KEYWORDS: &[&str] = &[
    "python", "java", "react", "node", "aws", "ml", "ai", "data", "sql", "cloud", "devops",
    "software", "full stack", "backend", "frontend",
];

/// Known location names. First match by list order wins.
pub const LOCATIONS: &[&str] = &[
    "usa",
    "us",
    "india",
    "new york",
    "washington",
    "chicago",
    "california",
    "london",
];

/// Strict software/IT relevance terms. A listing whose title contains none
/// of these is dropped before any other filter is considered.
pub const SOFTWARE_TERMS: &[&str] = &[
    "software",
    "developer",
    "engineer",
    "programmer",
    "tech",
    "it",
    "fullstack",
    "frontend",
    "backend",
    "cloud",
    "ai",
    "ml",
    "data",
    "sql",
    "devops",
];

/// Terms a listing's title or skills must contain to be shown in chat.
pub const SOFTWARE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "programmer",
    "analyst",
    "architect",
    "full stack",
    "frontend",
    "backend",
    "devops",
    "cloud",
    "ml",
    "ai",
    "data",
    "sql",
    "java",
    "python",
    "node",
    "react",
    "software",
];

/// Returns true if any term in `terms` occurs as a substring of `text`.
/// Callers are expected to pass already-lowercased text.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

/// Returns the first term in `terms` that occurs in `text`, by list order.
pub fn first_match<'a>(text: &str, terms: &'a [&'a str]) -> Option<&'a str> {
    terms.iter().find(|t| text.contains(*t)).copied()
}
