//! Post-filtering of upstream records. All checks must pass for a record
//! to survive; failures drop the single listing, never the request.

use chrono::NaiveDate;

use crate::jobs::hints::QueryHints;
use crate::jobs::models::{JobListing, RawJob};
use crate::vocab::{contains_any, SOFTWARE_KEYWORDS, SOFTWARE_TERMS};

/// Applies the full filter chain to one raw record.
pub fn passes_filters(raw: &RawJob, hints: &QueryHints) -> bool {
    let title = raw.job_title.as_deref().unwrap_or_default().to_lowercase();
    let description = raw
        .job_description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let employer = raw
        .employer_name
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    // Strict relevance gate: applies even when no hint was extracted.
    if !contains_any(&title, SOFTWARE_TERMS) {
        return false;
    }

    if let Some(tech) = hints.technology {
        if !title.contains(tech) && !description.contains(tech) {
            return false;
        }
    }

    if let Some(company) = &hints.company {
        if !employer.contains(company.as_str()) {
            return false;
        }
    }

    if let Some(date) = &hints.date {
        if !posted_on(raw, date) {
            return false;
        }
    }

    true
}

/// Exact calendar-date match against the listing's posted timestamp.
/// A missing or unparseable timestamp fails the check, as does an
/// extracted date that is not a real calendar date (e.g. 2024-02-31);
/// either way only this listing is skipped.
fn posted_on(raw: &RawJob, date: &str) -> bool {
    let Ok(wanted) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return false;
    };
    let Some(posted) = raw.job_posted_at_datetime_utc.as_deref() else {
        return false;
    };
    // Timestamps arrive as ISO-8601 (`2024-03-15T07:00:00Z`); the calendar
    // date is the leading ten characters.
    let Some(posted_date) = posted
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    else {
        return false;
    };
    posted_date == wanted
}

/// Chat-side relevance: the listing's title or skills must mention a
/// recognized software term. This is the invariant on everything shown
/// to the end user.
pub fn is_software_listing(listing: &JobListing) -> bool {
    let title = listing.title.to_lowercase();
    let skills = listing.skills_required.to_lowercase();
    SOFTWARE_KEYWORDS
        .iter()
        .any(|kw| title.contains(kw) || skills.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn software_job(title: &str) -> RawJob {
        RawJob {
            job_title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_non_software_title_dropped_unconditionally() {
        let raw = software_job("Head Chef");
        assert!(!passes_filters(&raw, &QueryHints::default()));
    }

    #[test]
    fn test_software_title_passes_with_no_hints() {
        let raw = software_job("Backend Developer");
        assert!(passes_filters(&raw, &QueryHints::default()));
    }

    #[test]
    fn test_technology_hint_checks_title_and_description() {
        let hints = QueryHints {
            technology: Some("python"),
            ..Default::default()
        };
        let in_title = software_job("Python Developer");
        assert!(passes_filters(&in_title, &hints));

        let mut in_desc = software_job("Software Engineer");
        in_desc.job_description = Some("Strong Python background required".to_string());
        assert!(passes_filters(&in_desc, &hints));

        let neither = software_job("Software Engineer");
        assert!(!passes_filters(&neither, &hints));
    }

    #[test]
    fn test_company_hint_matches_employer_substring() {
        let hints = QueryHints {
            company: Some("google".to_string()),
            ..Default::default()
        };
        let mut raw = software_job("Software Engineer");
        raw.employer_name = Some("Google LLC".to_string());
        assert!(passes_filters(&raw, &hints));

        raw.employer_name = Some("Initech".to_string());
        assert!(!passes_filters(&raw, &hints));
    }

    #[test]
    fn test_date_hint_requires_exact_calendar_match() {
        let hints = QueryHints {
            date: Some("2024-03-15".to_string()),
            ..Default::default()
        };
        let mut raw = software_job("Software Engineer");

        raw.job_posted_at_datetime_utc = Some("2024-03-15T07:30:00Z".to_string());
        assert!(passes_filters(&raw, &hints));

        // One day off must not survive.
        raw.job_posted_at_datetime_utc = Some("2024-03-16T07:30:00Z".to_string());
        assert!(!passes_filters(&raw, &hints));
    }

    #[test]
    fn test_date_hint_drops_missing_or_garbage_timestamps() {
        let hints = QueryHints {
            date: Some("2024-03-15".to_string()),
            ..Default::default()
        };
        let mut raw = software_job("Software Engineer");
        assert!(!passes_filters(&raw, &hints));

        raw.job_posted_at_datetime_utc = Some("yesterday".to_string());
        assert!(!passes_filters(&raw, &hints));
    }

    #[test]
    fn test_invalid_extracted_date_drops_listing_not_request() {
        let hints = QueryHints {
            date: Some("2024-02-31".to_string()),
            ..Default::default()
        };
        let mut raw = software_job("Software Engineer");
        raw.job_posted_at_datetime_utc = Some("2024-02-28T00:00:00Z".to_string());
        assert!(!passes_filters(&raw, &hints));
    }

    #[test]
    fn test_is_software_listing_checks_title_or_skills() {
        let mut listing = JobListing::from_raw(&software_job("Plant Supervisor"));
        assert!(!is_software_listing(&listing));

        listing.skills_required = "Python, SQL".to_string();
        assert!(is_software_listing(&listing));

        let by_title = JobListing::from_raw(&software_job("Data Analyst"));
        assert!(is_software_listing(&by_title));
    }
}
