//! Wire types for the JSearch upstream and the normalized listing shape
//! returned to callers.

use serde::{Deserialize, Serialize};

/// Top-level JSearch response. Only the `data` array matters; everything
/// else the upstream sends is ignored.
#[derive(Debug, Deserialize)]
pub struct JSearchResponse {
    #[serde(default)]
    pub data: Vec<RawJob>,
}

/// A single raw record from the upstream, deserialized leniently: the
/// provider omits fields freely, so everything is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJob {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_location: Option<String>,
    pub job_employment_type: Option<String>,
    pub job_max_salary: Option<f64>,
    pub job_salary_currency: Option<String>,
    pub job_posted_at_datetime_utc: Option<String>,
    pub job_required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub job_required_experience: RequiredExperience,
    pub employer_website: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_publisher_email: Option<String>,
    pub job_publisher_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequiredExperience {
    pub required_experience_in_months: Option<i64>,
}

/// Normalized listing surfaced to clients. Built once from a `RawJob` and
/// never mutated; missing optionals become the documented sentinels.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub posted: String,
    pub skills_required: String,
    pub experience_required: String,
    pub company_website: String,
    pub apply_link: String,
    pub hr_email: String,
    pub hr_contact: String,
}

const NOT_AVAILABLE: &str = "Not Available";
const NOT_DISCLOSED: &str = "Not Disclosed";
const NOT_PROVIDED: &str = "Not Provided";

impl JobListing {
    pub fn from_raw(raw: &RawJob) -> Self {
        JobListing {
            id: or_sentinel(raw.job_id.as_deref(), NOT_AVAILABLE),
            title: or_sentinel(raw.job_title.as_deref(), NOT_AVAILABLE),
            company: or_sentinel(raw.employer_name.as_deref(), NOT_AVAILABLE),
            // city is more specific than the free-form location string
            location: or_sentinel(
                raw.job_city.as_deref().or(raw.job_location.as_deref()),
                NOT_AVAILABLE,
            ),
            job_type: or_sentinel(raw.job_employment_type.as_deref(), NOT_AVAILABLE),
            salary: format_salary(raw),
            posted: or_sentinel(raw.job_posted_at_datetime_utc.as_deref(), NOT_AVAILABLE),
            skills_required: raw
                .job_required_skills
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| s.join(", "))
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            experience_required: raw
                .job_required_experience
                .required_experience_in_months
                .map(|months| format!("{months} months"))
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            company_website: or_sentinel(raw.employer_website.as_deref(), NOT_AVAILABLE),
            apply_link: or_sentinel(raw.job_apply_link.as_deref(), NOT_AVAILABLE),
            hr_email: or_sentinel(raw.job_publisher_email.as_deref(), NOT_AVAILABLE),
            hr_contact: or_sentinel(raw.job_publisher_name.as_deref(), NOT_AVAILABLE),
        }
    }
}

fn or_sentinel(value: Option<&str>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => sentinel.to_string(),
    }
}

/// Max salary if present, else the salary currency, else "Not Disclosed".
/// Whole-number salaries render without a trailing `.0`.
fn format_salary(raw: &RawJob) -> String {
    match raw.job_max_salary {
        Some(max) if max.fract() == 0.0 => format!("{}", max as i64),
        Some(max) => format!("{max}"),
        None => or_sentinel(raw.job_salary_currency.as_deref(), NOT_DISCLOSED),
    }
}

/// Success envelope for `GET /jobs/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub results: Vec<JobListing>,
}
