//! Canned replies and listing formatting for the chat endpoint.

use crate::jobs::models::JobListing;

pub const GREETING_REPLY: &str =
    "👋 Hi there! I'm ValiantTek Job Assistant Bot, how may I assist you today?";

pub const THANKS_REPLY: &str = "🙏 You're welcome! Wishing you success in your job search 🚀";

pub const SERVER_BUSY_REPLY: &str =
    "🚨 The server is busy or unavailable right now. Please try again shortly.";

pub const NO_RESULTS_REPLY: &str =
    "⚠️ Sorry, no software job listings found for your request. Try another role, company, or location.";

pub const NONE_SOFTWARE_REPLY: &str = "⚠️ I found jobs, but none are software-related. Try refining your query with IT roles like 'developer', 'engineer', or 'analyst'.";

pub const NEAR_MISS_REPLY: &str =
    "💡 Did you mean software job opportunities? Try asking about a specific IT role, company, or location.";

pub const FALLBACK_REPLY: &str =
    "🤖 I didn't quite get that. Try asking me about a software job role, company, location, or date.";

const RESULTS_HEADER: &str = "🚀 Showing top software matches 🔎🔥\n━━━━━━━━━━━━━━━━━━━━━━";

const BLOCK_SEPARATOR: &str = "────────────────────────────";

/// Renders surviving listings into the single chat reply: a fixed header,
/// then one block per listing, blocks joined by blank lines.
pub fn format_listings(listings: &[JobListing]) -> String {
    let mut blocks = Vec::with_capacity(listings.len() + 1);
    blocks.push(RESULTS_HEADER.to_string());
    for listing in listings {
        blocks.push(format_block(listing));
    }
    blocks.join("\n\n")
}

fn format_block(job: &JobListing) -> String {
    format!(
        "🌟 **{title}**\n\
         ➡️ **Company:** {company}\n\
         ➡️ **Location:** {location}\n\
         ➡️ **Job Type:** {job_type}\n\
         ➡️ **Salary:** {salary}\n\
         ➡️ **Posted On:** {posted}\n\
         ➡️ **Skills Required:** {skills}\n\
         ➡️ **Experience Required:** {experience}\n\
         ➡️ **Company Website:** {website}\n\
         ➡️ **Apply Link:** {apply}\n\
         ➡️ **HR Email:** {hr_email}\n\
         ➡️ **HR Contact:** {hr_contact}\n\
         {separator}",
        title = job.title,
        company = job.company,
        location = job.location,
        job_type = job.job_type,
        salary = job.salary,
        posted = job.posted,
        skills = job.skills_required,
        experience = job.experience_required,
        website = job.company_website,
        apply = job.apply_link,
        hr_email = job.hr_email,
        hr_contact = job.hr_contact,
        separator = BLOCK_SEPARATOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::models::RawJob;

    fn listing(title: &str, company: &str) -> JobListing {
        JobListing::from_raw(&RawJob {
            job_title: Some(title.to_string()),
            employer_name: Some(company.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_format_starts_with_header() {
        let reply = format_listings(&[listing("Backend Developer", "Initech")]);
        assert!(reply.starts_with(RESULTS_HEADER));
    }

    #[test]
    fn test_format_one_block_per_listing() {
        let reply = format_listings(&[
            listing("Backend Developer", "Initech"),
            listing("Data Engineer", "Globex"),
        ]);
        assert_eq!(reply.matches(BLOCK_SEPARATOR).count(), 2);
        assert!(reply.contains("🌟 **Backend Developer**"));
        assert!(reply.contains("➡️ **Company:** Globex"));
    }

    #[test]
    fn test_format_shows_sentinels_for_missing_fields() {
        let reply = format_listings(&[listing("Backend Developer", "Initech")]);
        assert!(reply.contains("➡️ **Salary:** Not Disclosed"));
        assert!(reply.contains("➡️ **Skills Required:** Not Provided"));
        assert!(reply.contains("➡️ **Apply Link:** Not Available"));
    }
}
