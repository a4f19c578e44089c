use async_trait::async_trait;

use crate::catalog::CatalogSource;
use crate::errors::AppError;
use crate::matching::{ExperienceLevel, JobPosting, JobType, WorkMode};

/// Built-in demo catalog of five accessibility-focused postings.
/// Useful for local development and for the default `CATALOG_SOURCE=sample`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleCatalog;

#[async_trait]
impl CatalogSource for SampleCatalog {
    async fn load(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(sample_jobs())
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    work_mode: WorkMode,
    job_type: JobType,
    experience_level: ExperienceLevel,
    salary_range: &str,
    skills_required: &[&str],
    accessibility_support: &[&str],
    industry: &str,
    summary: &str,
    benefits: &[&str],
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        skills_required: strings(skills_required),
        accessibility_support: strings(accessibility_support),
        industry: Some(industry.to_string()),
        work_mode: Some(work_mode),
        location: Some(location.to_string()),
        experience_level: Some(experience_level),
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        job_type: Some(job_type),
        salary_range: Some(salary_range.to_string()),
        summary: Some(summary.to_string()),
        benefits: strings(benefits),
        featured: false,
        posted_on: None,
    }
}

pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            featured: true,
            ..posting(
                "frontend-accessibility-engineer",
                "Frontend Accessibility Engineer",
                "Inclusion Labs",
                "Remote",
                WorkMode::Remote,
                JobType::FullTime,
                ExperienceLevel::Mid,
                "$80k - $110k",
                &["React", "TypeScript", "WCAG", "ARIA", "Testing Library"],
                &["screen-reader", "keyboard-navigation", "high-contrast"],
                "Technology",
                "Build inclusive UI systems and drive accessibility reviews across the product surface area.",
                &["Remote-first", "Flexible hours", "Assistive tech stipend"],
            )
        },
        posting(
            "voice-ui-specialist",
            "Voice UI Specialist",
            "AbleTech",
            "Hybrid - Bengaluru",
            WorkMode::Hybrid,
            JobType::FullTime,
            ExperienceLevel::Mid,
            "₹18L - ₹24L",
            &["Conversation Design", "Speech Recognition", "JavaScript", "Node.js"],
            &["voice-control", "captioning", "flex-hours"],
            "Assistive Technology",
            "Design and build multimodal voice experiences with a focus on accessibility compliance.",
            &["Onsite accessibility lab", "L&D stipend", "Health cover"],
        ),
        posting(
            "a11y-program-manager",
            "Accessibility Program Manager",
            "CareersPlus",
            "Remote – India",
            WorkMode::Remote,
            JobType::Contract,
            ExperienceLevel::Senior,
            "$60/hr - $80/hr",
            &["Program Management", "Accessibility Audits", "Stakeholder Management"],
            &["remote-first", "sign-language", "ergonomic-budget"],
            "Enterprise Consulting",
            "Lead cross-functional accessibility roadmaps and coach teams on inclusive best practices.",
            &["Remote stipend", "Flexible schedule"],
        ),
        posting(
            "data-analyst-inclusive-hiring",
            "Inclusive Hiring Data Analyst",
            "HireBetter",
            "Gurugram",
            WorkMode::Onsite,
            JobType::FullTime,
            ExperienceLevel::Entry,
            "₹8L - ₹12L",
            &["Python", "SQL", "PowerBI", "Accessibility Metrics"],
            &["step-free-office", "ergonomic-setup"],
            "HR Tech",
            "Analyze candidate funnels and design dashboards that highlight accessibility KPIs.",
            &["Onsite physiotherapy", "Transport allowance"],
        ),
        posting(
            "content-strategist-inclusive-design",
            "Inclusive Design Content Strategist",
            "Narrative Studio",
            "Remote - Europe/India overlap",
            WorkMode::Remote,
            JobType::PartTime,
            ExperienceLevel::Mid,
            "$45/hr - $55/hr",
            &["Content Design", "Plain Language", "Accessibility", "Figma"],
            &["async-work", "captioning", "flex-hours"],
            "Design Services",
            "Create accessible content systems, guidelines, and component documentation.",
            &["Equipment budget", "Wellness allowance"],
        ),
    ]
}
