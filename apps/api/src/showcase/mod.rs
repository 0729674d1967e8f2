#![allow(dead_code)]

//! Read-only sections of the single-page portfolio.
//!
//! Display code depends on `ShowcaseRepository`, never on the literal data,
//! so a persisted source can replace `StaticShowcase` without touching the
//! handlers. The profile editor does not feed this repository.

pub mod data;
pub mod handlers;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Section models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct HeroSection {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub actions: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub interests: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillLevel {
    pub name: &'static str,
    /// Percentage, 0–100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [SkillLevel],
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationCard {
    pub institution: &'static str,
    pub degree: &'static str,
    pub specialization: Option<&'static str>,
    pub duration: &'static str,
    pub gpa: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub courses: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationCard {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkedTechnology {
    pub label: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub technologies: &'static [LinkedTechnology],
    pub github: &'static str,
    pub demo: &'static str,
    pub website: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    pub duration: &'static str,
    pub team_size: &'static str,
}

impl ProjectDetail {
    /// Overview paragraphs as rendered on the detail page.
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.full_description.split('\n')
    }
}

/// Summary card on the main page; links to `/projects/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub date: &'static str,
    pub category: &'static str,
}

impl From<&ProjectDetail> for ProjectCard {
    fn from(detail: &ProjectDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            description: detail.description,
            technologies: detail.technologies.iter().map(|t| t.label).collect(),
            date: detail.date,
            category: detail.category,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// External links open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSection {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub links: &'static [ContactLink],
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterSection {
    pub name: &'static str,
    pub blurb: &'static str,
    pub quick_links: &'static [(&'static str, &'static str)],
    pub availability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowcasePage {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub skills: &'static [SkillCategory],
    pub skill_certifications: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub education: &'static [EducationCard],
    pub certifications: &'static [CertificationCard],
    pub projects: Vec<ProjectCard>,
    pub upcoming_projects: &'static [UpcomingProjectCard],
    pub contact: ContactSection,
    pub footer: FooterSection,
}

// ────────────────────────────────────────────────────────────────────────────
// Repository
// ────────────────────────────────────────────────────────────────────────────

/// Read access to showcase content. Carried in `AppState` as
/// `Arc<dyn ShowcaseRepository>`.
#[async_trait]
pub trait ShowcaseRepository: Send + Sync {
    async fn page(&self) -> Result<ShowcasePage, AppError>;

    /// `None` for identifiers outside the known set.
    async fn project_detail(&self, id: &str) -> Result<Option<ProjectDetail>, AppError>;
}

/// Serves the compiled-in dataset.
pub struct StaticShowcase;

#[async_trait]
impl ShowcaseRepository for StaticShowcase {
    async fn page(&self) -> Result<ShowcasePage, AppError> {
        Ok(data::page())
    }

    async fn project_detail(&self, id: &str) -> Result<Option<ProjectDetail>, AppError> {
        Ok(data::PROJECT_DETAILS.iter().find(|p| p.id == id).cloned())
    }
}
