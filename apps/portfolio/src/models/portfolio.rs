use serde::{Deserialize, Serialize};

use crate::models::social::SocialLink;

/// Identity and contact fields shown in the header, about and contact sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub about: String,
}

/// One row of the skills panel. `percentage` drives the fill width as-is;
/// values outside 0..=100 are kept and rendered unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillEntry {
    pub name: String,
    pub percentage: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationEntry {
    pub title: String,
    pub issuer: String,
    pub date: String,
}

/// The whole page content. Built once at startup and shared read-only
/// through `Arc<Portfolio>`; every list renders in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub page_title: String,
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Credit line in the footer, e.g. "Made with ❤️ + Rust".
    #[serde(default)]
    pub footer_credit: Option<String>,
    /// Falls back to the current UTC year when unset.
    #[serde(default)]
    pub copyright_year: Option<i32>,
}
