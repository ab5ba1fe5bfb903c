pub mod portfolio;
pub mod social;

pub use portfolio::{
    CertificationEntry, EducationEntry, ExperienceEntry, Portfolio, Profile, ProjectEntry,
    SkillEntry,
};
pub use social::SocialLink;
