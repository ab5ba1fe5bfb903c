use maud::{html, Markup, PreEscaped};
use serde_json::Value;

use crate::assets::{AssetPresence, AssetState, PageAssets};
use crate::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, Profile, ProjectEntry, SkillEntry,
    SocialLink,
};
use crate::render::ProjectVariant;

pub const RESUME_PLACEHOLDER: &str =
    "Add your resume PDF to the assets directory to enable the download button.";

/// Fill width for a skill bar. Identity mapping, no clamping.
pub fn fill_width(percentage: i32) -> String {
    format!("{percentage}%")
}

pub fn header(
    profile: &Profile,
    socials: &[SocialLink],
    assets: &PageAssets,
    resume_href: &str,
) -> Markup {
    html! {
        header.hero-identity {
            (intro_video(&assets.intro_video))
            (portrait(&assets.profile_image, &profile.name))
            div.fade-in-up {
                h1.name { (profile.name) }
                h3.role { (profile.role) }
                p.tagline { (profile.tagline) }
            }
            (social_links(socials, "header-social-links", "header-social-link"))
            (resume_control(&assets.resume, resume_href))
        }
    }
}

fn intro_video(state: &AssetState) -> Markup {
    match state {
        AssetState::Present(video) => html! {
            video.intro-video width="400" autoplay loop muted playsinline {
                source src=(video.data_uri()) type=(video.mime);
            }
        },
        AssetState::Missing { path } => html! {
            div.notice.notice-error role="alert" {
                "❌ File not found: " (path.display().to_string())
            }
        },
    }
}

fn portrait(state: &AssetState, name: &str) -> Markup {
    match state {
        AssetState::Present(image) => html! {
            img.profile-img src=(image.data_uri()) alt=(name);
        },
        AssetState::Missing { path } => html! {
            div.asset-placeholder.profile-placeholder {
                "Profile image not found: " (path.display().to_string())
            }
        },
    }
}

fn resume_control(resume: &AssetPresence, href: &str) -> Markup {
    match resume {
        AssetPresence::Available { file_name } => html! {
            a.download-cv href=(href) download=(file_name) { "⬇ Download CV" }
        },
        AssetPresence::Missing { .. } => html! {
            div.notice.notice-info { (RESUME_PLACEHOLDER) }
        },
    }
}

pub fn social_links(socials: &[SocialLink], container_class: &str, link_class: &str) -> Markup {
    html! {
        div class=(container_class) {
            @for link in socials {
                a class=(link_class) href=(link.url) target="_blank" rel="noopener noreferrer" {
                    i class=(link.icon().css_class()) {}
                    " "
                    span { (link.label) }
                }
            }
        }
    }
}

pub fn skills_panel(skills: &[SkillEntry]) -> Markup {
    html! {
        aside.skills-panel {
            div.skills-title { "Core Skills" }
            @for skill in skills {
                div.skill-item {
                    div.skill-info {
                        span.skill-name { (skill.name) }
                        span.skill-percentage { (fill_width(skill.percentage)) }
                    }
                    div.skill-bar-bg {
                        div.skill-bar-fill style=(format!("width:{}", fill_width(skill.percentage))) {
                            div.skill-bar-shine {}
                        }
                    }
                }
            }
        }
    }
}

pub fn about(
    profile: &Profile,
    education: &[EducationEntry],
    certifications: &[CertificationEntry],
    animation: Option<&Value>,
) -> Markup {
    html! {
        section #about.card-section.fade-in-up {
            div.section-header { "About Me" }
            p.about-text { (profile.about) }
            @if let Some(animation) = animation {
                div #hero-animation.lottie-anim {}
                script type="application/json" id="hero-animation-data" {
                    (PreEscaped(embed_json(animation)))
                }
            }
            @if !education.is_empty() {
                h3.sub-header { "Education" }
                ul.education-list {
                    @for entry in education {
                        li.education-item {
                            strong.edu-degree { (entry.degree) }
                            " · "
                            span.edu-school { (entry.school) }
                            " · "
                            span.edu-period { (entry.period) }
                            " · "
                            span.edu-location { (entry.location) }
                        }
                    }
                }
            }
            @if !certifications.is_empty() {
                h3.sub-header { "Certifications" }
                ul.certification-list {
                    @for cert in certifications {
                        li.certification-item {
                            strong.cert-title { (cert.title) }
                            " · "
                            span.cert-issuer { (cert.issuer) }
                            " · "
                            span.cert-date { (cert.date) }
                        }
                    }
                }
            }
        }
    }
}

/// JSON safe to place inside a `<script>` element.
fn embed_json(value: &Value) -> String {
    serde_json::to_string(value)
        .unwrap_or_default()
        .replace("</", "<\\/")
}

pub fn experience(entries: &[ExperienceEntry]) -> Markup {
    html! {
        section #experience {
            h2.section-title-left { "Experience" }
            div.exp-section-grid {
                @for exp in entries {
                    div.experience-card {
                        div.briefcase-icon { "💼" }
                        div.card-content {
                            h3.exp-title { (exp.role) }
                            div.exp-company-row {
                                span.exp-company { (exp.company) }
                                span.exp-period { (exp.period) }
                            }
                            p.exp-details { (exp.details) }
                        }
                    }
                }
            }
        }
    }
}

pub fn projects(entries: &[ProjectEntry]) -> Markup {
    html! {
        section #projects {
            h2.section-title-left { "Academic Projects" }
            div.projects-grid {
                @for (index, project) in entries.iter().enumerate() {
                    (project_card(project, ProjectVariant::for_index(index)))
                }
            }
        }
    }
}

fn project_card(project: &ProjectEntry, variant: ProjectVariant) -> Markup {
    html! {
        div class={ "project-card " (variant.css_class()) } {
            h3.project-title { (project.title) }
            div.project-period { (project.period) }
            p.project-description { (project.description) }
        }
    }
}

pub fn contact(profile: &Profile, socials: &[SocialLink]) -> Markup {
    html! {
        section #contact.contact-section {
            h2.section-title { "Get In Touch" }
            (social_links(socials, "social-links", "social-link"))
            div.contact-info-grid {
                div.contact-info-item {
                    i.fas.fa-envelope {}
                    a href=(format!("mailto:{}", profile.email)) { (profile.email) }
                }
                div.contact-info-item {
                    i.fas.fa-phone {}
                    span { (profile.phone) }
                }
                div.contact-info-item {
                    i.fas.fa-map-marker-alt {}
                    span { (profile.location) }
                }
            }
        }
    }
}

pub fn footer(name: &str, credit: Option<&str>, year: i32) -> Markup {
    html! {
        footer.site-footer {
            small {
                @if let Some(credit) = credit {
                    (credit) " · "
                }
                "© " (year.to_string()) " " (name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fill_width_is_identity() {
        assert_eq!(fill_width(0), "0%");
        assert_eq!(fill_width(90), "90%");
        assert_eq!(fill_width(150), "150%");
        assert_eq!(fill_width(-10), "-10%");
    }

    #[test]
    fn test_embed_json_neutralises_closing_script_tag() {
        let embedded = embed_json(&json!({"nm": "</script><b>"}));
        assert!(!embedded.contains("</script>"));
        assert!(embedded.contains("<\\/script>"));
    }

    #[test]
    fn test_footer_with_and_without_credit() {
        let with = footer("Ada", Some("Made with Rust"), 2025).into_string();
        assert!(with.contains("Made with Rust · © 2025 Ada"));

        let without = footer("Ada", None, 2024).into_string();
        assert!(without.contains("© 2024 Ada"));
        assert!(!without.contains(" · "));
    }

    #[test]
    fn test_social_links_escape_labels_and_urls() {
        let socials = vec![SocialLink {
            label: "<Blog>".to_string(),
            url: "https://example.com/?a=1&b=\"2\"".to_string(),
        }];
        let html = social_links(&socials, "social-links", "social-link").into_string();
        assert!(html.contains("&lt;Blog&gt;"));
        assert!(html.contains("a=1&amp;b=&quot;2&quot;"));
        assert!(html.contains("fas fa-link"));
    }
}
