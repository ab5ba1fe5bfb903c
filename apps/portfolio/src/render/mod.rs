//! Content renderer: one linear pass from `Portfolio` + loaded assets to a
//! full HTML document.
//!
//! Section order is fixed: header, skills, about, experience, projects,
//! contact, footer. Lists render in declaration order; the only branch on
//! position is the project variant.

pub mod sections;
pub mod styles;

use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::animation::AnimationOutcome;
use crate::assets::PageAssets;
use crate::models::Portfolio;

/// Visual treatment of a project card, chosen by position parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectVariant {
    /// Even index: left column, floats up.
    FloatUp,
    /// Odd index: right column, floats down.
    FloatDown,
}

impl ProjectVariant {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            ProjectVariant::FloatUp
        } else {
            ProjectVariant::FloatDown
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProjectVariant::FloatUp => "float-up",
            ProjectVariant::FloatDown => "float-down",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Effects {
    pub confetti: bool,
}

/// Everything a single page render needs.
pub struct PageView<'a> {
    pub portfolio: &'a Portfolio,
    pub assets: &'a PageAssets,
    pub animation: &'a AnimationOutcome,
    pub effects: Effects,
    /// Target of the "Download CV" link.
    pub resume_href: &'a str,
}

pub fn render_page(view: &PageView<'_>) -> Markup {
    let portfolio = view.portfolio;
    let profile = &portfolio.profile;
    let year = portfolio
        .copyright_year
        .unwrap_or_else(|| Utc::now().year());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (portfolio.page_title) }
                link rel="stylesheet" href=(styles::FONT_AWESOME_CSS);
                style { (PreEscaped(styles::BASE_CSS)) }
                @if let Some(image) = view.assets.profile_image.present() {
                    style { (PreEscaped(styles::background_css(&image.data_uri()))) }
                }
            }
            body {
                div.site-bg-glow {}
                main.page {
                    @if let Some(warning) = &view.animation.warning {
                        div.notice.notice-warning role="alert" { "⚠️ " (warning) }
                    }
                    section.hero {
                        (sections::header(profile, &portfolio.socials, view.assets, view.resume_href))
                        (sections::skills_panel(&portfolio.skills))
                    }
                    hr;
                    (sections::about(
                        profile,
                        &portfolio.education,
                        &portfolio.certifications,
                        view.animation.animation.as_ref(),
                    ))
                    (sections::experience(&portfolio.experience))
                    (sections::projects(&portfolio.projects))
                    (sections::contact(profile, &portfolio.socials))
                    (sections::footer(&profile.name, portfolio.footer_credit.as_deref(), year))
                }
                script { (PreEscaped(styles::DRAG_SCROLL_JS)) }
                @if view.animation.animation.is_some() {
                    script src=(styles::LOTTIE_SCRIPT) {}
                    script { (PreEscaped(styles::LOTTIE_PLAYER_JS)) }
                }
                @if view.effects.confetti {
                    script src=(styles::CONFETTI_SCRIPT) {}
                    script { (PreEscaped(styles::CONFETTI_JS)) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetPresence, AssetState, LoadedAsset};
    use crate::content::default_portfolio;
    use crate::models::{CertificationEntry, ProjectEntry, SkillEntry, SocialLink};
    use bytes::Bytes;
    use serde_json::json;
    use std::path::PathBuf;

    fn missing(name: &str) -> AssetState {
        AssetState::Missing {
            path: PathBuf::from("assets").join(name),
        }
    }

    fn present(name: &str, mime: &str) -> AssetState {
        AssetState::Present(LoadedAsset {
            file_name: name.to_string(),
            mime: mime.to_string(),
            bytes: Bytes::from_static(b"data"),
        })
    }

    fn all_missing() -> PageAssets {
        PageAssets {
            profile_image: missing("background.png"),
            intro_video: missing("intro.mp4"),
            resume: AssetPresence::Missing {
                path: PathBuf::from("assets/CV_ENG.pdf"),
            },
        }
    }

    fn all_present() -> PageAssets {
        PageAssets {
            profile_image: present("background.png", "image/png"),
            intro_video: present("intro.mp4", "video/mp4"),
            resume: AssetPresence::Available {
                file_name: "CV_ENG.pdf".to_string(),
            },
        }
    }

    fn render(portfolio: &Portfolio, assets: &PageAssets, animation: &AnimationOutcome) -> String {
        render_with(portfolio, assets, animation, Effects::default())
    }

    fn render_with(
        portfolio: &Portfolio,
        assets: &PageAssets,
        animation: &AnimationOutcome,
        effects: Effects,
    ) -> String {
        render_page(&PageView {
            portfolio,
            assets,
            animation,
            effects,
            resume_href: "/resume",
        })
        .into_string()
    }

    fn project(title: &str) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            description: format!("{title} description"),
            period: "2024".to_string(),
        }
    }

    /// Variant classes of every project card, in document order.
    fn project_variants(html: &str) -> Vec<&str> {
        html.match_indices("project-card float-")
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                if rest.starts_with("up") {
                    "float-up"
                } else {
                    "float-down"
                }
            })
            .collect()
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
    }

    #[test]
    fn test_variant_parity() {
        assert_eq!(ProjectVariant::for_index(0), ProjectVariant::FloatUp);
        assert_eq!(ProjectVariant::for_index(1), ProjectVariant::FloatDown);
        assert_eq!(ProjectVariant::for_index(2), ProjectVariant::FloatUp);
        assert_eq!(ProjectVariant::for_index(7), ProjectVariant::FloatDown);
    }

    #[test]
    fn test_three_projects_alternate_a_b_a() {
        let mut portfolio = default_portfolio();
        portfolio.projects = vec![project("P0"), project("P1"), project("P2")];

        let html = render(&portfolio, &all_missing(), &AnimationOutcome::default());
        assert_eq!(
            project_variants(&html),
            vec!["float-up", "float-down", "float-up"]
        );
        assert!(position(&html, "P0") < position(&html, "P1"));
        assert!(position(&html, "P1") < position(&html, "P2"));
    }

    #[test]
    fn test_skill_rows_in_order_with_identity_fill() {
        let mut portfolio = default_portfolio();
        portfolio.skills = vec![
            SkillEntry {
                name: "A".to_string(),
                percentage: 90,
            },
            SkillEntry {
                name: "B".to_string(),
                percentage: 50,
            },
        ];

        let html = render(&portfolio, &all_missing(), &AnimationOutcome::default());
        assert_eq!(html.matches("class=\"skill-item\"").count(), 2);
        let a = position(&html, "<span class=\"skill-name\">A</span>");
        let b = position(&html, "<span class=\"skill-name\">B</span>");
        assert!(a < b);
        let fill_90 = position(&html, "style=\"width:90%\"");
        let fill_50 = position(&html, "style=\"width:50%\"");
        assert!(a < fill_90 && fill_90 < b && b < fill_50);
    }

    #[test]
    fn test_out_of_range_skill_is_rendered_as_given() {
        let mut portfolio = default_portfolio();
        portfolio.skills = vec![
            SkillEntry {
                name: "Over".to_string(),
                percentage: 140,
            },
            SkillEntry {
                name: "Under".to_string(),
                percentage: -20,
            },
        ];

        let html = render(&portfolio, &all_missing(), &AnimationOutcome::default());
        assert!(html.contains("style=\"width:140%\""));
        assert!(html.contains("style=\"width:-20%\""));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render(
            &default_portfolio(),
            &all_missing(),
            &AnimationOutcome::default(),
        );
        let order = [
            "class=\"hero-identity\"",
            "class=\"skills-panel\"",
            "id=\"about\"",
            "id=\"experience\"",
            "id=\"projects\"",
            "id=\"contact\"",
            "class=\"site-footer\"",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(&html, n)).collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "sections out of order: {positions:?}"
        );
    }

    #[test]
    fn test_lists_keep_declaration_order() {
        let mut portfolio = default_portfolio();
        portfolio.certifications = ["Zeta Cert", "Alpha Cert", "Mid Cert"]
            .iter()
            .map(|title| CertificationEntry {
                title: title.to_string(),
                issuer: "Issuer".to_string(),
                date: "2024".to_string(),
            })
            .collect();
        let html = render(&portfolio, &all_missing(), &AnimationOutcome::default());

        let exp: Vec<usize> = portfolio
            .experience
            .iter()
            .map(|e| position(&html, &e.role))
            .collect();
        assert!(exp.windows(2).all(|w| w[0] < w[1]));

        let edu: Vec<usize> = portfolio
            .education
            .iter()
            .map(|e| position(&html, &e.degree))
            .collect();
        assert!(edu.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(
            html.matches("class=\"experience-card\"").count(),
            portfolio.experience.len()
        );
        assert_eq!(
            project_variants(&html).len(),
            portfolio.projects.len()
        );

        let certs: Vec<usize> = portfolio
            .certifications
            .iter()
            .map(|c| position(&html, &format!("<strong class=\"cert-title\">{}</strong>", c.title)))
            .collect();
        assert_eq!(certs.len(), 3);
        assert!(certs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_social_icons_with_fallback_in_header_and_contact() {
        let mut portfolio = default_portfolio();
        portfolio.socials = vec![
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/x".to_string(),
            },
            SocialLink {
                label: "Blog".to_string(),
                url: "https://blog.example.com".to_string(),
            },
        ];

        let html = render(&portfolio, &all_missing(), &AnimationOutcome::default());
        assert_eq!(html.matches("<i class=\"fab fa-github\"></i>").count(), 2);
        assert_eq!(html.matches("<i class=\"fas fa-link\"></i>").count(), 2);
        assert!(position(&html, "fab fa-github") < position(&html, "fas fa-link"));
    }

    #[test]
    fn test_missing_assets_render_placeholders_and_rest_of_page() {
        let html = render(
            &default_portfolio(),
            &all_missing(),
            &AnimationOutcome::default(),
        );
        assert!(html.contains("File not found: assets/intro.mp4"));
        assert!(html.contains("Profile image not found: assets/background.png"));
        assert!(html.contains("Add your resume"));
        assert!(!html.contains("class=\"download-cv\""));
        assert!(!html.contains("<video"));
        assert!(!html.contains("data:image/"));
        assert!(html.contains("id=\"contact\""));
    }

    #[test]
    fn test_missing_resume_only_keeps_other_media() {
        let mut assets = all_present();
        assets.resume = AssetPresence::Missing {
            path: PathBuf::from("assets/CV_ENG.pdf"),
        };

        let html = render(&default_portfolio(), &assets, &AnimationOutcome::default());
        assert!(html.contains(sections::RESUME_PLACEHOLDER));
        assert!(!html.contains("Download CV"));
        assert!(html.contains("<video"));
        assert!(html.contains("data:video/mp4;base64,ZGF0YQ=="));
    }

    #[test]
    fn test_present_assets_are_embedded() {
        let html = render(
            &default_portfolio(),
            &all_present(),
            &AnimationOutcome::default(),
        );
        assert!(html.contains("url(\"data:image/png;base64,ZGF0YQ==\")"));
        assert!(html.contains("<img class=\"profile-img\" src=\"data:image/png;base64,ZGF0YQ==\""));
        assert!(html.contains("href=\"/resume\" download=\"CV_ENG.pdf\""));
        assert!(!html.contains("Add your resume"));
        assert!(!html.contains("File not found"));
    }

    #[test]
    fn test_animation_failure_shows_warning_without_element() {
        let animation = AnimationOutcome {
            animation: None,
            warning: Some("Animation couldn't be loaded: timed out".to_string()),
        };
        let html = render(&default_portfolio(), &all_missing(), &animation);
        assert!(html.contains("class=\"notice notice-warning\""));
        assert!(html.contains("Animation couldn't be loaded: timed out"));
        assert!(!html.contains("hero-animation"));
        assert!(!html.contains(styles::LOTTIE_SCRIPT));
        assert!(html.contains("id=\"projects\""));
    }

    #[test]
    fn test_animation_is_embedded_when_fetched() {
        let animation = AnimationOutcome {
            animation: Some(json!({"v": "5.7.4"})),
            warning: None,
        };
        let html = render(&default_portfolio(), &all_missing(), &animation);
        assert!(html.contains("id=\"hero-animation\""));
        assert!(html.contains(r#"{"v":"5.7.4"}"#));
        assert!(html.contains(styles::LOTTIE_SCRIPT));
        assert!(!html.contains("class=\"notice notice-warning\""));
    }

    #[test]
    fn test_confetti_only_when_enabled() {
        let portfolio = default_portfolio();
        let outcome = AnimationOutcome::default();

        let off = render(&portfolio, &all_missing(), &outcome);
        assert!(!off.contains(styles::CONFETTI_SCRIPT));

        let on = render_with(
            &portfolio,
            &all_missing(),
            &outcome,
            Effects { confetti: true },
        );
        assert!(on.contains(styles::CONFETTI_SCRIPT));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut portfolio = default_portfolio();
        portfolio.profile.name = "<script>alert(1)</script>".to_string();

        let html = render(&portfolio, &all_missing(), &AnimationOutcome::default());
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_copyright_year_from_content() {
        let mut portfolio = default_portfolio();
        portfolio.copyright_year = Some(2025);
        portfolio.footer_credit = None;

        let html = render(&portfolio, &all_missing(), &AnimationOutcome::default());
        assert!(html.contains(&format!("© 2025 {}", portfolio.profile.name)));
    }
}
