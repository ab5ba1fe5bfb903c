use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl SocialLink {
    pub fn icon(&self) -> SocialIcon {
        SocialIcon::from_label(&self.label)
    }
}

/// Font Awesome icon used for a social link. Labels without a dedicated
/// icon map to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    LinkedIn,
    GitHub,
    Kaggle,
    Generic,
}

impl SocialIcon {
    /// Exact, case-sensitive match on the label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "LinkedIn" => SocialIcon::LinkedIn,
            "GitHub" => SocialIcon::GitHub,
            "Kaggle" => SocialIcon::Kaggle,
            _ => SocialIcon::Generic,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SocialIcon::LinkedIn => "fab fa-linkedin",
            SocialIcon::GitHub => "fab fa-github",
            SocialIcon::Kaggle => "fab fa-kaggle",
            SocialIcon::Generic => "fas fa-link",
        }
    }
}
