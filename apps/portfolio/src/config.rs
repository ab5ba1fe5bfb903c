use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub assets_dir: PathBuf,
    pub profile_image: String,
    pub intro_video: String,
    pub resume_file: String,
    /// JSON file replacing the built-in content.
    pub content_path: Option<PathBuf>,
    /// Lottie animation fetched on each page load. Unset disables the fetch.
    pub animation_url: Option<String>,
    pub animation_timeout: Duration,
    pub enable_confetti: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            assets_dir: get("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets")),
            profile_image: get("PROFILE_IMAGE").unwrap_or_else(|| "background.png".to_string()),
            intro_video: get("INTRO_VIDEO").unwrap_or_else(|| "intro.mp4".to_string()),
            resume_file: get("RESUME_FILE").unwrap_or_else(|| "CV_ENG.pdf".to_string()),
            content_path: get("CONTENT_PATH").map(PathBuf::from),
            animation_url: get("ANIMATION_URL"),
            animation_timeout: Duration::from_secs(
                get("ANIMATION_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse::<u64>()
                    .context("ANIMATION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            enable_confetti: match get("ENABLE_CONFETTI") {
                Some(v) => parse_flag(&v)
                    .with_context(|| format!("ENABLE_CONFETTI has unrecognised value '{v}'"))?,
                None => false,
            },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
