//! Optional hero animation. The page never depends on it: a failed fetch is
//! logged, surfaced as a warning on the page, and the element is omitted.
//!
//! `AppState` holds an `Arc<dyn AnimationSource>`, chosen at startup from
//! `ANIMATION_URL`.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("animation server returned status {status}")]
    Status { status: u16 },
}

/// Source of the Lottie animation document rendered in the about section.
#[async_trait]
pub trait AnimationSource: Send + Sync {
    /// `Ok(None)` means the capability is switched off.
    async fn fetch(&self) -> Result<Option<Value>, AnimationError>;
}

/// Used when no animation URL is configured.
pub struct NoopAnimation;

#[async_trait]
impl AnimationSource for NoopAnimation {
    async fn fetch(&self) -> Result<Option<Value>, AnimationError> {
        Ok(None)
    }
}

/// Fetches a Lottie JSON document with a single GET. No retry.
#[derive(Clone)]
pub struct LottieClient {
    client: Client,
    url: String,
}

impl LottieClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
        })
    }
}

#[async_trait]
impl AnimationSource for LottieClient {
    async fn fetch(&self) -> Result<Option<Value>, AnimationError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnimationError::Status {
                status: status.as_u16(),
            });
        }

        let animation: Value = response.json().await?;
        debug!("Fetched animation from {}", self.url);
        Ok(Some(animation))
    }
}

/// Outcome of the best-effort fetch, ready for the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationOutcome {
    pub animation: Option<Value>,
    pub warning: Option<String>,
}

/// Runs the fetch and folds any failure into a warning.
pub async fn resolve_animation(source: &dyn AnimationSource) -> AnimationOutcome {
    match source.fetch().await {
        Ok(animation) => AnimationOutcome {
            animation,
            warning: None,
        },
        Err(e) => {
            warn!("Lottie animation couldn't be loaded: {e}");
            AnimationOutcome {
                animation: None,
                warning: Some(format!("Animation couldn't be loaded: {e}")),
            }
        }
    }
}
