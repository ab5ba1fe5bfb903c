//! Binary page assets: profile image, intro video and resume document.
//!
//! Each asset is looked up by presence first. A missing file is a normal
//! outcome (`AssetState::Missing`) that the renderer turns into a visible
//! placeholder; a file that exists but cannot be read is an error.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    ProfileImage,
    IntroVideo,
    Resume,
}

impl AssetKind {
    /// MIME type derived from the kind and the file extension. Formats are not
    /// validated; an image called `x.heic` is served as `image/heic`.
    pub fn mime_for(self, path: &Path) -> String {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match (self, ext.as_deref()) {
            (AssetKind::ProfileImage, Some("jpg")) => "image/jpeg".to_string(),
            (AssetKind::ProfileImage, Some("svg")) => "image/svg+xml".to_string(),
            (AssetKind::ProfileImage, Some(ext)) => format!("image/{ext}"),
            (AssetKind::ProfileImage, None) => "image/png".to_string(),
            (AssetKind::IntroVideo, Some(ext)) => format!("video/{ext}"),
            (AssetKind::IntroVideo, None) => "video/mp4".to_string(),
            (AssetKind::Resume, Some("pdf") | None) => "application/pdf".to_string(),
            (AssetKind::Resume, Some(_)) => "application/octet-stream".to_string(),
        }
    }
}

/// A configured asset location, resolved against the assets directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRef {
    pub kind: AssetKind,
    pub path: PathBuf,
}

impl AssetRef {
    pub fn new(kind: AssetKind, dir: &Path, file_name: &str) -> Self {
        Self {
            kind,
            path: dir.join(file_name),
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    async fn exists(&self) -> bool {
        let exists = tokio::fs::try_exists(&self.path).await.unwrap_or(false);
        if !exists {
            debug!("Asset {:?} not found at {}", self.kind, self.path.display());
        }
        exists
    }

    /// Presence check only; the file is not opened.
    pub async fn locate(&self) -> AssetPresence {
        if self.exists().await {
            AssetPresence::Available {
                file_name: self.file_name(),
            }
        } else {
            AssetPresence::Missing {
                path: self.path.clone(),
            }
        }
    }

    /// Presence check followed by a full read. No caching between calls.
    pub async fn load(&self) -> Result<AssetState, AssetError> {
        if !self.exists().await {
            return Ok(AssetState::Missing {
                path: self.path.clone(),
            });
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| AssetError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(AssetState::Present(LoadedAsset {
            file_name: self.file_name(),
            mime: self.kind.mime_for(&self.path),
            bytes: Bytes::from(bytes),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAsset {
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl LoadedAsset {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetState {
    Present(LoadedAsset),
    Missing { path: PathBuf },
}

impl AssetState {
    pub fn present(&self) -> Option<&LoadedAsset> {
        match self {
            AssetState::Present(asset) => Some(asset),
            AssetState::Missing { .. } => None,
        }
    }
}

/// An asset the page only links to, so its bytes are never read on render.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetPresence {
    Available { file_name: String },
    Missing { path: PathBuf },
}

/// The three asset locations used by the page.
#[derive(Debug, Clone)]
pub struct AssetStore {
    pub profile_image: AssetRef,
    pub intro_video: AssetRef,
    pub resume: AssetRef,
}

/// State of every asset for a single page render. Image and video are
/// inlined; the resume is served separately and only needs to exist.
#[derive(Debug, Clone)]
pub struct PageAssets {
    pub profile_image: AssetState,
    pub intro_video: AssetState,
    pub resume: AssetPresence,
}

impl AssetStore {
    pub fn from_config(config: &Config) -> Self {
        let dir = config.assets_dir.as_path();
        Self {
            profile_image: AssetRef::new(AssetKind::ProfileImage, dir, &config.profile_image),
            intro_video: AssetRef::new(AssetKind::IntroVideo, dir, &config.intro_video),
            resume: AssetRef::new(AssetKind::Resume, dir, &config.resume_file),
        }
    }

    pub async fn load_all(&self) -> Result<PageAssets, AssetError> {
        let (profile_image, intro_video, resume) = tokio::join!(
            self.profile_image.load(),
            self.intro_video.load(),
            self.resume.locate(),
        );

        Ok(PageAssets {
            profile_image: profile_image?,
            intro_video: intro_video?,
            resume,
        })
    }
}
