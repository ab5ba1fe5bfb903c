//! Page content: the built-in portfolio and the optional JSON override.
//!
//! Content is loaded exactly once in `main` and never mutated afterwards.

pub mod defaults;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Portfolio;

pub use defaults::default_portfolio;

/// Returns the portfolio from `path` when given, otherwise the built-in content.
pub async fn load_portfolio(path: Option<&Path>) -> Result<Portfolio> {
    let Some(path) = path else {
        info!("Using built-in portfolio content");
        return Ok(default_portfolio());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read content file {}", path.display()))?;
    let portfolio = parse_portfolio(&raw)
        .with_context(|| format!("Invalid content file {}", path.display()))?;

    info!(
        "Loaded portfolio content from {} ({} skills, {} projects)",
        path.display(),
        portfolio.skills.len(),
        portfolio.projects.len()
    );
    Ok(portfolio)
}

fn parse_portfolio(raw: &str) -> Result<Portfolio> {
    Ok(serde_json::from_str(raw)?)
}
