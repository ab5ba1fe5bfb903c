use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use maud::Markup;

use crate::animation::resolve_animation;
use crate::assets::AssetState;
use crate::errors::AppError;
use crate::models::Portfolio;
use crate::render::{render_page, PageView};
use crate::state::AppState;

pub const RESUME_ROUTE: &str = "/resume";

/// GET /
/// Renders the whole page. Missing assets and a failed animation fetch
/// degrade in place; only an unreadable asset fails the request.
pub async fn handle_page(State(state): State<AppState>) -> Result<Markup, AppError> {
    let (assets, animation) = tokio::join!(
        state.assets.load_all(),
        resolve_animation(state.animation.as_ref()),
    );
    let assets = assets?;

    Ok(render_page(&PageView {
        portfolio: &state.portfolio,
        assets: &assets,
        animation: &animation,
        effects: state.effects,
        resume_href: RESUME_ROUTE,
    }))
}

/// GET /resume
pub async fn handle_resume(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.assets.resume.load().await? {
        AssetState::Present(resume) => {
            let disposition = content_disposition(&resume.file_name);
            Ok((
                [
                    (header::CONTENT_TYPE, resume.mime),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                resume.bytes,
            )
                .into_response())
        }
        AssetState::Missing { .. } => Err(AppError::NotFound("Resume is not available".to_string())),
    }
}

/// Attachment header with a quoted file name. Characters that would break the
/// quoted-string (`"`, `\`, controls, non-ASCII) are replaced with `_`.
fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

/// GET /api/v1/portfolio
pub async fn handle_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}
