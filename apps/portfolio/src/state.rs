use std::sync::Arc;

use crate::animation::AnimationSource;
use crate::assets::AssetStore;
use crate::models::Portfolio;
use crate::render::Effects;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup, never mutated.
    pub portfolio: Arc<Portfolio>,
    pub assets: AssetStore,
    /// Pluggable animation source. `NoopAnimation` unless ANIMATION_URL is set.
    pub animation: Arc<dyn AnimationSource>,
    pub effects: Effects,
}
