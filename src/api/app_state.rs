use crate::config::GenerationConfig;
use crate::engine::ContentGenerator;
use crate::observability::GenerationMetrics;
use crate::services::backend::AssetRegistry;
use crate::services::session::{SessionService, create_session_service};
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Content generator shared by direct and session-driven generation
    pub generator: Arc<ContentGenerator>,
    /// Session service for generation session lifecycle
    pub session_service: Arc<dyn SessionService>,
    /// Asset registry over the built-in catalogs
    pub assets: Arc<AssetRegistry>,
    /// Generation counters exposed at /metrics
    pub metrics: Arc<GenerationMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("generator", &"Arc<ContentGenerator>")
            .field("session_service", &"Arc<dyn SessionService>")
            .field("assets", &self.assets.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        generator: Arc<ContentGenerator>,
        session_service: Box<dyn SessionService>,
        assets: AssetRegistry,
        metrics: Arc<GenerationMetrics>,
    ) -> Self {
        Self {
            generator,
            session_service: Arc::from(session_service),
            assets: Arc::new(assets),
            metrics,
        }
    }

    /// Wire the session service and asset registry around an existing generator
    pub fn from_generator(generator: ContentGenerator, metrics: Arc<GenerationMetrics>) -> Self {
        let generator = Arc::new(generator);
        let session_service = create_session_service(generator.clone(), metrics.clone());
        Self::new(
            generator,
            session_service,
            AssetRegistry::from_catalogs(),
            metrics,
        )
    }

    /// Generation limits the API layer enforces
    pub fn generation_config(&self) -> &GenerationConfig {
        self.generator.config()
    }
}
