use std::sync::Arc;

use crate::classifier::ClassifierArtifacts;
use crate::config::Config;
use crate::models::taxonomy::Taxonomy;
use crate::screening::predictor::RolePredictor;
use crate::screening::resources::ResourceCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub taxonomy: Arc<Taxonomy>,
    pub resources: Arc<ResourceCatalog>,
    /// Pluggable role predictor. Default: SkillOverlapPredictor. Swap via ROLE_PREDICTOR env.
    pub predictor: Arc<dyn RolePredictor>,
    /// Trained classifier, when artifacts were found in MODEL_DIR.
    pub classifier: Option<Arc<ClassifierArtifacts>>,
}
