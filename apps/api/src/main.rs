use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screener_api::classifier::ClassifierArtifacts;
use screener_api::config::{Config, PredictorKind};
use screener_api::models::taxonomy::Taxonomy;
use screener_api::routes::build_router;
use screener_api::screening::predictor::{ClassifierPredictor, RolePredictor, SkillOverlapPredictor};
use screener_api::screening::resources::ResourceCatalog;
use screener_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    // Role taxonomy (built-in unless ROLE_SKILLS_PATH is set)
    let taxonomy = Arc::new(Taxonomy::load(config.role_skills_path.as_deref())?);
    info!(
        "Taxonomy loaded: {} roles, {} skill keywords",
        taxonomy.roles().len(),
        taxonomy.total_skill_keywords()
    );

    // Trained classifier is optional; corrupt or partial artifacts abort startup
    let classifier = ClassifierArtifacts::load(&config.model_dir)
        .with_context(|| format!("Failed to load classifier from '{}'", config.model_dir.display()))?
        .map(Arc::new);
    if classifier.is_none() {
        warn!(
            "No classifier artifacts in '{}'; /api/v1/classify is unavailable",
            config.model_dir.display()
        );
    }

    // Role predictor (SkillOverlapPredictor by default, swap via ROLE_PREDICTOR)
    let predictor: Arc<dyn RolePredictor> = match (config.role_predictor, &classifier) {
        (PredictorKind::Skills, _) => Arc::new(SkillOverlapPredictor::new(taxonomy.clone())),
        (PredictorKind::Classifier, Some(artifacts)) => {
            Arc::new(ClassifierPredictor::new(artifacts.clone()))
        }
        (PredictorKind::Classifier, None) => bail!(
            "ROLE_PREDICTOR=classifier but no classifier artifacts were found in '{}'; run the train binary first",
            config.model_dir.display()
        ),
    };
    info!("Role predictor: {}", config.role_predictor.as_str());

    // Build app state
    let state = AppState {
        config: config.clone(),
        taxonomy,
        resources: Arc::new(ResourceCatalog::builtin()),
        predictor,
        classifier,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
