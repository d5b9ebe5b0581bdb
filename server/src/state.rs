use std::sync::Arc;

use tracing::info;

use super::{
    config::Config,
    error::{PrerenderError, PrerenderResult},
    meta::MetaRewriter,
    source::{ApiRecipeSource, RecipeSource},
};

pub struct AppState {
    pub config: Config,
    /// Unmodified index.html of the built frontend
    pub shell: String,
    pub rewriter: MetaRewriter,
    pub source: Arc<dyn RecipeSource>,
}

impl AppState {
    pub async fn new(config: Config) -> PrerenderResult<Arc<Self>> {
        let source = ApiRecipeSource::new(&config.api_base, config.api_timeout)?;
        Self::with_source(config, Arc::new(source)).await
    }

    pub async fn with_source(
        config: Config,
        source: Arc<dyn RecipeSource>,
    ) -> PrerenderResult<Arc<Self>> {
        let path = config.shell_path();
        let shell = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| PrerenderError::ShellMissing { path: path.clone(), source })?;
        info!("Loaded app shell from {}", path.display());

        Ok(Arc::new(Self {
            config,
            shell,
            rewriter: MetaRewriter::new()?,
            source,
        }))
    }
}
