//! Recipe Source
//!
//! Where the server looks recipes up. The production source calls the
//! recipe API; tests plug in their own.

use std::time::Duration;

use async_trait::async_trait;
use recipe_core::{Recipe, RecipeId};
use tracing::debug;

use crate::error::{PrerenderError, PrerenderResult};

#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch one recipe by id
    async fn fetch_recipe(&self, id: RecipeId) -> PrerenderResult<Recipe>;
}

/// Recipe API over HTTP
pub struct ApiRecipeSource {
    client: reqwest::Client,
    api_base: String,
}

impl ApiRecipeSource {
    pub fn new(api_base: &str, timeout: Duration) -> PrerenderResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_base: api_base.to_string() })
    }
}

#[async_trait]
impl RecipeSource for ApiRecipeSource {
    async fn fetch_recipe(&self, id: RecipeId) -> PrerenderResult<Recipe> {
        let url = format!("{}recipe/specific/{id}", self.api_base);
        debug!("Fetching {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PrerenderError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<Recipe>().await?)
    }
}
