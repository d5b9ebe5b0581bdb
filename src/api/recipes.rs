//! Recipe endpoints

use reqwest::Method;
use serde::Deserialize;

use recipe_core::{Recipe, RecipeId, RecipeListing, RecipePayload, RecipeQuery};

use super::{send, ApiClient, ApiResult};

/// Answer of create/update: only the id is needed
#[derive(Deserialize)]
struct SavedRecipe {
    id_: RecipeId,
}

impl ApiClient {
    pub async fn fetch_recipe(&self, id: RecipeId) -> ApiResult<Recipe> {
        let response = send(self.request(Method::GET, &format!("recipe/specific/{id}"))).await?;
        Ok(response.json().await?)
    }

    pub async fn list_recipes(&self, query: &RecipeQuery) -> ApiResult<Vec<RecipeListing>> {
        let request = self.request(Method::GET, "recipe/filtered").query(&query.to_pairs());
        Ok(send(request).await?.json().await?)
    }

    pub async fn list_categories(&self) -> ApiResult<Vec<String>> {
        Ok(send(self.request(Method::GET, "category/all")).await?.json().await?)
    }

    /// Create (`id` unset) or update a recipe; returns the stored id
    pub async fn save_recipe(&self, payload: &RecipePayload) -> ApiResult<RecipeId> {
        let request = match payload.id {
            Some(id) => self.authed(Method::PUT, &format!("recipe/{id}"))?,
            None => self.authed(Method::POST, "recipe/create")?,
        };
        let saved: SavedRecipe = send(request.json(payload)).await?.json().await?;
        Ok(saved.id_)
    }

    pub async fn delete_recipe(&self, id: RecipeId) -> ApiResult<()> {
        send(self.authed(Method::DELETE, &format!("recipe/{id}"))?).await?;
        Ok(())
    }

    /// Let the API extract and store a recipe from a web page
    pub async fn import_recipe_url(&self, url: &str) -> ApiResult<Recipe> {
        let request = self.authed(Method::POST, "parse-external-recipe")?.query(&[("url", url)]);
        Ok(send(request).await?.json().await?)
    }

    /// Let the API parse and store a recipe from free text
    pub async fn import_recipe_text(&self, text: &str) -> ApiResult<Recipe> {
        let request = self.authed(Method::POST, "parse-recipe-text")?.query(&[("text", text)]);
        Ok(send(request).await?.json().await?)
    }
}
