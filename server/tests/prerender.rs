//! Pre-render server over a real socket with an in-memory recipe source

use std::{collections::HashMap, net::SocketAddr, path::Path, sync::Arc, time::Duration};

use async_trait::async_trait;
use fast_kitchen_prerender::{
    build_router,
    config::Config,
    error::{PrerenderError, PrerenderResult},
    source::RecipeSource,
    state::AppState,
};
use recipe_core::{Recipe, RecipeId};
use tempfile::tempdir;
use tokio::net::TcpListener;

const SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>FastKitchen</title>
  <meta name="type" property="og:type" content="website" />
</head>
<body><div id="root"></div></body>
</html>"#;

#[derive(Default)]
struct FakeSource {
    recipes: HashMap<RecipeId, Recipe>,
}

impl FakeSource {
    fn with_recipe(mut self, json: serde_json::Value) -> Self {
        let recipe: Recipe = serde_json::from_value(json).expect("recipe json");
        self.recipes.insert(recipe.id, recipe);
        self
    }
}

#[async_trait]
impl RecipeSource for FakeSource {
    async fn fetch_recipe(&self, id: RecipeId) -> PrerenderResult<Recipe> {
        match id {
            // Simulated outage
            500 => Err(PrerenderError::UpstreamStatus(500)),
            _ => self.recipes.get(&id).cloned().ok_or(PrerenderError::UpstreamStatus(404)),
        }
    }
}

fn test_config(dist: &Path) -> Config {
    Config {
        port: 0,
        api_base: "https://api.test/".to_string(),
        dist_dir: dist.to_path_buf(),
        site_name: "FastKitchen".to_string(),
        api_timeout: Duration::from_secs(1),
    }
}

async fn spawn_app(dist: &Path) -> SocketAddr {
    let source = FakeSource::default()
        .with_recipe(serde_json::json!({
            "id_": 12,
            "title": "Käsespätzle",
            "description": "Swabian \"comfort\" food",
            "portions": 2,
            "cooking_time": 40,
            "cover_image": 9
        }))
        .with_recipe(serde_json::json!({
            "id_": 13,
            "title": "Plain Rice",
            "description": "",
            "portions": 1,
            "cooking_time": 20
        }));

    let state = AppState::with_source(test_config(dist), Arc::new(source))
        .await
        .expect("app state");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.expect("serve");
    });
    addr
}

fn write_dist(dist: &Path) {
    std::fs::write(dist.join("index.html"), SHELL).expect("write shell");
    std::fs::create_dir(dist.join("assets")).expect("assets dir");
    std::fs::write(dist.join("assets/style.css"), "body { margin: 0 }").expect("write css");
}

async fn get(addr: SocketAddr, path: &str) -> (u16, String, String) {
    let response = reqwest::get(format!("http://{addr}{path}")).await.expect("request");
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.text().await.expect("body");
    (status, content_type, body)
}

#[tokio::test]
async fn test_recipe_page_has_preview_tags() {
    let dist = tempdir().expect("tempdir");
    write_dist(dist.path());
    let addr = spawn_app(dist.path()).await;

    let (status, content_type, body) = get(addr, "/recipe/12").await;

    assert_eq!(status, 200);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<title>Käsespätzle - FastKitchen</title>"));
    assert!(body.contains(r#"property="og:title" content="Käsespätzle - FastKitchen""#));
    assert!(body.contains(r#"content="Swabian &quot;comfort&quot; food""#));
    assert!(body.contains(r#"property="og:image" content="https://api.test/image/9""#));
    assert!(body.contains(r#"<div id="root"></div>"#));
}

#[tokio::test]
async fn test_trailing_slash_recipe_page_has_preview_tags() {
    let dist = tempdir().expect("tempdir");
    write_dist(dist.path());
    let addr = spawn_app(dist.path()).await;

    let (status, _, body) = get(addr, "/recipe/12/").await;

    assert_eq!(status, 200);
    assert!(body.contains("<title>Käsespätzle - FastKitchen</title>"));
    assert!(body.contains(r#"property="og:image" content="https://api.test/image/9""#));
}

#[tokio::test]
async fn test_empty_description_is_left_out() {
    let dist = tempdir().expect("tempdir");
    write_dist(dist.path());
    let addr = spawn_app(dist.path()).await;

    let (status, _, body) = get(addr, "/recipe/13").await;

    assert_eq!(status, 200);
    assert!(body.contains("<title>Plain Rice - FastKitchen</title>"));
    assert!(!body.contains("og:description"));
    assert!(!body.contains("og:image"));
}

#[tokio::test]
async fn test_unavailable_recipes_get_plain_shell() {
    let dist = tempdir().expect("tempdir");
    write_dist(dist.path());
    let addr = spawn_app(dist.path()).await;

    for path in ["/recipe/404", "/recipe/500", "/recipe/abc", "/recipe/12/extra"] {
        let (status, _, body) = get(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(body, SHELL, "{path}");
    }
}

#[tokio::test]
async fn test_static_files_and_spa_fallback() {
    let dist = tempdir().expect("tempdir");
    write_dist(dist.path());
    let addr = spawn_app(dist.path()).await;

    let (status, content_type, body) = get(addr, "/assets/style.css").await;
    assert_eq!(status, 200);
    assert_eq!(content_type, "text/css");
    assert_eq!(body, "body { margin: 0 }");

    for path in ["/", "/login", "/edit/12", "/assets/missing.js"] {
        let (status, content_type, body) = get(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert!(content_type.starts_with("text/html"), "{path}");
        assert_eq!(body, SHELL, "{path}");
    }
}

#[tokio::test]
async fn test_missing_shell_fails_startup() {
    let dist = tempdir().expect("tempdir");

    let result = AppState::with_source(test_config(dist.path()), Arc::new(FakeSource::default())).await;

    assert!(matches!(result, Err(PrerenderError::ShellMissing { .. })));
}
