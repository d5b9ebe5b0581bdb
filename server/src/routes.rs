use std::{path::Path, sync::Arc};

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Uri},
    response::{Html, IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use recipe_core::{RecipeId, Route};
use tracing::{debug, warn};

use crate::{error::PrerenderResult, meta::PageMeta, state::AppState};

/// `/recipe/{id}`: the shell with the recipe's title and preview tags
pub async fn recipe_page_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match Route::parse(uri.path()) {
        Route::Recipe(id) => Html(render_recipe_page(&state, id).await).into_response(),
        _ => shell_response(&state),
    }
}

/// Everything else: a file from the dist directory, or the shell so the
/// client-side router can take over
pub async fn static_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match read_static(&state.config.dist_dir, uri.path()).await {
        Ok(Some((content, mime_type))) => ([(CONTENT_TYPE, mime_type)], content).into_response(),
        Ok(None) => shell_response(&state),
        Err(e) => {
            warn!("Failed to read {}: {e}", uri.path());
            e.into_response()
        }
    }
}

async fn render_recipe_page(state: &AppState, id: RecipeId) -> String {
    match state.source.fetch_recipe(id).await {
        Ok(recipe) => {
            let meta =
                PageMeta::for_recipe(&recipe, &state.config.site_name, &state.config.api_base);
            debug!("Rendering recipe {id}: {}", meta.title);
            state.rewriter.rewrite(&state.shell, &meta)
        }
        Err(e) => {
            warn!("Serving placeholder shell for recipe {id}: {e}");
            state.shell.clone()
        }
    }
}

fn shell_response(state: &AppState) -> Response {
    Html(state.shell.clone()).into_response()
}

/// File contents and MIME type for a request path, `None` when there is no
/// such file below `dist_dir`
async fn read_static(
    dist_dir: &Path,
    request_path: &str,
) -> PrerenderResult<Option<(Vec<u8>, String)>> {
    let decoded = percent_decode_str(request_path).decode_utf8_lossy();
    let relative = decoded.trim_start_matches('/');

    // Reject anything that could leave the dist directory
    if relative.is_empty()
        || relative.contains('\\')
        || relative.split('/').any(|segment| segment == ".." || segment.contains(':'))
    {
        return Ok(None);
    }

    let path = dist_dir.join(relative);
    match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Ok(None),
    }

    let content = tokio::fs::read(&path).await?;
    let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(Some((content, mime_type.as_ref().to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_static() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/app.css"), "body {}").unwrap();
        std::fs::write(dir.path().join("my logo.svg"), "<svg/>").unwrap();

        let (content, mime) = read_static(dir.path(), "/assets/app.css").await.unwrap().unwrap();
        assert_eq!(content, b"body {}");
        assert_eq!(mime, "text/css");

        let (_, mime) = read_static(dir.path(), "/my%20logo.svg").await.unwrap().unwrap();
        assert_eq!(mime, "image/svg+xml");
    }

    #[tokio::test]
    async fn test_read_static_misses() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();

        assert!(read_static(dir.path(), "/").await.unwrap().is_none());
        assert!(read_static(dir.path(), "/assets").await.unwrap().is_none());
        assert!(read_static(dir.path(), "/recipe/12").await.unwrap().is_none());
        assert!(read_static(dir.path(), "/../etc/passwd").await.unwrap().is_none());
        assert!(read_static(dir.path(), "/assets/%2e%2e/secret").await.unwrap().is_none());
    }
}
