use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type PrerenderResult<T> = Result<T, PrerenderError>;

#[derive(Error, Debug)]
pub enum PrerenderError {
    #[error("Invalid {key} value: {reason}")]
    Config { key: String, reason: String },

    #[error("App shell not found at {path}: {source}")]
    ShellMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Recipe API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Recipe API answered {0}")]
    UpstreamStatus(u16),
}

impl IntoResponse for PrerenderError {
    fn into_response(self) -> Response {
        let status = match self {
            PrerenderError::UpstreamStatus(404) => StatusCode::NOT_FOUND,
            PrerenderError::Upstream { .. } | PrerenderError::UpstreamStatus(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
