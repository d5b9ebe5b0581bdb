//! Client Routes

use std::fmt;

use crate::model::RecipeId;

/// Pages of the single-page app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Recipe(RecipeId),
    Create,
    Edit(RecipeId),
    Login,
    Register,
    LegalNotice,
    NotFound,
}

impl Route {
    /// Parse a location path; query string, fragment and a trailing slash
    /// are ignored
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        match segments.as_slice() {
            [""] => Route::Home,
            ["recipe", id] => parse_id(id).map_or(Route::NotFound, Route::Recipe),
            ["edit", id] => parse_id(id).map_or(Route::NotFound, Route::Edit),
            ["create"] => Route::Create,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["legalnotice"] => Route::LegalNotice,
            _ => Route::NotFound,
        }
    }

    /// Canonical path; `NotFound` maps to the home page
    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::Recipe(id) => format!("/recipe/{id}"),
            Route::Create => "/create".to_string(),
            Route::Edit(id) => format!("/edit/{id}"),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::LegalNotice => "/legalnotice".to_string(),
        }
    }

    pub fn requires_login(&self) -> bool {
        matches!(self, Route::Create | Route::Edit(_))
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::Register)
    }

    /// Where to send a visitor who may not see this route
    pub fn guard(self, logged_in: bool, is_admin: bool) -> Route {
        if self.requires_login() && !logged_in {
            Route::Login
        } else if self.requires_admin() && !is_admin {
            Route::Home
        } else {
            self
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn parse_id(segment: &str) -> Option<RecipeId> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
