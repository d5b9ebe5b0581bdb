//! Light/dark theme, remembered in a cookie

use leptos::prelude::*;

use crate::session::{cookie_assignment, cookie_value, html_document, write_cookie};

const THEME_COOKIE: &str = "theme";
const THEME_MAX_AGE: u32 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn restore() -> Self {
        let theme = html_document()
            .and_then(|document| document.cookie().ok())
            .and_then(|cookies| cookie_value(&cookies, THEME_COOKIE))
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self { theme: RwSignal::new(theme) }
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        write_cookie("THEME", &cookie_assignment(THEME_COOKIE, next.as_str(), THEME_MAX_AGE));
        self.theme.set(next);
    }
}
