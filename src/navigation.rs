//! Client-side navigation over the History API

use leptos::ev;
use leptos::prelude::*;
use recipe_core::Route;
use wasm_bindgen::JsValue;

fn current_path() -> Option<String> {
    let location = web_sys::window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{path}{search}"))
}

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

/// Current route as a signal, kept in sync with the address bar
#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
}

impl Navigator {
    pub fn from_location() -> Self {
        let route = current_path().map(|path| Route::parse(&path)).unwrap_or_default();
        Self { route: RwSignal::new(route) }
    }

    pub fn route(&self) -> Route {
        self.route.get()
    }

    /// Go to a route, adding a history entry
    pub fn push(&self, route: Route) {
        self.update_history(route, false);
    }

    /// Go to a route without a new history entry (redirects)
    pub fn replace(&self, route: Route) {
        self.update_history(route, true);
    }

    fn update_history(&self, route: Route, replace: bool) {
        let path = route.path();
        if let Some(history) = history() {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(&path))
            };
            if result.is_err() {
                web_sys::console::log_1(&format!("[NAV] Failed to update history for {path}").into());
            }
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.route.set(route);
    }

    /// Follow the browser's back/forward buttons
    pub fn listen(&self) {
        let route = self.route;
        let _ = window_event_listener(ev::popstate, move |_| {
            let next = current_path().map(|path| Route::parse(&path)).unwrap_or_default();
            web_sys::console::log_1(&format!("[NAV] popstate -> {next}").into());
            route.set(next);
        });
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(title);
    }
}
