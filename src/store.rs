//! Recipe Editor State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per editor page and handed to its child components.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::{draft::category_options, DraftError, RecipeDraft};

/// What the editor is waiting for; drives the loading overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Busy {
    Loading,
    Saving,
    Importing,
}

impl Busy {
    pub fn title(&self) -> &'static str {
        match self {
            Busy::Loading => "Loading recipe…",
            Busy::Saving => "Saving recipe…",
            Busy::Importing => "Importing recipe…",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Busy::Loading => "Fetching recipe details…",
            Busy::Saving => "Almost there…",
            Busy::Importing => "Parsing your recipe, this may take a moment",
        }
    }
}

/// Manual form or free-text import (new recipes only)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Manual,
    FromText,
}

#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    pub draft: RecipeDraft,
    /// Error shown above the form
    pub alert: Option<String>,
    pub busy: Option<Busy>,
    pub input_mode: InputMode,
    pub import_url: String,
    pub import_text: String,
    /// Category suggestions (defaults + API list)
    pub categories: Vec<String>,
}

impl EditorState {
    pub fn new() -> Self {
        Self { categories: category_options(&[]), ..Default::default() }
    }
}

pub type EditorStore = Store<EditorState>;

// ========================
// Store Helper Functions
// ========================

/// Apply an edit to the draft
pub fn edit_draft(store: &EditorStore, edit: impl FnOnce(&mut RecipeDraft)) {
    edit(&mut *store.draft().write());
}

pub fn show_alert(store: &EditorStore, message: impl Into<String>) {
    store.alert().set(Some(message.into()));
}

pub fn clear_alert(store: &EditorStore) {
    store.alert().set(None);
}

/// Validation error of the current draft, shown as alert
pub fn report_invalid(store: &EditorStore, error: &DraftError) {
    web_sys::console::log_1(&format!("[EDITOR] Draft rejected: {error}").into());
    show_alert(store, error.to_string());
}

/// Merge the API's category list into the suggestions
pub fn set_category_options(store: &EditorStore, fetched: &[String]) {
    store.categories().set(category_options(fetched));
}
