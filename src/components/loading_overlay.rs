use leptos::prelude::*;

use crate::store::Busy;

/// Full-screen spinner while the editor waits for the API
#[component]
pub fn LoadingOverlay(#[prop(into)] busy: Signal<Option<Busy>>) -> impl IntoView {
    move || {
        busy.get().map(|busy| {
            view! {
                <div class="loading-overlay" role="status">
                    <div class="spinner"></div>
                    <p class="loading-title">{busy.title()}</p>
                    <p class="loading-hint">{busy.hint()}</p>
                </div>
            }
        })
    }
}
