use leptos::prelude::*;

/// Toggleable category filter
#[component]
pub fn FilterChip(
    #[prop(into)] label: String,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let text = label.clone();
    view! {
        <button
            class=move || if active.get() { "filter-chip active" } else { "filter-chip" }
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_toggle.run((label.clone(), !active.get_untracked()))
        >
            {text}
        </button>
    }
}
