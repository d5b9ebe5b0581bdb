//! Header Component
//!
//! Site title, optional recipe search and the theme switch.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::Route;

use crate::components::NavLink;
use crate::services::AppServices;
use crate::theme::Theme;

/// Delay between the last keystroke and the search request
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Whether a pending search is still the latest one. False once the header
/// is gone, since the timer can outlive it.
fn is_current_search(latest: ReadSignal<u32>, version: u32) -> bool {
    latest.try_get_untracked() == Some(version)
}

#[component]
pub fn Header(
    services: AppServices,
    /// Receives the search text once typing pauses; no search box when unset
    #[prop(optional, into)]
    on_search: Option<Callback<String>>,
) -> impl IntoView {
    let theme = services.theme;
    let (search_text, set_search_text) = signal(String::new());
    // Bumped on every keystroke; a pending search only fires if still current
    let (search_version, set_search_version) = signal(0u32);

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        set_search_text.set(text.clone());
        set_search_version.update(|v| *v += 1);
        let version = search_version.get_untracked();

        if let Some(on_search) = on_search {
            spawn_local(async move {
                TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                if is_current_search(search_version, version) {
                    on_search.run(text);
                }
            });
        }
    };

    view! {
        <header class="site-header">
            <NavLink nav=services.nav to=Route::Home class="site-title">
                <h1>{services.config.site_name}</h1>
            </NavLink>
            {on_search.map(|_| view! {
                <form class="search-form" on:submit=|ev| ev.prevent_default()>
                    <input
                        type="search"
                        class="search-bar"
                        placeholder="Search for recipes"
                        prop:value=move || search_text.get()
                        on:input=on_input
                    />
                </form>
            })}
            <button
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| theme.toggle()
            >
                {move || match theme.get() {
                    Theme::Light => "☾",
                    Theme::Dark => "☀",
                }}
            </button>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_superseded_by_newer_input() {
        let owner = Owner::new();
        let (version, set_version) = owner.with(|| signal(0u32));

        assert!(is_current_search(version, 0));
        set_version.set(1);
        assert!(!is_current_search(version, 0));
        assert!(is_current_search(version, 1));
    }

    #[test]
    fn test_search_dropped_after_header_disposed() {
        let owner = Owner::new();
        let (version, _) = owner.with(|| signal(3u32));

        owner.unset();
        assert!(!is_current_search(version, 3));
    }
}
