//! Home Page
//!
//! Recipe listing with category filters, search and sorting. The listing
//! reloads from the filter, search and sort handlers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{category_options, RecipeListing, RecipeQuery, SortBy, SortOrder};

use crate::components::{FilterChip, Footer, Header, RecipeCard};
use crate::navigation::set_document_title;
use crate::services::AppServices;

/// Recipes per listing page
const PAGE_SIZE: u32 = 24;

const SORT_OPTIONS: [(SortBy, SortOrder, &str); 5] = [
    (SortBy::Clicks, SortOrder::Desc, "Most popular"),
    (SortBy::RecipeId, SortOrder::Desc, "Newest"),
    (SortBy::Title, SortOrder::Asc, "Title A-Z"),
    (SortBy::CookingTime, SortOrder::Asc, "Quickest"),
    (SortBy::CookingTime, SortOrder::Desc, "Longest"),
];

/// Query for the page after the last loaded one; `None` while an append
/// is still running. The caller commits the new page only once it loaded.
fn next_page_query(query: &RecipeQuery, append_pending: bool) -> Option<RecipeQuery> {
    if append_pending {
        return None;
    }
    let mut next = query.clone();
    next.page = Some(query.page.unwrap_or(1) + 1);
    Some(next)
}

/// Listing load state
#[derive(Clone, Debug, PartialEq)]
enum Listing {
    Loading,
    Loaded { recipes: Vec<RecipeListing>, has_more: bool },
    Failed,
}

#[component]
pub fn HomePage(services: AppServices) -> impl IntoView {
    set_document_title(&services.config.page_title(None));

    let query = RwSignal::new(RecipeQuery {
        limit: Some(PAGE_SIZE),
        page: Some(1),
        ..Default::default()
    });
    let listing = RwSignal::new(Listing::Loading);
    let categories = RwSignal::new(category_options(&[]));
    // Bumped per request; stale responses are dropped
    let generation = StoredValue::new(0u32);
    let append_pending = StoredValue::new(false);

    // `query.page` is the last loaded page; appends commit theirs on success
    let load = move |request: RecipeQuery, append: bool| {
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        append_pending.set_value(append);
        let api = services.api();
        if !append {
            listing.set(Listing::Loading);
        }

        spawn_local(async move {
            let result = api.list_recipes(&request).await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            append_pending.set_value(false);
            match result {
                Ok(page) => {
                    if append {
                        query.update(|q| q.page = request.page);
                    }
                    web_sys::console::log_1(&format!("[HOME] Loaded {} recipes", page.len()).into());
                    let has_more = page.len() as u32 >= PAGE_SIZE;
                    listing.update(|listing| match listing {
                        Listing::Loaded { recipes, has_more: more } if append => {
                            recipes.extend(page);
                            *more = has_more;
                        }
                        _ => *listing = Listing::Loaded { recipes: page, has_more },
                    });
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[HOME] Failed to load recipes: {e}").into());
                    if !append {
                        listing.set(Listing::Failed);
                    }
                }
            }
        });
    };

    // Initial load
    load(query.get_untracked(), false);
    spawn_local(async move {
        match services.api().list_categories().await {
            Ok(fetched) => categories.set(category_options(&fetched)),
            Err(e) => web_sys::console::log_1(&format!("[HOME] Failed to load categories: {e}").into()),
        }
    });

    let refresh = move |edit: &dyn Fn(&mut RecipeQuery)| {
        query.update(|q| {
            edit(q);
            q.page = Some(1);
        });
        load(query.get_untracked(), false);
    };

    let on_search = Callback::new(move |text: String| {
        refresh(&|q| q.search = Some(text.clone()));
    });

    let on_filter = Callback::new(move |(category, active): (String, bool)| {
        refresh(&|q| {
            q.categories.retain(|c| *c != category);
            if active {
                q.categories.push(category.clone());
            }
        });
    });

    let on_sort = move |ev| {
        let index: usize = event_target_value(&ev).parse().unwrap_or_default();
        if let Some((sort_by, sort_order, _)) = SORT_OPTIONS.get(index) {
            refresh(&|q| {
                q.sort_by = *sort_by;
                q.sort_order = *sort_order;
            });
        }
    };

    let load_more = move |_| {
        match next_page_query(&query.get_untracked(), append_pending.get_value()) {
            Some(request) => load(request, true),
            None => web_sys::console::log_1(&"[HOME] Still loading the next page".into()),
        }
    };

    view! {
        <div class="page home-page">
            <Header services=services on_search=on_search/>
            <main class="content">
                <div class="filters">
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| {
                            let name = category.clone();
                            let active = Signal::derive(move || {
                                query.with(|q| q.categories.contains(&name))
                            });
                            view! { <FilterChip label=category active=active on_toggle=on_filter/> }
                        }
                    />
                    <select class="sort-select" on:change=on_sort>
                        {SORT_OPTIONS.iter().enumerate().map(|(i, (_, _, label))| view! {
                            <option value=i.to_string()>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
                {move || match listing.get() {
                    Listing::Loading => view! { <p class="listing-state">"Loading recipes…"</p> }.into_any(),
                    Listing::Failed => view! {
                        <p class="listing-state">"Recipes could not be loaded. Please try again later."</p>
                    }.into_any(),
                    Listing::Loaded { recipes, .. } if recipes.is_empty() => view! {
                        <p class="listing-state">"No recipes found."</p>
                    }.into_any(),
                    Listing::Loaded { recipes, has_more } => view! {
                        <section id="recipes">
                            {recipes.into_iter().map(|recipe| view! {
                                <RecipeCard services=services recipe=recipe/>
                            }).collect_view()}
                        </section>
                        {has_more.then(|| view! {
                            <button class="load-more" on:click=load_more>"Load more"</button>
                        })}
                    }.into_any(),
                }}
            </main>
            <Footer services=services/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_follows_last_loaded_page() {
        let query = RecipeQuery { page: Some(1), limit: Some(PAGE_SIZE), ..Default::default() };

        let next = next_page_query(&query, false).unwrap();
        assert_eq!(next.page, Some(2));
        assert_eq!(next.limit, Some(PAGE_SIZE));
        // Not committed until the page arrives, so a failed append is retried
        assert_eq!(query.page, Some(1));
        assert_eq!(next_page_query(&query, false).unwrap().page, Some(2));
    }

    #[test]
    fn test_no_second_append_while_loading() {
        let query = RecipeQuery { page: Some(2), ..Default::default() };

        assert_eq!(next_page_query(&query, true), None);
    }
}
