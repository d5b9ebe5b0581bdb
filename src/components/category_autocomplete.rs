//! Category Autocomplete Component
//!
//! Category chips plus an input with fuzzy suggestions. Free text is
//! accepted too; semicolons separate several categories in one go.

use leptos::prelude::*;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let target = target.to_lowercase();
    let mut target_chars = target.chars();
    query
        .to_lowercase()
        .chars()
        .all(|query_char| target_chars.any(|c| c == query_char))
}

/// Up to five options matching the input, excluding already chosen ones
pub fn suggestions(input: &str, options: &[String], chosen: &[String]) -> Vec<String> {
    let query = input.trim();
    if query.is_empty() {
        return vec![];
    }
    options
        .iter()
        .filter(|option| !chosen.contains(option))
        .filter(|option| fuzzy_match(query, option))
        .take(5)
        .cloned()
        .collect()
}

/// Split a submitted input into category names
pub fn split_categories(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Category picker
///
/// Props:
/// - chosen: categories currently on the recipe
/// - options: suggestions offered while typing
/// - on_add / on_remove: called once per category
#[component]
pub fn CategoryAutocomplete(
    #[prop(into)] chosen: Signal<Vec<String>>,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] on_add: Callback<String>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let current_suggestions = move || {
        let input = input_value.get();
        let segment = input.rsplit(';').next().unwrap_or_default();
        chosen.with(|chosen| options.with(|options| suggestions(segment, options, chosen)))
    };

    let commit = move || {
        let mut names = split_categories(&input_value.get_untracked());
        let sugg = current_suggestions();
        let sel = selected_idx.get_untracked();

        // The last (possibly partial) name may complete to the highlighted suggestion
        if let (Some(last), Some(suggestion)) = (names.last_mut(), sugg.get(sel)) {
            if fuzzy_match(last, suggestion) {
                *last = suggestion.clone();
            }
        }
        for name in names {
            on_add.run(name);
        }
        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = current_suggestions();
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                commit();
            }
            "Tab" if !sugg.is_empty() => {
                ev.prevent_default();
                if let Some(suggestion) = sugg.get(selected_idx.get_untracked()) {
                    on_add.run(suggestion.clone());
                    set_input_value.set(String::new());
                    set_selected_idx.set(0);
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get_untracked();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.update(|sel| *sel = sel.saturating_sub(1));
            }
            _ => {}
        }
    };

    view! {
        <div class="category-input">
            <div class="category-chips">
                <For
                    each=move || chosen.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let to_remove = category.clone();
                        view! {
                            <span class="chip">
                                {category}
                                <button
                                    type="button"
                                    class="chip-remove"
                                    on:click=move |_| on_remove.run(to_remove.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <input
                type="text"
                placeholder="Categories"
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    set_input_value.set(event_target_value(&ev));
                    set_selected_idx.set(0);
                }
                on:keydown=on_keydown
                on:blur=move |_| commit()
            />
            {move || {
                let sugg = current_suggestions();
                if sugg.is_empty() {
                    return ().into_any();
                }
                let selected = selected_idx.get();
                view! {
                    <div class="autocomplete-list">
                        {sugg.into_iter().enumerate().map(|(i, name)| {
                            let name_for_click = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                    on:mousedown=move |ev| {
                                        // Before the input's blur commits the partial text
                                        ev.prevent_default();
                                        on_add.run(name_for_click.clone());
                                        set_input_value.set(String::new());
                                        set_selected_idx.set(0);
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("veg", "Vegan"));
        assert!(fuzzy_match("qe", "Quick & Easy"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("nav", "Vegan"));
        assert!(!fuzzy_match("vegans", "Vegan"));
    }

    #[test]
    fn test_suggestions_skip_chosen() {
        let options = strings(&["Vegan", "Vegetarian", "Quick & Easy"]);

        assert_eq!(suggestions("veg", &options, &strings(&["Vegan"])), strings(&["Vegetarian"]));
        assert!(suggestions("  ", &options, &[]).is_empty());
    }

    #[test]
    fn test_split_categories() {
        assert_eq!(split_categories(" Asian ; ;Dessert"), strings(&["Asian", "Dessert"]));
        assert!(split_categories("").is_empty());
    }
}
