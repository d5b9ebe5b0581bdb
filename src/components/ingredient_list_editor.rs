//! Ingredient List Editor Component
//!
//! Named ingredient groups of the recipe editor. Each group's list always
//! ends with one blank row; typing into it appends the next.

use leptos::prelude::*;
use recipe_core::Unit;

use crate::store::{edit_draft, EditorStateStoreFields, EditorStore};

#[component]
pub fn IngredientListEditor(store: EditorStore) -> impl IntoView {
    let group_count = move || store.draft().with(|d| d.groups.len());

    view! {
        <section class="ingredient-editor">
            <h2>"Ingredients"</h2>
            <For
                each=move || 0..group_count()
                key=|group| *group
                children=move |group| view! { <GroupEditor store=store group=group/> }
            />
            <button
                type="button"
                class="add-group-button"
                on:click=move |_| edit_draft(&store, |d| d.add_group())
            >
                "Add group"
            </button>
        </section>
    }
}

#[component]
fn GroupEditor(store: EditorStore, group: usize) -> impl IntoView {
    let name = move || {
        store.draft().with(|d| d.groups.get(group).map(|g| g.name.clone()).unwrap_or_default())
    };
    let row_count =
        move || store.draft().with(|d| d.groups.get(group).map_or(0, |g| g.ingredients.len()));
    let removable = move || store.draft().with(|d| d.groups.len() > 1);

    view! {
        <div class="ingredient-group-editor">
            <div class="group-header">
                <input
                    type="text"
                    class="group-name"
                    placeholder="Group name (e.g. Dough)"
                    prop:value=name
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        edit_draft(&store, |d| d.rename_group(group, text));
                    }
                />
                <Show when=removable>
                    <button
                        type="button"
                        class="remove-group-button"
                        on:click=move |_| edit_draft(&store, |d| d.remove_group(group))
                    >
                        "Remove group"
                    </button>
                </Show>
            </div>
            <For
                each=move || 0..row_count()
                key=|row| *row
                children=move |row| view! { <IngredientRow store=store group=group row=row/> }
            />
        </div>
    }
}

#[component]
fn IngredientRow(store: EditorStore, group: usize, row: usize) -> impl IntoView {
    let field = move |read: fn(&recipe_core::IngredientDraft) -> String| {
        store.draft().with(|d| {
            d.groups
                .get(group)
                .and_then(|g| g.ingredients.get(row))
                .map(read)
                .unwrap_or_default()
        })
    };
    let is_last = move || {
        store.draft().with(|d| d.groups.get(group).map_or(true, |g| row + 1 >= g.ingredients.len()))
    };

    view! {
        <div class="ingredient-row-editor">
            <input
                type="text"
                class="ingredient-name-input"
                placeholder="Ingredient"
                prop:value=move || field(|i| i.name.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit_draft(&store, |d| d.set_ingredient_name(group, row, text));
                }
            />
            <input
                type="text"
                inputmode="decimal"
                class="ingredient-amount-input"
                placeholder="Amount"
                prop:value=move || field(|i| i.amount.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit_draft(&store, |d| d.set_ingredient_amount(group, row, text));
                }
            />
            <select
                class="ingredient-unit-select"
                prop:value=move || field(|i| i.unit.as_str().to_string())
                on:change=move |ev| {
                    if let Some(unit) = Unit::parse(&event_target_value(&ev)) {
                        edit_draft(&store, |d| d.set_ingredient_unit(group, row, unit));
                    }
                }
            >
                {Unit::ALL.iter().map(|unit| view! {
                    <option value=unit.as_str()>{unit.as_str()}</option>
                }).collect_view()}
            </select>
            <Show when=move || !is_last()>
                <button
                    type="button"
                    class="remove-row-button"
                    aria-label="Remove ingredient"
                    on:click=move |_| edit_draft(&store, |d| d.remove_ingredient(group, row))
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
