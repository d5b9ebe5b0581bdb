//! Ingredient Panel Component
//!
//! Ingredient list of the recipe page with editable portion count and
//! amounts. Changing either one rescales the rest.

use leptos::prelude::*;
use recipe_core::{group_positions, PortionCalculator, Recipe};

#[component]
pub fn IngredientPanel(recipe: Recipe) -> impl IntoView {
    let calculator = RwSignal::new(PortionCalculator::new(&recipe));

    let groups: Vec<(String, Vec<usize>)> = group_positions(&recipe.ingredients)
        .into_iter()
        .map(|(label, indices)| (label.to_string(), indices))
        .collect();
    let show_group_names = groups.len() > 1;
    let ingredients = recipe.ingredients;

    let portion_warning = move || calculator.with(|c| c.portions_warning().map(|w| w.to_string()));

    view! {
        <section class="ingredients">
            <h2>"Ingredients"</h2>
            <div class="portions">
                <label>
                    "Portions "
                    <input
                        type="text"
                        inputmode="decimal"
                        class="portion-input"
                        prop:value=move || calculator.with(|c| c.portions_text())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            calculator.update(|c| c.set_portions_input(&text));
                        }
                    />
                </label>
                <button class="reset-button" on:click=move |_| calculator.update(|c| c.reset())>
                    "Reset"
                </button>
                {move || portion_warning().map(|w| view! { <p class="field-warning">{w}</p> })}
            </div>
            {groups.into_iter().map(|(label, indices)| {
                view! {
                    <div class="ingredient-group">
                        {(show_group_names && !label.is_empty()).then(|| view! { <h3>{label.clone()}</h3> })}
                        <ul class="ingredient-list">
                            {indices.into_iter().filter_map(|index| {
                                let ingredient = ingredients.get(index)?.clone();
                                Some(view! {
                                    <li class="ingredient-row">
                                        <input
                                            type="text"
                                            inputmode="decimal"
                                            class="amount-input"
                                            prop:value=move || calculator.with(|c| c.amount_text(index))
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                calculator.update(|c| c.set_amount_input(index, &text));
                                            }
                                        />
                                        <span class="unit">{ingredient.unit.as_str()}</span>
                                        <span class="ingredient-name">{ingredient.name}</span>
                                        {move || calculator.with(|c| c.amount_warning(index)).map(|w| view! {
                                            <p class="field-warning">{w.to_string()}</p>
                                        })}
                                    </li>
                                })
                            }).collect_view()}
                        </ul>
                    </div>
                }
            }).collect_view()}
        </section>
    }
}
