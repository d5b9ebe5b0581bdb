use leptos::prelude::*;
use recipe_core::{RecipeListing, Route};

use crate::services::AppServices;

/// Listing entry on the home page
#[component]
pub fn RecipeCard(services: AppServices, recipe: RecipeListing) -> impl IntoView {
    let route = Route::Recipe(recipe.id);
    let nav = services.nav;
    let cover = recipe.cover_image.map(|image| services.config.image_url(image));
    let creator = recipe.creator.clone().unwrap_or_else(|| "an unknown cook".to_string());

    view! {
        <a
            class="recipe-card"
            href=route.path()
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key()) {
                    ev.prevent_default();
                    nav.push(route);
                }
            }
        >
            {match cover {
                Some(src) => view! { <img class="card-image" src=src alt=recipe.title.clone() loading="lazy"/> }.into_any(),
                None => view! { <div class="card-image placeholder"></div> }.into_any(),
            }}
            <div class="card-body">
                <h2 class="card-title">{recipe.title.clone()}</h2>
                <p class="card-creator">"by " {creator}</p>
                <p class="card-description">{recipe.description.clone()}</p>
                <div class="card-meta">
                    <span class="cooking-time">{format!("{} min", recipe.cooking_time)}</span>
                    {recipe.categories.iter().map(|category| view! {
                        <span class="chip small">{category.clone()}</span>
                    }).collect_view()}
                </div>
            </div>
        </a>
    }
}
