//! Recipe Page
//!
//! Single recipe with image carousel, scalable ingredient list and steps.
//! Owners and admins get edit and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{Recipe, RecipeId, Route};

use crate::components::{DeleteConfirmButton, Footer, Header, ImageCarousel, IngredientPanel, NavLink};
use crate::navigation::set_document_title;
use crate::services::AppServices;

#[component]
pub fn RecipePage(services: AppServices, id: RecipeId) -> impl IntoView {
    let recipe = RwSignal::new(None::<Recipe>);
    let nav = services.nav;

    spawn_local(async move {
        match services.api().fetch_recipe(id).await {
            Ok(loaded) => {
                web_sys::console::log_1(&format!("[RECIPE] Loaded recipe {id}").into());
                set_document_title(&services.config.page_title(Some(&format!("{} Recipe", loaded.title))));
                recipe.set(Some(loaded));
            }
            Err(e) => {
                web_sys::console::log_1(&format!("[RECIPE] Failed to load recipe {id}: {e}").into());
                nav.push(Route::Home);
            }
        }
    });

    let on_delete = Callback::new(move |()| {
        let api = services.api();
        spawn_local(async move {
            match api.delete_recipe(id).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[RECIPE] Deleted recipe {id}").into());
                    nav.push(Route::Home);
                }
                Err(e) => web_sys::console::log_1(&format!("[RECIPE] Failed to delete recipe {id}: {e}").into()),
            }
        });
    });

    view! {
        <div class="page recipe-page">
            <Header services=services/>
            <main class="content">
                {move || recipe.get().map(|recipe| {
                    let editable = services.session.is_logged_in()
                        && recipe.editable_by(services.session.user_id(), services.session.is_admin());
                    view! { <RecipeDetails services=services recipe=recipe editable=editable on_delete=on_delete/> }
                })}
            </main>
            <Footer services=services/>
        </div>
    }
}

#[component]
fn RecipeDetails(
    services: AppServices,
    recipe: Recipe,
    editable: bool,
    on_delete: Callback<()>,
) -> impl IntoView {
    let steps: Vec<_> = recipe.sorted_steps().into_iter().cloned().collect();
    let creator = recipe.creator_name.clone().unwrap_or_else(|| "an unknown cook".to_string());

    view! {
        <article class="recipe">
            <header class="recipe-header">
                <h1>{recipe.title.clone()}</h1>
                <p class="recipe-creator">"by " {creator}</p>
                {editable.then(|| view! {
                    <div class="recipe-actions">
                        <NavLink nav=services.nav to=Route::Edit(recipe.id) class="edit-button">"Edit"</NavLink>
                        <DeleteConfirmButton
                            button_class="delete-recipe-button"
                            question="Are you sure you want to delete this recipe?"
                            on_confirm=on_delete
                        />
                    </div>
                })}
            </header>
            <ImageCarousel config=services.config images=recipe.showcase_images() alt=recipe.title.clone()/>
            <p class="recipe-description">{recipe.description.clone()}</p>
            <div class="recipe-meta">
                <span class="cooking-time">{format!("{} min", recipe.cooking_time)}</span>
                {recipe.categories.iter().map(|category| view! {
                    <span class="chip small">{category.clone()}</span>
                }).collect_view()}
            </div>
            <IngredientPanel recipe=recipe.clone()/>
            <section class="steps">
                <h2>"Steps"</h2>
                <ol>
                    {steps.into_iter().map(|step| view! {
                        <li class="step">
                            <p>{step.description}</p>
                            <div class="step-images">
                                {step.images.into_iter().map(|image| view! {
                                    <img src=services.config.image_url(image) alt="Step image" loading="lazy"/>
                                }).collect_view()}
                            </div>
                        </li>
                    }).collect_view()}
                </ol>
            </section>
        </article>
    }
}
