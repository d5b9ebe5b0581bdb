//! Recipe Editor Page
//!
//! Create and edit form. New recipes can also be imported from a URL or
//! parsed from free text; a successful import opens the imported recipe
//! in this editor.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use recipe_core::{ImageId, Recipe, RecipeDraft, RecipeId, Route};

use crate::api::{ApiClient, ApiResult};
use crate::components::{
    AlertBox, CategoryAutocomplete, Footer, Header, ImageList, ImageUploadButton,
    IngredientListEditor, LoadingOverlay, StepsEditor,
};
use crate::navigation::set_document_title;
use crate::services::AppServices;
use crate::store::{
    clear_alert, edit_draft, report_invalid, set_category_options, show_alert, Busy, EditorState,
    EditorStateStoreFields, EditorStore, InputMode,
};

/// Which import endpoint to use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImportSource {
    Url,
    Text,
}

impl ImportSource {
    fn missing_input(&self) -> &'static str {
        match self {
            ImportSource::Url => "Please enter a URL to import",
            ImportSource::Text => "Please enter recipe text to parse",
        }
    }

    fn failure(&self, detail: &str) -> String {
        match self {
            ImportSource::Url => format!("Import failed: {detail}"),
            ImportSource::Text => format!("Parsing failed: {detail}"),
        }
    }

    async fn run(&self, api: &ApiClient, input: &str) -> ApiResult<Recipe> {
        match self {
            ImportSource::Url => api.import_recipe_url(input).await,
            ImportSource::Text => api.import_recipe_text(input).await,
        }
    }
}

fn heading(is_new: bool) -> &'static str {
    if is_new {
        "Create a new recipe"
    } else {
        "Edit your recipe"
    }
}

#[component]
pub fn EditorPage(services: AppServices, id: Option<RecipeId>) -> impl IntoView {
    let store: EditorStore = Store::new(EditorState::new());
    let nav = services.nav;
    set_document_title(&services.config.page_title(Some(heading(id.is_none()))));

    // Category suggestions
    spawn_local(async move {
        match services.api().list_categories().await {
            Ok(fetched) => set_category_options(&store, &fetched),
            Err(e) => web_sys::console::log_1(&format!("[EDITOR] Failed to load categories: {e}").into()),
        }
    });

    if let Some(id) = id {
        store.busy().set(Some(Busy::Loading));
        spawn_local(async move {
            match services.api().fetch_recipe(id).await {
                Ok(recipe) => {
                    let session = services.session;
                    if !recipe.editable_by(session.user_id(), session.is_admin()) {
                        web_sys::console::log_1(&format!("[EDITOR] Recipe {id} is not editable by this user").into());
                        nav.replace(Route::Recipe(id));
                        return;
                    }
                    web_sys::console::log_1(&format!("[EDITOR] Loaded recipe {id}").into());
                    store.draft().set(RecipeDraft::from_recipe(&recipe));
                    store.busy().set(None);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[EDITOR] Failed to load recipe {id}: {e}").into());
                    nav.push(Route::Home);
                }
            }
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.busy().get_untracked().is_some() {
            return;
        }
        let payload = match store.draft().with_untracked(RecipeDraft::to_payload) {
            Ok(payload) => payload,
            Err(e) => {
                report_invalid(&store, &e);
                return;
            }
        };
        clear_alert(&store);
        store.busy().set(Some(Busy::Saving));
        let api = services.api();

        spawn_local(async move {
            match api.save_recipe(&payload).await {
                Ok(saved) => {
                    web_sys::console::log_1(&format!("[EDITOR] Saved recipe {saved}").into());
                    store.busy().set(None);
                    nav.push(Route::Recipe(saved));
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[EDITOR] Save failed: {e}").into());
                    store.busy().set(None);
                    show_alert(&store, format!("An error occurred: {e}"));
                }
            }
        });
    };

    let import = move |source: ImportSource| {
        let input = match source {
            ImportSource::Url => store.import_url().get_untracked(),
            ImportSource::Text => store.import_text().get_untracked(),
        };
        let input = input.trim().to_string();
        if input.is_empty() {
            show_alert(&store, source.missing_input());
            return;
        }
        clear_alert(&store);
        store.busy().set(Some(Busy::Importing));
        let api = services.api();

        spawn_local(async move {
            match source.run(&api, &input).await {
                Ok(recipe) => {
                    web_sys::console::log_1(&format!("[EDITOR] Imported recipe {}", recipe.id).into());
                    store.busy().set(None);
                    nav.push(Route::Edit(recipe.id));
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[EDITOR] Import failed: {e}").into());
                    store.busy().set(None);
                    show_alert(&store, source.failure(&e.to_string()));
                }
            }
        });
    };

    let is_new = id.is_none();
    let mode = move || store.input_mode().get();

    view! {
        <div class="page editor-page">
            <Header services=services/>
            <main class="content">
                <LoadingOverlay busy=Signal::derive(move || store.busy().get())/>
                <h2>{heading(is_new)}</h2>
                <AlertBox
                    message=Signal::derive(move || store.alert().get())
                    on_dismiss=move |()| clear_alert(&store)
                />
                {is_new.then(|| view! {
                    <div class="import-url">
                        <input
                            type="url"
                            placeholder="Import from URL"
                            prop:value=move || store.import_url().get()
                            on:input=move |ev| store.import_url().set(event_target_value(&ev))
                        />
                        <button type="button" on:click=move |_| import(ImportSource::Url)>"Import"</button>
                    </div>
                    <div class="input-tabs">
                        <button
                            type="button"
                            class=move || if mode() == InputMode::Manual { "tab active" } else { "tab" }
                            on:click=move |_| store.input_mode().set(InputMode::Manual)
                        >
                            "Manual"
                        </button>
                        <button
                            type="button"
                            class=move || if mode() == InputMode::FromText { "tab active" } else { "tab" }
                            on:click=move |_| store.input_mode().set(InputMode::FromText)
                        >
                            "From Text"
                        </button>
                    </div>
                })}
                <Show
                    when=move || mode() == InputMode::Manual
                    fallback=move || view! {
                        <div class="import-text">
                            <textarea
                                placeholder="Paste your recipe here"
                                prop:value=move || store.import_text().get()
                                on:input=move |ev| store.import_text().set(event_target_value(&ev))
                            ></textarea>
                            <button type="button" on:click=move |_| import(ImportSource::Text)>"Parse"</button>
                        </div>
                    }
                >
                    <RecipeForm services=services store=store is_new=is_new on_submit=submit/>
                </Show>
            </main>
            <Footer services=services/>
        </div>
    }
}

#[component]
fn RecipeForm(
    services: AppServices,
    store: EditorStore,
    is_new: bool,
    on_submit: impl Fn(web_sys::SubmitEvent) + Clone + 'static,
) -> impl IntoView {
    let text = move |read: fn(&RecipeDraft) -> String| store.draft().with(read);

    let cover = Signal::derive(move || store.draft().with(|d| d.cover_image.into_iter().collect::<Vec<_>>()));
    let gallery = Signal::derive(move || store.draft().with(|d| d.gallery_images.clone()));
    let chosen = Signal::derive(move || store.draft().with(|d| d.categories.clone()));
    let options = Signal::derive(move || store.categories().get());

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || text(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(&store, |d| d.title = value);
                    }
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || text(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(&store, |d| d.description = value);
                    }
                ></textarea>
            </label>
            <div class="form-row">
                <label>
                    "Cooking time (min)"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || text(|d| d.cooking_time.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_draft(&store, |d| d.cooking_time = value);
                        }
                    />
                </label>
                <label>
                    "Portions"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || text(|d| d.portions.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_draft(&store, |d| d.portions = value);
                        }
                    />
                </label>
            </div>
            <CategoryAutocomplete
                chosen=chosen
                options=options
                on_add=move |category: String| edit_draft(&store, |d| d.add_category(&category))
                on_remove=move |category: String| edit_draft(&store, |d| d.remove_category(&category))
            />
            <section class="image-section">
                <h3>"Cover image"</h3>
                <ImageList
                    services=services
                    images=cover
                    on_remove=move |_: ImageId| edit_draft(&store, |d| d.set_cover_image(None))
                />
                <ImageUploadButton
                    services=services
                    label="Upload cover image"
                    on_uploaded=move |image: ImageId| edit_draft(&store, |d| d.set_cover_image(Some(image)))
                />
                <h3>"Gallery"</h3>
                <ImageList
                    services=services
                    images=gallery
                    on_remove=move |image: ImageId| edit_draft(&store, |d| d.remove_gallery_image(image))
                />
                <ImageUploadButton
                    services=services
                    label="Add gallery images"
                    multiple=true
                    on_uploaded=move |image: ImageId| edit_draft(&store, |d| d.add_gallery_image(image))
                />
            </section>
            <IngredientListEditor store=store/>
            <StepsEditor services=services store=store/>
            <button type="submit" class="submit-button">
                {if is_new { "Create" } else { "Change" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_messages() {
        assert_eq!(ImportSource::Url.missing_input(), "Please enter a URL to import");
        assert_eq!(ImportSource::Text.failure("no recipe found"), "Parsing failed: no recipe found");
        assert_eq!(ImportSource::Url.failure("timeout"), "Import failed: timeout");
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(true), "Create a new recipe");
        assert_eq!(heading(false), "Edit your recipe");
    }
}
