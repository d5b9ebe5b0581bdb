use leptos::prelude::*;
use recipe_core::ImageId;

use crate::components::{ImageList, ImageUploadButton};
use crate::services::AppServices;
use crate::store::{edit_draft, EditorStateStoreFields, EditorStore};

/// Preparation steps of the recipe editor, ending with one blank step
#[component]
pub fn StepsEditor(services: AppServices, store: EditorStore) -> impl IntoView {
    let step_count = move || store.draft().with(|d| d.steps.len());

    view! {
        <section class="steps-editor">
            <h2>"Steps"</h2>
            <For
                each=move || 0..step_count()
                key=|row| *row
                children=move |row| view! { <StepRow services=services store=store row=row/> }
            />
        </section>
    }
}

#[component]
fn StepRow(services: AppServices, store: EditorStore, row: usize) -> impl IntoView {
    let description = move || {
        store.draft().with(|d| d.steps.get(row).map(|s| s.description.clone()).unwrap_or_default())
    };
    let images = Signal::derive(move || {
        store.draft().with(|d| d.steps.get(row).map(|s| s.images.clone()).unwrap_or_default())
    });
    let is_last = move || store.draft().with(|d| row + 1 >= d.steps.len());

    view! {
        <div class="step-editor">
            <span class="step-number">{row + 1}</span>
            <textarea
                class="step-description"
                placeholder="Describe this step"
                prop:value=description
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit_draft(&store, |d| d.set_step_description(row, text));
                }
            ></textarea>
            <Show when=move || !is_last()>
                <ImageUploadButton
                    services=services
                    label="Add image"
                    multiple=true
                    on_uploaded=move |image: ImageId| edit_draft(&store, |d| d.add_step_image(row, image))
                />
                <ImageList
                    services=services
                    images=images
                    on_remove=move |image: ImageId| edit_draft(&store, |d| d.remove_step_image(row, image))
                />
                <button
                    type="button"
                    class="remove-row-button"
                    aria-label="Remove step"
                    on:click=move |_| edit_draft(&store, |d| d.remove_step(row))
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
