//! Image Upload Components
//!
//! File picker that uploads every chosen image, and a thumbnail strip with
//! delete buttons. Upload and delete failures only reach the console.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::ImageId;
use wasm_bindgen::JsCast;

use crate::services::AppServices;

fn chosen_files(ev: &web_sys::Event) -> Vec<web_sys::File> {
    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return vec![];
    };
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    // Same file can be picked again
    input.set_value("");
    files
}

#[component]
pub fn ImageUploadButton(
    services: AppServices,
    #[prop(into)] label: String,
    #[prop(optional)] multiple: bool,
    #[prop(into)] on_uploaded: Callback<ImageId>,
) -> impl IntoView {
    let (uploading, set_uploading) = signal(0usize);

    let on_change = move |ev: web_sys::Event| {
        let files = chosen_files(&ev);
        if files.is_empty() {
            return;
        }
        set_uploading.update(|n| *n += files.len());
        let api = services.api();

        spawn_local(async move {
            for file in files {
                let name = file.name();
                match api.upload_file(file).await {
                    Ok(id) => {
                        web_sys::console::log_1(&format!("[IMAGE] Uploaded {name} as {}", id.0).into());
                        on_uploaded.run(id);
                    }
                    Err(e) => {
                        web_sys::console::log_1(&format!("[IMAGE] Upload of {name} failed: {e}").into());
                    }
                }
                set_uploading.update(|n| *n = n.saturating_sub(1));
            }
        });
    };

    view! {
        <label class="upload-button">
            {move || if uploading.get() > 0 { "Uploading…".to_string() } else { label.clone() }}
            <input
                type="file"
                accept="image/*"
                multiple=multiple
                class="visually-hidden"
                on:change=on_change
            />
        </label>
    }
}

/// Thumbnails with a delete button each. Deleting removes the image from
/// the form first, then from the server.
#[component]
pub fn ImageList(
    services: AppServices,
    #[prop(into)] images: Signal<Vec<ImageId>>,
    #[prop(into)] on_remove: Callback<ImageId>,
) -> impl IntoView {
    let remove = move |image: ImageId| {
        on_remove.run(image);
        let api = services.api();
        spawn_local(async move {
            if let Err(e) = api.delete_image(image).await {
                web_sys::console::log_1(&format!("[IMAGE] Delete of {} failed: {e}", image.0).into());
            }
        });
    };

    view! {
        <div class="image-list">
            <For
                each=move || images.get()
                key=|image| image.0
                children=move |image| view! {
                    <div class="image-thumb">
                        <img src=services.config.image_url(image) alt="Recipe image"/>
                        <button
                            type="button"
                            class="image-remove"
                            aria-label="Remove image"
                            on:click=move |_| remove(image)
                        >
                            "×"
                        </button>
                    </div>
                }
            />
        </div>
    }
}
