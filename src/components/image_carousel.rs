//! Image Carousel Component
//!
//! Cover and gallery images of a recipe, one at a time.

use leptos::prelude::*;
use recipe_core::ImageId;

use crate::config::ClientConfig;

/// Move `step` positions from `current` in a ring of `len` slots
pub fn wrap_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + step).rem_euclid(len) as usize
}

#[component]
pub fn ImageCarousel(config: ClientConfig, images: Vec<ImageId>, #[prop(into)] alt: String) -> impl IntoView {
    if images.is_empty() {
        return ().into_any();
    }

    let len = images.len();
    let urls: Vec<String> = images.iter().map(|image| config.image_url(*image)).collect();
    let (current, set_current) = signal(0usize);
    let shown = move || urls.get(current.get()).cloned().unwrap_or_default();

    view! {
        <div class="carousel">
            <img class="carousel-image" src=shown alt=alt/>
            <Show when=move || { len > 1 }>
                <button
                    class="carousel-prev"
                    aria-label="Previous image"
                    on:click=move |_| set_current.update(|i| *i = wrap_index(*i, -1, len))
                >
                    "‹"
                </button>
                <button
                    class="carousel-next"
                    aria-label="Next image"
                    on:click=move |_| set_current.update(|i| *i = wrap_index(*i, 1, len))
                >
                    "›"
                </button>
                <div class="carousel-dots">
                    {(0..len).map(|i| view! {
                        <button
                            class=move || if current.get() == i { "dot active" } else { "dot" }
                            aria-label=format!("Image {}", i + 1)
                            on:click=move |_| set_current.set(i)
                        ></button>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 1, 3), 1);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(0, -1, 0), 0);
    }
}
