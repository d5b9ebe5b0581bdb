//! UI Components
//!
//! Reusable Leptos components.

mod alert_box;
mod category_autocomplete;
mod delete_confirm_button;
mod filter_chip;
mod footer;
mod header;
mod image_carousel;
mod image_upload;
mod ingredient_list_editor;
mod ingredient_panel;
mod loading_overlay;
mod nav_link;
mod recipe_card;
mod steps_editor;

pub use alert_box::AlertBox;
pub use category_autocomplete::CategoryAutocomplete;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_chip::FilterChip;
pub use footer::Footer;
pub use header::Header;
pub use image_carousel::ImageCarousel;
pub use image_upload::{ImageList, ImageUploadButton};
pub use ingredient_list_editor::IngredientListEditor;
pub use ingredient_panel::IngredientPanel;
pub use loading_overlay::LoadingOverlay;
pub use nav_link::NavLink;
pub use recipe_card::RecipeCard;
pub use steps_editor::StepsEditor;
