//! Recipe Core
//!
//! Domain types and pure logic shared by the FastKitchen frontend and the
//! pre-render server:
//! - model: wire types of the recipe API
//! - grouping: ingredient groups for display
//! - scaling / portions: portion-based amount scaling and input validation
//! - auto_grow / draft: the recipe editor form model
//! - route: client-side routes

pub mod auto_grow;
pub mod draft;
pub mod grouping;
pub mod model;
pub mod portions;
pub mod route;
pub mod scaling;

pub use auto_grow::AutoGrowRow;
pub use draft::{category_options, DraftError, GroupDraft, IngredientDraft, RecipeDraft, StepDraft};
pub use grouping::{group_ingredients, group_positions, IngredientGroup};
pub use model::{
    Authorization, ImageId, Ingredient, NewUser, Recipe, RecipeId, RecipeListing, RecipePayload,
    RecipeQuery, SortBy, SortOrder, Step, Unit, DEFAULT_API_BASE, DEFAULT_CATEGORIES, SITE_NAME,
};
pub use portions::PortionCalculator;
pub use route::Route;
pub use scaling::{display_amount, format_amount, scale_amount, InputWarning, NumericInput};
