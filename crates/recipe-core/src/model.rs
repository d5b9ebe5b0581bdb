//! Recipe Models
//!
//! Data structures matching the recipe API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub type RecipeId = i64;

/// Public name used in page titles
pub const SITE_NAME: &str = "FastKitchen";

/// Production recipe API
pub const DEFAULT_API_BASE: &str = "https://api.flottekueche.de/";

/// Categories offered even before the API's category list arrives
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Vegan", "Vegetarian", "Quick & Easy"];

/// Reference to an uploaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub i64);

impl ImageId {
    /// Download URL of the image; `api_base` ends with '/'
    pub fn url(&self, api_base: &str) -> String {
        format!("{api_base}image/{}", self.0)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit of measurement for an ingredient amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    G,
    Kg,
    Ml,
    L,
    Pcs,
    Tbsp,
    Tsp,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::G,
        Unit::Kg,
        Unit::Ml,
        Unit::L,
        Unit::Pcs,
        Unit::Tbsp,
        Unit::Tsp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::Pcs => "pcs",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: Unit,
    /// Display group label ("" = ungrouped)
    #[serde(default, deserialize_with = "null_as_default")]
    pub group: String,
}

/// A single preparation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Defines display order
    pub order_id: i32,
    #[serde(rename = "step")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageId>,
}

/// Full recipe as returned by `recipe/specific/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "id_", default = "unsaved_id")]
    pub id: RecipeId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub portions: u32,
    pub cooking_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub cover_image: Option<ImageId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery_images: Vec<ImageId>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub creator_id: Option<i64>,
    #[serde(default)]
    pub clicks: Option<u64>,
}

impl Recipe {
    /// Steps in display order (stable for equal order ids)
    pub fn sorted_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.order_id);
        steps
    }

    /// Cover image first, then the gallery
    pub fn showcase_images(&self) -> Vec<ImageId> {
        self.cover_image
            .into_iter()
            .chain(self.gallery_images.iter().copied())
            .collect()
    }

    /// Admins may edit everything, other users only their own recipes
    pub fn editable_by(&self, user_id: Option<i64>, is_admin: bool) -> bool {
        is_admin || (user_id.is_some() && user_id == self.creator_id)
    }
}

/// Slim recipe used by the listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeListing {
    #[serde(rename = "id_")]
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<ImageId>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub clicks: Option<u64>,
    pub cooking_time: u32,
}

/// Body of `recipe/create` and `recipe/{id}` (PUT)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipePayload {
    #[serde(rename = "id_", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub title: String,
    pub description: String,
    pub portions: u32,
    pub cooking_time: u32,
    pub categories: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub cover_image: Option<ImageId>,
    pub gallery_images: Vec<ImageId>,
}

/// Token issued by the `token` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user_id: i64,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// Body of `user/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Clicks,
    Title,
    RecipeId,
    CookingTime,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Clicks => "Clicks",
            SortBy::Title => "Title",
            SortBy::RecipeId => "RecipeID",
            SortBy::CookingTime => "CookingTime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Query of the `recipe/filtered` listing endpoint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeQuery {
    pub categories: Vec<String>,
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl RecipeQuery {
    /// Query pairs in request order; categories repeat their key
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .categories
            .iter()
            .map(|category| ("categories", category.clone()))
            .collect();

        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs.push(("sort_by", self.sort_by.as_str().to_string()));
        pairs.push(("sort_order", self.sort_order.as_str().to_string()));
        pairs
    }
}

fn unsaved_id() -> RecipeId {
    -1
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPE_JSON: &str = r#"{
        "id_": 12,
        "title": "Flammkuchen",
        "description": null,
        "portions": 4,
        "cooking_time": 30,
        "categories": ["Meal"],
        "ingredients": [
            {"name": "Flour", "unit": "g", "amount": 250.0, "group": null},
            {"name": "Bacon", "unit": "pcs", "amount": 4, "group": "Topping"}
        ],
        "steps": [
            {"order_id": 1, "step": "Bake", "images": null},
            {"order_id": 0, "step": "Knead", "images": [3]}
        ],
        "cover_image": 7,
        "gallery_images": [8, 9],
        "creator_id": 2
    }"#;

    #[test]
    fn test_recipe_from_api_json() {
        let recipe: Recipe = serde_json::from_str(RECIPE_JSON).unwrap();

        assert_eq!(recipe.id, 12);
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.ingredients[0].group, "");
        assert_eq!(recipe.ingredients[1].unit, Unit::Pcs);
        assert_eq!(recipe.ingredients[1].group, "Topping");
        assert!(recipe.steps[0].images.is_empty());
        assert_eq!(recipe.steps[1].images, vec![ImageId(3)]);
    }

    #[test]
    fn test_sorted_steps_and_showcase() {
        let recipe: Recipe = serde_json::from_str(RECIPE_JSON).unwrap();

        let steps: Vec<&str> = recipe.sorted_steps().iter().map(|s| s.description.as_str()).collect();
        assert_eq!(steps, vec!["Knead", "Bake"]);
        assert_eq!(recipe.showcase_images(), vec![ImageId(7), ImageId(8), ImageId(9)]);
    }

    #[test]
    fn test_editable_by() {
        let recipe: Recipe = serde_json::from_str(RECIPE_JSON).unwrap();

        assert!(recipe.editable_by(Some(2), false));
        assert!(!recipe.editable_by(Some(3), false));
        assert!(!recipe.editable_by(None, false));
        assert!(recipe.editable_by(None, true));
    }

    #[test]
    fn test_image_url() {
        assert_eq!(ImageId(7).url(DEFAULT_API_BASE), "https://api.flottekueche.de/image/7");
    }

    #[test]
    fn test_unit_parse() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.as_str()), Some(unit));
        }
        assert_eq!(Unit::parse("cup"), None);
    }

    #[test]
    fn test_payload_omits_id_on_create() {
        let payload = RecipePayload {
            id: None,
            title: "Soup".into(),
            description: "Hot".into(),
            portions: 2,
            cooking_time: 10,
            categories: vec!["Vegan".into()],
            ingredients: vec![],
            steps: vec![Step { order_id: 0, description: "Boil".into(), images: vec![] }],
            cover_image: None,
            gallery_images: vec![],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id_").is_none());
        assert_eq!(value["steps"][0]["step"], "Boil");
        assert!(value["cover_image"].is_null());
    }

    #[test]
    fn test_query_pairs() {
        let query = RecipeQuery {
            categories: vec!["Vegan".into(), "Quick & Easy".into()],
            search: Some("  pasta ".into()),
            ..Default::default()
        };

        assert_eq!(
            query.to_pairs(),
            vec![
                ("categories", "Vegan".to_string()),
                ("categories", "Quick & Easy".to_string()),
                ("search", "pasta".to_string()),
                ("sort_by", "Clicks".to_string()),
                ("sort_order", "DESC".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_skips_blank_search() {
        let query = RecipeQuery {
            search: Some("   ".into()),
            limit: Some(10),
            page: Some(2),
            sort_by: SortBy::Title,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };

        let keys: Vec<&str> = query.to_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["limit", "page", "sort_by", "sort_order"]);
    }
}
