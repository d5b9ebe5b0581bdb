//! Recipe Draft
//!
//! Form model of the recipe editor: raw field texts, ingredient groups and
//! steps as auto-growing lists, validation, and conversion into the payload
//! sent to the API.

use std::collections::HashSet;

use thiserror::Error;

use crate::auto_grow::{self, AutoGrowRow};
use crate::grouping::group_ingredients;
use crate::model::{
    ImageId, Ingredient, Recipe, RecipeId, RecipePayload, Step, Unit, DEFAULT_CATEGORIES,
};
use crate::scaling::format_amount;

/// Reasons a draft cannot be submitted; the message is shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please enter a title")]
    MissingTitle,
    #[error("Please enter a description")]
    MissingDescription,
    #[error("Please enter at least one category")]
    MissingCategory,
    #[error("Please enter a valid cooking time")]
    InvalidCookingTime,
    #[error("Please enter a valid number of portions")]
    InvalidPortions,
    #[error("Ingredient groups must have different names")]
    DuplicateGroupNames,
    #[error("Ingredient groups must have a name")]
    UnnamedGroup,
    #[error("Please enter a valid amount for {0}")]
    InvalidAmount(String),
    #[error("Please enter at least one step")]
    MissingStep,
}

/// Ingredient row of the editor
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDraft {
    pub name: String,
    /// Raw amount text
    pub amount: String,
    pub unit: Unit,
}

impl AutoGrowRow for IngredientDraft {
    fn blank() -> Self {
        Self { name: String::new(), amount: "0".to_string(), unit: Unit::default() }
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Named ingredient group of the editor
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDraft {
    pub name: String,
    pub ingredients: Vec<IngredientDraft>,
}

impl GroupDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ingredients: vec![IngredientDraft::blank()] }
    }
}

/// Step row of the editor
#[derive(Debug, Clone, PartialEq)]
pub struct StepDraft {
    pub order_id: i32,
    pub description: String,
    pub images: Vec<ImageId>,
}

impl AutoGrowRow for StepDraft {
    fn blank() -> Self {
        Self { order_id: 0, description: String::new(), images: Vec::new() }
    }

    fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}

/// Everything the recipe editor holds
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    /// Set when editing an existing recipe
    pub id: Option<RecipeId>,
    pub title: String,
    pub description: String,
    pub cooking_time: String,
    pub portions: String,
    pub categories: Vec<String>,
    pub cover_image: Option<ImageId>,
    pub gallery_images: Vec<ImageId>,
    pub groups: Vec<GroupDraft>,
    pub steps: Vec<StepDraft>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            cooking_time: "20".to_string(),
            portions: "1".to_string(),
            categories: Vec::new(),
            cover_image: None,
            gallery_images: Vec::new(),
            groups: vec![GroupDraft::new("")],
            steps: vec![StepDraft::blank()],
        }
    }
}

impl RecipeDraft {
    /// Draft for editing an existing recipe
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut groups: Vec<GroupDraft> = group_ingredients(&recipe.ingredients)
            .into_iter()
            .map(|group| GroupDraft {
                name: group.group,
                ingredients: group
                    .ingredients
                    .into_iter()
                    .map(|ingredient| IngredientDraft {
                        name: ingredient.name,
                        amount: format_amount(ingredient.amount),
                        unit: ingredient.unit,
                    })
                    .collect(),
            })
            .collect();
        if groups.is_empty() {
            groups.push(GroupDraft::new(""));
        }

        let steps = recipe
            .sorted_steps()
            .into_iter()
            .map(|step| StepDraft {
                order_id: step.order_id,
                description: step.description.clone(),
                images: step.images.clone(),
            })
            .collect();

        let mut draft = Self {
            id: Some(recipe.id),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            cooking_time: recipe.cooking_time.to_string(),
            portions: recipe.portions.to_string(),
            categories: recipe.categories.clone(),
            cover_image: recipe.cover_image,
            gallery_images: recipe.gallery_images.clone(),
            groups,
            steps,
        };
        draft.settle_all();
        draft
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Re-establish the trailing blank row of every list
    pub fn settle_all(&mut self) {
        for group in &mut self.groups {
            auto_grow::settle(&mut group.ingredients);
        }
        auto_grow::settle(&mut self.steps);
    }

    // ========================
    // Ingredients
    // ========================

    pub fn set_ingredient_name(&mut self, group: usize, row: usize, name: String) {
        if let Some(group) = self.groups.get_mut(group) {
            auto_grow::edit_row(&mut group.ingredients, row, |r| r.name = name);
        }
    }

    pub fn set_ingredient_amount(&mut self, group: usize, row: usize, amount: String) {
        if let Some(group) = self.groups.get_mut(group) {
            auto_grow::edit_row(&mut group.ingredients, row, |r| r.amount = amount);
        }
    }

    pub fn set_ingredient_unit(&mut self, group: usize, row: usize, unit: Unit) {
        if let Some(group) = self.groups.get_mut(group) {
            auto_grow::edit_row(&mut group.ingredients, row, |r| r.unit = unit);
        }
    }

    pub fn remove_ingredient(&mut self, group: usize, row: usize) {
        if let Some(group) = self.groups.get_mut(group) {
            auto_grow::remove_row(&mut group.ingredients, row);
        }
    }

    pub fn add_group(&mut self) {
        self.groups.push(GroupDraft::new(""));
    }

    pub fn rename_group(&mut self, group: usize, name: String) {
        if let Some(group) = self.groups.get_mut(group) {
            group.name = name;
        }
    }

    /// Remove a group; the last remaining group is kept
    pub fn remove_group(&mut self, group: usize) {
        if self.groups.len() > 1 && group < self.groups.len() {
            self.groups.remove(group);
        }
    }

    // ========================
    // Steps
    // ========================

    pub fn set_step_description(&mut self, row: usize, description: String) {
        auto_grow::edit_row(&mut self.steps, row, |step| step.description = description);
    }

    pub fn remove_step(&mut self, row: usize) {
        auto_grow::remove_row(&mut self.steps, row);
    }

    pub fn add_step_image(&mut self, row: usize, image: ImageId) {
        if let Some(step) = self.steps.get_mut(row) {
            step.images.push(image);
        }
    }

    pub fn remove_step_image(&mut self, row: usize, image: ImageId) {
        if let Some(step) = self.steps.get_mut(row) {
            step.images.retain(|id| *id != image);
        }
    }

    // ========================
    // Images & Categories
    // ========================

    pub fn set_cover_image(&mut self, image: Option<ImageId>) {
        self.cover_image = image;
    }

    pub fn add_gallery_image(&mut self, image: ImageId) {
        self.gallery_images.push(image);
    }

    pub fn remove_gallery_image(&mut self, image: ImageId) {
        self.gallery_images.retain(|id| *id != image);
    }

    /// Add a category unless blank or already present
    pub fn add_category(&mut self, category: &str) {
        let category = category.trim();
        if !category.is_empty() && !self.categories.iter().any(|c| c == category) {
            self.categories.push(category.to_string());
        }
    }

    pub fn remove_category(&mut self, category: &str) {
        self.categories.retain(|c| c != category);
    }

    // ========================
    // Submission
    // ========================

    /// Check the draft, first failing rule wins
    pub fn validate(&self) -> Result<(), DraftError> {
        self.to_payload().map(|_| ())
    }

    /// Validated payload for `recipe/create` or `recipe/{id}`
    pub fn to_payload(&self) -> Result<RecipePayload, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }

        let categories = dedup_categories(self.categories.iter().map(String::as_str));
        if categories.is_empty() {
            return Err(DraftError::MissingCategory);
        }

        let cooking_time =
            parse_positive_int(&self.cooking_time).ok_or(DraftError::InvalidCookingTime)?;
        let portions = parse_positive_int(&self.portions).ok_or(DraftError::InvalidPortions)?;

        let mut seen = HashSet::new();
        if !self.groups.iter().all(|group| seen.insert(group.name.trim())) {
            return Err(DraftError::DuplicateGroupNames);
        }
        if self.groups.len() > 1 && self.groups.iter().any(|group| group.name.trim().is_empty()) {
            return Err(DraftError::UnnamedGroup);
        }

        let mut ingredients = Vec::new();
        for group in &self.groups {
            let label = group.name.trim();
            for row in group.ingredients.iter().filter(|row| !row.is_blank()) {
                let name = row.name.trim().to_string();
                let amount = match row.amount.trim().parse::<f64>() {
                    Ok(amount) if amount.is_finite() && amount >= 0.0 => amount,
                    _ => return Err(DraftError::InvalidAmount(name)),
                };
                ingredients.push(Ingredient { name, amount, unit: row.unit, group: label.to_string() });
            }
        }

        let steps: Vec<Step> = self
            .steps
            .iter()
            .filter(|step| !step.is_blank())
            .zip(0..)
            .map(|(step, order_id)| Step {
                order_id,
                description: step.description.trim().to_string(),
                images: step.images.clone(),
            })
            .collect();
        if steps.is_empty() {
            return Err(DraftError::MissingStep);
        }

        Ok(RecipePayload {
            id: self.id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            portions,
            cooking_time,
            categories,
            ingredients,
            steps,
            cover_image: self.cover_image,
            gallery_images: self.gallery_images.clone(),
        })
    }
}

/// Category options: the defaults followed by the given list, trimmed and
/// de-duplicated in first-seen order
pub fn category_options(fetched: &[String]) -> Vec<String> {
    let defaults = DEFAULT_CATEGORIES.iter().copied();
    dedup_categories(defaults.chain(fetched.iter().map(String::as_str)))
}

fn dedup_categories<'a>(categories: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .map(str::trim)
        .filter(|category| !category.is_empty() && seen.insert(*category))
        .map(str::to_string)
        .collect()
}

fn parse_positive_int(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|value| *value > 0)
}
