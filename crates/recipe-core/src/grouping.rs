//! Ingredient Grouping
//!
//! Buckets a recipe's flat ingredient list by group label for display.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::Ingredient;

/// Ingredients sharing one group label, in recipe order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientGroup {
    pub group: String,
    pub ingredients: Vec<Ingredient>,
}

/// Group labels with the input indices of their ingredients.
/// Groups appear in order of first occurrence; labels match exactly.
pub fn group_positions(ingredients: &[Ingredient]) -> Vec<(&str, Vec<usize>)> {
    let mut slot_by_label: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();

    for (index, ingredient) in ingredients.iter().enumerate() {
        let label = ingredient.group.as_str();
        let slot = *slot_by_label.entry(label).or_insert_with(|| {
            groups.push((label, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(index);
    }

    groups
}

/// Build display groups from a flat ingredient list
pub fn group_ingredients(ingredients: &[Ingredient]) -> Vec<IngredientGroup> {
    group_positions(ingredients)
        .into_iter()
        .map(|(label, indices)| IngredientGroup {
            group: label.to_string(),
            ingredients: indices.into_iter().map(|i| ingredients[i].clone()).collect(),
        })
        .collect()
}
