//! End-to-end behavior of the recipe view and editor models

use recipe_core::{
    auto_grow, display_amount, group_ingredients, group_positions, scale_amount, DraftError,
    InputWarning, PortionCalculator, Recipe, RecipeDraft, Route, Unit,
};

fn make_recipe() -> Recipe {
    serde_json::from_str(
        r#"{
            "id_": 21,
            "title": "Spinach Lasagna",
            "description": "Layered and baked",
            "portions": 4,
            "cooking_time": 60,
            "categories": ["Vegetarian"],
            "ingredients": [
                {"name": "Sheets", "unit": "pcs", "amount": 12, "group": "Pasta"},
                {"name": "Ricotta", "unit": "g", "amount": 100, "group": "Filling"},
                {"name": "Spinach", "unit": "g", "amount": 20, "group": "Filling"},
                {"name": "Salt", "unit": "tsp", "amount": 1, "group": "Seasoning"}
            ],
            "steps": [
                {"order_id": 1, "step": "Layer everything", "images": []},
                {"order_id": 0, "step": "Blanch the spinach", "images": [4]}
            ],
            "cover_image": 3,
            "creator_name": "Anna",
            "creator_id": 5
        }"#,
    )
    .unwrap()
}

#[test]
fn test_scaling_formula() {
    for (amount, base, target) in [(100.0, 4.0, 2.0), (37.0, 3.0, 7.0), (0.5, 2.0, 9.0)] {
        let expected = (amount * target / base * 10.0_f64).round() / 10.0;
        assert!((scale_amount(amount, base, target) - expected).abs() < 1e-9);
    }
    assert_eq!(display_amount(100.0, 4, "2"), 50.0);
    assert_eq!(display_amount(100.0, 4, "abc"), 100.0);
}

#[test]
fn test_recipe_view_groups_and_scales() {
    let recipe = make_recipe();
    let groups = group_ingredients(&recipe.ingredients);
    let labels: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(labels, vec!["Pasta", "Filling", "Seasoning"]);

    let positions = group_positions(&recipe.ingredients);
    assert_eq!(positions[1], ("Filling", vec![1, 2]));

    let mut calc = PortionCalculator::new(&recipe);
    calc.set_amount_input(1, "50");

    assert_eq!(calc.portions_text(), "2");
    assert_eq!(calc.displayed_amount(2), 10.0);
    assert_eq!(calc.displayed_amount(0), 6.0);

    calc.set_portions_input("-5");
    assert_eq!(calc.portions_warning(), Some(InputWarning::PortionsNotPositive));
    assert!((0..calc.ingredient_count()).all(|i| calc.displayed_amount(i) == 0.0));

    calc.set_portions_input("8");
    assert_eq!(calc.displayed_amount(1), 200.0);
}

#[test]
fn test_edit_existing_recipe() {
    let recipe = make_recipe();
    let mut draft = RecipeDraft::from_recipe(&recipe);
    assert_eq!(draft.steps[0].description, "Blanch the spinach");

    // Clearing a filled row keeps the lists settled
    draft.set_ingredient_name(1, 1, String::new());
    assert!(auto_grow::is_settled(&draft.groups[1].ingredients));

    draft.set_ingredient_name(1, 1, "Nutmeg".into());
    draft.set_ingredient_unit(1, 1, Unit::Tsp);
    draft.set_ingredient_amount(1, 1, "0.5".into());

    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.id, Some(21));
    let nutmeg = payload.ingredients.iter().find(|i| i.name == "Nutmeg").unwrap();
    assert_eq!(nutmeg.group, "Filling");
    assert_eq!(nutmeg.amount, 0.5);
    assert_eq!(payload.steps.len(), 2);
    assert_eq!(Route::parse(&Route::Edit(payload.id.unwrap_or_default()).path()), Route::Edit(21));
}

#[test]
fn test_new_recipe_blocked_until_complete() {
    let mut draft = RecipeDraft::default();
    draft.title = "Tea".into();
    draft.description = "Hot water and leaves".into();
    draft.add_category("Quick & Easy");
    draft.set_ingredient_name(0, 0, "Water".into());
    draft.set_ingredient_amount(0, 0, "a cup".into());

    assert_eq!(draft.validate(), Err(DraftError::InvalidAmount("Water".into())));

    draft.set_ingredient_amount(0, 0, "250".into());
    draft.set_ingredient_unit(0, 0, Unit::Ml);
    assert_eq!(draft.validate(), Err(DraftError::MissingStep));

    draft.set_step_description(0, "Steep for three minutes".into());
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.id, None);
    assert_eq!(payload.portions, 1);
    assert_eq!(payload.categories, vec!["Quick & Easy"]);
}
