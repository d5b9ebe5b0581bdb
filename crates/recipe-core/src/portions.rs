//! Portion Calculator
//!
//! State behind the recipe page's editable portion count and ingredient
//! amounts. Editing the portion count rescales every ingredient; editing a
//! single amount infers the portion count from it and rescales the others.
//! While any field holds an invalid value every amount reads as 0.

use crate::model::Recipe;
use crate::scaling::{format_amount, scale_amount, InputWarning, NumericField, NumericInput};

#[derive(Debug, Clone, PartialEq)]
struct AmountSlot {
    base: f64,
    /// Raw text typed into this amount field
    input: Option<String>,
    /// Explicit amount set by inverse scaling
    pinned: Option<f64>,
    warning: Option<InputWarning>,
}

impl AmountSlot {
    fn new(base: f64) -> Self {
        Self { base, input: None, pinned: None, warning: None }
    }

    fn clear(&mut self) {
        self.input = None;
        self.pinned = None;
        self.warning = None;
    }
}

/// Portion count and per-ingredient amounts of one recipe view.
/// Ingredients are identified by their index in the recipe's flat list.
#[derive(Debug, Clone, PartialEq)]
pub struct PortionCalculator {
    base_portions: f64,
    effective_portions: f64,
    portions_input: String,
    portions_warning: Option<InputWarning>,
    slots: Vec<AmountSlot>,
}

impl PortionCalculator {
    pub fn new(recipe: &Recipe) -> Self {
        Self::from_parts(recipe.portions, recipe.ingredients.iter().map(|i| i.amount))
    }

    pub fn from_parts(base_portions: u32, base_amounts: impl IntoIterator<Item = f64>) -> Self {
        let base = f64::from(base_portions.max(1));
        Self {
            base_portions: base,
            effective_portions: base,
            portions_input: format_amount(base),
            portions_warning: None,
            slots: base_amounts.into_iter().map(AmountSlot::new).collect(),
        }
    }

    /// Last valid portion count
    pub fn effective_portions(&self) -> f64 {
        self.effective_portions
    }

    pub fn ingredient_count(&self) -> usize {
        self.slots.len()
    }

    /// Handle an edit of the portion field
    pub fn set_portions_input(&mut self, input: &str) {
        self.portions_input = input.to_string();

        match NumericInput::parse(input, NumericField::Portions) {
            NumericInput::Pending => self.portions_warning = None,
            NumericInput::Invalid(warning) => self.portions_warning = Some(warning),
            NumericInput::Valid(portions) => {
                log::debug!("portions set to {portions}");
                self.portions_warning = None;
                self.effective_portions = portions;
                self.slots.iter_mut().for_each(AmountSlot::clear);
            }
        }
    }

    /// Handle an edit of one ingredient's amount field
    pub fn set_amount_input(&mut self, index: usize, input: &str) {
        let Some(slot) = self.slots.get_mut(index) else {
            log::warn!("amount edit for unknown ingredient {index}");
            return;
        };
        slot.input = Some(input.to_string());

        let amount = match NumericInput::parse(input, NumericField::Amount) {
            NumericInput::Pending => {
                slot.warning = None;
                return;
            }
            NumericInput::Invalid(warning) => {
                slot.warning = Some(warning);
                return;
            }
            NumericInput::Valid(amount) => amount,
        };

        slot.warning = None;
        slot.pinned = Some(amount);

        // Nothing to infer the portion count from
        if slot.base <= 0.0 {
            return;
        }

        let portions = amount / slot.base * self.base_portions;
        log::debug!("ingredient {index} set to {amount}, inferred {portions} portions");

        self.effective_portions = portions;
        self.portions_input = format_amount(portions);
        self.portions_warning = None;

        let base_portions = self.base_portions;
        for (i, other) in self.slots.iter_mut().enumerate() {
            if i == index {
                continue;
            }
            other.input = None;
            other.warning = None;
            other.pinned = Some(scale_amount(other.base, base_portions, portions));
        }
    }

    /// Back to the recipe's own portion count
    pub fn reset(&mut self) {
        self.effective_portions = self.base_portions;
        self.portions_input = format_amount(self.base_portions);
        self.portions_warning = None;
        self.slots.iter_mut().for_each(AmountSlot::clear);
    }

    /// True while any field holds a warning
    pub fn is_invalid(&self) -> bool {
        self.portions_warning.is_some() || self.slots.iter().any(|slot| slot.warning.is_some())
    }

    pub fn portions_warning(&self) -> Option<InputWarning> {
        self.portions_warning
    }

    pub fn amount_warning(&self, index: usize) -> Option<InputWarning> {
        self.slots.get(index).and_then(|slot| slot.warning)
    }

    /// Amount to show for an ingredient
    pub fn displayed_amount(&self, index: usize) -> f64 {
        let Some(slot) = self.slots.get(index) else {
            return 0.0;
        };
        if self.is_invalid() {
            return 0.0;
        }
        slot.pinned
            .unwrap_or_else(|| scale_amount(slot.base, self.base_portions, self.effective_portions))
    }

    /// Text of an ingredient's amount field
    pub fn amount_text(&self, index: usize) -> String {
        if let Some(slot) = self.slots.get(index) {
            if let Some(input) = &slot.input {
                if slot.warning.is_some() || !self.is_invalid() {
                    return input.clone();
                }
            }
        }
        format_amount(self.displayed_amount(index))
    }

    /// Text of the portion field
    pub fn portions_text(&self) -> String {
        if self.portions_warning.is_some() || !self.is_invalid() {
            self.portions_input.clone()
        } else {
            "0".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> PortionCalculator {
        // portions=4: flour 100, sugar 20
        PortionCalculator::from_parts(4, [100.0, 20.0])
    }

    #[test]
    fn test_initial_state() {
        let calc = calculator();

        assert_eq!(calc.portions_text(), "4");
        assert_eq!(calc.displayed_amount(0), 100.0);
        assert_eq!(calc.amount_text(1), "20");
        assert!(!calc.is_invalid());
    }

    #[test]
    fn test_set_portions_rescales() {
        let mut calc = calculator();
        calc.set_portions_input("2");

        assert_eq!(calc.displayed_amount(0), 50.0);
        assert_eq!(calc.displayed_amount(1), 10.0);
        assert_eq!(calc.effective_portions(), 2.0);
    }

    #[test]
    fn test_pending_portions_keeps_last_values() {
        let mut calc = calculator();
        calc.set_portions_input("2");
        calc.set_portions_input("2.");

        assert_eq!(calc.portions_warning(), None);
        assert_eq!(calc.portions_text(), "2.");
        assert_eq!(calc.displayed_amount(0), 50.0);

        calc.set_portions_input("");
        assert_eq!(calc.portions_warning(), None);
        assert_eq!(calc.displayed_amount(0), 50.0);
    }

    #[test]
    fn test_negative_portions_zeroes_everything() {
        let mut calc = calculator();
        calc.set_portions_input("-5");

        assert_eq!(calc.portions_warning(), Some(InputWarning::PortionsNotPositive));
        assert_eq!(calc.displayed_amount(0), 0.0);
        assert_eq!(calc.displayed_amount(1), 0.0);
        assert_eq!(calc.portions_text(), "-5");
    }

    #[test]
    fn test_non_numeric_portions() {
        let mut calc = calculator();
        calc.set_portions_input("abc");

        assert_eq!(calc.portions_warning(), Some(InputWarning::NotANumber));
        assert_eq!(calc.amount_text(0), "0");

        calc.set_portions_input("8");
        assert_eq!(calc.portions_warning(), None);
        assert_eq!(calc.displayed_amount(0), 200.0);
    }

    #[test]
    fn test_amount_edit_infers_portions() {
        let mut calc = calculator();
        calc.set_amount_input(0, "50");

        assert_eq!(calc.effective_portions(), 2.0);
        assert_eq!(calc.portions_text(), "2");
        assert_eq!(calc.displayed_amount(0), 50.0);
        assert_eq!(calc.displayed_amount(1), 10.0);
    }

    #[test]
    fn test_amount_edit_keeps_typed_text() {
        let mut calc = calculator();
        calc.set_amount_input(0, "33.333");

        assert_eq!(calc.amount_text(0), "33.333");
        assert_eq!(calc.displayed_amount(0), 33.333);
        assert_eq!(calc.displayed_amount(1), 6.7);
    }

    #[test]
    fn test_invalid_amount_zeroes_others_and_portions() {
        let mut calc = calculator();
        calc.set_amount_input(1, "0");

        assert_eq!(calc.amount_warning(1), Some(InputWarning::AmountNotPositive));
        assert_eq!(calc.amount_text(1), "0");
        assert_eq!(calc.amount_text(0), "0");
        assert_eq!(calc.portions_text(), "0");

        calc.set_amount_input(1, "x");
        assert_eq!(calc.amount_warning(1), Some(InputWarning::NotANumber));
        assert_eq!(calc.amount_text(1), "x");
    }

    #[test]
    fn test_portions_edit_clears_overrides() {
        let mut calc = calculator();
        calc.set_amount_input(0, "50");
        calc.set_amount_input(1, "bad");
        calc.set_portions_input("8");

        assert!(!calc.is_invalid());
        assert_eq!(calc.amount_warning(1), None);
        assert_eq!(calc.displayed_amount(0), 200.0);
        assert_eq!(calc.displayed_amount(1), 40.0);
        assert_eq!(calc.amount_text(1), "40");
    }

    #[test]
    fn test_zero_base_amount_is_pinned_only() {
        let mut calc = PortionCalculator::from_parts(2, [0.0, 10.0]);
        calc.set_amount_input(0, "5");

        assert_eq!(calc.effective_portions(), 2.0);
        assert_eq!(calc.displayed_amount(0), 5.0);
        assert_eq!(calc.displayed_amount(1), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut calc = calculator();
        calc.set_amount_input(0, "-1");
        calc.reset();

        assert!(!calc.is_invalid());
        assert_eq!(calc.portions_text(), "4");
        assert_eq!(calc.displayed_amount(0), 100.0);
    }

    #[test]
    fn test_unknown_index() {
        let mut calc = calculator();
        calc.set_amount_input(9, "5");

        assert_eq!(calc.displayed_amount(9), 0.0);
        assert_eq!(calc.effective_portions(), 4.0);
    }
}
