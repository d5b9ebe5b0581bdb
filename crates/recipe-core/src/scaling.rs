//! Portion Scaling
//!
//! Linear recalculation of ingredient amounts for a target portion count,
//! plus parsing of the free-text numeric inputs that drive it.

use thiserror::Error;

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Amount for `target_portions` given the recipe's base amount and portions
pub fn scale_amount(base_amount: f64, base_portions: f64, target_portions: f64) -> f64 {
    round_to_tenth(base_amount * (target_portions / base_portions))
}

/// Scaling factor for a raw portion input; 1 when the input is not a number
pub fn scale_factor(target_input: &str, base_portions: u32) -> f64 {
    match target_input.trim().parse::<f64>() {
        Ok(target) if target.is_finite() && base_portions > 0 => target / f64::from(base_portions),
        _ => 1.0,
    }
}

/// Displayed amount for a raw (possibly invalid) portion input
pub fn display_amount(base_amount: f64, base_portions: u32, target_input: &str) -> f64 {
    round_to_tenth(base_amount * scale_factor(target_input, base_portions))
}

/// Render an amount with at most one decimal ("50", "12.5")
pub fn format_amount(value: f64) -> String {
    let rounded = round_to_tenth(value);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Inline warning for a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputWarning {
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Portions must be greater than 0")]
    PortionsNotPositive,
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
}

/// Which field a numeric input belongs to (selects the warning text)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Portions,
    Amount,
}

/// Result of parsing a portion or amount field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput {
    /// Empty, "." or a trailing "." - the user is still typing
    Pending,
    Invalid(InputWarning),
    Valid(f64),
}

impl NumericInput {
    pub fn parse(input: &str, field: NumericField) -> Self {
        let text = input.trim();
        if text.is_empty() || text.ends_with('.') {
            return NumericInput::Pending;
        }

        match text.parse::<f64>() {
            Ok(value) if !value.is_finite() => NumericInput::Invalid(InputWarning::NotANumber),
            Ok(value) if value <= 0.0 => NumericInput::Invalid(match field {
                NumericField::Portions => InputWarning::PortionsNotPositive,
                NumericField::Amount => InputWarning::AmountNotPositive,
            }),
            Ok(value) => NumericInput::Valid(value),
            Err(_) => NumericInput::Invalid(InputWarning::NotANumber),
        }
    }
}
