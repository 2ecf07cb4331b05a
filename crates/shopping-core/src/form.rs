//! Input form — name/quantity fields, focus, and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an Add attempt was rejected. The display text is what the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Both name and quantity must be filled!")]
    MissingField,
    #[error("Quantity must be a number!")]
    NonNumericQuantity,
}

/// Which text field has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[default]
    Name,
    Quantity,
}

impl Field {
    /// Target of the "next" input action: Name and Quantity hand focus to
    /// each other.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Quantity,
            Field::Quantity => Field::Name,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter item name",
            Field::Quantity => "Enter quantity",
        }
    }
}

/// Check a name/quantity pair. Emptiness is checked before the digit rule.
pub fn validate(name: &str, quantity: &str) -> Result<(), ValidationError> {
    if name.is_empty() || quantity.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !quantity.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonNumericQuantity);
    }
    Ok(())
}

/// Form state. `error_message` is empty when there is no error and only
/// changes on an Add attempt, never on editing.
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    pub name: String,
    pub quantity: String,
    pub error_message: String,
    pub focus: Field,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Quantity => &self.quantity,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Quantity => &mut self.quantity,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    /// Type a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    /// Delete the last character of the focused field.
    pub fn pop_char(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.name, &self.quantity)
    }

    pub(crate) fn fail(&mut self, err: ValidationError) {
        self.error_message = err.to_string();
    }

    /// Clear both fields and the error, and focus the name field.
    pub(crate) fn reset(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.error_message.clear();
        self.focus = Field::Name;
    }
}
