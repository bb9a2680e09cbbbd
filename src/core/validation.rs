//! Explicit model validation.
//!
//! Form submissions are checked with `validator` derives and the outcome is
//! carried as a [`ModelState`]: a flat list of field errors that the view
//! controller inspects before calling `create` or `update`.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

/// One failed constraint on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation outcome for a bound model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelState {
    errors: Vec<FieldError>,
}

impl ModelState {
    /// Run the model's field constraints and collect every failure.
    pub fn validate<M: Validate>(model: &M) -> Self {
        match model.validate() {
            Ok(()) => Self::default(),
            Err(errors) => Self::from(errors),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error that did not come from the model's own constraints
    /// (binding failures, cross-field checks).
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors attached to a single field
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl From<ValidationErrors> for ModelState {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                let field = field.to_string();
                failures.iter().map(move |failure| {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", field, failure.code));
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();

        // field_errors() is backed by a HashMap
        collected.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));

        Self { errors: collected }
    }
}
