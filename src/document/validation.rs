//! Input validation for document requests.
//!
//! Validation runs before any rendering or storage and produces descriptive
//! errors naming the offending field, so API clients can surface them
//! directly on the form that sent the request.

use std::fmt;

use rust_decimal::Decimal;

use super::models::{CreateDocumentRequest, LineItem, UpdateDocumentRequest};

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), String>;
}

/// Validation error with a field path and a user-facing message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for an empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} must not be empty"))
            .with_suggestion(format!("Provide a value for {}", label.to_lowercase()))
    }

    /// Create error for a value that must be strictly positive
    pub fn not_positive(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} must be greater than zero"))
    }

    /// Create error for a value that must not be negative
    pub fn negative(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} must not be negative"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Formatted report listing every failure.
    pub fn to_report(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validation failed: {} error(s) found\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.push(String::new());
        parts.push("Correct the fields above and resubmit.".to_string());

        parts.join("\n")
    }

    /// Convert to Result - Ok if no errors, Err with the formatted report.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_report())
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate that a decimal is strictly positive
pub fn validate_positive(value: Decimal, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value <= Decimal::ZERO {
        errors.add(ValidationError::not_positive(field, label));
    }
}

/// Validate that a decimal is zero or greater
pub fn validate_non_negative(
    value: Decimal,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) {
    if value < Decimal::ZERO {
        errors.add(ValidationError::negative(field, label));
    }
}

/// Validate payment terms (at least one day)
pub fn validate_payment_terms(days: i64, field: &str, errors: &mut ValidationErrors) {
    if days < 1 {
        errors.add(
            ValidationError::new(field, "Payment terms must be at least 1 day")
                .with_suggestion("Common terms are 7, 30 or 60 days"),
        );
    }
}

/// Validate the line-item list: at least one item, each with a description,
/// a report number, positive carat and positive price per carat.
pub fn validate_items(items: &[LineItem], errors: &mut ValidationErrors) {
    if items.is_empty() {
        errors.add(
            ValidationError::new("items", "A document must contain at least one line item")
                .with_suggestion("Add the stones being billed before submitting"),
        );
        return;
    }

    for (i, item) in items.iter().enumerate() {
        validate_required(
            &item.description,
            &format!("items[{i}].description"),
            "Item description",
            errors,
        );
        validate_required(
            &item.report_no,
            &format!("items[{i}].report_no"),
            "Report number",
            errors,
        );
        validate_positive(item.carat, &format!("items[{i}].carat"), "Carat", errors);
        validate_positive(
            item.price_per_carat,
            &format!("items[{i}].price_per_carat"),
            "Price per carat",
            errors,
        );
    }
}

impl Validator for CreateDocumentRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        if let Some(days) = self.payment_terms_days {
            validate_payment_terms(days, "payment_terms_days", &mut errors);
        }
        if let Some(value) = self.shipment_cost {
            validate_non_negative(value, "shipment_cost", "Shipment cost", &mut errors);
        }
        if let Some(value) = self.discount {
            validate_non_negative(value, "discount", "Discount", &mut errors);
        }
        if let Some(value) = self.collected_payment {
            validate_non_negative(value, "collected_payment", "Collected payment", &mut errors);
        }
        validate_items(&self.items, &mut errors);

        errors.into_result()
    }
}

impl Validator for UpdateDocumentRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        if let Some(days) = self.payment_terms_days {
            validate_payment_terms(days, "payment_terms_days", &mut errors);
        }
        if let Some(value) = self.shipment_cost {
            validate_non_negative(value, "shipment_cost", "Shipment cost", &mut errors);
        }
        if let Some(value) = self.discount {
            validate_non_negative(value, "discount", "Discount", &mut errors);
        }
        if let Some(value) = self.collected_payment {
            validate_non_negative(value, "collected_payment", "Collected payment", &mut errors);
        }
        if let Some(ref items) = self.items {
            validate_items(items, &mut errors);
        }

        errors.into_result()
    }
}
