use crown_diamonds_server::document::validation::{
    validate_items, validate_non_negative, validate_payment_terms, validate_positive,
    validate_required, ValidationError, ValidationErrors,
};
use crown_diamonds_server::document::LineItem;
use rust_decimal_macros::dec;

fn good_item() -> LineItem {
    LineItem {
        description: "Princess Cut".to_string(),
        carat: dec!(0.72),
        color: "G".to_string(),
        clarity: "VS2".to_string(),
        lab: "IGI".to_string(),
        report_no: "558123456".to_string(),
        price_per_carat: dec!(2100.00),
    }
}

#[test]
fn test_validate_required_empty() {
    let mut errors = ValidationErrors::new();
    validate_required("", "description", "Item description", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_report().contains("Item description must not be empty"));
}

#[test]
fn test_validate_required_valid() {
    let mut errors = ValidationErrors::new();
    validate_required("Round Brilliant Cut", "description", "Item description", &mut errors);
    assert!(errors.is_empty());
}

#[test]
fn test_validate_positive_rejects_zero() {
    let mut errors = ValidationErrors::new();
    validate_positive(dec!(0), "carat", "Carat", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_report().contains("Carat must be greater than zero"));
}

#[test]
fn test_validate_non_negative_allows_zero() {
    let mut errors = ValidationErrors::new();
    validate_non_negative(dec!(0), "discount", "Discount", &mut errors);
    assert!(errors.is_empty());

    validate_non_negative(dec!(-1), "discount", "Discount", &mut errors);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_validate_payment_terms() {
    let mut errors = ValidationErrors::new();
    validate_payment_terms(0, "payment_terms_days", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_report().contains("at least 1 day"));
}

#[test]
fn test_empty_item_list_is_rejected() {
    let mut errors = ValidationErrors::new();
    validate_items(&[], &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_report().contains("at least one line item"));
}

#[test]
fn test_item_fields_are_checked() {
    let mut bad = good_item();
    bad.carat = dec!(-0.5);
    bad.report_no = String::new();

    let mut errors = ValidationErrors::new();
    validate_items(&[good_item(), bad], &mut errors);
    assert_eq!(errors.len(), 2);

    let report = errors.to_report();
    assert!(report.contains("items[1].carat"));
    assert!(report.contains("items[1].report_no"));
}

#[test]
fn test_report_lists_every_error() {
    let mut errors = ValidationErrors::new();
    errors.add(ValidationError::empty_field("description", "Item description"));
    errors.add(ValidationError::not_positive("carat", "Carat"));

    let report = errors.to_report();
    assert!(report.contains("2 error(s)"));
    assert!(report.contains("1. "));
    assert!(report.contains("2. "));
    assert!(report.contains("Correct the fields above"));
}

#[test]
fn test_into_result() {
    assert!(ValidationErrors::new().into_result().is_ok());

    let mut errors = ValidationErrors::new();
    errors.add(ValidationError::not_positive("carat", "Carat"));
    assert!(errors.into_result().is_err());
}
