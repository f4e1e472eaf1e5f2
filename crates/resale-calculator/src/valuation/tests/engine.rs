use super::common::*;
use crate::valuation::{
    round_to_cents, Category, Condition, ValuationError, ValuationRequest, ValuationResult,
};

#[test]
fn electronics_in_good_condition_after_three_years() {
    let engine = standard_engine();
    let request = ValuationRequest::new(10000.0, 3, "Electronics", "good");

    let result = engine.valuate(&request).expect("valid request");

    assert_eq!(
        result,
        ValuationResult {
            resale_price: 4950.0,
            original_price: 10000.0,
            category: Category::Electronics,
            condition: Condition::Good,
            age: 3,
        }
    );
}

#[test]
fn zero_age_applies_only_the_condition_multiplier() {
    let engine = standard_engine();

    let result = engine
        .quote(800.0, 0, Category::Appliances, Condition::Decent)
        .expect("valid quote");

    assert_eq!(result.resale_price, 600.0);
}

#[test]
fn depreciation_saturates_at_the_category_cap() {
    let engine = standard_engine();

    let at_cap = engine
        .quote(1000.0, 6, Category::Electronics, Condition::New)
        .expect("valid quote");
    let far_beyond = engine
        .quote(1000.0, 60, Category::Electronics, Condition::New)
        .expect("valid quote");

    assert_eq!(at_cap.resale_price, 200.0);
    assert_eq!(far_beyond.resale_price, 200.0);
}

#[test]
fn negative_price_is_invalid() {
    let engine = standard_engine();
    let request = ValuationRequest::new(-5.0, 1, "Electronics", "good");

    assert_eq!(engine.valuate(&request), Err(ValuationError::InvalidPrice));
}

#[test]
fn zero_missing_and_non_finite_prices_are_invalid() {
    let engine = standard_engine();

    for price in [Some(0.0), None, Some(f64::NAN), Some(f64::INFINITY)] {
        let request = ValuationRequest {
            original_price: price,
            ..ValuationRequest::new(1.0, 1, "Electronics", "good")
        };
        assert_eq!(engine.valuate(&request), Err(ValuationError::InvalidPrice));
    }

    assert_eq!(
        engine.quote(0.0, 1, Category::Electronics, Condition::Good),
        Err(ValuationError::InvalidPrice)
    );
}

#[test]
fn negative_or_missing_age_is_invalid() {
    let engine = standard_engine();

    let request = ValuationRequest::new(100.0, -1, "Electronics", "good");
    assert_eq!(engine.valuate(&request), Err(ValuationError::InvalidAge));

    let request = ValuationRequest {
        age: None,
        ..ValuationRequest::new(100.0, 1, "Electronics", "good")
    };
    assert_eq!(engine.valuate(&request), Err(ValuationError::InvalidAge));
}

#[test]
fn unknown_labels_are_rejected() {
    let engine = standard_engine();

    let request = ValuationRequest::new(100.0, 1, "Spaceship", "good");
    assert_eq!(
        engine.valuate(&request),
        Err(ValuationError::UnknownCategory("Spaceship".to_string()))
    );

    let request = ValuationRequest::new(100.0, 1, "Electronics", "mint");
    assert_eq!(
        engine.valuate(&request),
        Err(ValuationError::UnknownCondition("mint".to_string()))
    );

    let request = ValuationRequest {
        category: None,
        ..ValuationRequest::new(100.0, 1, "Electronics", "good")
    };
    assert_eq!(
        engine.valuate(&request),
        Err(ValuationError::UnknownCategory(String::new()))
    );
}

#[test]
fn first_failure_wins() {
    let engine = standard_engine();

    let everything_wrong = ValuationRequest::new(-1.0, -1, "Spaceship", "mint");
    assert_eq!(
        engine.valuate(&everything_wrong),
        Err(ValuationError::InvalidPrice)
    );

    let age_onwards = ValuationRequest::new(10.0, -1, "Spaceship", "mint");
    assert_eq!(engine.valuate(&age_onwards), Err(ValuationError::InvalidAge));

    let labels_only = ValuationRequest::new(10.0, 1, "Spaceship", "mint");
    assert_eq!(
        engine.valuate(&labels_only),
        Err(ValuationError::UnknownCategory("Spaceship".to_string()))
    );
}

#[test]
fn variants_missing_from_an_injected_catalog_are_unknown() {
    let engine = narrow_engine();

    let request = ValuationRequest::new(100.0, 1, "Cycles", "good");
    assert_eq!(
        engine.valuate(&request),
        Err(ValuationError::UnknownCategory("Cycles".to_string()))
    );

    let request = ValuationRequest::new(100.0, 1, "Vehicles", "decent");
    assert_eq!(
        engine.valuate(&request),
        Err(ValuationError::UnknownCondition("decent".to_string()))
    );

    let result = engine
        .valuate(&ValuationRequest::new(100.0, 5, "Vehicles", "poor"))
        .expect("narrow catalog covers vehicles/poor");
    assert_eq!(result.resale_price, 25.0);
}

#[test]
fn sub_cent_prices_never_round_above_the_original() {
    let engine = standard_engine();

    let result = engine
        .quote(10.005, 0, Category::Cycles, Condition::New)
        .expect("valid quote");

    assert!(result.resale_price <= result.original_price);
    assert_eq!(result.resale_price, 10.0);
}

#[test]
fn huge_prices_still_follow_the_depreciation_formula() {
    let engine = standard_engine();

    for price in [1e305, 1e301, 1e20] {
        let result = engine
            .quote(price, 3, Category::Electronics, Condition::Good)
            .expect("finite positive price is valid");

        let expected = price * (1.0 - (0.15_f64 * 3.0).min(0.8)) * 0.9;
        assert_eq!(result.resale_price, expected, "price {price}");
        assert!(result.resale_price < result.original_price);
    }
}

#[test]
fn rounding_leaves_values_without_a_cent_fraction_untouched() {
    assert_eq!(round_to_cents(1e305), 1e305);
    assert_eq!(round_to_cents(f64::MAX), f64::MAX);
    assert_eq!(round_to_cents(1e14), 1e14);
    assert_eq!(round_to_cents(123_456_789.125), 123_456_789.13);
}

#[test]
fn rounding_is_half_up_and_hides_representation_noise() {
    assert_eq!(round_to_cents(4950.000000000001), 4950.0);
    assert_eq!(round_to_cents(0.125), 0.13);
    assert_eq!(round_to_cents(2.675), 2.68);
    assert_eq!(round_to_cents(1.004), 1.0);
    assert_eq!(round_to_cents(0.0), 0.0);
}

#[test]
fn error_codes_name_the_failing_field() {
    assert_eq!(ValuationError::InvalidPrice.code(), "InvalidPrice");
    assert_eq!(ValuationError::InvalidAge.field(), "age");
    assert_eq!(
        ValuationError::UnknownCategory("x".to_string()).code(),
        "UnknownCategory"
    );
    assert_eq!(
        ValuationError::UnknownCondition("x".to_string()).field(),
        "condition"
    );
}
