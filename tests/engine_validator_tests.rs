#![cfg(feature = "dev")]

use hodge_rs::internals::engine::validator::{MAX_DEGREE, MAX_DIMENSION, Validator};
use hodge_rs::internals::primitives::errors::HodgeError;

#[test]
fn test_validate_degree() {
    assert!(Validator::validate_degree(1).is_ok());
    assert!(Validator::validate_degree(MAX_DEGREE).is_ok());

    assert_eq!(
        Validator::validate_degree(0),
        Err(HodgeError::InvalidDegree {
            got: 0,
            max: MAX_DEGREE
        })
    );
    assert!(matches!(
        Validator::validate_degree(MAX_DEGREE + 1),
        Err(HodgeError::InvalidDegree { .. })
    ));
}

#[test]
fn test_validate_dimension() {
    assert!(Validator::validate_dimension(0).is_ok());
    assert!(Validator::validate_dimension(MAX_DIMENSION).is_ok());
    assert_eq!(
        Validator::validate_dimension(MAX_DIMENSION + 1),
        Err(HodgeError::InvalidDimension {
            got: MAX_DIMENSION + 1,
            max: MAX_DIMENSION
        })
    );
}

#[test]
fn test_validate_required() {
    assert_eq!(Validator::validate_required(Some(3), "degree"), Ok(3));
    assert_eq!(
        Validator::validate_required(None::<usize>, "degree"),
        Err(HodgeError::MissingParameter {
            parameter: "degree"
        })
    );
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("dimension")),
        Err(HodgeError::DuplicateParameter {
            parameter: "dimension"
        })
    );
}
