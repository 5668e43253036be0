#![cfg(feature = "dev")]

use hodge_rs::internals::math::polynomial::Polynomial;
use hodge_rs::internals::math::rational::RationalFunction;
use hodge_rs::internals::primitives::errors::HodgeError;
use hodge_rs::internals::primitives::indeterminate::Indeterminate::Y;

fn poly(coeffs: &[i64]) -> Polynomial {
    Polynomial::from_i64s(Y, coeffs)
}

fn frac(num: &[i64], den: &[i64]) -> RationalFunction {
    RationalFunction::new(poly(num), poly(den)).unwrap()
}

#[test]
fn test_zero_denominator_rejected() {
    let err = RationalFunction::new(poly(&[1]), Polynomial::zero(Y)).unwrap_err();
    assert_eq!(err, HodgeError::DivisionByZero);

    assert_eq!(
        RationalFunction::zero(Y).inv().unwrap_err(),
        HodgeError::DivisionByZero
    );
}

#[test]
fn test_addition_reuses_divisible_denominator() {
    // 1/(y + 1) + 1/(y + 1)^2 = (y + 2)/(y + 1)^2
    let a = frac(&[1], &[1, 1]);
    let b = frac(&[1], &[1, 2, 1]);
    let sum = &a + &b;
    assert_eq!(sum.denominator(), &poly(&[1, 2, 1]));
    assert_eq!(sum.numerator(), &poly(&[2, 1]));
}

#[test]
fn test_addition_cross_multiplies_coprime_denominators() {
    // 1/(y + 1) + 1/(y - 1) = 2y/(y^2 - 1)
    let sum = &frac(&[1], &[1, 1]) + &frac(&[1], &[-1, 1]);
    let s = sum.simplify().unwrap();
    assert_eq!(s.numerator(), &poly(&[0, 2]));
    assert_eq!(s.denominator(), &poly(&[-1, 0, 1]));
}

#[test]
fn test_simplify_cancels_common_factor() {
    // (2y^2 - 2)/(y + 1) = 2y - 2
    let f = frac(&[-2, 0, 2], &[1, 1]);
    let s = f.simplify().unwrap();
    assert_eq!(s.numerator(), &poly(&[-2, 2]));
    assert!(s.denominator().is_one());
}

#[test]
fn test_simplify_cancels_integer_content() {
    // (2y^2 - 2)/(4y + 4) = (y - 1)/2
    let s = frac(&[-2, 0, 2], &[4, 4]).simplify().unwrap();
    assert_eq!(s.numerator(), &poly(&[-1, 1]));
    assert_eq!(s.denominator(), &poly(&[2]));

    // Already reduced fractions come back unchanged
    let reduced = frac(&[1, 1], &[3, 0, 1]);
    assert_eq!(reduced.simplify(), Ok(reduced.clone()));
}

#[test]
fn test_simplify_normalises_sign() {
    let s = frac(&[1], &[-1, -1]).simplify().unwrap();
    assert_eq!(s.numerator(), &poly(&[-1]));
    assert_eq!(s.denominator(), &poly(&[1, 1]));

    let zero = frac(&[0], &[3, 5]).simplify().unwrap();
    assert!(zero.is_zero());
    assert!(zero.denominator().is_one());
}

#[test]
fn test_to_polynomial() {
    let p = frac(&[-2, 0, 2], &[1, 1]).to_polynomial().unwrap();
    assert_eq!(p, poly(&[-2, 2]));

    // Constant denominators divide out
    let p = frac(&[4, -6], &[-2]).to_polynomial().unwrap();
    assert_eq!(p, poly(&[-2, 3]));

    // Zero converts to the zero polynomial in y
    let p = RationalFunction::zero(Y).to_polynomial().unwrap();
    assert!(p.is_zero());
    assert_eq!(p.var(), Y);
}

#[test]
fn test_to_polynomial_rejects_true_fractions() {
    let err = frac(&[1], &[1, 1]).to_polynomial().unwrap_err();
    assert_eq!(
        err,
        HodgeError::NotAPolynomial {
            expression: "1/(y + 1)".to_string()
        }
    );

    // Non-integral coefficients
    let err = frac(&[1, 1], &[2]).to_polynomial().unwrap_err();
    assert!(matches!(err, HodgeError::NotAPolynomial { .. }));
}

#[test]
fn test_multiplication_and_division() {
    let a = frac(&[1, 1], &[2]);
    let b = frac(&[2], &[1, 1]);
    assert!((&a * &b).to_polynomial().unwrap().is_one());
    assert!(a.checked_div(&a).unwrap().to_polynomial().unwrap().is_one());
    assert!(a.checked_div(&RationalFunction::zero(Y)).is_err());
}

#[test]
fn test_subtraction_to_zero() {
    let a = frac(&[3, 1], &[1, 1]);
    assert!((&a - &a).is_zero());
}

#[test]
fn test_display() {
    assert_eq!(frac(&[-2, 0, 2], &[1, 1]).to_string(), "(2*y**2 - 2)/(y + 1)");
    assert_eq!(frac(&[0, 3], &[2]).to_string(), "3*y/2");
    assert_eq!(frac(&[1], &[-2]).to_string(), "1/(-2)");
    assert_eq!(RationalFunction::constant(Y, 5).to_string(), "5");
    assert_eq!(RationalFunction::zero(Y).to_string(), "0");
}
