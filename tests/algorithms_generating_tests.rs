#![cfg(feature = "dev")]

use hodge_rs::internals::algorithms::genera::{extract_chi_y, simplify_chi_y, truncation_order};
use hodge_rs::internals::algorithms::generating::{
    HYPERSURFACE_CODIMENSION, hypersurface_generating_function,
};
use hodge_rs::internals::math::polynomial::Polynomial;
use hodge_rs::internals::primitives::indeterminate::Indeterminate::{Y, Z};

#[test]
fn test_generating_function_display() {
    let rhs = hypersurface_generating_function(4);
    assert_eq!(
        rhs.to_string(),
        "1/((1 - z)*(1 + y*z))*((1 + y*z)**4 - (1 - z)**4)/((1 + y*z)**4 + y*(1 - z)**4)"
    );
}

#[test]
fn test_truncation_order() {
    assert_eq!(HYPERSURFACE_CODIMENSION, 1);
    assert_eq!(truncation_order(0), 2);
    assert_eq!(truncation_order(3), 5);
}

#[test]
fn test_series_starts_with_degree() {
    // The z^1 coefficient is chi_y of d points, which is the constant d
    for d in 1..=6u32 {
        let rhs = hypersurface_generating_function(d);
        let series = rhs.series(Z, 2).unwrap();
        let c1 = series.coefficient(1).unwrap().to_polynomial().unwrap();
        assert_eq!(c1, Polynomial::constant(Y, d), "degree {}", d);
    }
}

#[test]
fn test_linear_hypersurface_is_projective_space() {
    // A hyperplane in P^(n+1) is P^n: chi_y = 1 - y + y^2 - ... + (-y)^n
    let rhs = hypersurface_generating_function(1);
    for n in 0..=4usize {
        let chi_y = simplify_chi_y(&extract_chi_y(&rhs, n).unwrap()).unwrap();
        let expected: Vec<i64> = (0..=n).map(|p| if p % 2 == 0 { 1 } else { -1 }).collect();
        assert_eq!(chi_y, Polynomial::from_i64s(Y, &expected), "n = {}", n);
    }
}

#[test]
fn test_plane_quartic_chi_y() {
    let rhs = hypersurface_generating_function(4);
    let raw = extract_chi_y(&rhs, 1).unwrap();
    let simplified = simplify_chi_y(&raw).unwrap();
    assert_eq!(simplified, Polynomial::from_i64s(Y, &[-2, 2]));
    assert_eq!(simplified.to_string(), "2*y - 2");
}

#[test]
fn test_plane_cubic_chi_y_vanishes() {
    let rhs = hypersurface_generating_function(3);
    let raw = extract_chi_y(&rhs, 1).unwrap();
    assert!(raw.is_zero());

    let simplified = simplify_chi_y(&raw).unwrap();
    assert!(simplified.is_zero());
    assert_eq!(simplified.var(), Y);
}

#[test]
fn test_k3_chi_y() {
    let rhs = hypersurface_generating_function(4);
    let chi_y = simplify_chi_y(&extract_chi_y(&rhs, 2).unwrap()).unwrap();
    assert_eq!(chi_y.to_string(), "2*y**2 - 20*y + 2");
}
