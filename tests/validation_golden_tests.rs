use hodge_rs::prelude::*;
use num_bigint::BigInt;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct GoldenFile {
    cases: Vec<GoldenCase>,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    dimension: usize,
    degree: usize,
    chi_genera: Vec<i64>,
    padded: bool,
    euler_characteristic: i64,
    square: Vec<Vec<i64>>,
}

fn load_cases() -> Vec<GoldenCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/golden_squares.json");
    let file = fs::File::open(&path).expect("golden fixture should exist");
    let golden: GoldenFile = serde_json::from_reader(file).expect("golden fixture should parse");
    golden.cases
}

#[test]
fn test_golden_squares() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in &cases {
        let report = Hypersurface::new()
            .dimension(case.dimension)
            .degree(case.degree)
            .build()
            .unwrap()
            .compute()
            .unwrap();
        let label = format!("HS({}, {})", case.dimension, case.degree);

        assert_eq!(report.square.to_i64_rows().as_ref(), Some(&case.square), "{}", label);
        assert_eq!(
            report.chi_genera,
            case.chi_genera.iter().map(|&v| BigInt::from(v)).collect::<Vec<_>>(),
            "{}",
            label
        );
        assert_eq!(report.padded, case.padded, "{}", label);
        assert_eq!(
            report.euler_characteristic,
            BigInt::from(case.euler_characteristic),
            "{}",
            label
        );
    }
}

#[test]
fn test_golden_squares_one_shot() {
    for case in load_cases() {
        let square = hodge_square(case.dimension, case.degree).unwrap();
        assert_eq!(square.to_i64_rows(), Some(case.square));
    }
}
