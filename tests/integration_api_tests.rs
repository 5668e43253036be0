use hodge_rs::prelude::*;
use num_bigint::BigInt;

#[test]
fn test_builder_computes_k3() {
    let report = Hypersurface::new()
        .dimension(2)
        .degree(4)
        .build()
        .unwrap()
        .compute()
        .unwrap();

    assert_eq!(report.dimension, 2);
    assert_eq!(report.degree, 4);
    assert_eq!(report.width(), 3);
    assert_eq!(report.parity, SquareParity::Odd);
    assert!(!report.padded);
    assert_eq!(report.chi_y_simplified.to_string(), "2*y**2 - 20*y + 2");
    assert_eq!(report.hodge_number(1, 1), Some(&BigInt::from(20)));
    assert_eq!(report.hodge_number(2, 0), Some(&BigInt::from(1)));
    assert_eq!(report.hodge_number(1, 0), Some(&BigInt::from(0)));
    assert_eq!(report.hodge_number(3, 0), None);
    assert_eq!(report.euler_characteristic, BigInt::from(24));
}

#[test]
fn test_plane_quartic_is_genus_three() {
    let report = Hypersurface::new()
        .preset(PlaneQuartic)
        .build()
        .unwrap()
        .compute()
        .unwrap();

    assert_eq!(
        report.square.to_i64_rows(),
        Some(vec![vec![3, 1], vec![1, 3]])
    );
    assert_eq!(report.hodge_number(1, 0), Some(&BigInt::from(3)));
    assert_eq!(report.hodge_number(0, 1), Some(&BigInt::from(3)));
    assert_eq!(report.euler_characteristic, BigInt::from(-4));
}

#[test]
fn test_elliptic_curve_pads_zero_chi_y() {
    let report = Hypersurface::new()
        .dimension(1)
        .degree(3)
        .build()
        .unwrap()
        .compute()
        .unwrap();

    assert!(report.chi_y.is_zero());
    assert!(report.chi_y_simplified.is_zero());
    assert!(report.padded);
    assert_eq!(report.chi_genera, vec![BigInt::from(0), BigInt::from(0)]);
    assert_eq!(
        report.square.to_i64_rows(),
        Some(vec![vec![1, 1], vec![1, 1]])
    );
}

#[test]
fn test_quintic_threefold() {
    let report = Hypersurface::new()
        .preset(QuinticThreefold)
        .build()
        .unwrap()
        .compute()
        .unwrap();

    assert!(report.padded);
    assert_eq!(report.parity, SquareParity::Even);
    assert_eq!(report.hodge_number(2, 1), Some(&BigInt::from(101)));
    assert_eq!(report.hodge_number(3, 0), Some(&BigInt::from(1)));
    assert_eq!(report.euler_characteristic, BigInt::from(-200));
    assert_eq!(
        report.square.to_i64_rows(),
        Some(vec![
            vec![1, 0, 0, 1],
            vec![0, 101, 1, 0],
            vec![0, 1, 101, 0],
            vec![1, 0, 0, 1],
        ])
    );
}

#[test]
fn test_points_in_dimension_zero() {
    for d in 1..=5usize {
        let square = hodge_square(0, d).unwrap();
        assert_eq!(square.to_i64_rows(), Some(vec![vec![d as i64]]));
    }
}

#[test]
fn test_hyperplanes_are_projective_spaces() {
    // h^{p,p} = 1 and nothing else
    for n in 1..=5usize {
        let report = Hypersurface::new()
            .dimension(n)
            .degree(1)
            .build()
            .unwrap()
            .compute()
            .unwrap();
        for p in 0..=n {
            for q in 0..=n {
                let expected = BigInt::from(if p == q { 1 } else { 0 });
                assert_eq!(report.hodge_number(p, q), Some(&expected), "P^{}", n);
            }
        }
        assert_eq!(report.euler_characteristic, BigInt::from(n + 1));
    }
}

#[test]
fn test_repeated_invocation_is_deterministic() {
    let calculator = Hypersurface::new().preset(K3).build().unwrap();
    let first = calculator.compute().unwrap();
    let second = calculator.compute().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_builder_errors() {
    assert_eq!(
        Hypersurface::new().degree(4).build().unwrap_err(),
        HodgeError::MissingParameter {
            parameter: "dimension"
        }
    );
    assert_eq!(
        Hypersurface::new().dimension(2).build().unwrap_err(),
        HodgeError::MissingParameter {
            parameter: "degree"
        }
    );
    assert_eq!(
        Hypersurface::new().dimension(2).degree(0).build().unwrap_err(),
        HodgeError::InvalidDegree {
            got: 0,
            max: MAX_DEGREE
        }
    );
    assert_eq!(
        Hypersurface::new()
            .dimension(MAX_DIMENSION + 1)
            .degree(3)
            .build()
            .unwrap_err(),
        HodgeError::InvalidDimension {
            got: MAX_DIMENSION + 1,
            max: MAX_DIMENSION
        }
    );
    assert!(hodge_square(1, 0).is_err());
}

#[test]
fn test_builder_rejects_duplicates() {
    let err = Hypersurface::new()
        .dimension(2)
        .dimension(3)
        .degree(4)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        HodgeError::DuplicateParameter {
            parameter: "dimension"
        }
    );

    // A preset sets both parameters
    let err = Hypersurface::new().preset(K3).degree(5).build().unwrap_err();
    assert_eq!(err, HodgeError::DuplicateParameter { parameter: "degree" });
}

#[test]
fn test_calculator_accessors() {
    let calculator = Hypersurface::new().preset(CubicSurface).build().unwrap();
    assert_eq!(calculator.dimension(), 2);
    assert_eq!(calculator.degree(), 3);
}

#[test]
fn test_preset_parsing() {
    assert_eq!("k3".parse::<Preset>(), Ok(K3));
    assert_eq!("K3".parse::<Preset>(), Ok(K3));
    assert_eq!("plane-quartic".parse::<Preset>(), Ok(PlaneQuartic));
    assert_eq!("cubic_surface".parse::<Preset>(), Ok(CubicSurface));
    assert_eq!(
        " Quintic-Threefold ".parse::<Preset>(),
        Ok(QuinticThreefold)
    );
    assert_eq!(
        "sextic".parse::<Preset>(),
        Err(HodgeError::UnknownPreset("sextic".to_string()))
    );

    for preset in Preset::ALL {
        assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
    }
    assert_eq!(QuinticThreefold.parameters(), (3, 5));
}

#[test]
fn test_report_transcript() {
    let report = Hypersurface::new()
        .preset(K3)
        .build()
        .unwrap()
        .compute()
        .unwrap();
    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "dimension of V: 2");
    assert_eq!(lines[1], "degree of V: 4");
    assert_eq!(
        lines[2],
        "RHS = 1/((1 - z)*(1 + y*z))*((1 + y*z)**4 - (1 - z)**4)/((1 + y*z)**4 + y*(1 - z)**4)"
    );
    assert!(lines[3].starts_with("chi_y = "));
    assert_eq!(
        lines[4],
        "simplifying it; it should be a polynomial in y of degree n = 2"
    );
    assert_eq!(lines[5], "2*y**2 - 20*y + 2");
    assert_eq!(
        lines[6],
        "taking all the coefficients of chi_y; they are chi^p genera (in the opposite order).."
    );
    assert_eq!(lines[7], "chi^p genera; i = 0,...n : ");
    assert_eq!(lines[8], "[2, -20, 2]");
    assert_eq!(lines[9], "Hodge square is of odd size");
    assert_eq!(lines[10], "Non-principal diagonal of the Hodge square: ");
    assert_eq!(lines[11], "[1, 20, 1]");
    assert_eq!(lines[12], "Hodge square HS: ");
    assert_eq!(lines[13], "⎡1  0   1⎤");
    assert_eq!(lines[15], "⎢0  20  0⎥");
    assert_eq!(lines[17], "⎣1  0   1⎦");
    assert_eq!(lines[18], "Euler characteristic: 24");
    assert_eq!(lines[19], "------------------------------------------");
    assert!(!text.contains("extending  it by zeroes.."));
}

#[test]
fn test_report_transcript_with_padding_warning() {
    let report = Hypersurface::new()
        .dimension(1)
        .degree(3)
        .build()
        .unwrap()
        .compute()
        .unwrap();
    let text = report.to_string();

    let warning = concat!(
        "----------------------------\n",
        "length of answer should be equal to the width (Hodge square) = n + 1\n",
        "SOmetimes this array is too short, \n",
        "if top coeffs of chi_y are zero\n",
        "extending  it by zeroes..\n",
        "----------------------------\n",
        "chi^p genera; i = 0,...n : \n",
        "[0, 0]\n",
        "Hodge square is of even size\n",
    );
    assert!(text.contains(warning), "{}", text);
    assert!(text.contains("chi_y = 0\n"));
}

#[test]
fn test_results_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<HodgeReport>();
    assert_send_sync::<SquareMatrix>();
    assert_send_sync::<HodgeCalculator>();
    assert_send_sync::<HodgeError>();

    let calculator = Hypersurface::new().preset(K3).build().unwrap();
    let report = std::thread::spawn(move || calculator.compute())
        .join()
        .unwrap()
        .unwrap();
    assert_eq!(report.euler_characteristic, BigInt::from(24));
}
