use galnav::{Axis, GalacticCoordinate, PortalCode, PortalCodeEncoder};

fn encode(x: f64, y: f64, z: f64) -> String {
    PortalCodeEncoder::encode(GalacticCoordinate::new(x, y, z))
        .unwrap()
        .into_string()
}

#[test]
fn test_encode_origin() {
    assert_eq!(encode(0.0, 0.0, 0.0), "100100000000");
}

#[test]
fn test_encode_max() {
    assert_eq!(encode(2047.0, 127.0, 2047.0), "10017f7ff7ff");
    // Rounded first
    assert_eq!(encode(2046.7, 126.9, 2047.2), "10017f7ff7ff");
}

#[test]
fn test_encode_format() {
    let bounds = [2047.0, 127.0, 2047.0];
    let samples = [-1.0, -0.75, -0.5, -0.1, 0.0, 0.1, 0.5, 0.75, 1.0];
    for &fx in &samples {
        for &fy in &samples {
            for &fz in &samples {
                let coordinate = GalacticCoordinate::new(
                    fx * bounds[0],
                    fy * bounds[1],
                    fz * bounds[2],
                );
                let code = PortalCodeEncoder::encode(coordinate)
                    .unwrap_or_else(|err| {
                        panic!("failed to encode {}: {}", coordinate, err)
                    });
                let code = code.as_str();
                assert_eq!(code.len(), PortalCode::LENGTH, "{}", code);
                assert!(code.starts_with(PortalCode::PREFIX), "{}", code);
                assert!(
                    code.chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                    "{} isn't lowercase hex",
                    code
                );
            }
        }
    }
}

#[test]
fn test_out_of_range() {
    let cases = [
        ((2048.0, 0.0, 0.0), Axis::X),
        ((0.0, 128.0, 0.0), Axis::Y),
        ((0.0, 0.0, -2048.0), Axis::Z),
        ((-2048.0, -128.0, 0.0), Axis::X),
        ((0.0, -127.5, 0.0), Axis::Y),
    ];
    for &((x, y, z), axis) in &cases {
        let coordinate = GalacticCoordinate::new(x, y, z);
        let err = PortalCodeEncoder::encode(coordinate).unwrap_err();
        assert_eq!(err.axis, axis, "wrong axis for {}", coordinate);
        assert!(!PortalCodeEncoder::is_encodable(coordinate));
    }
}
