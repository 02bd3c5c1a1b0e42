//! Tests for Viewport construction and point acceptance.

use density_common::{Axis, Cartesian, Viewport, ViewportError};

fn unit_box() -> Viewport {
    Viewport::new(0.0, 10.0, 0.0, 10.0).unwrap()
}

// ============================================================================
// Acceptance tests
// ============================================================================

#[test]
fn test_contains_lower_x_edge() {
    assert!(unit_box().contains(&Cartesian::new(0.0, 5.0)));
}

#[test]
fn test_excludes_upper_x_edge() {
    assert!(!unit_box().contains(&Cartesian::new(10.0, 5.0)));
}

#[test]
fn test_excludes_lower_y_edge() {
    assert!(!unit_box().contains(&Cartesian::new(5.0, 0.0)));
}

#[test]
fn test_contains_upper_y_edge() {
    assert!(unit_box().contains(&Cartesian::new(5.0, 10.0)));
}

#[test]
fn test_excludes_outside_points() {
    let vp = unit_box();
    assert!(!vp.contains(&Cartesian::new(-0.001, 5.0)));
    assert!(!vp.contains(&Cartesian::new(5.0, 10.001)));
    assert!(!vp.contains(&Cartesian::new(f64::NAN, 5.0)));
    assert!(!vp.contains(&Cartesian::new(5.0, f64::INFINITY)));
}

// ============================================================================
// Parsing tests
// ============================================================================

#[test]
fn test_parse_with_whitespace() {
    let vp = Viewport::parse(" -1, -2 , 3, 4 ").unwrap();
    assert_eq!(vp, Viewport::new(-1.0, 3.0, -2.0, 4.0).unwrap());
}

#[test]
fn test_parse_wrong_arity() {
    assert!(matches!(
        Viewport::parse("0,0,1"),
        Err(ViewportError::InvalidFormat(_))
    ));
}

#[test]
fn test_parse_bad_number() {
    assert_eq!(
        Viewport::parse("0,zero,1,1"),
        Err(ViewportError::InvalidNumber("zero".to_string()))
    );
}

#[test]
fn test_parse_inverted() {
    assert!(matches!(
        Viewport::parse("5,0,-5,1"),
        Err(ViewportError::Inverted { axis: Axis::X, .. })
    ));
}

// ============================================================================
// Serialization tests
// ============================================================================

#[test]
fn test_deserialize_validates() {
    let ok: Viewport =
        serde_json::from_str(r#"{"min_x":-1.0,"max_x":1.0,"min_y":-2.0,"max_y":2.0}"#).unwrap();
    assert_eq!(ok.height(), 4.0);

    let bad = serde_json::from_str::<Viewport>(r#"{"min_x":1.0,"max_x":-1.0,"min_y":0.0,"max_y":1.0}"#);
    assert!(bad.is_err());
}
