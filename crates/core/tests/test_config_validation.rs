use galnav::{
    MapLayout, MapRenderer, MarkerStyle, NavigatorInput, RenderConfig,
};
use validator::ValidationErrors;

/// Get the sorted list of top-level fields that failed validation
fn error_fields(err: anyhow::Error) -> Vec<&'static str> {
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    error_fields
}

#[test]
fn test_render_config_validation() {
    let render_config = RenderConfig {
        layout: MapLayout {
            image_width: 0,        // invalid
            image_height: 100,     // valid
            region_width: 0.0,     // invalid
            region_height: 50.0,   // valid
            region_offset_x: -1.0, // valid (but weird)
            region_offset_y: 0.0,  // valid
        },
        markers: MarkerStyle {
            primary_radius: -1.0, // invalid
            ..Default::default()
        },
        background_href: None,
    };

    // This is a bit of a lazy check but it works well enough
    let err = MapRenderer::new(render_config).unwrap_err();
    assert_eq!(error_fields(err), vec!["layout", "markers"]);
}

#[test]
fn test_render_config_default_valid() {
    let renderer = MapRenderer::new(RenderConfig::default()).unwrap();
    assert_eq!(renderer.render_config().layout.image_width, 3204);
}

#[test]
fn test_navigator_input_validation() {
    let err = NavigatorInput::validated(
        361.0,                                  // invalid
        NavigatorInput::max_radius(),           // valid
        -NavigatorInput::max_height() - 1.0,    // invalid
    )
    .unwrap_err();
    assert_eq!(error_fields(err), vec!["height", "theta"]);

    let err = NavigatorInput::validated(0.0, -1.0, 0.0).unwrap_err();
    assert_eq!(error_fields(err), vec!["radius"]);

    assert!(NavigatorInput::validated(
        360.0,
        0.0,
        NavigatorInput::max_height()
    )
    .is_ok());
}

#[test]
fn test_non_finite_values_rejected() {
    let render_config = RenderConfig {
        layout: MapLayout {
            region_offset_x: f64::NAN,
            ..Default::default()
        },
        markers: MarkerStyle {
            stroke_width: f64::INFINITY,
            ..Default::default()
        },
        background_href: None,
    };
    let err = MapRenderer::new(render_config).unwrap_err();
    assert_eq!(error_fields(err), vec!["layout", "markers"]);

    let err = NavigatorInput::validated(f64::NAN, 0.0, f64::NAN).unwrap_err();
    assert_eq!(error_fields(err), vec!["height", "theta"]);
}
