use crate::render::{unit::Ellipse as EllipseShape, MapOverlay, MapRenderer};
use svg::{
    node::{
        element::{Ellipse, Group, Image, Line},
        Comment,
    },
    Document,
};

/// Render a map overlay as an SVG. The map image itself is only included by
/// reference, if the render config has a background URL. Otherwise the
/// markers are drawn onto an empty canvas, ready to be layered on top of the
/// map by something else.
pub fn overlay_to_svg(
    overlay: &MapOverlay,
    renderer: &MapRenderer,
) -> Document {
    let config = renderer.render_config();
    let markers = &config.markers;

    let mut document = Document::new()
        .set(
            "viewBox",
            (0.0, 0.0, overlay.canvas_width, overlay.canvas_height),
        )
        .set("width", overlay.canvas_width)
        .set("height", overlay.canvas_height)
        .add(Comment::new(format!("\n{:#?}\n", config)));

    if let Some(href) = &config.background_href {
        let viewport = overlay.viewport;
        document = document.add(
            Image::new()
                .set("href", href.as_str())
                .set("x", viewport.x)
                .set("y", viewport.y)
                .set("width", viewport.width)
                .set("height", viewport.height)
                .set("preserveAspectRatio", "none"),
        );
    }

    // Reference marker goes underneath, so the primary dot is always visible
    let reference = Group::new()
        .set("id", "reference")
        .add(
            draw_ellipse(overlay.reference_dot)
                .set("fill", markers.reference_color.as_str()),
        )
        .add(
            draw_ellipse(overlay.reference_ring)
                .set("fill", "none")
                .set("stroke", markers.reference_color.as_str())
                .set("stroke-width", overlay.stroke_width),
        )
        .add(
            Line::new()
                .set("x1", overlay.connector.from.x)
                .set("y1", overlay.connector.from.y)
                .set("x2", overlay.connector.to.x)
                .set("y2", overlay.connector.to.y)
                .set("stroke", markers.reference_color.as_str())
                .set("stroke-width", overlay.stroke_width),
        );

    let primary = Group::new().set("id", "primary").add(
        draw_ellipse(overlay.primary_dot)
            .set("fill", markers.primary_color.as_str()),
    );

    document.add(reference).add(primary)
}

/// Generate an SVG ellipse at the right place and size. Styling is left to
/// the caller.
fn draw_ellipse(shape: EllipseShape) -> Ellipse {
    Ellipse::new()
        .set("cx", shape.center.x)
        .set("cy", shape.center.y)
        .set("rx", shape.radius_x)
        .set("ry", shape.radius_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render::config::RenderConfig, GalacticCoordinate};

    #[test]
    fn test_overlay_to_svg() {
        let renderer = MapRenderer::new(RenderConfig {
            background_href: Some("mapHD.png".into()),
            ..Default::default()
        })
        .unwrap();
        let svg = renderer
            .render_as_svg(GalacticCoordinate::ORIGIN, 3204.0, 2570.0)
            .unwrap();

        assert!(svg.contains(r#"viewBox="0 0 3204 2570""#), "{}", svg);
        assert!(svg.contains(r#"href="mapHD.png""#), "{}", svg);
        assert!(svg.contains(r#"fill="yellow""#), "{}", svg);
        assert!(svg.contains(r#"cx="1602""#), "{}", svg);
        // Reference marker is drawn first
        let reference = svg.find(r#"id="reference""#).unwrap();
        let primary = svg.find(r#"id="primary""#).unwrap();
        assert!(reference < primary);
    }

    #[test]
    fn test_overlay_to_svg_no_background() {
        let renderer = MapRenderer::new(RenderConfig::default()).unwrap();
        let svg = renderer
            .render_as_svg(GalacticCoordinate::ORIGIN, 800.0, 600.0)
            .unwrap();
        assert!(!svg.contains("<image"), "{}", svg);
    }

    #[test]
    fn test_invalid_canvas() {
        let renderer = MapRenderer::new(RenderConfig::default()).unwrap();
        assert!(renderer
            .render_as_svg(GalacticCoordinate::ORIGIN, f64::NAN, 600.0)
            .is_err());
        assert!(renderer
            .render_as_svg(GalacticCoordinate::ORIGIN, 800.0, -600.0)
            .is_err());
    }
}
