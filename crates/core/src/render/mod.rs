pub mod config;
#[cfg(feature = "svg")]
pub mod svg;
pub mod unit;

use crate::{
    coordinate::{GalacticCoordinate, ScreenCoordinate},
    project::CoordinateProjector,
    render::{
        config::RenderConfig,
        unit::{Ellipse, PixelPoint, Segment, Viewport},
    },
    util::range::NumRange,
};
use anyhow::ensure;
use serde::Serialize;
use validator::Validate;

/// A map renderer places the projector's output onto an actual map image. A
/// renderer is created from a particular [RenderConfig], and from there can be
/// used to draw any number of coordinates onto canvases of any size.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new one.
///
/// ## Coordinate Spaces
/// - **Screen space**: normalized `[0,1]²`, covering the map's working region.
///   This is what [CoordinateProjector] outputs.
/// - **Image space**: pixels of the source map image at its native size
/// - **Pixel space**: pixels of the canvas being drawn onto. The image gets
///   scaled to fit the canvas, keeping its aspect ratio.
///
/// ## Supported Formats
/// - SVG
#[derive(Clone, Debug, Serialize)]
pub struct MapRenderer {
    render_config: RenderConfig,
}

/// All the shapes needed to draw one coordinate onto a canvas, in pixel space.
/// They should be drawn in field order, so the primary dot ends up on top.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MapOverlay {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Where the full map image goes on the canvas
    pub viewport: Viewport,
    /// Flattened dot on the galactic plane
    pub reference_dot: Ellipse,
    /// Ring around the reference dot
    pub reference_ring: Ellipse,
    /// Line from the reference dot to the primary dot, showing height
    pub connector: Segment,
    /// Dot at the full 3D position
    pub primary_dot: Ellipse,
    /// Stroke width for the ring and connector
    pub stroke_width: f64,
}

impl MapRenderer {
    /// Initialize a new renderer with the given config. Returns an error if
    /// the config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        render_config.validate()?;
        Ok(Self { render_config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Width divided by height of the source image
    pub fn aspect(&self) -> f64 {
        let layout = &self.render_config.layout;
        layout.image_width as f64 / layout.image_height as f64
    }

    /// Make sure a canvas size is something that can actually be drawn on:
    /// finite and positive in both dimensions.
    pub fn check_canvas_size(width: f64, height: f64) -> anyhow::Result<()> {
        let valid = |size: f64| size.is_finite() && size > 0.0;
        ensure!(
            valid(width) && valid(height),
            "invalid canvas size {}x{}",
            width,
            height
        );
        Ok(())
    }

    /// Find the largest area within a canvas that the map image fits in
    /// without being distorted. The image is centered, with margins rounded to
    /// whole pixels.
    pub fn fit_to_viewport(&self, width: f64, height: f64) -> Viewport {
        let aspect = self.aspect();
        let fitted_width = width.min(height * aspect);
        let fitted_height = height.min(width / aspect);

        let h_margin = ((width - fitted_width) / 2.0).round_ties_even();
        let v_margin = ((height - fitted_height) / 2.0).round_ties_even();
        Viewport::new(
            h_margin,
            v_margin,
            width - 2.0 * h_margin,
            height - 2.0 * v_margin,
        )
    }

    /// Ratio of drawn size to native size for an image drawn in the given
    /// viewport. Marker sizes are multiplied by this.
    pub fn scale(&self, viewport: Viewport) -> f64 {
        viewport.width / self.render_config.layout.image_width as f64
    }

    /// Convert a point from screen space to image space
    pub fn screen_to_image_space(
        &self,
        screen: ScreenCoordinate,
    ) -> PixelPoint {
        let layout = &self.render_config.layout;
        let region_x =
            NumRange::from_start(layout.region_offset_x, layout.region_width);
        let region_y =
            NumRange::from_start(layout.region_offset_y, layout.region_height);
        PixelPoint::new(
            NumRange::UNIT.map_to(&region_x, screen.x),
            NumRange::UNIT.map_to(&region_y, screen.y),
        )
    }

    /// Convert a point from screen space to pixel space, for a map image drawn
    /// into the given viewport.
    pub fn screen_to_pixel_space(
        &self,
        screen: ScreenCoordinate,
        viewport: Viewport,
    ) -> PixelPoint {
        let layout = &self.render_config.layout;
        let image = self.screen_to_image_space(screen);
        let image_x = NumRange::new(0.0, layout.image_width as f64);
        let image_y = NumRange::new(0.0, layout.image_height as f64);
        PixelPoint::new(
            image_x.map_to(&viewport.x_range(), image.x),
            image_y.map_to(&viewport.y_range(), image.y),
        )
    }

    /// Compute all the shapes needed to mark a coordinate on a map drawn onto
    /// a canvas of the given size.
    pub fn overlay(
        &self,
        coordinate: GalacticCoordinate,
        canvas_width: f64,
        canvas_height: f64,
    ) -> MapOverlay {
        let viewport = self.fit_to_viewport(canvas_width, canvas_height);
        let scale = self.scale(viewport);
        let markers = &self.render_config.markers;
        // Sizes snap down to whole pixels
        let size = |native: f64| (native * scale).trunc();

        let positions = CoordinateProjector::marker_positions(coordinate);
        let primary = self.screen_to_pixel_space(positions.primary, viewport);
        let reference =
            self.screen_to_pixel_space(positions.reference, viewport);

        MapOverlay {
            canvas_width,
            canvas_height,
            viewport,
            reference_dot: Ellipse {
                center: reference,
                radius_x: size(markers.reference_radius_x),
                radius_y: size(markers.reference_radius_y),
            },
            reference_ring: Ellipse {
                center: reference,
                radius_x: size(markers.ring_radius_x),
                radius_y: size(markers.ring_radius_y),
            },
            connector: Segment {
                from: reference,
                to: primary,
            },
            primary_dot: Ellipse {
                center: primary,
                radius_x: size(markers.primary_radius),
                radius_y: size(markers.primary_radius),
            },
            stroke_width: size(markers.stroke_width).max(1.0),
        }
    }

    /// Render the markers for a coordinate as an SVG, on a canvas of the given
    /// size. Returns the SVG in a string, or an error if the canvas size is
    /// invalid.
    #[cfg(feature = "svg")]
    pub fn render_as_svg(
        &self,
        coordinate: GalacticCoordinate,
        canvas_width: f64,
        canvas_height: f64,
    ) -> anyhow::Result<String> {
        Self::check_canvas_size(canvas_width, canvas_height)?;
        let overlay = self.overlay(coordinate, canvas_width, canvas_height);
        Ok(svg::overlay_to_svg(&overlay, self).to_string())
    }
}
