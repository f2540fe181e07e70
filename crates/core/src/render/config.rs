use crate::util::validate::validate_finite;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for drawing markers onto the galaxy map. None of this has any
/// bearing on the projection or the portal code, it only controls where the
/// normalized screen positions land on an actual image, and how the markers
/// look once they're there.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate,
)]
#[serde(default)]
pub struct RenderConfig {
    /// URL of the map image, for output formats that can reference one. The
    /// image itself is never read.
    ///
    /// ## Relevant Formats
    /// - SVG
    pub background_href: Option<String>,

    /// Geometry of the map image
    #[validate]
    pub layout: MapLayout,

    /// Sizes and colors of the markers drawn on top of the map
    #[validate]
    pub markers: MarkerStyle,
}

/// Where the projection's working square sits within the map image. Screen
/// space `[0,1]²` covers exactly the working region, and everything outside it
/// is decorative border.
///
/// All values are in pixels of the **source image**, at its native size.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MapLayout {
    /// Native width of the full map image
    #[validate(range(min = 1))]
    pub image_width: u32,
    /// Native height of the full map image
    #[validate(range(min = 1))]
    pub image_height: u32,

    /// Width of the working region
    #[validate(range(min = 1.0), custom = "validate_finite")]
    pub region_width: f64,
    /// Height of the working region
    #[validate(range(min = 1.0), custom = "validate_finite")]
    pub region_height: f64,

    /// Distance from the left edge of the image to the working region
    #[validate(custom = "validate_finite")]
    pub region_offset_x: f64,
    /// Distance from the top edge of the image to the working region
    #[validate(custom = "validate_finite")]
    pub region_offset_y: f64,
}

/// Marker appearance. Sizes are in source image pixels, and get scaled along
/// with the image when it's drawn at a different size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MarkerStyle {
    /// Radius of the dot at the full 3D position
    #[validate(range(min = 0.0), custom = "validate_finite")]
    pub primary_radius: f64,

    /// Horizontal radius of the flattened dot on the galactic plane
    #[validate(range(min = 0.0), custom = "validate_finite")]
    pub reference_radius_x: f64,
    /// Vertical radius of the flattened dot on the galactic plane
    #[validate(range(min = 0.0), custom = "validate_finite")]
    pub reference_radius_y: f64,

    /// Horizontal radius of the ring drawn around the reference dot
    #[validate(range(min = 0.0), custom = "validate_finite")]
    pub ring_radius_x: f64,
    /// Vertical radius of the ring drawn around the reference dot
    #[validate(range(min = 0.0), custom = "validate_finite")]
    pub ring_radius_y: f64,

    /// Width of the ring and of the line connecting the two markers. After
    /// scaling, this is never drawn thinner than one pixel.
    #[validate(range(min = 0.0), custom = "validate_finite")]
    pub stroke_width: f64,

    /// Any CSS color
    pub primary_color: String,
    /// Any CSS color, used for the reference dot, ring, and connector
    pub reference_color: String,
}

impl Default for MapLayout {
    fn default() -> Self {
        // The working region is 1920x1920, starting at (642, 325). We assume
        // it's centered in the image.
        Self {
            image_width: 3204,
            image_height: 2570,
            region_width: 1920.0,
            region_height: 1920.0,
            region_offset_x: 642.0,
            region_offset_y: 325.0,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            primary_radius: 20.0,
            reference_radius_x: 25.0,
            reference_radius_y: 10.0,
            ring_radius_x: 105.0,
            ring_radius_y: 42.0,
            stroke_width: 5.0,
            primary_color: "yellow".into(),
            reference_color: "white".into(),
        }
    }
}
