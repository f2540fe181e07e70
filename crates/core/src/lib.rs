//! Galnav places positions from the galaxy of a space exploration game onto a
//! stylized galaxy map, and turns them into shareable portal codes. This
//! crate contains all the core math. Presentation layers (windows, sliders,
//! image loading) are implemented elsewhere.
//!
//! ```
//! use galnav::{CoordinateProjector, GalacticCoordinate, PortalCodeEncoder};
//!
//! let coordinate = GalacticCoordinate::new(2047.0, 127.0, 0.0);
//! let code = PortalCodeEncoder::encode(coordinate).unwrap();
//! assert_eq!(code.to_string(), "10017f0007ff");
//!
//! // Both markers are in normalized screen space, ready to be scaled onto
//! // the map image
//! let primary = CoordinateProjector::primary_marker_position(coordinate);
//! let reference = CoordinateProjector::reference_marker_position(coordinate);
//! assert!(primary.is_on_map() && reference.is_on_map());
//! ```
//!
//! See [MapRenderer] for placing markers onto an actual image, and
//! [NavigatorInput] for steering with polar parameters instead of raw
//! coordinates.

mod coordinate;
mod navigation;
mod portal;
mod project;
mod render;
mod util;

pub use crate::{
    coordinate::{
        CameraCoordinate, GalacticCoordinate, NormalizedCubeCoordinate,
        ScreenCoordinate, SphereCorrectedCoordinate,
    },
    navigation::{NavigationReport, NavigatorInput},
    portal::{Axis, OutOfRange, PortalCode, PortalCodeEncoder},
    project::{CoordinateProjector, MarkerPositions},
    render::{
        config::{MapLayout, MarkerStyle, RenderConfig},
        unit::{Ellipse, PixelPoint, Segment, Viewport},
        MapOverlay, MapRenderer,
    },
    util::range::NumRange,
};
