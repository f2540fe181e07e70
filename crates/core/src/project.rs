use crate::coordinate::{
    CameraCoordinate, GalacticCoordinate, NormalizedCubeCoordinate,
    ScreenCoordinate, SphereCorrectedCoordinate,
};
use log::trace;
use nalgebra::Rotation3;
use serde::{Deserialize, Serialize};

/// Maps galactic coordinates onto the galaxy map. The map is a fixed image of
/// the galaxy, viewed from slightly above the galactic plane, and there are two
/// markers drawn on it for any position:
///
/// - The **primary** marker, which is the actual 3D position
/// - The **reference** marker, which is the position's shadow on the galactic
///   plane (i.e. the same position with zero height)
///
/// The renderer draws a line between the two, which makes the height of the
/// position visible on a 2D image.
///
/// The projector has no state, so all its functionality is exposed as
/// associated functions. Every function here is total: any real input gives a
/// well-defined output.
#[derive(Copy, Clone, Debug, Default)]
pub struct CoordinateProjector;

/// The screen positions of both markers for a single coordinate
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPositions {
    pub primary: ScreenCoordinate,
    pub reference: ScreenCoordinate,
}

impl CoordinateProjector {
    /// Camera tilt above the galactic plane, in degrees
    pub const TILT_DEGREES: f64 = 15.0;

    /// Camera tilt above the galactic plane, in radians
    pub fn tilt() -> f64 {
        Self::TILT_DEGREES.to_radians()
    }

    /// Get the screen position of the primary marker, which represents the
    /// full 3D position.
    pub fn primary_marker_position(
        coordinate: GalacticCoordinate,
    ) -> ScreenCoordinate {
        Self::project(coordinate, false)
    }

    /// Get the screen position of the reference marker, which is the
    /// coordinate flattened onto the galactic plane.
    pub fn reference_marker_position(
        coordinate: GalacticCoordinate,
    ) -> ScreenCoordinate {
        Self::project(coordinate, true)
    }

    /// Get the screen positions of both markers at once
    pub fn marker_positions(coordinate: GalacticCoordinate) -> MarkerPositions {
        MarkerPositions {
            primary: Self::primary_marker_position(coordinate),
            reference: Self::reference_marker_position(coordinate),
        }
    }

    /// Project a coordinate into screen space. If `flatten_to_plane` is set,
    /// height is discarded after rescaling, giving the position's shadow on
    /// the galactic plane.
    pub fn project(
        coordinate: GalacticCoordinate,
        flatten_to_plane: bool,
    ) -> ScreenCoordinate {
        let mut rescaled = Self::rescale(coordinate.normalize());
        if flatten_to_plane {
            rescaled.y = 0.0;
        }
        let camera = Self::rotate(rescaled);
        let screen = Self::to_screen(camera);
        trace!(
            "Projected {} (flatten_to_plane={}) to {}",
            coordinate,
            flatten_to_plane,
            screen
        );
        screen
    }

    /// Rescale a single axis value `i` based on the other two axes `j` and
    /// `k`. This is the closed-form mapping from a cube onto a sphere: values
    /// near the cube's corners are pulled in further than those near the
    /// centers of its faces.
    ///
    /// The radicand is passed through `abs` before the square root, so this
    /// never produces NaN, even for inputs well outside `[-1, 1]`.
    pub fn rescale_component(i: f64, j: f64, k: f64) -> f64 {
        let j2 = j * j;
        let k2 = k * k;
        i * (j2 * k2 / 3.0 + 1.0 - j2 / 2.0 - k2 / 2.0).abs().sqrt()
    }

    /// Apply cube-to-sphere rescaling to all three axes. Each axis is scaled
    /// using the *original* values of the other two.
    pub fn rescale(
        cube: NormalizedCubeCoordinate,
    ) -> SphereCorrectedCoordinate {
        let NormalizedCubeCoordinate { x, y, z } = cube;
        SphereCorrectedCoordinate::new(
            Self::rescale_component(x, y, z),
            Self::rescale_component(y, x, z),
            Self::rescale_component(z, x, y),
        )
    }

    /// Move a rescaled coordinate into camera space. The camera looks down on
    /// the plane at a fixed tilt, so we rotate around the x axis by that
    /// tilt. Then x and y are both shrunk by `cos(tilt)`. That second step
    /// isn't geometrically derived, it's calibrated to match the map image and
    /// has to stay as-is.
    pub fn rotate(sphere: SphereCorrectedCoordinate) -> CameraCoordinate {
        let tilt = Self::tilt();
        // Roll is rotation about the x axis
        let rotation = Rotation3::from_euler_angles(tilt, 0.0, 0.0);
        let rotated = rotation * sphere.to_point3();

        let foreshortening = tilt.cos();
        CameraCoordinate::new(
            rotated.x * foreshortening,
            rotated.y * foreshortening,
            rotated.z,
        )
    }

    /// Convert a camera coordinate, where `(-1,-1)` and `(1,1)` are the bottom
    /// left and top right corners, to screen space, where `(0,0)` and `(1,1)`
    /// are the top left and bottom right. Depth is dropped.
    pub fn to_screen(camera: CameraCoordinate) -> ScreenCoordinate {
        ScreenCoordinate::new((1.0 + camera.x) / 2.0, (1.0 - camera.y) / 2.0)
    }
}
