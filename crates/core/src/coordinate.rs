//! Coordinate types used throughout the projection pipeline. A position
//! starts out as a [GalacticCoordinate] in the game's native units, and is
//! carried through a series of intermediate spaces until it lands in
//! [ScreenCoordinate] space:
//!
//! ```text
//! GalacticCoordinate
//!   -> NormalizedCubeCoordinate   (each axis divided by its bound)
//!   -> SphereCorrectedCoordinate  (cube-to-sphere rescaling)
//!   -> CameraCoordinate           (tilted and foreshortened)
//!   -> ScreenCoordinate           (2D, [0,1]², top-left origin)
//! ```
//!
//! Each 3D type is a distinct struct so the pipeline stages can't be mixed up,
//! but they all convert to and from [nalgebra::Point3] for the actual math.

use derive_more::Display;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Define a 3D coordinate type with public `x`/`y`/`z` fields, plus
/// conversions to and from nalgebra points.
macro_rules! coordinate_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            Debug,
            Default,
            Display,
            PartialEq,
            Serialize,
            Deserialize,
        )]
        #[display(fmt = "({}, {}, {})", x, y, z)]
        pub struct $name {
            pub x: f64,
            pub y: f64,
            pub z: f64,
        }

        impl $name {
            pub const fn new(x: f64, y: f64, z: f64) -> Self {
                Self { x, y, z }
            }

            pub fn to_point3(self) -> Point3<f64> {
                Point3::new(self.x, self.y, self.z)
            }
        }

        impl From<Point3<f64>> for $name {
            fn from(point: Point3<f64>) -> Self {
                Self::new(point.x, point.y, point.z)
            }
        }

        impl From<(f64, f64, f64)> for $name {
            fn from((x, y, z): (f64, f64, f64)) -> Self {
                Self::new(x, y, z)
            }
        }
    };
}

coordinate_type!(
    /// A position in the galaxy, in the game's native units. Portal codes can
    /// only represent integer positions within
    /// [X_BOUND](Self::X_BOUND)/[Y_BOUND](Self::Y_BOUND)/[Z_BOUND](Self::Z_BOUND)
    /// on each axis, but the map projection accepts any real value. Anything
    /// outside the bounds will just land outside the map's working square.
    ///
    /// `y` is height above/below the galactic plane; `x` and `z` span the
    /// plane itself.
    GalacticCoordinate
);

coordinate_type!(
    /// A [GalacticCoordinate] with each axis divided by its bound, so an
    /// in-range coordinate falls in the cube `[-1, 1]³`.
    NormalizedCubeCoordinate
);

coordinate_type!(
    /// A [NormalizedCubeCoordinate] after cube-to-sphere rescaling, which
    /// pulls the corners of the cube in so the domain matches the round
    /// silhouette of the galaxy on the map.
    SphereCorrectedCoordinate
);

coordinate_type!(
    /// A position as seen by the map's fixed oblique camera. Only `x` and `y`
    /// matter for the final screen position; `z` is depth.
    CameraCoordinate
);

impl GalacticCoordinate {
    /// The center of the galaxy
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Max magnitude of an encodable x value
    pub const X_BOUND: i64 = 2047;
    /// Max magnitude of an encodable y value
    pub const Y_BOUND: i64 = 127;
    /// Max magnitude of an encodable z value
    pub const Z_BOUND: i64 = 2047;

    /// Scale each axis down by its bound. In-range coordinates will end up in
    /// `[-1, 1]` on every axis.
    pub fn normalize(self) -> NormalizedCubeCoordinate {
        NormalizedCubeCoordinate::new(
            self.x / Self::X_BOUND as f64,
            self.y / Self::Y_BOUND as f64,
            self.z / Self::Z_BOUND as f64,
        )
    }
}

/// A 2D point in normalized screen space. `(0, 0)` is the top-left corner of
/// the map's working square and `(1, 1)` is the bottom-right. Coordinates
/// outside the encodable range can project outside `[0, 1]`, it's up to the
/// renderer to clip them.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct ScreenCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ScreenCoordinate {
    /// Center of the working square, where the galactic core sits
    pub const CENTER: Self = Self::new(0.5, 0.5);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Is this point inside the unit square (inclusive)?
    pub fn is_on_map(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}
