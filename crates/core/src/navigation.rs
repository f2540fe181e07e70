use crate::{
    coordinate::{GalacticCoordinate, ScreenCoordinate},
    portal::{OutOfRange, PortalCode, PortalCodeEncoder},
    project::CoordinateProjector,
    util::validate::validate_finite,
};
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

/// Navigation parameters in the polar form that a user steers with: an angle
/// around the galactic core, a distance from it, and a height above the
/// galactic plane.
///
/// These are in **navigator units**, which are [Self::UNITS_PER_COORDINATE]
/// times larger than the units of [GalacticCoordinate]. That gives fine enough
/// control to land on every integer coordinate when steering with sliders.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NavigatorInput {
    /// Angle around the galactic core, in degrees. 0° points along +x, and
    /// angles increase towards -z.
    #[validate(range(min = 0.0, max = 360.0), custom = "validate_finite")]
    pub theta: f64,

    /// Distance from the galactic core, measured in the plane. The max is the
    /// distance to a corner of the encodable square.
    #[validate(
        range(min = 0.0, max = 1157958.07),
        custom = "validate_finite"
    )]
    pub radius: f64,

    /// Distance above (positive) or below (negative) the galactic plane
    #[validate(
        range(min = -50800.0, max = 50800.0),
        custom = "validate_finite"
    )]
    pub height: f64,
}

impl NavigatorInput {
    /// Navigator units per galactic coordinate unit
    pub const UNITS_PER_COORDINATE: f64 = 400.0;

    /// Max value for [Self::radius]: the distance from the core to a corner of
    /// the encodable square, `sqrt(2) * 400 * 2047`
    pub fn max_radius() -> f64 {
        2.0f64.sqrt()
            * Self::UNITS_PER_COORDINATE
            * GalacticCoordinate::X_BOUND as f64
    }

    /// Max magnitude for [Self::height]: `400 * 127`
    pub fn max_height() -> f64 {
        Self::UNITS_PER_COORDINATE * GalacticCoordinate::Y_BOUND as f64
    }

    /// Create a new input, returning an error if any parameter is outside its
    /// allowed range.
    pub fn validated(
        theta: f64,
        radius: f64,
        height: f64,
    ) -> anyhow::Result<Self> {
        let input = Self {
            theta,
            radius,
            height,
        };
        input.validate()?;
        Ok(input)
    }

    /// Convert these polar parameters into a galactic coordinate
    pub fn to_coordinate(&self) -> GalacticCoordinate {
        let theta = self.theta.to_radians();
        GalacticCoordinate::new(
            self.radius * theta.cos() / Self::UNITS_PER_COORDINATE,
            self.height / Self::UNITS_PER_COORDINATE,
            -self.radius * theta.sin() / Self::UNITS_PER_COORDINATE,
        )
    }
}

impl Default for NavigatorInput {
    fn default() -> Self {
        // Edge of the galaxy along +x, at max height
        Self {
            theta: 0.0,
            radius: Self::UNITS_PER_COORDINATE
                * GalacticCoordinate::X_BOUND as f64,
            height: Self::max_height(),
        }
    }
}

/// Everything a presentation layer needs to display one coordinate: the
/// portal code and both marker positions. The projector and encoder are always
/// run on the same coordinate, so the pieces here are guaranteed consistent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavigationReport {
    pub coordinate: GalacticCoordinate,
    /// An error if the coordinate can't be encoded. Displays should show an
    /// explicit invalid state in that case, **not** a stale code. Serializes
    /// as `null` when invalid.
    #[serde(serialize_with = "serialize_portal_code")]
    pub portal_code: Result<PortalCode, OutOfRange>,
    pub primary: ScreenCoordinate,
    pub reference: ScreenCoordinate,
}

impl NavigationReport {
    pub fn new(coordinate: GalacticCoordinate) -> Self {
        let positions = CoordinateProjector::marker_positions(coordinate);
        Self {
            coordinate,
            portal_code: PortalCodeEncoder::encode(coordinate),
            primary: positions.primary,
            reference: positions.reference,
        }
    }

    /// Serialize this report as JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panics only if the report isn't serializable (a bug)
        serde_json::to_string_pretty(self)
            .expect("error serializing navigation report")
    }
}

fn serialize_portal_code<S: Serializer>(
    portal_code: &Result<PortalCode, OutOfRange>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    portal_code.as_ref().ok().serialize(serializer)
}

impl From<NavigatorInput> for NavigationReport {
    fn from(input: NavigatorInput) -> Self {
        Self::new(input.to_coordinate())
    }
}
