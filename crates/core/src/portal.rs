use crate::{coordinate::GalacticCoordinate, util::range::NumRange};
use derive_more::Display;
use log::debug;
use serde::Serialize;
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};
use thiserror::Error;

/// A shareable location code for a galactic coordinate. The format is always
/// 12 lowercase hex digits:
///
/// ```text
/// 1001 YY ZZZ XXX
/// ```
///
/// where `1001` is a fixed prefix, and each axis is stored as a two's
/// complement integer, masked down to 8 bits for y and 12 bits for x and z.
/// The only way to get one of these is through [PortalCodeEncoder::encode].
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PortalCode(String);

impl PortalCode {
    /// Fixed leading digits of every code
    pub const PREFIX: &'static str = "1001";
    /// Total number of characters in a code
    pub const LENGTH: usize = 12;

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PortalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One of the three axes of a [GalacticCoordinate]
#[derive(Copy, Clone, Debug, PartialEq, Eq, StrumDisplay, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The range of encodable values on this axis, after rounding
    pub const fn range(self) -> NumRange {
        let bound = match self {
            Self::X => GalacticCoordinate::X_BOUND,
            Self::Y => GalacticCoordinate::Y_BOUND,
            Self::Z => GalacticCoordinate::Z_BOUND,
        };
        NumRange::symmetric(bound as f64)
    }

    /// Number of bits this axis occupies in a portal code
    pub const fn bits(self) -> u32 {
        match self {
            Self::X | Self::Z => 12,
            Self::Y => 8,
        }
    }

    /// Grab this axis's value from a coordinate
    pub fn get(self, coordinate: GalacticCoordinate) -> f64 {
        match self {
            Self::X => coordinate.x,
            Self::Y => coordinate.y,
            Self::Z => coordinate.z,
        }
    }
}

/// A coordinate that can't be represented as a portal code. This is the only
/// way encoding can fail. If more than one axis is out of range, this reports
/// the first one, in x/y/z order.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[error("{axis} value {value} is outside the encodable range {range}")]
pub struct OutOfRange {
    /// The offending axis
    pub axis: Axis,
    /// The axis value, after rounding. NaN and infinities are reported as-is.
    pub value: f64,
    /// The range the rounded value needed to fall in
    pub range: NumRange,
}

/// Converts galactic coordinates into [PortalCode]s. The encoder is stateless,
/// so all its functionality is exposed as associated functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct PortalCodeEncoder;

impl PortalCodeEncoder {
    /// Encode a coordinate as a portal code. Each axis is rounded to the
    /// nearest integer first (ties go to the even neighbor, so `0.5` rounds to
    /// `0` and `1.5` to `2`), and then range-checked. Returns [OutOfRange] if
    /// any rounded axis is outside its bound. Out-of-range values are never
    /// clamped.
    pub fn encode(
        coordinate: GalacticCoordinate,
    ) -> Result<PortalCode, OutOfRange> {
        let x = Self::validate_axis(Axis::X, coordinate)?;
        let y = Self::validate_axis(Axis::Y, coordinate)?;
        let z = Self::validate_axis(Axis::Z, coordinate)?;

        let xxx = Self::mask(Axis::X, x);
        let yy = Self::mask(Axis::Y, y);
        let zzz = Self::mask(Axis::Z, z);
        Ok(PortalCode(format!(
            "{}{yy:02x}{zzz:03x}{xxx:03x}",
            PortalCode::PREFIX
        )))
    }

    /// Check if a coordinate can be encoded, without building the code
    pub fn is_encodable(coordinate: GalacticCoordinate) -> bool {
        Axis::iter().all(|axis| Self::validate_axis(axis, coordinate).is_ok())
    }

    /// Round one axis of the coordinate and make sure it falls in range
    fn validate_axis(
        axis: Axis,
        coordinate: GalacticCoordinate,
    ) -> Result<i64, OutOfRange> {
        let rounded = axis.get(coordinate).round_ties_even();
        let range = axis.range();
        // Check before casting, the cast would saturate NaN and huge values
        if range.contains(rounded) {
            Ok(rounded as i64)
        } else {
            debug!(
                "Coordinate {} can't be encoded, {} is out of range",
                coordinate, axis
            );
            Err(OutOfRange {
                axis,
                value: rounded,
                range,
            })
        }
    }

    /// Keep only the low bits for an axis. Negative values wrap around, since
    /// they're stored in two's complement.
    fn mask(axis: Axis, value: i64) -> i64 {
        value & ((1 << axis.bits()) - 1)
    }
}
