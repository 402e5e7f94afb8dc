//! Error types for geohash operations.
//!
//! Every operation in this crate reports failures through [`GeohashError`];
//! there are no silent fallbacks or substitute values. Each variant carries
//! the offending input so callers can report it without re-deriving context.

use thiserror::Error;

/// Error type for encoding, decoding, and neighbor resolution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// Latitude is outside the valid range or not finite.
    #[error("Invalid latitude: {0} (must be a finite value between -90 and 90)")]
    InvalidLatitude(f64),

    /// Longitude is outside the valid range or not finite.
    #[error("Invalid longitude: {0} (must be a finite value between -180 and 180)")]
    InvalidLongitude(f64),

    /// Requested geohash length is zero.
    #[error("Invalid precision: {0} (must be at least 1 character)")]
    InvalidPrecision(usize),

    /// Requested precision range has `min` above `max`.
    #[error("Invalid precision range: {min}..={max} (min must not exceed max)")]
    InvalidPrecisionRange {
        /// Lower end of the requested range.
        min: usize,
        /// Upper end of the requested range.
        max: usize,
    },

    /// A character of the input is not part of the geohash alphabet.
    #[error("Invalid character in geohash: {0:?}")]
    InvalidCharacter(char),

    /// The input geohash is the empty string.
    #[error("Geohash must not be empty")]
    EmptyGeohash,

    /// A direction component is outside {-1, 0, 1}.
    #[error("Invalid direction: [{d_lat}, {d_lon}] (components must be -1, 0, or 1)")]
    InvalidDirection {
        /// North-south component of the rejected direction.
        d_lat: i8,
        /// East-west component of the rejected direction.
        d_lon: i8,
    },
}

/// Result type alias for geohash operations.
pub type Result<T> = std::result::Result<T, GeohashError>;
