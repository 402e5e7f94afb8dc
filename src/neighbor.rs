//! Adjacent cell resolution.
//!
//! A neighbor is found without any lookup tables: decode the geohash to its
//! cell center, step the center by one full cell span per requested axis,
//! and re-encode the target at the same precision. Because the step size
//! comes from the decoded cell itself, the same code handles every precision
//! and every position on the grid.
//!
//! Two edges of the coordinate plane need care. Longitude is periodic, so a
//! step past 180 degrees wraps around the antimeridian and comes back in
//! the west. Latitude is not, so a step past a pole clamps to the polar row
//! and the poleward neighbor of a polar cell is the cell itself.

use crate::codec::{decode, encode};
use crate::error::{GeohashError, Result};
use crate::types::{
    DecodedCoordinate, Direction, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

/// Maps an arbitrary longitude back into [-180, 180] by wrapping around the
/// antimeridian. In-range values pass through untouched, so 180 stays 180.
fn wrap_longitude(longitude: f64) -> f64 {
    if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        longitude
    } else {
        (longitude - MIN_LONGITUDE).rem_euclid(MAX_LONGITUDE - MIN_LONGITUDE) + MIN_LONGITUDE
    }
}

/// Target point one cell step away from a decoded cell center.
///
/// Steps are two error widths long, which is exactly one cell span per
/// axis. Latitude clamps at the poles; longitude wraps.
fn target_point(decoded: &DecodedCoordinate, direction: Direction) -> (f64, f64) {
    let latitude = decoded.latitude + f64::from(direction.d_lat) * decoded.latitude_error * 2.0;
    let longitude = decoded.longitude + f64::from(direction.d_lon) * decoded.longitude_error * 2.0;

    (
        latitude.clamp(MIN_LATITUDE, MAX_LATITUDE),
        wrap_longitude(longitude),
    )
}

/// Resolves the geohash of the cell adjacent to `geohash` in `direction`.
///
/// The result has the same length as the input. Crossing the antimeridian
/// wraps to the far side of the grid; stepping poleward from a polar-row
/// cell returns the cell itself, since there is no cell beyond the pole.
/// Output is always lowercase regardless of input case.
///
/// # Arguments
///
/// * `geohash` - Cell to start from
/// * `direction` - Per-axis steps, each component -1, 0, or 1
///
/// # Errors
///
/// * [`GeohashError::InvalidDirection`] if a direction component is outside {-1, 0, 1}
/// * [`GeohashError::EmptyGeohash`] if `geohash` is empty
/// * [`GeohashError::InvalidCharacter`] if `geohash` contains a character outside the alphabet
///
/// # Examples
///
/// ```
/// use geohash_core::{neighbor, Direction};
///
/// assert_eq!(neighbor("dqcjq", Direction::NORTH).unwrap(), "dqcjw");
/// assert_eq!(neighbor("dqcjq", Direction::SOUTH_WEST).unwrap(), "dqcjj");
/// ```
pub fn neighbor(geohash: &str, direction: Direction) -> Result<String> {
    if !direction.is_valid() {
        return Err(GeohashError::InvalidDirection {
            d_lat: direction.d_lat,
            d_lon: direction.d_lon,
        });
    }

    let decoded = decode(geohash)?;
    let (latitude, longitude) = target_point(&decoded, direction);
    encode(latitude, longitude, geohash.len())
}

/// Resolves all eight adjacent cells, clockwise from north.
///
/// The order matches [`Direction::COMPASS`]: north, north-east, east,
/// south-east, south, south-west, west, north-west. At a pole or across the
/// antimeridian the usual eight distinct neighbors collapse onto fewer
/// cells, and the returned list repeats entries accordingly.
///
/// # Errors
///
/// * [`GeohashError::EmptyGeohash`] if `geohash` is empty
/// * [`GeohashError::InvalidCharacter`] if `geohash` contains a character outside the alphabet
///
/// # Examples
///
/// ```
/// use geohash_core::neighbors;
///
/// let ring = neighbors("dqcjq").unwrap();
/// assert_eq!(ring.len(), 8);
/// assert_eq!(ring[0], "dqcjw");
/// assert_eq!(ring[5], "dqcjj");
/// ```
pub fn neighbors(geohash: &str) -> Result<Vec<String>> {
    let decoded = decode(geohash)?;
    let precision = geohash.len();

    Direction::COMPASS
        .iter()
        .map(|&direction| {
            let (latitude, longitude) = target_point(&decoded, direction);
            encode(latitude, longitude, precision)
        })
        .collect()
}

/// Resolves the 3x3 block of cells centered on `geohash`.
///
/// Returns the eight neighbors in [`Direction::COMPASS`] order followed by
/// the (lowercased) cell itself, nine entries in total. This is the usual
/// search set for radius queries: a point near a cell edge always falls
/// within the block.
///
/// # Errors
///
/// * [`GeohashError::EmptyGeohash`] if `geohash` is empty
/// * [`GeohashError::InvalidCharacter`] if `geohash` contains a character outside the alphabet
///
/// # Examples
///
/// ```
/// use geohash_core::expand;
///
/// let block = expand("dqcjq").unwrap();
/// assert_eq!(block.len(), 9);
/// assert_eq!(block[8], "dqcjq");
/// ```
pub fn expand(geohash: &str) -> Result<Vec<String>> {
    let mut cells = neighbors(geohash)?;
    cells.push(geohash.to_ascii_lowercase());
    Ok(cells)
}
