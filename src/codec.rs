//! Geohash encoding and decoding.
//!
//! A geohash interleaves two binary searches, one per axis, into a single
//! bit string: even bits (counting from zero) halve the longitude range and
//! odd bits halve the latitude range. Each group of five bits, most
//! significant first, selects one symbol of [`BASE32_ALPHABET`]. Decoding
//! replays the same halving steps from the stored bits, so a geohash names a
//! bounding box rather than a point; [`decode`] reports the box center along
//! with the half-cell error on each axis.
//!
//! The 32-symbol alphabet `0123456789bcdefghjkmnpqrstuvwxyz` skips the
//! easily misread letters `a`, `i`, `l`, and `o`. Lookups fold ASCII
//! uppercase input to lowercase, so `"WW8P1R4T8"` and `"ww8p1r4t8"` decode
//! identically.

use crate::error::{GeohashError, Result};
use crate::types::{
    Axis, BoundingBox, DecodedCoordinate, DEFAULT_PRECISION, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE,
};

/// The geohash base-32 alphabet, in encoding order.
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits consumed per base-32 symbol.
const BITS_PER_CHAR: usize = 5;

/// Axis narrowed by a given global bit position.
///
/// Bits alternate starting with longitude. Encode and decode both route
/// through this rule, so the interleaving order is defined in one place.
const fn axis_for_bit(bit_index: usize) -> Axis {
    if bit_index % 2 == 0 {
        Axis::Longitude
    } else {
        Axis::Latitude
    }
}

/// Position of one lowercase symbol in [`BASE32_ALPHABET`], if present.
fn base32_index(symbol: char) -> Option<usize> {
    BASE32_ALPHABET.iter().position(|&code| char::from(code) == symbol)
}

/// Alphabet symbol for an accumulated 5-bit value.
fn base32_symbol(value: usize) -> char {
    char::from(BASE32_ALPHABET[value])
}

/// Checks that a coordinate pair is finite and inside the valid ranges.
fn validate_coordinate(latitude: f64, longitude: f64) -> Result<()> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(GeohashError::InvalidLatitude(latitude));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(GeohashError::InvalidLongitude(longitude));
    }
    Ok(())
}

/// Encodes a coordinate into a geohash of exactly `precision` characters.
///
/// Precision is the output length; each extra character divides the cell
/// area by 32. Common sizes at the equator:
///
/// | Precision | Cell size (approx.)  |
/// |-----------|----------------------|
/// | 1         | 5,000 km x 5,000 km  |
/// | 3         | 156 km x 156 km      |
/// | 5         | 4.9 km x 4.9 km      |
/// | 7         | 153 m x 153 m        |
/// | 9         | 4.8 m x 4.8 m        |
/// | 12        | 3.7 cm x 1.9 cm      |
///
/// Points on a cell edge belong to the upper half, so latitude 90 and
/// longitude 180 encode into the north- and east-most cells.
///
/// # Arguments
///
/// * `latitude` - Degrees north in [-90, 90]
/// * `longitude` - Degrees east in [-180, 180]
/// * `precision` - Number of characters to produce, at least 1
///
/// # Errors
///
/// * [`GeohashError::InvalidLatitude`] if `latitude` is out of range or not finite
/// * [`GeohashError::InvalidLongitude`] if `longitude` is out of range or not finite
/// * [`GeohashError::InvalidPrecision`] if `precision` is zero
///
/// # Examples
///
/// ```
/// use geohash_core::encode;
///
/// let hash = encode(37.8324, 112.5584, 9).unwrap();
/// assert_eq!(hash, "ww8p1r4t8");
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    validate_coordinate(latitude, longitude)?;
    if precision == 0 {
        return Err(GeohashError::InvalidPrecision(precision));
    }

    let mut hash = String::with_capacity(precision);
    let mut bbox = BoundingBox::world();
    let mut value = 0;

    for bit_index in 0..precision * BITS_PER_CHAR {
        let axis = axis_for_bit(bit_index);
        let coordinate = match axis {
            Axis::Latitude => latitude,
            Axis::Longitude => longitude,
        };

        let upper = coordinate >= bbox.axis_midpoint(axis);
        bbox = bbox.halved(axis, upper);

        value = (value << 1) | usize::from(upper);
        if bit_index % BITS_PER_CHAR == BITS_PER_CHAR - 1 {
            hash.push(base32_symbol(value));
            value = 0;
        }
    }

    Ok(hash)
}

/// Encodes a coordinate at every precision from 1 to [`DEFAULT_PRECISION`].
///
/// Returns the hashes in ascending precision order. Geohashes of the same
/// point nest by prefix, so each entry extends the previous one by a single
/// character.
///
/// # Errors
///
/// * [`GeohashError::InvalidLatitude`] if `latitude` is out of range or not finite
/// * [`GeohashError::InvalidLongitude`] if `longitude` is out of range or not finite
///
/// # Examples
///
/// ```
/// use geohash_core::encode_all_precisions;
///
/// let hashes = encode_all_precisions(37.8324, 112.5584).unwrap();
/// assert_eq!(hashes.len(), 9);
/// assert_eq!(hashes[0], "w");
/// assert_eq!(hashes[8], "ww8p1r4t8");
/// ```
pub fn encode_all_precisions(latitude: f64, longitude: f64) -> Result<Vec<String>> {
    encode_range_precisions(latitude, longitude, 1, DEFAULT_PRECISION)
}

/// Encodes a coordinate at every precision in `min..=max`.
///
/// The point is encoded once at `max` characters and the shorter hashes are
/// taken as prefixes, which is equivalent to encoding each precision
/// separately.
///
/// # Arguments
///
/// * `latitude` - Degrees north in [-90, 90]
/// * `longitude` - Degrees east in [-180, 180]
/// * `min` - Shortest hash length to produce, at least 1
/// * `max` - Longest hash length to produce
///
/// # Errors
///
/// * [`GeohashError::InvalidPrecision`] if `min` is zero
/// * [`GeohashError::InvalidPrecisionRange`] if `min` exceeds `max`
/// * [`GeohashError::InvalidLatitude`] if `latitude` is out of range or not finite
/// * [`GeohashError::InvalidLongitude`] if `longitude` is out of range or not finite
///
/// # Examples
///
/// ```
/// use geohash_core::encode_range_precisions;
///
/// let hashes = encode_range_precisions(37.8324, 112.5584, 3, 5).unwrap();
/// assert_eq!(hashes, ["ww8", "ww8p", "ww8p1"]);
/// ```
pub fn encode_range_precisions(
    latitude: f64,
    longitude: f64,
    min: usize,
    max: usize,
) -> Result<Vec<String>> {
    if min == 0 {
        return Err(GeohashError::InvalidPrecision(min));
    }
    if min > max {
        return Err(GeohashError::InvalidPrecisionRange { min, max });
    }

    let longest = encode(latitude, longitude, max)?;
    Ok((min..=max)
        .map(|precision| longest.chars().take(precision).collect())
        .collect())
}

/// Decodes a geohash into the bounding box it names.
///
/// The box is exact: it covers precisely the coordinates that encode back to
/// this geohash at the same precision. ASCII case is ignored.
///
/// # Errors
///
/// * [`GeohashError::EmptyGeohash`] if `geohash` is empty
/// * [`GeohashError::InvalidCharacter`] if any character is outside the alphabet
///
/// # Examples
///
/// ```
/// use geohash_core::decode_bbox;
///
/// let bbox = decode_bbox("ezs42").unwrap();
/// assert!(bbox.contains(42.605, -5.603));
/// ```
pub fn decode_bbox(geohash: &str) -> Result<BoundingBox> {
    if geohash.is_empty() {
        return Err(GeohashError::EmptyGeohash);
    }

    let mut bbox = BoundingBox::world();
    let mut bit_index = 0;

    for symbol in geohash.chars() {
        let value = base32_index(symbol.to_ascii_lowercase())
            .ok_or(GeohashError::InvalidCharacter(symbol))?;

        for shift in (0..BITS_PER_CHAR).rev() {
            let upper = (value >> shift) & 1 == 1;
            bbox = bbox.halved(axis_for_bit(bit_index), upper);
            bit_index += 1;
        }
    }

    Ok(bbox)
}

/// Decodes a geohash into its cell center and per-axis error bounds.
///
/// The reported errors are half the cell span on each axis: any coordinate
/// that encodes to this geohash lies within `latitude_error` degrees
/// north-south and `longitude_error` degrees east-west of the center.
///
/// # Errors
///
/// * [`GeohashError::EmptyGeohash`] if `geohash` is empty
/// * [`GeohashError::InvalidCharacter`] if any character is outside the alphabet
///
/// # Examples
///
/// ```
/// use geohash_core::decode;
///
/// let spot = decode("ww8p1r4t8").unwrap();
/// assert!((spot.latitude - 37.8324).abs() < 0.0001);
/// assert!((spot.longitude - 112.5584).abs() < 0.0001);
/// ```
pub fn decode(geohash: &str) -> Result<DecodedCoordinate> {
    let bbox = decode_bbox(geohash)?;
    let (latitude, longitude) = bbox.center();

    Ok(DecodedCoordinate {
        latitude,
        longitude,
        latitude_error: bbox.max_lat - latitude,
        longitude_error: bbox.max_lon - longitude,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // decoded edges are exact dyadic fractions

    use super::*;

    #[test]
    fn encode_reference_point() {
        assert_eq!(encode(37.8324, 112.5584, 9).unwrap(), "ww8p1r4t8");
    }

    #[test]
    fn encode_known_cells() {
        assert_eq!(encode(42.605, -5.603, 5).unwrap(), "ezs42");
        assert_eq!(encode(57.649_11, 10.407_44, 11).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn encode_single_character() {
        assert_eq!(encode(0.0, 0.0, 1).unwrap(), "s");
    }

    #[test]
    fn encode_produces_requested_length() {
        for precision in 1..=12 {
            let hash = encode(48.8584, 2.2945, precision).unwrap();
            assert_eq!(hash.len(), precision);
        }
    }

    #[test]
    fn longer_hashes_extend_shorter_ones() {
        let short = encode(37.8324, 112.5584, 5).unwrap();
        let long = encode(37.8324, 112.5584, 12).unwrap();
        assert!(long.starts_with(&short));
    }

    #[test]
    fn encode_accepts_boundary_coordinates() {
        assert_eq!(encode(90.0, 180.0, 3).unwrap().len(), 3);
        assert_eq!(encode(-90.0, -180.0, 3).unwrap().len(), 3);
        assert_eq!(encode(90.0, 0.0, 1).unwrap(), "u");
        assert_eq!(encode(-90.0, -180.0, 1).unwrap(), "0");
    }

    #[test]
    fn encode_rejects_out_of_range_latitude() {
        assert_eq!(
            encode(90.0001, 0.0, 9),
            Err(GeohashError::InvalidLatitude(90.0001))
        );
        assert_eq!(
            encode(-130.0, 0.0, 9),
            Err(GeohashError::InvalidLatitude(-130.0))
        );
        assert!(matches!(
            encode(f64::NAN, 0.0, 9),
            Err(GeohashError::InvalidLatitude(_))
        ));
        assert!(matches!(
            encode(f64::INFINITY, 0.0, 9),
            Err(GeohashError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn encode_rejects_out_of_range_longitude() {
        assert_eq!(
            encode(0.0, 180.0001, 9),
            Err(GeohashError::InvalidLongitude(180.0001))
        );
        assert_eq!(
            encode(0.0, -500.0, 9),
            Err(GeohashError::InvalidLongitude(-500.0))
        );
        assert!(matches!(
            encode(0.0, f64::NEG_INFINITY, 9),
            Err(GeohashError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn encode_rejects_zero_precision() {
        assert_eq!(encode(37.8324, 112.5584, 0), Err(GeohashError::InvalidPrecision(0)));
    }

    #[test]
    fn decode_reference_point() {
        let spot = decode("ww8p1r4t8").unwrap();
        assert!((spot.latitude - 37.8324).abs() < 0.0001);
        assert!((spot.longitude - 112.5584).abs() < 0.0001);
    }

    #[test]
    fn decode_bbox_known_cell() {
        let bbox = decode_bbox("dqcjq").unwrap();
        assert_eq!(bbox.min_lat, 38.891_601_562_5);
        assert_eq!(bbox.max_lat, 38.935_546_875);
        assert_eq!(bbox.min_lon, -77.080_078_125);
        assert_eq!(bbox.max_lon, -77.036_132_812_5);
    }

    #[test]
    fn decode_bbox_single_character() {
        let bbox = decode_bbox("s").unwrap();
        assert_eq!(bbox.min_lat, 0.0);
        assert_eq!(bbox.max_lat, 45.0);
        assert_eq!(bbox.min_lon, 0.0);
        assert_eq!(bbox.max_lon, 45.0);
    }

    #[test]
    fn decode_reports_half_cell_errors() {
        let spot = decode("dqcjq").unwrap();
        let bbox = decode_bbox("dqcjq").unwrap();
        assert_eq!(spot.latitude_error, bbox.latitude_span() / 2.0);
        assert_eq!(spot.longitude_error, bbox.longitude_span() / 2.0);
        assert_eq!(spot.latitude_error, 0.021_972_656_25);
        assert_eq!(spot.longitude_error, 0.021_972_656_25);
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("WW8P1R4T8"), decode("ww8p1r4t8"));
        assert_eq!(decode_bbox("DqCjQ"), decode_bbox("dqcjq"));
    }

    #[test]
    fn decode_rejects_letters_outside_alphabet() {
        for bad in ['a', 'i', 'l', 'o'] {
            assert_eq!(
                decode(&format!("dqcj{bad}")),
                Err(GeohashError::InvalidCharacter(bad))
            );
        }
    }

    #[test]
    fn decode_rejects_punctuation_and_non_ascii() {
        assert_eq!(decode("dq cjq"), Err(GeohashError::InvalidCharacter(' ')));
        assert_eq!(decode("dqcj-"), Err(GeohashError::InvalidCharacter('-')));
        assert_eq!(decode("dqcjü"), Err(GeohashError::InvalidCharacter('ü')));
    }

    #[test]
    fn decode_reports_first_invalid_character() {
        assert_eq!(decode("d!c?q"), Err(GeohashError::InvalidCharacter('!')));
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert_eq!(decode(""), Err(GeohashError::EmptyGeohash));
        assert_eq!(decode_bbox(""), Err(GeohashError::EmptyGeohash));
    }

    #[test]
    fn alphabet_positions_invert_the_table() {
        for (index, &code) in BASE32_ALPHABET.iter().enumerate() {
            assert_eq!(base32_index(char::from(code)), Some(index));
            assert_eq!(base32_symbol(index), char::from(code));
        }
    }

    #[test]
    fn alphabet_skips_misread_letters() {
        for missing in ['a', 'i', 'l', 'o'] {
            assert_eq!(base32_index(missing), None);
        }
    }

    #[test]
    fn encode_all_precisions_returns_every_prefix() {
        let hashes = encode_all_precisions(37.8324, 112.5584).unwrap();
        assert_eq!(hashes.len(), DEFAULT_PRECISION);
        for (index, hash) in hashes.iter().enumerate() {
            assert_eq!(hash.len(), index + 1);
            assert_eq!(*hash, encode(37.8324, 112.5584, index + 1).unwrap());
        }
    }

    #[test]
    fn encode_range_precisions_matches_direct_encoding() {
        let hashes = encode_range_precisions(42.605, -5.603, 2, 6).unwrap();
        assert_eq!(hashes.len(), 5);
        for (index, hash) in hashes.iter().enumerate() {
            assert_eq!(*hash, encode(42.605, -5.603, index + 2).unwrap());
        }
    }

    #[test]
    fn encode_range_precisions_single_length() {
        assert_eq!(
            encode_range_precisions(42.605, -5.603, 5, 5).unwrap(),
            ["ezs42"]
        );
    }

    #[test]
    fn encode_range_precisions_rejects_bad_ranges() {
        assert_eq!(
            encode_range_precisions(42.605, -5.603, 0, 5),
            Err(GeohashError::InvalidPrecision(0))
        );
        assert_eq!(
            encode_range_precisions(42.605, -5.603, 6, 2),
            Err(GeohashError::InvalidPrecisionRange { min: 6, max: 2 })
        );
    }

    #[test]
    fn encode_range_precisions_validates_coordinates() {
        assert_eq!(
            encode_range_precisions(99.0, 0.0, 1, 5),
            Err(GeohashError::InvalidLatitude(99.0))
        );
    }
}
