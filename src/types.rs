//! Value types and constants shared across the geohash codec.
//!
//! The codec deals in plain WGS84 degrees. Latitude grows northward in
//! [-90, 90], longitude grows eastward in [-180, 180], and every cell is an
//! axis-aligned [`BoundingBox`] in that plane.

use serde::{Deserialize, Serialize};

/// Minimum valid latitude in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
/// Maximum valid latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Minimum valid longitude in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Maximum valid longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Geohash length used when a caller has no specific precision requirement.
///
/// Nine characters resolve to cells of roughly 4.8 m x 4.8 m, which is
/// tighter than consumer GPS accuracy.
pub const DEFAULT_PRECISION: usize = 9;

/// Axis selected by the bit-interleaving parity rule.
///
/// Geohash bits alternate between the two axes starting with longitude, so
/// even global bit indices narrow longitude and odd indices narrow latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// North-south axis.
    Latitude,
    /// East-west axis.
    Longitude,
}

/// Axis-aligned cell in the latitude/longitude plane.
///
/// Both encoding and decoding walk the bit sequence of a geohash by
/// repeatedly halving one of these boxes, starting from [`BoundingBox::world`].
/// The box a geohash decodes to covers every coordinate that encodes back to
/// that geohash.
///
/// # Examples
///
/// ```
/// use geohash_core::decode_bbox;
///
/// let bbox = decode_bbox("ww8p1r4t8").unwrap();
/// assert!(bbox.contains(37.8324, 112.5584));
/// assert!(bbox.latitude_span() < 0.0001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge in degrees.
    pub min_lat: f64,
    /// Northern edge in degrees.
    pub max_lat: f64,
    /// Western edge in degrees.
    pub min_lon: f64,
    /// Eastern edge in degrees.
    pub max_lon: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its four edges.
    #[must_use]
    pub const fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// The box covering the whole coordinate plane.
    ///
    /// Every encode and decode starts its range halving from this box.
    #[must_use]
    pub const fn world() -> Self {
        Self::new(MIN_LATITUDE, MAX_LATITUDE, MIN_LONGITUDE, MAX_LONGITUDE)
    }

    /// Center of the box as a `(latitude, longitude)` pair.
    #[must_use]
    pub const fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// North-south extent of the box in degrees.
    #[must_use]
    pub const fn latitude_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// East-west extent of the box in degrees.
    #[must_use]
    pub const fn longitude_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Whether the box contains the given point. Edges count as inside.
    #[must_use]
    pub const fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lon
            && longitude <= self.max_lon
    }

    /// Midpoint of one axis of the box.
    pub(crate) const fn axis_midpoint(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Latitude => (self.min_lat + self.max_lat) / 2.0,
            Axis::Longitude => (self.min_lon + self.max_lon) / 2.0,
        }
    }

    /// Halves the box along one axis, keeping the upper half for a one bit
    /// and the lower half for a zero bit.
    ///
    /// This is the single range-halving step shared by encoding and
    /// decoding; both directions narrow their ranges exclusively through it.
    #[must_use]
    pub(crate) const fn halved(self, axis: Axis, upper: bool) -> Self {
        let mid = self.axis_midpoint(axis);
        let mut next = self;
        match (axis, upper) {
            (Axis::Latitude, true) => next.min_lat = mid,
            (Axis::Latitude, false) => next.max_lat = mid,
            (Axis::Longitude, true) => next.min_lon = mid,
            (Axis::Longitude, false) => next.max_lon = mid,
        }
        next
    }
}

/// Coordinate decoded from a geohash, with the half-width of its cell on
/// each axis.
///
/// `latitude` and `longitude` are the cell center. The true point that
/// produced the geohash lies within `latitude_error` degrees north-south and
/// `longitude_error` degrees east-west of that center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedCoordinate {
    /// Cell center latitude in degrees.
    pub latitude: f64,
    /// Cell center longitude in degrees.
    pub longitude: f64,
    /// Half the cell height in degrees.
    pub latitude_error: f64,
    /// Half the cell width in degrees.
    pub longitude_error: f64,
}

/// Offset to an adjacent cell, one component per axis.
///
/// `d_lat` steps north (+1) or south (-1); `d_lon` steps east (+1) or
/// west (-1). Zero leaves the axis alone, so [`Direction::IDENTITY`] names
/// the cell itself and diagonal steps combine both axes.
///
/// # Examples
///
/// ```
/// use geohash_core::{neighbor, Direction};
///
/// assert_eq!(neighbor("dqcjq", Direction::NORTH).unwrap(), "dqcjw");
/// assert_eq!(neighbor("dqcjq", Direction::new(1, 0)).unwrap(), "dqcjw");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    /// North-south step: +1 north, -1 south, 0 unchanged.
    pub d_lat: i8,
    /// East-west step: +1 east, -1 west, 0 unchanged.
    pub d_lon: i8,
}

impl Direction {
    /// One cell north.
    pub const NORTH: Self = Self::new(1, 0);
    /// One cell north-east.
    pub const NORTH_EAST: Self = Self::new(1, 1);
    /// One cell east.
    pub const EAST: Self = Self::new(0, 1);
    /// One cell south-east.
    pub const SOUTH_EAST: Self = Self::new(-1, 1);
    /// One cell south.
    pub const SOUTH: Self = Self::new(-1, 0);
    /// One cell south-west.
    pub const SOUTH_WEST: Self = Self::new(-1, -1);
    /// One cell west.
    pub const WEST: Self = Self::new(0, -1);
    /// One cell north-west.
    pub const NORTH_WEST: Self = Self::new(1, -1);
    /// No step on either axis. Resolving this direction yields the cell itself.
    pub const IDENTITY: Self = Self::new(0, 0);

    /// The eight compass directions, clockwise from north.
    ///
    /// [`crate::neighbors`] returns adjacent cells in exactly this order.
    pub const COMPASS: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    /// Creates a direction from per-axis steps.
    #[must_use]
    pub const fn new(d_lat: i8, d_lon: i8) -> Self {
        Self { d_lat, d_lon }
    }

    /// Whether both components are -1, 0, or 1.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.d_lat >= -1 && self.d_lat <= 1 && self.d_lon >= -1 && self.d_lon <= 1
    }
}
