//! Geohash Core Library
//!
//! A pure geohash codec: encode coordinates into base-32 geohash strings,
//! decode geohashes back into coordinates and bounding boxes, and resolve
//! adjacent cells in any compass direction.
//!
//! Encoding, decoding, and neighbor lookups all share one alphabet table and
//! one bit-interleaving rule, so the three operations can never disagree
//! about where a cell sits or how long its hash is.
//!
//! ## Architecture
//!
//! - [`codec`]: Bit-level encoding and decoding
//! - [`neighbor`]: Adjacent cell resolution
//! - [`types`]: Bounding boxes, decoded coordinates, directions
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use geohash_core::{decode, encode, neighbor, Direction};
//!
//! let hash = encode(37.8324, 112.5584, 9).unwrap();
//! assert_eq!(hash, "ww8p1r4t8");
//!
//! let spot = decode(&hash).unwrap();
//! assert!((spot.latitude - 37.8324).abs() < 0.0001);
//! assert!((spot.longitude - 112.5584).abs() < 0.0001);
//!
//! assert_eq!(neighbor("dqcjq", Direction::NORTH).unwrap(), "dqcjw");
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod codec;
pub mod error;
pub mod neighbor;
pub mod types;

pub use codec::{
    decode, decode_bbox, encode, encode_all_precisions, encode_range_precisions, BASE32_ALPHABET,
};
pub use error::{GeohashError, Result};
pub use neighbor::{expand, neighbor, neighbors};
pub use types::{
    BoundingBox, DecodedCoordinate, Direction, DEFAULT_PRECISION, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
