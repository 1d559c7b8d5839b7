//! Geometry Resolver: coordinates, topology types, and centroid resolution.
//!
//! A country outline is stored as nested signed indices into a shared
//! [`ArcTable`]. [`resolve_centroid`] turns one outline into a single
//! [`Coordinate`] the globe can be pointed at.
mod centroid;
mod coordinate;
mod error;
mod topology;

pub use centroid::{extract_coordinates, mean_coordinate, outer_ring, resolve_centroid};
pub use coordinate::{Coordinate, clamp_latitude, wrap_longitude};
pub use error::GeometryError;
pub use topology::{ArcIndices, ArcPoint, ArcTable, Atlas, CountryRegion, ShapeKind};
