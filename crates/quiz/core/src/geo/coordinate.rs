use std::fmt;

use super::ArcPoint;

/// Latitude/longitude pair in degrees.
///
/// Value type: always passed by copy, never mutated in place by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const ORIGIN: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Interprets a projected arc point: `x` is longitude, `y` is latitude.
    pub const fn from_xy(point: ArcPoint) -> Self {
        Self {
            latitude: point[1],
            longitude: point[0],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns this coordinate with longitude wrapped into `[-180, 180)` and
    /// latitude clamped into `[-90, 90]`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            latitude: clamp_latitude(self.latitude),
            longitude: wrap_longitude(self.longitude),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.1}°{} {:.1}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Wraps a longitude into `[-180, 180)` using modular arithmetic.
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Clamps a latitude into `[-90, 90]`.
pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.clamp(-90.0, 90.0)
}
