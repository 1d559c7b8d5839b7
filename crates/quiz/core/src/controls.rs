//! Directional and zoom controls applied to the view.
//!
//! Controls build candidate targets for the animator, so this is where
//! longitude wrapping and latitude clamping happen.
use crate::config::QuizConfig;
use crate::geo::{Coordinate, clamp_latitude, wrap_longitude};

/// A single press of a view control.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Control {
    RotateWest,
    RotateEast,
    TiltNorth,
    TiltSouth,
    ZoomIn,
    ZoomOut,
}

impl Control {
    /// Returns true if this control changes the orientation (as opposed to zoom).
    pub const fn moves_orientation(self) -> bool {
        !matches!(self, Self::ZoomIn | Self::ZoomOut)
    }

    /// Applies one step of this control to `view`.
    pub fn apply(self, view: ViewState, config: &QuizConfig) -> ViewState {
        let step = config.control_step_degrees;
        let Coordinate {
            latitude,
            longitude,
        } = view.orientation;

        match self {
            Self::RotateWest => view.with_orientation(latitude, wrap_longitude(longitude - step)),
            Self::RotateEast => view.with_orientation(latitude, wrap_longitude(longitude + step)),
            Self::TiltNorth => view.with_orientation(clamp_latitude(latitude + step), longitude),
            Self::TiltSouth => view.with_orientation(clamp_latitude(latitude - step), longitude),
            Self::ZoomIn => view.with_zoom((view.zoom + config.zoom_step).min(config.zoom_max)),
            Self::ZoomOut => view.with_zoom((view.zoom - config.zoom_step).max(config.zoom_min)),
        }
    }
}

/// What the view is asked to show: an orientation and a zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    pub orientation: Coordinate,
    pub zoom: f64,
}

impl ViewState {
    pub const fn new(orientation: Coordinate, zoom: f64) -> Self {
        Self { orientation, zoom }
    }

    /// Starting view: facing the origin at minimum zoom.
    pub fn initial(config: &QuizConfig) -> Self {
        Self::new(Coordinate::ORIGIN, config.zoom_min)
    }

    #[must_use]
    pub fn with_orientation(self, latitude: f64, longitude: f64) -> Self {
        Self {
            orientation: Coordinate::new(latitude, longitude),
            ..self
        }
    }

    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }
}
