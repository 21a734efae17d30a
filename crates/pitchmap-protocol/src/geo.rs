use serde::{Deserialize, Serialize};

use crate::error::{MapWidgetError, MapWidgetResult};

/// Geographic position in WGS84 longitude/latitude order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> MapWidgetResult<Self> {
        if !lng.is_finite() || !lat.is_finite() {
            return Err(MapWidgetError::InvalidCoordinate(format!(
                "non-finite longitude/latitude pair: {lng}, {lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(MapWidgetError::InvalidCoordinate(format!(
                "longitude out of [-180, 180]: {lng}"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(MapWidgetError::InvalidCoordinate(format!(
                "latitude out of [-90, 90]: {lat}"
            )));
        }
        Ok(Self { lng, lat })
    }
}

/// Camera padding in logical pixels, one value per viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl CameraPadding {
    pub const NONE: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn left_only(left: f64) -> Self {
        Self {
            left,
            ..Self::NONE
        }
    }

    pub fn bottom_only(bottom: f64) -> Self {
        Self {
            bottom,
            ..Self::NONE
        }
    }
}

/// Logical-pixel size of the map's host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
