use serde::{Deserialize, Serialize};

use crate::geo::{LngLat, ViewportSize};
use crate::ids::{ClusterId, TeamSlug, TransitionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveEndedEvent {
    /// Transition handle when the settled motion was requested by the widget;
    /// `None` for user-driven pans and zooms.
    pub transition: Option<TransitionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomChangedEvent {
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerClickedEvent {
    pub slug: TeamSlug,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterClickedEvent {
    pub cluster: ClusterId,
    pub center: LngLat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportResizedEvent {
    pub viewport: ViewportSize,
}

/// Everything the mapping surface reports back to the widget core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    MoveEnded(MoveEndedEvent),
    ZoomChanged(ZoomChangedEvent),
    TouchGestureStarted,
    TouchGestureEnded,
    MarkerClicked(MarkerClickedEvent),
    ClusterClicked(ClusterClickedEvent),
    ViewportResized(ViewportResizedEvent),
}
