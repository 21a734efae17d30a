use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MapWidgetResult;
use crate::event::MapEvent;
use crate::geo::{CameraPadding, LngLat};
use crate::ids::{ClusterId, TeamSlug, TransitionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraTransitionKind {
    FlyTo,
    EaseTo,
}

/// Descriptor of one animated camera transition. Unset fields keep their
/// current camera value; the surface decides interpolation details.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTransition {
    pub kind: CameraTransitionKind,
    pub center: Option<LngLat>,
    pub zoom: Option<f64>,
    pub pitch: Option<f64>,
    pub padding: Option<CameraPadding>,
    pub speed: Option<f64>,
    pub duration_ms: Option<u64>,
}

impl CameraTransition {
    pub fn fly_to() -> Self {
        Self::with_kind(CameraTransitionKind::FlyTo)
    }

    pub fn ease_to() -> Self {
        Self::with_kind(CameraTransitionKind::EaseTo)
    }

    fn with_kind(kind: CameraTransitionKind) -> Self {
        Self {
            kind,
            center: None,
            zoom: None,
            pitch: None,
            padding: None,
            speed: None,
            duration_ms: None,
        }
    }

    pub fn center(mut self, center: LngLat) -> Self {
        self.center = Some(center);
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    pub fn padding(mut self, padding: CameraPadding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterOptions {
    pub radius: f64,
    pub max_zoom: f64,
}

#[async_trait]
pub trait CameraSurface: Send + Sync {
    /// Starts the transition and returns a handle echoed back on the matching
    /// `MoveEnded` event. A new request supersedes any in-flight one at the
    /// surface's discretion; the surface never queues.
    async fn request_transition(&self, transition: CameraTransition)
        -> MapWidgetResult<TransitionId>;
    async fn set_pitch(&self, pitch: f64) -> MapWidgetResult<()>;
    async fn zoom(&self) -> MapWidgetResult<f64>;
    async fn resize(&self) -> MapWidgetResult<()>;
    async fn set_gestures_enabled(&self, enabled: bool) -> MapWidgetResult<()>;
    async fn gestures_enabled(&self) -> MapWidgetResult<bool>;
}

#[async_trait]
pub trait MarkerSurface: Send + Sync {
    async fn place_marker(&self, slug: &TeamSlug, position: LngLat) -> MapWidgetResult<()>;
    async fn has_marker(&self, slug: &TeamSlug) -> MapWidgetResult<bool>;
    async fn set_marker_selected(&self, slug: &TeamSlug, selected: bool) -> MapWidgetResult<()>;
    async fn set_marker_hidden(&self, slug: &TeamSlug, hidden: bool) -> MapWidgetResult<()>;
}

#[async_trait]
pub trait ClusterSurface: Send + Sync {
    async fn configure_clustering(&self, options: ClusterOptions) -> MapWidgetResult<()>;
    async fn cluster_expansion_zoom(&self, cluster: ClusterId) -> MapWidgetResult<f64>;
}

#[async_trait]
pub trait MapEventSubscription: Send {
    async fn next_event(&mut self) -> MapWidgetResult<Option<MapEvent>>;
}

pub type MapEventStream = Box<dyn MapEventSubscription>;

#[async_trait]
pub trait MapEventSource: Send + Sync {
    async fn subscribe(&self) -> MapWidgetResult<MapEventStream>;
}

pub trait MapSurface:
    CameraSurface + MarkerSurface + ClusterSurface + MapEventSource + Send + Sync
{
}

impl<T> MapSurface for T where
    T: CameraSurface + MarkerSurface + ClusterSurface + MapEventSource + Send + Sync
{
}
