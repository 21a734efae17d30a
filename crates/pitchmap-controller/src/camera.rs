use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pitchmap_protocol::geo::LngLat;
use pitchmap_protocol::ids::TransitionId;
use pitchmap_protocol::profile::{CameraProfile, PitchRamp, SidebarLayout};
use pitchmap_protocol::surface::{CameraSurface, CameraTransition};
use tracing::{debug, warn};

use crate::geometry::{compute_padding, home_zoom, pitch_for_zoom};
use crate::state::{CameraMotive, SuppressionState, ViewportState};

/// What the runtime still owes a transition once its move-end arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionFollowUp {
    pub release: Option<CameraMotive>,
    pub reveal_sidebar: bool,
    pub reapply_padding: bool,
}

/// Owns the outstanding camera animation: engages the matching suppression
/// flag synchronously before each request and releases it when that request's
/// move-end is observed. A newer request simply supersedes at the surface;
/// nothing is queued, and a superseded transition's follow-up either fires on
/// its late move-end or is never delivered, both of which are safe.
pub struct CameraController {
    surface: Arc<dyn CameraSurface>,
    viewport: Arc<ViewportState>,
    camera: CameraProfile,
    layout: SidebarLayout,
    pitch: PitchRamp,
    suppression: Mutex<SuppressionState>,
    follow_ups: Mutex<HashMap<TransitionId, TransitionFollowUp>>,
}

impl CameraController {
    pub fn new(
        surface: Arc<dyn CameraSurface>,
        viewport: Arc<ViewportState>,
        camera: CameraProfile,
        layout: SidebarLayout,
        pitch: PitchRamp,
    ) -> Self {
        Self {
            surface,
            viewport,
            camera,
            layout,
            pitch,
            suppression: Mutex::new(SuppressionState::default()),
            follow_ups: Mutex::new(HashMap::new()),
        }
    }

    /// Flies back to the home view at pitch zero. Selection clearing is the
    /// caller's responsibility before invoking this.
    pub async fn reset_view(&self, reveal_sidebar: bool) {
        self.engage(CameraMotive::ViewReset);
        let viewport = self.viewport.size();
        let transition = CameraTransition::fly_to()
            .center(self.camera.home_center)
            .zoom(home_zoom(&self.camera, &self.layout, viewport.width))
            .pitch(0.0)
            .speed(self.camera.reset_speed);
        self.request(
            transition,
            TransitionFollowUp {
                release: Some(CameraMotive::ViewReset),
                reveal_sidebar,
                reapply_padding: true,
            },
        )
        .await;
    }

    /// Tight tilted view over one team's pitch.
    pub async fn focus_team(&self, position: LngLat) {
        self.engage(CameraMotive::MarkerFocus);
        let transition = CameraTransition::fly_to()
            .center(position)
            .zoom(self.camera.focus_zoom)
            .pitch(self.camera.focus_pitch);
        self.request(
            transition,
            TransitionFollowUp {
                release: Some(CameraMotive::MarkerFocus),
                ..TransitionFollowUp::default()
            },
        )
        .await;
    }

    /// Zooms just past a cluster's expansion zoom so it breaks apart.
    pub async fn focus_cluster(&self, center: LngLat, expansion_zoom: f64) {
        self.engage(CameraMotive::MarkerFocus);
        let transition = CameraTransition::fly_to()
            .center(center)
            .zoom(expansion_zoom + self.camera.cluster_zoom_increment)
            .speed(self.camera.cluster_focus_speed);
        self.request(
            transition,
            TransitionFollowUp {
                release: Some(CameraMotive::MarkerFocus),
                ..TransitionFollowUp::default()
            },
        )
        .await;
    }

    /// Eases the camera padding to match the current sidebar occupancy. No
    /// suppression: a padding ease changes no zoom, so the pitch listener
    /// stays quiet on its own.
    pub async fn apply_padding(&self) {
        let padding = compute_padding(&self.layout, self.viewport.sidebar(), self.viewport.size());
        let transition = CameraTransition::ease_to()
            .padding(padding)
            .duration_ms(self.layout.padding_ease_ms);
        if let Err(error) = self.surface.request_transition(transition).await {
            warn!(%error, "camera padding ease failed");
        }
    }

    /// Settles one move-end. Unknown or absent transition ids (user pans,
    /// superseded animations whose id was already consumed) release nothing.
    pub fn handle_move_end(&self, transition: Option<TransitionId>) -> TransitionFollowUp {
        let follow_up = transition
            .and_then(|id| {
                self.follow_ups
                    .lock()
                    .expect("camera follow-up lock poisoned")
                    .remove(&id)
            })
            .unwrap_or_default();
        if let Some(motive) = follow_up.release {
            self.release(motive);
        }
        follow_up
    }

    /// Reactive pitch recalculation, skipped while any suppression flag is
    /// engaged so it cannot fight a programmatic animation.
    pub async fn handle_zoom_changed(&self, zoom: f64) {
        if self.pitch_suppressed() {
            debug!(zoom, "pitch recalculation suppressed");
            return;
        }
        let pitch = pitch_for_zoom(&self.pitch, zoom);
        if let Err(error) = self.surface.set_pitch(pitch).await {
            warn!(%error, "pitch update failed");
        }
    }

    pub fn begin_touch_gesture(&self) {
        self.engage(CameraMotive::TouchGesture);
    }

    pub fn end_touch_gesture(&self) {
        self.release(CameraMotive::TouchGesture);
    }

    pub fn pitch_suppressed(&self) -> bool {
        self.suppression
            .lock()
            .expect("camera suppression lock poisoned")
            .is_engaged()
    }

    pub async fn current_zoom(&self) -> Option<f64> {
        match self.surface.zoom().await {
            Ok(zoom) => Some(zoom),
            Err(error) => {
                warn!(%error, "current zoom lookup failed");
                None
            }
        }
    }

    pub async fn resize_surface(&self) {
        if let Err(error) = self.surface.resize().await {
            warn!(%error, "surface resize failed");
        }
    }

    /// Flips scroll-zoom/drag/touch gestures as one unit and returns the new
    /// state for button labeling; failures leave the state untouched.
    pub async fn toggle_gestures(&self) -> bool {
        let enabled = match self.surface.gestures_enabled().await {
            Ok(enabled) => enabled,
            Err(error) => {
                warn!(%error, "gesture state lookup failed");
                return false;
            }
        };
        let next = !enabled;
        if let Err(error) = self.surface.set_gestures_enabled(next).await {
            warn!(%error, "gesture toggle failed");
            return enabled;
        }
        next
    }

    fn engage(&self, motive: CameraMotive) {
        self.suppression
            .lock()
            .expect("camera suppression lock poisoned")
            .engage(motive);
    }

    fn release(&self, motive: CameraMotive) {
        self.suppression
            .lock()
            .expect("camera suppression lock poisoned")
            .release(motive);
    }

    async fn request(&self, transition: CameraTransition, follow_up: TransitionFollowUp) {
        match self.surface.request_transition(transition).await {
            Ok(id) => {
                self.follow_ups
                    .lock()
                    .expect("camera follow-up lock poisoned")
                    .insert(id, follow_up);
            }
            Err(error) => {
                if let Some(motive) = follow_up.release {
                    self.release(motive);
                }
                warn!(%error, "camera transition request failed");
            }
        }
    }
}
