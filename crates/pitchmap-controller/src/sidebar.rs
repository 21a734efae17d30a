use std::sync::Arc;

use pitchmap_protocol::directory::{SidebarHost, SidebarVisibility};
use tracing::warn;

use crate::state::ViewportState;

/// Mutates sidebar occupancy through the host collaborator. Safe before the
/// sidebar DOM exists: the host reports the miss and state stays unchanged.
/// Padding recomputation after a change is the runtime's job.
pub struct SidebarController {
    host: Arc<dyn SidebarHost>,
    viewport: Arc<ViewportState>,
}

impl SidebarController {
    pub fn new(host: Arc<dyn SidebarHost>, viewport: Arc<ViewportState>) -> Self {
        Self { host, viewport }
    }

    pub fn show(&self) -> SidebarVisibility {
        self.apply(SidebarVisibility::Shown)
    }

    pub fn hide(&self) -> SidebarVisibility {
        self.apply(SidebarVisibility::Hidden)
    }

    pub fn toggle(&self) -> SidebarVisibility {
        self.apply(self.viewport.sidebar().toggled())
    }

    pub fn visibility(&self) -> SidebarVisibility {
        self.viewport.sidebar()
    }

    fn apply(&self, next: SidebarVisibility) -> SidebarVisibility {
        if !self.host.apply_visibility(next) {
            warn!("sidebar host not present; visibility unchanged");
            return self.viewport.sidebar();
        }
        self.viewport.set_sidebar(next);
        next
    }
}
