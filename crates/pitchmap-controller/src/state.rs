use std::sync::Mutex;

use pitchmap_protocol::directory::SidebarVisibility;
use pitchmap_protocol::geo::ViewportSize;

/// Why the widget requested the camera motion (or gesture) that is currently
/// suppressing reactive pitch recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMotive {
    MarkerFocus,
    ViewReset,
    TouchGesture,
}

/// One flag per motive. Pitch recalculation is skipped while any flag is
/// engaged; releasing clears only the given motive, so overlapping causes
/// (a touch gesture during a reset) stay suppressed until each one ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuppressionState {
    marker_focus: bool,
    view_reset: bool,
    touch_gesture: bool,
}

impl SuppressionState {
    pub fn engage(&mut self, motive: CameraMotive) {
        *self.slot(motive) = true;
    }

    pub fn release(&mut self, motive: CameraMotive) {
        *self.slot(motive) = false;
    }

    pub fn is_engaged(self) -> bool {
        self.marker_focus || self.view_reset || self.touch_gesture
    }

    pub fn motive_engaged(self, motive: CameraMotive) -> bool {
        match motive {
            CameraMotive::MarkerFocus => self.marker_focus,
            CameraMotive::ViewReset => self.view_reset,
            CameraMotive::TouchGesture => self.touch_gesture,
        }
    }

    fn slot(&mut self, motive: CameraMotive) -> &mut bool {
        match motive {
            CameraMotive::MarkerFocus => &mut self.marker_focus,
            CameraMotive::ViewReset => &mut self.view_reset,
            CameraMotive::TouchGesture => &mut self.touch_gesture,
        }
    }
}

/// Session lifecycle flags, one typed value instead of ambient globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetSessionState {
    pub surface_ready: bool,
    pub content_loaded: bool,
    pub filters_bound: bool,
    /// A featured-filter request arrived before content finished loading and
    /// should be replayed once filters are bound.
    pub featured_filter_pending: bool,
}

impl WidgetSessionState {
    pub fn is_interactive(self) -> bool {
        self.surface_ready && self.content_loaded
    }
}

/// Shared snapshot of the host viewport and sidebar occupancy, read on every
/// padding recomputation.
#[derive(Debug)]
pub struct ViewportState {
    size: Mutex<ViewportSize>,
    sidebar: Mutex<SidebarVisibility>,
}

impl ViewportState {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size: Mutex::new(size),
            sidebar: Mutex::new(SidebarVisibility::default()),
        }
    }

    pub fn size(&self) -> ViewportSize {
        *self.size.lock().expect("viewport size lock poisoned")
    }

    pub fn set_size(&self, size: ViewportSize) {
        *self.size.lock().expect("viewport size lock poisoned") = size;
    }

    pub fn sidebar(&self) -> SidebarVisibility {
        *self.sidebar.lock().expect("sidebar visibility lock poisoned")
    }

    pub fn set_sidebar(&self, visibility: SidebarVisibility) {
        *self.sidebar.lock().expect("sidebar visibility lock poisoned") = visibility;
    }
}
