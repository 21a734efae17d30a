//! Controllers keeping camera state, marker visibility, sidebar occupancy,
//! and the selected team mutually consistent, plus the `MapWidget` runtime
//! that owns the surface event loop.

pub mod camera;
pub mod debounce;
pub mod filters;
pub mod geometry;
pub mod markers;
pub mod runtime;
pub mod selection;
pub mod sidebar;
pub mod state;

pub use camera::{CameraController, TransitionFollowUp};
pub use debounce::Debouncer;
pub use filters::FilterController;
pub use markers::{MarkerBuildReport, MarkerLayer};
pub use runtime::MapWidget;
pub use selection::SelectionController;
pub use sidebar::SidebarController;
pub use state::{CameraMotive, SuppressionState, ViewportState, WidgetSessionState};
