use serde::{Deserialize, Serialize};

use crate::geo::LngLat;

/// Camera tuning. Defaults reproduce the production overlay: a home view over
/// the Irish Sea covering the whole directory, a fast reset, and a tight
/// tilted view when focusing one team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraProfile {
    pub home_center: LngLat,
    pub home_zoom_wide: f64,
    pub home_zoom_narrow: f64,
    pub reset_speed: f64,
    pub focus_zoom: f64,
    pub focus_pitch: f64,
    pub cluster_focus_speed: f64,
    pub cluster_zoom_increment: f64,
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self {
            home_center: LngLat {
                lng: -3.288305,
                lat: 54.277422,
            },
            home_zoom_wide: 5.2,
            home_zoom_narrow: 4.0,
            reset_speed: 2.5,
            focus_zoom: 16.0,
            focus_pitch: 60.0,
            cluster_focus_speed: 0.8,
            cluster_zoom_increment: 2.0,
        }
    }
}

/// Sidebar-aware layout: the breakpoint below which the sidebar renders as a
/// bottom sheet, and the fixed sidebar width used for left padding above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarLayout {
    pub narrow_breakpoint_px: f64,
    pub sidebar_width_rem: f64,
    pub base_font_px: f64,
    pub padding_ease_ms: u64,
}

impl Default for SidebarLayout {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768.0,
            sidebar_width_rem: 30.0,
            base_font_px: 16.0,
            padding_ease_ms: 1_000,
        }
    }
}

/// Linear zoom-to-pitch interpolation endpoints, clamped flat outside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchRamp {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub min_pitch: f64,
    pub max_pitch: f64,
}

impl Default for PitchRamp {
    fn default() -> Self {
        Self {
            min_zoom: 5.23,
            max_zoom: 16.0,
            min_pitch: 0.0,
            max_pitch: 60.0,
        }
    }
}

/// Clustering tuning: spatial-index radius and the zoom threshold below which
/// individual markers are hidden in favor of clusters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterProfile {
    pub radius: f64,
    pub threshold_wide: f64,
    pub threshold_narrow: f64,
}

impl Default for ClusterProfile {
    fn default() -> Self {
        Self {
            radius: 50.0,
            threshold_wide: 6.0,
            threshold_narrow: 7.0,
        }
    }
}

/// Bounded fixed-interval poll for CMS content-load completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPollProfile {
    pub interval_ms: u64,
    pub max_attempts: u32,
}

impl Default for ContentPollProfile {
    fn default() -> Self {
        Self {
            interval_ms: 1_000,
            max_attempts: 120,
        }
    }
}

/// Window-resize handling: debounce for padding recomputation and the short
/// delay before resizing the surface after the overlay is reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeProfile {
    pub debounce_ms: u64,
    pub reopen_delay_ms: u64,
}

impl Default for ResizeProfile {
    fn default() -> Self {
        Self {
            debounce_ms: 1_000,
            reopen_delay_ms: 500,
        }
    }
}

/// Filter flow tuning: the featured preset that hides the capacity badge
/// while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterProfile {
    pub featured_preset: String,
}

impl Default for FilterProfile {
    fn default() -> Self {
        Self {
            featured_preset: "wsl".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetTuning {
    pub camera: CameraProfile,
    pub layout: SidebarLayout,
    pub pitch: PitchRamp,
    pub cluster: ClusterProfile,
    pub content: ContentPollProfile,
    pub resize: ResizeProfile,
    pub filter: FilterProfile,
}
