use pitchmap_protocol::directory::SidebarVisibility;
use pitchmap_protocol::geo::{CameraPadding, ViewportSize};
use pitchmap_protocol::profile::{CameraProfile, ClusterProfile, PitchRamp, SidebarLayout};

/// Sidebar-aware camera padding. Hidden sidebar pads nothing; a visible one
/// pads the left edge by its fixed width on wide viewports and the bottom by
/// half the viewport height where it renders as a bottom sheet.
pub fn compute_padding(
    layout: &SidebarLayout,
    visibility: SidebarVisibility,
    viewport: ViewportSize,
) -> CameraPadding {
    if !visibility.is_shown() {
        return CameraPadding::NONE;
    }
    if viewport.width >= layout.narrow_breakpoint_px {
        CameraPadding::left_only(layout.sidebar_width_rem * layout.base_font_px)
    } else {
        CameraPadding::bottom_only(viewport.height / 2.0)
    }
}

/// Linear zoom-to-pitch interpolation, clamped flat outside the ramp.
pub fn pitch_for_zoom(ramp: &PitchRamp, zoom: f64) -> f64 {
    if zoom <= ramp.min_zoom {
        return ramp.min_pitch;
    }
    if zoom >= ramp.max_zoom {
        return ramp.max_pitch;
    }
    (zoom - ramp.min_zoom) / (ramp.max_zoom - ramp.min_zoom) * (ramp.max_pitch - ramp.min_pitch)
        + ramp.min_pitch
}

/// Zoom below which individual markers hide behind clusters; narrow viewports
/// cluster one zoom level longer.
pub fn cluster_threshold(
    cluster: &ClusterProfile,
    layout: &SidebarLayout,
    viewport_width: f64,
) -> f64 {
    if viewport_width < layout.narrow_breakpoint_px {
        cluster.threshold_narrow
    } else {
        cluster.threshold_wide
    }
}

pub fn home_zoom(camera: &CameraProfile, layout: &SidebarLayout, viewport_width: f64) -> f64 {
    if viewport_width < layout.narrow_breakpoint_px {
        camera.home_zoom_narrow
    } else {
        camera.home_zoom_wide
    }
}

#[cfg(test)]
mod tests {
    use pitchmap_protocol::directory::SidebarVisibility;
    use pitchmap_protocol::geo::{CameraPadding, ViewportSize};
    use pitchmap_protocol::profile::{ClusterProfile, PitchRamp, SidebarLayout};

    use super::{cluster_threshold, compute_padding, pitch_for_zoom};

    #[test]
    fn hidden_sidebar_pads_nothing() {
        let padding = compute_padding(
            &SidebarLayout::default(),
            SidebarVisibility::Hidden,
            ViewportSize::new(1024.0, 768.0),
        );
        assert_eq!(padding, CameraPadding::NONE);
    }

    #[test]
    fn wide_viewport_pads_left_by_the_sidebar_width() {
        let padding = compute_padding(
            &SidebarLayout::default(),
            SidebarVisibility::Shown,
            ViewportSize::new(1024.0, 768.0),
        );
        assert_eq!(padding, CameraPadding::left_only(480.0));
    }

    #[test]
    fn narrow_viewport_pads_bottom_by_half_the_height() {
        let padding = compute_padding(
            &SidebarLayout::default(),
            SidebarVisibility::Shown,
            ViewportSize::new(400.0, 800.0),
        );
        assert_eq!(padding, CameraPadding::bottom_only(400.0));
    }

    #[test]
    fn breakpoint_width_itself_counts_as_wide() {
        let padding = compute_padding(
            &SidebarLayout::default(),
            SidebarVisibility::Shown,
            ViewportSize::new(768.0, 1024.0),
        );
        assert_eq!(padding, CameraPadding::left_only(480.0));
    }

    #[test]
    fn pitch_is_flat_below_the_ramp() {
        let ramp = PitchRamp::default();
        assert_eq!(pitch_for_zoom(&ramp, 0.0), 0.0);
        assert_eq!(pitch_for_zoom(&ramp, 5.23), 0.0);
    }

    #[test]
    fn pitch_is_flat_at_and_above_the_ramp_top() {
        let ramp = PitchRamp::default();
        assert_eq!(pitch_for_zoom(&ramp, 16.0), 60.0);
        assert_eq!(pitch_for_zoom(&ramp, 22.0), 60.0);
    }

    #[test]
    fn pitch_interpolates_linearly_at_the_ramp_midpoint() {
        let ramp = PitchRamp::default();
        let midpoint = (ramp.min_zoom + ramp.max_zoom) / 2.0;
        let pitch = pitch_for_zoom(&ramp, midpoint);
        assert!((pitch - 30.0).abs() < 1e-9, "midpoint pitch was {pitch}");
    }

    #[test]
    fn narrow_viewports_cluster_one_zoom_level_longer() {
        let cluster = ClusterProfile::default();
        let layout = SidebarLayout::default();
        assert_eq!(cluster_threshold(&cluster, &layout, 1024.0), 6.0);
        assert_eq!(cluster_threshold(&cluster, &layout, 500.0), 7.0);
    }
}
