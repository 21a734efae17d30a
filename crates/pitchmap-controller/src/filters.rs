use std::sync::Arc;

use pitchmap_protocol::directory::FilterPanel;
use pitchmap_protocol::profile::FilterProfile;
use tracing::{debug, warn};

/// Orchestrates the CMS filter panel: the featured-preset shortcut and the
/// capacity badge that hides while that preset is active. Every operation
/// degrades to a logged no-op when the panel collaborator is absent.
pub struct FilterController {
    panel: Arc<dyn FilterPanel>,
    profile: FilterProfile,
}

impl FilterController {
    pub fn new(panel: Arc<dyn FilterPanel>, profile: FilterProfile) -> Self {
        Self { panel, profile }
    }

    /// (Re)binds the panel's controls after content load; returns whether the
    /// panel was reachable.
    pub fn bind(&self) -> bool {
        let bound = self.panel.bind();
        if !bound {
            warn!("filter panel not present; filters left unbound");
        }
        bound
    }

    pub fn clear_all(&self) {
        if !self.panel.clear_all() {
            warn!("filter panel not present; clear-all skipped");
            return;
        }
        self.panel.set_capacity_badge_hidden(false);
        debug!("all filters cleared");
    }

    pub fn apply_featured(&self) {
        if !self.panel.clear_all() {
            warn!("filter panel not present; featured preset skipped");
            return;
        }
        if !self.panel.apply_preset(&self.profile.featured_preset) {
            warn!(
                preset = self.profile.featured_preset.as_str(),
                "featured preset not found on the filter panel"
            );
            return;
        }
        self.panel.set_capacity_badge_hidden(true);
        debug!(
            preset = self.profile.featured_preset.as_str(),
            "featured preset applied"
        );
    }

    /// After any filter application: the badge hides exactly while the
    /// featured preset is active.
    pub fn refresh_capacity_badge(&self) {
        let featured_active = self.panel.is_preset_active(&self.profile.featured_preset);
        self.panel.set_capacity_badge_hidden(featured_active);
    }

    pub fn show_capacity_badge(&self) {
        self.panel.set_capacity_badge_hidden(false);
    }
}
