use std::sync::{Arc, Mutex};

use pitchmap_protocol::directory::TeamDirectory;
use pitchmap_protocol::ids::TeamSlug;
use pitchmap_protocol::surface::MarkerSurface;
use tracing::{debug, warn};

/// Tracks the single selected team and keeps the team element, marker, and
/// info panel in agreement. Selecting a new team always clears the previous
/// one first, so the directory never shows zero-or-two selected teams.
pub struct SelectionController {
    directory: Arc<dyn TeamDirectory>,
    markers: Arc<dyn MarkerSurface>,
    selected: Mutex<Option<TeamSlug>>,
}

impl SelectionController {
    pub fn new(directory: Arc<dyn TeamDirectory>, markers: Arc<dyn MarkerSurface>) -> Self {
        Self {
            directory,
            markers,
            selected: Mutex::new(None),
        }
    }

    pub fn selected(&self) -> Option<TeamSlug> {
        self.selected.lock().expect("selection lock poisoned").clone()
    }

    /// Selects a team, deselecting whichever one held the selection. Requires
    /// both a directory entry and a placed marker; anything less degrades to
    /// a logged no-op.
    pub async fn select(&self, slug: &TeamSlug) {
        if self.directory.team(slug).is_none() {
            warn!(team = slug.as_str(), "cannot select team: not in the directory");
            return;
        }
        match self.markers.has_marker(slug).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(team = slug.as_str(), "cannot select team: no marker placed");
                return;
            }
            Err(error) => {
                warn!(%error, team = slug.as_str(), "cannot select team: marker lookup failed");
                return;
            }
        }

        self.deselect().await;

        self.directory.close_open_info_panels();
        self.directory.set_team_highlighted(slug, true);
        self.directory.set_info_panel_open(slug, true);
        if let Err(error) = self.markers.set_marker_selected(slug, true).await {
            warn!(%error, team = slug.as_str(), "marker selection styling failed");
        }
        *self.selected.lock().expect("selection lock poisoned") = Some(slug.clone());
        debug!(team = slug.as_str(), "team selected");
    }

    /// Clears the current selection and closes its info panel. Calling with
    /// nothing selected is a no-op.
    pub async fn deselect(&self) {
        let previous = self.selected.lock().expect("selection lock poisoned").take();
        let Some(slug) = previous else {
            return;
        };

        self.directory.set_team_highlighted(&slug, false);
        self.directory.set_info_panel_open(&slug, false);
        if let Err(error) = self.markers.set_marker_selected(&slug, false).await {
            debug!(%error, team = slug.as_str(), "marker deselection styling failed");
        }
        debug!(team = slug.as_str(), "team deselected");
    }

    /// Opens the team's info panel if closed, closes it if open. Panel state
    /// only; marker styling is untouched.
    pub fn toggle_info(&self, slug: &TeamSlug) {
        if self.directory.team(slug).is_none() {
            warn!(team = slug.as_str(), "cannot toggle info panel: team not in the directory");
            return;
        }
        if self.directory.is_info_panel_open(slug) {
            self.directory.set_info_panel_open(slug, false);
        } else {
            self.directory.close_open_info_panels();
            self.directory.set_info_panel_open(slug, true);
        }
    }
}
