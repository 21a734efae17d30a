use serde::{Deserialize, Serialize};

use crate::geo::LngLat;
use crate::ids::TeamSlug;
use crate::team::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SidebarVisibility {
    #[default]
    Shown,
    Hidden,
}

impl SidebarVisibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }
}

/// The CMS-rendered team list. Entries appear incrementally while the content
/// layer loads; mutating operations return whether the target existed.
pub trait TeamDirectory: Send + Sync {
    fn teams(&self) -> Vec<Team>;
    fn team(&self, slug: &TeamSlug) -> Option<Team>;
    fn loaded_team_count(&self) -> usize;
    /// Total the content layer has announced, once it has.
    fn expected_team_count(&self) -> Option<usize>;
    /// Writes a resolved position back onto the entry; the content layer may
    /// deliver teams with only a postcode.
    fn record_position(&self, slug: &TeamSlug, position: LngLat) -> bool;
    fn set_team_highlighted(&self, slug: &TeamSlug, highlighted: bool) -> bool;
    fn set_info_panel_open(&self, slug: &TeamSlug, open: bool) -> bool;
    fn is_info_panel_open(&self, slug: &TeamSlug) -> bool;
    /// Closes every open info panel, returning how many were open.
    fn close_open_info_panels(&self) -> usize;
}

/// The sidebar container and its toggle button. `apply_visibility` returns
/// false when the sidebar DOM has not been rendered yet.
pub trait SidebarHost: Send + Sync {
    fn apply_visibility(&self, visibility: SidebarVisibility) -> bool;
}

/// The filter UI the CMS layer owns. All operations return whether the panel
/// was present and reachable.
pub trait FilterPanel: Send + Sync {
    /// (Re)binds the panel's own controls once content has finished loading.
    fn bind(&self) -> bool;
    fn clear_all(&self) -> bool;
    fn apply_preset(&self, preset: &str) -> bool;
    fn is_preset_active(&self, preset: &str) -> bool;
    fn set_capacity_badge_hidden(&self, hidden: bool) -> bool;
}
