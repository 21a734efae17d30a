use serde::{Deserialize, Serialize};

use crate::geo::LngLat;
use crate::ids::TeamSlug;

/// One directory entry. Created by the content layer before the widget
/// initializes and immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub slug: TeamSlug,
    pub name: String,
    pub postcode: Option<String>,
    pub position: Option<LngLat>,
    pub info_html: Option<String>,
}
