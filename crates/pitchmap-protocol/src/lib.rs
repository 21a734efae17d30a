//! Shared vocabulary between the pitchmap widget core and its collaborators:
//! the mapping surface, the CMS-backed team directory, and the filter UI.

pub mod directory;
pub mod error;
pub mod event;
pub mod geo;
pub mod ids;
pub mod profile;
pub mod surface;
pub mod team;
