//! Bridges between the widget core and the asynchronous content layer: the
//! CMS load-completion signal and per-team coordinate acquisition.

pub mod coords;
pub mod readiness;

pub use coords::{
    CoordinateSource, GeocodeTransport, InlineCoordinates, PostcodeGeocoder,
    ReqwestGeocodeTransport, resolve_positions,
};
pub use readiness::await_directory_ready;
