use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapWidgetError {
    #[error("map widget configuration error: {0}")]
    Configuration(String),
    #[error("map widget collaborator unavailable: {0}")]
    CollaboratorUnavailable(&'static str),
    #[error("map widget unknown team: {0}")]
    UnknownTeam(String),
    #[error("map widget coordinate out of range: {0}")]
    InvalidCoordinate(String),
    #[error("map widget content not ready: {0}")]
    ContentUnavailable(String),
    #[error("map widget cluster lookup failed: {0}")]
    ClusterLookup(String),
    #[error("map widget surface error: {0}")]
    Surface(String),
    #[error("map widget internal error: {0}")]
    Internal(String),
}

pub type MapWidgetResult<T> = Result<T, MapWidgetError>;
