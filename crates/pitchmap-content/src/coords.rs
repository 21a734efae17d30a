use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use pitchmap_protocol::error::{MapWidgetError, MapWidgetResult};
use pitchmap_protocol::geo::LngLat;
use pitchmap_protocol::team::Team;
use serde::Deserialize;
use tracing::warn;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Strategy for turning a directory entry into a map position. The production
/// deployments disagree on where coordinates come from (pre-baked data
/// attributes versus a postcode lookup service), so the widget takes this as
/// a collaborator rather than hard-coding either.
#[async_trait]
pub trait CoordinateSource: Send + Sync {
    /// `Ok(None)` means the team has no resolvable position and should be
    /// skipped; errors mean the lookup itself failed for this team.
    async fn resolve(&self, team: &Team) -> MapWidgetResult<Option<LngLat>>;
}

/// Consumes positions already present on the team entries.
#[derive(Debug, Default)]
pub struct InlineCoordinates;

#[async_trait]
impl CoordinateSource for InlineCoordinates {
    async fn resolve(&self, team: &Team) -> MapWidgetResult<Option<LngLat>> {
        Ok(team.position)
    }
}

#[async_trait]
pub trait GeocodeTransport: Send + Sync {
    async fn lookup(&self, postcode: &str) -> MapWidgetResult<serde_json::Value>;
}

pub struct ReqwestGeocodeTransport {
    base_url: String,
    client: reqwest::Client,
}

impl fmt::Debug for ReqwestGeocodeTransport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReqwestGeocodeTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ReqwestGeocodeTransport {
    pub fn new(base_url: impl Into<String>) -> MapWidgetResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent("pitchmap/content")
            .build()
            .map_err(|err| {
                MapWidgetError::Surface(format!("failed to initialize geocoder HTTP client: {err}"))
            })?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

#[async_trait]
impl GeocodeTransport for ReqwestGeocodeTransport {
    async fn lookup(&self, postcode: &str) -> MapWidgetResult<serde_json::Value> {
        let compact: String = postcode.split_whitespace().collect();
        let url = format!("{}/postcodes/{compact}", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await.map_err(|err| {
            MapWidgetError::ContentUnavailable(format!("postcode lookup request failed: {err}"))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            MapWidgetError::ContentUnavailable(format!(
                "failed to read postcode lookup response: {err}"
            ))
        })?;

        if !status.is_success() {
            return Err(MapWidgetError::ContentUnavailable(format!(
                "postcode service returned HTTP {}: {}",
                status,
                truncate_for_error(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|err| {
            MapWidgetError::ContentUnavailable(format!("postcode response was not JSON: {err}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct PostcodeLookupEnvelope {
    result: Option<PostcodeLookupResult>,
}

#[derive(Debug, Deserialize)]
struct PostcodeLookupResult {
    longitude: Option<f64>,
    latitude: Option<f64>,
}

/// Resolves team positions through a UK postcode lookup service.
pub struct PostcodeGeocoder {
    transport: Arc<dyn GeocodeTransport>,
}

impl PostcodeGeocoder {
    pub fn new(base_url: impl Into<String>) -> MapWidgetResult<Self> {
        Ok(Self::with_transport(Arc::new(ReqwestGeocodeTransport::new(
            base_url,
        )?)))
    }

    pub fn with_transport(transport: Arc<dyn GeocodeTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl CoordinateSource for PostcodeGeocoder {
    async fn resolve(&self, team: &Team) -> MapWidgetResult<Option<LngLat>> {
        if let Some(position) = team.position {
            return Ok(Some(position));
        }
        let Some(postcode) = team.postcode.as_deref().filter(|value| !value.trim().is_empty())
        else {
            return Ok(None);
        };

        let payload = self.transport.lookup(postcode).await?;
        let envelope: PostcodeLookupEnvelope = serde_json::from_value(payload).map_err(|err| {
            MapWidgetError::ContentUnavailable(format!("unexpected postcode payload shape: {err}"))
        })?;

        let Some(result) = envelope.result else {
            return Ok(None);
        };
        match (result.longitude, result.latitude) {
            (Some(lng), Some(lat)) => LngLat::new(lng, lat).map(Some),
            _ => Ok(None),
        }
    }
}

/// Runs every team through the source. Lookup failures and unresolvable teams
/// are logged and left without a position; the batch always completes.
pub async fn resolve_positions(source: &dyn CoordinateSource, teams: Vec<Team>) -> Vec<Team> {
    let mut resolved = Vec::with_capacity(teams.len());
    for mut team in teams {
        if team.position.is_none() {
            match source.resolve(&team).await {
                Ok(Some(position)) => team.position = Some(position),
                Ok(None) => {
                    warn!(team = team.slug.as_str(), "no coordinates resolved for team");
                }
                Err(error) => {
                    warn!(
                        %error,
                        team = team.slug.as_str(),
                        "coordinate lookup failed for team"
                    );
                }
            }
        }
        resolved.push(team);
    }
    resolved
}

fn truncate_for_error(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_owned();
    }
    let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{truncated}…")
}
