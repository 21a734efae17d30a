use std::sync::{Arc, Mutex};

use pitchmap_protocol::ids::{ClusterId, TeamSlug};
use pitchmap_protocol::profile::ClusterProfile;
use pitchmap_protocol::surface::{ClusterOptions, ClusterSurface, MarkerSurface};
use pitchmap_protocol::team::Team;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkerBuildReport {
    pub placed: usize,
    pub skipped: Vec<TeamSlug>,
}

/// Builds one marker per positioned team, keeps the set's zoom visibility in
/// step with the cluster threshold, and resolves cluster clicks against the
/// surface's spatial index.
pub struct MarkerLayer {
    markers: Arc<dyn MarkerSurface>,
    clusters: Arc<dyn ClusterSurface>,
    profile: ClusterProfile,
    threshold: Mutex<f64>,
    placed: Mutex<Vec<TeamSlug>>,
}

impl MarkerLayer {
    pub fn new(
        markers: Arc<dyn MarkerSurface>,
        clusters: Arc<dyn ClusterSurface>,
        profile: ClusterProfile,
    ) -> Self {
        let threshold = profile.threshold_wide;
        Self {
            markers,
            clusters,
            profile,
            threshold: Mutex::new(threshold),
            placed: Mutex::new(Vec::new()),
        }
    }

    /// Places a marker for every team with a resolved position. Teams without
    /// one are skipped and reported, never fatal to the batch. Clustering is
    /// configured once the markers exist.
    pub async fn build(&self, teams: &[Team], threshold: f64) -> MarkerBuildReport {
        let mut placed = Vec::new();
        let mut skipped = Vec::new();

        for team in teams {
            let Some(position) = team.position else {
                warn!(team = team.slug.as_str(), "skipping team without a resolved position");
                skipped.push(team.slug.clone());
                continue;
            };
            match self.markers.place_marker(&team.slug, position).await {
                Ok(()) => placed.push(team.slug.clone()),
                Err(error) => {
                    warn!(%error, team = team.slug.as_str(), "marker placement failed");
                    skipped.push(team.slug.clone());
                }
            }
        }

        *self.threshold.lock().expect("cluster threshold lock poisoned") = threshold;

        if !placed.is_empty() {
            let options = ClusterOptions {
                radius: self.profile.radius,
                max_zoom: threshold - 1.0,
            };
            if let Err(error) = self.clusters.configure_clustering(options).await {
                warn!(%error, "cluster source configuration failed");
            }
        }

        let report = MarkerBuildReport {
            placed: placed.len(),
            skipped,
        };
        *self.placed.lock().expect("placed marker lock poisoned") = placed;
        info!(
            placed = report.placed,
            skipped = report.skipped.len(),
            "marker build complete"
        );
        report
    }

    /// Full-set visibility sweep: markers hide below the cluster threshold
    /// and show at or above it. The set is tens of markers, so no diffing.
    pub async fn apply_zoom_visibility(&self, zoom: f64) {
        let hidden = zoom < *self.threshold.lock().expect("cluster threshold lock poisoned");
        let placed = self.placed.lock().expect("placed marker lock poisoned").clone();
        for slug in &placed {
            if let Err(error) = self.markers.set_marker_hidden(slug, hidden).await {
                debug!(%error, team = slug.as_str(), "marker visibility update failed");
            }
        }
    }

    /// Expansion zoom for a clicked cluster, or `None` when the lookup fails;
    /// the click is then dropped without user-visible effect.
    pub async fn cluster_expansion_target(&self, cluster: ClusterId) -> Option<f64> {
        match self.clusters.cluster_expansion_zoom(cluster).await {
            Ok(zoom) => Some(zoom),
            Err(error) => {
                debug!(%error, cluster = cluster.0, "cluster expansion lookup failed; ignoring click");
                None
            }
        }
    }

    pub fn placed_count(&self) -> usize {
        self.placed.lock().expect("placed marker lock poisoned").len()
    }
}
