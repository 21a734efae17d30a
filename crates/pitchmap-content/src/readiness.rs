use std::time::Duration;

use pitchmap_protocol::directory::TeamDirectory;
use pitchmap_protocol::error::{MapWidgetError, MapWidgetResult};
use pitchmap_protocol::profile::ContentPollProfile;
use tracing::debug;

/// Waits until the directory reports at least as many loaded teams as the
/// content layer expects. Checks immediately, then once per interval, giving
/// up after the configured number of attempts.
pub async fn await_directory_ready(
    directory: &dyn TeamDirectory,
    profile: &ContentPollProfile,
) -> MapWidgetResult<usize> {
    let mut ticker = tokio::time::interval(Duration::from_millis(profile.interval_ms.max(1)));

    for attempt in 1..=profile.max_attempts {
        ticker.tick().await;
        let loaded = directory.loaded_team_count();
        match directory.expected_team_count() {
            Some(expected) if loaded >= expected => {
                debug!(loaded, expected, attempt, "directory content complete");
                return Ok(loaded);
            }
            Some(expected) => {
                debug!(loaded, expected, attempt, "waiting for directory content");
            }
            None => {
                debug!(attempt, "directory has not announced an expected count yet");
            }
        }
    }

    Err(MapWidgetError::ContentUnavailable(format!(
        "directory content still incomplete after {} checks",
        profile.max_attempts
    )))
}
