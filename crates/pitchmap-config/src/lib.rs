use std::path::{Path, PathBuf};

use pitchmap_protocol::geo::LngLat;
use pitchmap_protocol::profile::{
    CameraProfile, ClusterProfile, ContentPollProfile, FilterProfile, PitchRamp, ResizeProfile,
    SidebarLayout, WidgetTuning,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PITCHMAP_CONFIG: &str = "PITCHMAP_CONFIG";

const DEFAULT_GEOCODER_BASE_URL: &str = "https://api.postcodes.io";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Message(String),
}

impl ConfigError {
    fn configuration(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PitchmapConfig {
    #[serde(default)]
    pub camera: CameraConfigToml,
    #[serde(default)]
    pub layout: LayoutConfigToml,
    #[serde(default)]
    pub pitch: PitchConfigToml,
    #[serde(default)]
    pub cluster: ClusterConfigToml,
    #[serde(default)]
    pub content: ContentConfigToml,
    #[serde(default)]
    pub resize: ResizeConfigToml,
    #[serde(default)]
    pub filter: FilterConfigToml,
    #[serde(default)]
    pub geocoder: GeocoderConfigToml,
}

/// Coordinate-acquisition slice consumed by the content layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocoderRuntimeConfig {
    pub enabled: bool,
    pub base_url: String,
}

impl PitchmapConfig {
    /// The controller-facing tuning slice.
    pub fn tuning(&self) -> WidgetTuning {
        WidgetTuning {
            camera: CameraProfile {
                home_center: LngLat {
                    lng: self.camera.home_lng,
                    lat: self.camera.home_lat,
                },
                home_zoom_wide: self.camera.home_zoom_wide,
                home_zoom_narrow: self.camera.home_zoom_narrow,
                reset_speed: self.camera.reset_speed,
                focus_zoom: self.camera.focus_zoom,
                focus_pitch: self.camera.focus_pitch,
                cluster_focus_speed: self.camera.cluster_focus_speed,
                cluster_zoom_increment: self.camera.cluster_zoom_increment,
            },
            layout: SidebarLayout {
                narrow_breakpoint_px: self.layout.narrow_breakpoint_px,
                sidebar_width_rem: self.layout.sidebar_width_rem,
                base_font_px: self.layout.base_font_px,
                padding_ease_ms: self.layout.padding_ease_ms,
            },
            pitch: PitchRamp {
                min_zoom: self.pitch.min_zoom,
                max_zoom: self.pitch.max_zoom,
                min_pitch: self.pitch.min_pitch,
                max_pitch: self.pitch.max_pitch,
            },
            cluster: ClusterProfile {
                radius: self.cluster.radius,
                threshold_wide: self.cluster.threshold_wide,
                threshold_narrow: self.cluster.threshold_narrow,
            },
            content: ContentPollProfile {
                interval_ms: self.content.poll_interval_ms,
                max_attempts: self.content.poll_max_attempts,
            },
            resize: ResizeProfile {
                debounce_ms: self.resize.debounce_ms,
                reopen_delay_ms: self.resize.reopen_delay_ms,
            },
            filter: FilterProfile {
                featured_preset: self.filter.featured_preset.clone(),
            },
        }
    }

    pub fn geocoder_runtime(&self) -> GeocoderRuntimeConfig {
        GeocoderRuntimeConfig {
            enabled: self.geocoder.enabled,
            base_url: self.geocoder.base_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfigToml {
    #[serde(default = "default_home_lng")]
    pub home_lng: f64,
    #[serde(default = "default_home_lat")]
    pub home_lat: f64,
    #[serde(default = "default_home_zoom_wide")]
    pub home_zoom_wide: f64,
    #[serde(default = "default_home_zoom_narrow")]
    pub home_zoom_narrow: f64,
    #[serde(default = "default_reset_speed")]
    pub reset_speed: f64,
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: f64,
    #[serde(default = "default_focus_pitch")]
    pub focus_pitch: f64,
    #[serde(default = "default_cluster_focus_speed")]
    pub cluster_focus_speed: f64,
    #[serde(default = "default_cluster_zoom_increment")]
    pub cluster_zoom_increment: f64,
}

impl Default for CameraConfigToml {
    fn default() -> Self {
        Self {
            home_lng: default_home_lng(),
            home_lat: default_home_lat(),
            home_zoom_wide: default_home_zoom_wide(),
            home_zoom_narrow: default_home_zoom_narrow(),
            reset_speed: default_reset_speed(),
            focus_zoom: default_focus_zoom(),
            focus_pitch: default_focus_pitch(),
            cluster_focus_speed: default_cluster_focus_speed(),
            cluster_zoom_increment: default_cluster_zoom_increment(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfigToml {
    #[serde(default = "default_narrow_breakpoint_px")]
    pub narrow_breakpoint_px: f64,
    #[serde(default = "default_sidebar_width_rem")]
    pub sidebar_width_rem: f64,
    #[serde(default = "default_base_font_px")]
    pub base_font_px: f64,
    #[serde(default = "default_padding_ease_ms")]
    pub padding_ease_ms: u64,
}

impl Default for LayoutConfigToml {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: default_narrow_breakpoint_px(),
            sidebar_width_rem: default_sidebar_width_rem(),
            base_font_px: default_base_font_px(),
            padding_ease_ms: default_padding_ease_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitchConfigToml {
    #[serde(default = "default_pitch_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_pitch_max_zoom")]
    pub max_zoom: f64,
    #[serde(default = "default_min_pitch")]
    pub min_pitch: f64,
    #[serde(default = "default_max_pitch")]
    pub max_pitch: f64,
}

impl Default for PitchConfigToml {
    fn default() -> Self {
        Self {
            min_zoom: default_pitch_min_zoom(),
            max_zoom: default_pitch_max_zoom(),
            min_pitch: default_min_pitch(),
            max_pitch: default_max_pitch(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterConfigToml {
    #[serde(default = "default_cluster_radius")]
    pub radius: f64,
    #[serde(default = "default_cluster_threshold_wide")]
    pub threshold_wide: f64,
    #[serde(default = "default_cluster_threshold_narrow")]
    pub threshold_narrow: f64,
}

impl Default for ClusterConfigToml {
    fn default() -> Self {
        Self {
            radius: default_cluster_radius(),
            threshold_wide: default_cluster_threshold_wide(),
            threshold_narrow: default_cluster_threshold_narrow(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfigToml {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_poll_max_attempts")]
    pub poll_max_attempts: u32,
}

impl Default for ContentConfigToml {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            poll_max_attempts: default_poll_max_attempts(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResizeConfigToml {
    #[serde(default = "default_resize_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_reopen_delay_ms")]
    pub reopen_delay_ms: u64,
}

impl Default for ResizeConfigToml {
    fn default() -> Self {
        Self {
            debounce_ms: default_resize_debounce_ms(),
            reopen_delay_ms: default_reopen_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterConfigToml {
    #[serde(default = "default_featured_preset")]
    pub featured_preset: String,
}

impl Default for FilterConfigToml {
    fn default() -> Self {
        Self {
            featured_preset: default_featured_preset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeocoderConfigToml {
    #[serde(default = "default_geocoder_enabled")]
    pub enabled: bool,
    #[serde(default = "default_geocoder_base_url")]
    pub base_url: String,
}

impl Default for GeocoderConfigToml {
    fn default() -> Self {
        Self {
            enabled: default_geocoder_enabled(),
            base_url: default_geocoder_base_url(),
        }
    }
}

fn default_home_lng() -> f64 {
    CameraProfile::default().home_center.lng
}

fn default_home_lat() -> f64 {
    CameraProfile::default().home_center.lat
}

fn default_home_zoom_wide() -> f64 {
    CameraProfile::default().home_zoom_wide
}

fn default_home_zoom_narrow() -> f64 {
    CameraProfile::default().home_zoom_narrow
}

fn default_reset_speed() -> f64 {
    CameraProfile::default().reset_speed
}

fn default_focus_zoom() -> f64 {
    CameraProfile::default().focus_zoom
}

fn default_focus_pitch() -> f64 {
    CameraProfile::default().focus_pitch
}

fn default_cluster_focus_speed() -> f64 {
    CameraProfile::default().cluster_focus_speed
}

fn default_cluster_zoom_increment() -> f64 {
    CameraProfile::default().cluster_zoom_increment
}

fn default_narrow_breakpoint_px() -> f64 {
    SidebarLayout::default().narrow_breakpoint_px
}

fn default_sidebar_width_rem() -> f64 {
    SidebarLayout::default().sidebar_width_rem
}

fn default_base_font_px() -> f64 {
    SidebarLayout::default().base_font_px
}

fn default_padding_ease_ms() -> u64 {
    SidebarLayout::default().padding_ease_ms
}

fn default_pitch_min_zoom() -> f64 {
    PitchRamp::default().min_zoom
}

fn default_pitch_max_zoom() -> f64 {
    PitchRamp::default().max_zoom
}

fn default_min_pitch() -> f64 {
    PitchRamp::default().min_pitch
}

fn default_max_pitch() -> f64 {
    PitchRamp::default().max_pitch
}

fn default_cluster_radius() -> f64 {
    ClusterProfile::default().radius
}

fn default_cluster_threshold_wide() -> f64 {
    ClusterProfile::default().threshold_wide
}

fn default_cluster_threshold_narrow() -> f64 {
    ClusterProfile::default().threshold_narrow
}

fn default_poll_interval_ms() -> u64 {
    ContentPollProfile::default().interval_ms
}

fn default_poll_max_attempts() -> u32 {
    ContentPollProfile::default().max_attempts
}

fn default_resize_debounce_ms() -> u64 {
    ResizeProfile::default().debounce_ms
}

fn default_reopen_delay_ms() -> u64 {
    ResizeProfile::default().reopen_delay_ms
}

fn default_featured_preset() -> String {
    FilterProfile::default().featured_preset
}

fn default_geocoder_enabled() -> bool {
    true
}

fn default_geocoder_base_url() -> String {
    DEFAULT_GEOCODER_BASE_URL.to_owned()
}

pub fn load_from_env() -> Result<PitchmapConfig, ConfigError> {
    let path = config_path_from_env()?;
    load_from_path(path)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<PitchmapConfig, ConfigError> {
    load_or_create_config(path.as_ref())
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = resolve_home_dir().ok_or_else(|| {
        ConfigError::configuration("Unable to resolve home directory from HOME or USERPROFILE")
    })?;

    Ok(home.join(".config").join("pitchmap").join("config.toml"))
}

fn config_path_from_env() -> Result<PathBuf, ConfigError> {
    match std::env::var(ENV_PITCHMAP_CONFIG) {
        Ok(raw) => {
            if raw.trim().is_empty() {
                default_config_path()
            } else {
                Ok(raw.into())
            }
        }
        Err(std::env::VarError::NotPresent) => default_config_path(),
        Err(_) => Err(ConfigError::configuration(
            "PITCHMAP_CONFIG contained invalid UTF-8",
        )),
    }
}

fn resolve_home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("USERPROFILE")
                .ok()
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
}

fn persist_config(path: &Path, config: &PitchmapConfig) -> Result<(), ConfigError> {
    let rendered = toml::to_string_pretty(config).map_err(|err| {
        ConfigError::configuration(format!(
            "Failed to serialize PITCHMAP_CONFIG for {}: {err}",
            path.display()
        ))
    })?;

    std::fs::write(path, rendered.as_bytes()).map_err(|err| {
        ConfigError::configuration(format!(
            "Failed to write PITCHMAP_CONFIG to {}: {err}",
            path.display()
        ))
    })
}

fn load_or_create_config(path: &Path) -> Result<PitchmapConfig, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|err| {
                        ConfigError::configuration(format!(
                            "Failed to create parent directory {} for PITCHMAP_CONFIG: {err}",
                            parent.display()
                        ))
                    })?;
                }
            }

            let default_config = PitchmapConfig::default();
            persist_config(path, &default_config)?;
            return Ok(default_config);
        }
        Err(err) => {
            return Err(ConfigError::configuration(format!(
                "Failed to read PITCHMAP_CONFIG from {}: {err}",
                path.display()
            )));
        }
    };

    let mut config: PitchmapConfig = toml::from_str(&raw).map_err(|err| {
        ConfigError::configuration(format!(
            "Failed to parse PITCHMAP_CONFIG from {}: {err}",
            path.display()
        ))
    })?;

    let changed = normalize_config(&mut config);
    if changed {
        persist_config(path, &config)?;
    }

    Ok(config)
}

fn normalize_config(config: &mut PitchmapConfig) -> bool {
    let mut changed = false;

    changed |= normalize_f64(&mut config.camera.home_lng, -180.0, 180.0, default_home_lng());
    changed |= normalize_f64(&mut config.camera.home_lat, -90.0, 90.0, default_home_lat());
    changed |= normalize_f64(
        &mut config.camera.home_zoom_wide,
        0.0,
        22.0,
        default_home_zoom_wide(),
    );
    changed |= normalize_f64(
        &mut config.camera.home_zoom_narrow,
        0.0,
        22.0,
        default_home_zoom_narrow(),
    );
    changed |= normalize_f64(&mut config.camera.reset_speed, 0.1, 10.0, default_reset_speed());
    changed |= normalize_f64(&mut config.camera.focus_zoom, 0.0, 22.0, default_focus_zoom());
    changed |= normalize_f64(&mut config.camera.focus_pitch, 0.0, 85.0, default_focus_pitch());
    changed |= normalize_f64(
        &mut config.camera.cluster_focus_speed,
        0.1,
        10.0,
        default_cluster_focus_speed(),
    );
    changed |= normalize_f64(
        &mut config.camera.cluster_zoom_increment,
        0.0,
        5.0,
        default_cluster_zoom_increment(),
    );

    changed |= normalize_f64(
        &mut config.layout.narrow_breakpoint_px,
        320.0,
        4096.0,
        default_narrow_breakpoint_px(),
    );
    changed |= normalize_f64(
        &mut config.layout.sidebar_width_rem,
        4.0,
        60.0,
        default_sidebar_width_rem(),
    );
    changed |= normalize_f64(&mut config.layout.base_font_px, 8.0, 32.0, default_base_font_px());
    changed |= normalize_u64(&mut config.layout.padding_ease_ms, 0, 10_000);

    changed |= normalize_f64(&mut config.pitch.min_zoom, 0.0, 22.0, default_pitch_min_zoom());
    changed |= normalize_f64(&mut config.pitch.max_zoom, 0.0, 22.0, default_pitch_max_zoom());
    changed |= normalize_f64(&mut config.pitch.min_pitch, 0.0, 85.0, default_min_pitch());
    changed |= normalize_f64(&mut config.pitch.max_pitch, 0.0, 85.0, default_max_pitch());
    if config.pitch.max_zoom <= config.pitch.min_zoom {
        config.pitch.min_zoom = default_pitch_min_zoom();
        config.pitch.max_zoom = default_pitch_max_zoom();
        changed = true;
    }
    if config.pitch.max_pitch < config.pitch.min_pitch {
        config.pitch.min_pitch = default_min_pitch();
        config.pitch.max_pitch = default_max_pitch();
        changed = true;
    }

    changed |= normalize_f64(&mut config.cluster.radius, 1.0, 500.0, default_cluster_radius());
    changed |= normalize_f64(
        &mut config.cluster.threshold_wide,
        0.0,
        22.0,
        default_cluster_threshold_wide(),
    );
    changed |= normalize_f64(
        &mut config.cluster.threshold_narrow,
        0.0,
        22.0,
        default_cluster_threshold_narrow(),
    );

    changed |= normalize_u64(&mut config.content.poll_interval_ms, 100, 10_000);
    changed |= normalize_u32(&mut config.content.poll_max_attempts, 1, 600);

    changed |= normalize_u64(&mut config.resize.debounce_ms, 50, 10_000);
    changed |= normalize_u64(&mut config.resize.reopen_delay_ms, 0, 5_000);

    changed |= normalize_non_empty_string(
        &mut config.filter.featured_preset,
        default_featured_preset(),
    );
    changed |= normalize_non_empty_string(
        &mut config.geocoder.base_url,
        default_geocoder_base_url(),
    );

    changed
}

fn normalize_f64(value: &mut f64, min: f64, max: f64, default: f64) -> bool {
    let normalized = if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    };
    if normalized != *value {
        *value = normalized;
        return true;
    }
    false
}

fn normalize_u64(value: &mut u64, min: u64, max: u64) -> bool {
    let normalized = (*value).clamp(min, max);
    if normalized != *value {
        *value = normalized;
        return true;
    }
    false
}

fn normalize_u32(value: &mut u32, min: u32, max: u32) -> bool {
    let normalized = (*value).clamp(min, max);
    if normalized != *value {
        *value = normalized;
        return true;
    }
    false
}

fn normalize_non_empty_string(value: &mut String, default: String) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if *value != default {
            *value = default;
            return true;
        }
        return false;
    }

    if trimmed != value {
        *value = trimmed.to_owned();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn env_lock() -> &'static Mutex<()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_env_vars<F>(vars: &[(&str, Option<&str>)], test: F)
    where
        F: FnOnce(),
    {
        let _guard = env_lock().lock().expect("env lock");
        let backup = vars
            .iter()
            .map(|(name, _)| ((*name).to_owned(), std::env::var(name).ok()))
            .collect::<Vec<_>>();

        for (name, value) in vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }

        test();

        for (name, value) in backup {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "pitchmap-config-{prefix}-{nanos}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).expect("create temp dir");
        path
    }

    fn remove_temp_path(path: &Path) {
        let _ = std::fs::remove_dir_all(path);
    }

    fn write_config_file(path: &Path, raw: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture config parent");
        }
        std::fs::write(path, raw.as_bytes()).expect("write fixture config");
    }

    #[test]
    fn load_from_env_creates_default_config_when_missing() {
        let home = unique_temp_dir("home-defaults");
        let expected = home.join(".config").join("pitchmap").join("config.toml");

        with_env_vars(
            &[
                ("HOME", Some(home.to_str().expect("home path"))),
                ("USERPROFILE", None),
                (ENV_PITCHMAP_CONFIG, None),
            ],
            || {
                let config = load_from_env().expect("load defaults");
                assert_eq!(config, PitchmapConfig::default());
                assert!(expected.exists());
            },
        );

        remove_temp_path(&home);
    }

    #[test]
    fn load_from_env_honors_explicit_config_path() {
        let home = unique_temp_dir("home-explicit");
        let root = unique_temp_dir("explicit-path");
        let explicit = root.join("nested").join("custom.toml");
        let default = home.join(".config").join("pitchmap").join("config.toml");

        with_env_vars(
            &[
                ("HOME", Some(home.to_str().expect("home path"))),
                ("USERPROFILE", None),
                (
                    ENV_PITCHMAP_CONFIG,
                    Some(explicit.to_str().expect("config path")),
                ),
            ],
            || {
                let config = load_from_env().expect("load explicit path config");
                assert!(explicit.exists());
                assert!(!default.exists());
                assert_eq!(config.geocoder.base_url, "https://api.postcodes.io");
            },
        );

        remove_temp_path(&home);
        remove_temp_path(&root);
    }

    #[test]
    fn load_from_path_returns_parse_error_for_invalid_toml() {
        let root = unique_temp_dir("invalid");
        let path = root.join("config.toml");
        write_config_file(&path, "[camera]\nhome_lng = [\n");

        let error = load_from_path(&path).expect_err("expected parse failure");
        assert!(error.to_string().contains("Failed to parse PITCHMAP_CONFIG"));

        remove_temp_path(&root);
    }

    #[test]
    fn load_from_path_normalizes_and_persists_supported_bounds() {
        let root = unique_temp_dir("normalization");
        let path = root.join("config.toml");
        write_config_file(
            &path,
            r#"
[camera]
home_lng = -200.0
focus_pitch = 120.0

[pitch]
min_zoom = 18.0
max_zoom = 4.0

[content]
poll_interval_ms = 5
poll_max_attempts = 10000

[resize]
debounce_ms = 1

[filter]
featured_preset = "  premier  "

[geocoder]
base_url = "   "
"#,
        );

        let config = load_from_path(&path).expect("load and normalize config");

        assert_eq!(config.camera.home_lng, -180.0);
        assert_eq!(config.camera.focus_pitch, 85.0);
        assert_eq!(config.pitch.min_zoom, 5.23);
        assert_eq!(config.pitch.max_zoom, 16.0);
        assert_eq!(config.content.poll_interval_ms, 100);
        assert_eq!(config.content.poll_max_attempts, 600);
        assert_eq!(config.resize.debounce_ms, 50);
        assert_eq!(config.filter.featured_preset, "premier");
        assert_eq!(config.geocoder.base_url, "https://api.postcodes.io");

        let persisted = std::fs::read_to_string(&path).expect("read persisted config");
        let parsed: PitchmapConfig =
            toml::from_str(&persisted).expect("parse persisted normalized config");
        assert_eq!(parsed.camera.home_lng, -180.0);
        assert_eq!(parsed.content.poll_max_attempts, 600);
        assert_eq!(parsed.filter.featured_preset, "premier");

        remove_temp_path(&root);
    }

    #[test]
    fn tuning_slice_matches_the_reference_defaults() {
        let tuning = PitchmapConfig::default().tuning();

        assert_eq!(tuning.camera.home_center.lng, -3.288305);
        assert_eq!(tuning.camera.home_center.lat, 54.277422);
        assert_eq!(tuning.camera.home_zoom_wide, 5.2);
        assert_eq!(tuning.camera.focus_zoom, 16.0);
        assert_eq!(tuning.camera.focus_pitch, 60.0);
        assert_eq!(tuning.layout.narrow_breakpoint_px, 768.0);
        assert_eq!(tuning.layout.sidebar_width_rem, 30.0);
        assert_eq!(tuning.pitch.min_zoom, 5.23);
        assert_eq!(tuning.pitch.max_zoom, 16.0);
        assert_eq!(tuning.cluster.threshold_wide, 6.0);
        assert_eq!(tuning.cluster.threshold_narrow, 7.0);
        assert_eq!(tuning.filter.featured_preset, "wsl");
    }

    #[test]
    fn geocoder_slice_exposes_its_fields() {
        let config = PitchmapConfig {
            geocoder: GeocoderConfigToml {
                enabled: false,
                base_url: "https://geocode.internal".to_owned(),
            },
            ..PitchmapConfig::default()
        };

        let geocoder = config.geocoder_runtime();
        assert!(!geocoder.enabled);
        assert_eq!(geocoder.base_url, "https://geocode.internal");
    }
}
