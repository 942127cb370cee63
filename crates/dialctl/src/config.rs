use crate::events::AppEvent;
use arcdial::animation::{AnimationIntentBuilder, DEFAULT_DURATION};
use arcdial::geometry::{DEFAULT_MAXIMUM, DEFAULT_MINIMUM, DEFAULT_RADIANS_OFFSET};
use arcdial::gesture::DEFAULT_JUMP_THRESHOLD;
use arcdial::{Easing, RangeError, RangeModel, RotationTracker, Slider, SnapToStep};
use async_channel::Sender;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub type ConfiguredSlider = Slider<Option<SnapToStep>>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub enabled: bool,
    pub jump_threshold: f64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            jump_threshold: DEFAULT_JUMP_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    pub radians_offset: f64,
    pub initial_value: Option<f64>,
    pub step: Option<f64>,
    pub animation: AnimationConfig,
    pub tracking: TrackingConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: DEFAULT_MINIMUM,
            maximum_value: DEFAULT_MAXIMUM,
            radians_offset: DEFAULT_RADIANS_OFFSET,
            initial_value: None,
            step: None,
            animation: AnimationConfig::default(),
            tracking: TrackingConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid range: {0}")]
    Range(#[from] RangeError),
    #[error("Invalid step {0}: must be finite and positive")]
    InvalidStep(f64),
    #[error("Invalid jump threshold {0}: must be finite and positive")]
    InvalidThreshold(f64),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SliderConfig {
    pub fn range(&self) -> Result<RangeModel, ConfigError> {
        Ok(RangeModel::new(
            self.minimum_value,
            self.maximum_value,
            self.radians_offset,
        )?)
    }

    pub fn snap(&self) -> Result<Option<SnapToStep>, ConfigError> {
        self.step
            .map(|step| {
                SnapToStep::new(self.minimum_value, step).ok_or(ConfigError::InvalidStep(step))
            })
            .transpose()
    }

    pub fn tracker(&self) -> Result<RotationTracker, ConfigError> {
        let threshold = self.tracking.jump_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(RotationTracker::new(threshold))
    }

    pub fn animator(&self) -> AnimationIntentBuilder {
        AnimationIntentBuilder::new(
            Duration::from_millis(self.animation.duration_ms),
            self.animation.easing,
        )
    }

    pub fn build_slider(&self) -> Result<ConfiguredSlider, ConfigError> {
        let range = self.range()?;
        let mut slider = Slider::new(range)
            .with_tracker(self.tracker()?)
            .with_animator(self.animator())
            .with_transform(self.snap()?);
        // route the initial value through the delegate too
        slider.set_value(self.initial_value.unwrap_or(range.minimum_value()), false);
        slider.set_touch_enabled(self.tracking.enabled);
        Ok(slider)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        self.range()?;
        self.snap()?;
        self.tracker()?;
        Ok(self)
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "arcdial", "arcdial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Always absolute, so the watcher has a directory to watch.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(p) => Ok(std::path::absolute(p)?),
        None => get_config_path(),
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<SliderConfig, ConfigError> {
    let s = builder
        .add_source(
            Environment::with_prefix("ARCDIAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    s.try_deserialize::<SliderConfig>()?.validate()
}

pub fn load_config(path: &Path) -> Result<SliderConfig, ConfigError> {
    build(config::Config::builder().add_source(File::from(path).required(false)))
}

pub fn parse_config(toml: &str) -> Result<SliderConfig, ConfigError> {
    build(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}

pub fn write_default_config(path: &Path) -> std::io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if path.exists() {
        return Ok(false);
    }
    fs_err::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_path = match std::path::absolute(&config_path) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Failed to resolve {}: {}", config_path.display(), e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                // notify may report the directory through a different prefix
                // (symlinks), so match on the file name within the watched dir
                if meaningful_event
                    && event
                        .paths
                        .iter()
                        .any(|p| p.file_name() == config_path.file_name())
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
