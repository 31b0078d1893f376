//! Configuration file handling.
//!
//! Gesture tunables live in the `[tuning]` table rather than on the command
//! line; the CLI only picks the config file and overrides where frames come
//! from.
//!
//! ```toml
//! [tuning]
//! rotation_sensitivity = 250.0
//! pinch_threshold      = 1.2
//!
//! [tuning.identity]
//! policy       = "nearest_position"
//! max_distance = 0.15
//!
//! [source]
//! kind = "udp"
//! port = 5556
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pinch_gesture::Tuning;

use crate::error::{ConfigError, PinchViewError};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tuning:  Tuning,
    pub source:  SourceConfig,
    pub preview: PreviewConfig,
    pub sink:    SinkConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PinchViewError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::ReadFile(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(s: &str) -> Result<Self, PinchViewError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load `path` if given, otherwise the first default location that
    /// exists, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, PinchViewError> {
        if let Some(path) = path {
            tracing::info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        let paths = [
            PathBuf::from("pinch_view.toml"),
            PathBuf::from("config/pinch_view.toml"),
        ];

        for path in &paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PinchViewError> {
        self.tuning.validate()?;

        match self.source.kind {
            SourceKind::Replay if self.source.replay_path.is_none() => {
                return Err(invalid("source.replay_path", "replay source needs a file"));
            }
            SourceKind::Sim if !self.preview.enabled => {
                return Err(invalid(
                    "source.kind",
                    "simulated hands are driven from the preview window; enable preview",
                ));
            }
            _ => {}
        }

        if !(self.source.replay_fps.is_finite() && self.source.replay_fps > 0.0) {
            return Err(invalid("source.replay_fps", "must be greater than 0"));
        }

        if self.source.port == 0 {
            return Err(invalid("source.port", "port must be greater than 0"));
        }

        if self.sink.connect_attempts == Some(0) {
            return Err(invalid("sink.connect_attempts", "must be at least 1 when set"));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> PinchViewError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Where hand frames come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Synthetic hands driven by the preview window's mouse
    Sim,
    /// JSON frames over UDP from an external detector
    Udp,
    /// JSON-lines recording
    Replay,
    /// LeapMotion controller (`leap` feature)
    Leap,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sim => "sim",
            Self::Udp => "udp",
            Self::Replay => "replay",
            Self::Leap => "leap",
        }
    }
}

/// Frame source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// UDP listen address
    pub listen_address: String,
    /// UDP listen port
    pub port: u16,
    /// Recording to play back for `kind = "replay"`
    pub replay_path: Option<PathBuf>,
    /// Playback rate in frames per second
    pub replay_fps: f32,
    /// Start over at the end of the recording
    pub replay_loop: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Sim,
            listen_address: "127.0.0.1".to_string(),
            port: 5556,
            replay_path: None,
            replay_fps: 30.0,
            replay_loop: false,
        }
    }
}

impl SourceConfig {
    pub fn udp_addr(&self) -> String {
        format!("{}:{}", self.listen_address, self.port)
    }
}

/// Preview window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub enabled: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Which host view receives the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// In-process simulated view, drawn in the preview
    Simulated,
    /// Log commands only
    Log,
}

/// Host view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub kind: SinkKind,
    /// Seconds between connection attempts
    pub retry_interval_secs: u64,
    /// Give up after this many attempts; unset retries forever
    pub connect_attempts: Option<u32>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::Simulated,
            retry_interval_secs: 5,
            connect_attempts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinch_gesture::IdentityPolicy;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn tuning_and_source_sections_parse() {
        let cfg = Config::from_toml(
            r#"
            [tuning]
            rotation_sensitivity = 250.0
            debounce_frames = 3

            [tuning.identity]
            policy = "nearest_position"
            max_distance = 0.15

            [source]
            kind = "udp"
            port = 6000

            [sink]
            kind = "log"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tuning.rotation_sensitivity, 250.0);
        assert_eq!(cfg.tuning.debounce_frames, 3);
        assert_eq!(cfg.tuning.pinch_threshold, 1.5);
        assert_eq!(cfg.tuning.identity, IdentityPolicy::NearestPosition { max_distance: 0.15 });
        assert_eq!(cfg.source.kind, SourceKind::Udp);
        assert_eq!(cfg.source.udp_addr(), "127.0.0.1:6000");
        assert_eq!(cfg.sink.kind, SinkKind::Log);
    }

    #[test]
    fn unknown_source_kind_is_a_parse_error() {
        let err = Config::from_toml("[source]\nkind = \"webcam\"\n").unwrap_err();
        assert!(matches!(err, PinchViewError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn replay_without_file_is_invalid() {
        let mut cfg = Config::default();
        cfg.source.kind = SourceKind::Replay;
        assert!(cfg.validate().is_err());
        cfg.source.replay_path = Some(PathBuf::from("frames.jsonl"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn sim_needs_preview() {
        let mut cfg = Config::default();
        cfg.preview.enabled = false;
        assert!(cfg.validate().is_err());
        cfg.source.kind = SourceKind::Udp;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bad_tuning_fails_validation() {
        let cfg = Config::from_toml("[tuning]\npinch_threshold = -1.0\n").unwrap();
        assert!(matches!(cfg.validate(), Err(PinchViewError::Tuning(_))));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[preview]\nenabled = false\n[source]\nkind = \"udp\"").unwrap();
        let cfg = Config::load(Some(file.path())).unwrap();
        assert!(!cfg.preview.enabled);
        assert_eq!(cfg.source.kind, SourceKind::Udp);
    }

    #[test]
    fn example_config_matches_defaults() {
        let cfg = Config::from_toml(include_str!("../../config/pinch_view.example.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/pinch_view.toml"))).unwrap_err();
        assert!(matches!(err, PinchViewError::Config(ConfigError::ReadFile(_))));
    }
}
