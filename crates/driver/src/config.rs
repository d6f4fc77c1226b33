use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from viewer setup: config loading or GPU acquisition.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Config(String),
    #[error("GPU setup failed: {0}")]
    Gpu(String),
}

/// Viewer configuration. Every field has a default matching the
/// canonical demo; a YAML file can override any subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Initial window width in physical pixels.
    pub window_width: u32,
    /// Initial window height in physical pixels.
    pub window_height: u32,
    /// Camera field of view in degrees.
    pub fov_degrees: f32,
    /// Mesh rotation increment in radians per frame (not time-scaled).
    pub spin_rate: f32,
    /// Circumscribed radius of the octahedron.
    pub mesh_radius: f32,
    /// Initial camera distance from the target.
    pub camera_distance: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fov_degrees: 60.0,
            spin_rate: 0.01,
            mesh_radius: 1.0,
            camera_distance: 3.0,
        }
    }
}

impl ViewerConfig {
    /// Load a config from a YAML file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&text).map_err(|e| SetupError::Config(e.to_string()))?;
        tracing::debug!(?config, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo() {
        let c = ViewerConfig::default();
        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, 600);
        assert_eq!(c.spin_rate, 0.01);
        assert_eq!(c.fov_degrees, 60.0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ViewerConfig::load("/nonexistent/octaview.yaml").unwrap_err();
        assert!(matches!(err, SetupError::Io(_)));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: ViewerConfig = serde_yaml::from_str("spin_rate: 0.05\n").unwrap();
        assert_eq!(config.spin_rate, 0.05);
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = serde_yaml::from_str::<ViewerConfig>("spin_rate: [oops")
            .map_err(|e| SetupError::Config(e.to_string()))
            .unwrap_err();
        assert!(matches!(err, SetupError::Config(_)));
    }
}
