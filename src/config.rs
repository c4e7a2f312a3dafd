//! Application configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. The file is JSON and is looked up through `PHONG_CONFIG`.

use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::scene::Material;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "PHONG_CONFIG";

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub sphere: SphereConfig,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
    pub icon: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Phong Lighting Model".to_string(),
            vsync: true,
            icon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
    pub latitude_count: u32,
    pub longitude_count: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            latitude_count: 32,
            longitude_count: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub clear_color: [f64; 4],
    pub light_position: [f32; 3],
    pub light_color: [f32; 3],
    /// Camera orbit speed in degrees per second.
    pub rotation_speed: f32,
    pub camera_radius: f32,
    pub camera_height: f32,
    pub initial_material: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.1, 0.1, 0.1, 1.0],
            light_position: [2.0, 2.0, 2.0],
            light_color: [1.0, 1.0, 1.0],
            rotation_speed: 30.0,
            camera_radius: 3.0,
            camera_height: 1.5,
            initial_material: 0,
        }
    }
}

impl SceneConfig {
    pub fn initial_material(&self) -> Material {
        Material::from_id(self.initial_material).unwrap_or_else(|| {
            warn!(
                "Unknown material id {} in config, falling back to {}",
                self.initial_material,
                Material::default()
            );
            Material::default()
        })
    }
}

impl AppConfig {
    /// Loads the file named by `PHONG_CONFIG`, or the defaults when unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|error| Error::OpenConfig(error, display.clone()))?;
        let config = Self::from_json(&contents)
            .map_err(|error| Error::ParseConfig(error, display.clone()))?;
        info!("Loaded config from {}", display);
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.window.title, "Phong Lighting Model");
        assert!(config.window.vsync);
        assert_eq!(config.sphere.latitude_count, 32);
        assert_eq!(config.sphere.longitude_count, 32);
        assert_eq!(config.scene.clear_color, [0.1, 0.1, 0.1, 1.0]);
        assert_eq!(config.scene.initial_material(), Material::Metal);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{ "window": { "title": "Spheres" }, "scene": { "initial_material": 2 } }"#,
        )
        .unwrap();
        assert_eq!(config.window.title, "Spheres");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.sphere, SphereConfig::default());
        assert_eq!(config.scene.initial_material(), Material::Wood);
    }

    #[test]
    fn unknown_material_falls_back() {
        let config = AppConfig::from_json(r#"{ "scene": { "initial_material": 9 } }"#).unwrap();
        assert_eq!(config.scene.initial_material(), Material::Metal);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(AppConfig::from_json("{ window: ").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = AppConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(
            error,
            Error::OpenConfig(_, ref path) if path == "/definitely/not/here.json"
        ));
    }
}
