//! Demo state management implementation.

use std::time::Instant;

use glam::{Mat4, Vec3};

use crate::config::SceneConfig;
use crate::engine::graphics::uniforms::{CameraUniform, LightingUniform};
use crate::scene::camera::OrbitCamera;
use crate::scene::lighting::Light;
use crate::scene::material::Material;

/// Measures the time between consecutive frames.
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick, or since construction on the first call.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        delta.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub camera: OrbitCamera,
    pub material: Material,
    pub light: Light,
    pub model: Mat4,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            camera: OrbitCamera::default(),
            material: Material::default(),
            light: Light::default(),
            model: Mat4::IDENTITY,
        }
    }
}

impl DemoState {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            camera: OrbitCamera {
                radius: config.camera_radius,
                height: config.camera_height,
                speed_degrees_per_second: config.rotation_speed,
                ..OrbitCamera::default()
            },
            material: config.initial_material(),
            light: Light {
                position: Vec3::from(config.light_position),
                color: Vec3::from(config.light_color),
            },
            model: Mat4::IDENTITY,
        }
    }

    pub fn update(&mut self, delta_seconds: f32) {
        self.camera.advance(delta_seconds);
    }

    /// Returns whether the material actually changed.
    pub fn select_material(&mut self, material: Material) -> bool {
        let changed = self.material != material;
        self.material = material;
        changed
    }

    pub fn camera_uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform::new(
            self.model,
            self.camera.view_matrix(),
            self.camera.projection_matrix(aspect),
            self.camera.eye(),
        )
    }

    pub fn lighting_uniform(&self) -> LightingUniform {
        LightingUniform::new(&self.light, &self.material.properties())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clock_reports_elapsed_seconds() {
        let start = Instant::now();
        let mut clock = FrameClock { last_tick: start };
        let delta = clock.tick_at(start + Duration::from_millis(250));
        assert!((delta - 0.25).abs() < 1e-6);
        let delta = clock.tick_at(start + Duration::from_millis(300));
        assert!((delta - 0.05).abs() < 1e-6);
    }

    #[test]
    fn clock_never_goes_backwards() {
        let start = Instant::now();
        let mut clock = FrameClock {
            last_tick: start + Duration::from_secs(1),
        };
        assert_eq!(clock.tick_at(start), 0.0);
    }

    #[test]
    fn default_config_matches_default_state() {
        assert_eq!(DemoState::from_config(&SceneConfig::default()), DemoState::default());
    }

    #[test]
    fn update_moves_camera_eye() {
        let mut state = DemoState::default();
        let before = state.camera_uniform(1.0);
        state.update(1.0);
        let after = state.camera_uniform(1.0);
        assert_ne!(before.view_position, after.view_position);
        assert_ne!(before.view, after.view);
        assert_eq!(before.projection, after.projection);
    }

    #[test]
    fn selecting_material_reports_change() {
        let mut state = DemoState::default();
        assert!(!state.select_material(Material::Metal));
        assert!(state.select_material(Material::Wood));
        assert_eq!(state.material, Material::Wood);
        assert_eq!(state.lighting_uniform().specular[3], 32.0);
    }
}
