//! Point light and the Phong reflection model evaluated on the CPU.
//!
//! [`shade`] mirrors `fs_main` in `phong.wgsl` term for term, so the
//! lighting can be checked without a GPU.

use glam::Vec3;

use crate::scene::material::MaterialProperties;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.0, 2.0, 2.0),
            color: Vec3::ONE,
        }
    }
}

/// Reflects `incident` about `normal`, like GLSL/WGSL `reflect`.
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Phong color of a surface point, before any output encoding.
pub fn shade(
    material: &MaterialProperties,
    light: &Light,
    view_position: Vec3,
    fragment_position: Vec3,
    normal: Vec3,
) -> Vec3 {
    let normal = normal.normalize();
    let light_dir = (light.position - fragment_position).normalize();

    let ambient = material.ambient * light.color;

    let diff = normal.dot(light_dir).max(0.0);
    let diffuse = diff * material.diffuse * light.color;

    let view_dir = (view_position - fragment_position).normalize();
    let reflect_dir = reflect(-light_dir, normal);
    let spec = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess);
    let specular = spec * material.specular * light.color;

    (ambient + diffuse + specular) * material.base_color
}
