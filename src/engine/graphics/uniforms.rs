//! Uniform blocks shared with `phong.wgsl`.
//!
//! Every `vec3` travels as a `vec4` to satisfy WGSL uniform alignment.

use glam::{Mat4, Vec3};

use crate::scene::lighting::Light;
use crate::scene::material::MaterialProperties;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// `transpose(inverse(model))`, for transforming normals.
    pub normal_matrix: [[f32; 4]; 4],
    pub view_position: [f32; 4],
}

impl CameraUniform {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, view_position: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            view_position: view_position.extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub light_position: [f32; 4],
    pub light_color: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    /// `w` carries the shininess exponent.
    pub specular: [f32; 4],
    pub base_color: [f32; 4],
}

impl LightingUniform {
    pub fn new(light: &Light, material: &MaterialProperties) -> Self {
        Self {
            light_position: light.position.extend(1.0).to_array(),
            light_color: light.color.extend(1.0).to_array(),
            ambient: material.ambient.extend(0.0).to_array(),
            diffuse: material.diffuse.extend(0.0).to_array(),
            specular: material.specular.extend(material.shininess).to_array(),
            base_color: material.base_color.extend(1.0).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::material::Material;

    #[test]
    fn sizes_are_uniform_aligned() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 4 * 64 + 16);
        assert_eq!(std::mem::size_of::<LightingUniform>(), 6 * 16);
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let uniform = CameraUniform::new(model, Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO);
        let normal_matrix = Mat4::from_cols_array_2d(&uniform.normal_matrix);
        let normal = normal_matrix.transform_vector3(Vec3::new(1.0, 1.0, 0.0));
        assert!(normal.abs_diff_eq(Vec3::new(0.5, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn identity_model_keeps_normals() {
        let uniform = CameraUniform::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ONE);
        assert_eq!(uniform.normal_matrix, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.view_position, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn shininess_packed_in_specular_w() {
        let material = Material::Metal.properties();
        let uniform = LightingUniform::new(&Light::default(), &material);
        assert_eq!(uniform.specular[3], 76.8);
        assert_eq!(uniform.light_position, [2.0, 2.0, 2.0, 1.0]);
        assert_eq!(uniform.base_color, [0.8, 0.8, 0.8, 1.0]);
    }
}
