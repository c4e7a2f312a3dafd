use glam::{Mat4, Vec3};

/// Camera circling the origin at a fixed height, always looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub radius: f32,
    pub height: f32,
    pub angle_degrees: f32,
    pub speed_degrees_per_second: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 3.0,
            height: 1.5,
            angle_degrees: 0.0,
            speed_degrees_per_second: 30.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta_seconds: f32) {
        self.angle_degrees =
            (self.angle_degrees + self.speed_degrees_per_second * delta_seconds).rem_euclid(360.0);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        Vec3::new(sin * self.radius, self.height, cos * self.radius)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    /// Right-handed perspective with wgpu's `[0, 1]` depth range.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn starts_on_positive_z() {
        let camera = OrbitCamera::new();
        assert!(camera.eye().abs_diff_eq(Vec3::new(0.0, 1.5, 3.0), 1e-6));
    }

    #[test]
    fn advances_thirty_degrees_per_second() {
        let mut camera = OrbitCamera::new();
        camera.advance(3.0);
        assert!((camera.angle_degrees - 90.0).abs() < 1e-4);
        assert!(camera.eye().abs_diff_eq(Vec3::new(3.0, 1.5, 0.0), 1e-4));
    }

    #[test]
    fn angle_wraps() {
        let mut camera = OrbitCamera::new();
        camera.advance(13.0);
        assert!((camera.angle_degrees - 30.0).abs() < 1e-3);
        camera.speed_degrees_per_second = -30.0;
        camera.advance(2.0);
        assert!((camera.angle_degrees - 330.0).abs() < 1e-3);
    }

    #[test]
    fn view_looks_at_origin() {
        let mut camera = OrbitCamera::new();
        camera.advance(1.7);
        let view = camera.view_matrix();

        let eye = view.transform_point3(camera.eye());
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-5));

        let distance = camera.eye().length();
        let target = view.transform_point3(Vec3::ZERO);
        assert!(target.abs_diff_eq(Vec3::new(0.0, 0.0, -distance), 1e-5));
    }

    #[test]
    fn projection_maps_near_and_far_to_unit_depth() {
        let camera = OrbitCamera::new();
        let projection = camera.projection_matrix(1.0);

        let near = projection * Vec4::new(0.0, 0.0, -camera.near, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);

        let far = projection * Vec4::new(0.0, 0.0, -camera.far, 1.0);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn projection_respects_aspect() {
        let camera = OrbitCamera::new();
        let square = camera.projection_matrix(1.0);
        let wide = camera.projection_matrix(2.0);
        assert!((square.x_axis.x / wide.x_axis.x - 2.0).abs() < 1e-5);
        assert_eq!(square.y_axis.y, wide.y_axis.y);
    }
}
