//! UV sphere mesh generation.
//!
//! Rings run from the north pole (`+Y`) to the south pole, and each ring
//! repeats its first vertex at the seam so the index pattern stays regular.

use std::f32::consts::PI;

use crate::engine::graphics::vertex::Vertex;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct SphereMesh {
    radius: f32,
    latitude_count: u32,
    longitude_count: u32,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl SphereMesh {
    pub fn new(radius: f32, latitude_count: u32, longitude_count: u32) -> Result<Self> {
        let invalid = || Error::InvalidSphere {
            radius,
            latitude_count,
            longitude_count,
        };
        if !radius.is_finite() || radius <= 0.0 || latitude_count < 2 || longitude_count < 3 {
            return Err(invalid());
        }
        let (vertex_count, index_count) =
            Self::counts(latitude_count, longitude_count).ok_or_else(invalid)?;

        let mut sphere = Self {
            radius,
            latitude_count,
            longitude_count,
            vertices: Vec::with_capacity(vertex_count as usize),
            indices: Vec::with_capacity(index_count as usize),
        };
        sphere.generate_vertices();
        sphere.generate_indices();
        Ok(sphere)
    }

    /// Vertex and index counts, or `None` when either does not fit `u32` indexing.
    fn counts(latitude_count: u32, longitude_count: u32) -> Option<(u32, u32)> {
        let rings = latitude_count.checked_add(1)?;
        let ring_len = longitude_count.checked_add(1)?;
        let vertex_count = rings.checked_mul(ring_len)?;
        let index_count = latitude_count.checked_mul(longitude_count)?.checked_mul(6)?;
        Some((vertex_count, index_count))
    }

    fn generate_vertices(&mut self) {
        let radius = self.radius;

        for lat in 0..=self.latitude_count {
            let theta = lat as f32 * PI / self.latitude_count as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            for lon in 0..=self.longitude_count {
                let phi = lon as f32 * 2.0 * PI / self.longitude_count as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();

                let normal = [cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
                self.vertices.push(Vertex {
                    position: normal.map(|c| c * radius),
                    normal,
                });
            }
        }
    }

    fn generate_indices(&mut self) {
        let ring_len = self.longitude_count + 1;

        for lat in 0..self.latitude_count {
            for lon in 0..self.longitude_count {
                let current = lat * ring_len + lon;
                let next = current + ring_len;

                self.indices
                    .extend_from_slice(&[current, next, current + 1]);
                self.indices
                    .extend_from_slice(&[current + 1, next, next + 1]);
            }
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn counts_follow_resolution() {
        let sphere = SphereMesh::new(1.0, 32, 32).unwrap();
        assert_eq!(sphere.vertex_count(), 33 * 33);
        assert_eq!(sphere.index_count(), 32 * 32 * 6);

        let sphere = SphereMesh::new(2.0, 4, 8).unwrap();
        assert_eq!(sphere.vertex_count(), 5 * 9);
        assert_eq!(sphere.index_count(), 4 * 8 * 6);
    }

    #[test]
    fn indices_stay_in_bounds() {
        let sphere = SphereMesh::new(1.0, 7, 5).unwrap();
        let count = sphere.vertex_count();
        assert!(sphere.indices().iter().all(|&index| index < count));
    }

    #[test]
    fn positions_lie_on_surface_with_unit_normals() {
        let radius = 2.5;
        let sphere = SphereMesh::new(radius, 12, 16).unwrap();
        for vertex in sphere.vertices() {
            let position = Vec3::from(vertex.position);
            let normal = Vec3::from(vertex.normal);
            assert!((position.length() - radius).abs() < 1e-5);
            assert!((normal.length() - 1.0).abs() < 1e-5);
            assert!(position.abs_diff_eq(normal * radius, 1e-5));
        }
    }

    #[test]
    fn poles_and_seam() {
        let sphere = SphereMesh::new(1.0, 4, 6).unwrap();
        let vertices = sphere.vertices();
        assert!(Vec3::from(vertices[0].position).abs_diff_eq(Vec3::Y, 1e-6));
        let last = vertices.len() - 1;
        assert!(Vec3::from(vertices[last].position).abs_diff_eq(Vec3::NEG_Y, 1e-6));

        // first and last vertex of the equator ring coincide
        let ring = 2 * 7;
        let start = Vec3::from(vertices[ring].position);
        let end = Vec3::from(vertices[ring + 6].position);
        assert!(start.abs_diff_eq(end, 1e-5));
        assert!(start.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn first_quad_winding() {
        let sphere = SphereMesh::new(1.0, 3, 4).unwrap();
        assert_eq!(&sphere.indices()[..6], &[0, 5, 1, 1, 5, 6]);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(matches!(
            SphereMesh::new(0.0, 8, 8),
            Err(Error::InvalidSphere { .. })
        ));
        assert!(SphereMesh::new(-1.0, 8, 8).is_err());
        assert!(SphereMesh::new(f32::NAN, 8, 8).is_err());
        assert!(SphereMesh::new(1.0, 1, 8).is_err());
        assert!(SphereMesh::new(1.0, 8, 2).is_err());
        assert!(SphereMesh::new(1.0, 2, 3).is_ok());
    }

    #[test]
    fn rejects_counts_beyond_u32_indexing() {
        assert!(matches!(
            SphereMesh::new(1.0, u32::MAX, 3),
            Err(Error::InvalidSphere { .. })
        ));
        assert!(SphereMesh::new(1.0, 3, u32::MAX).is_err());
        assert!(SphereMesh::new(1.0, 65536, 65536).is_err());
        // vertices still fit, indices do not
        assert_eq!(SphereMesh::counts(65535, 65534), None);
        assert!(SphereMesh::new(1.0, 65535, 65534).is_err());
    }

    #[test]
    fn counts_match_generated_mesh() {
        let sphere = SphereMesh::new(1.0, 9, 14).unwrap();
        assert_eq!(
            SphereMesh::counts(9, 14),
            Some((sphere.vertex_count(), sphere.index_count()))
        );
    }

    #[test]
    fn invalid_sphere_message_names_parameters() {
        let error = SphereMesh::new(-1.0, 1, 2).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid sphere parameters: radius -1, 1 latitudes, 2 longitudes"
        );
    }
}
