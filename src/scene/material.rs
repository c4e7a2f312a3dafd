//! Surface material presets selectable at runtime.

use std::fmt;

use glam::Vec3;

/// Phong reflection coefficients plus the tint the lit result is multiplied by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
    pub base_color: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    #[default]
    Metal,
    Wall,
    Wood,
    Plastic,
}

impl Material {
    pub const ALL: [Material; 4] = [
        Material::Metal,
        Material::Wall,
        Material::Wood,
        Material::Plastic,
    ];

    pub fn id(self) -> u32 {
        match self {
            Material::Metal => 0,
            Material::Wall => 1,
            Material::Wood => 2,
            Material::Plastic => 3,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Metal => "Metal",
            Material::Wall => "Wall",
            Material::Wood => "Wood",
            Material::Plastic => "Plastic",
        }
    }

    /// How the material reflects light.
    pub fn description(self) -> &'static str {
        match self {
            Material::Metal => "specular reflection",
            Material::Wall => "diffuse reflection",
            Material::Wood | Material::Plastic => "between specular and diffuse",
        }
    }

    pub fn properties(self) -> MaterialProperties {
        match self {
            Material::Metal => MaterialProperties {
                ambient: Vec3::splat(0.25),
                diffuse: Vec3::splat(0.4),
                specular: Vec3::splat(0.774597),
                shininess: 76.8,
                base_color: Vec3::splat(0.8),
            },
            Material::Wall => MaterialProperties {
                ambient: Vec3::splat(0.05),
                diffuse: Vec3::splat(0.55),
                specular: Vec3::splat(0.07),
                shininess: 2.8,
                base_color: Vec3::new(0.9, 0.85, 0.7),
            },
            Material::Wood => MaterialProperties {
                ambient: Vec3::new(0.1, 0.05, 0.0),
                diffuse: Vec3::new(0.5, 0.25, 0.0),
                specular: Vec3::new(0.3, 0.15, 0.0),
                shininess: 32.0,
                base_color: Vec3::new(0.6, 0.3, 0.1),
            },
            Material::Plastic => MaterialProperties {
                ambient: Vec3::new(0.0, 0.1, 0.06),
                diffuse: Vec3::new(0.0, 0.51, 0.3),
                specular: Vec3::splat(0.5),
                shininess: 32.0,
                base_color: Vec3::new(0.2, 0.7, 0.2),
            },
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for material in Material::ALL {
            assert_eq!(Material::from_id(material.id()), Some(material));
        }
        assert_eq!(Material::from_id(4), None);
    }

    #[test]
    fn default_is_metal() {
        assert_eq!(Material::default(), Material::Metal);
    }

    #[test]
    fn metal_is_shinier_than_wall() {
        let metal = Material::Metal.properties();
        let wall = Material::Wall.properties();
        assert!(metal.shininess > wall.shininess);
        assert!(metal.specular.x > wall.specular.x);
        assert!(wall.diffuse.x > metal.diffuse.x);
    }

    #[test]
    fn display_names_reflection() {
        assert_eq!(Material::Metal.to_string(), "Metal (specular reflection)");
        assert_eq!(Material::Wall.to_string(), "Wall (diffuse reflection)");
    }
}
