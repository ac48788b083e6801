use glam::Vec3;

use super::camera::Camera;

/// Surface appearance of a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Diffuse { color: Vec3 },
    Metal { color: Vec3, fuzz: f32 },
}

impl Material {
    pub fn base_color(&self) -> Vec3 {
        match self {
            Material::Diffuse { color } => *color,
            Material::Metal { color, .. } => *color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

/// Everything a world definition declares besides the camera.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Average base color of the scene's materials; white for an empty scene.
    pub fn average_color(&self) -> Vec3 {
        if self.spheres.is_empty() {
            return Vec3::ONE;
        }
        let sum: Vec3 = self
            .spheres
            .iter()
            .map(|sphere| sphere.material.base_color())
            .sum();
        sum / self.spheres.len() as f32
    }
}

/// Loaded world state handed back by `load_world`.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub camera: Camera,
    pub scene: Scene,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(color: Vec3) -> Sphere {
        Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
            material: Material::Diffuse { color },
        }
    }

    #[test]
    fn base_color_for_both_material_kinds() {
        let diffuse = Material::Diffuse {
            color: Vec3::new(0.5, 0.2, 0.1),
        };
        let metal = Material::Metal {
            color: Vec3::new(0.9, 0.9, 0.9),
            fuzz: 0.3,
        };
        assert_eq!(diffuse.base_color(), Vec3::new(0.5, 0.2, 0.1));
        assert_eq!(metal.base_color(), Vec3::new(0.9, 0.9, 0.9));
    }

    #[test]
    fn empty_scene_averages_to_white() {
        assert_eq!(Scene::default().average_color(), Vec3::ONE);
    }

    #[test]
    fn average_color_mixes_materials() {
        let scene = Scene {
            spheres: vec![
                sphere(Vec3::new(1.0, 0.0, 0.0)),
                sphere(Vec3::new(0.0, 1.0, 0.0)),
            ],
        };
        assert_eq!(scene.average_color(), Vec3::new(0.5, 0.5, 0.0));
    }
}
