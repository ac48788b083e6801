use glam::Vec3;

use super::parser;
use super::scene::World;
use super::WorldEngine;
use crate::error::{RenderError, WorldLoadError};
use crate::framebuffer::{Framebuffer, Pixel};

/// Built-in engine that shades the framebuffer deterministically from camera
/// position and scene contents.
///
/// It stands in for a full tracer the way the original project's pattern
/// renderer did: cheap enough to run on every tick, and sensitive to camera
/// moves so staleness is visible on screen. A real renderer plugs in through
/// the same [`WorldEngine`] boundary.
#[derive(Debug, Default)]
pub struct PreviewEngine;

impl PreviewEngine {
    pub fn new() -> Self {
        Self
    }
}

/// How strongly one unit of camera travel shifts the pattern.
const PHASE_SCALE: f32 = 0.25;

impl WorldEngine for PreviewEngine {
    type World = World;

    fn load_world(&self, source: &str) -> Result<World, WorldLoadError> {
        parser::parse_world(source)
    }

    fn render(&self, framebuffer: &mut Framebuffer, world: &World) -> Result<(), RenderError> {
        let (width, height) = framebuffer.dimensions();
        let tint = world.scene.average_color();
        let origin = world.camera.origin();

        let horizontal_phase = (origin.x + origin.z) * PHASE_SCALE;
        let vertical_phase = origin.y * PHASE_SCALE;

        for y in 0..height {
            let fy = y as f32 / height as f32;
            for x in 0..width {
                let fx = x as f32 / width as f32;
                let r = ((fx + horizontal_phase).rem_euclid(1.0) * tint.x * 255.0) as u8;
                let g = ((fy + vertical_phase).rem_euclid(1.0) * tint.y * 255.0) as u8;
                let b = ((1.0 - fy) * tint.z * 255.0) as u8;
                let index = framebuffer.index(x, y);
                framebuffer.pixels_mut()[index] = Pixel::opaque(r, g, b);
            }
        }

        Ok(())
    }

    fn move_camera(&self, world: &mut World, dx: f32, dy: f32, dz: f32) {
        world.camera.translate(Vec3::new(dx, dy, dz));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: &str = "\
        camera origin 0.0 0.0 0.0 aspect 1.0 ;\n\
        material red : Diffuse color 1.0 0.2 0.2 ;\n\
        sphere center 0.0 0.0 -1.0 radius 0.5 material red ;";

    #[test]
    fn load_world_parses_source() {
        let engine = PreviewEngine::new();
        let world = engine.load_world(WORLD).unwrap();
        assert_eq!(world.scene.spheres.len(), 1);
    }

    #[test]
    fn load_world_rejects_empty_source() {
        let engine = PreviewEngine::new();
        assert_eq!(
            engine.load_world("").unwrap_err(),
            WorldLoadError::EmptySource
        );
    }

    #[test]
    fn render_is_deterministic() {
        let engine = PreviewEngine::new();
        let world = engine.load_world(WORLD).unwrap();

        let mut first = Framebuffer::allocate(32, 32).unwrap();
        let mut second = Framebuffer::allocate(32, 32).unwrap();
        engine.render(&mut first, &world).unwrap();
        engine.render(&mut second, &world).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn render_fills_every_pixel_opaque() {
        let engine = PreviewEngine::new();
        let world = engine.load_world(WORLD).unwrap();

        let mut fb = Framebuffer::allocate(16, 16).unwrap();
        engine.render(&mut fb, &world).unwrap();

        assert!(fb.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn camera_moves_change_the_output() {
        let engine = PreviewEngine::new();
        let mut world = engine.load_world(WORLD).unwrap();

        let mut before = Framebuffer::allocate(32, 32).unwrap();
        engine.render(&mut before, &world).unwrap();

        engine.move_camera(&mut world, 0.5, 0.0, 0.0);

        let mut after = Framebuffer::allocate(32, 32).unwrap();
        engine.render(&mut after, &world).unwrap();

        assert_ne!(before.as_bytes(), after.as_bytes());
    }

    #[test]
    fn move_camera_translates_origin() {
        let engine = PreviewEngine::new();
        let mut world = engine.load_world(WORLD).unwrap();

        engine.move_camera(&mut world, -0.1, 0.0, 0.0);
        engine.move_camera(&mut world, -0.1, 0.2, 0.0);

        let origin = world.camera.origin();
        assert!((origin.x - -0.2).abs() < 1e-6);
        assert!((origin.y - 0.2).abs() < 1e-6);
        assert_eq!(origin.z, 0.0);
    }
}
