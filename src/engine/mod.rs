pub mod camera;
pub mod parser;
pub mod preview;
pub mod scene;

pub use camera::Camera;
pub use preview::PreviewEngine;
pub use scene::{Material, Scene, Sphere, World};

use crate::error::{RenderError, WorldLoadError};
use crate::framebuffer::Framebuffer;

/// Boundary to the world-simulation/rendering engine.
///
/// The presentation core treats the world as opaque: it loads it once, passes
/// it to `render`, and forwards camera deltas. Everything else about the
/// world is the engine's business.
pub trait WorldEngine {
    /// Opaque world state: scene contents plus camera.
    type World;

    /// Parse a world definition. Empty or malformed source is an error; the
    /// caller treats it as fatal for the presentation context.
    fn load_world(&self, source: &str) -> Result<Self::World, WorldLoadError>;

    /// Fill `framebuffer` with pixels for the current world state.
    ///
    /// Called on every tick while the contents are stale, so repeated calls
    /// with unchanged state must be tolerated. An engine that fails must do
    /// so before writing any pixels; the buffer it was handed stays on
    /// screen until a later tick succeeds.
    fn render(&self, framebuffer: &mut Framebuffer, world: &Self::World)
        -> Result<(), RenderError>;

    /// Translate the camera by the given axis deltas.
    fn move_camera(&self, world: &mut Self::World, dx: f32, dy: f32, dz: f32);
}
