pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod dirty;
pub mod engine;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod presenter;
pub mod surface;

pub use engine::{PreviewEngine, WorldEngine};
pub use error::{ContextError, InvalidDimensions, RenderError, WorldLoadError};
pub use framebuffer::{Framebuffer, Pixel};
pub use input::{Button, KeyBindings};
pub use presenter::{FrameSnapshot, PresentationContext, TickOutcome};
