use log::warn;
use parking_lot::Mutex;

use crate::dirty::DirtyFlag;
use crate::engine::WorldEngine;
use crate::error::{ContextError, RenderError};
use crate::framebuffer::Framebuffer;
use crate::input::{Button, KeyBindings};

/// Outcome of one render tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was stale; the render was skipped entirely.
    Skipped,
    /// A render ran and a fresh snapshot was published.
    Rendered,
}

/// Borrowed view of the current pixel contents.
///
/// Row-major, stride `width * 4` bytes, premultiplied RGBA8. Valid only for
/// the duration of the publish callback, which runs under the presentation
/// lock, so the bytes cannot be replaced mid-read.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub width: u32,
    pub height: u32,
    pub bytes: &'a [u8],
}

#[derive(Debug)]
struct PresentationState<W> {
    framebuffer: Framebuffer,
    dirty: DirtyFlag,
    world: W,
}

/// Per-window bundle of framebuffer, dirty flag and world state.
///
/// One mutex guards the triple. Resize, input dispatch, the render tick and
/// the snapshot publish all run while holding it, so a tick can never observe
/// a half-replaced buffer and a camera move landing between a tick's dirty
/// check and its clear is never lost. Refresh ticks and input events may
/// arrive from different execution contexts; ordering between them is
/// last-write-wins on the world and eager-OR on the dirty flag.
pub struct PresentationContext<E: WorldEngine> {
    engine: E,
    bindings: KeyBindings,
    state: Mutex<PresentationState<E::World>>,
}

impl<E: WorldEngine + std::fmt::Debug> std::fmt::Debug for PresentationContext<E>
where
    E::World: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationContext")
            .field("engine", &self.engine)
            .field("bindings", &self.bindings)
            .field("state", &self.state)
            .finish()
    }
}

impl<E: WorldEngine> PresentationContext<E> {
    /// Create a context for a window of the given size with default key
    /// bindings. See [`PresentationContext::with_bindings`].
    pub fn new(engine: E, source: &str, width: u32, height: u32) -> Result<Self, ContextError> {
        Self::with_bindings(engine, KeyBindings::default(), source, width, height)
    }

    /// Create a context for a window of the given size.
    ///
    /// The world source is parsed eagerly; failure is fatal and no
    /// framebuffer is ever allocated. The context starts dirty so the first
    /// tick renders.
    pub fn with_bindings(
        engine: E,
        bindings: KeyBindings,
        source: &str,
        width: u32,
        height: u32,
    ) -> Result<Self, ContextError> {
        let world = engine.load_world(source)?;
        let framebuffer = Framebuffer::allocate(width, height)?;
        Ok(Self {
            engine,
            bindings,
            state: Mutex::new(PresentationState {
                framebuffer,
                dirty: DirtyFlag::new_dirty(),
                world,
            }),
        })
    }

    /// The engine this context renders through.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Current framebuffer dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        self.state.lock().framebuffer.dimensions()
    }

    /// Whether the next tick would render.
    pub fn is_dirty(&self) -> bool {
        self.state.lock().dirty.is_dirty()
    }

    /// Apply a window-geometry change.
    ///
    /// Identical dimensions are a no-op that neither reallocates nor marks
    /// dirty. Any dimension change replaces the buffer wholesale (the prior
    /// storage is released as part of the replacement) and marks the contents
    /// stale. A zero dimension is logged and ignored, keeping the prior
    /// buffer current.
    pub fn resize(&self, width: u32, height: u32) {
        let mut state = self.state.lock();
        if state.framebuffer.matches(width, height) {
            return;
        }
        match Framebuffer::allocate(width, height) {
            Ok(framebuffer) => {
                state.framebuffer = framebuffer;
                state.dirty.mark();
            }
            Err(err) => warn!("ignoring resize request: {err}"),
        }
    }

    /// Route one button press into the world.
    ///
    /// Bound buttons move the camera, mark the contents stale and report
    /// consumed; anything else reports unconsumed and is left to the caller.
    /// Dispatch never renders; the next tick picks the change up.
    pub fn dispatch(&self, button: Button) -> bool {
        let Some(delta) = self.bindings.delta(button) else {
            return false;
        };
        let mut state = self.state.lock();
        let PresentationState { world, dirty, .. } = &mut *state;
        self.engine.move_camera(world, delta.x, delta.y, delta.z);
        dirty.mark();
        true
    }

    /// One render tick.
    ///
    /// Skips when nothing is stale, which makes ticks at display-refresh
    /// cadence free while the scene is idle. When stale, renders into the
    /// framebuffer and hands the fresh snapshot to `publish` before the lock
    /// is released. A failed render leaves the buffer untouched and the flag
    /// set, so the next tick retries.
    pub fn tick<F>(&self, publish: F) -> Result<TickOutcome, RenderError>
    where
        F: FnOnce(FrameSnapshot<'_>),
    {
        let mut state = self.state.lock();
        if !state.dirty.consume() {
            return Ok(TickOutcome::Skipped);
        }

        let PresentationState {
            framebuffer,
            dirty,
            world,
        } = &mut *state;

        if let Err(err) = self.engine.render(framebuffer, world) {
            dirty.mark();
            return Err(err);
        }

        publish(FrameSnapshot {
            width: framebuffer.width(),
            height: framebuffer.height(),
            bytes: framebuffer.as_bytes(),
        });
        Ok(TickOutcome::Rendered)
    }

    /// Read the current pixel contents without rendering.
    ///
    /// Used to re-present the last frame when the surface needs redrawing
    /// but nothing in the world changed.
    pub fn with_snapshot<F, T>(&self, read: F) -> T
    where
        F: FnOnce(FrameSnapshot<'_>) -> T,
    {
        let state = self.state.lock();
        read(FrameSnapshot {
            width: state.framebuffer.width(),
            height: state.framebuffer.height(),
            bytes: state.framebuffer.as_bytes(),
        })
    }
}
