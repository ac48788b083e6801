use thiserror::Error;

/// A framebuffer was requested with a zero dimension.
///
/// Resize paths treat this as a non-event: the request is logged and the
/// prior buffer stays current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid framebuffer dimensions {width}x{height}")]
pub struct InvalidDimensions {
    pub width: u32,
    pub height: u32,
}

/// The world definition could not be turned into a world.
///
/// Fatal for the presentation context: without a world there is nothing to
/// render, so creation aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldLoadError {
    #[error("world source is empty")]
    EmptySource,
    #[error("world source is malformed near `{near}`")]
    Malformed { near: String },
    #[error("sphere references undeclared material `{0}`")]
    UnknownMaterial(String),
}

impl WorldLoadError {
    pub fn malformed(near: &str) -> Self {
        // Enough of the remaining source to locate the problem.
        let snippet: String = near.chars().take(24).collect();
        Self::Malformed { near: snippet }
    }
}

/// The engine failed to produce pixels for a tick.
///
/// Transient: the framebuffer keeps its previous contents and stays marked
/// stale, so the next tick retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render failed: {reason}")]
pub struct RenderError {
    pub reason: String,
}

impl RenderError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure to create a presentation context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error(transparent)]
    WorldLoad(#[from] WorldLoadError),
    #[error(transparent)]
    InvalidDimensions(#[from] InvalidDimensions),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_requested_size() {
        let err = InvalidDimensions {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "invalid framebuffer dimensions 0x600");
    }

    #[test]
    fn malformed_truncates_long_snippets() {
        let err = WorldLoadError::malformed("sphere center 1.0 2.0 3.0 radius 1.0 material red ;");
        match err {
            WorldLoadError::Malformed { near } => assert_eq!(near.chars().count(), 24),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn context_error_wraps_world_load() {
        let err: ContextError = WorldLoadError::EmptySource.into();
        assert_eq!(err.to_string(), "world source is empty");
    }

    #[test]
    fn context_error_wraps_invalid_dimensions() {
        let err: ContextError = InvalidDimensions {
            width: 10,
            height: 0,
        }
        .into();
        assert_eq!(err.to_string(), "invalid framebuffer dimensions 10x0");
    }

    #[test]
    fn render_error_carries_reason() {
        let err = RenderError::new("surface lost");
        assert_eq!(err.to_string(), "render failed: surface lost");
    }
}
