use glam::Vec3;
use winit::keyboard::KeyCode;

/// Camera translation applied per key press, in world units.
pub const CAMERA_STEP: f32 = 0.1;

/// Input button identifier, decoupled from any windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
    Escape,
}

/// Fixed map from movement keys to camera deltas.
///
/// Only the six movement keys are bound; every other button yields `None`
/// and must be left for the surrounding shell to handle.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    step: f32,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self { step: CAMERA_STEP }
    }

    pub fn with_step(step: f32) -> Self {
        Self { step }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Camera delta for a button, or `None` when the button is not bound.
    pub fn delta(&self, button: Button) -> Option<Vec3> {
        let direction = match button {
            Button::KeyW => Vec3::new(0.0, 0.0, -1.0),
            Button::KeyS => Vec3::new(0.0, 0.0, 1.0),
            Button::KeyA => Vec3::new(-1.0, 0.0, 0.0),
            Button::KeyD => Vec3::new(1.0, 0.0, 0.0),
            Button::KeyQ => Vec3::new(0.0, -1.0, 0.0),
            Button::KeyE => Vec3::new(0.0, 1.0, 0.0),
            _ => return None,
        };
        Some(direction * self.step)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a winit keycode to a [`Button`]. `None` means the event stays with
/// the windowing layer.
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::KeyW => Some(Button::KeyW),
        KeyCode::KeyA => Some(Button::KeyA),
        KeyCode::KeyS => Some(Button::KeyS),
        KeyCode::KeyD => Some(Button::KeyD),
        KeyCode::KeyQ => Some(Button::KeyQ),
        KeyCode::KeyE => Some(Button::KeyE),
        KeyCode::Space => Some(Button::Space),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
        KeyCode::Escape => Some(Button::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_are_bound() {
        let bindings = KeyBindings::new();
        for button in [
            Button::KeyW,
            Button::KeyA,
            Button::KeyS,
            Button::KeyD,
            Button::KeyQ,
            Button::KeyE,
        ] {
            assert!(bindings.delta(button).is_some(), "{button:?} should bind");
        }
    }

    #[test]
    fn non_movement_keys_are_unbound() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.delta(Button::Space), None);
        assert_eq!(bindings.delta(Button::Shift), None);
        assert_eq!(bindings.delta(Button::Escape), None);
    }

    #[test]
    fn deltas_use_the_configured_step() {
        let bindings = KeyBindings::with_step(0.5);
        assert_eq!(
            bindings.delta(Button::KeyD).unwrap(),
            Vec3::new(0.5, 0.0, 0.0)
        );
        assert_eq!(
            bindings.delta(Button::KeyW).unwrap(),
            Vec3::new(0.0, 0.0, -0.5)
        );
    }

    #[test]
    fn opposite_keys_cancel() {
        let bindings = KeyBindings::new();
        let sum = bindings.delta(Button::KeyA).unwrap() + bindings.delta(Button::KeyD).unwrap();
        assert_eq!(sum, Vec3::ZERO);

        let sum = bindings.delta(Button::KeyQ).unwrap() + bindings.delta(Button::KeyE).unwrap();
        assert_eq!(sum, Vec3::ZERO);
    }

    #[test]
    fn keycodes_map_to_buttons() {
        assert_eq!(keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(keycode_to_button(KeyCode::ShiftLeft), Some(Button::Shift));
        assert_eq!(keycode_to_button(KeyCode::ShiftRight), Some(Button::Shift));
        assert_eq!(keycode_to_button(KeyCode::Escape), Some(Button::Escape));
    }

    #[test]
    fn unknown_keycodes_pass_through() {
        assert_eq!(keycode_to_button(KeyCode::F12), None);
        assert_eq!(keycode_to_button(KeyCode::Tab), None);
    }
}
