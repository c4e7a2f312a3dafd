use log::debug;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::scene::Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Exit,
    SelectMaterial(Material),
}

/// Maps raw keyboard events to demo actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Escape closes on release; the number row picks a material on press.
    pub fn handle_key(
        &self,
        keycode: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputAction> {
        let action = match (keycode, state) {
            (KeyCode::Escape, ElementState::Released) => Some(InputAction::Exit),
            (_, ElementState::Pressed) if !repeat => {
                Self::material_for_key(keycode).map(InputAction::SelectMaterial)
            }
            _ => None,
        };
        if let Some(action) = action {
            debug!("{:?} {:?} -> {:?}", keycode, state, action);
        }
        action
    }

    fn material_for_key(keycode: KeyCode) -> Option<Material> {
        match keycode {
            KeyCode::Digit1 => Some(Material::Metal),
            KeyCode::Digit2 => Some(Material::Wall),
            KeyCode::Digit3 => Some(Material::Wood),
            KeyCode::Digit4 => Some(Material::Plastic),
            _ => None,
        }
    }
}
