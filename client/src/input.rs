//! Physical input channels and the logical action they map onto.

/// Raw input channel reported by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Mouse/pen button press.
    PointerPress,
    /// Touch start on a touchscreen.
    TouchStart,
}

/// Logical game action.
///
/// Both physical channels collapse onto the same "interact" action; what
/// it does depends on the current game phase (flap while playing, replay
/// after a game over).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Interact,
}

impl From<InputSource> for InputAction {
    fn from(source: InputSource) -> Self {
        match source {
            InputSource::PointerPress | InputSource::TouchStart => InputAction::Interact,
        }
    }
}
