//! The state machine driving stroke input on the canvas.
//!
//! ```text
//!            pointer down
//!   ┌──────┐ ───────────► ┌─────────┐ ◄─┐
//!   │ Idle │              │ Drawing │   │ pointer move
//!   └──────┘ ◄─────────── └─────────┘ ──┘
//!            pointer up / leave
//! ```
//!
//! Pointer moves while idle never reach the surface, so hovering over the
//! canvas cannot draw.
use egui::Pos2;

/// The possible states of the stroke input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// No button held over the canvas
    #[default]
    Idle,
    /// A stroke is in progress
    Drawing {
        /// Where the pointer went down
        origin: Pos2,
        /// End of the most recently rendered segment
        last: Pos2,
    },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            (EditorState::Idle, EditorState::Drawing { .. }) => true,
            (EditorState::Drawing { .. }, _) => true,
            (EditorState::Idle, EditorState::Idle) => false,
        }
    }

    pub fn begin_drawing(origin: Pos2) -> Self {
        EditorState::Drawing {
            origin,
            last: origin,
        }
    }

    /// Returns true if no stroke is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true if a stroke is in progress
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    /// Origin of the stroke in progress, if any
    pub fn stroke_origin(&self) -> Option<Pos2> {
        match self {
            EditorState::Drawing { origin, .. } => Some(*origin),
            EditorState::Idle => None,
        }
    }

    /// Last point reached by the stroke in progress, if any
    pub fn last_point(&self) -> Option<Pos2> {
        match self {
            EditorState::Drawing { last, .. } => Some(*last),
            EditorState::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Drawing { .. } => "Drawing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_transitions() {
        let idle = EditorState::Idle;
        let drawing = EditorState::begin_drawing(pos2(1.0, 2.0));

        assert!(idle.can_transition_to(&drawing));
        assert!(drawing.can_transition_to(&idle));
        assert!(drawing.can_transition_to(&drawing));
        assert!(!idle.can_transition_to(&idle));
    }

    #[test]
    fn test_drawing_tracks_points() {
        let state = EditorState::begin_drawing(pos2(3.0, 4.0));
        assert!(state.is_drawing());
        assert_eq!(state.stroke_origin(), Some(pos2(3.0, 4.0)));
        assert_eq!(state.last_point(), Some(pos2(3.0, 4.0)));
        assert_eq!(EditorState::Idle.last_point(), None);
        assert_eq!(EditorState::default(), EditorState::Idle);
    }
}
