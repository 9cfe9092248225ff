use crate::input::InputEvent;
use crate::state::{BrushSettings, EditorState};
use crate::surface::Surface;
use egui::Pos2;

/// Drives the surface's stroke lifecycle from canvas pointer events.
///
/// The style is read from the settings for every segment, so a change made
/// mid-stroke applies to the following segments only.
#[derive(Debug, Default)]
pub struct StrokeController {
    state: EditorState,
}

impl StrokeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Handles one event. Returns true if the raster changed.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        settings: &BrushSettings,
        surface: &mut Surface,
    ) -> bool {
        match (*event, self.state) {
            (InputEvent::PointerDown { pos }, _) => {
                if self.state.is_drawing() {
                    log::debug!("Pointer down without release, restarting stroke");
                }
                self.begin(pos, surface);
                false
            }
            (InputEvent::PointerMove { pos }, EditorState::Drawing { origin, last }) => {
                if pos == last {
                    return false;
                }
                let changed = surface.extend_stroke(
                    pos,
                    &settings.stroke_style(),
                    settings.composite_mode(),
                );
                self.transition(EditorState::Drawing { origin, last: pos });
                changed
            }
            (InputEvent::PointerUp { .. } | InputEvent::PointerLeave, EditorState::Drawing { .. }) => {
                self.finish(surface);
                false
            }
            // Hovering, or a release without a press on the canvas
            (_, EditorState::Idle) => false,
        }
    }

    /// Handles events in order. Returns true if any of them changed the raster.
    pub fn handle_events<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
        settings: &BrushSettings,
        surface: &mut Surface,
    ) -> bool {
        events
            .into_iter()
            .fold(false, |changed, event| self.handle_event(event, settings, surface) | changed)
    }

    fn begin(&mut self, pos: Pos2, surface: &mut Surface) {
        log::debug!("Stroke started at ({:.1}, {:.1})", pos.x, pos.y);
        surface.begin_stroke(pos);
        self.transition(EditorState::begin_drawing(pos));
    }

    fn finish(&mut self, surface: &mut Surface) {
        if let Some(origin) = self.state.stroke_origin() {
            log::debug!("Stroke from ({:.1}, {:.1}) finished", origin.x, origin.y);
        }
        surface.end_stroke();
        self.transition(EditorState::Idle);
    }

    fn transition(&mut self, new_state: EditorState) {
        debug_assert!(
            self.state.can_transition_to(&new_state),
            "invalid transition {} -> {}",
            self.state.name(),
            new_state.name()
        );
        self.state = new_state;
    }
}
