use egui::{Context, Pos2, Rect, Response};

/// Pointer events on the canvas, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas (with or without buttons held)
    PointerMove { pos: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// The parts of one frame's pointer input that matter for drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Pointer position in screen coordinates, `None` when outside the window
    /// or over something drawn above the canvas
    pub pos: Option<Pos2>,
    pub moved: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerSnapshot {
    /// Reads the pointer state of the current frame
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            pos: i.pointer.latest_pos(),
            moved: i.pointer.delta() != egui::Vec2::ZERO,
            primary_pressed: i.pointer.primary_pressed(),
            primary_released: i.pointer.primary_released(),
        })
    }
}

/// Converts raw egui pointer input into canvas [`InputEvent`]s.
///
/// Only input over the canvas produces events, the way a browser delivers
/// mouse events to the element under the cursor. A popup, a panel or a clip
/// edge between the pointer and the canvas hides it, and losing the canvas
/// produces a single [`InputEvent::PointerLeave`].
#[derive(Debug, Default)]
pub struct InputHandler {
    over_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer was over the canvas in the last processed frame
    pub fn is_over_canvas(&self) -> bool {
        self.over_canvas
    }

    /// Process raw egui input for the canvas widget behind `canvas`
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let mut snapshot = PointerSnapshot::from_egui(ctx);
        // egui hit-tests layers and clip rects, the raw position does not.
        if !canvas.contains_pointer() {
            snapshot.pos = None;
        }
        self.translate(snapshot, canvas.rect)
    }

    /// Turns one frame's pointer snapshot into canvas events
    pub fn translate(&mut self, snapshot: PointerSnapshot, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside = snapshot.pos.filter(|pos| canvas_rect.contains(*pos));
        let to_canvas = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if self.over_canvas && inside.is_none() {
            events.push(InputEvent::PointerLeave);
        }

        if let Some(pos) = inside {
            let pos = to_canvas(pos);
            if snapshot.primary_pressed {
                events.push(InputEvent::PointerDown { pos });
            }
            if snapshot.moved {
                events.push(InputEvent::PointerMove { pos });
            }
            if snapshot.primary_released {
                events.push(InputEvent::PointerUp { pos });
            }
        }

        self.over_canvas = inside.is_some();
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, PointerButton, pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), vec2(800.0, 600.0))
    }

    fn at(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            pos: Some(pos2(x, y)),
            moved: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_positions_are_canvas_relative() {
        let mut handler = InputHandler::new();
        let events = handler.translate(
            PointerSnapshot {
                primary_pressed: true,
                ..at(110.0, 60.0)
            },
            canvas(),
        );
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: pos2(10.0, 10.0) },
                InputEvent::PointerMove { pos: pos2(10.0, 10.0) },
            ]
        );
    }

    #[test]
    fn test_leaving_canvas_emits_single_leave() {
        let mut handler = InputHandler::new();
        handler.translate(at(200.0, 200.0), canvas());
        assert!(handler.is_over_canvas());

        let events = handler.translate(at(10.0, 10.0), canvas());
        assert_eq!(events, vec![InputEvent::PointerLeave]);
        assert!(!handler.is_over_canvas());

        assert!(handler.translate(at(20.0, 10.0), canvas()).is_empty());
    }

    #[test]
    fn test_pointer_outside_window_counts_as_leave() {
        let mut handler = InputHandler::new();
        handler.translate(at(200.0, 200.0), canvas());
        let events = handler.translate(PointerSnapshot::default(), canvas());
        assert_eq!(events, vec![InputEvent::PointerLeave]);
    }

    #[test]
    fn test_release_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        let events = handler.translate(
            PointerSnapshot {
                primary_released: true,
                ..at(5.0, 5.0)
            },
            canvas(),
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_still_pointer_does_not_move() {
        let mut handler = InputHandler::new();
        handler.translate(at(200.0, 200.0), canvas());
        let events = handler.translate(
            PointerSnapshot {
                moved: false,
                ..at(200.0, 200.0)
            },
            canvas(),
        );
        assert!(events.is_empty());
    }

    /// A canvas at (100, 100) run through a real egui context, optionally
    /// with a popup area above it or a clip rect hiding part of it.
    struct Scene {
        ctx: Context,
        handler: InputHandler,
        popup: bool,
        clip: Option<Rect>,
    }

    impl Scene {
        fn new() -> Self {
            Self {
                ctx: Context::default(),
                handler: InputHandler::new(),
                popup: false,
                clip: None,
            }
        }

        fn with_popup() -> Self {
            Self {
                popup: true,
                ..Self::new()
            }
        }

        fn frame(&mut self, events: Vec<Event>) -> Vec<InputEvent> {
            let input = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 768.0))),
                events,
                ..Default::default()
            };
            let mut out = Vec::new();
            let _ = self.ctx.run(input, |ctx| {
                let canvas = egui::CentralPanel::default()
                    .show(ctx, |ui| {
                        if let Some(clip) = self.clip {
                            ui.set_clip_rect(clip);
                        }
                        ui.allocate_rect(
                            Rect::from_min_size(pos2(100.0, 100.0), vec2(800.0, 600.0)),
                            egui::Sense::click_and_drag(),
                        )
                    })
                    .inner;
                if self.popup {
                    egui::Area::new(egui::Id::new("popup"))
                        .order(egui::Order::Foreground)
                        .fixed_pos(pos2(150.0, 150.0))
                        .show(ctx, |ui| {
                            ui.allocate_exact_size(vec2(200.0, 200.0), egui::Sense::click());
                        });
                }
                out = self.handler.process_input(ctx, &canvas);
            });
            out
        }

        /// Hovers `pos` for a few frames so egui knows every widget and layer.
        fn settle(&mut self, pos: Pos2) {
            for _ in 0..3 {
                self.frame(vec![Event::PointerMoved(pos)]);
            }
        }
    }

    fn primary(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Default::default(),
        }
    }

    #[test]
    fn test_context_press_on_canvas() {
        let mut scene = Scene::new();
        scene.settle(pos2(200.0, 200.0));
        assert!(scene.handler.is_over_canvas());

        let events = scene.frame(vec![primary(pos2(200.0, 200.0), true)]);
        assert_eq!(events, vec![InputEvent::PointerDown { pos: pos2(100.0, 100.0) }]);
    }

    #[test]
    fn test_context_drag_and_release() {
        let mut scene = Scene::new();
        scene.settle(pos2(200.0, 200.0));
        scene.frame(vec![primary(pos2(200.0, 200.0), true)]);

        let events = scene.frame(vec![Event::PointerMoved(pos2(250.0, 220.0))]);
        assert_eq!(events, vec![InputEvent::PointerMove { pos: pos2(150.0, 120.0) }]);

        let events = scene.frame(vec![primary(pos2(250.0, 220.0), false)]);
        assert_eq!(events, vec![InputEvent::PointerUp { pos: pos2(150.0, 120.0) }]);
    }

    #[test]
    fn test_context_press_on_popup_over_canvas_is_ignored() {
        let mut scene = Scene::with_popup();
        scene.settle(pos2(200.0, 200.0));
        assert!(!scene.handler.is_over_canvas());

        let events = scene.frame(vec![primary(pos2(200.0, 200.0), true)]);
        assert!(events.is_empty(), "popup press reached the canvas: {events:?}");

        let events = scene.frame(vec![Event::PointerMoved(pos2(260.0, 240.0))]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_context_moving_onto_popup_leaves_canvas() {
        let mut scene = Scene::with_popup();
        scene.settle(pos2(500.0, 500.0));
        assert!(scene.handler.is_over_canvas());

        let events = scene.frame(vec![Event::PointerMoved(pos2(200.0, 200.0))]);
        assert_eq!(events, vec![InputEvent::PointerLeave]);
    }

    #[test]
    fn test_context_clipped_canvas_ignores_hidden_part() {
        let mut scene = Scene {
            clip: Some(Rect::from_min_max(pos2(0.0, 300.0), pos2(1024.0, 768.0))),
            ..Scene::new()
        };
        scene.settle(pos2(200.0, 200.0));

        let events = scene.frame(vec![primary(pos2(200.0, 200.0), true)]);
        assert!(events.is_empty());

        let events = scene.frame(vec![Event::PointerMoved(pos2(200.0, 400.0))]);
        assert_eq!(events, vec![InputEvent::PointerMove { pos: pos2(100.0, 300.0) }]);
    }
}
