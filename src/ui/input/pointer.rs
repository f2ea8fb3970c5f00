//! Zeiger-Zustandsautomat: Press, Move, Release, Leave.

use super::InputState;
use crate::app::AppIntent;
use crate::core::CanvasBounds;
use glam::Vec2;

/// Zeigerzustand eines Frames in Canvas-Koordinaten.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PointerSample {
    /// Aktuelle Zeigerposition (`None` = Zeiger außerhalb des Fensters)
    pub pos: Option<Vec2>,
    /// Exakte Position beim Drücken (vor egui-Drag-Schwelle)
    pub press_pos: Option<Vec2>,
    /// Primärtaste in diesem Frame gedrückt
    pub pressed: bool,
    /// Primärtaste in diesem Frame losgelassen
    pub released: bool,
    /// Zeiger liegt über der Canvas und wird nicht von einem Fenster verdeckt
    pub over_canvas: bool,
    /// Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f32; 2],
}

impl PointerSample {
    fn inside(&self, pos: Vec2) -> bool {
        CanvasBounds::from_size(self.canvas_size).contains(pos)
    }
}

impl InputState {
    /// Übersetzt einen Zeigerzustand in Intents und führt den Drag-Zustand nach.
    pub(crate) fn process_pointer(&mut self, sample: PointerSample, events: &mut Vec<AppIntent>) {
        if sample.pressed && sample.over_canvas {
            if let Some(pos) = sample.press_pos.or(sample.pos) {
                events.push(AppIntent::PointerPressed { pos });
                self.pointer_down = true;
                self.last_pos = Some(pos);
            }
        }

        if !self.pointer_down {
            return;
        }

        match sample.pos {
            Some(pos) if sample.inside(pos) => {
                if self.last_pos != Some(pos) {
                    events.push(AppIntent::PointerMoved { pos });
                    self.last_pos = Some(pos);
                }
                if sample.released {
                    events.push(AppIntent::PointerReleased);
                    self.end_drag();
                }
            }
            _ => {
                events.push(AppIntent::PointerLeft);
                self.end_drag();
            }
        }
    }

    fn end_drag(&mut self) {
        self.pointer_down = false;
        self.last_pos = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: [f32; 2] = [400.0, 300.0];

    fn sample(pos: Option<Vec2>) -> PointerSample {
        PointerSample {
            pos,
            press_pos: pos,
            over_canvas: true,
            canvas_size: CANVAS,
            ..Default::default()
        }
    }

    fn run(input: &mut InputState, s: PointerSample) -> Vec<AppIntent> {
        let mut events = Vec::new();
        input.process_pointer(s, &mut events);
        events
    }

    #[test]
    fn press_move_release_sequence() {
        let mut input = InputState::new();

        let events = run(
            &mut input,
            PointerSample {
                pressed: true,
                ..sample(Some(Vec2::new(10.0, 20.0)))
            },
        );
        assert!(matches!(
            events.as_slice(),
            [AppIntent::PointerPressed { pos }] if *pos == Vec2::new(10.0, 20.0)
        ));
        assert!(input.pointer_down);

        let events = run(&mut input, sample(Some(Vec2::new(15.0, 25.0))));
        assert!(matches!(
            events.as_slice(),
            [AppIntent::PointerMoved { pos }] if *pos == Vec2::new(15.0, 25.0)
        ));

        let events = run(
            &mut input,
            PointerSample {
                released: true,
                ..sample(Some(Vec2::new(15.0, 25.0)))
            },
        );
        assert!(matches!(events.as_slice(), [AppIntent::PointerReleased]));
        assert!(!input.pointer_down);
    }

    #[test]
    fn motion_without_press_emits_nothing() {
        let mut input = InputState::new();

        let events = run(&mut input, sample(Some(Vec2::new(50.0, 50.0))));

        assert!(events.is_empty());
    }

    #[test]
    fn stationary_pointer_emits_no_move() {
        let mut input = InputState::new();
        run(
            &mut input,
            PointerSample {
                pressed: true,
                ..sample(Some(Vec2::new(50.0, 50.0)))
            },
        );

        let events = run(&mut input, sample(Some(Vec2::new(50.0, 50.0))));

        assert!(events.is_empty());
    }

    #[test]
    fn leaving_canvas_ends_drag() {
        let mut input = InputState::new();
        run(
            &mut input,
            PointerSample {
                pressed: true,
                ..sample(Some(Vec2::new(50.0, 50.0)))
            },
        );

        let events = run(&mut input, sample(Some(Vec2::new(450.0, 50.0))));

        assert!(matches!(events.as_slice(), [AppIntent::PointerLeft]));
        assert!(!input.pointer_down);
        assert!(run(&mut input, sample(Some(Vec2::new(60.0, 60.0)))).is_empty());
    }

    #[test]
    fn pointer_gone_ends_drag() {
        let mut input = InputState::new();
        run(
            &mut input,
            PointerSample {
                pressed: true,
                ..sample(Some(Vec2::new(50.0, 50.0)))
            },
        );

        let events = run(&mut input, sample(None));

        assert!(matches!(events.as_slice(), [AppIntent::PointerLeft]));
    }

    #[test]
    fn press_over_covering_window_is_ignored() {
        let mut input = InputState::new();

        let events = run(
            &mut input,
            PointerSample {
                pressed: true,
                over_canvas: false,
                ..sample(Some(Vec2::new(50.0, 50.0)))
            },
        );

        assert!(events.is_empty());
        assert!(!input.pointer_down);
    }

    #[test]
    fn click_within_one_frame_presses_and_releases() {
        let mut input = InputState::new();

        let events = run(
            &mut input,
            PointerSample {
                pressed: true,
                released: true,
                ..sample(Some(Vec2::new(30.0, 30.0)))
            },
        );

        assert!(matches!(
            events.as_slice(),
            [AppIntent::PointerPressed { .. }, AppIntent::PointerReleased]
        ));
    }
}
