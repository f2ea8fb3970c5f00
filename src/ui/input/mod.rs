//! Canvas-Input-Handling: Maus-Events und Shortcuts → AppIntent.
//!
//! - `pointer`: Press/Move/Release/Leave-Erkennung auf Canvas-Koordinaten

mod pointer;

use super::keyboard;
use crate::app::AppIntent;

use pointer::PointerSample;

/// Verwaltet den Input-Zustand der Zeichenfläche zwischen Frames.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde auf der Canvas gedrückt und noch nicht losgelassen
    pub(crate) pointer_down: bool,
    /// Letzte gemeldete Zeigerposition während eines Drags
    pub(crate) last_pos: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Ecke von `response.rect`
    /// gemeldet. Pro Frame wird die aktuelle Canvas-Größe mitgeschickt.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let canvas_size = [response.rect.width(), response.rect.height()];

        let mut events = vec![AppIntent::ViewportResized { size: canvas_size }];
        events.extend(keyboard::collect_keyboard_intents(ui));

        let over_canvas = response.contains_pointer();
        let sample = ui.input(|i| PointerSample {
            pos: i
                .pointer
                .latest_pos()
                .map(|p| canvas_pos(p, response.rect.min)),
            press_pos: i
                .pointer
                .press_origin()
                .map(|p| canvas_pos(p, response.rect.min)),
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            over_canvas,
            canvas_size,
        });

        self.process_pointer(sample, &mut events);
        events
    }
}

/// Bildschirmposition → Canvas-Koordinaten (Ursprung links oben).
fn canvas_pos(pointer_pos: egui::Pos2, origin: egui::Pos2) -> glam::Vec2 {
    let local = pointer_pos - origin;
    glam::Vec2::new(local.x, local.y)
}
