//! Handler für Zeiger-Interaktion (Hit-Test, Drag, Custom-Anhängen).

use crate::app::use_cases;
use crate::app::AppState;

/// Pointer-Down: Hit-Test, bei Fehlschlag im Custom-Modus Punkte anhängen.
pub fn press(state: &mut AppState, pos: glam::Vec2, max_distance_sq: f32) {
    use_cases::pointer::press(state, pos, max_distance_sq);
}

/// Pointer-Move während eines Drags.
pub fn drag(state: &mut AppState, pos: glam::Vec2) {
    use_cases::pointer::drag_selected(state, pos);
}

/// Pointer-Up oder Verlassen der Zeichenfläche.
pub fn release(state: &mut AppState) {
    use_cases::pointer::release(state);
}
