//! Handler für die Canvas-Größe.

use crate::app::use_cases;
use crate::app::AppState;

/// Übernimmt eine neue Canvas-Größe.
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
