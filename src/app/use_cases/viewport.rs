//! Use-Case-Funktionen für den Canvas-Zustand.

use crate::app::AppState;
use crate::core::CanvasBounds;

/// Aktualisiert die gespeicherte Canvas-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.canvas = CanvasBounds::from_size(size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_canvas_bounds() {
        let mut state = AppState::with_seed(1);

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.canvas.size(), [1920.0, 1080.0]);
    }
}
