//! Use-Case: Zeiger-Interaktion auf der Zeichenfläche.
//!
//! Ein Drag besteht aus Press (Punkt selektieren), beliebig vielen
//! Moves (selektierten Punkt verschieben) und Release (Selektion lösen).

use glam::Vec2;

use crate::app::AppState;
use crate::core::append_click;

/// Hit-Test auf alle Punkte. Treffer: Punkt wird selektiert.
/// Kein Treffer im Custom-Modus: neues Segment wird angehängt.
pub fn press(state: &mut AppState, pos: Vec2, max_distance_sq: f32) {
    if let Some(hit) = state.editor.points.nearest_within(pos, max_distance_sq) {
        state.editor.points.select(hit.index);
        log::debug!(
            "Punkt {} selektiert (Abstand² {:.1})",
            hit.index,
            hit.distance_sq
        );
        return;
    }

    state.editor.points.clear_selection();

    if state.editor.mode.is_custom() {
        let added = append_click(
            &mut state.editor.points,
            pos,
            &state.options.custom_offsets,
        );
        log::debug!(
            "Custom-Kette: {} Punkt(e) angehängt, gesamt {}",
            added,
            state.editor.points.len()
        );
    }
}

/// Setzt den selektierten Punkt auf die Zeigerposition, begrenzt auf die Canvas.
pub fn drag_selected(state: &mut AppState, pos: Vec2) {
    let bounds = state.view.canvas;
    state.editor.points.move_selected(pos, &bounds);
}

/// Beendet einen laufenden Drag.
pub fn release(state: &mut AppState) {
    state.editor.points.clear_selection();
}
