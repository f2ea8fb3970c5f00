//! Use-Case: Moduswechsel und zufällige Startbelegung des Punktspeichers.

use glam::Vec2;
use rand::Rng;

use crate::app::AppState;
use crate::core::{ControlPoint, CurveMode};

/// Wechselt den Modus. Auch der bereits aktive Modus wird neu belegt.
pub fn set_mode(state: &mut AppState, mode: CurveMode) {
    state.editor.mode = mode;
    reinitialize(state);
}

/// Leert den Punktspeicher und belegt ihn für den aktiven Modus neu.
///
/// Feste Modi erhalten ihre Punktanzahl an zufälligen, ganzzahligen
/// Positionen in `[0, Breite − handle_size) × [0, Höhe − handle_size)`.
/// Der Custom-Modus startet leer.
pub fn reinitialize(state: &mut AppState) {
    let mode = state.editor.mode;
    state.editor.points.clear();

    let Some(count) = mode.fixed_point_count() else {
        log::info!("Modus {}: leere Kette, Punkte per Klick", mode.label());
        return;
    };

    let [width, height] = state.view.canvas.size();
    let handle_size = state.options.handle_size.max(0.0);
    for _ in 0..count {
        let x = random_coordinate(&mut state.rng, width - handle_size);
        let y = random_coordinate(&mut state.rng, height - handle_size);
        state.editor.points.push(ControlPoint::on_curve(Vec2::new(x, y)));
    }

    log::info!(
        "Modus {}: {} Punkte auf {}x{} verteilt",
        mode.label(),
        count,
        width,
        height
    );
}

/// Ganzzahlige Zufallskoordinate in `[0, max)`; bei zu kleiner Fläche 0.
fn random_coordinate(rng: &mut impl Rng, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    rng.random_range(0.0..max).floor()
}
