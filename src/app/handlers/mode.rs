//! Handler für Moduswechsel und Neuaufbau des Punktspeichers.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveMode;

/// Setzt den Kurvenmodus und baut den Punktspeicher neu auf.
pub fn set_curve_mode(state: &mut AppState, mode: CurveMode) {
    use_cases::mode::set_mode(state, mode);
}

/// Baut den Punktspeicher des aktiven Modus neu auf.
pub fn reinitialize(state: &mut AppState) {
    use_cases::mode::reinitialize(state);
}
