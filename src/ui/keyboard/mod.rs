//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::core::CurveMode;

/// Zifferntasten 1–5 in Modus-Reihenfolge.
const MODE_KEYS: [egui::Key; 5] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld (z.B. im Optionen-Dialog) den Fokus hat, werden
/// keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_q_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    if key_escape_pressed {
        events.push(AppIntent::ClearSelectionRequested);
    }

    if modifiers.is_none() {
        for (key, mode) in MODE_KEYS.into_iter().zip(CurveMode::ALL) {
            if ui.input(|i| i.key_pressed(key)) {
                events.push(AppIntent::CurveModeSelected { mode });
            }
        }
    }

    events
}
