//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::CanvasBounds;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Intents ohne Wirkung auf den aktuellen Zustand (z.B. Zeigerbewegung ohne
/// laufenden Drag) ergeben eine leere Sequenz und landen nicht im Command-Log.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::CurveModeSelected { mode } => vec![AppCommand::SetCurveMode { mode }],
        AppIntent::ViewportResized { size } => {
            if size[0] < 1.0 || size[1] < 1.0 {
                return vec![];
            }
            if CanvasBounds::from_size(size) == state.view.canvas {
                return vec![];
            }
            vec![
                AppCommand::SetCanvasSize { size },
                AppCommand::ReinitializeMode,
            ]
        }
        AppIntent::PointerPressed { pos } => vec![AppCommand::PressPoint {
            pos,
            max_distance_sq: state.options.hit_radius_sq(),
        }],
        AppIntent::PointerMoved { pos } => {
            if state.editor.is_dragging() {
                vec![AppCommand::DragSelectedPoint { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased
        | AppIntent::PointerLeft
        | AppIntent::ClearSelectionRequested => {
            if state.editor.is_dragging() {
                vec![AppCommand::ClearSelection]
            } else {
                vec![]
            }
        }
        AppIntent::RenderStyleChanged { style } => {
            // Gleicher Weg wie der Optionen-Dialog, damit der Stil gespeichert wird
            let mut options = state.options.clone();
            options.render_style = style;
            vec![AppCommand::ApplyOptions { options }]
        }
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
