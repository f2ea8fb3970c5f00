//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Verarbeitet alle Intents eines Frames in Reihenfolge.
    ///
    /// Fehlschlagende Commands werden geloggt, die übrigen laufen weiter.
    /// Gibt `true` zurück, wenn mindestens ein Command ausgeführt wurde,
    /// also ein Neuzeichnen nötig ist.
    pub fn process_intents(&mut self, state: &mut AppState, intents: Vec<AppIntent>) -> bool {
        let mut executed = false;
        for intent in intents {
            let commands = self.map_intent_to_commands(state, intent);
            executed |= !commands.is_empty();
            for command in commands {
                if let Err(e) = self.handle_command(state, command) {
                    log::error!("Event handling failed: {:#}", e);
                }
            }
        }
        executed
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & Canvas ===
            AppCommand::SetCurveMode { mode } => handlers::mode::set_curve_mode(state, mode),
            AppCommand::ReinitializeMode => handlers::mode::reinitialize(state),
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),

            // === Zeiger ===
            AppCommand::PressPoint {
                pos,
                max_distance_sq,
            } => handlers::pointer::press(state, pos, max_distance_sq),
            AppCommand::DragSelectedPoint { pos } => handlers::pointer::drag(state, pos),
            AppCommand::ClearSelection => handlers::pointer::release(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
