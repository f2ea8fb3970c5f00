//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::PlaygroundOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen (auf gültige Bereiche begrenzt) und speichert sie
/// in die Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, mut options: PlaygroundOptions) -> anyhow::Result<()> {
    options.sanitize();
    state.options = options;
    persist_options(state)
}

/// Setzt die Optionen auf Standardwerte zurück und speichert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = PlaygroundOptions::default();
    persist_options(state)
}

fn persist_options(state: &mut AppState) -> anyhow::Result<()> {
    let Some(path) = state.options_path.as_deref() else {
        return Ok(());
    };

    if let Err(e) = state.options.save_to_file(path) {
        state.ui.status_message = Some(format!("Optionen nicht gespeichert: {e}"));
        return Err(e);
    }
    state.ui.status_message = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CurveRenderStyle;

    #[test]
    fn apply_options_without_path_only_updates_state() {
        let mut state = AppState::with_seed(3);
        let mut options = PlaygroundOptions::default();
        options.render_style = CurveRenderStyle::StrokedPath;

        apply_options(&mut state, options.clone()).expect("ohne Speicherziel kein Fehler");

        assert_eq!(state.options, options);
        assert!(state.ui.status_message.is_none());
    }

    #[test]
    fn apply_options_writes_toml_file() {
        let path = std::env::temp_dir().join("bezier_playground_apply_options_test.toml");
        let mut state = AppState::with_seed(3);
        state.options_path = Some(path.clone());
        let mut options = PlaygroundOptions::default();
        options.hit_radius_px = 25.0;

        apply_options(&mut state, options).expect("Speichern sollte gelingen");

        let loaded = PlaygroundOptions::load_from_file(&path);
        assert_eq!(loaded.hit_radius_px, 25.0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_reports_error_and_status() {
        let path = std::env::temp_dir()
            .join("bezier_playground_missing_dir")
            .join("nested")
            .join("options.toml");
        let mut state = AppState::with_seed(3);
        state.options.hit_radius_px = 50.0;
        state.options_path = Some(path);

        assert!(reset_options(&mut state).is_err());
        assert!(state.ui.status_message.is_some());
        assert_eq!(state.options, PlaygroundOptions::default());
    }

    #[test]
    fn apply_options_clamps_out_of_range_values() {
        let mut state = AppState::with_seed(3);
        let mut options = PlaygroundOptions::default();
        options.handle_size = -500.0;
        options.sample_step = 1e-7;

        apply_options(&mut state, options).expect("ohne Speicherziel kein Fehler");

        assert_eq!(state.options.handle_size, 0.0);
        assert_eq!(
            state.options.sample_step,
            *crate::shared::options::SAMPLE_STEP_RANGE.start()
        );
    }

    #[test]
    fn options_dialog_toggles() {
        let mut state = AppState::with_seed(3);

        open_options_dialog(&mut state);
        assert!(state.ui.show_options_dialog);

        close_options_dialog(&mut state);
        assert!(!state.ui.show_options_dialog);
    }
}
