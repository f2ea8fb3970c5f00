use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::use_cases;
use crate::app::CommandLog;
use crate::shared::PlaygroundOptions;

use super::{CurveEditorState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurvenmodus und Punktspeicher
    pub editor: CurveEditorState,
    /// View-State (Canvas-Größe)
    pub view: ViewState,
    /// UI-State (Dialoge)
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Offsets)
    pub options: PlaygroundOptions,
    /// Zieldatei für geänderte Optionen (`None` = nicht speichern)
    pub options_path: Option<PathBuf>,
    /// Zufallsquelle für die Startpositionen fester Modi
    pub rng: StdRng,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand: kubischer Modus mit 4 zufälligen Punkten.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Wie [`AppState::new`], aber mit festem Seed (reproduzierbare Punkte).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut state = Self {
            editor: CurveEditorState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: PlaygroundOptions::default(),
            options_path: None,
            rng,
            should_exit: false,
        };
        use_cases::mode::reinitialize(&mut state);
        state
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.editor.points.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
