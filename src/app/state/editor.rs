use crate::core::{CurveMode, PointStore};

/// Zustand des Kurven-Editors: aktiver Modus und Punktspeicher.
#[derive(Debug, Clone, Default)]
pub struct CurveEditorState {
    /// Aktiver Kurvenmodus
    pub mode: CurveMode,
    /// Alle Kontrollpunkte des aktiven Modus
    pub points: PointStore,
}

impl CurveEditorState {
    /// Erstellt den Startzustand (kubisch, noch ohne Punkte).
    pub fn new() -> Self {
        Self {
            mode: CurveMode::Cubic,
            points: PointStore::new(),
        }
    }

    /// Gibt zurück, ob gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.points.selected_index().is_some()
    }
}
