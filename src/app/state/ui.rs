/// UI-bezogener Anwendungszustand (Dialoge, Statusmeldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Letzte Statusmeldung (z.B. Fehler beim Speichern der Optionen)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
