use crate::core::CanvasBounds;
use crate::shared::options::DEFAULT_CANVAS_SIZE;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Ausdehnung der Zeichenfläche
    pub canvas: CanvasBounds,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            canvas: CanvasBounds::from_size(DEFAULT_CANVAS_SIZE),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
