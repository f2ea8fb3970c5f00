//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::Vec2;

use super::options::PlaygroundOptions;
use crate::core::CurveMode;

/// Darstellungsdaten eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint {
    /// Position in Canvas-Koordinaten
    pub position: Vec2,
    /// Anfasser (eigene Farbe)
    pub is_auxiliary: bool,
    /// Wird gerade gezogen (vergrößert, umgefärbt)
    pub selected: bool,
}

/// Ausgewertete Kurve für einen Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderCurve {
    /// Abgetastete Kurvenpunkte (Punktwolke bzw. Polylinie)
    pub samples: Vec<Vec2>,
    /// Kubische Segmente (nur Custom-Modus), je 4 Kontrollpunkte
    pub cubic_segments: Vec<[Vec2; 4]>,
}

impl RenderCurve {
    /// Gibt `true` zurück, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() && self.cubic_segments.is_empty()
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktiver Modus
    pub mode: CurveMode,
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Konstruktionslinien zwischen Kontrollpunkten
    pub construction_lines: Vec<[Vec2; 2]>,
    /// Ausgewertete Kurve
    pub curve: RenderCurve,
    /// Punkt-Marker in Speicherreihenfolge
    pub points: Vec<ScenePoint>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: PlaygroundOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Punkt gerade gezogen wird.
    pub fn has_selection(&self) -> bool {
        self.points.iter().any(|p| p.selected)
    }
}
