//! Kurvenmodus: bestimmt Anzahl und Bedeutung der Kontrollpunkte.

use serde::{Deserialize, Serialize};

/// Aktiver Kurvenmodus.
///
/// Jeder Moduswechsel verwirft alle Punkte und baut den Punktspeicher neu auf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveMode {
    /// Gerade zwischen 2 Punkten (Grad 1)
    Linear,
    /// Quadratische Bézier-Kurve (3 Punkte)
    Quadratic,
    /// Kubische Bézier-Kurve (4 Punkte)
    #[default]
    Cubic,
    /// Bézier-Kurve vom Grad 4 (5 Punkte). Trotz des Namens kein Kegelschnitt.
    Conic,
    /// Offene Kette kubischer Segmente, per Klick aufgebaut
    Custom,
}

impl CurveMode {
    /// Alle Modi in Menü-Reihenfolge.
    pub const ALL: [CurveMode; 5] = [
        CurveMode::Linear,
        CurveMode::Quadratic,
        CurveMode::Cubic,
        CurveMode::Conic,
        CurveMode::Custom,
    ];

    /// Anzahl zufällig erzeugter Punkte beim (Re-)Initialisieren.
    ///
    /// `None` für den Custom-Modus: dort startet der Speicher leer.
    pub fn fixed_point_count(self) -> Option<usize> {
        match self {
            CurveMode::Linear => Some(2),
            CurveMode::Quadratic => Some(3),
            CurveMode::Cubic => Some(4),
            CurveMode::Conic => Some(5),
            CurveMode::Custom => None,
        }
    }

    /// Anzeigename für Menü und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            CurveMode::Linear => "Linear",
            CurveMode::Quadratic => "Quadratic",
            CurveMode::Cubic => "Cubic",
            CurveMode::Conic => "Conic",
            CurveMode::Custom => "Custom",
        }
    }

    /// Gibt `true` zurück, wenn Klicks ins Leere neue Punkte anhängen.
    pub fn is_custom(self) -> bool {
        self == CurveMode::Custom
    }
}
