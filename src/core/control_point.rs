//! Kontrollpunkt einer Bézier-Kurve.

use glam::Vec2;

/// Ein Kontrollpunkt im Punktspeicher.
///
/// Reine Daten: die Darstellung wird pro Frame aus diesen Werten abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in lokalen Canvas-Koordinaten (Pixel)
    pub position: Vec2,
    /// `true` für Bézier-Anfasser im Custom-Modus, sonst `false`
    pub is_auxiliary: bool,
    /// Wird gerade gezogen (höchstens ein Punkt gleichzeitig)
    pub selected: bool,
}

impl ControlPoint {
    /// Erstellt einen Punkt auf der Kurve.
    pub fn on_curve(position: Vec2) -> Self {
        Self {
            position,
            is_auxiliary: false,
            selected: false,
        }
    }

    /// Erstellt einen Hilfspunkt (Anfasser).
    pub fn auxiliary(position: Vec2) -> Self {
        Self {
            position,
            is_auxiliary: true,
            selected: false,
        }
    }
}
