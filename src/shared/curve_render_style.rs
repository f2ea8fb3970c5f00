//! Zeichenstil der Kurve (shared zwischen App und UI).

use serde::{Deserialize, Serialize};

/// Wie die ausgewertete Kurve gezeichnet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveRenderStyle {
    /// Dichte Punktwolke aus kleinen Quadraten (ein Quadrat pro Sample)
    #[default]
    PointCloud,
    /// Nativer Pfad: Polylinie bzw. kubische Segmente pro 4-Punkt-Fenster
    StrokedPath,
}

impl CurveRenderStyle {
    /// Alle Stile in Menü-Reihenfolge.
    pub const ALL: [CurveRenderStyle; 2] =
        [CurveRenderStyle::PointCloud, CurveRenderStyle::StrokedPath];

    /// Anzeigename für Menü und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            CurveRenderStyle::PointCloud => "Punktwolke",
            CurveRenderStyle::StrokedPath => "Pfad",
        }
    }
}
