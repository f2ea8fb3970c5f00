//! Ausdehnung der Zeichenfläche in Pixeln.

use glam::Vec2;

/// Zeichenfläche `[0, width] × [0, height]` in lokalen Canvas-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    /// Breite in Pixeln
    pub width: f32,
    /// Höhe in Pixeln
    pub height: f32,
}

impl CanvasBounds {
    /// Erstellt neue Grenzen. Negative Werte werden auf 0 gesetzt.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Erstellt Grenzen aus einer `[Breite, Höhe]`-Angabe (egui-Viewport-Format).
    pub fn from_size(size: [f32; 2]) -> Self {
        Self::new(size[0], size[1])
    }

    /// Begrenzt eine Position auf die Zeichenfläche.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Prüft, ob eine Position innerhalb der Zeichenfläche liegt (Ränder inklusive).
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }

    /// Gibt die Größe als `[Breite, Höhe]` zurück.
    pub fn size(&self) -> [f32; 2] {
        [self.width, self.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_inner_points() {
        let bounds = CanvasBounds::new(800.0, 600.0);
        let pos = Vec2::new(120.0, 340.0);
        assert_eq!(bounds.clamp(pos), pos);
    }

    #[test]
    fn clamp_pulls_outer_points_onto_edges() {
        let bounds = CanvasBounds::new(800.0, 600.0);
        assert_eq!(bounds.clamp(Vec2::new(-50.0, 900.0)), Vec2::new(0.0, 600.0));
        assert_eq!(bounds.clamp(Vec2::new(1200.0, -1.0)), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn negative_size_collapses_to_zero() {
        let bounds = CanvasBounds::new(-10.0, 20.0);
        assert_eq!(bounds.size(), [0.0, 20.0]);
        assert_eq!(bounds.clamp(Vec2::new(5.0, 5.0)), Vec2::new(0.0, 5.0));
    }
}
