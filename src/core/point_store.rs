//! Geordneter Punktspeicher mit Nearest-Point-Abfrage und Einzel-Selektion.

use glam::Vec2;

use super::{CanvasBounds, ControlPoint};

/// Ergebnis einer Nearest-Point-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Index des gefundenen Punkts im Speicher
    pub index: usize,
    /// Quadrierte Distanz zum Suchpunkt (px²)
    pub distance_sq: f32,
}

/// Geordnete Liste aller Kontrollpunkte des aktiven Modus.
///
/// Invariante: höchstens ein Punkt ist `selected`. Alle Selektionsänderungen
/// laufen über [`PointStore::select`] und [`PointStore::clear_selection`].
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<ControlPoint>,
    selected: Option<usize>,
}

impl PointStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            selected: None,
        }
    }

    /// Erstellt einen Speicher aus vorhandenen Punkten (ohne Selektion).
    pub fn from_points(points: impl IntoIterator<Item = ControlPoint>) -> Self {
        let points = points
            .into_iter()
            .map(|mut p| {
                p.selected = false;
                p
            })
            .collect();
        Self {
            points,
            selected: None,
        }
    }

    /// Verwirft alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
        self.selected = None;
    }

    /// Hängt einen Punkt an und gibt seinen Index zurück.
    pub fn push(&mut self, mut point: ControlPoint) -> usize {
        point.selected = false;
        self.points.push(point);
        self.points.len() - 1
    }

    /// Anzahl gespeicherter Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte in Speicherreihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Letzter gespeicherter Punkt.
    pub fn last(&self) -> Option<&ControlPoint> {
        self.points.last()
    }

    /// Positionen aller Punkte in Speicherreihenfolge.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Index des aktuell gezogenen Punkts.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Sucht den Punkt mit minimaler quadrierter Distanz zu `pos`.
    ///
    /// Lineare Suche; bei Gleichstand gewinnt der erste Punkt in Speicherreihenfolge.
    pub fn nearest(&self, pos: Vec2) -> Option<PointHit> {
        let mut best: Option<PointHit> = None;
        for (index, point) in self.points.iter().enumerate() {
            let distance_sq = point.position.distance_squared(pos);
            if best.is_none_or(|hit| distance_sq < hit.distance_sq) {
                best = Some(PointHit { index, distance_sq });
            }
        }
        best
    }

    /// Wie [`PointStore::nearest`], aber nur Treffer echt unterhalb von `max_distance_sq`.
    pub fn nearest_within(&self, pos: Vec2, max_distance_sq: f32) -> Option<PointHit> {
        self.nearest(pos).filter(|hit| hit.distance_sq < max_distance_sq)
    }

    /// Selektiert genau einen Punkt. Ungültige Indizes heben die Selektion auf.
    pub fn select(&mut self, index: usize) {
        self.clear_selection();
        if let Some(point) = self.points.get_mut(index) {
            point.selected = true;
            self.selected = Some(index);
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear_selection(&mut self) {
        if let Some(point) = self.selected.and_then(|i| self.points.get_mut(i)) {
            point.selected = false;
        }
        self.selected = None;
    }

    /// Setzt den selektierten Punkt auf `pos`, begrenzt auf `bounds`.
    ///
    /// Gibt die gespeicherte Position zurück, `None` ohne Selektion.
    pub fn move_selected(&mut self, pos: Vec2, bounds: &CanvasBounds) -> Option<Vec2> {
        let point = self.selected.and_then(|i| self.points.get_mut(i))?;
        point.position = bounds.clamp(pos);
        Some(point.position)
    }
}
