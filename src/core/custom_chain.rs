//! Custom-Modus: Punkt-Anhänger und Paarungsregeln für Konstruktionslinien.
//!
//! Der Speicher hat im Custom-Modus die Form
//! `[P0, (A1, P1, B1), (A2, P2, B2), …]`: ein Startpunkt, danach Tripel aus
//! Anfasser, Kurvenpunkt, Anfasser.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{ControlPoint, CurveMode, PointStore};

/// Offset des ersten Anfassers, wenn der vorige Punkt auf der Kurve liegt.
pub const AUX_OFFSET_AFTER_POINT: [f32; 2] = [40.0, 0.0];
/// Offset des ersten Anfassers, wenn der vorige Punkt selbst ein Anfasser ist.
pub const AUX_OFFSET_AFTER_AUXILIARY: [f32; 2] = [0.0, -40.0];
/// Offset des zweiten Anfassers relativ zum Klickpunkt.
pub const TRAILING_AUX_OFFSET: [f32; 2] = [0.0, -60.0];

/// Frei wählbare Anfasser-Offsets (Pixel) für den Custom-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomOffsets {
    /// Offset zum vorigen Punkt, falls dieser auf der Kurve liegt
    pub after_point: [f32; 2],
    /// Offset zum vorigen Punkt, falls dieser ein Anfasser ist
    pub after_auxiliary: [f32; 2],
    /// Offset des nachlaufenden Anfassers zum Klickpunkt
    pub trailing: [f32; 2],
}

impl Default for CustomOffsets {
    fn default() -> Self {
        Self {
            after_point: AUX_OFFSET_AFTER_POINT,
            after_auxiliary: AUX_OFFSET_AFTER_AUXILIARY,
            trailing: TRAILING_AUX_OFFSET,
        }
    }
}

/// Hängt nach einem Klick ins Leere neue Punkte an.
///
/// Leerer Speicher: ein Kurvenpunkt. Sonst das Tripel `[Anfasser, Punkt, Anfasser]`.
/// Gibt die Anzahl angehängter Punkte zurück.
pub fn append_click(store: &mut PointStore, click: Vec2, offsets: &CustomOffsets) -> usize {
    let Some(previous) = store.last().copied() else {
        store.push(ControlPoint::on_curve(click));
        return 1;
    };

    let lead_offset = if previous.is_auxiliary {
        offsets.after_auxiliary
    } else {
        offsets.after_point
    };

    store.push(ControlPoint::auxiliary(
        previous.position + Vec2::from(lead_offset),
    ));
    store.push(ControlPoint::on_curve(click));
    store.push(ControlPoint::auxiliary(click + Vec2::from(offsets.trailing)));
    3
}

/// Indexpaare für Konstruktionslinien je nach Modus.
///
/// Feste Modi: aufeinanderfolgende Paare. Custom: Startpaar `(0, 1)` und
/// innerhalb jedes Tripels `(i, i+1)`, `(i+1, i+2)` für i = 1, 4, 7, …
pub fn construction_pairs(mode: CurveMode, len: usize) -> Vec<(usize, usize)> {
    if len < 2 {
        return Vec::new();
    }

    if !mode.is_custom() {
        return (0..len - 1).map(|i| (i, i + 1)).collect();
    }

    let mut pairs = vec![(0, 1)];
    for i in (1..len).step_by(3) {
        if i + 1 < len {
            pairs.push((i, i + 1));
        }
        if i + 2 < len {
            pairs.push((i + 1, i + 2));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_inserts_single_point() {
        let mut store = PointStore::new();
        let added = append_click(&mut store, Vec2::new(100.0, 200.0), &CustomOffsets::default());

        assert_eq!(added, 1);
        assert_eq!(store.len(), 1);
        assert!(!store.points()[0].is_auxiliary);
        assert_eq!(store.points()[0].position, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn second_click_appends_triple_offset_from_on_curve_point() {
        let mut store = PointStore::new();
        let offsets = CustomOffsets::default();
        append_click(&mut store, Vec2::new(100.0, 200.0), &offsets);
        let added = append_click(&mut store, Vec2::new(300.0, 250.0), &offsets);

        assert_eq!(added, 3);
        let points = store.points();
        assert_eq!(points.len(), 4);

        assert!(points[1].is_auxiliary);
        assert_eq!(points[1].position, Vec2::new(140.0, 200.0));
        assert!(!points[2].is_auxiliary);
        assert_eq!(points[2].position, Vec2::new(300.0, 250.0));
        assert!(points[3].is_auxiliary);
        assert_eq!(points[3].position, Vec2::new(300.0, 190.0));
    }

    #[test]
    fn third_click_offsets_lead_handle_from_auxiliary() {
        let mut store = PointStore::new();
        let offsets = CustomOffsets::default();
        append_click(&mut store, Vec2::new(100.0, 200.0), &offsets);
        append_click(&mut store, Vec2::new(300.0, 250.0), &offsets);
        append_click(&mut store, Vec2::new(500.0, 150.0), &offsets);

        let points = store.points();
        assert_eq!(points.len(), 7);
        // Vorgänger ist der Anfasser bei (300, 190) → (0, -40)
        assert_eq!(points[4].position, Vec2::new(300.0, 150.0));
        assert!(points[4].is_auxiliary);
        assert_eq!(points[5].position, Vec2::new(500.0, 150.0));
        assert_eq!(points[6].position, Vec2::new(500.0, 90.0));
    }

    #[test]
    fn custom_offsets_are_honoured() {
        let mut store = PointStore::new();
        let offsets = CustomOffsets {
            after_point: [10.0, 5.0],
            after_auxiliary: [0.0, 0.0],
            trailing: [-7.0, 0.0],
        };
        append_click(&mut store, Vec2::ZERO, &offsets);
        append_click(&mut store, Vec2::new(50.0, 50.0), &offsets);

        assert_eq!(store.points()[1].position, Vec2::new(10.0, 5.0));
        assert_eq!(store.points()[3].position, Vec2::new(43.0, 50.0));
    }

    #[test]
    fn fixed_modes_pair_consecutive_points() {
        assert_eq!(
            construction_pairs(CurveMode::Conic, 5),
            vec![(0, 1), (1, 2), (2, 3), (3, 4)]
        );
        assert!(construction_pairs(CurveMode::Linear, 1).is_empty());
    }

    #[test]
    fn custom_mode_pairs_start_and_triples() {
        assert_eq!(
            construction_pairs(CurveMode::Custom, 7),
            vec![(0, 1), (1, 2), (2, 3), (4, 5), (5, 6)]
        );
        assert!(construction_pairs(CurveMode::Custom, 1).is_empty());
    }
}
