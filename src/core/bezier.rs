//! Bézier-Auswertung: De Casteljau, Bernstein-Referenz und Abtastung.

use glam::Vec2;

/// Standard-Schrittweite für die Abtastung von t ∈ [0, 1].
pub const DEFAULT_SAMPLE_STEP: f32 = 0.001;

/// Wertet die Bézier-Kurve vom Grad `points.len() - 1` bei `t` aus.
///
/// Wiederholte lineare Interpolation benachbarter Punkte, bis ein Punkt übrig bleibt.
/// Weniger als zwei Punkte ergeben keine Kurve.
pub fn de_casteljau(points: &[Vec2], t: f32) -> Option<Vec2> {
    if points.len() < 2 {
        return None;
    }

    let mut level = points.to_vec();
    for len in (1..points.len()).rev() {
        for i in 0..len {
            level[i] = level[i].lerp(level[i + 1], t);
        }
    }
    Some(level[0])
}

/// Geschlossene Auswertung über Bernstein-Polynome.
///
/// B(t) = Σ C(n, i) · (1-t)^(n-i) · t^i · Pᵢ
pub fn bernstein(points: &[Vec2], t: f32) -> Option<Vec2> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() - 1;
    let inv = 1.0 - t;
    let mut result = Vec2::ZERO;
    let mut coefficient = 1.0f32;
    for (i, &p) in points.iter().enumerate() {
        if i > 0 {
            // C(n, i) = C(n, i-1) · (n - i + 1) / i
            coefficient = coefficient * (n - i + 1) as f32 / i as f32;
        }
        let weight = coefficient * inv.powi((n - i) as i32) * t.powi(i as i32);
        result += weight * p;
    }
    Some(result)
}

/// Tastet die Kurve bei t = 0, step, 2·step, …, 1 ab (beide Enden inklusive).
///
/// `t` wird aus einem ganzzahligen Index berechnet, damit t = 1 exakt getroffen wird.
pub fn sample_curve(points: &[Vec2], step: f32) -> Vec<Vec2> {
    if points.len() < 2 {
        return Vec::new();
    }

    let step = if step > 0.0 && step <= 1.0 {
        step
    } else {
        DEFAULT_SAMPLE_STEP
    };
    let steps = (1.0 / step).round().max(1.0) as usize;

    (0..=steps)
        .filter_map(|i| de_casteljau(points, i as f32 / steps as f32))
        .collect()
}

/// Aufeinanderfolgende 4-Punkt-Fenster mit Vorschub 3: `[0..4]`, `[3..7]`, …
///
/// Unvollständige Fenster am Ende werden ignoriert.
pub fn cubic_chain_windows(points: &[Vec2]) -> Vec<[Vec2; 4]> {
    if points.len() < 4 {
        return Vec::new();
    }

    (0..=points.len() - 4)
        .step_by(3)
        .map(|i| [points[i], points[i + 1], points[i + 2], points[i + 3]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(actual: Vec2, expected: Vec2) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-2);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-2);
    }

    fn sample_sets() -> Vec<Vec<Vec2>> {
        vec![
            vec![Vec2::new(0.0, 0.0), Vec2::new(300.0, 120.0)],
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(100.0, 100.0),
            ],
            vec![
                Vec2::new(12.0, 400.0),
                Vec2::new(80.0, 20.0),
                Vec2::new(420.0, 35.0),
                Vec2::new(600.0, 380.0),
            ],
            vec![
                Vec2::new(50.0, 50.0),
                Vec2::new(700.0, 10.0),
                Vec2::new(20.0, 500.0),
                Vec2::new(640.0, 480.0),
                Vec2::new(300.0, 90.0),
            ],
        ]
    }

    #[test]
    fn quadratic_midpoint_example() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
        ];
        let mid = de_casteljau(&points, 0.5).expect("Kurve erwartet");
        assert_vec_eq(mid, Vec2::new(75.0, 25.0));
    }

    #[test]
    fn de_casteljau_matches_bernstein_up_to_degree_four() {
        for points in sample_sets() {
            for i in 0..=20 {
                let t = i as f32 / 20.0;
                let a = de_casteljau(&points, t).expect("Kurve erwartet");
                let b = bernstein(&points, t).expect("Kurve erwartet");
                assert_vec_eq(a, b);
            }
        }
    }

    #[test]
    fn endpoints_are_interpolated() {
        for points in sample_sets() {
            let first = points[0];
            let last = points[points.len() - 1];
            assert_vec_eq(de_casteljau(&points, 0.0).expect("Kurve"), first);
            assert_vec_eq(de_casteljau(&points, 1.0).expect("Kurve"), last);
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let points = &sample_sets()[3];
        let a = de_casteljau(points, 0.37);
        let b = de_casteljau(points, 0.37);
        assert_eq!(a, b);
    }

    #[test]
    fn fewer_than_two_points_yield_no_curve() {
        assert!(de_casteljau(&[], 0.5).is_none());
        assert!(de_casteljau(&[Vec2::new(1.0, 2.0)], 0.5).is_none());
        assert!(sample_curve(&[Vec2::new(1.0, 2.0)], DEFAULT_SAMPLE_STEP).is_empty());
    }

    #[test]
    fn sampling_includes_both_ends() {
        let points = &sample_sets()[2];
        let samples = sample_curve(points, DEFAULT_SAMPLE_STEP);
        assert_eq!(samples.len(), 1001);
        assert_vec_eq(samples[0], points[0]);
        assert_vec_eq(samples[1000], points[3]);
    }

    #[test]
    fn invalid_step_falls_back_to_default() {
        let points = &sample_sets()[0];
        assert_eq!(sample_curve(points, 0.0).len(), 1001);
        assert_eq!(sample_curve(points, -1.0).len(), 1001);
        assert_eq!(sample_curve(points, 0.25).len(), 5);
    }

    #[test]
    fn chain_windows_advance_by_three() {
        let points: Vec<Vec2> = (0..8).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let windows = cubic_chain_windows(&points);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0][0].x, 0.0);
        assert_eq!(windows[0][3].x, 3.0);
        assert_eq!(windows[1][0].x, 3.0);
        assert_eq!(windows[1][3].x, 6.0);
    }

    #[test]
    fn chain_windows_need_four_points() {
        let points: Vec<Vec2> = (0..3).map(|i| Vec2::new(i as f32, 0.0)).collect();
        assert!(cubic_chain_windows(&points).is_empty());
    }
}
