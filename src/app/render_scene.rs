//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{construction_pairs, cubic_chain_windows, sample_curve};
use crate::shared::{CurveRenderStyle, RenderCurve, RenderScene, ScenePoint};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let mode = state.editor.mode;
    let positions = state.editor.points.positions();

    let construction_lines = construction_pairs(mode, positions.len())
        .into_iter()
        .map(|(a, b)| [positions[a], positions[b]])
        .collect();

    let step = state.options.sample_step;
    let curve = if mode.is_custom() {
        let windows = cubic_chain_windows(&positions);
        match state.options.render_style {
            // Pfad-Stil: egui zeichnet die kubischen Segmente selbst
            CurveRenderStyle::StrokedPath => RenderCurve {
                samples: Vec::new(),
                cubic_segments: windows,
            },
            CurveRenderStyle::PointCloud => RenderCurve {
                samples: windows
                    .iter()
                    .flat_map(|window| sample_curve(window, step))
                    .collect(),
                cubic_segments: Vec::new(),
            },
        }
    } else {
        RenderCurve {
            samples: sample_curve(&positions, step),
            cubic_segments: Vec::new(),
        }
    };

    let points = state
        .editor
        .points
        .points()
        .iter()
        .map(|p| ScenePoint {
            position: p.position,
            is_auxiliary: p.is_auxiliary,
            selected: p.selected,
        })
        .collect();

    RenderScene {
        mode,
        canvas_size: state.view.canvas.size(),
        construction_lines,
        curve,
        points,
        options: state.options.clone(),
    }
}
