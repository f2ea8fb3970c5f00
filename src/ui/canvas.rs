//! Zeichenfläche: Hintergrund, Konstruktionslinien, Kurve und Punkt-Marker.
//!
//! Reiner Konsument der `RenderScene`; Canvas-Koordinaten werden um die linke
//! obere Ecke des zugewiesenen Rechtecks verschoben.

use glam::Vec2;

use crate::shared::{CurveRenderStyle, RenderScene};

/// Zeichnet einen kompletten Frame in `rect`.
pub fn render_canvas(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let opts = &scene.options;
    let to_screen = |p: Vec2| egui::pos2(rect.min.x + p.x, rect.min.y + p.y);

    painter.rect_filled(rect, egui::CornerRadius::ZERO, to_color32(opts.background_color));

    // Konstruktionslinien zuerst, Kurve und Marker liegen darüber
    let line_stroke = egui::Stroke::new(
        opts.construction_line_width,
        to_color32(opts.construction_line_color),
    );
    for [a, b] in &scene.construction_lines {
        painter.line_segment([to_screen(*a), to_screen(*b)], line_stroke);
    }

    let curve_color = to_color32(opts.curve_color);
    match opts.render_style {
        CurveRenderStyle::PointCloud => {
            let size = egui::vec2(opts.curve_sample_size, opts.curve_sample_size);
            let mut mesh = egui::Mesh::default();
            for sample in &scene.curve.samples {
                let square = egui::Rect::from_min_size(to_screen(*sample), size);
                mesh.add_colored_rect(square, curve_color);
            }
            painter.add(egui::Shape::mesh(mesh));
        }
        CurveRenderStyle::StrokedPath => {
            let stroke = egui::Stroke::new(opts.curve_stroke_width, curve_color);
            if scene.curve.samples.len() >= 2 {
                let polyline = scene.curve.samples.iter().map(|p| to_screen(*p)).collect();
                painter.add(egui::Shape::line(polyline, stroke));
            }
            for segment in &scene.curve.cubic_segments {
                let shape = egui::epaint::CubicBezierShape::from_points_stroke(
                    segment.map(to_screen),
                    false,
                    egui::Color32::TRANSPARENT,
                    stroke,
                );
                painter.add(shape);
            }
        }
    }

    for point in &scene.points {
        let (radius, color) = if point.selected {
            (
                opts.point_radius_px * opts.selection_size_factor,
                opts.selected_color,
            )
        } else if point.is_auxiliary {
            (opts.point_radius_px, opts.auxiliary_color)
        } else {
            (opts.point_radius_px, opts.point_color)
        };
        painter.circle_filled(to_screen(point.position), radius, to_color32(color));
    }
}

/// RGBA-Farbe (0..1) → egui-Farbe.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
