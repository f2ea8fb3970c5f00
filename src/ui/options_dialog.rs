//! Optionen-Dialog für Pick-Radius, Abtastung, Farben, Größen und Custom-Offsets.

use crate::app::{AppIntent, AppState};
use crate::shared::{options, CurveRenderStyle};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaktion", |ui| {
                        changed |= drag_value(
                            ui,
                            "Pick-Radius (px):",
                            &mut opts.hit_radius_px,
                            options::HIT_RADIUS_RANGE,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Randabstand Zufall:",
                            &mut opts.handle_size,
                            options::HANDLE_SIZE_RANGE,
                            0.5,
                        );
                    });

                    // ── Kurve ───────────────────────────────────────
                    ui.collapsing("Kurve", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Stil:");
                            for style in CurveRenderStyle::ALL {
                                changed |= ui
                                    .radio_value(&mut opts.render_style, style, style.label())
                                    .changed();
                            }
                        });
                        ui.horizontal(|ui| {
                            ui.label("Schrittweite t:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.sample_step)
                                        .range(options::SAMPLE_STEP_RANGE)
                                        .speed(0.0005)
                                        .max_decimals(4),
                                )
                                .changed();
                        });
                        changed |= drag_value(
                            ui,
                            "Sample-Größe:",
                            &mut opts.curve_sample_size,
                            options::CURVE_SAMPLE_SIZE_RANGE,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Pfad-Breite:",
                            &mut opts.curve_stroke_width,
                            options::LINE_WIDTH_RANGE,
                            0.1,
                        );
                        changed |= color_edit(ui, "Kurvenfarbe:", &mut opts.curve_color);
                    });

                    // ── Konstruktionslinien ─────────────────────────
                    ui.collapsing("Konstruktionslinien", |ui| {
                        changed |= drag_value(
                            ui,
                            "Breite:",
                            &mut opts.construction_line_width,
                            options::LINE_WIDTH_RANGE,
                            0.1,
                        );
                        changed |= color_edit(ui, "Farbe:", &mut opts.construction_line_color);
                    });

                    // ── Punkte ──────────────────────────────────────
                    ui.collapsing("Punkte", |ui| {
                        changed |= drag_value(
                            ui,
                            "Radius (px):",
                            &mut opts.point_radius_px,
                            options::POINT_RADIUS_RANGE,
                            0.25,
                        );
                        changed |= drag_value(
                            ui,
                            "Größenfaktor Drag:",
                            &mut opts.selection_size_factor,
                            options::SELECTION_SIZE_FACTOR_RANGE,
                            0.05,
                        );
                        changed |= color_edit(ui, "Kurvenpunkt:", &mut opts.point_color);
                        changed |= color_edit(ui, "Anfasser:", &mut opts.auxiliary_color);
                        changed |= color_edit(ui, "Gezogen:", &mut opts.selected_color);
                    });

                    // ── Custom-Modus ────────────────────────────────
                    ui.collapsing("Custom-Offsets", |ui| {
                        changed |= offset_edit(
                            ui,
                            "Nach Kurvenpunkt:",
                            &mut opts.custom_offsets.after_point,
                        );
                        changed |= offset_edit(
                            ui,
                            "Nach Anfasser:",
                            &mut opts.custom_offsets.after_auxiliary,
                        );
                        changed |= offset_edit(
                            ui,
                            "Nachlaufend:",
                            &mut opts.custom_offsets.trailing,
                        );
                    });

                    ui.collapsing("Hintergrund", |ui| {
                        changed |= color_edit(ui, "Farbe:", &mut opts.background_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Offset-Editor (x, y) in Pixeln.
fn offset_edit(ui: &mut egui::Ui, label: &str, offset: &mut [f32; 2]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let limit = options::CUSTOM_OFFSET_LIMIT;
        let mut axis = |value: &mut f32, prefix: &str| {
            ui.add(
                egui::DragValue::new(value)
                    .range(-limit..=limit)
                    .prefix(prefix)
                    .speed(1.0),
            )
            .changed()
        };
        let x = axis(&mut offset[0], "x ");
        let y = axis(&mut offset[1], "y ");
        x || y
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::canvas::to_color32(*color);
        let changed = ui.color_edit_button_srgba(&mut c).changed();
        if changed {
            *color = [
                c.r() as f32 / 255.0,
                c.g() as f32 / 255.0,
                c.b() as f32 / 255.0,
                c.a() as f32 / 255.0,
            ];
        }
        changed
    })
    .inner
}
