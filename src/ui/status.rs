//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", state.editor.mode.label()));

            ui.separator();

            ui.label(format!("Punkte: {}", state.point_count()));

            ui.separator();

            match state.editor.points.selected_index() {
                Some(index) => ui.label(format!("Gezogen: #{}", index)),
                None => ui.label("Gezogen: -"),
            };

            ui.separator();

            let [width, height] = state.view.canvas.size();
            ui.label(format!(
                "Canvas: {:.0}x{:.0} | Stil: {}",
                width,
                height,
                state.options.render_style.label()
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
