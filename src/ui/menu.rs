//! Top-Menü (File, View, Modus-Leiste).

use crate::app::{AppIntent, AppState};
use crate::core::CurveMode;
use crate::shared::CurveRenderStyle;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit (Ctrl+Q)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let current = state.options.render_style;
                for style in CurveRenderStyle::ALL {
                    if ui.selectable_label(current == style, style.label()).clicked() {
                        events.push(AppIntent::RenderStyleChanged { style });
                        ui.close();
                    }
                }
            });

            ui.separator();

            // Modus-Leiste: genau ein Eintrag ist aktiv
            let active = state.editor.mode;
            for (shortcut, mode) in CurveMode::ALL.into_iter().enumerate() {
                let label = format!("{} ({})", mode.label(), shortcut + 1);
                if ui.selectable_label(active == mode, label).clicked() {
                    events.push(AppIntent::CurveModeSelected { mode });
                }
            }
        });
    });

    events
}
