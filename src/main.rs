//! Bézier-Playground.
//!
//! Interaktive Zeichenfläche für Bézier-Kurven vom Grad 1 bis 4 und
//! offene Ketten kubischer Segmente, gerendert mit egui.

use bezier_playground::{ui, AppController, AppIntent, AppState, PlaygroundOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier-Playground v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bézier-Playground"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier-Playground",
            options,
            Box::new(|_cc| Ok(Box::new(PlaygroundApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlaygroundApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl PlaygroundApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PlaygroundOptions::config_path();
        let options = PlaygroundOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = options;
        state.options_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let (events, (painter, rect)) = self.collect_ui_events(ctx);

        let state_changed = self.controller.process_intents(&mut self.state, events);

        // Szene erst nach allen Commands des Frames bauen
        let scene = self.controller.build_render_scene(&self.state);
        ui::render_canvas(&painter, rect, &scene);

        self.maybe_request_repaint(ctx, state_changed);
    }
}

impl PlaygroundApp {
    fn collect_ui_events(
        &mut self,
        ctx: &egui::Context,
    ) -> (Vec<AppIntent>, (egui::Painter, egui::Rect)) {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let canvas = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response));

                (ui.painter().clone(), rect)
            })
            .inner;

        (events, canvas)
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, state_changed: bool) {
        if state_changed
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.editor.is_dragging()
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
