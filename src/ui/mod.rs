//! UI-Komponenten: Menü, Status-Bar, Optionen-Dialog, Zeichenfläche, Input-Handling.

pub mod canvas;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Funktionen lesen den `AppState` bzw. die `RenderScene` und geben
/// Benutzeraktionen ausschließlich als `AppIntent`s zurück.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use canvas::render_canvas;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
