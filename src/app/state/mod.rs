//! Application State: zentrale Datenhaltung.
//!
//! Einziger Eigentümer des Punktspeichers ist [`AppState`]. Mutationen laufen
//! ausschließlich synchron über den `AppController`; Input-Verarbeitung und
//! Rendering eines Frames überlappen sich nie.

mod app_state;
mod editor;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::CurveEditorState;
pub use ui::UiState;
pub use view::ViewState;
