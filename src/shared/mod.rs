//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod curve_render_style;
pub mod options;
mod render_scene;

pub use curve_render_style::CurveRenderStyle;
pub use options::PlaygroundOptions;
pub use render_scene::{RenderCurve, RenderScene, ScenePoint};
