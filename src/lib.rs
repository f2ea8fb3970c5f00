//! Bézier-Playground Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    bernstein, cubic_chain_windows, de_casteljau, sample_curve, CanvasBounds, ControlPoint,
    CurveMode, PointStore,
};
pub use shared::{CurveRenderStyle, PlaygroundOptions, RenderScene};
