//! Core-Domänentypen: Kurvenmodus, Kontrollpunkte, Punktspeicher, Bézier-Auswertung.

pub mod bezier;
pub mod bounds;
pub mod control_point;
pub mod curve_mode;
pub mod custom_chain;
pub mod point_store;

pub use bezier::{bernstein, cubic_chain_windows, de_casteljau, sample_curve, DEFAULT_SAMPLE_STEP};
pub use bounds::CanvasBounds;
pub use control_point::ControlPoint;
pub use curve_mode::CurveMode;
pub use custom_chain::{append_click, construction_pairs, CustomOffsets};
pub use point_store::{PointHit, PointStore};
