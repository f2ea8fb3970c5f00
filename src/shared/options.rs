//! Zentrale Konfiguration für den Bézier-Playground.
//!
//! `PlaygroundOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::CurveRenderStyle;
use crate::core::{CustomOffsets, DEFAULT_SAMPLE_STEP};

// ── Canvas ──────────────────────────────────────────────────────────

/// Canvas-Größe vor dem ersten Frame (wird beim ersten Resize ersetzt).
pub const DEFAULT_CANVAS_SIZE: [f32; 2] = [1280.0, 720.0];
/// Randabstand bei zufälliger Platzierung (Größe eines Punkt-Markers).
pub const HANDLE_SIZE: f32 = 16.0 * 1.2;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Pick-Radius in Pixeln (20 px → 400 px² Schwelle).
pub const HIT_RADIUS_PX: f32 = 20.0;

// ── Punkt-Rendering ────────────────────────────────────────────────

/// Radius der Punkt-Marker in Pixeln.
pub const POINT_RADIUS_PX: f32 = 8.0;
/// Vergrößerungsfaktor für den gezogenen Punkt.
pub const SELECTION_SIZE_FACTOR: f32 = 1.4;
/// Farbe der Kurvenpunkte (RGBA).
pub const POINT_COLOR: [f32; 4] = [0.45, 0.55, 0.95, 1.0];
/// Farbe der Anfasser im Custom-Modus (RGBA: Orange).
pub const AUXILIARY_COLOR: [f32; 4] = [1.0, 0.63, 0.0, 1.0];
/// Farbe des gezogenen Punkts (RGBA).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Linien & Kurve ─────────────────────────────────────────────────

/// Linienstärke der Konstruktionslinien.
pub const CONSTRUCTION_LINE_WIDTH: f32 = 3.0;
/// Farbe der Konstruktionslinien (#484858).
pub const CONSTRUCTION_LINE_COLOR: [f32; 4] = [0.282, 0.282, 0.345, 1.0];
/// Kantenlänge eines Kurven-Samples in der Punktwolke.
pub const CURVE_SAMPLE_SIZE: f32 = 2.0;
/// Linienstärke der Kurve im Pfad-Stil.
pub const CURVE_STROKE_WIDTH: f32 = 2.0;
/// Farbe der Kurve (#b3b4bd).
pub const CURVE_COLOR: [f32; 4] = [0.702, 0.706, 0.741, 1.0];
/// Hintergrundfarbe der Zeichenfläche.
pub const BACKGROUND_COLOR: [f32; 4] = [0.11, 0.11, 0.14, 1.0];

// ── Gültige Wertebereiche (Dialog und Datei-Import) ────────────────

/// Pick-Radius in Pixeln.
pub const HIT_RADIUS_RANGE: RangeInclusive<f32> = 2.0..=60.0;
/// Randabstand bei zufälliger Platzierung.
pub const HANDLE_SIZE_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Schrittweite für t; die Untergrenze begrenzt die Samples pro Frame auf 2001.
pub const SAMPLE_STEP_RANGE: RangeInclusive<f32> = 0.0005..=0.1;
/// Kantenlänge eines Samples.
pub const CURVE_SAMPLE_SIZE_RANGE: RangeInclusive<f32> = 1.0..=8.0;
/// Linienstärken von Kurve und Konstruktionslinien.
pub const LINE_WIDTH_RANGE: RangeInclusive<f32> = 0.5..=10.0;
/// Marker-Radius.
pub const POINT_RADIUS_RANGE: RangeInclusive<f32> = 2.0..=30.0;
/// Vergrößerungsfaktor für den gezogenen Punkt.
pub const SELECTION_SIZE_FACTOR_RANGE: RangeInclusive<f32> = 1.0..=3.0;
/// Betrag je Achse für Custom-Offsets.
pub const CUSTOM_OFFSET_LIMIT: f32 = 500.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `bezier_playground.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundOptions {
    // ── Hit-Test ────────────────────────────────────────────────
    /// Pick-Radius in Pixeln
    pub hit_radius_px: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Schrittweite für t beim Abtasten
    pub sample_step: f32,
    /// Zeichenstil der Kurve
    pub render_style: CurveRenderStyle,
    /// Kantenlänge eines Samples in der Punktwolke
    pub curve_sample_size: f32,
    /// Linienstärke im Pfad-Stil
    pub curve_stroke_width: f32,
    /// Kurvenfarbe
    pub curve_color: [f32; 4],

    // ── Konstruktionslinien ─────────────────────────────────────
    /// Linienstärke
    pub construction_line_width: f32,
    /// Linienfarbe
    pub construction_line_color: [f32; 4],

    // ── Punkte ──────────────────────────────────────────────────
    /// Randabstand bei zufälliger Platzierung
    pub handle_size: f32,
    /// Marker-Radius
    pub point_radius_px: f32,
    /// Vergrößerungsfaktor für den gezogenen Punkt
    pub selection_size_factor: f32,
    /// Farbe der Kurvenpunkte
    pub point_color: [f32; 4],
    /// Farbe der Anfasser
    pub auxiliary_color: [f32; 4],
    /// Farbe des gezogenen Punkts
    pub selected_color: [f32; 4],

    // ── Custom-Modus ────────────────────────────────────────────
    /// Anfasser-Offsets für neu angehängte Segmente
    pub custom_offsets: CustomOffsets,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],
}

impl Default for PlaygroundOptions {
    fn default() -> Self {
        Self {
            hit_radius_px: HIT_RADIUS_PX,

            sample_step: DEFAULT_SAMPLE_STEP,
            render_style: CurveRenderStyle::default(),
            curve_sample_size: CURVE_SAMPLE_SIZE,
            curve_stroke_width: CURVE_STROKE_WIDTH,
            curve_color: CURVE_COLOR,

            construction_line_width: CONSTRUCTION_LINE_WIDTH,
            construction_line_color: CONSTRUCTION_LINE_COLOR,

            handle_size: HANDLE_SIZE,
            point_radius_px: POINT_RADIUS_PX,
            selection_size_factor: SELECTION_SIZE_FACTOR,
            point_color: POINT_COLOR,
            auxiliary_color: AUXILIARY_COLOR,
            selected_color: SELECTED_COLOR,

            custom_offsets: CustomOffsets::default(),

            background_color: BACKGROUND_COLOR,
        }
    }
}

impl PlaygroundOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML. Fehlende Felder erhalten Standardwerte,
    /// Werte außerhalb der gültigen Bereiche werden begrenzt.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let mut options: Self = toml::from_str(content)?;
        options.sanitize();
        Ok(options)
    }

    /// Begrenzt alle Werte auf ihre gültigen Bereiche.
    ///
    /// Nicht-endliche Werte fallen auf den jeweiligen Standardwert zurück.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();

        self.hit_radius_px =
            clamp_or(self.hit_radius_px, &HIT_RADIUS_RANGE, defaults.hit_radius_px);
        self.handle_size = clamp_or(self.handle_size, &HANDLE_SIZE_RANGE, defaults.handle_size);
        self.sample_step = clamp_or(self.sample_step, &SAMPLE_STEP_RANGE, defaults.sample_step);
        self.curve_sample_size = clamp_or(
            self.curve_sample_size,
            &CURVE_SAMPLE_SIZE_RANGE,
            defaults.curve_sample_size,
        );
        self.curve_stroke_width = clamp_or(
            self.curve_stroke_width,
            &LINE_WIDTH_RANGE,
            defaults.curve_stroke_width,
        );
        self.construction_line_width = clamp_or(
            self.construction_line_width,
            &LINE_WIDTH_RANGE,
            defaults.construction_line_width,
        );
        self.point_radius_px = clamp_or(
            self.point_radius_px,
            &POINT_RADIUS_RANGE,
            defaults.point_radius_px,
        );
        self.selection_size_factor = clamp_or(
            self.selection_size_factor,
            &SELECTION_SIZE_FACTOR_RANGE,
            defaults.selection_size_factor,
        );

        let offset_range = -CUSTOM_OFFSET_LIMIT..=CUSTOM_OFFSET_LIMIT;
        let offsets = &mut self.custom_offsets;
        for (offset, default) in [
            (&mut offsets.after_point, defaults.custom_offsets.after_point),
            (&mut offsets.after_auxiliary, defaults.custom_offsets.after_auxiliary),
            (&mut offsets.trailing, defaults.custom_offsets.trailing),
        ] {
            for axis in 0..2 {
                offset[axis] = clamp_or(offset[axis], &offset_range, default[axis]);
            }
        }

        for (color, default) in [
            (&mut self.curve_color, defaults.curve_color),
            (&mut self.construction_line_color, defaults.construction_line_color),
            (&mut self.point_color, defaults.point_color),
            (&mut self.auxiliary_color, defaults.auxiliary_color),
            (&mut self.selected_color, defaults.selected_color),
            (&mut self.background_color, defaults.background_color),
        ] {
            for channel in 0..4 {
                color[channel] = clamp_or(color[channel], &(0.0..=1.0), default[channel]);
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_playground"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_playground.toml")
    }

    /// Quadrierte Pick-Schwelle in px².
    pub fn hit_radius_sq(&self) -> f32 {
        self.hit_radius_px * self.hit_radius_px
    }
}

/// Begrenzt `value` auf `range`; NaN und ±∞ ergeben `fallback`.
fn clamp_or(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
