use crate::core::CurveMode;
use crate::shared::PlaygroundOptions;

/// Commands sind mutierende Operationen auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Modus setzen und Punktspeicher neu aufbauen
    SetCurveMode { mode: CurveMode },
    /// Canvas-Größe übernehmen
    SetCanvasSize { size: [f32; 2] },
    /// Punktspeicher des aktiven Modus neu aufbauen
    ReinitializeMode,
    /// Pointer-Down: nächsten Punkt selektieren oder (Custom) Punkte anhängen
    PressPoint {
        pos: glam::Vec2,
        max_distance_sq: f32,
    },
    /// Gezogenen Punkt auf Position setzen (begrenzt auf Canvas)
    DragSelectedPoint { pos: glam::Vec2 },
    /// Selektion aufheben (Pointer-Up / -Leave)
    ClearSelection,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: PlaygroundOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
}
