use crate::core::CurveMode;
use crate::shared::{CurveRenderStyle, PlaygroundOptions};

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kurvenmodus im Menü gewählt (auch erneut derselbe Modus)
    CurveModeSelected { mode: CurveMode },
    /// Größe der Zeichenfläche gemeldet (jeden Frame)
    ViewportResized { size: [f32; 2] },
    /// Primäre Maustaste auf der Zeichenfläche gedrückt (Canvas-Koordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger bewegt (Canvas-Koordinaten, ggf. außerhalb)
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeft,
    /// Laufenden Drag abbrechen (Escape)
    ClearSelectionRequested,
    /// Zeichenstil der Kurve wechseln
    RenderStyleChanged { style: CurveRenderStyle },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen im Dialog geändert (Live-Preview)
    OptionsChanged { options: PlaygroundOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
