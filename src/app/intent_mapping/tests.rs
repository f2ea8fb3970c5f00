use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::CurveMode;
use crate::shared::CurveRenderStyle;

use super::map_intent_to_commands;

#[test]
fn mode_selected_maps_to_set_curve_mode() {
    let state = AppState::with_seed(1);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CurveModeSelected {
            mode: CurveMode::Conic,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetCurveMode {
            mode: CurveMode::Conic
        }
    ));
}

#[test]
fn changed_viewport_maps_to_resize_and_reinitialize_in_order() {
    let state = AppState::with_seed(1);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [640.0, 480.0],
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SetCanvasSize { .. }));
    assert!(matches!(commands[1], AppCommand::ReinitializeMode));
}

#[test]
fn unchanged_viewport_maps_to_nothing() {
    let state = AppState::with_seed(1);
    let size = state.view.canvas.size();

    let commands = map_intent_to_commands(&state, AppIntent::ViewportResized { size });

    assert!(commands.is_empty());
}

#[test]
fn degenerate_viewport_is_ignored() {
    let state = AppState::with_seed(1);

    let commands =
        map_intent_to_commands(&state, AppIntent::ViewportResized { size: [0.0, 300.0] });

    assert!(commands.is_empty());
}

#[test]
fn pointer_press_carries_squared_hit_radius() {
    let state = AppState::with_seed(1);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: glam::Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::PressPoint {
            max_distance_sq, ..
        } => assert_eq!(max_distance_sq, 400.0),
        ref other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn pointer_move_without_drag_maps_to_nothing() {
    let state = AppState::with_seed(1);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: glam::Vec2::new(10.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_release_during_drag_clears_selection() {
    let mut state = AppState::with_seed(1);
    state.editor.points.select(0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ClearSelection));
}

#[test]
fn render_style_change_maps_to_apply_options_with_new_style() {
    let mut state = AppState::with_seed(1);
    state.options.hit_radius_px = 12.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::RenderStyleChanged {
            style: CurveRenderStyle::StrokedPath,
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::ApplyOptions { options } => {
            assert_eq!(options.render_style, CurveRenderStyle::StrokedPath);
            assert_eq!(options.hit_radius_px, 12.0);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}
