use eframe_sketch::Engine;
use eframe_sketch::input::PointerEvent;
use eframe_sketch::mode::{ActiveMode, StylePatch, ToolKind};
use eframe_sketch::shape::{Shape, ShapeStyle, ShapeType, factory};
use egui::{Color32, Rect, pos2, vec2};

/// Engine whose canvas is displayed at exactly its buffer size, so screen
/// and surface coordinates coincide.
fn engine() -> Engine {
    Engine::new(vec2(800.0, 600.0))
}

fn down(engine: &mut Engine, x: f32, y: f32) {
    engine.handle_event(&PointerEvent::Down { pos: pos2(x, y) });
}

fn moved(engine: &mut Engine, x: f32, y: f32) {
    engine.handle_event(&PointerEvent::Move { pos: pos2(x, y) });
}

fn up(engine: &mut Engine, x: f32, y: f32) {
    engine.handle_event(&PointerEvent::Up { pos: pos2(x, y) });
}

fn out(engine: &mut Engine) {
    engine.handle_event(&PointerEvent::Out);
}

fn seed_circle(engine: &mut Engine, x: f32, y: f32, radius: f32) {
    let style = ShapeStyle::new(Some(Color32::RED), Color32::RED, 2.0);
    engine.add_shape(factory::create_circle(pos2(x, y), radius, style).unwrap());
}

fn circle_center(shape: &ShapeType) -> egui::Pos2 {
    match shape {
        ShapeType::Circle(c) => c.center(),
        other => panic!("expected a circle, got {other:?}"),
    }
}

#[test]
fn test_select_drag_translates_the_hit_shape() {
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 120.0, 5.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));

    down(&mut engine, 100.0, 120.0);
    moved(&mut engine, 110.0, 120.0);
    up(&mut engine, 110.0, 120.0);

    assert_eq!(engine.shapes().len(), 1);
    let shape = engine.shapes().iter().next().unwrap();
    assert_eq!(circle_center(shape), pos2(110.0, 120.0));
}

#[test]
fn test_select_drag_applies_incremental_deltas() {
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 120.0, 5.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));

    down(&mut engine, 100.0, 120.0);
    moved(&mut engine, 110.0, 125.0);
    moved(&mut engine, 115.0, 121.0);
    up(&mut engine, 115.0, 121.0);

    let shape = engine.shapes().iter().next().unwrap();
    assert_eq!(circle_center(shape), pos2(115.0, 121.0));
}

#[test]
fn test_select_drag_only_moves_the_first_hit_in_insertion_order() {
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 100.0, 20.0);
    seed_circle(&mut engine, 105.0, 100.0, 20.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));

    down(&mut engine, 100.0, 100.0);
    moved(&mut engine, 130.0, 100.0);
    up(&mut engine, 130.0, 100.0);

    let shapes: Vec<_> = engine.shapes().iter().collect();
    assert_eq!(circle_center(shapes[0]), pos2(130.0, 100.0));
    assert_eq!(circle_center(shapes[1]), pos2(105.0, 100.0));
}

#[test]
fn test_select_down_on_empty_space_is_inert() {
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 120.0, 5.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));

    down(&mut engine, 400.0, 400.0);
    moved(&mut engine, 420.0, 420.0);
    up(&mut engine, 420.0, 420.0);

    let shape = engine.shapes().iter().next().unwrap();
    assert_eq!(circle_center(shape), pos2(100.0, 120.0));
}

#[test]
fn test_pointer_out_cancels_a_drag_without_further_movement() {
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 120.0, 5.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));

    down(&mut engine, 100.0, 120.0);
    moved(&mut engine, 110.0, 120.0);
    out(&mut engine);
    // Re-entering and moving must not keep dragging the old target.
    moved(&mut engine, 300.0, 300.0);

    let shape = engine.shapes().iter().next().unwrap();
    assert_eq!(circle_center(shape), pos2(110.0, 120.0));
}

#[test]
fn test_rectangle_creation_commits_the_documented_geometry() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Rectangle));

    down(&mut engine, 50.0, 50.0);
    moved(&mut engine, 70.0, 80.0);
    up(&mut engine, 70.0, 80.0);

    assert_eq!(engine.shapes().len(), 1);
    match engine.shapes().iter().next().unwrap() {
        ShapeType::Rectangle(r) => {
            // dx=20, dy=30 -> width 40, height 60, centered on the anchor.
            assert_eq!(r.top_left(), pos2(30.0, 20.0));
            assert_eq!(r.width(), 40.0);
            assert_eq!(r.height(), 60.0);
            // Committed style, not the translucent preview style.
            assert_eq!(r.style().stroke_width, 3.0);
            assert_eq!(r.style().fill, Some(Color32::from_rgb(0x84, 0x5E, 0xC2)));
        }
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn test_circle_creation_grows_a_true_radius_from_the_anchor() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Circle));

    down(&mut engine, 100.0, 100.0);
    moved(&mut engine, 101.0, 101.0);
    up(&mut engine, 103.0, 104.0);

    match engine.shapes().iter().next().unwrap() {
        ShapeType::Circle(c) => {
            assert_eq!(c.center(), pos2(100.0, 100.0));
            assert_eq!(c.radius(), 5.0);
        }
        other => panic!("expected a circle, got {other:?}"),
    }
}

#[test]
fn test_square_creation_centers_on_the_anchor_and_uses_the_larger_axis() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Square));

    down(&mut engine, 100.0, 100.0);
    up(&mut engine, 110.0, 104.0);

    match engine.shapes().iter().next().unwrap() {
        ShapeType::Rectangle(r) => {
            // max(|10|, |4|) * 2 = 20, centered on (100, 100).
            assert_eq!(r.top_left(), pos2(90.0, 90.0));
            assert_eq!(r.width(), 20.0);
            assert_eq!(r.height(), 20.0);
        }
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn test_zero_movement_creations_commit_the_size_floors() {
    let mut engine = engine();

    engine.set_mode(ActiveMode::for_tool(ToolKind::Circle));
    down(&mut engine, 200.0, 200.0);
    up(&mut engine, 200.0, 200.0);

    engine.set_mode(ActiveMode::for_tool(ToolKind::Rectangle));
    down(&mut engine, 300.0, 300.0);
    up(&mut engine, 300.0, 310.0);

    assert_eq!(engine.shapes().len(), 2);
    let shapes: Vec<_> = engine.shapes().iter().collect();
    match shapes[0] {
        ShapeType::Circle(c) => assert_eq!(c.radius(), 1.0),
        other => panic!("expected a circle, got {other:?}"),
    }
    match shapes[1] {
        ShapeType::Rectangle(r) => {
            // No horizontal movement: that axis floors at 2.
            assert_eq!(r.width(), 2.0);
            assert_eq!(r.height(), 20.0);
        }
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn test_pointer_out_discards_an_in_progress_creation() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Circle));

    down(&mut engine, 100.0, 100.0);
    moved(&mut engine, 150.0, 150.0);
    out(&mut engine);

    assert_eq!(engine.shapes().len(), 0);

    // The cancelled gesture leaves no anchor behind: a bare up adds nothing.
    up(&mut engine, 150.0, 150.0);
    assert_eq!(engine.shapes().len(), 0);
}

#[test]
fn test_switching_modes_abandons_the_old_gesture_entirely() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Circle));
    down(&mut engine, 100.0, 100.0);
    moved(&mut engine, 150.0, 150.0);

    // Mid-gesture tool switch: the creation must not survive it.
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));
    moved(&mut engine, 160.0, 160.0);
    up(&mut engine, 160.0, 160.0);

    assert_eq!(engine.shapes().len(), 0);
}

#[test]
fn test_switching_modes_abandons_a_drag_in_progress() {
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 100.0, 10.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));
    down(&mut engine, 100.0, 100.0);

    engine.set_mode(ActiveMode::for_tool(ToolKind::Rectangle));
    moved(&mut engine, 200.0, 200.0);
    up(&mut engine, 200.0, 200.0);

    // The old drag target did not move, and the new mode saw no pointer-down
    // so it committed nothing.
    let shape = engine.shapes().iter().next().unwrap();
    assert_eq!(circle_center(shape), pos2(100.0, 100.0));
    assert_eq!(engine.shapes().len(), 1);
}

#[test]
fn test_render_requests_coalesce_into_a_single_repaint() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));
    assert!(engine.take_render_request());
    assert!(!engine.take_render_request());

    engine.request_render();
    engine.request_render();
    engine.request_render();

    assert!(engine.take_render_request());
    assert!(!engine.take_render_request());
}

#[test]
fn test_style_patch_applies_to_the_next_committed_shape() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Rectangle));

    let patch = StylePatch {
        committed_fill: Some(Color32::from_rgb(10, 20, 30)),
        committed_stroke: Some(Color32::from_rgb(40, 50, 60)),
        committed_width: Some(7.0),
        ..Default::default()
    };
    engine.update_mode_attributes(&patch);

    down(&mut engine, 100.0, 100.0);
    up(&mut engine, 120.0, 110.0);

    match engine.shapes().iter().next().unwrap() {
        ShapeType::Rectangle(r) => {
            assert_eq!(r.style().fill, Some(Color32::from_rgb(10, 20, 30)));
            assert_eq!(r.style().stroke, Color32::from_rgb(40, 50, 60));
            assert_eq!(r.style().stroke_width, 7.0);
        }
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn test_style_patch_is_a_noop_for_select_and_before_any_mode() {
    let patch = StylePatch {
        committed_width: Some(9.0),
        ..Default::default()
    };

    // No mode installed yet.
    let mut fresh = engine();
    fresh.update_mode_attributes(&patch);

    // Select mode has no style attributes.
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 100.0, 5.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));
    engine.update_mode_attributes(&patch);
    assert_eq!(engine.shapes().len(), 1);
}

#[test]
fn test_events_before_the_first_mode_are_dropped() {
    let mut engine = engine();
    down(&mut engine, 100.0, 100.0);
    moved(&mut engine, 120.0, 120.0);
    up(&mut engine, 120.0, 120.0);
    assert_eq!(engine.shapes().len(), 0);
    assert_eq!(engine.mode_name(), None);
}

#[test]
fn test_pointer_mapping_accounts_for_display_scaling() {
    let mut engine = engine();
    seed_circle(&mut engine, 100.0, 120.0, 5.0);
    engine.set_mode(ActiveMode::for_tool(ToolKind::Select));

    // Canvas displayed at half its 800x600 buffer size: every screen pixel
    // is two buffer units.
    engine.set_screen_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0)));

    down(&mut engine, 50.0, 60.0);
    moved(&mut engine, 55.0, 60.0);
    up(&mut engine, 55.0, 60.0);

    let shape = engine.shapes().iter().next().unwrap();
    assert_eq!(circle_center(shape), pos2(110.0, 120.0));
}

#[test]
fn test_snapshot_reports_mode_cursor_and_actions() {
    let mut engine = engine();
    engine.set_mode(ActiveMode::for_tool(ToolKind::Circle));

    moved(&mut engine, 40.0, 50.0);
    {
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.mode_name, "create_circle");
        assert_eq!(snapshot.cursor, Some(pos2(40.0, 50.0)));
        assert_eq!(snapshot.shape_count, 0);
        assert_eq!(snapshot.buffer, vec2(800.0, 600.0));
    }

    down(&mut engine, 100.0, 100.0);
    up(&mut engine, 106.0, 108.0);
    {
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.shape_count, 1);
        assert_eq!(snapshot.last_action, "Created circle center=(100, 100) radius=10");
    }

    out(&mut engine);
    assert_eq!(engine.snapshot().cursor, None);
}
