mod common;

use common::ScriptedSolver;
use glam::Vec2;
use swarm_canvas::authoring::AuthoringMode;
use swarm_canvas::config::{ScenarioKind, SimConfig};
use swarm_canvas::input::{InputState, Key, MouseButtons};
use swarm_canvas::render::DrawCommand;
use swarm_canvas::simulation::Simulation;
use swarm_canvas::{LogicEvent, SimCanvas};

fn stage() -> (SimCanvas, Simulation<ScriptedSolver>) {
    let config = SimConfig {
        scenario: ScenarioKind::Circle,
        agent_count: 3,
        circle_radius: 100.0,
        ..SimConfig::default()
    };
    let sim = Simulation::new(&config);
    (SimCanvas::new(config), sim)
}

fn press_left_at(pos: Vec2, time: f32) -> InputState {
    InputState {
        mouse_pos: pos,
        mouse_buttons: MouseButtons {
            left: true,
            ..Default::default()
        },
        left_pressed: true,
        time,
        ..Default::default()
    }
}

fn press_right_at(pos: Vec2, time: f32) -> InputState {
    InputState {
        mouse_pos: pos,
        mouse_buttons: MouseButtons {
            right: true,
            ..Default::default()
        },
        right_pressed: true,
        time,
        ..Default::default()
    }
}

fn double_click(canvas: &mut SimCanvas, sim: &mut Simulation<ScriptedSolver>, pos: Vec2, t: f32) {
    canvas.frame(&press_left_at(pos, t), 0.016, sim);
    canvas.frame(&press_left_at(pos, t + 0.1), 0.016, sim);
}

#[test]
fn double_click_stages_a_vertex_at_the_pointer_world_position() {
    let (mut canvas, mut sim) = stage();
    let pos = Vec2::new(400.0, 300.0);

    let (_, events) = canvas.frame(&press_left_at(pos, 0.0), 0.016, &mut sim);
    assert!(events.is_empty());
    assert!(sim.staging.is_empty());

    let (_, events) = canvas.frame(&press_left_at(pos, 0.1), 0.016, &mut sim);
    let expected = canvas.view.screen_to_world(pos);
    assert_eq!(events, vec![LogicEvent::VertexStaged(expected)]);
    assert_eq!(sim.staging, vec![expected]);
    assert_eq!(canvas.authoring.mode, AuthoringMode::Drawing);
}

#[test]
fn slow_second_click_does_not_stage() {
    let (mut canvas, mut sim) = stage();
    let pos = Vec2::new(400.0, 300.0);

    canvas.frame(&press_left_at(pos, 0.0), 0.016, &mut sim);
    let (_, events) = canvas.frame(&press_left_at(pos, 1.0), 0.016, &mut sim);
    assert!(events.is_empty());
    assert!(sim.staging.is_empty());
    assert_eq!(canvas.authoring.mode, AuthoringMode::Idle);
}

#[test]
fn right_click_appends_final_vertex_and_commits() {
    let (mut canvas, mut sim) = stage();
    double_click(&mut canvas, &mut sim, Vec2::new(400.0, 300.0), 0.0);
    double_click(&mut canvas, &mut sim, Vec2::new(500.0, 300.0), 1.0);
    assert_eq!(sim.staging.len(), 2);

    let (_, events) = canvas.frame(&press_right_at(Vec2::new(450.0, 200.0), 2.0), 0.016, &mut sim);
    assert!(events.contains(&LogicEvent::ObstacleCommitted { vertices: 3 }));
    assert_eq!(sim.obstacles.len(), 1);
    assert_eq!(sim.obstacles[0].len(), 3);
    assert!(sim.staging.is_empty());
    assert_eq!(canvas.authoring.mode, AuthoringMode::Idle);
}

#[test]
fn right_click_with_too_few_vertices_discards() {
    let (mut canvas, mut sim) = stage();

    let (_, events) = canvas.frame(&press_right_at(Vec2::new(450.0, 200.0), 0.0), 0.016, &mut sim);
    assert!(events.contains(&LogicEvent::ObstacleDiscarded));
    assert!(sim.obstacles.is_empty());
    assert!(sim.staging.is_empty());
    assert_eq!(canvas.authoring.mode, AuthoringMode::Idle);
}

#[test]
fn explicit_commit_closes_the_polygon_without_a_new_vertex() {
    let (mut canvas, mut sim) = stage();
    double_click(&mut canvas, &mut sim, Vec2::new(400.0, 300.0), 0.0);
    double_click(&mut canvas, &mut sim, Vec2::new(500.0, 300.0), 1.0);
    double_click(&mut canvas, &mut sim, Vec2::new(450.0, 200.0), 2.0);
    assert_eq!(sim.staging.len(), 3);

    let events = canvas.commit_staging(&mut sim);
    assert!(events.contains(&LogicEvent::ObstacleCommitted { vertices: 3 }));
    assert_eq!(sim.obstacles.len(), 1);
    assert_eq!(canvas.authoring.mode, AuthoringMode::Idle);
}

#[test]
fn gestures_over_ui_are_ignored() {
    let (mut canvas, mut sim) = stage();
    let scale_before = canvas.view.transform.scale;
    let offset_before = canvas.view.transform.offset;

    let input = InputState {
        mouse_pos: Vec2::new(100.0, 100.0),
        mouse_buttons: MouseButtons {
            left: true,
            ..Default::default()
        },
        left_pressed: true,
        scroll_delta: 5.0,
        ui_captured_mouse: true,
        ..Default::default()
    };
    canvas.frame(&input, 0.016, &mut sim);
    let mut second = input;
    second.time = 0.1;
    canvas.frame(&second, 0.016, &mut sim);

    assert!(sim.staging.is_empty());
    assert_eq!(canvas.view.transform.scale, scale_before);
    assert_eq!(canvas.view.transform.offset, offset_before);
}

#[test]
fn space_toggles_run_and_escape_requests_quit() {
    let (mut canvas, mut sim) = stage();
    assert!(!canvas.config.run_simulation);

    let input = InputState {
        pressed_keys: vec![Key::Space, Key::Escape],
        ..Default::default()
    };
    let (_, events) = canvas.frame(&input, 0.016, &mut sim);
    assert!(canvas.config.run_simulation);
    assert!(events.contains(&LogicEvent::RunToggled(true)));
    assert!(events.contains(&LogicEvent::QuitRequested));
}

#[test]
fn reset_discards_staging_but_keeps_committed_obstacles() {
    let (mut canvas, mut sim) = stage();
    double_click(&mut canvas, &mut sim, Vec2::new(400.0, 300.0), 0.0);
    double_click(&mut canvas, &mut sim, Vec2::new(500.0, 300.0), 1.0);
    canvas.frame(&press_right_at(Vec2::new(450.0, 200.0), 2.0), 0.016, &mut sim);
    assert_eq!(sim.obstacles.len(), 1);

    // Start a second polygon, then reset mid-drawing.
    double_click(&mut canvas, &mut sim, Vec2::new(600.0, 400.0), 3.0);
    assert_eq!(sim.staging.len(), 1);

    let input = InputState {
        pressed_keys: vec![Key::Backspace],
        time: 4.0,
        ..Default::default()
    };
    let (_, events) = canvas.frame(&input, 0.016, &mut sim);

    assert!(events.contains(&LogicEvent::SimulationReset));
    assert!(sim.staging.is_empty());
    assert_eq!(sim.obstacles.len(), 1);
    assert_eq!(canvas.authoring.mode, AuthoringMode::Idle);
    assert_eq!(sim.agent_count(), 3);
}

#[test]
fn scroll_gestures_never_produce_a_negative_scale() {
    let (mut canvas, mut sim) = stage();

    for delta in [-500.0, -10_000.0, 3.0, -1e9] {
        let input = InputState {
            scroll_delta: delta,
            ..Default::default()
        };
        canvas.frame(&input, 0.016, &mut sim);
        assert!(canvas.view.transform.scale >= 0.0, "delta {delta}");
    }
    assert_eq!(canvas.view.transform.scale, 0.0);
}

#[test]
fn drag_pans_one_to_one_in_screen_pixels() {
    let (mut canvas, mut sim) = stage();
    let offset_before = canvas.view.transform.offset;

    let mut input = InputState {
        mouse_pos: Vec2::new(200.0, 200.0),
        mouse_buttons: MouseButtons {
            middle: true,
            ..Default::default()
        },
        ..Default::default()
    };
    canvas.frame(&input, 0.016, &mut sim);
    input.mouse_pos = Vec2::new(230.0, 180.0);
    input.time = 0.1;
    canvas.frame(&input, 0.016, &mut sim);

    assert_eq!(
        canvas.view.transform.offset,
        offset_before + Vec2::new(30.0, -20.0)
    );
}

#[test]
fn runaway_frame_deltas_are_clamped_to_max_step() {
    let (mut canvas, mut sim) = stage();
    canvas.config.run_simulation = true;

    // A 10 s hitch at time_scale 10 would ask for a 100 s step.
    canvas.frame(&InputState::default(), 10.0, &mut sim);

    assert_eq!(sim.solver().time_step, canvas.config.max_step);
}

#[test]
fn keys_are_ignored_while_ui_captures_the_keyboard() {
    let (mut canvas, mut sim) = stage();
    assert!(!canvas.config.run_simulation);

    let input = InputState {
        pressed_keys: vec![Key::Space, Key::Backspace, Key::Escape],
        ui_captured_keyboard: true,
        ..Default::default()
    };
    let (_, events) = canvas.frame(&input, 0.016, &mut sim);

    assert!(events.is_empty());
    assert!(!canvas.config.run_simulation);
}

#[test]
fn frame_paints_the_pre_step_state() {
    let (mut canvas, mut sim) = stage();
    canvas.config.run_simulation = true;
    let before = sim.agent_position(0);
    let expected_screen = canvas.view.world_to_screen(before);

    let (draw_list, _) = canvas.frame(&InputState::default(), 0.1, &mut sim);

    // The agent advanced this frame, but the frame we just painted still
    // shows it where it was before the step.
    assert_ne!(sim.agent_position(0), before);
    let agent_rects: Vec<_> = draw_list
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Rect { pos, size, .. } => Some(*pos + *size * 0.5),
            _ => None,
        })
        .collect();
    assert!(agent_rects.contains(&expected_screen));
}

#[test]
fn preview_edges_follow_the_live_pointer() {
    let (mut canvas, mut sim) = stage();
    double_click(&mut canvas, &mut sim, Vec2::new(400.0, 300.0), 0.0);
    double_click(&mut canvas, &mut sim, Vec2::new(500.0, 300.0), 1.0);
    double_click(&mut canvas, &mut sim, Vec2::new(450.0, 200.0), 2.0);

    let pointer = Vec2::new(320.0, 420.0);
    let input = InputState {
        mouse_pos: pointer,
        time: 3.0,
        ..Default::default()
    };
    let (draw_list, _) = canvas.frame(&input, 0.016, &mut sim);

    // One edge from the last staged vertex and the closing edge from the
    // first, both chasing the pointer.
    let to_pointer = draw_list
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::Line { end, .. } if *end == pointer))
        .count();
    assert_eq!(to_pointer, 2);
}

#[test]
fn preview_shows_static_closing_edge_while_ui_captures_the_pointer() {
    let (mut canvas, mut sim) = stage();
    double_click(&mut canvas, &mut sim, Vec2::new(400.0, 300.0), 0.0);
    double_click(&mut canvas, &mut sim, Vec2::new(500.0, 300.0), 1.0);
    double_click(&mut canvas, &mut sim, Vec2::new(450.0, 200.0), 2.0);

    let pointer = Vec2::new(320.0, 420.0);
    let input = InputState {
        mouse_pos: pointer,
        time: 3.0,
        ui_captured_mouse: true,
        ..Default::default()
    };
    let (draw_list, _) = canvas.frame(&input, 0.016, &mut sim);

    let to_pointer = draw_list
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::Line { end, .. } if *end == pointer))
        .count();
    assert_eq!(to_pointer, 0);

    let first = canvas.view.world_to_screen(sim.staging[0]);
    let last = canvas.view.world_to_screen(sim.staging[2]);
    assert!(draw_list.iter().any(
        |cmd| matches!(cmd, DrawCommand::Line { start, end, .. } if *start == first && *end == last)
    ));
}
