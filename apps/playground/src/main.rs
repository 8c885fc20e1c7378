use macroquad::prelude as mq;
use macroquad::ui::{hash, root_ui, widgets};
use orca_lite::OrcaLite;
use swarm_canvas::input::{InputState, Key, MouseButtons};
use swarm_canvas::render::DrawCommand;
use swarm_canvas::simulation::Simulation;
use swarm_canvas::{LogicEvent, ScenarioKind, SimCanvas, SimConfig};

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: "Collision Avoidance".to_owned(),
        window_width: 1280,
        window_height: 768,
        ..Default::default()
    }
}

fn color(v: glam::Vec4) -> mq::Color {
    mq::Color::new(v.x, v.y, v.z, v.w)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut canvas = SimCanvas::new(SimConfig::default());
    let mut sim: Simulation<OrcaLite> = Simulation::new(&canvas.config);

    loop {
        let screen_size = glam::Vec2::new(mq::screen_width(), mq::screen_height());
        canvas.update_viewport_size(screen_size);

        // Map macroquad input to the stage input protocol. The capture flag
        // reflects the UI state laid out on the previous frame, the same way
        // the immediate-mode original queried its UI before handling events.
        let (mx, my) = mq::mouse_position();
        let input = InputState {
            mouse_pos: glam::Vec2::new(mx, my),
            mouse_buttons: MouseButtons {
                left: mq::is_mouse_button_down(mq::MouseButton::Left),
                right: mq::is_mouse_button_down(mq::MouseButton::Right),
                middle: mq::is_mouse_button_down(mq::MouseButton::Middle),
            },
            left_pressed: mq::is_mouse_button_pressed(mq::MouseButton::Left),
            right_pressed: mq::is_mouse_button_pressed(mq::MouseButton::Right),
            scroll_delta: mq::mouse_wheel().1,
            pressed_keys: pressed_keys(),
            screen_size,
            time: mq::get_time() as f32,
            ui_captured_mouse: root_ui().is_mouse_captured(),
            // macroquad's ui exposes no keyboard-capture query, and none of
            // the widgets in this panel take keyboard focus, so the flag
            // stays constant here. Hosts with text entry would wire it up.
            ui_captured_keyboard: false,
        };

        let dt = mq::get_frame_time();
        let (draw_list, events) = canvas.frame(&input, dt, &mut sim);

        let mut quit = false;
        for event in events {
            tracing::debug!(?event, "logic event");
            if event == LogicEvent::QuitRequested {
                quit = true;
            }
        }
        if quit {
            break;
        }

        mq::clear_background(color(canvas.config.style.background_color));

        for cmd in draw_list {
            match cmd {
                DrawCommand::Line {
                    start,
                    end,
                    color: c,
                    width,
                } => {
                    mq::draw_line(start.x, start.y, end.x, end.y, width, color(c));
                }
                DrawCommand::Rect {
                    pos,
                    size,
                    color: c,
                    filled,
                } => {
                    if filled {
                        mq::draw_rectangle(pos.x, pos.y, size.x, size.y, color(c));
                    } else {
                        mq::draw_rectangle_lines(pos.x, pos.y, size.x, size.y, 1.0, color(c));
                    }
                }
                DrawCommand::Point { pos, color: c } => {
                    mq::draw_rectangle(pos.x, pos.y, 1.0, 1.0, color(c));
                }
            }
        }

        draw_controls(&mut canvas, &mut sim, dt);

        mq::next_frame().await
    }
}

fn pressed_keys() -> Vec<Key> {
    let mut keys = Vec::new();
    if mq::is_key_pressed(mq::KeyCode::Space) {
        keys.push(Key::Space);
    }
    if mq::is_key_pressed(mq::KeyCode::Backspace) {
        keys.push(Key::Backspace);
    }
    if mq::is_key_pressed(mq::KeyCode::Escape) {
        keys.push(Key::Escape);
    }
    keys
}

fn draw_controls(canvas: &mut SimCanvas, sim: &mut Simulation<OrcaLite>, dt: f32) {
    let offset_max = canvas.view.offset_limit(&canvas.config);

    widgets::Window::new(hash!(), mq::vec2(10.0, 10.0), mq::vec2(360.0, 560.0))
        .label("Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &format!("dt: {:.5} seconds", dt));
            ui.label(None, "Keyboard: Space pause/continue, Backspace reset");
            ui.label(None, "Mouse: double click adds obstacle vertex,");
            ui.label(None, "       right click finishes the obstacle");
            ui.separator();

            ui.slider(hash!(), "Zoom", 0.01f32..100.0, &mut canvas.view.transform.scale);
            ui.slider(
                hash!(),
                "Offset X",
                -offset_max..offset_max,
                &mut canvas.view.transform.offset.x,
            );
            ui.slider(
                hash!(),
                "Offset Y",
                -offset_max..offset_max,
                &mut canvas.view.transform.offset.y,
            );

            let config = &mut canvas.config;
            ui.slider(hash!(), "Time Scale", 0.01f32..100.0, &mut config.time_scale);
            ui.slider(
                hash!(),
                "Neighbor Distance (m)",
                0f32..50.0,
                &mut config.agents.neighbor_dist,
            );
            let mut max_neighbors = config.agents.max_neighbors as f32;
            ui.slider(hash!(), "Max Neighbors", 0f32..50.0, &mut max_neighbors);
            config.agents.max_neighbors = max_neighbors.round().max(0.0) as usize;
            ui.slider(
                hash!(),
                "Tau for other agents (s)",
                0f32..50.0,
                &mut config.agents.time_horizon,
            );
            ui.slider(
                hash!(),
                "Tau for obstacles (s)",
                0f32..50.0,
                &mut config.agents.time_horizon_obstacle,
            );
            ui.slider(hash!(), "Agent Radius (m)", 0f32..10.0, &mut config.agents.radius);
            ui.slider(
                hash!(),
                "Agent Max Speed (m/s)",
                0f32..100.0,
                &mut config.agents.max_speed,
            );
            let mut agent_count = config.agent_count as f32;
            ui.slider(hash!(), "Number of Agents", 0f32..500.0, &mut agent_count);
            config.agent_count = agent_count.round().max(0.0) as usize;
            ui.slider(
                hash!(),
                "Radius of Circle (m)",
                0f32..1000.0,
                &mut config.circle_radius,
            );

            ui.checkbox(hash!(), "Show Goal", &mut config.show_goals);
            ui.checkbox(hash!(), "Run Simulation", &mut config.run_simulation);

            ui.label(None, &format!("Scenario: {}", config.scenario.label()));
            if ui.button(None, "Circle") {
                config.scenario = ScenarioKind::Circle;
            }
            if ui.button(None, "Deadlock") {
                config.scenario = ScenarioKind::Deadlock;
            }
        });

    // Buttons that need the whole canvas are laid out after the window
    // closure to avoid borrowing `canvas` twice.
    let mut commit = false;
    let mut reset = false;
    widgets::Window::new(hash!(), mq::vec2(10.0, 580.0), mq::vec2(360.0, 70.0))
        .label("Actions")
        .ui(&mut *root_ui(), |ui| {
            if !sim.staging.is_empty() && ui.button(None, "Add Obstacle") {
                commit = true;
            }
            if ui.button(None, "Reset") {
                reset = true;
            }
        });

    if commit {
        for event in canvas.commit_staging(sim) {
            tracing::debug!(?event, "logic event");
        }
    }
    if reset {
        canvas.reset(sim);
    }
}
