//! # Obstacle Authoring
//!
//! Interprets pointer gestures into staging-buffer mutations and commit or
//! discard transitions, plus the global keyboard shortcuts. The logic is an
//! explicit two-state machine so transition coverage is testable without any
//! rendering involved.

use glam::Vec2;

use crate::config::SimConfig;
use crate::input::{InputState, Key};
use crate::simulation::Simulation;
use crate::solver::AvoidanceSolver;
use crate::view::View;

/// Events emitted by the stage logic to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicEvent {
    /// A vertex was appended to the staging obstacle (world space).
    VertexStaged(Vec2),
    /// The staging obstacle was committed as a polygon of `vertices` points.
    ObstacleCommitted { vertices: usize },
    /// A staging obstacle with fewer than 3 vertices was discarded on commit.
    ObstacleDiscarded,
    /// The simulation was re-initialized from the current configuration.
    SimulationReset,
    /// The run flag was toggled; carries the new value.
    RunToggled(bool),
    /// The user asked to quit.
    QuitRequested,
}

/// The current state of obstacle authoring.
///
/// `Idle` holds exactly when the staging buffer is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthoringMode {
    /// No obstacle in progress.
    #[default]
    Idle,
    /// Staging buffer has one or more vertices, not yet committed.
    Drawing,
}

/// A left press waiting for its pair to form a double-click.
#[derive(Clone, Copy, Debug)]
struct PendingClick {
    at: f32,
    pos: Vec2,
}

/// The obstacle-authoring state machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Authoring {
    /// Current FSM state.
    pub mode: AuthoringMode,
    pending_click: Option<PendingClick>,
}

impl Authoring {
    /// Processes one frame of authoring input and keyboard shortcuts.
    ///
    /// Pointer gestures are ignored while the UI captures the mouse, and
    /// keys while it captures the keyboard.
    pub fn handle<S: AvoidanceSolver + Default>(
        &mut self,
        view: &View,
        config: &mut SimConfig,
        input: &InputState,
        sim: &mut Simulation<S>,
        events: &mut Vec<LogicEvent>,
    ) {
        if !input.ui_captured_keyboard {
            for key in &input.pressed_keys {
                match key {
                    Key::Space => {
                        config.run_simulation = !config.run_simulation;
                        events.push(LogicEvent::RunToggled(config.run_simulation));
                    }
                    Key::Backspace => {
                        self.reset(config, sim);
                        events.push(LogicEvent::SimulationReset);
                    }
                    Key::Escape => events.push(LogicEvent::QuitRequested),
                }
            }
        }

        if input.ui_captured_mouse {
            return;
        }

        if input.left_pressed {
            let paired = self.pending_click.is_some_and(|prev| {
                input.time - prev.at <= config.double_click_time
                    && prev.pos.distance(input.mouse_pos) <= config.double_click_radius
            });
            if paired {
                self.pending_click = None;
                self.stage_vertex(view, input.mouse_pos, sim, events);
            } else {
                self.pending_click = Some(PendingClick {
                    at: input.time,
                    pos: input.mouse_pos,
                });
            }
        }

        if input.right_pressed {
            self.pending_click = None;
            self.stage_vertex(view, input.mouse_pos, sim, events);
            self.commit(sim, events);
        }
    }

    /// Commits the staging buffer, recording the outcome. Valid from either
    /// state; committing while `Idle` is a no-op discard.
    pub fn commit<S: AvoidanceSolver + Default>(
        &mut self,
        sim: &mut Simulation<S>,
        events: &mut Vec<LogicEvent>,
    ) {
        if sim.commit_obstacle() {
            events.push(LogicEvent::ObstacleCommitted {
                vertices: sim.obstacles.last().map_or(0, Vec::len),
            });
        } else if self.mode == AuthoringMode::Drawing {
            events.push(LogicEvent::ObstacleDiscarded);
        }
        self.mode = AuthoringMode::Idle;
    }

    /// Full reset: discards any in-progress staging buffer unconditionally
    /// and re-initializes the simulation from the current configuration.
    pub fn reset<S: AvoidanceSolver + Default>(
        &mut self,
        config: &SimConfig,
        sim: &mut Simulation<S>,
    ) {
        sim.staging.clear();
        self.mode = AuthoringMode::Idle;
        self.pending_click = None;
        sim.initialize(config);
    }

    fn stage_vertex<S: AvoidanceSolver + Default>(
        &mut self,
        view: &View,
        screen_pos: Vec2,
        sim: &mut Simulation<S>,
        events: &mut Vec<LogicEvent>,
    ) {
        let world = view.screen_to_world(screen_pos);
        sim.staging.push(world);
        self.mode = AuthoringMode::Drawing;
        events.push(LogicEvent::VertexStaged(world));
    }
}
