//! # SwarmCanvas
//!
//! `swarm_canvas` is a headless harness for an interactive multi-agent
//! motion-planning simulation. It owns state, mathematics, and interaction
//! logic, while delegating rendering and windowing to the host application
//! and collision avoidance to a pluggable solver backend.
//!
//! ## Core Architecture
//! - **Simulation (`src/simulation.rs`)**: Agents, goals, obstacles, and the
//!   exclusively-owned solver instance.
//! - **View (`src/view.rs`)**: Coordinate transformation (World <-> Screen).
//! - **Painter (`src/painter.rs`)**: Outputs a list of `DrawCommand`s for the
//!   host to render.
//! - **Authoring / Camera (`src/authoring.rs`, `src/camera.rs`)**: Pointer
//!   gestures into staging-obstacle edits and pan/zoom.

pub mod authoring;
pub mod camera;
pub mod config;
pub mod input;
pub mod painter;
pub mod render;
pub mod scenario;
pub mod simulation;
pub mod solver;
pub mod view;

use glam::Vec2;

use authoring::Authoring;
use camera::CameraController;
use input::InputState;
use render::RenderList;
use simulation::Simulation;
use solver::AvoidanceSolver;
use view::{Transform, View};

// Re-exports for convenience
pub use authoring::LogicEvent;
pub use config::{ScenarioKind, SimConfig};

/// The main entry point for the library.
///
/// `SimCanvas` holds the transient state of the stage (viewport, camera and
/// authoring interaction state) and the live configuration. It is intended to
/// be instantiated once and driven every frame via [`SimCanvas::frame`].
pub struct SimCanvas {
    /// Configuration settings, edited live by the host UI.
    pub config: SimConfig,
    /// The viewport system handling coordinate transforms.
    pub view: View,
    /// Camera interaction state.
    pub camera: CameraController,
    /// Obstacle-authoring state machine.
    pub authoring: Authoring,
}

impl SimCanvas {
    /// Creates a new stage with the given configuration.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            view: View::new(Transform::default(), Vec2::new(1280.0, 768.0)),
            camera: CameraController::default(),
            authoring: Authoring::default(),
        }
    }

    /// Updates the viewport size (e.g. on window resize).
    pub fn update_viewport_size(&mut self, size: Vec2) {
        self.view.viewport_size = size;
    }

    /// The core update loop, called once per frame.
    ///
    /// Strict order, preserved from the recorded behavior:
    /// 1. Paint the current (pre-step) state, so edits are visible even while
    ///    paused and the visible frame lags the step by one.
    /// 2. If running, assign preferred velocities and step the solver by the
    ///    scaled wall-clock delta, clamped to `config.max_step`.
    /// 3. Dispatch input to the camera and the authoring machine, mutating
    ///    state for the *next* frame.
    pub fn frame<S: AvoidanceSolver + Default>(
        &mut self,
        input: &InputState,
        dt: f32,
        sim: &mut Simulation<S>,
    ) -> (RenderList, Vec<LogicEvent>) {
        let mut events = Vec::new();

        let draw_list = painter::Painter::draw_scene(&self.view, &self.config, sim, &self.authoring, input);

        if self.config.run_simulation {
            sim.set_preferred_velocities();
            let step = (self.config.time_scale * dt).clamp(0.0, self.config.max_step);
            sim.step(step);
        }

        self.camera.handle(&mut self.view, &self.config, input);
        self.authoring
            .handle(&self.view, &mut self.config, input, sim, &mut events);

        (draw_list, events)
    }

    /// Commits the staging obstacle without adding a further vertex, e.g.
    /// from an explicit "Add Obstacle" confirmation in the host UI.
    pub fn commit_staging<S: AvoidanceSolver + Default>(
        &mut self,
        sim: &mut Simulation<S>,
    ) -> Vec<LogicEvent> {
        let mut events = Vec::new();
        self.authoring.commit(sim, &mut events);
        events
    }

    /// Resets the simulation to the current configuration, discarding any
    /// in-progress staging obstacle. Committed obstacles persist.
    pub fn reset<S: AvoidanceSolver + Default>(&mut self, sim: &mut Simulation<S>) {
        self.authoring.reset(&self.config, sim);
    }
}
