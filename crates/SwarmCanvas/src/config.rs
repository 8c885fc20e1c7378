//! # Configuration
//!
//! This module defines the configuration value objects for the stage.
//!
//! `SimConfig` is the single source of truth for (re-)initialization: agent
//! placement is always derived from it, never from the running simulation.

use serde::{Deserialize, Serialize};

/// Which named scenario the next initialization builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Agents on a circle, each walking to its antipode.
    Circle,
    /// Two agents head-on, a minimal conflict.
    Deadlock,
}

impl ScenarioKind {
    /// Human-readable label for UI lists.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Circle => "Circle",
            ScenarioKind::Deadlock => "Deadlock",
        }
    }
}

/// Default parameters applied to every agent added to the solver.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AgentDefaults {
    /// Maximum distance (m) at which other agents are considered.
    pub neighbor_dist: f32,
    /// Maximum number of neighbors taken into account.
    pub max_neighbors: usize,
    /// Time horizon (s) for avoidance of other agents.
    pub time_horizon: f32,
    /// Time horizon (s) for avoidance of obstacles.
    pub time_horizon_obstacle: f32,
    /// Agent radius (m).
    pub radius: f32,
    /// Maximum speed (m/s).
    pub max_speed: f32,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            neighbor_dist: 15.0,
            max_neighbors: 10,
            time_horizon: 10.0,
            time_horizon_obstacle: 10.0,
            radius: 1.5,
            max_speed: 10.0,
        }
    }
}

/// Configuration parameters for the stage.
///
/// Everything a user can tune live from the controls panel lives here, plus
/// the interaction-feel constants the host usually leaves at their defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Active scenario selector.
    pub scenario: ScenarioKind,
    /// Whether the simulation advances each frame.
    pub run_simulation: bool,
    /// Whether goal lines are drawn.
    pub show_goals: bool,
    /// Multiplier applied to wall-clock dt before stepping the solver.
    pub time_scale: f32,
    /// Number of agents for the circle scenario.
    pub agent_count: usize,
    /// Radius (m) of the circle scenario.
    pub circle_radius: f32,
    /// Defaults for agents added on initialization.
    pub agents: AgentDefaults,
    /// Multiplier for zoom speed per scroll click. Default: 0.01.
    pub zoom_speed: f32,
    /// Max time in seconds between two presses to register a double-click.
    pub double_click_time: f32,
    /// Max pointer travel in pixels between two presses of a double-click.
    pub double_click_radius: f32,
    /// Upper bound on a single scaled time step. Guards against runaway dt
    /// after a stall (debugger pause, window drag).
    pub max_step: f32,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: StageStyle,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scenario: ScenarioKind::Circle,
            run_simulation: false,
            show_goals: false,
            time_scale: 10.0,
            agent_count: 250,
            circle_radius: 200.0,
            agents: AgentDefaults::default(),
            zoom_speed: 0.01,
            double_click_time: 0.3,
            double_click_radius: 6.0,
            max_step: 0.5,
            style: StageStyle::default(),
        }
    }
}

/// Visual styling configuration for the stage.
///
/// Colors are RGBA in `glam::Vec4`, 0.0 - 1.0 per channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageStyle {
    /// Background color of the stage.
    pub background_color: glam::Vec4,
    /// Color of agent squares.
    pub agent_color: glam::Vec4,
    /// Color of agent-to-goal lines.
    pub goal_color: glam::Vec4,
    /// Color of committed obstacle outlines.
    pub obstacle_color: glam::Vec4,
    /// Color of the staging polygon and its preview edges.
    pub staging_color: glam::Vec4,
}

impl Default for StageStyle {
    fn default() -> Self {
        Self {
            background_color: glam::Vec4::new(0.0, 0.0, 0.0, 1.0),
            agent_color: glam::Vec4::new(1.0, 1.0, 1.0, 1.0),
            goal_color: glam::Vec4::new(0.25, 0.25, 0.25, 1.0),
            obstacle_color: glam::Vec4::new(0.5, 0.5, 0.5, 1.0),
            staging_color: glam::Vec4::new(0.5, 0.5, 0.5, 1.0),
        }
    }
}
