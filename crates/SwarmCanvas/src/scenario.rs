//! # Scenario Model
//!
//! Named deterministic initial-placement policies for agents and goals.
//! A scenario is a pure function from its parameters to a placement list;
//! re-running it with the same parameters yields bit-identical results.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::config::{ScenarioKind, SimConfig};

/// A single agent's starting position and goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Initial world-space position.
    pub start: Vec2,
    /// World-space goal.
    pub goal: Vec2,
}

/// A named initial configuration, carrying only the fields it needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scenario {
    /// `count` agents evenly spaced on a circle of `radius` about the origin,
    /// ordered by increasing angle starting at angle 0. Each goal is the
    /// antipode of that agent's own start, so every agent crosses the center.
    Circle { count: usize, radius: f32 },
    /// Exactly two agents facing each other across the origin. `spacing` is
    /// the agent radius; starts sit at `∓2·spacing`, goals at `±10·spacing`.
    Deadlock { spacing: f32 },
}

impl Scenario {
    /// Builds the scenario variant selected by the configuration, clamping
    /// degenerate slider values instead of failing.
    pub fn from_config(config: &SimConfig) -> Self {
        match config.scenario {
            ScenarioKind::Circle => Scenario::Circle {
                count: config.agent_count,
                radius: config.circle_radius.max(0.0),
            },
            ScenarioKind::Deadlock => Scenario::Deadlock {
                spacing: config.agents.radius.max(0.0),
            },
        }
    }

    /// Computes the placement list. Pure and deterministic.
    pub fn layout(&self) -> Vec<Placement> {
        match *self {
            Scenario::Circle { count, radius } => {
                if count == 0 {
                    return Vec::new();
                }
                let spacing = TAU / count as f32;
                (0..count)
                    .map(|i| {
                        let angle = i as f32 * spacing;
                        let start = radius * Vec2::new(angle.cos(), angle.sin());
                        Placement { start, goal: -start }
                    })
                    .collect()
            }
            Scenario::Deadlock { spacing } => vec![
                Placement {
                    start: Vec2::new(-2.0 * spacing, 0.0),
                    goal: Vec2::new(10.0 * spacing, 0.0),
                },
                Placement {
                    start: Vec2::new(2.0 * spacing, 0.0),
                    goal: Vec2::new(-10.0 * spacing, 0.0),
                },
            ],
        }
    }
}
