//! # Solver Boundary
//!
//! The collision-avoidance solver is an external capability, consumed behind
//! this trait and never reimplemented here. The stage writes agent defaults,
//! agents, obstacles, and per-agent preferred velocities into it, asks it to
//! advance, and reads positions back out.

use glam::Vec2;

use crate::config::AgentDefaults;

/// An opaque local collision-avoidance solver.
///
/// Lifecycle contract: the solver instance is exclusively owned by
/// [`crate::simulation::Simulation`] and replaced wholesale on every
/// initialization, never patched in place. After any [`Self::add_obstacle`],
/// [`Self::process_obstacles`] must be called before the next
/// [`Self::step`] for the new topology to take effect.
pub trait AvoidanceSolver {
    /// Sets the default parameters applied to agents added afterwards.
    fn set_agent_defaults(&mut self, defaults: &AgentDefaults);

    /// Adds an agent at `position`, returning its stable index.
    ///
    /// Indices are assigned in insertion order, `0..agent_count`.
    fn add_agent(&mut self, position: Vec2) -> usize;

    /// Current position of agent `index`.
    fn agent_position(&self, index: usize) -> Vec2;

    /// Number of agents currently in the solver.
    fn agent_count(&self) -> usize;

    /// Sets the preferred velocity of agent `index` for the next step.
    ///
    /// Not normalized; the solver applies its own max-speed clamp.
    fn set_preferred_velocity(&mut self, index: usize, velocity: Vec2);

    /// Adds a closed obstacle polygon (edges implied between consecutive
    /// vertices, wrapping last to first).
    fn add_obstacle(&mut self, vertices: &[Vec2]);

    /// (Re)processes all added obstacles.
    fn process_obstacles(&mut self);

    /// Sets the global time step for the next [`Self::step`].
    fn set_time_step(&mut self, dt: f32);

    /// Advances all agents by one time step using current preferred
    /// velocities and processed obstacles.
    fn step(&mut self);
}
