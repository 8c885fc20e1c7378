//! # Simulation State
//!
//! Owns the solver instance, the goal list, the committed obstacle set, and
//! the staging buffer for the obstacle being authored. All operations are
//! infallible under valid input; degenerate numbers are clamped where used.

use glam::Vec2;

use crate::config::SimConfig;
use crate::scenario::Scenario;
use crate::solver::AvoidanceSolver;

/// The simulation state, generic over the avoidance-solver backend.
///
/// The solver is exclusively owned here and replaced (never mutated in place)
/// on every [`Simulation::initialize`]. Committed obstacle polygons outlive
/// the solver instance: re-initialization rebuilds the solver but re-adds the
/// user-authored obstacles into it.
pub struct Simulation<S> {
    solver: S,
    /// One goal per agent index, insertion order = agent index order.
    pub goals: Vec<Vec2>,
    /// The obstacle polygon under interactive construction. May be empty, a
    /// single point, or a partial polygon; not yet known to the solver.
    pub staging: Vec<Vec2>,
    /// Committed obstacle polygons, append-only during a session.
    pub obstacles: Vec<Vec<Vec2>>,
}

impl<S: AvoidanceSolver + Default> Simulation<S> {
    /// Creates the simulation and runs the first initialization.
    pub fn new(config: &SimConfig) -> Self {
        let mut sim = Self {
            solver: S::default(),
            goals: Vec::new(),
            staging: Vec::new(),
            obstacles: Vec::new(),
        };
        sim.initialize(config);
        sim
    }

    /// Discards the previous solver and goal state and rebuilds both from the
    /// configuration: fresh solver, agent defaults, previously committed
    /// obstacles re-added and processed, then scenario placements.
    ///
    /// The staging buffer is a separate concern and is left untouched; the
    /// reset gesture clears it before calling this.
    pub fn initialize(&mut self, config: &SimConfig) {
        self.solver = S::default();
        self.solver.set_agent_defaults(&config.agents);

        for polygon in &self.obstacles {
            self.solver.add_obstacle(polygon);
        }
        if !self.obstacles.is_empty() {
            self.solver.process_obstacles();
        }

        self.goals.clear();
        for placement in Scenario::from_config(config).layout() {
            let index = self.solver.add_agent(placement.start);
            debug_assert_eq!(index, self.goals.len());
            self.goals.push(placement.goal);
        }

        tracing::info!(
            agents = self.goals.len(),
            obstacles = self.obstacles.len(),
            scenario = config.scenario.label(),
            "simulation initialized"
        );
    }

    /// Points every agent at its goal for the upcoming step.
    ///
    /// The preferred velocity is the raw goal vector, unnormalized: farther
    /// agents request proportionally larger speed, subject to the solver's
    /// own max-speed clamp. Call this before every [`Simulation::step`] while
    /// running; skipping it leaves agents coasting on the previous frame's
    /// preferred velocities.
    pub fn set_preferred_velocities(&mut self) {
        for (i, &goal) in self.goals.iter().enumerate() {
            let velocity = goal - self.solver.agent_position(i);
            self.solver.set_preferred_velocity(i, velocity);
        }
    }

    /// Advances the solver by exactly one step of `dt` seconds.
    ///
    /// Non-finite or negative `dt` is sanitized to zero; clamping runaway
    /// wall-clock deltas to something sane is the caller's job.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.solver.set_time_step(dt);
        self.solver.step();
    }

    /// Commits the staging buffer as a new obstacle polygon.
    ///
    /// With 3 or more vertices the polygon is added to the live solver,
    /// obstacles are reprocessed, and it is appended to the committed set.
    /// With fewer it is silently discarded. Either way the staging buffer
    /// ends empty. Returns whether a polygon was committed.
    pub fn commit_obstacle(&mut self) -> bool {
        let committed = self.staging.len() > 2;
        if committed {
            self.solver.add_obstacle(&self.staging);
            self.solver.process_obstacles();
            self.obstacles.push(std::mem::take(&mut self.staging));
            tracing::debug!(
                vertices = self.obstacles.last().map_or(0, Vec::len),
                total = self.obstacles.len(),
                "obstacle committed"
            );
        } else {
            self.staging.clear();
        }
        committed
    }

    /// Read access to the solver, for painting agent positions.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Number of agents, delegated to the solver.
    pub fn agent_count(&self) -> usize {
        self.solver.agent_count()
    }

    /// Position of agent `index`, delegated to the solver.
    pub fn agent_position(&self, index: usize) -> Vec2 {
        self.solver.agent_position(index)
    }
}
