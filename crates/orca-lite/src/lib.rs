//! # orca-lite
//!
//! A small local collision-avoidance backend implementing the
//! [`AvoidanceSolver`] capability consumed by `swarm_canvas`.
//!
//! This is a velocity-obstacle *approximation*, not exact physics: each step
//! an agent takes its preferred velocity clamped to its max speed, bends it
//! away from the nearest neighbors within its neighbor distance (split
//! reciprocally, half the correction per side) and away from processed
//! obstacle edges, then integrates. The avoidance term grows without bound as
//! the gap to a neighbor or edge closes, so near contact it always dominates
//! goal seeking: two head-on agents stall at a standoff distance rather than
//! driving through each other. Deterministic and single-threaded.

use glam::Vec2;
use swarm_canvas::config::AgentDefaults;
use swarm_canvas::solver::AvoidanceSolver;

/// Floor for the gap to contact used in the avoidance denominator; keeps the
/// push finite when bodies already overlap.
const MIN_GAP: f32 = 1e-3;

#[derive(Clone, Copy, Debug)]
struct Agent {
    position: Vec2,
    pref_velocity: Vec2,
    params: AgentDefaults,
}

/// The default solver backend.
#[derive(Debug)]
pub struct OrcaLite {
    defaults: AgentDefaults,
    agents: Vec<Agent>,
    obstacles: Vec<Vec<Vec2>>,
    /// Edges of the processed obstacle polygons, including the closing edge.
    edges: Vec<(Vec2, Vec2)>,
    time_step: f32,
    velocities: Vec<Vec2>,
}

impl Default for OrcaLite {
    fn default() -> Self {
        Self {
            defaults: AgentDefaults::default(),
            agents: Vec::new(),
            obstacles: Vec::new(),
            edges: Vec::new(),
            time_step: 0.0,
            velocities: Vec::new(),
        }
    }
}

impl OrcaLite {
    /// Velocity for agent `i`, computed against current positions only so
    /// the step is order-independent.
    fn relaxed_velocity(&self, i: usize) -> Vec2 {
        let agent = &self.agents[i];
        let params = &agent.params;
        let max_speed = params.max_speed.max(0.0);
        let mut velocity = agent.pref_velocity.clamp_length_max(max_speed);

        // Nearest neighbors within range, capped at max_neighbors.
        let mut neighbors: Vec<(f32, usize)> = self
            .agents
            .iter()
            .enumerate()
            .filter(|&(j, other)| {
                j != i && other.position.distance_squared(agent.position) < params.neighbor_dist * params.neighbor_dist
            })
            .map(|(j, other)| (other.position.distance_squared(agent.position), j))
            .collect();
        neighbors.sort_by(|a, b| a.0.total_cmp(&b.0));
        neighbors.truncate(params.max_neighbors);

        for (dist_sq, j) in neighbors {
            let other = &self.agents[j];
            let dist = dist_sq.sqrt();
            let combined = params.radius + other.params.radius;
            let reach = combined + max_speed * params.time_horizon.max(0.0) * 0.1;
            if dist < reach && dist > f32::EPSILON {
                let away = (agent.position - other.position) / dist;
                // Push magnitude diverges as the gap to contact closes, so
                // avoidance outweighs any clamped preferred velocity before
                // the bodies can touch. Reciprocity: the other agent handles
                // the other half.
                let gap = (dist - combined).max(MIN_GAP);
                velocity += away * max_speed * ((reach - dist) / gap) * 0.5;
            }
        }

        for &(start, end) in &self.edges {
            let closest = closest_point_on_segment(start, end, agent.position);
            let dist = agent.position.distance(closest);
            let reach = params.radius + max_speed * params.time_horizon_obstacle.max(0.0) * 0.1;
            if dist < reach && dist > f32::EPSILON {
                let away = (agent.position - closest) / dist;
                // Obstacles do not reciprocate; full correction here.
                let gap = (dist - params.radius).max(MIN_GAP);
                velocity += away * max_speed * ((reach - dist) / gap);
            }
        }

        velocity.clamp_length_max(max_speed)
    }
}

impl AvoidanceSolver for OrcaLite {
    fn set_agent_defaults(&mut self, defaults: &AgentDefaults) {
        self.defaults = *defaults;
    }

    fn add_agent(&mut self, position: Vec2) -> usize {
        self.agents.push(Agent {
            position,
            pref_velocity: Vec2::ZERO,
            params: self.defaults,
        });
        self.agents.len() - 1
    }

    fn agent_position(&self, index: usize) -> Vec2 {
        self.agents[index].position
    }

    fn agent_count(&self) -> usize {
        self.agents.len()
    }

    fn set_preferred_velocity(&mut self, index: usize, velocity: Vec2) {
        self.agents[index].pref_velocity = velocity;
    }

    fn add_obstacle(&mut self, vertices: &[Vec2]) {
        self.obstacles.push(vertices.to_vec());
    }

    fn process_obstacles(&mut self) {
        self.edges.clear();
        for polygon in &self.obstacles {
            for (k, &start) in polygon.iter().enumerate() {
                let end = polygon[(k + 1) % polygon.len()];
                self.edges.push((start, end));
            }
        }
    }

    fn set_time_step(&mut self, dt: f32) {
        self.time_step = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    }

    fn step(&mut self) {
        self.velocities.clear();
        for i in 0..self.agents.len() {
            let v = self.relaxed_velocity(i);
            self.velocities.push(v);
        }
        let dt = self.time_step;
        for (agent, &velocity) in self.agents.iter_mut().zip(&self.velocities) {
            agent.position += velocity * dt;
        }
    }
}

fn closest_point_on_segment(start: Vec2, end: Vec2, point: Vec2) -> Vec2 {
    let segment = end - start;
    let len_sq = segment.length_squared();
    if len_sq <= f32::EPSILON {
        return start;
    }
    let t = ((point - start).dot(segment) / len_sq).clamp(0.0, 1.0);
    start + segment * t
}
