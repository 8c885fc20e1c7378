use glam::Vec2;
use swarm_canvas::config::AgentDefaults;
use swarm_canvas::solver::AvoidanceSolver;

/// A scripted solver double: agents move straight along their preferred
/// velocity, and every call is recorded so tests can assert on the protocol
/// the stage drives against the boundary.
#[derive(Default)]
pub struct ScriptedSolver {
    pub defaults: Option<AgentDefaults>,
    pub positions: Vec<Vec2>,
    pub preferred: Vec<Vec2>,
    pub obstacles: Vec<Vec<Vec2>>,
    pub process_calls: usize,
    pub time_step: f32,
    pub steps: usize,
}

impl AvoidanceSolver for ScriptedSolver {
    fn set_agent_defaults(&mut self, defaults: &AgentDefaults) {
        self.defaults = Some(*defaults);
    }

    fn add_agent(&mut self, position: Vec2) -> usize {
        self.positions.push(position);
        self.preferred.push(Vec2::ZERO);
        self.positions.len() - 1
    }

    fn agent_position(&self, index: usize) -> Vec2 {
        self.positions[index]
    }

    fn agent_count(&self) -> usize {
        self.positions.len()
    }

    fn set_preferred_velocity(&mut self, index: usize, velocity: Vec2) {
        self.preferred[index] = velocity;
    }

    fn add_obstacle(&mut self, vertices: &[Vec2]) {
        self.obstacles.push(vertices.to_vec());
    }

    fn process_obstacles(&mut self) {
        self.process_calls += 1;
    }

    fn set_time_step(&mut self, dt: f32) {
        self.time_step = dt;
    }

    fn step(&mut self) {
        for (position, preferred) in self.positions.iter_mut().zip(&self.preferred) {
            *position += *preferred * self.time_step;
        }
        self.steps += 1;
    }
}
