use glam::Vec2;

use crate::authoring::{Authoring, AuthoringMode};
use crate::config::SimConfig;
use crate::input::InputState;
use crate::render::{DrawCommand, RenderList};
use crate::simulation::Simulation;
use crate::solver::AvoidanceSolver;
use crate::view::View;

/// High-level renderer for the simulation stage.
///
/// The `Painter` converts the abstract scene (agents, goals, obstacles,
/// staging preview) into concrete drawing commands. It handles:
/// - Goal lines (optional)
/// - Agent squares, degraded to points below a pixel
/// - Committed obstacle outlines
/// - The staging polygon and its live preview edges
pub struct Painter;

impl Painter {
    /// Generates the draw commands for the current scene state.
    ///
    /// Emitted in back-to-front order: goals, agents, obstacles, staging.
    pub fn draw_scene<S: AvoidanceSolver + Default>(
        view: &View,
        config: &SimConfig,
        sim: &Simulation<S>,
        authoring: &Authoring,
        input: &InputState,
    ) -> RenderList {
        let mut draw_list = Vec::new();
        let style = &config.style;
        let scale = view.transform.scale;

        if config.show_goals {
            for i in 0..sim.agent_count() {
                draw_list.push(DrawCommand::Line {
                    start: view.world_to_screen(sim.agent_position(i)),
                    end: view.world_to_screen(sim.goals[i]),
                    color: style.goal_color,
                    width: 1.0,
                });
            }
        }

        let side = config.agents.radius * 2.0 * scale;
        let half = Vec2::splat(config.agents.radius * scale);
        for i in 0..sim.agent_count() {
            let center = view.world_to_screen(sim.agent_position(i));
            if side > 1.0 {
                draw_list.push(DrawCommand::Rect {
                    pos: center - half,
                    size: Vec2::splat(side),
                    color: style.agent_color,
                    filled: false,
                });
            } else {
                draw_list.push(DrawCommand::Point {
                    pos: center,
                    color: style.agent_color,
                });
            }
        }

        for obstacle in &sim.obstacles {
            if obstacle.len() < 3 {
                continue;
            }
            let mut previous = view.world_to_screen(obstacle[obstacle.len() - 1]);
            for &vertex in obstacle {
                let point = view.world_to_screen(vertex);
                draw_list.push(DrawCommand::Line {
                    start: previous,
                    end: point,
                    color: style.obstacle_color,
                    width: 1.0,
                });
                previous = point;
            }
        }

        Self::draw_staging(view, config, sim, authoring, input, &mut draw_list);

        draw_list
    }

    /// Staging vertices, their polyline, and the preview edges that show the
    /// polygon which would result from committing now.
    fn draw_staging<S: AvoidanceSolver + Default>(
        view: &View,
        config: &SimConfig,
        sim: &Simulation<S>,
        authoring: &Authoring,
        input: &InputState,
        draw_list: &mut RenderList,
    ) {
        let style = &config.style;
        let staging = &sim.staging;

        let mut previous = None;
        for &vertex in staging {
            let point = view.world_to_screen(vertex);
            draw_list.push(DrawCommand::Point {
                pos: point,
                color: style.staging_color,
            });
            if let Some(prev) = previous {
                draw_list.push(DrawCommand::Line {
                    start: prev,
                    end: point,
                    color: style.staging_color,
                    width: 1.0,
                });
            }
            previous = Some(point);
        }

        if authoring.mode != AuthoringMode::Drawing {
            return;
        }

        if input.ui_captured_mouse {
            // Pointer is on a widget: show the static closing edge instead of
            // chasing a cursor that is no longer over the stage.
            if staging.len() > 2 {
                draw_list.push(DrawCommand::Line {
                    start: view.world_to_screen(staging[0]),
                    end: view.world_to_screen(staging[staging.len() - 1]),
                    color: style.staging_color,
                    width: 1.0,
                });
            }
        } else {
            if let Some(&last) = staging.last() {
                draw_list.push(DrawCommand::Line {
                    start: view.world_to_screen(last),
                    end: input.mouse_pos,
                    color: style.staging_color,
                    width: 1.0,
                });
            }
            if staging.len() > 2 {
                draw_list.push(DrawCommand::Line {
                    start: view.world_to_screen(staging[0]),
                    end: input.mouse_pos,
                    color: style.staging_color,
                    width: 1.0,
                });
            }
        }
    }
}
