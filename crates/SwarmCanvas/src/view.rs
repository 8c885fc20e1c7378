//! # Viewport System
//!
//! This module handles the camera mathematics for the simulation stage.
//! It provides utilities to transform between World Space (simulation meters,
//! y-up, origin at the center of the stage) and Screen Space (window pixels,
//! y-down, origin at the top-left corner).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// Represents the current camera state: where we are looking (offset) and how close (scale).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Transform {
    /// The pan offset in screen pixels, applied after centering.
    pub offset: Vec2,
    /// Pixels per world meter. May be zero (everything collapses onto the
    /// viewport center), never negative.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            offset: Vec2::new(300.0, 0.0),
            scale: 1.5,
        }
    }
}

/// The View struct combines the Transform with the actual viewport size (window size).
/// It serves as the single source of truth for coordinate conversions.
pub struct View {
    /// The camera transform.
    pub transform: Transform,
    /// The size of the visible area in pixels.
    pub viewport_size: Vec2,
}

impl View {
    /// Creates a new View system.
    pub fn new(transform: Transform, viewport_size: Vec2) -> Self {
        Self {
            transform,
            viewport_size,
        }
    }

    /// Converts a point from **World Space** (meters, y-up) to **Screen Space** (pixels).
    ///
    /// Formula: `Screen = Center + Offset + (World.x * Scale, -World.y * Scale)`
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        Vec2::new(
            self.viewport_size.x * 0.5 + self.transform.offset.x + world_pos.x * self.transform.scale,
            self.viewport_size.y * 0.5 + self.transform.offset.y - world_pos.y * self.transform.scale,
        )
    }

    /// Converts a point from **Screen Space** (pixels) to **World Space** (meters, y-up).
    ///
    /// Exact inverse of [`View::world_to_screen`] while `scale > 0`. At zero
    /// scale every screen point maps to the world origin rather than dividing
    /// by zero.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        let unscaled = Vec2::new(
            screen_pos.x - self.viewport_size.x * 0.5 - self.transform.offset.x,
            -screen_pos.y + self.viewport_size.y * 0.5 + self.transform.offset.y,
        );
        if self.transform.scale > 0.0 {
            unscaled / self.transform.scale
        } else {
            Vec2::ZERO
        }
    }

    /// Maximum pan magnitude per axis for the current scenario extents.
    ///
    /// Half the viewport plus the scaled reach of the agent circle, so the
    /// stage can always be dragged fully off-center but not lost entirely.
    pub fn offset_limit(&self, config: &SimConfig) -> f32 {
        self.viewport_size.x.max(self.viewport_size.y) * 0.5
            + (config.circle_radius + config.agents.radius) * self.transform.scale
    }

    /// Clamps the pan offset to the valid range for the current extents.
    pub fn clamp_offset(&mut self, config: &SimConfig) {
        let limit = self.offset_limit(config);
        self.transform.offset = self
            .transform
            .offset
            .clamp(Vec2::splat(-limit), Vec2::splat(limit));
    }
}
