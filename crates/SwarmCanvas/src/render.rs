//! # Rendering System
//!
//! Instead of drawing directly, the stage outputs a display list of
//! `DrawCommand`s. The host application (macroquad, wgpu, a test harness)
//! is responsible for interpreting these commands and drawing pixels.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in **Screen Space** (pixels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A straight line segment.
    Line {
        /// Start point in screen pixels.
        start: Vec2,
        /// End point in screen pixels.
        end: Vec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// An axis-aligned rectangle.
    Rect {
        /// Top-left position in screen pixels.
        pos: Vec2,
        /// Size in screen pixels.
        size: Vec2,
        /// Color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Filled when true, a one-pixel outline otherwise.
        filled: bool,
    },
    /// A single point, for entities smaller than a pixel at the current zoom.
    Point {
        /// Position in screen pixels.
        pos: Vec2,
        /// Color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
