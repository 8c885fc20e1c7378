//! # Camera Controller
//!
//! Interactive pan/zoom over the viewport transform. Scroll multiplies the
//! scale, drag pans 1:1 in screen pixels regardless of scale, and both are
//! suppressed while the host UI captures the pointer.

use glam::Vec2;

use crate::config::SimConfig;
use crate::input::InputState;
use crate::view::View;

/// Anchor recorded when a pan drag starts.
#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    mouse: Vec2,
    offset: Vec2,
}

/// Transient camera interaction state.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraController {
    drag: Option<DragAnchor>,
}

impl CameraController {
    /// Processes one frame of camera input against the view.
    ///
    /// The scale is clamped to be non-negative; zero is allowed and
    /// degenerates rendering to a point without erroring. The offset is
    /// clamped to the scenario-dependent limit after every update.
    pub fn handle(&mut self, view: &mut View, config: &SimConfig, input: &InputState) {
        if input.ui_captured_mouse {
            // A drag that wanders onto a widget is cancelled, not paused.
            // Extents may still change under the sliders, so keep clamping.
            self.drag = None;
            view.clamp_offset(config);
            return;
        }

        if input.scroll_delta != 0.0 {
            let factor = 1.0 + input.scroll_delta * config.zoom_speed;
            view.transform.scale = (view.transform.scale * factor).max(0.0);
        }

        if input.mouse_buttons.any() {
            match self.drag {
                None => {
                    self.drag = Some(DragAnchor {
                        mouse: input.mouse_pos,
                        offset: view.transform.offset,
                    });
                }
                Some(anchor) => {
                    view.transform.offset = anchor.offset + (input.mouse_pos - anchor.mouse);
                }
            }
        } else {
            self.drag = None;
        }

        view.clamp_offset(config);
    }
}
