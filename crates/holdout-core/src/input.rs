//! Continuous per-frame input intent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Movement and look intent sampled once per rendered frame.
///
/// Discrete requests (reload, pause, weapon switch) go through
/// `PlayerCommand` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Strafe on x (+right), forward on y (+forward). Normalized by the
    /// player controller when longer than 1.
    pub movement: Vec2,
    /// Yaw (x) and pitch (y) change this frame, radians.
    pub look_delta: Vec2,
    pub sprint: bool,
    /// Trigger held.
    pub fire: bool,
}

impl FrameInput {
    /// No movement, no look, trigger released.
    pub fn idle() -> Self {
        Self::default()
    }
}
