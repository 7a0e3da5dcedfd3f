/*
 * Debug Information Module
 *
 * Per-frame metrics shown by the debug overlay.
 */

use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub boid_count: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            boid_count: 0,
        }
    }
}
