//! Headless collaborators
//!
//! Scripted input, a surface that records draw calls, and a clock that
//! reports a fixed step without sleeping. Used by the demo binary and
//! tests.

use std::collections::VecDeque;
use std::time::Duration;

use super::{FrameClock, InputFrame, InputService, RenderSurface};
use crate::assets::Rgba;
use crate::sim::{DirectionKeys, Rect, TickInput, VisualId};

/// Replays a fixed sequence of input frames, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `keys` for `frames` frames
    pub fn hold(mut self, keys: DirectionKeys, frames: u32) -> Self {
        for _ in 0..frames {
            self.frames.push_back(InputFrame {
                input: TickInput { keys, fire: false },
                quit: false,
            });
        }
        self
    }

    /// No input for `frames` frames
    pub fn idle(self, frames: u32) -> Self {
        self.hold(DirectionKeys::default(), frames)
    }

    /// A single frame with the fire key pressed
    pub fn fire(mut self) -> Self {
        self.frames.push_back(InputFrame {
            input: TickInput {
                keys: DirectionKeys::default(),
                fire: true,
            },
            quit: false,
        });
        self
    }

    /// Strafe back and forth under the enemy, firing between passes
    pub fn demo(passes: u32) -> Self {
        let left = DirectionKeys {
            left: true,
            ..Default::default()
        };
        let right = DirectionKeys {
            right: true,
            ..Default::default()
        };

        let mut script = Self::new().idle(40);
        for _ in 0..passes {
            script = script.hold(left, 45).fire().idle(20).hold(right, 45).fire().idle(20);
        }
        script
    }

    /// Frames left before the script asks to quit
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputService for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or(InputFrame {
            input: TickInput::default(),
            quit: true,
        })
    }
}

/// Records the draw calls of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pending: Vec<(VisualId, Rect)>,
    last_frame: Vec<(VisualId, Rect)>,
    clear_color: Option<Rgba>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blits of the most recently presented frame, in draw order
    pub fn last_frame(&self) -> &[(VisualId, Rect)] {
        &self.last_frame
    }

    pub fn clear_color(&self) -> Option<Rgba> {
        self.clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = Some(color);
        self.pending.clear();
    }

    fn blit(&mut self, visual: VisualId, rect: &Rect) {
        self.pending.push((visual, *rect));
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        log::trace!(
            "frame {} presented with {} blits",
            self.frames_presented,
            self.last_frame.len()
        );
    }
}

/// Reports a constant frame duration without waiting
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    step: Option<Duration>,
}

impl FixedClock {
    /// Always report `step`
    pub fn with_step(step: Duration) -> Self {
        Self { step: Some(step) }
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        self.step
            .unwrap_or_else(|| Duration::from_millis(1000 / target_fps.max(1) as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replays_then_quits() {
        let mut input = ScriptedInput::new()
            .hold(
                DirectionKeys {
                    up: true,
                    ..Default::default()
                },
                2,
            )
            .fire();
        assert_eq!(input.remaining(), 3);

        assert!(input.poll().input.keys.up);
        assert!(input.poll().input.keys.up);
        let frame = input.poll();
        assert!(frame.input.fire);
        assert!(!frame.quit);

        assert!(input.poll().quit);
        assert!(input.poll().quit);
    }

    #[test]
    fn test_surface_keeps_last_presented_frame() {
        let mut surface = RecordingSurface::new();
        surface.clear([0, 0, 0, 255]);
        surface.blit(VisualId(1), &Rect::new(0.0, 0.0, 1.0, 1.0));
        surface.blit(VisualId(2), &Rect::new(5.0, 0.0, 1.0, 1.0));
        assert!(surface.last_frame().is_empty());

        surface.present();
        assert_eq!(surface.frames_presented(), 1);
        assert_eq!(surface.last_frame().len(), 2);
        assert_eq!(surface.last_frame()[1].0, VisualId(2));

        surface.clear([0, 0, 0, 255]);
        surface.present();
        assert!(surface.last_frame().is_empty());
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock::default().tick(60), Duration::from_millis(16));
        let mut clock = FixedClock::with_step(Duration::from_millis(5));
        assert_eq!(clock.tick(60), Duration::from_millis(5));
    }
}
