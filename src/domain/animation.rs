// Frame sequences and the per-entity animation timer.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::AssetError;

/// Pixel region on a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Handle to one drawable frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub sheet: Arc<str>,
    pub region: Region,
}

/// Non-empty, shareable list of frames.
#[derive(Debug, Clone)]
pub struct Sequence(Arc<[Frame]>);

impl Sequence {
    pub fn new(name: &'static str, frames: Vec<Frame>) -> Result<Self, AssetError> {
        if frames.is_empty() {
            return Err(AssetError::EmptySequence { name });
        }
        Ok(Self(frames.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDelay {
    Millis(u64),
    /// Freeze on the current frame; never reports a completed play-through.
    Hold,
}

/// Advances a sequence by a fixed tick length per `update`.
#[derive(Debug, Clone)]
pub struct Animation {
    sequence: Sequence,
    current: usize,
    delay: FrameDelay,
    elapsed: Duration,
    tick: Duration,
    played_once: bool,
}

impl Animation {
    pub fn new(sequence: Sequence, delay: FrameDelay, tick: Duration) -> Self {
        Self {
            sequence,
            current: 0,
            delay,
            elapsed: Duration::ZERO,
            tick,
            played_once: false,
        }
    }

    /// Restarts from the first frame and clears the played-once flag.
    pub fn set_frames(&mut self, sequence: Sequence) {
        self.sequence = sequence;
        self.current = 0;
        self.elapsed = Duration::ZERO;
        self.played_once = false;
    }

    pub fn set_delay(&mut self, delay: FrameDelay) {
        self.delay = delay;
    }

    pub fn reset(&mut self, sequence: Sequence, delay: FrameDelay) {
        self.set_frames(sequence);
        self.set_delay(delay);
    }

    pub fn update(&mut self) {
        let delay = match self.delay {
            FrameDelay::Hold => return,
            FrameDelay::Millis(ms) => Duration::from_millis(ms),
        };

        self.elapsed += self.tick;
        if self.elapsed > delay {
            self.current += 1;
            self.elapsed = Duration::ZERO;
        }
        if self.current == self.sequence.len() {
            self.current = 0;
            self.played_once = true;
        }
    }

    pub fn has_played_once(&self) -> bool {
        self.played_once
    }

    pub fn current_frame(&self) -> &Frame {
        &self.sequence.frames()[self.current]
    }

    #[cfg(test)]
    pub(crate) fn frame_index(&self) -> usize {
        self.current
    }
}
