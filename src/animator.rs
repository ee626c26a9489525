//! Spin animation frames.
//!
//! The animator is computation-only: it turns a start and target rotation
//! into a finite sequence of intermediate angles and never sleeps. Pacing the
//! frames (and abandoning the sequence on cancellation) is the presentation
//! adapter's job.

use crate::ease::Ease;

/// Evenly spaced rotation samples from `start` to `target` inclusive.
pub fn generate_frames(start: f64, target: f64, frame_count: usize) -> FrameSequence {
    FrameSequence::new(start, target, frame_count, Ease::Linear)
}

/// A lazy, finite, restartable sequence of rotation angles.
///
/// The sequence is a value: iterating it allocates nothing and can be done
/// any number of times with identical results. The final element is exactly
/// `target` — the landing angle is a hard guarantee, never approximate —
/// including the degenerate `frame_count <= 1` case, which yields `[target]`.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct FrameSequence {
    start: f64,
    target: f64,
    frame_count: usize,
    ease: Ease,
}

impl FrameSequence {
    pub fn new(start: f64, target: f64, frame_count: usize, ease: Ease) -> Self {
        Self {
            start,
            target,
            frame_count,
            ease,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn len(&self) -> usize {
        self.frame_count.max(1)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rotation at frame `index`; saturates at the target past the end.
    pub fn frame(&self, index: usize) -> f64 {
        let last = self.len() - 1;
        if index >= last {
            return self.target;
        }
        let t = index as f64 / last as f64;
        self.start + (self.target - self.start) * self.ease.apply(t)
    }

    pub fn iter(&self) -> Frames {
        Frames {
            seq: *self,
            next: 0,
        }
    }
}

impl IntoIterator for FrameSequence {
    type Item = f64;
    type IntoIter = Frames;

    fn into_iter(self) -> Frames {
        self.iter()
    }
}

impl IntoIterator for &FrameSequence {
    type Item = f64;
    type IntoIter = Frames;

    fn into_iter(self) -> Frames {
        self.iter()
    }
}

pub struct Frames {
    seq: FrameSequence,
    next: usize,
}

impl Iterator for Frames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.seq.len() {
            return None;
        }
        let angle = self.seq.frame(self.next);
        self.next += 1;
        Some(angle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.seq.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Frames {}
