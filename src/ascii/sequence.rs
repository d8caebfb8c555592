/// Playback rate of the art animation.
pub const FRAMES_PER_SECOND: f64 = 12.0;
/// Text shown when no frames are available.
pub const MISSING_FRAMES_TEXT: &str = "ANIMATION DATA MISSING";

/// Forward frames followed by the interior frames in reverse, so looping the
/// result never shows the first or last frame twice in a row.
pub fn ping_pong<T: Clone>(frames: &[T]) -> Vec<T> {
    if frames.len() <= 2 {
        return frames.to_vec();
    }
    let mut out = Vec::with_capacity(frames.len() * 2 - 2);
    out.extend_from_slice(frames);
    out.extend(frames[1..frames.len() - 1].iter().rev().cloned());
    out
}

/// Timestamp-driven player for a looping ping-pong sequence.
#[derive(Clone, Debug)]
pub struct FramePlayer {
    sequence: Vec<String>,
    index: usize,
    last_frame_ms: Option<f64>,
    frame_ms: f64,
    shown: String,
}

impl FramePlayer {
    /// Build a player over `frames`, shown in ping-pong order.
    pub fn new(frames: &[String]) -> Self {
        let sequence = ping_pong(frames);
        if sequence.is_empty() {
            tracing::warn!("no animation frames provided");
        }
        let shown = sequence
            .first()
            .cloned()
            .unwrap_or_else(|| MISSING_FRAMES_TEXT.to_string());
        Self {
            sequence,
            index: 0,
            last_frame_ms: None,
            frame_ms: 1000.0 / FRAMES_PER_SECOND,
            shown,
        }
    }

    /// Text currently on screen.
    pub fn current(&self) -> &str {
        &self.shown
    }

    /// Index into the ping-pong sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length of the ping-pong sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True when there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Advance the clock to `now_ms`.
    ///
    /// Returns the new text when the frame advanced and its content differs from
    /// what is on screen, so the host only touches the display when needed.
    pub fn tick(&mut self, now_ms: f64) -> Option<&str> {
        if self.sequence.is_empty() {
            return None;
        }
        let last = *self.last_frame_ms.get_or_insert(now_ms);
        if now_ms - last <= self.frame_ms {
            return None;
        }

        self.index = (self.index + 1) % self.sequence.len();
        self.last_frame_ms = Some(now_ms);
        let next = &self.sequence[self.index];
        if *next == self.shown {
            return None;
        }
        self.shown.clone_from(next);
        Some(&self.shown)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ascii/sequence.rs"]
mod tests;
