//! Time management utilities

/// Frame timer driven by the window clock
///
/// Holds the previous frame timestamp. The delta feeds camera movement; light animation
/// uses its own policy and may ignore it.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_frame: f64,
    frame_count: u64,
}

impl FrameTimer {
    /// Create a timer whose first delta is measured from `now`
    ///
    /// Seed with the window clock right before the loop so time spent loading assets
    /// does not show up as one long first frame.
    pub fn starting_at(now: f64) -> Self {
        Self {
            last_frame: now,
            frame_count: 0,
        }
    }

    /// Advance the timer to `now` (seconds on the window clock) and return the delta
    ///
    /// Should be called exactly once per loop iteration.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now: f64) -> f32 {
        let delta_time = (now - self.last_frame) as f32;
        self.last_frame = now;
        self.frame_count += 1;
        delta_time
    }

    /// Timestamp of the most recent tick
    pub fn last_frame(&self) -> f64 {
        self.last_frame
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
