use std::time::{Duration, Instant};

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_DURATION_MS: u64 = 80;

/// Braille spinner shown next to the processing message.
#[derive(Debug, Clone)]
pub struct Spinner {
    frame_index: usize,
    last_frame_time: Instant,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frame_index: 0,
            last_frame_time: Instant::now(),
        }
    }

    /// Advance if the frame duration has elapsed. Returns true on change.
    pub fn tick(&mut self) -> bool {
        if self.last_frame_time.elapsed() >= Duration::from_millis(FRAME_DURATION_MS) {
            self.frame_index = (self.frame_index + 1) % FRAMES.len();
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.frame_index]
    }

    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.last_frame_time = Instant::now();
    }
}
