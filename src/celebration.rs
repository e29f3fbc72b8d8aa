/// Confetti burst shown once per completed task.
///
/// Driven by the event loop tick: `play` arms it for a number of ticks and
/// each `tick` advances the frame until it runs out.
#[derive(Debug, Clone, Default)]
pub struct Celebration {
    remaining_ticks: u32,
    frame: u32,
}

impl Celebration {
    /// Start (or restart) the animation
    pub fn play(&mut self, duration_ticks: u32) {
        self.remaining_ticks = duration_ticks.max(1);
        self.frame = 0;
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        if self.remaining_ticks > 0 {
            self.remaining_ticks -= 1;
            self.frame = self.frame.wrapping_add(1);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.remaining_ticks > 0
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }
}
