mod collisions;
mod patterns;

use crate::config::SPIKE_SCORE;

use super::Session;

pub(super) use collisions::check_collisions;
pub(super) use patterns::emit_pattern_if_due;

impl Session {
    pub(super) fn scroll_spikes(&mut self) -> usize {
        let speed = self.speed;
        let before = self.spikes.len();
        self.spikes.retain_mut(|spike| {
            spike.update(speed);
            !spike.is_off_screen()
        });
        let removed = before - self.spikes.len();
        self.score += removed as u32 * SPIKE_SCORE;
        removed
    }
}
