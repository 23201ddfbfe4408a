use log::info;

use crate::config::{GameConfig, SPEED_RAMP};

use super::Session;

impl Session {
    // No ceiling.
    pub(super) fn update_difficulty(&mut self, config: &GameConfig) -> bool {
        self.difficulty_timer += 1;
        if self.difficulty_timer % config.difficulty_interval() != 0 {
            return false;
        }
        self.speed *= SPEED_RAMP;
        info!("speed up to {:.1}", self.speed);
        true
    }
}
