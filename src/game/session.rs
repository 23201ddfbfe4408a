use log::debug;
use rand::rngs::SmallRng;

use crate::config::{BALL_START_SPEED, BALL_START_X, GameConfig};
use crate::entities::{Ball, Spike};

use super::spikes::{check_collisions, emit_pattern_if_due};

#[derive(Clone, Debug)]
pub struct Session {
    pub ball: Ball,
    pub spikes: Vec<Spike>,
    pub score: u32,
    pub speed: f32,
    pub spike_timer: u32,
    pub difficulty_timer: u64,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ball: Ball::new(BALL_START_X, (config.screen_height / 2) as f32),
            spikes: Vec::new(),
            score: 0,
            speed: BALL_START_SPEED,
            spike_timer: 0,
            difficulty_timer: 0,
        }
    }

    /// Advances one frame of play. Returns true when the ball hit a spike.
    pub fn step(&mut self, config: &GameConfig, rng: &mut SmallRng) -> bool {
        self.ball.update(config.height());
        self.scroll_spikes();
        emit_pattern_if_due(self, config, rng);
        let collided = check_collisions(&self.ball, &self.spikes);
        if collided {
            debug!("collision at ball y {:.1}", self.ball.pos.y);
        }
        self.update_difficulty(config);
        collided
    }
}
