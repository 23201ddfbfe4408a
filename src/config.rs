pub const FPS: u32 = 60;

pub const GRAVITY: f32 = 1.6;
pub const BALL_RADIUS: f32 = 90.0;
pub const BALL_START_X: f32 = 150.0;
pub const BALL_START_SPEED: f32 = 6.0;

pub const SPIKE_WIDTH: f32 = 120.0;
pub const SPIKE_HEIGHT: f32 = 180.0;
/// Slack added to the ball radius when measuring distance to a spike tip.
pub const TIP_FORGIVENESS: f32 = 15.0;

pub const SPIKE_SCORE: u32 = 10;
pub const SPAWN_THRESHOLD_MIN: u32 = 90;
pub const SPAWN_THRESHOLD_MAX: u32 = 150;
pub const SPAWN_LEAD: f32 = 100.0;
pub const PATTERN_GAP_BASE: f32 = 300.0;
pub const PATTERN_GAP_JITTER: u32 = 150;
pub const SAFE_PASSAGE_SPACING: f32 = 200.0;

pub const DIFFICULTY_INTERVAL_SECS: u64 = 15;
pub const SPEED_RAMP: f32 = 1.3;

pub const MUSIC_VOLUME: f32 = 0.7;
pub const MUSIC_CANDIDATES: [&str; 3] = ["music.mp3", "music.wav", "music.ogg"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub fps: u32,
}

impl GameConfig {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self {
            screen_width,
            screen_height,
            fps: FPS,
        }
    }

    pub fn width(&self) -> f32 {
        self.screen_width as f32
    }

    pub fn height(&self) -> f32 {
        self.screen_height as f32
    }

    pub fn difficulty_interval(&self) -> u64 {
        self.fps as u64 * DIFFICULTY_INTERVAL_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_interval_is_fifteen_seconds_of_frames() {
        let config = GameConfig::new(1920, 1080);
        assert_eq!(config.difficulty_interval(), 900);
    }
}
