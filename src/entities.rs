use raylib::prelude::{Rectangle, Vector2};

use crate::config::{BALL_RADIUS, GRAVITY, SPIKE_HEIGHT, SPIKE_WIDTH};
use crate::math::{rect, vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpikeOrientation {
    Up,
    Down,
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub pos: Vector2,
    pub vel_y: f32,
    pub gravity_up: bool,
    pub radius: f32,
    pub can_switch_gravity: bool,
}

impl Ball {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: vec2(x, y),
            vel_y: 0.0,
            gravity_up: false,
            radius: BALL_RADIUS,
            can_switch_gravity: false,
        }
    }

    pub fn update(&mut self, screen_height: f32) {
        if self.gravity_up {
            self.vel_y -= GRAVITY;
        } else {
            self.vel_y += GRAVITY;
        }
        self.pos.y += self.vel_y;

        let mut grounded = false;
        if self.pos.y < self.radius {
            self.pos.y = self.radius;
            self.vel_y = 0.0;
            grounded = true;
        } else if self.pos.y > screen_height - self.radius {
            self.pos.y = screen_height - self.radius;
            self.vel_y = 0.0;
            grounded = true;
        }
        self.can_switch_gravity = grounded;
    }

    /// Flips gravity if the ball is resting on a boundary. Returns whether it did.
    pub fn switch_gravity(&mut self) -> bool {
        if !self.can_switch_gravity {
            return false;
        }
        self.gravity_up = !self.gravity_up;
        self.vel_y = 0.0;
        self.can_switch_gravity = false;
        true
    }

    pub fn bounds(&self) -> Rectangle {
        rect(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

#[derive(Clone, Debug)]
pub struct Spike {
    pub x: f32,
    y: f32,
    pub width: f32,
    pub height: f32,
    orientation: SpikeOrientation,
}

impl Spike {
    pub fn new(x: f32, orientation: SpikeOrientation, screen_height: f32) -> Self {
        let y = match orientation {
            SpikeOrientation::Up => screen_height - SPIKE_HEIGHT,
            SpikeOrientation::Down => 0.0,
        };
        Self {
            x,
            y,
            width: SPIKE_WIDTH,
            height: SPIKE_HEIGHT,
            orientation,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn orientation(&self) -> SpikeOrientation {
        self.orientation
    }

    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn bounds(&self) -> Rectangle {
        rect(self.x, self.y, self.width, self.height)
    }

    pub fn tip(&self) -> Vector2 {
        let center_x = self.x + (self.width / 2.0).floor();
        match self.orientation {
            SpikeOrientation::Up => vec2(center_x, self.y),
            SpikeOrientation::Down => vec2(center_x, self.y + self.height),
        }
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < -self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_update_applies_one_step_of_gravity() {
        let mut ball = Ball::new(150.0, 500.0);
        ball.update(1000.0);
        assert!((ball.vel_y - 1.6).abs() < 1e-6);
        assert!((ball.pos.y - 501.6).abs() < 1e-4);
        assert!(!ball.can_switch_gravity);
    }

    #[test]
    fn landing_grounds_the_ball() {
        let mut ball = Ball::new(150.0, 1000.0 - BALL_RADIUS - 0.5);
        ball.vel_y = 10.0;
        ball.update(1000.0);
        assert_eq!(ball.pos.y, 1000.0 - BALL_RADIUS);
        assert_eq!(ball.vel_y, 0.0);
        assert!(ball.can_switch_gravity);
    }

    #[test]
    fn switch_requires_ground_and_consumes_it() {
        let mut ball = Ball::new(150.0, 500.0);
        assert!(!ball.switch_gravity());
        assert!(!ball.gravity_up);

        ball.pos.y = 1000.0 - BALL_RADIUS;
        ball.update(1000.0);
        ball.vel_y = 3.0;
        assert!(ball.switch_gravity());
        assert!(ball.gravity_up);
        assert_eq!(ball.vel_y, 0.0);
        assert!(!ball.can_switch_gravity);
        assert!(!ball.switch_gravity());
        assert!(ball.gravity_up);
    }

    #[test]
    fn reversed_gravity_lands_on_ceiling() {
        let mut ball = Ball::new(150.0, BALL_RADIUS + 1.0);
        ball.gravity_up = true;
        ball.update(1000.0);
        assert_eq!(ball.pos.y, BALL_RADIUS);
        assert!(ball.can_switch_gravity);
    }

    #[test]
    fn spike_y_depends_on_orientation() {
        assert_eq!(Spike::new(0.0, SpikeOrientation::Up, 1000.0).y(), 820.0);
        assert_eq!(Spike::new(0.0, SpikeOrientation::Down, 1000.0).y(), 0.0);
    }

    #[test]
    fn spike_tips() {
        let up = Spike::new(100.0, SpikeOrientation::Up, 1000.0);
        let tip = up.tip();
        assert_eq!((tip.x, tip.y), (160.0, 820.0));
        let down = Spike::new(100.0, SpikeOrientation::Down, 1000.0);
        let tip = down.tip();
        assert_eq!((tip.x, tip.y), (160.0, 180.0));
    }

    #[test]
    fn spike_leaves_screen_past_its_width() {
        let mut spike = Spike::new(0.0, SpikeOrientation::Up, 1000.0);
        spike.update(SPIKE_WIDTH);
        assert!(!spike.is_off_screen());
        spike.update(0.5);
        assert!(spike.is_off_screen());
    }

    proptest! {
        #[test]
        fn ball_stays_between_boundaries(
            height in 400i32..3000,
            taps in proptest::collection::vec(any::<bool>(), 1..600),
        ) {
            let h = height as f32;
            let mut ball = Ball::new(150.0, (height / 2) as f32);
            for tap in taps {
                if tap {
                    let grounded = ball.can_switch_gravity;
                    prop_assert_eq!(ball.switch_gravity(), grounded);
                    prop_assert!(!ball.can_switch_gravity);
                }
                ball.update(h);
                prop_assert!(ball.pos.y >= ball.radius);
                prop_assert!(ball.pos.y <= h - ball.radius);
            }
        }
    }
}
