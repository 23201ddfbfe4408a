use raylib::prelude::{RaylibDraw, RaylibDrawHandle};

use crate::math::vec2;

use super::super::constants::{BLUE, GLOW, GLOW_GAP, OUTLINE, WHITE};
use super::Game;
use super::helpers::{draw_outline_circle, draw_spike};

impl Game {
    pub(super) fn draw_world(&self, d: &mut RaylibDrawHandle) {
        let w = self.config.width();
        let h = self.config.height();
        d.draw_line_ex(vec2(0.0, h - OUTLINE), vec2(w, h - OUTLINE), OUTLINE, WHITE);
        d.draw_line_ex(vec2(0.0, OUTLINE), vec2(w, OUTLINE), OUTLINE, WHITE);

        for spike in &self.session.spikes {
            draw_spike(d, spike);
        }

        let ball = &self.session.ball;
        if ball.can_switch_gravity {
            draw_outline_circle(d, ball.pos, ball.radius + GLOW_GAP, OUTLINE, GLOW);
        }
        d.draw_circle_v(ball.pos, ball.radius, BLUE);
        draw_outline_circle(d, ball.pos, ball.radius, OUTLINE, WHITE);
    }
}
