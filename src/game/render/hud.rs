use raylib::prelude::{RaylibDraw, RaylibDrawHandle};

use crate::math::vec2;

use super::super::constants::{GREEN, RED, WHITE, YELLOW};
use super::Game;
use super::helpers::{draw_button, draw_text_centered};

impl Game {
    pub(super) fn draw_hud(&self, d: &mut RaylibDrawHandle) {
        let h = self.config.screen_height;
        let size = self.layout.hud_font_size;
        let session = &self.session;

        d.draw_text(&format!("Score: {}", session.score), 20, h - 120, size, WHITE);
        d.draw_text(&format!("Speed: {:.1}", session.speed), 20, h - 80, size, WHITE);

        let (status, color) = if session.ball.can_switch_gravity {
            ("Can Switch Gravity", GREEN)
        } else {
            ("Cannot Switch", YELLOW)
        };
        d.draw_text(status, 20, 20, size, color);
    }

    pub(super) fn draw_game_over(&self, d: &mut RaylibDrawHandle) {
        let w = self.config.width();
        let h = self.config.height();
        let layout = &self.layout;

        draw_text_centered(
            d,
            "GAME OVER",
            vec2(w / 2.0, h / 3.0),
            layout.large_font_size,
            RED,
        );
        draw_text_centered(
            d,
            &format!("Final Score: {}", self.session.score),
            vec2(w / 2.0, h / 2.0 - 80.0),
            layout.font_size,
            WHITE,
        );
        draw_button(d, &layout.restart_button, "RESTART", layout.font_size);
    }
}
