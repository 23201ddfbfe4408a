use raylib::prelude::{RaylibDraw, RaylibDrawHandle};

use crate::math::vec2;

use super::super::constants::{GLOW, GREEN, RED, STATUS_FONT_SIZE, WHITE};
use super::Game;
use super::helpers::{draw_button, draw_text_centered};

impl Game {
    pub(super) fn draw_title(&self, d: &mut RaylibDrawHandle, music_status: &str, music_loaded: bool) {
        let w = self.config.width();
        let h = self.config.height();
        let layout = &self.layout;

        draw_text_centered(
            d,
            "GRAVITY SHIFT",
            vec2(w / 2.0, h / 3.0),
            layout.large_font_size,
            WHITE,
        );

        draw_button(d, &layout.play_button, "PLAY", layout.font_size);

        let below = h / 2.0 + layout.play_button.height;
        draw_text_centered(
            d,
            "Tap screen to switch gravity when grounded!",
            vec2(w / 2.0, below + 60.0),
            layout.font_size,
            WHITE,
        );
        draw_text_centered(
            d,
            "Blue glow = can switch gravity",
            vec2(w / 2.0, below + 120.0),
            layout.font_size,
            GLOW,
        );

        let status_color = if music_loaded { GREEN } else { RED };
        d.draw_text(music_status, 20, 20, STATUS_FONT_SIZE, status_color);
    }
}
