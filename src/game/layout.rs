use raylib::prelude::Rectangle;

use crate::config::GameConfig;
use crate::math::rect;

use super::constants::{EXIT_BUTTON_MARGIN, EXIT_BUTTON_SIZE};

#[derive(Clone, Debug)]
pub struct Layout {
    pub play_button: Rectangle,
    pub restart_button: Rectangle,
    pub exit_button: Rectangle,
    pub font_size: i32,
    pub large_font_size: i32,
    pub hud_font_size: i32,
}

impl Layout {
    pub fn new(config: &GameConfig) -> Self {
        let w = config.screen_width;
        let h = config.screen_height;
        let button_w = ((w as f64 * 0.6) as i32).max(300);
        let button_h = ((h as f64 * 0.12) as i32).max(100);
        let button_x = (w / 2 - button_w / 2) as f32;

        Self {
            play_button: rect(button_x, (h / 2) as f32, button_w as f32, button_h as f32),
            restart_button: rect(
                button_x,
                (h / 2 + 20) as f32,
                button_w as f32,
                button_h as f32,
            ),
            exit_button: rect(
                w as f32 - EXIT_BUTTON_SIZE - EXIT_BUTTON_MARGIN,
                EXIT_BUTTON_MARGIN,
                EXIT_BUTTON_SIZE,
                EXIT_BUTTON_SIZE,
            ),
            font_size: ((w as f64 * 0.08) as i32).max(48),
            large_font_size: ((w as f64 * 0.12) as i32).max(72),
            hud_font_size: ((w as f64 * 0.05) as i32).max(36),
        }
    }
}
