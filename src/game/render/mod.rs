mod helpers;
mod hud;
mod title;
mod world;

use raylib::prelude::{RaylibDraw, RaylibDrawHandle};

use super::constants::BLACK;
use super::{Game, ScreenState};

impl Game {
    pub fn draw(&self, d: &mut RaylibDrawHandle, music_status: &str, music_loaded: bool) {
        d.clear_background(BLACK);
        match self.state {
            ScreenState::Menu => self.draw_title(d, music_status, music_loaded),
            ScreenState::Playing => {
                self.draw_world(d);
                self.draw_hud(d);
            }
            ScreenState::GameOver => self.draw_game_over(d),
        }
        helpers::draw_exit_button(d, &self.layout.exit_button);
    }
}
