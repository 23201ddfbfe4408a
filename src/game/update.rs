use log::{debug, info};
use raylib::prelude::Vector2;

use crate::audio::Soundtrack;
use crate::math::point_in_bounds;

use super::{Flow, Game, InputEvent, ScreenState, Session};

impl Game {
    pub fn frame(&mut self, events: &[InputEvent], music: &mut impl Soundtrack) -> Flow {
        for event in events {
            if self.handle_event(*event, music) == Flow::Exit {
                return Flow::Exit;
            }
        }
        self.update(music);
        Flow::Continue
    }

    pub fn handle_event(&mut self, event: InputEvent, music: &mut impl Soundtrack) -> Flow {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                Flow::Exit
            }
            InputEvent::PointerDown(pos) => self.handle_pointer(pos, music),
            InputEvent::KeyDown(_) if event.is_primary() => {
                self.activate_primary(music);
                Flow::Continue
            }
            InputEvent::KeyDown(_) => Flow::Continue,
        }
    }

    pub fn update(&mut self, music: &mut impl Soundtrack) {
        match self.state {
            ScreenState::Menu => {}
            ScreenState::Playing => {
                if music.is_loaded() && !music.is_playing() {
                    music.play();
                }
                if self.session.step(&self.config, &mut self.rng) {
                    info!("game over, score {}", self.session.score);
                    self.state = ScreenState::GameOver;
                    music.stop();
                    self.music_playing = false;
                }
            }
            ScreenState::GameOver => {
                if self.music_playing {
                    music.stop();
                    self.music_playing = false;
                }
            }
        }
    }

    fn handle_pointer(&mut self, pos: Vector2, music: &mut impl Soundtrack) -> Flow {
        if point_in_bounds(pos, &self.layout.exit_button) {
            info!("exit button pressed");
            return Flow::Exit;
        }
        match self.state {
            ScreenState::Menu => {
                if point_in_bounds(pos, &self.layout.play_button) {
                    self.start_round(music);
                }
            }
            ScreenState::Playing => self.switch_gravity(),
            ScreenState::GameOver => {
                if point_in_bounds(pos, &self.layout.restart_button) {
                    self.start_round(music);
                }
            }
        }
        Flow::Continue
    }

    fn activate_primary(&mut self, music: &mut impl Soundtrack) {
        match self.state {
            ScreenState::Menu | ScreenState::GameOver => self.start_round(music),
            ScreenState::Playing => self.switch_gravity(),
        }
    }

    fn switch_gravity(&mut self) {
        if self.session.ball.switch_gravity() {
            debug!("gravity up: {}", self.session.ball.gravity_up);
        }
    }

    fn start_round(&mut self, music: &mut impl Soundtrack) {
        info!("{:?} -> Playing", self.state);
        self.state = ScreenState::Playing;
        self.session = Session::new(&self.config);
        if !self.music_playing {
            music.play();
            self.music_playing = true;
        }
    }
}
