mod constants;
mod difficulty;
mod input;
mod layout;
mod render;
mod session;
mod spikes;
mod update;

use rand::{SeedableRng, rngs::SmallRng};

use crate::config::GameConfig;

pub use input::{InputEvent, poll_events};
use layout::Layout;
pub use session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Menu,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Game {
    config: GameConfig,
    layout: Layout,
    state: ScreenState,
    session: Session,
    rng: SmallRng,
    music_playing: bool,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            layout: Layout::new(&config),
            state: ScreenState::Menu,
            session: Session::new(&config),
            rng: SmallRng::seed_from_u64(seed),
            music_playing: false,
            config,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
