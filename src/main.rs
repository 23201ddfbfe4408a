mod audio;
mod config;
mod entities;
mod game;
mod math;

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use raylib::prelude::RaylibAudio;

use audio::{MusicPlayer, Soundtrack, has_embedded_music, music_status};
use config::{FPS, GameConfig};
use game::{Flow, Game, poll_events};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut rl, thread) = raylib::init().size(0, 0).title("Gravity Shift").build();
    rl.set_target_fps(FPS);

    let config = GameConfig::new(rl.get_screen_width(), rl.get_screen_height());
    info!("screen {}x{}", config.screen_width, config.screen_height);

    rl.toggle_fullscreen();
    if !rl.is_window_fullscreen() {
        warn!("fullscreen unavailable, falling back to a window");
        rl.set_window_size(config.screen_width, config.screen_height);
    }

    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(err) => {
            warn!("audio device unavailable: {err:?}");
            None
        }
    };
    let mut music = MusicPlayer::load(audio.as_ref());
    debug!("music buffer {} bytes", music.buffered_len());
    let status = music_status(music.source(), has_embedded_music());
    info!("{status}");

    let seed = system_seed();
    info!("seed {seed}");
    let mut game = Game::new(config, seed);

    loop {
        let events = poll_events(&mut rl);
        if game.frame(&events, &mut music) == Flow::Exit {
            break;
        }
        music.update();

        let mut d = rl.begin_drawing(&thread);
        game.draw(&mut d, status, music.is_loaded());
    }

    music.stop();
    info!(
        "exiting from {:?} with score {}",
        game.state(),
        game.session().score
    );
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
