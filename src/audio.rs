use std::path::Path;

use anyhow::{Context, anyhow};
use log::{error, info, warn};
use raylib::prelude::{Music, RaylibAudio};

use crate::config::{MUSIC_CANDIDATES, MUSIC_VOLUME};

#[cfg(embedded_music)]
const EMBEDDED_MUSIC: Option<&[u8]> = Some(include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/music.mp3"
)));
#[cfg(not(embedded_music))]
const EMBEDDED_MUSIC: Option<&[u8]> = None;
const EMBEDDED_FILE_TYPE: &str = ".mp3";

/// What the game needs from background music. Playback problems never
/// surface here; an implementation that failed to load simply stays silent.
pub trait Soundtrack {
    fn is_loaded(&self) -> bool;
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn stop(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicSource {
    Embedded,
    External,
    Missing,
}

pub fn music_status(source: MusicSource, has_embedded: bool) -> &'static str {
    match (has_embedded, source) {
        (true, MusicSource::Missing) => "Music: FAILED",
        (true, _) => "Music: EMBEDDED",
        (false, MusicSource::Missing) => "Music: NOT FOUND",
        (false, _) => "Music: EXTERNAL",
    }
}

pub fn has_embedded_music() -> bool {
    EMBEDDED_MUSIC.is_some()
}

pub struct MusicPlayer<'aud> {
    // The stream reads from `data`, so it must drop first.
    music: Option<Music<'aud>>,
    data: Option<Vec<u8>>,
    source: MusicSource,
}

impl<'aud> MusicPlayer<'aud> {
    pub fn silent() -> Self {
        Self {
            music: None,
            data: None,
            source: MusicSource::Missing,
        }
    }

    pub fn load(audio: Option<&'aud RaylibAudio>) -> Self {
        let Some(audio) = audio else {
            warn!("no audio device, music disabled");
            return Self::silent();
        };

        if let Some(data) = embedded_track() {
            match audio.new_music_from_memory(EMBEDDED_FILE_TYPE, &data) {
                Ok(music) => {
                    info!("background music loaded from embedded data");
                    return Self {
                        music: Some(music),
                        data: Some(data),
                        source: MusicSource::Embedded,
                    };
                }
                Err(err) => warn!("could not load embedded music: {err:?}"),
            }
        }

        for candidate in MUSIC_CANDIDATES {
            let path = Path::new(candidate);
            if !path.exists() {
                continue;
            }
            match load_file(audio, path) {
                Ok(music) => {
                    info!("background music loaded from file: {candidate}");
                    return Self {
                        music: Some(music),
                        data: None,
                        source: MusicSource::External,
                    };
                }
                Err(err) => warn!("could not load music {candidate}: {err:#}"),
            }
        }

        info!("no music could be loaded");
        Self::silent()
    }

    pub fn source(&self) -> MusicSource {
        self.source
    }

    /// Size of the in-memory track backing the stream, if any.
    pub fn buffered_len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    /// Feeds the stream; call once per frame.
    pub fn update(&mut self) {
        if let Some(music) = self.music.as_mut() {
            music.update_stream();
        }
    }
}

impl Soundtrack for MusicPlayer<'_> {
    fn is_loaded(&self) -> bool {
        self.music.is_some()
    }

    fn is_playing(&self) -> bool {
        self.music
            .as_ref()
            .is_some_and(|music| music.is_stream_playing())
    }

    fn play(&mut self) {
        let Some(music) = self.music.as_mut() else {
            return;
        };
        music.play_stream();
        music.set_volume(MUSIC_VOLUME);
        if !music.is_stream_playing() {
            error!("could not play music");
        }
    }

    fn stop(&mut self) {
        if let Some(music) = self.music.as_mut() {
            music.stop_stream();
        }
    }
}

fn embedded_track() -> Option<Vec<u8>> {
    EMBEDDED_MUSIC.map(<[u8]>::to_vec)
}

fn load_file<'aud>(audio: &'aud RaylibAudio, path: &Path) -> anyhow::Result<Music<'aud>> {
    let name = path
        .to_str()
        .with_context(|| format!("music path {} is not UTF-8", path.display()))?;
    audio
        .new_music(name)
        .map_err(|err| anyhow!("{err:?}"))
        .with_context(|| format!("loading music stream {name}"))
}
