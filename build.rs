use std::path::Path;

const EMBEDDED_TRACK: &str = "assets/music.mp3";

fn main() {
    println!("cargo::rustc-check-cfg=cfg(embedded_music)");
    println!("cargo::rerun-if-changed={EMBEDDED_TRACK}");

    if std::env::var_os("CARGO_FEATURE_EMBEDDED_MUSIC").is_none() {
        return;
    }
    if Path::new(EMBEDDED_TRACK).is_file() {
        println!("cargo::rustc-cfg=embedded_music");
    } else {
        println!("cargo::warning={EMBEDDED_TRACK} not found, building without embedded music");
    }
}
