use std::path::Path;

use jumpquest_core::config::AssetConfig;
use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound, stop_sound};

/// Looping background track.
pub struct Music {
    sound: Sound,
}

impl Music {
    pub fn stop(&self) {
        stop_sound(&self.sound);
    }
}

/// Start the configured track on a loop. A track that fails to load is
/// logged and the game runs silent.
pub async fn start_music(assets: &AssetConfig) -> Option<Music> {
    let path = Path::new(&assets.root).join(&assets.music);
    let path_str = path.to_string_lossy();
    match load_sound(&path_str).await {
        Ok(sound) => {
            play_sound(
                &sound,
                PlaySoundParams {
                    looped: true,
                    volume: assets.music_volume,
                },
            );
            tracing::info!(
                track = %path.display(),
                volume = assets.music_volume,
                "Music started"
            );
            Some(Music { sound })
        },
        Err(e) => {
            tracing::warn!(
                track = %path.display(),
                "Failed to load music: {e}, continuing without"
            );
            None
        },
    }
}
