mod assets;
mod audio;
mod error;
mod input;
mod renderer;

use std::time::Duration;

use jumpquest_core::clock::FrameClock;
use jumpquest_core::config::WindowConfig;
use jumpquest_core::{FrameInput, GameConfig, GameEvent, Session};
use macroquad::input::prevent_quit;
use macroquad::window::{Conf, next_frame};
use tracing_subscriber::EnvFilter;

use crate::error::AssetError;
use crate::input::{KeyBindings, KeySample};
use crate::renderer::Renderer;

fn window_conf(window: &WindowConfig) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GameConfig::load();
    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        fps = config.window.fps,
        "Jump Quest starting"
    );

    macroquad::Window::from_config(window_conf(&config.window), async move {
        if let Err(e) = run(config).await {
            tracing::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    });
}

async fn run(config: GameConfig) -> Result<(), AssetError> {
    prevent_quit();

    let loaded = assets::load_level_assets(&config.assets, &config.level)?;
    let renderer = Renderer::new(&loaded.atlas)?;
    let background = loaded.background;
    let mut session = Session::from_config(config, loaded.sprites)?;
    let music = audio::start_music(&session.config().assets).await;

    let bindings = KeyBindings::default();
    let mut clock = FrameClock::new(session.config().window.fps);

    loop {
        let elapsed = clock.tick();
        if clock.is_overrun(elapsed) {
            tracing::debug!(
                frame = session.frame(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Frame overran budget"
            );
        }
        let input: FrameInput = KeySample::poll(&bindings).into();

        for event in session.step(&input) {
            match event {
                GameEvent::Jumped { jump_count } => tracing::debug!(jump_count, "Jump"),
                GameEvent::Hit { contacts, health } => {
                    tracing::debug!(contacts, health, "Hit by fire");
                },
                GameEvent::Respawned => tracing::debug!("Respawn"),
                GameEvent::Victory => {
                    renderer.draw(&session.victory_scene());
                    next_frame().await;
                    let pause = session.config().victory.pause_secs.max(0.0);
                    std::thread::sleep(Duration::from_secs_f32(pause));
                    if let Some(music) = &music {
                        music.stop();
                    }
                    tracing::info!(frames = session.frame(), "Victory, exiting");
                    return Ok(());
                },
                GameEvent::Closed => {
                    if let Some(music) = &music {
                        music.stop();
                    }
                    tracing::info!(frames = session.frame(), "Exiting");
                    return Ok(());
                },
            }
        }

        renderer.draw(&session.scene(&background));
        next_frame().await;
    }
}
