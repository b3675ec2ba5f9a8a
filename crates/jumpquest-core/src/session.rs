use crate::config::GameConfig;
use crate::error::SpriteError;
use crate::physics::{FrameInput, handle_move};
use crate::scene::{Background, Scene};
use crate::world::{LevelSprites, World};

/// Something that happened during a frame, for logging and host reactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Jumped { jump_count: u8 },
    /// Fire contacts this frame and the health left afterwards.
    Hit { contacts: u32, health: u8 },
    Respawned,
    Victory,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Won,
    Closed,
}

/// One play session: the world plus the settings that drive each frame.
/// Once the session leaves `Running`, `step` does nothing.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    world: World,
    state: SessionState,
    frame: u64,
}

impl Session {
    pub fn new(config: GameConfig, world: World) -> Self {
        Self {
            config,
            world,
            state: SessionState::Running,
            frame: 0,
        }
    }

    /// Lay out the configured level and start a session on it.
    pub fn from_config(config: GameConfig, sprites: LevelSprites) -> Result<Self, SpriteError> {
        let world = World::new(&config, sprites)?;
        Ok(Self::new(config, world))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame of game logic: jump, player and obstacle ticks,
    /// movement and collisions, hazard/victory dispatch, camera, respawn.
    pub fn step(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        if input.quit {
            tracing::info!(frame = self.frame, "Window closed");
            self.state = SessionState::Closed;
            return vec![GameEvent::Closed];
        }
        self.frame += 1;

        let mut events = Vec::new();
        let fps = self.config.window.fps;
        let player_vel = self.config.physics.player_vel;

        let player = self.world.player_mut();
        if input.jump && player.can_jump() {
            player.jump();
            events.push(GameEvent::Jumped {
                jump_count: player.jump_count,
            });
        }
        player.tick(fps);
        self.world.tick_obstacles();

        let (player, obstacles) = self.world.split_mut();
        let outcome = handle_move(player, obstacles, input, player_vel);
        if outcome.fire_hits > 0 {
            tracing::debug!(
                contacts = outcome.fire_hits,
                health = player.current_health,
                "Player burned"
            );
            events.push(GameEvent::Hit {
                contacts: outcome.fire_hits,
                health: player.current_health,
            });
        }
        if outcome.reached_flag {
            tracing::info!(frame = self.frame, "Flag reached");
            self.state = SessionState::Won;
            events.push(GameEvent::Victory);
            return events;
        }

        self.world.update_camera();

        let player = self.world.player_mut();
        if player.is_dead() {
            player.reset_to_spawn();
            tracing::info!(frame = self.frame, "Player respawned");
            events.push(GameEvent::Respawned);
        }
        events
    }

    /// Draw list for the current frame.
    pub fn scene(&self, background: &Background) -> Scene {
        Scene::compose(
            &self.world,
            background,
            self.config.window.width,
            self.config.window.height,
        )
    }

    pub fn victory_scene(&self) -> Scene {
        Scene::victory(&self.config.victory)
    }
}
