use serde::{Deserialize, Serialize};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "JUMPQUEST_CONFIG";
/// Config path used when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/jumpquest.toml";
/// Longest hit flash `validate` accepts.
pub const MAX_HIT_SECONDS: u32 = 60;

/// Top-level game configuration, loaded from `jumpquest.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub camera: CameraConfig,
    pub level: LevelConfig,
    pub assets: AssetConfig,
    pub victory: VictoryConfig,
}

/// Window size and frame pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Simulation ticks (and rendered frames) per second.
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Jump Quest Reloaded".to_string(),
            width: 1000,
            height: 800,
            fps: 60,
        }
    }
}

/// Per-frame physics and animation tuning. All timings are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity constant; also scales the jump impulse and fall threshold.
    pub gravity: f32,
    /// Horizontal speed in pixels per tick.
    pub player_vel: i32,
    /// Jump impulse is `-gravity * jump_multiplier`.
    pub jump_multiplier: f32,
    pub player_animation_delay: u32,
    pub fire_animation_delay: u32,
    /// Seconds the hit flash lasts (converted to ticks at the target fps).
    pub hit_seconds: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            player_vel: 5,
            jump_multiplier: 8.0,
            player_animation_delay: 5,
            fire_animation_delay: 3,
            hit_seconds: 2,
        }
    }
}

impl PhysicsConfig {
    /// Ticks a hit flash lasts at `fps`, saturating instead of overflowing.
    pub fn hit_ticks(&self, fps: u32) -> u32 {
        fps.saturating_mul(self.hit_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn_x: i32,
    pub spawn_y: i32,
    pub max_health: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_x: 100,
            spawn_y: 100,
            max_health: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from either screen edge at which the camera starts to follow.
    pub scroll_area_width: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            scroll_area_width: 200,
        }
    }
}

/// A block position in block units: `x = column * size`,
/// `y = window_height - row * size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub column: i32,
    pub row: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirePlacement {
    /// Left edge in pixels.
    pub x: i32,
    /// Row (in blocks from the bottom) whose top the fire stands on.
    pub row: i32,
    /// Pixels between the fire's top and the row's top.
    pub lift: i32,
    /// Whether the fire is burning when the level starts.
    pub lit: bool,
}

impl Default for FirePlacement {
    fn default() -> Self {
        Self {
            x: 200,
            row: 1,
            lift: 64,
            lit: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagPlacement {
    pub column: i32,
    /// Row (in blocks from the bottom) whose top the flag stands on.
    pub row: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for FlagPlacement {
    fn default() -> Self {
        Self {
            column: 3,
            row: 7,
            width: 32,
            height: 64,
        }
    }
}

/// Level layout. The floor spans from `floor_screens_left` window widths
/// left of the origin to `floor_screens_right` window widths right of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub block_size: i32,
    pub floor_screens_left: i32,
    pub floor_screens_right: i32,
    pub platforms: Vec<GridPos>,
    pub fire: FirePlacement,
    pub flag: FlagPlacement,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            block_size: 96,
            floor_screens_left: 1,
            floor_screens_right: 2,
            platforms: vec![
                GridPos { column: 0, row: 2 },
                GridPos { column: 3, row: 4 },
                GridPos { column: 0, row: 6 },
                GridPos { column: 3, row: 7 },
            ],
            fire: FirePlacement::default(),
            flag: FlagPlacement::default(),
        }
    }
}

/// Asset locations, relative to `root`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub root: String,
    pub background: String,
    pub player_dir: String,
    /// Square frame size of the player sheets before 2x scaling.
    pub player_frame_size: u32,
    pub fire_dir: String,
    pub fire_frame_width: u32,
    pub fire_frame_height: u32,
    pub terrain: String,
    /// Top-left corner of the block tile inside the terrain image.
    pub block_origin: (u32, u32),
    pub flag: String,
    pub music: String,
    pub music_volume: f32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
            background: "Background/Brown.png".to_string(),
            player_dir: "MainCharacters/MaskDude".to_string(),
            player_frame_size: 32,
            fire_dir: "Traps/Fire".to_string(),
            fire_frame_width: 16,
            fire_frame_height: 32,
            terrain: "Terrain/Terrain.png".to_string(),
            block_origin: (96, 64),
            flag: "Items/Checkpoints/flag.png".to_string(),
            music: "Music/whittingham_asturias.wav".to_string(),
            music_volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VictoryConfig {
    pub message: String,
    pub font_size: u16,
    /// Real-time pause after the victory message before the game exits.
    pub pause_secs: f32,
}

impl Default for VictoryConfig {
    fn default() -> Self {
        Self {
            message: "You Win!".to_string(),
            font_size: 64,
            pause_secs: 3.0,
        }
    }
}

impl GameConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {path}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => {
                tracing::debug!("No config at {path}, using defaults");
                GameConfig::default()
            },
        };
        config.validate();
        config
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Repair values the simulation cannot run with, logging a warning for each.
    pub fn validate(&mut self) {
        if self.window.fps == 0 {
            tracing::warn!("window.fps must be positive, using 60");
            self.window.fps = 60;
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            tracing::warn!(
                width = self.window.width,
                height = self.window.height,
                "window size must be positive, using 1000x800"
            );
            self.window.width = 1000;
            self.window.height = 800;
        }
        if self.level.block_size <= 0 {
            tracing::warn!(
                block_size = self.level.block_size,
                "level.block_size must be positive, using 96"
            );
            self.level.block_size = 96;
        }
        if self.player.max_health == 0 {
            tracing::warn!("player.max_health must be at least 1, using 3");
            self.player.max_health = 3;
        }
        if self.physics.player_animation_delay == 0 {
            tracing::warn!("physics.player_animation_delay must be positive, using 5");
            self.physics.player_animation_delay = 5;
        }
        if self.physics.fire_animation_delay == 0 {
            tracing::warn!("physics.fire_animation_delay must be positive, using 3");
            self.physics.fire_animation_delay = 3;
        }
        if self.physics.hit_seconds > MAX_HIT_SECONDS {
            tracing::warn!(
                hit_seconds = self.physics.hit_seconds,
                "physics.hit_seconds too large, using {MAX_HIT_SECONDS}"
            );
            self.physics.hit_seconds = MAX_HIT_SECONDS;
        }
        if !self.physics.gravity.is_finite() {
            tracing::warn!("physics.gravity must be finite, using 1.0");
            self.physics.gravity = 1.0;
        }
        if !(0.0..=1.0).contains(&self.assets.music_volume) {
            tracing::warn!(
                volume = self.assets.music_volume,
                "assets.music_volume out of range, clamping"
            );
            self.assets.music_volume = self.assets.music_volume.clamp(0.0, 1.0);
        }
    }

    /// Ticks a hit flash lasts at the configured frame rate.
    pub fn hit_ticks(&self) -> u32 {
        self.physics.hit_ticks(self.window.fps)
    }
}
