use std::ops::Range;

use crate::config::GameConfig;
use crate::entity::Entity;
use crate::error::SpriteError;
use crate::obstacle::{Block, Fire, Flag, Obstacle};
use crate::player::Player;
use crate::sprites::{SpriteFrame, SpriteSheets};

/// Sprite data a level is assembled from.
#[derive(Debug, Clone)]
pub struct LevelSprites {
    /// Directional player strips (`idle_left`, `run_right`, ...).
    pub player: SpriteSheets,
    /// Fire strips `on` and `off`.
    pub fire: SpriteSheets,
    /// One terrain block, `block_size` square.
    pub block: SpriteFrame,
    pub flag: SpriteFrame,
}

/// Floor block columns: from `floor(-left * width / size)` up to (not
/// including) `floor(right * width / size)`.
pub fn floor_columns(
    width: i32,
    block_size: i32,
    left_screens: i32,
    right_screens: i32,
) -> Range<i32> {
    let size = block_size.max(1);
    let start = (-left_screens * width).div_euclid(size);
    let end = (right_screens * width).div_euclid(size);
    start..end
}

/// The level: player, obstacles in draw order, and the camera.
#[derive(Debug, Clone)]
pub struct World {
    player: Player,
    obstacles: Vec<Obstacle>,
    offset_x: i32,
    width: i32,
    scroll_area_width: i32,
}

impl World {
    /// Lay out the configured level: floor, then the platform blocks with the
    /// fire after the second one, then the flag.
    pub fn new(config: &GameConfig, sprites: LevelSprites) -> Result<Self, SpriteError> {
        let level = &config.level;
        let size = level.block_size;
        let height = config.window.height;

        let player = Player::new(
            config.player.spawn_x,
            config.player.spawn_y,
            sprites.player,
            config.physics.clone(),
            config.player.max_health,
        )?;

        let mut fire = Fire::new(
            level.fire.x,
            height - size * level.fire.row - level.fire.lift,
            &sprites.fire,
            config.physics.fire_animation_delay,
        )?;
        if level.fire.lit {
            fire.on();
        }

        let mut obstacles: Vec<Obstacle> = floor_columns(
            config.window.width,
            size,
            level.floor_screens_left,
            level.floor_screens_right,
        )
        .map(|i| Obstacle::Block(Block::new(i * size, height - size, &sprites.block)))
        .collect();

        let mut fire = Some(Obstacle::Fire(fire));
        for (n, pos) in level.platforms.iter().enumerate() {
            obstacles.push(Obstacle::Block(Block::new(
                pos.column * size,
                height - size * pos.row,
                &sprites.block,
            )));
            if n == 1 {
                obstacles.extend(fire.take());
            }
        }
        obstacles.extend(fire.take());

        let flag = &level.flag;
        obstacles.push(Obstacle::Flag(Flag::new(
            flag.column * size,
            height - size * flag.row - flag.height as i32,
            &sprites.flag,
        )));

        tracing::debug!(
            obstacles = obstacles.len(),
            block_size = size,
            "Level assembled"
        );

        Ok(Self::from_parts(player, obstacles, config))
    }

    /// Assemble a world from pre-built parts.
    pub fn from_parts(player: Player, obstacles: Vec<Obstacle>, config: &GameConfig) -> Self {
        Self {
            player,
            obstacles,
            offset_x: 0,
            width: config.window.width,
            scroll_area_width: config.camera.scroll_area_width,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Split borrow for collision passes: the player mutably, obstacles shared.
    pub fn split_mut(&mut self) -> (&mut Player, &[Obstacle]) {
        (&mut self.player, &self.obstacles)
    }

    pub fn fire_mut(&mut self) -> Option<&mut Fire> {
        self.obstacles.iter_mut().find_map(Obstacle::as_fire_mut)
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    /// Advance obstacle animations by one tick.
    pub fn tick_obstacles(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.tick();
        }
    }

    /// Scroll by the player's horizontal velocity while it moves into either
    /// scroll margin.
    pub fn update_camera(&mut self) {
        let rect = self.player.rect();
        let vx = self.player.vx;
        let right_edge = self.width - self.scroll_area_width;
        if (rect.right() - self.offset_x >= right_edge && vx > 0)
            || (rect.left() - self.offset_x <= self.scroll_area_width && vx < 0)
        {
            self.offset_x += vx;
        }
    }
}
