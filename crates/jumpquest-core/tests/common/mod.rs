//! Fixtures shared by the scenario tests. Frames are fully opaque so mask
//! overlap equals rectangle overlap.

#![allow(dead_code)]

use jumpquest_core::GameConfig;
use jumpquest_core::config::PhysicsConfig;
use jumpquest_core::obstacle::{Block, Fire, Flag, Obstacle};
use jumpquest_core::player::{Player, required_sheet_keys};
use jumpquest_core::sprites::{FrameId, SpriteFrame, SpriteSheets};
use jumpquest_core::world::{LevelSprites, World};

pub const PLAYER_SIZE: u32 = 64;

pub fn player_sheets() -> SpriteSheets {
    let mut sheets = SpriteSheets::new();
    for (k, key) in required_sheet_keys().into_iter().enumerate() {
        sheets.insert(
            key,
            (0..3)
                .map(|i| SpriteFrame::solid(FrameId(k * 10 + i), PLAYER_SIZE, PLAYER_SIZE))
                .collect(),
        );
    }
    sheets
}

pub fn fire_sheets() -> SpriteSheets {
    let mut sheets = SpriteSheets::new();
    sheets.insert(
        "on",
        (0..8)
            .map(|i| SpriteFrame::solid(FrameId(200 + i), 32, 64))
            .collect(),
    );
    sheets.insert("off", vec![SpriteFrame::solid(FrameId(210), 32, 64)]);
    sheets
}

pub fn level_sprites() -> LevelSprites {
    LevelSprites {
        player: player_sheets(),
        fire: fire_sheets(),
        block: SpriteFrame::solid(FrameId(300), 96, 96),
        flag: SpriteFrame::solid(FrameId(301), 32, 64),
    }
}

pub fn player_at(x: i32, y: i32) -> Player {
    Player::new(x, y, player_sheets(), PhysicsConfig::default(), 3).unwrap()
}

pub fn block(x: i32, y: i32) -> Obstacle {
    Obstacle::Block(Block::new(x, y, &SpriteFrame::solid(FrameId(300), 96, 96)))
}

pub fn fire(x: i32, y: i32) -> Obstacle {
    let mut fire = Fire::new(x, y, &fire_sheets(), 3).unwrap();
    fire.on();
    Obstacle::Fire(fire)
}

pub fn flag(x: i32, y: i32) -> Obstacle {
    Obstacle::Flag(Flag::new(x, y, &SpriteFrame::solid(FrameId(301), 32, 64)))
}

/// A world holding just `obstacles` and a player spawned at `(x, y)`.
pub fn world_with(x: i32, y: i32, obstacles: Vec<Obstacle>) -> World {
    World::from_parts(player_at(x, y), obstacles, &GameConfig::default())
}
