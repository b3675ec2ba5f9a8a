//! Sprite fixtures for unit tests. Every frame is a fully opaque rectangle so
//! mask overlap equals rectangle overlap.

use crate::config::PhysicsConfig;
use crate::player::{Player, required_sheet_keys};
use crate::sprites::{FrameId, SpriteFrame, SpriteSheets};
use crate::world::LevelSprites;

/// Every player key gets `frames` solid 64x64 frames. Ids are
/// `key_index * 100 + frame_index`.
pub(crate) fn player_sheets(frames: usize) -> SpriteSheets {
    let mut sheets = SpriteSheets::new();
    for (k, key) in required_sheet_keys().into_iter().enumerate() {
        sheets.insert(
            key,
            (0..frames)
                .map(|i| SpriteFrame::solid(FrameId(k * 100 + i), 64, 64))
                .collect(),
        );
    }
    sheets
}

/// Four `on` frames (ids 10..) and one `off` frame (id 20), all 32x64.
pub(crate) fn fire_sheets() -> SpriteSheets {
    let mut sheets = SpriteSheets::new();
    sheets.insert(
        "on",
        (0..4)
            .map(|i| SpriteFrame::solid(FrameId(10 + i), 32, 64))
            .collect(),
    );
    sheets.insert("off", vec![SpriteFrame::solid(FrameId(20), 32, 64)]);
    sheets
}

pub(crate) fn test_player(x: i32, y: i32) -> Player {
    Player::new(x, y, player_sheets(4), PhysicsConfig::default(), 3)
        .expect("fixture sheets cover every key")
}

pub(crate) fn level_sprites(block_size: u32) -> LevelSprites {
    LevelSprites {
        player: player_sheets(4),
        fire: fire_sheets(),
        block: SpriteFrame::solid(FrameId(900), block_size, block_size),
        flag: SpriteFrame::solid(FrameId(901), 32, 64),
    }
}
