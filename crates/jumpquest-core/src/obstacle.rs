use serde::{Deserialize, Serialize};

use crate::entity::{Body, Entity};
use crate::error::SpriteError;
use crate::sprites::{SpriteFrame, SpriteSheets, cycle_index};

/// Ticks each fire frame stays on screen.
pub const FIRE_ANIMATION_DELAY: u32 = 3;

pub const FIRE_NAME: &str = "fire";
pub const FLAG_NAME: &str = "flag";

/// Static square of level geometry.
#[derive(Debug, Clone)]
pub struct Block {
    body: Body,
}

impl Block {
    pub fn new(x: i32, y: i32, frame: &SpriteFrame) -> Self {
        Self {
            body: Body::new(x, y, frame.clone()),
        }
    }
}

impl Entity for Block {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Which strip the fire is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireState {
    On,
    Off,
}

impl FireState {
    pub fn sheet_name(self) -> &'static str {
        match self {
            FireState::On => "on",
            FireState::Off => "off",
        }
    }
}

/// Animated hazard. Touching it costs the player health.
#[derive(Debug, Clone)]
pub struct Fire {
    body: Body,
    on_frames: Vec<SpriteFrame>,
    off_frames: Vec<SpriteFrame>,
    state: FireState,
    animation_count: u32,
    animation_delay: u32,
}

impl Fire {
    /// Build a fire from a sheet set holding `on` and `off` strips. The fire
    /// starts unlit, showing the first `off` frame.
    pub fn new(
        x: i32,
        y: i32,
        sheets: &SpriteSheets,
        animation_delay: u32,
    ) -> Result<Self, SpriteError> {
        sheets.require([FireState::On.sheet_name(), FireState::Off.sheet_name()])?;
        let on_frames = sheets
            .get(FireState::On.sheet_name())
            .map(<[SpriteFrame]>::to_vec)
            .unwrap_or_default();
        let off_frames = sheets
            .get(FireState::Off.sheet_name())
            .map(<[SpriteFrame]>::to_vec)
            .unwrap_or_default();
        let first = off_frames
            .first()
            .cloned()
            .ok_or_else(|| SpriteError::EmptySheet(FireState::Off.sheet_name().to_string()))?;

        Ok(Self {
            body: Body::new(x, y, first),
            on_frames,
            off_frames,
            state: FireState::Off,
            animation_count: 0,
            animation_delay: animation_delay.max(1),
        })
    }

    pub fn on(&mut self) {
        self.state = FireState::On;
    }

    pub fn off(&mut self) {
        self.state = FireState::Off;
    }

    pub fn state(&self) -> FireState {
        self.state
    }

    pub fn animation_count(&self) -> u32 {
        self.animation_count
    }

    /// Advance the active strip by one tick and swap in the matching frame.
    pub fn tick(&mut self) {
        let frames = match self.state {
            FireState::On => &self.on_frames,
            FireState::Off => &self.off_frames,
        };
        let len = frames.len();
        let index = cycle_index(self.animation_count, self.animation_delay, len);
        if let Some(frame) = frames.get(index) {
            self.body.set_frame(frame);
        }
        self.animation_count += 1;

        // Keep the counter bounded over long sessions.
        if self.animation_count / self.animation_delay > len as u32 {
            self.animation_count = 0;
        }
    }
}

impl Entity for Fire {
    fn body(&self) -> &Body {
        &self.body
    }

    fn name(&self) -> Option<&'static str> {
        Some(FIRE_NAME)
    }
}

/// Goal marker. Touching it wins the level.
#[derive(Debug, Clone)]
pub struct Flag {
    body: Body,
}

impl Flag {
    pub fn new(x: i32, y: i32, frame: &SpriteFrame) -> Self {
        Self {
            body: Body::new(x, y, frame.clone()),
        }
    }
}

impl Entity for Flag {
    fn body(&self) -> &Body {
        &self.body
    }

    fn name(&self) -> Option<&'static str> {
        Some(FLAG_NAME)
    }
}

/// Discriminant of an [`Obstacle`], used for hazard/victory dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Block,
    Fire,
    Flag,
}

/// Everything the player can collide with.
#[derive(Debug, Clone)]
pub enum Obstacle {
    Block(Block),
    Fire(Fire),
    Flag(Flag),
}

impl Obstacle {
    pub fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Block(_) => ObstacleKind::Block,
            Obstacle::Fire(_) => ObstacleKind::Fire,
            Obstacle::Flag(_) => ObstacleKind::Flag,
        }
    }

    /// Per-frame update. Only fire animates.
    pub fn tick(&mut self) {
        if let Obstacle::Fire(fire) = self {
            fire.tick();
        }
    }

    pub fn as_fire_mut(&mut self) -> Option<&mut Fire> {
        match self {
            Obstacle::Fire(fire) => Some(fire),
            _ => None,
        }
    }
}

impl Entity for Obstacle {
    fn body(&self) -> &Body {
        match self {
            Obstacle::Block(b) => b.body(),
            Obstacle::Fire(f) => f.body(),
            Obstacle::Flag(f) => f.body(),
        }
    }

    fn name(&self) -> Option<&'static str> {
        match self {
            Obstacle::Block(b) => b.name(),
            Obstacle::Fire(f) => f.name(),
            Obstacle::Flag(f) => f.name(),
        }
    }
}
