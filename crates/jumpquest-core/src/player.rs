use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;
use crate::entity::{Body, Entity};
use crate::error::SpriteError;
use crate::geometry::{COORD_LIMIT, Rect};
use crate::sprites::{SpriteSheets, cycle_index};

/// Jumps allowed before landing (ground jump + one double jump).
pub const MAX_JUMPS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Animation strips the player can show, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationState {
    Hit,
    Jump,
    DoubleJump,
    Fall,
    Run,
    Idle,
}

impl AnimationState {
    pub const ALL: [AnimationState; 6] = [
        AnimationState::Hit,
        AnimationState::Jump,
        AnimationState::DoubleJump,
        AnimationState::Fall,
        AnimationState::Run,
        AnimationState::Idle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationState::Hit => "hit",
            AnimationState::Jump => "jump",
            AnimationState::DoubleJump => "double_jump",
            AnimationState::Fall => "fall",
            AnimationState::Run => "run",
            AnimationState::Idle => "idle",
        }
    }

    /// Sheet key for this state facing `direction`, e.g. `run_left`.
    pub fn sheet_key(self, direction: Direction) -> String {
        format!("{}_{}", self.as_str(), direction.as_str())
    }
}

/// Every sheet key a player animation set must provide.
pub fn required_sheet_keys() -> Vec<String> {
    AnimationState::ALL
        .iter()
        .flat_map(|state| {
            [Direction::Left, Direction::Right]
                .into_iter()
                .map(move |dir| state.sheet_key(dir))
        })
        .collect()
}

/// The player character: physics state plus animation state machine.
#[derive(Debug, Clone)]
pub struct Player {
    body: Body,
    sheets: SpriteSheets,
    physics: PhysicsConfig,
    spawn_x: i32,
    spawn_y: i32,
    pub vx: i32,
    pub vy: f32,
    pub direction: Direction,
    pub animation_count: u32,
    /// Ticks since the last landing; ramps gravity up.
    pub fall_count: u32,
    pub jump_count: u8,
    pub hit: bool,
    pub hit_count: u32,
    pub max_health: u8,
    pub current_health: u8,
    animation_state: AnimationState,
}

impl Player {
    pub fn new(
        x: i32,
        y: i32,
        sheets: SpriteSheets,
        physics: PhysicsConfig,
        max_health: u8,
    ) -> Result<Self, SpriteError> {
        let keys = required_sheet_keys();
        sheets.require(keys.iter().map(String::as_str))?;
        let direction = Direction::Left;
        let initial_key = AnimationState::Idle.sheet_key(direction);
        let first = sheets
            .get(&initial_key)
            .and_then(|frames| frames.first())
            .cloned()
            .ok_or(SpriteError::EmptySheet(initial_key))?;

        Ok(Self {
            body: Body::new(x, y, first),
            sheets,
            physics,
            spawn_x: x,
            spawn_y: y,
            vx: 0,
            vy: 0.0,
            direction,
            animation_count: 0,
            fall_count: 0,
            jump_count: 0,
            hit: false,
            hit_count: 0,
            max_health,
            current_health: max_health,
            animation_state: AnimationState::Idle,
        })
    }

    pub fn spawn(&self) -> (i32, i32) {
        (self.spawn_x, self.spawn_y)
    }

    pub fn x(&self) -> i32 {
        self.body.rect().x
    }

    pub fn y(&self) -> i32 {
        self.body.rect().y
    }

    pub fn rect_mut(&mut self) -> &mut Rect {
        self.body.rect_mut()
    }

    /// Place the player at an absolute position without touching velocity.
    pub fn teleport(&mut self, x: i32, y: i32) {
        let rect = self.body.rect_mut();
        rect.x = x;
        rect.y = y;
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation_state
    }

    /// Key of the sheet the current frame came from, e.g. `idle_left`.
    pub fn sheet_key(&self) -> String {
        self.animation_state.sheet_key(self.direction)
    }

    pub fn can_jump(&self) -> bool {
        self.jump_count < MAX_JUMPS
    }

    /// Launch upwards. Returns `false`, changing nothing, once both jumps
    /// are spent.
    pub fn jump(&mut self) -> bool {
        if !self.can_jump() {
            return false;
        }
        self.vy = -self.physics.gravity * self.physics.jump_multiplier;
        self.animation_count = 0;
        self.jump_count += 1;
        // Discard gravity accumulated before leaving the ground.
        if self.jump_count == 1 {
            self.fall_count = 0;
        }
        true
    }

    /// Translate by (dx, dy). The vertical position is truncated back to
    /// whole pixels after adding the fractional velocity. Both axes stop at
    /// [`COORD_LIMIT`], so a player falling off the map settles there.
    pub fn move_by(&mut self, dx: i32, dy: f32) {
        let rect = self.body.rect_mut();
        rect.x = rect.x.saturating_add(dx).clamp(-COORD_LIMIT, COORD_LIMIT);
        rect.y = ((rect.y as f32 + dy) as i32).clamp(-COORD_LIMIT, COORD_LIMIT);
    }

    pub fn move_left(&mut self, vel: i32) {
        self.vx -= vel;
        if self.direction != Direction::Left {
            self.direction = Direction::Left;
            self.animation_count = 0;
        }
    }

    pub fn move_right(&mut self, vel: i32) {
        self.vx = vel;
        if self.direction != Direction::Right {
            self.direction = Direction::Right;
            self.animation_count = 0;
        }
    }

    pub fn make_hit(&mut self) {
        self.hit = true;
        self.hit_count = 0;
    }

    /// Lose one point of health, never going below zero.
    pub fn take_damage(&mut self) {
        self.current_health = self.current_health.saturating_sub(1);
    }

    pub fn is_dead(&self) -> bool {
        self.current_health == 0
    }

    /// Advance one tick: gravity, movement, hit timer, animation.
    pub fn tick(&mut self, fps: u32) {
        let fps = fps.max(1);
        let gravity_step = (self.fall_count as f32 / fps as f32) * self.physics.gravity;
        self.vy += gravity_step.min(1.0);
        self.move_by(self.vx, self.vy);

        if self.hit {
            self.hit_count += 1;
        }
        if self.hit_count > self.physics.hit_ticks(fps) {
            self.hit = false;
            self.hit_count = 0;
        }

        self.fall_count += 1;
        self.update_sprite();
    }

    pub fn landed(&mut self) {
        self.fall_count = 0;
        self.vy = 0.0;
        self.jump_count = 0;
    }

    pub fn hit_head(&mut self) {
        self.vy = -self.vy;
    }

    /// Respawn: back to the spawn point with full health and every counter
    /// cleared.
    pub fn reset_to_spawn(&mut self) {
        self.teleport(self.spawn_x, self.spawn_y);
        self.current_health = self.max_health;
        self.vx = 0;
        self.vy = 0.0;
        self.hit = false;
        self.hit_count = 0;
        self.fall_count = 0;
        self.jump_count = 0;
        self.animation_count = 0;
    }

    /// Pick the animation state from the current physics state.
    pub fn select_animation(&self) -> AnimationState {
        if self.hit {
            AnimationState::Hit
        } else if self.vy < 0.0 {
            match self.jump_count {
                1 => AnimationState::Jump,
                2 => AnimationState::DoubleJump,
                _ => AnimationState::Idle,
            }
        } else if self.vy > self.physics.gravity * 2.0 {
            AnimationState::Fall
        } else if self.vx != 0 {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    }

    fn update_sprite(&mut self) {
        let state = self.select_animation();
        self.animation_state = state;
        let key = state.sheet_key(self.direction);
        if let Some(frames) = self.sheets.get(&key) {
            let index = cycle_index(
                self.animation_count,
                self.physics.player_animation_delay,
                frames.len(),
            );
            if let Some(frame) = frames.get(index) {
                self.body.set_frame(frame);
            }
        }
        self.animation_count += 1;
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }
}
