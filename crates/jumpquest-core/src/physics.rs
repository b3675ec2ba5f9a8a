use serde::{Deserialize, Serialize};

use crate::entity::{Entity, collide_mask};
use crate::obstacle::{FIRE_NAME, FLAG_NAME, Obstacle};
use crate::player::Player;

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Left key held.
    pub left: bool,
    /// Right key held.
    pub right: bool,
    /// Jump key pressed this frame (edge-triggered).
    pub jump: bool,
    /// Window close requested.
    pub quit: bool,
}

/// What the player touched while moving this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Fire contacts dispatched (one point of damage each).
    pub fire_hits: u32,
    pub reached_flag: bool,
}

/// Test a horizontal move of `dx`: shift the player, look for the first
/// obstacle its mask overlaps, then shift back. Leaves the player where it
/// started.
pub fn collide<'a>(player: &mut Player, objects: &'a [Obstacle], dx: i32) -> Option<&'a Obstacle> {
    let start = player.x();
    player.move_by(dx, 0.0);
    let hit = objects.iter().find(|obj| collide_mask(&*player, *obj));
    player.rect_mut().x = start;
    hit
}

/// Resolve overlaps after vertical movement of `dy`. Falling onto an
/// obstacle lands on its top; rising into one bumps the head on its bottom.
/// Returns every obstacle overlapped.
pub fn handle_vertical_collision<'a>(
    player: &mut Player,
    objects: &'a [Obstacle],
    dy: f32,
) -> Vec<&'a Obstacle> {
    let mut collided = Vec::new();
    for obj in objects {
        if !collide_mask(&*player, obj) {
            continue;
        }
        if dy > 0.0 {
            player.rect_mut().set_bottom(obj.rect().top());
            player.landed();
        } else if dy < 0.0 {
            player.rect_mut().set_top(obj.rect().bottom());
            player.hit_head();
        }
        collided.push(obj);
    }
    collided
}

/// Apply hazard and goal effects for each contact in order. Every fire
/// entry costs one point of health; the first flag entry ends dispatch.
pub fn dispatch_contacts<'a>(
    player: &mut Player,
    contacts: impl IntoIterator<Item = &'a Obstacle>,
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    for obj in contacts {
        match obj.name() {
            Some(FIRE_NAME) => {
                player.make_hit();
                player.take_damage();
                outcome.fire_hits += 1;
            },
            Some(FLAG_NAME) => {
                outcome.reached_flag = true;
                break;
            },
            _ => {},
        }
    }
    outcome
}

/// Per-frame movement: test both directions, apply held keys that are not
/// blocked, resolve vertical contacts and dispatch hazards/goal.
pub fn handle_move(
    player: &mut Player,
    objects: &[Obstacle],
    input: &FrameInput,
    player_vel: i32,
) -> MoveOutcome {
    player.vx = 0;
    let collide_left = collide(player, objects, -player_vel);
    let collide_right = collide(player, objects, player_vel);

    if input.left && collide_left.is_none() {
        player.move_left(player_vel);
    }
    if input.right && collide_right.is_none() {
        player.move_right(player_vel);
    }

    let dy = player.vy;
    let vertical = handle_vertical_collision(player, objects, dy);
    let contacts = collide_left
        .into_iter()
        .chain(collide_right)
        .chain(vertical);
    dispatch_contacts(player, contacts)
}
