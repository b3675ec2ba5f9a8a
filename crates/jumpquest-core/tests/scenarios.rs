mod common;

use common::{block, fire, flag, level_sprites, player_at, world_with};
use jumpquest_core::entity::Entity;
use jumpquest_core::geometry::COORD_LIMIT;
use jumpquest_core::physics::dispatch_contacts;
use jumpquest_core::player::AnimationState;
use jumpquest_core::{FrameInput, GameConfig, GameEvent, Session, SessionState};

fn hold_right() -> FrameInput {
    FrameInput {
        right: true,
        ..Default::default()
    }
}

/// Floor blocks along y = 704 from x = -192 to x = 2112.
fn floor() -> Vec<jumpquest_core::obstacle::Obstacle> {
    (-2..22).map(|i| block(i * 96, 704)).collect()
}

#[test]
fn resting_player_stays_idle_on_the_block() {
    let world = world_with(100, 640, vec![block(64, 704)]);
    let mut session = Session::new(GameConfig::default(), world);

    for frame in 0..180 {
        session.step(&FrameInput::default());
        let player = session.world().player();
        assert_eq!(player.vx, 0, "frame {frame}");
        assert_eq!(player.y(), 640, "frame {frame}");
        assert_eq!(player.animation_state(), AnimationState::Idle);
        assert_eq!(player.sheet_key(), "idle_left");
    }
}

#[test]
fn falling_player_lands_on_the_floor() {
    let mut session = Session::new(GameConfig::default(), world_with(300, 100, floor()));
    for _ in 0..300 {
        session.step(&FrameInput::default());
    }
    let player = session.world().player();
    assert_eq!(player.rect().bottom(), 704);
    assert_eq!(player.jump_count, 0);
}

#[test]
fn falling_off_the_map_settles_at_the_coordinate_limit() {
    // Past the right end of the floor, nothing stops the fall.
    let mut session = Session::new(GameConfig::default(), world_with(5000, 100, floor()));
    for _ in 0..80_000 {
        session.step(&FrameInput::default());
    }
    let player = session.world().player();
    assert_eq!(player.y(), COORD_LIMIT);
    assert_eq!(player.x(), 5000);
    assert_eq!(player.current_health, player.max_health);
    assert_eq!(session.state(), SessionState::Running);
}

#[test]
fn fire_costs_one_point_and_hit_wears_off() {
    let mut player = player_at(100, 100);
    let hazard = [fire(110, 110)];

    let outcome = dispatch_contacts(&mut player, hazard.iter());
    assert_eq!(outcome.fire_hits, 1);
    assert_eq!(player.current_health, 2);
    assert!(player.hit);
    assert_eq!(player.hit_count, 0);

    let fps = GameConfig::default().window.fps;
    for _ in 0..fps * 2 {
        player.tick(fps);
        assert!(player.hit);
    }
    player.tick(fps);
    assert!(!player.hit);
}

#[test]
fn burning_to_zero_respawns_with_full_health() {
    let world = world_with(100, 100, vec![fire(110, 110)]);
    let mut session = Session::new(GameConfig::default(), world);

    let events = session.step(&FrameInput::default());
    assert_eq!(
        events,
        vec![
            GameEvent::Hit {
                contacts: 3,
                health: 0,
            },
            GameEvent::Respawned,
        ]
    );
    let player = session.world().player();
    assert_eq!((player.x(), player.y()), player.spawn());
    assert_eq!(player.current_health, player.max_health);
    assert!(!player.hit);
    assert_eq!(player.jump_count, 0);
    assert_eq!(session.state(), SessionState::Running);
}

#[test]
fn reaching_the_flag_wins_exactly_once() {
    let world = world_with(100, 100, vec![flag(120, 120), fire(120, 120)]);
    let mut session = Session::new(GameConfig::default(), world);

    let events = session.step(&hold_right());
    assert_eq!(events, vec![GameEvent::Victory]);
    assert_eq!(session.state(), SessionState::Won);
    assert_eq!(session.world().player().current_health, 3);

    let frozen = session.world().player().rect();
    let frame = session.frame();
    for _ in 0..10 {
        assert!(session.step(&hold_right()).is_empty());
    }
    assert_eq!(session.world().player().rect(), frozen);
    assert_eq!(session.frame(), frame);
}

#[test]
fn double_jump_repeats_impulse_and_third_is_rejected() {
    let mut player = player_at(100, 100);
    assert!(player.jump());
    let first = player.vy;
    player.tick(60);
    player.tick(60);

    assert!(player.jump());
    assert_eq!(player.vy, first);
    assert_eq!(player.jump_count, 2);

    player.tick(60);
    let before = player.vy;
    assert!(!player.jump());
    assert_eq!(player.vy, before);
    assert_eq!(player.jump_count, 2);
}

#[test]
fn camera_follows_player_past_the_scroll_margin() {
    let mut session = Session::new(GameConfig::default(), world_with(600, 640, floor()));
    for _ in 0..120 {
        session.step(&hold_right());
        let world = session.world();
        let screen_right = world.player().rect().right() - world.offset_x();
        assert!(screen_right <= 805, "screen right {screen_right}");
    }
    assert!(session.world().offset_x() > 0);
}

#[test]
fn default_level_starts_running_with_lit_fire() {
    let mut session = Session::from_config(GameConfig::default(), level_sprites()).unwrap();
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.world().obstacles().len(), 37);
    let lit = session
        .world_mut()
        .fire_mut()
        .map(|f| f.state() == jumpquest_core::obstacle::FireState::On);
    assert_eq!(lit, Some(true));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn input() -> impl Strategy<Value = FrameInput> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| FrameInput {
            left,
            right,
            jump,
            quit: false,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn health_and_jumps_stay_in_range(
            inputs in prop::collection::vec(input(), 1..240),
        ) {
            let mut session =
                Session::from_config(GameConfig::default(), level_sprites()).unwrap();
            for input in &inputs {
                session.step(input);
                let player = session.world().player();
                prop_assert!(player.current_health <= player.max_health);
                prop_assert!(player.jump_count <= 2);
                if session.state() != SessionState::Running {
                    break;
                }
            }
        }
    }
}
