use serde::{Deserialize, Serialize};

use crate::config::VictoryConfig;
use crate::entity::Entity;
use crate::player::Player;
use crate::sprites::FrameId;
use crate::world::World;

/// Gap between the health bar and the top of the player.
pub const HEALTH_BAR_OFFSET: i32 = 20;
pub const HEALTH_BAR_HEIGHT: u32 = 5;
/// Gap between the health text and the top of the player.
pub const HEALTH_TEXT_OFFSET: i32 = 35;
pub const HEALTH_TEXT_SIZE: u16 = 24;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    pub const RED: Rgba = Rgba(255, 0, 0, 255);
    pub const GREEN: Rgba = Rgba(0, 255, 0, 255);
}

/// One host drawing operation, in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Sprite {
        frame: FrameId,
        x: i32,
        y: i32,
    },
    Rect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Rgba,
    },
    /// Text with its top-left corner at `(x, y)`.
    Text {
        text: String,
        x: i32,
        y: i32,
        size: u16,
        color: Rgba,
    },
    /// Text centred on the screen.
    CenteredText {
        text: String,
        size: u16,
        color: Rgba,
    },
}

/// Screen-fixed tiled background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub frame: FrameId,
    pub tile_width: u32,
    pub tile_height: u32,
}

/// Tile origins covering a `width`x`height` screen, one extra row and
/// column so partial tiles reach the edges.
pub fn background_tiles(background: &Background, width: i32, height: i32) -> Vec<(i32, i32)> {
    let tw = background.tile_width.max(1) as i32;
    let th = background.tile_height.max(1) as i32;
    let mut tiles = Vec::new();
    for i in 0..=width / tw {
        for j in 0..=height / th {
            tiles.push((i * tw, j * th));
        }
    }
    tiles
}

/// Ordered draw list for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Layers: background tiles, obstacles in list order, the player, then
    /// the player's health bar. World positions are shifted by the camera.
    pub fn compose(world: &World, background: &Background, width: i32, height: i32) -> Self {
        let mut scene = Scene::new();
        for (x, y) in background_tiles(background, width, height) {
            scene.push(DrawCommand::Sprite {
                frame: background.frame,
                x,
                y,
            });
        }

        let offset_x = world.offset_x();
        for obstacle in world.obstacles() {
            scene.push_entity(obstacle, offset_x);
        }
        let player = world.player();
        scene.push_entity(player, offset_x);
        scene.push_health_bar(player, offset_x);
        scene
    }

    /// Black screen with the victory message centred.
    pub fn victory(config: &VictoryConfig) -> Self {
        let mut scene = Scene::new();
        scene.push(DrawCommand::Clear(Rgba::BLACK));
        scene.push(DrawCommand::CenteredText {
            text: config.message.clone(),
            size: config.font_size,
            color: Rgba::GREEN,
        });
        scene
    }

    fn push_entity(&mut self, entity: &dyn Entity, offset_x: i32) {
        let rect = entity.rect();
        self.push(DrawCommand::Sprite {
            frame: entity.frame_id(),
            x: rect.x - offset_x,
            y: rect.y,
        });
    }

    fn push_health_bar(&mut self, player: &Player, offset_x: i32) {
        let rect = player.rect();
        let x = rect.x - offset_x;
        let bar_y = rect.y - HEALTH_BAR_OFFSET;
        let full_width = rect.w.max(0) as u32;
        self.push(DrawCommand::Rect {
            x,
            y: bar_y,
            w: full_width,
            h: HEALTH_BAR_HEIGHT,
            color: Rgba::RED,
        });

        let filled = health_bar_width(player.current_health, player.max_health, full_width);
        if filled > 0 {
            self.push(DrawCommand::Rect {
                x,
                y: bar_y,
                w: filled,
                h: HEALTH_BAR_HEIGHT,
                color: Rgba::GREEN,
            });
        }

        self.push(DrawCommand::Text {
            text: format!("{}/{}", player.current_health, player.max_health),
            x,
            y: rect.y - HEALTH_TEXT_OFFSET,
            size: HEALTH_TEXT_SIZE,
            color: Rgba::BLACK,
        });
    }
}

/// Width of the green part of the health bar, truncated to whole pixels.
pub fn health_bar_width(current: u8, max: u8, full_width: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (f32::from(current) / f32::from(max) * full_width as f32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::test_helpers::level_sprites;

    fn background() -> Background {
        Background {
            frame: FrameId(500),
            tile_width: 64,
            tile_height: 64,
        }
    }

    #[test]
    fn background_covers_screen_with_overhang() {
        let tiles = background_tiles(&background(), 1000, 800);
        // 1000 / 64 = 15 -> 16 columns; 800 / 64 = 12 -> 13 rows.
        assert_eq!(tiles.len(), 16 * 13);
        assert_eq!(tiles.first(), Some(&(0, 0)));
        assert_eq!(tiles.last(), Some(&(960, 768)));
    }

    #[test]
    fn health_bar_is_proportional() {
        assert_eq!(health_bar_width(3, 3, 64), 64);
        assert_eq!(health_bar_width(2, 3, 64), 42);
        assert_eq!(health_bar_width(1, 3, 64), 21);
        assert_eq!(health_bar_width(0, 3, 64), 0);
        assert_eq!(health_bar_width(1, 0, 64), 0);
    }

    #[test]
    fn compose_layers_in_order() {
        let world = World::new(&GameConfig::default(), level_sprites(96)).unwrap();
        let scene = Scene::compose(&world, &background(), 1000, 800);
        let tiles = 16 * 13;
        let obstacles = world.obstacles().len();
        let cmds = scene.commands();

        // Tiles, obstacles, player, bar background, bar fill, text.
        assert_eq!(cmds.len(), tiles + obstacles + 1 + 3);
        assert!(matches!(
            cmds[tiles],
            DrawCommand::Sprite { x, y: 704, .. } if x == -11 * 96
        ));
        assert_eq!(
            cmds[tiles + obstacles],
            DrawCommand::Sprite {
                frame: world.player().frame_id(),
                x: 100,
                y: 100,
            }
        );
        assert_eq!(
            cmds[tiles + obstacles + 1],
            DrawCommand::Rect {
                x: 100,
                y: 80,
                w: 64,
                h: HEALTH_BAR_HEIGHT,
                color: Rgba::RED,
            }
        );
        assert_eq!(
            cmds.last(),
            Some(&DrawCommand::Text {
                text: "3/3".to_string(),
                x: 100,
                y: 65,
                size: HEALTH_TEXT_SIZE,
                color: Rgba::BLACK,
            })
        );
    }

    #[test]
    fn camera_offset_shifts_world_but_not_background() {
        let mut world = World::new(&GameConfig::default(), level_sprites(96)).unwrap();
        world.player_mut().teleport(740, 100);
        world.player_mut().vx = 5;
        world.update_camera();

        let scene = Scene::compose(&world, &background(), 1000, 800);
        let tiles = 16 * 13;
        assert!(matches!(scene.commands()[0], DrawCommand::Sprite { x: 0, y: 0, .. }));
        assert!(matches!(
            scene.commands()[tiles],
            DrawCommand::Sprite { x, .. } if x == -11 * 96 - 5
        ));
    }

    #[test]
    fn empty_health_skips_fill() {
        let mut world = World::new(&GameConfig::default(), level_sprites(96)).unwrap();
        world.player_mut().current_health = 0;
        let scene = Scene::compose(&world, &background(), 1000, 800);
        let rects = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 1);
    }

    #[test]
    fn victory_scene_is_message_on_black() {
        let scene = Scene::victory(&VictoryConfig::default());
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.commands()[0], DrawCommand::Clear(Rgba::BLACK));
        assert_eq!(
            scene.commands()[1],
            DrawCommand::CenteredText {
                text: "You Win!".to_string(),
                size: 64,
                color: Rgba::GREEN,
            }
        );
    }
}
