use jumpquest_core::scene::{DrawCommand, Rgba, Scene};
use macroquad::color::{Color, WHITE};
use macroquad::shapes::draw_rectangle;
use macroquad::text::{draw_text, measure_text};
use macroquad::texture::{FilterMode, Texture2D, draw_texture};
use macroquad::window::{clear_background, screen_height, screen_width};

use crate::assets::FrameAtlas;
use crate::error::AssetError;

/// Draws [`Scene`]s with one GPU texture per atlas frame.
pub struct Renderer {
    textures: Vec<Texture2D>,
}

impl Renderer {
    /// Upload every atlas frame. Must run after the window exists.
    pub fn new(atlas: &FrameAtlas) -> Result<Self, AssetError> {
        let textures = atlas
            .images()
            .iter()
            .map(|image| {
                let (width, height) = image.dimensions();
                let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
                    return Err(AssetError::Texture { width, height });
                };
                let texture = Texture2D::from_rgba8(w, h, image.as_raw());
                texture.set_filter(FilterMode::Nearest);
                Ok(texture)
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(textures = textures.len(), "Textures uploaded");
        Ok(Self { textures })
    }

    pub fn draw(&self, scene: &Scene) {
        for command in scene.commands() {
            match command {
                DrawCommand::Clear(color) => clear_background(to_color(*color)),
                DrawCommand::Sprite { frame, x, y } => {
                    if let Some(texture) = self.textures.get(frame.0) {
                        draw_texture(texture, *x as f32, *y as f32, WHITE);
                    }
                },
                DrawCommand::Rect { x, y, w, h, color } => {
                    draw_rectangle(*x as f32, *y as f32, *w as f32, *h as f32, to_color(*color));
                },
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size,
                    color,
                } => {
                    // draw_text positions the baseline; shift so (x, y) is the top.
                    let dims = measure_text(text, None, *size, 1.0);
                    draw_text(
                        text,
                        *x as f32,
                        *y as f32 + dims.offset_y,
                        f32::from(*size),
                        to_color(*color),
                    );
                },
                DrawCommand::CenteredText { text, size, color } => {
                    let dims = measure_text(text, None, *size, 1.0);
                    let x = screen_width() / 2.0 - dims.width / 2.0;
                    let y = screen_height() / 2.0 - dims.height / 2.0 + dims.offset_y;
                    draw_text(text, x, y, f32::from(*size), to_color(*color));
                },
            }
        }
    }
}

fn to_color(Rgba(r, g, b, a): Rgba) -> Color {
    Color::from_rgba(r, g, b, a)
}
