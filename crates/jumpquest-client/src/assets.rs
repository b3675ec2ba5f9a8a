//! Image loading and sprite-sheet preparation.
//!
//! Every prepared bitmap lands in a [`FrameAtlas`]; its index is the
//! [`FrameId`] the simulation refers to, and its alpha channel becomes the
//! frame's collision mask.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::{self, FilterType};
use jumpquest_core::config::{AssetConfig, LevelConfig};
use jumpquest_core::geometry::Mask;
use jumpquest_core::scene::Background;
use jumpquest_core::sprites::{FrameId, SpriteFrame, SpriteSheets};
use jumpquest_core::world::LevelSprites;

use crate::error::AssetError;

/// Owns every frame bitmap, indexed by `FrameId`.
#[derive(Debug, Default)]
pub struct FrameAtlas {
    images: Vec<RgbaImage>,
}

impl FrameAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `image` and return its frame, mask derived from alpha.
    pub fn add(&mut self, image: RgbaImage) -> SpriteFrame {
        let id = FrameId(self.images.len());
        let mask = Mask::from_rgba(image.width(), image.height(), image.as_raw());
        self.images.push(image);
        SpriteFrame::new(id, mask)
    }

    pub fn images(&self) -> &[RgbaImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Everything the client needs to start a level.
#[derive(Debug)]
pub struct LoadedAssets {
    pub atlas: FrameAtlas,
    pub sprites: LevelSprites,
    pub background: Background,
}

pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// Copy the `width`x`height` region at `(x, y)` onto a transparent canvas.
/// Parts of the region outside `source` stay transparent.
pub fn extract(source: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    let w = width.min(source.width().saturating_sub(x));
    let h = height.min(source.height().saturating_sub(y));
    if w > 0 && h > 0 {
        let region = imageops::crop_imm(source, x, y, w, h).to_image();
        imageops::replace(&mut canvas, &region, 0, 0);
    }
    canvas
}

/// Double both dimensions, nearest neighbour.
pub fn scale2x(image: &RgbaImage) -> RgbaImage {
    imageops::resize(image, image.width() * 2, image.height() * 2, FilterType::Nearest)
}

/// Cut a horizontal strip into frames of `width`x`height`, each scaled 2x.
/// A trailing partial frame is dropped.
pub fn slice_strip(
    sheet: &RgbaImage,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<Vec<RgbaImage>, AssetError> {
    let count = sheet.width() / width.max(1);
    if count == 0 {
        return Err(AssetError::SheetTooNarrow {
            path: path.to_path_buf(),
            width: sheet.width(),
            frame_width: width,
        });
    }
    Ok((0..count)
        .map(|i| scale2x(&extract(sheet, i * width, 0, width, height)))
        .collect())
}

/// PNG files in `dir`, sorted by name.
fn sheet_files(dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let entries = std::fs::read_dir(dir).map_err(|source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "png"))
        .collect();
    files.sort();
    if files.is_empty() {
        return Err(AssetError::EmptyDirectory(dir.to_path_buf()));
    }
    Ok(files)
}

/// Load every sheet in `dir`. Directional sets register `{name}_right` as
/// drawn and `{name}_left` mirrored; otherwise the key is the file stem.
pub fn load_sprite_sheets(
    atlas: &mut FrameAtlas,
    dir: &Path,
    width: u32,
    height: u32,
    directional: bool,
) -> Result<SpriteSheets, AssetError> {
    let mut sheets = SpriteSheets::new();
    for path in sheet_files(dir)? {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
            continue;
        };
        let frames = slice_strip(&load_rgba(&path)?, width, height, &path)?;
        if directional {
            let left: Vec<SpriteFrame> = frames
                .iter()
                .map(|frame| atlas.add(imageops::flip_horizontal(frame)))
                .collect();
            let right: Vec<SpriteFrame> =
                frames.into_iter().map(|frame| atlas.add(frame)).collect();
            sheets.insert(format!("{name}_right"), right);
            sheets.insert(format!("{name}_left"), left);
        } else {
            let frames = frames.into_iter().map(|frame| atlas.add(frame)).collect();
            sheets.insert(name, frames);
        }
        tracing::debug!(sheet = %path.display(), "Loaded sprite sheet");
    }
    Ok(sheets)
}

/// The `size`x`size` terrain tile at `origin`, scaled 2x and cropped back
/// to `size`x`size`.
pub fn terrain_block(terrain: &RgbaImage, origin: (u32, u32), size: u32) -> RgbaImage {
    let tile = extract(terrain, origin.0, origin.1, size, size);
    extract(&scale2x(&tile), 0, 0, size, size)
}

pub fn resize_exact(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, FilterType::Nearest)
}

/// Load and prepare all level art described by `assets`.
pub fn load_level_assets(
    assets: &AssetConfig,
    level: &LevelConfig,
) -> Result<LoadedAssets, AssetError> {
    let root = Path::new(&assets.root);
    let mut atlas = FrameAtlas::new();

    let bg_image = load_rgba(&root.join(&assets.background))?;
    let (tile_width, tile_height) = bg_image.dimensions();
    let background = Background {
        frame: atlas.add(bg_image).id(),
        tile_width,
        tile_height,
    };

    let player = load_sprite_sheets(
        &mut atlas,
        &root.join(&assets.player_dir),
        assets.player_frame_size,
        assets.player_frame_size,
        true,
    )?;
    let fire = load_sprite_sheets(
        &mut atlas,
        &root.join(&assets.fire_dir),
        assets.fire_frame_width,
        assets.fire_frame_height,
        false,
    )?;

    let size = level.block_size.max(1) as u32;
    let terrain = load_rgba(&root.join(&assets.terrain))?;
    let block = atlas.add(terrain_block(&terrain, assets.block_origin, size));

    let flag_image = load_rgba(&root.join(&assets.flag))?;
    let flag = atlas.add(resize_exact(
        &flag_image,
        level.flag.width,
        level.flag.height,
    ));

    tracing::info!(
        frames = atlas.len(),
        player_sheets = player.len(),
        fire_sheets = fire.len(),
        "Assets loaded"
    );

    Ok(LoadedAssets {
        atlas,
        sprites: LevelSprites {
            player,
            fire,
            block,
            flag,
        },
        background,
    })
}
