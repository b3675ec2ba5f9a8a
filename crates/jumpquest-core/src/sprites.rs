use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SpriteError;
use crate::geometry::Mask;

/// Opaque handle to a frame bitmap owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

/// One animation frame: the host's handle plus its precomputed collision mask.
#[derive(Debug, Clone)]
pub struct SpriteFrame {
    id: FrameId,
    mask: Arc<Mask>,
}

impl SpriteFrame {
    pub fn new(id: FrameId, mask: Mask) -> Self {
        Self {
            id,
            mask: Arc::new(mask),
        }
    }

    /// A fully opaque frame, used for untextured geometry and in tests.
    pub fn solid(id: FrameId, width: u32, height: u32) -> Self {
        Self::new(id, Mask::filled(width, height))
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    pub fn mask(&self) -> &Arc<Mask> {
        &self.mask
    }
}

/// Named animation strips, e.g. `run_left` or `on`.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheets {
    sheets: HashMap<String, Vec<SpriteFrame>>,
}

impl SpriteSheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, frames: Vec<SpriteFrame>) {
        self.sheets.insert(name.into(), frames);
    }

    pub fn get(&self, name: &str) -> Option<&[SpriteFrame]> {
        self.sheets.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    /// Check that every name in `required` maps to a non-empty strip.
    pub fn require<'a>(
        &self,
        required: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), SpriteError> {
        for name in required {
            match self.sheets.get(name) {
                None => return Err(SpriteError::MissingSheet(name.to_string())),
                Some(frames) if frames.is_empty() => {
                    return Err(SpriteError::EmptySheet(name.to_string()));
                },
                Some(_) => {},
            }
        }
        Ok(())
    }
}

/// Frame index for a looping strip: `(counter / delay) % len`.
pub fn cycle_index(counter: u32, delay: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (counter / delay.max(1)) as usize % len
}
