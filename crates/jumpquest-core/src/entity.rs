use crate::geometry::{Mask, Rect, masks_collide};
use crate::sprites::{FrameId, SpriteFrame};

/// Position, size and visible frame shared by every drawable object.
///
/// The rect's size always equals the current frame's size, and the
/// collision mask is the frame's own mask, so swapping the frame is the only
/// way the mask changes.
#[derive(Debug, Clone)]
pub struct Body {
    rect: Rect,
    frame: SpriteFrame,
}

impl Body {
    pub fn new(x: i32, y: i32, frame: SpriteFrame) -> Self {
        let rect = Rect::new(x, y, frame.width() as i32, frame.height() as i32);
        Self { rect, frame }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }

    pub fn frame(&self) -> &SpriteFrame {
        &self.frame
    }

    pub fn mask(&self) -> &Mask {
        self.frame.mask()
    }

    /// Show `frame`, keeping the top-left corner in place.
    pub fn set_frame(&mut self, frame: &SpriteFrame) {
        self.frame = frame.clone();
        self.rect.w = frame.width() as i32;
        self.rect.h = frame.height() as i32;
    }
}

/// Drawable + collidable capability implemented by the player and every
/// obstacle variant.
pub trait Entity {
    fn body(&self) -> &Body;

    /// Dispatch tag: `"fire"`, `"flag"`, or `None` for plain geometry.
    fn name(&self) -> Option<&'static str> {
        None
    }

    fn rect(&self) -> Rect {
        self.body().rect()
    }

    fn frame_id(&self) -> FrameId {
        self.body().frame().id()
    }

    fn mask(&self) -> &Mask {
        self.body().mask()
    }
}

/// Pixel-accurate overlap test between two entities.
pub fn collide_mask(a: &dyn Entity, b: &dyn Entity) -> bool {
    masks_collide(&a.rect(), a.mask(), &b.rect(), b.mask())
}
