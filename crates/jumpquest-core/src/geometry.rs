use serde::{Deserialize, Serialize};

/// Alpha values strictly above this are treated as solid pixels.
pub const ALPHA_THRESHOLD: u8 = 127;

/// Largest distance from the origin an entity may travel on either axis.
/// Leaves headroom so edge sums like `y + h` cannot overflow.
pub const COORD_LIMIT: i32 = 1 << 24;

/// Axis-aligned rectangle in integer pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move the rect so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Move the rect so its top edge sits at `top`.
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Overlap region of two rects, or `None` when they only touch or are apart.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Per-pixel opacity bitmap for one sprite frame, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// A mask with every pixel solid.
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// A mask with no solid pixels.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Build a mask from tightly packed RGBA8 pixels. A pixel is solid when
    /// its alpha exceeds [`ALPHA_THRESHOLD`]. Missing trailing pixels are
    /// treated as transparent.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        let len = (width * height) as usize;
        let mut bits = vec![false; len];
        for (bit, px) in bits.iter_mut().zip(rgba.chunks_exact(4)) {
            *bit = px[3] > ALPHA_THRESHOLD;
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is solid. Out-of-bounds reads are empty.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, solid: bool) {
        if x < self.width && y < self.height {
            self.bits[y as usize * self.width as usize + x as usize] = solid;
        }
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// First solid pixel shared with `other` placed at `offset` relative to
    /// this mask's origin, in this mask's coordinates.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (ox, oy) = offset;
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (self.width as i32).min(ox + other.width as i32);
        let y1 = (self.height as i32).min(oy + other.height as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - ox, y - oy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

/// Pixel-accurate collision between two positioned masks.
pub fn masks_collide(a_rect: &Rect, a_mask: &Mask, b_rect: &Rect, b_mask: &Mask) -> bool {
    if a_rect.intersection(b_rect).is_none() {
        return false;
    }
    let offset = (b_rect.x - a_rect.x, b_rect.y - a_rect.y);
    a_mask.overlap(b_mask, offset).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_snapping() {
        let mut r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);

        r.set_bottom(100);
        assert_eq!(r.y, 60);
        assert_eq!(r.bottom(), 100);

        r.set_top(5);
        assert_eq!(r.top(), 5);
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(a.intersection(&b).is_none());

        let c = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&c), Some(Rect::new(5, 5, 5, 5)));
    }

    #[test]
    fn alpha_threshold_is_exclusive() {
        // Two pixels: alpha 127 (transparent) and 128 (solid).
        let rgba = [0, 0, 0, 127, 0, 0, 0, 128];
        let mask = Mask::from_rgba(2, 1, &rgba);
        assert!(!mask.get(0, 0));
        assert!(mask.get(1, 0));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn short_pixel_buffer_leaves_tail_transparent() {
        let rgba = [255u8; 4];
        let mask = Mask::from_rgba(2, 2, &rgba);
        assert_eq!(mask.count(), 1);
        assert!(mask.get(0, 0));
        assert!(!mask.get(1, 1));
    }

    #[test]
    fn filled_masks_collide_when_rects_overlap() {
        let a = Mask::filled(10, 10);
        let b = Mask::filled(10, 10);
        assert!(masks_collide(
            &Rect::new(0, 0, 10, 10),
            &a,
            &Rect::new(9, 9, 10, 10),
            &b
        ));
        assert!(!masks_collide(
            &Rect::new(0, 0, 10, 10),
            &a,
            &Rect::new(10, 0, 10, 10),
            &b
        ));
    }

    #[test]
    fn transparent_pixels_do_not_collide() {
        // A ring: only the border is solid.
        let mut ring = Mask::empty(10, 10);
        for i in 0..10 {
            ring.set(i, 0, true);
            ring.set(i, 9, true);
            ring.set(0, i, true);
            ring.set(9, i, true);
        }
        let dot = Mask::filled(2, 2);

        // Dot inside the hollow centre: bounding boxes overlap, pixels don't.
        assert!(!masks_collide(
            &Rect::new(0, 0, 10, 10),
            &ring,
            &Rect::new(4, 4, 2, 2),
            &dot
        ));
        // Dot over the left border.
        assert!(masks_collide(
            &Rect::new(0, 0, 10, 10),
            &ring,
            &Rect::new(-1, 4, 2, 2),
            &dot
        ));
    }

    #[test]
    fn overlap_reports_first_shared_pixel() {
        let a = Mask::filled(4, 4);
        let mut b = Mask::empty(4, 4);
        b.set(3, 3, true);
        assert_eq!(a.overlap(&b, (-2, -2)), Some((1, 1)));
        assert_eq!(a.overlap(&b, (1, 1)), None);
    }
}
