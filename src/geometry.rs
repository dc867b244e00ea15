//! Axis-aligned rectangles and the overlap test used for every collision.

/// Rectangle in playfield coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, w: f32, h: f32) -> Self {
        Rect { left, top, w, h }
    }

    /// Rectangle of size `w`×`h` centred on (`cx`, `cy`).
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Rect {
            left: cx - w / 2.0,
            top: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.h
    }
}

/// True when `a` and `b` share interior area. Rectangles that only touch
/// along an edge or a corner do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right() <= b.left
        || a.left >= b.right()
        || a.bottom() <= b.top
        || a.top >= b.bottom())
}
