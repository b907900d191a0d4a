// File: crates/benchplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area left inside a `width` x `height` surface once `insets` are removed.
    /// Never collapses below one pixel in either direction.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_respects_margins() {
        let r = RectI32::inset(1024, 640, &Insets::new(80, 20, 50, 60));
        assert_eq!(r, RectI32::from_ltrb(80, 50, 1004, 580));
        assert_eq!((r.width(), r.height()), (924, 530));
    }

    #[test]
    fn inset_never_collapses() {
        let r = RectI32::inset(10, 10, &Insets::new(80, 20, 50, 60));
        assert_eq!((r.width(), r.height()), (1, 1));
    }
}
