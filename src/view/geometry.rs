//! Centralized geometry helpers for overlap detection and hit-testing
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested independently of the page model.

use serde::{Deserialize, Serialize};

// ============================================================================
// Layout Primitives
// ============================================================================

/// Axis-aligned bounding rectangle in page coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its `[left, top]–[right, bottom]` corners
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Separating-axis test on both axes.
    ///
    /// Two rectangles intersect unless one lies entirely above, below, left of
    /// or right of the other. Shared edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        let vertically = !(other.bottom() < self.top() || other.top() > self.bottom());
        let horizontally = !(other.right() < self.left() || other.left() > self.right());
        vertically && horizontally
    }
}
