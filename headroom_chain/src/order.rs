// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading-order key: the total order behind chain construction.
//!
//! ## Overview
//!
//! Focusable elements are ranked by ascending vertical position, then
//! ascending horizontal position, of their window-space frames. This matches
//! natural reading order regardless of declaration order in the view tree.
//!
//! Precondition: coordinates should be finite (no NaN) for meaningful
//! ordering. If NaN is encountered, the comparison falls back to `Equal` so
//! the stable sort preserves input order.

use kurbo::Rect;

/// Sort key for one element's position in the focus chain.
///
/// Built from a frame's top-left corner via [`ReadingOrderKey::from_frame`].
/// Ordering is top-first, then left; ties are left to the stable sort.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReadingOrderKey {
    /// Window-space y of the frame's top edge.
    pub top: f64,
    /// Window-space x of the frame's leading edge.
    pub left: f64,
}

impl ReadingOrderKey {
    /// Key for a window-space frame.
    pub fn from_frame(frame: Rect) -> Self {
        Self {
            top: frame.y0,
            left: frame.x0,
        }
    }
}

impl Eq for ReadingOrderKey {}

impl Ord for ReadingOrderKey {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        use core::cmp::Ordering::Equal;
        match self.top.partial_cmp(&other.top).unwrap_or(Equal) {
            Equal => self.left.partial_cmp(&other.left).unwrap_or(Equal),
            ord => ord,
        }
    }
}

impl PartialOrd for ReadingOrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(Ord::cmp(self, other))
    }
}
