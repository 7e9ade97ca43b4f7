// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus chain: the deterministic ordering of a screen's focusable elements.
//!
//! ## Overview
//!
//! A [`FocusChain`] is built from pre-resolved entries — element handles with
//! their window-space frames. It does not perform discovery; feed it entries
//! (for example from a host enumeration filtered to enabled, editable
//! elements) and it yields reading order, the current position, and the
//! previous/next neighbors.
//!
//! The chain is rebuilt whole whenever the element set might have changed (a
//! new focus target, a rotation); it is never patched incrementally.
//!
//! ## Minimal example
//!
//! ```
//! use headroom_chain::chain::{ChainEntry, FocusChain};
//! use headroom_host::ElementId;
//! use kurbo::Rect;
//!
//! let entries = vec![
//!     ChainEntry { element: ElementId(1), frame: Rect::new(0.0, 100.0, 100.0, 140.0) },
//!     ChainEntry { element: ElementId(2), frame: Rect::new(0.0, 200.0, 100.0, 240.0) },
//!     ChainEntry { element: ElementId(3), frame: Rect::new(0.0, 50.0, 100.0, 90.0) },
//! ];
//! let chain = FocusChain::build(entries, ElementId(1));
//! assert_eq!(chain.prev(), Some(ElementId(3)));
//! assert_eq!(chain.next(), Some(ElementId(2)));
//! ```

use alloc::vec::Vec;

use headroom_host::ElementId;
use kurbo::Rect;

use crate::order::ReadingOrderKey;

/// One pre-resolved chain candidate: an element and its window-space frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainEntry {
    /// The focusable element.
    pub element: ElementId,
    /// Its frame in window coordinates at build time.
    pub frame: Rect,
}

/// An ordered sequence of focusable elements plus the current position.
///
/// Invariant: entries are non-decreasing in [`ReadingOrderKey`] — ascending
/// top, then ascending left. The current index is `None` when the focused
/// element was not among the entries (for example, inserted but not yet laid
/// out); neighbor lookups then return `None` and callers treat the chain as
/// absent for rewiring purposes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusChain {
    entries: Vec<ChainEntry>,
    current: Option<usize>,
}

impl FocusChain {
    /// Build a chain from pre-resolved entries, sorted into reading order,
    /// with the current position at `focused` (or `None` if absent).
    pub fn build(mut entries: Vec<ChainEntry>, focused: ElementId) -> Self {
        entries.sort_by(|a, b| {
            ReadingOrderKey::from_frame(a.frame).cmp(&ReadingOrderKey::from_frame(b.frame))
        });
        let current = entries.iter().position(|e| e.element == focused);
        Self { entries, current }
    }

    /// The sorted entries.
    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    /// Number of elements in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chain has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The element at the current position, if one is set.
    pub fn current(&self) -> Option<ElementId> {
        self.current.map(|i| self.entries[i].element)
    }

    /// Move the current position to `element`. Returns whether it was found;
    /// on a miss the current position becomes `None`.
    pub fn retarget(&mut self, element: ElementId) -> bool {
        self.current = self.entries.iter().position(|e| e.element == element);
        self.current.is_some()
    }

    /// The neighbor before the current position. `None` at the first
    /// position or when no position is set.
    pub fn prev(&self) -> Option<ElementId> {
        let i = self.current?;
        (i > 0).then(|| self.entries[i - 1].element)
    }

    /// The neighbor after the current position. `None` at the last position
    /// or when no position is set.
    pub fn next(&self) -> Option<ElementId> {
        let i = self.current?;
        self.entries.get(i + 1).map(|e| e.element)
    }

    /// Both neighbors at once, the shape the toolbar binds to.
    pub fn neighbors(&self) -> (Option<ElementId>, Option<ElementId>) {
        (self.prev(), self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn entry(id: u64, top: f64) -> ChainEntry {
        ChainEntry {
            element: ElementId(id),
            frame: Rect::new(0.0, top, 100.0, top + 40.0),
        }
    }

    fn entry_at(id: u64, top: f64, left: f64) -> ChainEntry {
        ChainEntry {
            element: ElementId(id),
            frame: Rect::new(left, top, left + 100.0, top + 40.0),
        }
    }

    // Three inputs at y=100, y=200, y=50, declared in that order, must come
    // out as [y=50, y=100, y=200].
    #[test]
    fn declaration_order_is_irrelevant() {
        let chain = FocusChain::build(
            vec![entry(1, 100.0), entry(2, 200.0), entry(3, 50.0)],
            ElementId(1),
        );
        let order: Vec<u64> = chain.entries().iter().map(|e| e.element.0).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn order_is_nondecreasing_in_reading_key() {
        let chain = FocusChain::build(
            vec![
                entry_at(1, 100.0, 50.0),
                entry_at(2, 100.0, 10.0),
                entry_at(3, 40.0, 200.0),
                entry_at(4, 250.0, 0.0),
            ],
            ElementId(2),
        );
        let keys: Vec<ReadingOrderKey> = chain
            .entries()
            .iter()
            .map(|e| ReadingOrderKey::from_frame(e.frame))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]), "chain must be sorted");
        let order: Vec<u64> = chain.entries().iter().map(|e| e.element.0).collect();
        assert_eq!(order, vec![3, 2, 1, 4]);
    }

    // prev is None iff current is first or unset; next is None iff current is
    // last or unset.
    #[test]
    fn boundary_invariant() {
        let entries = vec![entry(1, 10.0), entry(2, 20.0), entry(3, 30.0)];

        let first = FocusChain::build(entries.clone(), ElementId(1));
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(ElementId(2)));

        let middle = FocusChain::build(entries.clone(), ElementId(2));
        assert_eq!(middle.prev(), Some(ElementId(1)));
        assert_eq!(middle.next(), Some(ElementId(3)));

        let last = FocusChain::build(entries.clone(), ElementId(3));
        assert_eq!(last.prev(), Some(ElementId(2)));
        assert_eq!(last.next(), None);

        let unset = FocusChain::build(entries, ElementId(99));
        assert_eq!(unset.current(), None);
        assert_eq!(unset.prev(), None);
        assert_eq!(unset.next(), None);
    }

    #[test]
    fn missing_focused_element_builds_chain_without_position() {
        let chain = FocusChain::build(vec![entry(1, 10.0), entry(2, 20.0)], ElementId(7));
        assert_eq!(chain.len(), 2, "chain is rebuilt without the element");
        assert_eq!(chain.current(), None);
    }

    #[test]
    fn retarget_moves_position_and_reports_misses() {
        let mut chain = FocusChain::build(vec![entry(1, 10.0), entry(2, 20.0)], ElementId(1));
        assert!(chain.retarget(ElementId(2)));
        assert_eq!(chain.current(), Some(ElementId(2)));
        assert!(!chain.retarget(ElementId(9)));
        assert_eq!(chain.current(), None);
    }

    #[test]
    fn equal_tops_order_by_left() {
        let chain = FocusChain::build(
            vec![entry_at(1, 100.0, 200.0), entry_at(2, 100.0, 16.0)],
            ElementId(2),
        );
        let order: Vec<u64> = chain.entries().iter().map(|e| e.element.0).collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(chain.next(), Some(ElementId(1)));
    }

    #[test]
    fn single_element_has_no_neighbors() {
        let chain = FocusChain::build(vec![entry(1, 10.0)], ElementId(1));
        assert_eq!(chain.neighbors(), (None, None));
    }

    #[test]
    fn empty_chain() {
        let chain = FocusChain::build(Vec::new(), ElementId(1));
        assert!(chain.is_empty());
        assert_eq!(chain.current(), None);
        assert_eq!(chain.neighbors(), (None, None));
    }
}
