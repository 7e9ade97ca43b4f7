// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headroom Chain: deterministic focus ordering for form navigation.
//!
//! ## Overview
//!
//! This crate computes the focus chain — the reading-order sequence of a
//! screen's focusable elements — from pre-resolved entries. It does not
//! perform discovery. Instead, feed it [`ChainEntry`](crate::chain::ChainEntry)
//! items (element handles paired with their window-space frames, for example
//! from a host enumeration filtered to enabled, editable elements), and it
//! yields the order, the current position, and the previous/next neighbors.
//!
//! ## Ordering
//!
//! Entries are ranked by [`ReadingOrderKey`](crate::order::ReadingOrderKey):
//! ascending top, then ascending left, of each element's frame. Declaration
//! order in the view tree is irrelevant. The sort is stable and
//! NaN-tolerant — malformed coordinates compare `Equal` and keep their input
//! order rather than poisoning the sort.
//!
//! ## Toolbar
//!
//! [`Toolbar`](crate::toolbar::Toolbar) is the accessory-view capability
//! surface bound to the chain's neighbors. Its binding is replaced whole on
//! every focus change, never patched. Two visual presentations share the one
//! surface; the style tag carries no behavior.
//!
//! ## Workflow
//!
//! 1) Discover — enumerate focusable elements on the active screen and
//!    resolve their frames (the engine crate does this through its host
//!    seam).
//! 2) Build — [`FocusChain::build`](crate::chain::FocusChain::build) sorts
//!    the entries and locates the focused element. A focused element missing
//!    from the entries yields a chain with no current position; neighbor
//!    lookups return `None` and rewiring is skipped.
//! 3) Bind — hand [`FocusChain::neighbors`](crate::chain::FocusChain::neighbors)
//!    to [`Toolbar::bind`](crate::toolbar::Toolbar::bind).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod chain;
pub mod order;
pub mod toolbar;

pub use chain::{ChainEntry, FocusChain};
pub use order::ReadingOrderKey;
pub use toolbar::{TOOLBAR_HEIGHT, Toolbar, ToolbarAction, ToolbarStyle};
