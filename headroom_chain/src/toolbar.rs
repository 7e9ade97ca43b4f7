// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar surface: previous/next/done controls bound to the focused element.
//!
//! ## Overview
//!
//! The toolbar is the accessory view shown above the keyboard. Two
//! presentations share this one capability surface; [`ToolbarStyle`] is a
//! pure rendering tag the host's renderer consults — there is no behavioral
//! divergence between them.
//!
//! [`Toolbar::bind`] replaces the whole binding on every focus change; the
//! binding is never patched in place, which keeps stale-neighbor bugs out by
//! construction.

use headroom_host::ElementId;

/// Height in points the toolbar occupies above the keyboard.
///
/// Consumed by the layout formulas while an engine accessory is installed on
/// the focused element.
pub const TOOLBAR_HEIGHT: f64 = 44.0;

/// Visual presentation of the toolbar; no behavioral difference.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ToolbarStyle {
    /// The background mask extends down behind the keyboard for full-bleed
    /// visual continuity.
    #[default]
    FullBleed,
    /// The background mask is a floating surface sized to the toolbar.
    Floating,
}

/// A control the user activated on the toolbar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ToolbarAction {
    /// Move focus to the previous chain element.
    Previous,
    /// Move focus to the next chain element.
    Next,
    /// Resign all focus.
    Done,
}

/// The toolbar's control surface and its current neighbor binding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toolbar {
    style: ToolbarStyle,
    prev: Option<ElementId>,
    next: Option<ElementId>,
}

impl Toolbar {
    /// Create an unbound toolbar with the given presentation.
    pub fn new(style: ToolbarStyle) -> Self {
        Self {
            style,
            prev: None,
            next: None,
        }
    }

    /// The presentation tag the host renderer consults.
    pub fn style(&self) -> ToolbarStyle {
        self.style
    }

    /// Replace the neighbor binding. Control enablement is derived from
    /// presence: a missing neighbor disables its control.
    pub fn bind(&mut self, prev: Option<ElementId>, next: Option<ElementId>) {
        self.prev = prev;
        self.next = next;
    }

    /// Clear the binding; both navigation controls disable.
    pub fn clear(&mut self) {
        self.prev = None;
        self.next = None;
    }

    /// The bound previous target.
    pub fn prev(&self) -> Option<ElementId> {
        self.prev
    }

    /// The bound next target.
    pub fn next(&self) -> Option<ElementId> {
        self.next
    }

    /// Whether the "previous" control is enabled.
    pub fn previous_enabled(&self) -> bool {
        self.prev.is_some()
    }

    /// Whether the "next" control is enabled.
    pub fn next_enabled(&self) -> bool {
        self.next.is_some()
    }

    /// Resolve an activated control to its focus target. `Done` and disabled
    /// controls resolve to `None`; the caller requests global resignation for
    /// `Done`.
    pub fn target_of(&self, action: ToolbarAction) -> Option<ElementId> {
        match action {
            ToolbarAction::Previous => self.prev,
            ToolbarAction::Next => self.next,
            ToolbarAction::Done => None,
        }
    }
}
