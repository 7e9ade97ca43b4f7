// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers and immutable value types shared between the engine and the host.
//!
//! ## Overview
//!
//! Everything here is a snapshot or an opaque handle. The engine never owns a
//! host object: identifiers are minted by the host, and every use goes back
//! through a [`Host`](crate::host::Host) lookup. A lookup that misses (a stale
//! id, a view removed mid-session) is an advisory no-op, never a fault.

use kurbo::Rect;

/// Opaque handle for a focusable element (a text field or text view).
///
/// Minted by the host; the engine never keeps an element alive. A stale id
/// simply fails its next lookup.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementId(pub u64);

/// Opaque handle for a view in the host hierarchy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ViewId(pub u64);

/// Opaque handle for a screen (a view-controller-equivalent).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ScreenId(pub u64);

/// Token for an animated frame change scheduled through
/// [`Host::animate_frame`](crate::host::Host::animate_frame).
///
/// The host reports completion by handing the token back to the engine's
/// `animation_finished` entry point.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationId(pub u64);

/// Token for an attached tap gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GestureId(pub u64);

bitflags::bitflags! {
    /// Capability flags of a focusable element.
    ///
    /// Only elements carrying both flags participate in the focus chain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element accepts user interaction.
        const ENABLED  = 0b0000_0001;
        /// Element currently accepts text editing.
        const EDITABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::ENABLED | Self::EDITABLE
    }
}

/// Animation easing descriptor carried by keyboard events.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Curve {
    /// Constant velocity.
    Linear,
    /// Accelerating from rest.
    EaseIn,
    /// Decelerating to rest.
    EaseOut,
    /// Accelerating then decelerating.
    EaseInOut,
    /// The platform's keyboard curve. Hosts map this onto whatever private
    /// curve their keyboard animation actually uses.
    #[default]
    Keyboard,
}

/// Animation parameters handed to the host animator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timing {
    /// Duration in seconds.
    pub duration: f64,
    /// Easing descriptor.
    pub curve: Curve,
}

impl Timing {
    /// Zero-duration timing for non-animated restoration paths (engine
    /// teardown on disable).
    pub const IMMEDIATE: Self = Self {
        duration: 0.0,
        curve: Curve::Linear,
    };
}

/// One keyboard event's geometry and animation parameters.
///
/// Rebuilt from each show/hide notification; never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyboardContext {
    /// Target keyboard rectangle in window coordinates.
    pub end_frame: Rect,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Animation easing descriptor.
    pub curve: Curve,
}

impl KeyboardContext {
    /// Window-space y of the keyboard's top edge.
    pub fn top(&self) -> f64 {
        self.end_frame.y0
    }

    /// Height of the keyboard rectangle.
    pub fn height(&self) -> f64 {
        self.end_frame.height()
    }

    /// The animation parameters of this event.
    pub fn timing(&self) -> Timing {
        Timing {
            duration: self.duration,
            curve: self.curve,
        }
    }
}

/// The immutable record of one keyboard presentation.
///
/// Built by the coordinator when the keyboard is about to appear and held
/// until the hide animation completes. `container_frame` is the container's
/// window-space frame captured at session creation; it is the restoration
/// target when the keyboard goes away.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusSession {
    /// The focused element.
    pub element: ElementId,
    /// The screen owning the focused element.
    pub screen: ScreenId,
    /// The container whose frame is manipulated.
    pub container: ViewId,
    /// The container's original window-space frame.
    pub container_frame: Rect,
}

/// Return-key semantics of a focusable element, as seen and set through the
/// capability surface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SubmitKind {
    /// The host never configured the submit action. Only this value is
    /// eligible for engine rewiring.
    #[default]
    Default,
    /// Submit advances focus to the next chain element.
    Advance,
    /// Submit resigns focus.
    Dismiss,
    /// The host installed its own submit behavior; the engine leaves it alone.
    Custom,
}

/// What currently occupies an element's input accessory slot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Accessory {
    /// Nothing installed.
    #[default]
    Empty,
    /// A host-installed accessory. The engine never clobbers it.
    Host,
    /// This engine's toolbar.
    Toolbar,
}

/// A view's height constraint, as described by the host layout system.
///
/// The engine walks `TiedTo` links transitively to decide whether a scroll
/// surface has room to shrink.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum HeightRule {
    /// Height is not pinned; the view can shrink.
    #[default]
    Free,
    /// Height is pinned by a required, non-shrinkable constraint.
    Fixed,
    /// Height is tied by a required relation to another view; the answer is
    /// whatever that view's rule resolves to.
    TiedTo(ViewId),
}

/// Window geometry the layout engine needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowMetrics {
    /// The window bounds in window coordinates.
    pub bounds: Rect,
    /// Bottom safe-area inset (home indicator, tab bar remnant).
    pub safe_bottom_inset: f64,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            safe_bottom_inset: 0.0,
        }
    }
}
