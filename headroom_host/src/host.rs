// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability seam between the engine and the platform.
//!
//! ## Overview
//!
//! [`Host`] is the single trait a platform adapter implements. The engine is
//! generic over it and performs every read (hierarchy, geometry, element
//! capabilities) and every effect (focus transfer, accessory installation,
//! content insets, animated frame changes, tap gestures) through it.
//!
//! ## Contract
//!
//! - All methods are synchronous and run on the UI-affine thread.
//! - Lookups return `Option`; a miss means the id is stale or the object is
//!   gone, and the engine treats it as "nothing to do."
//! - Effect methods on unknown ids must be silent no-ops.
//! - [`Host::animate_frame`] schedules an animation and returns immediately;
//!   the host reports completion later, on the same thread, by passing the
//!   returned [`AnimationId`] to the coordinator's `animation_finished`.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{
    Accessory, AnimationId, ElementFlags, ElementId, GestureId, HeightRule, ScreenId, SubmitKind,
    Timing, ViewId, WindowMetrics,
};

/// Platform adapter the engine drives.
///
/// Query methods take `&self`; effect methods take `&mut self`. Hosts are
/// expected to deliver the engine's event entry points (`focus_gained`,
/// `keyboard_will_show`, ...) from their own notification plumbing; this
/// trait is the other direction of that conversation.
pub trait Host {
    // --- hierarchy and geometry ---

    /// The screen owning a focusable element, if it is attached to one.
    fn screen_of(&self, element: ElementId) -> Option<ScreenId>;

    /// The container view whose frame the engine manipulates for a screen.
    fn container_of(&self, screen: ScreenId) -> Option<ViewId>;

    /// The view backing a focusable element.
    fn view_of(&self, element: ElementId) -> Option<ViewId>;

    /// The parent of a view, or `None` at a root.
    fn parent_of(&self, view: ViewId) -> Option<ViewId>;

    /// A view's current frame in window coordinates.
    fn window_frame(&self, view: ViewId) -> Option<Rect>;

    /// Window bounds and safe-area geometry.
    fn window_metrics(&self) -> WindowMetrics;

    /// A focusable element's current frame in window coordinates.
    ///
    /// Provided in terms of [`Host::view_of`] and [`Host::window_frame`];
    /// hosts with a cheaper path may override it.
    fn element_frame(&self, element: ElementId) -> Option<Rect> {
        self.window_frame(self.view_of(element)?)
    }

    // --- focusable enumeration and capabilities ---

    /// All focusable elements on a screen, in declaration order. The engine
    /// re-sorts them into reading order; hosts need not order them.
    fn elements_on(&self, screen: ScreenId) -> Vec<ElementId>;

    /// Capability flags of an element. Unknown ids report empty flags.
    fn element_flags(&self, element: ElementId) -> ElementFlags;

    /// An element's custom minimum keyboard padding, if it declares one.
    fn padding_override(&self, element: ElementId) -> Option<f64>;

    // --- focus effects ---

    /// Request input focus for an element. Returns whether the host accepted.
    ///
    /// An accepted transfer is expected to come back to the engine as a
    /// `focus_gained` notification through the host's own plumbing.
    fn focus(&mut self, element: ElementId) -> bool;

    /// Resign focus from whatever currently holds it.
    fn resign_focus(&mut self);

    // --- submit capability ---

    /// The element's current return-key semantics.
    fn submit_kind(&self, element: ElementId) -> SubmitKind;

    /// Replace the element's return-key semantics.
    fn set_submit_kind(&mut self, element: ElementId, kind: SubmitKind);

    // --- accessory capability ---

    /// What occupies the element's input accessory slot.
    fn accessory(&self, element: ElementId) -> Accessory;

    /// Install or clear the element's input accessory.
    fn set_accessory(&mut self, element: ElementId, accessory: Accessory);

    /// Height in points of whatever accessory is installed on the element,
    /// `0.0` when the slot is empty. For the engine toolbar this is
    /// typically `headroom_chain::TOOLBAR_HEIGHT`; the layout formulas
    /// consume this value rather than assuming it.
    fn accessory_height(&self, element: ElementId) -> f64;

    // --- scroll surfaces ---

    /// All scrollable containers on a screen, in any order.
    fn scroll_surfaces_on(&self, screen: ScreenId) -> Vec<ViewId>;

    /// Whether a view is a scrollable container.
    fn is_scroll_surface(&self, view: ViewId) -> bool;

    /// The view's height constraint, one link of the relation graph the
    /// engine walks to decide shrinkability.
    fn height_rule(&self, view: ViewId) -> HeightRule;

    /// A scroll surface's bottom content inset.
    fn bottom_inset(&self, view: ViewId) -> f64;

    /// Set a scroll surface's bottom content inset. Hosts apply the same
    /// value to the scroll-indicator inset.
    fn set_bottom_inset(&mut self, view: ViewId, inset: f64);

    // --- animation boundary ---

    /// Schedule an animated frame change and return a completion token.
    ///
    /// The effect is observed later on the same thread. A newer animation
    /// targeting the same view overwrites the in-flight target.
    fn animate_frame(&mut self, view: ViewId, target: Rect, timing: Timing) -> AnimationId;

    // --- tap gesture ---

    /// Attach a non-touch-cancelling tap recognizer to a container. Triggers
    /// come back to the coordinator's `tap_triggered` with the returned token.
    fn attach_tap(&mut self, container: ViewId) -> GestureId;

    /// Detach a previously attached tap recognizer.
    fn detach_tap(&mut self, gesture: GestureId);
}
