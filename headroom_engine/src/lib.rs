// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headroom Engine: keep the focused input visible when the keyboard appears.
//!
//! ## Overview
//!
//! This crate is the stateful core of the Headroom workspace: a deterministic
//! state machine that reacts to focus changes, keyboard show/hide
//! notifications, and rotation signals delivered by a platform adapter, and
//! keeps form input usable underneath an on-screen keyboard.
//!
//! - [`Coordinator`](crate::coordinator::Coordinator) sequences events and
//!   owns the at-most-one Session/Context snapshot pair.
//! - [`ResponderManager`](crate::responder::ResponderManager) rebuilds the
//!   focus chain on every focus change, rewires default submit actions to
//!   advance the chain, and binds the toolbar.
//! - [`LayoutEngine`](crate::layout::LayoutEngine) picks one of two
//!   strategies per keyboard presentation — offset the whole container, or
//!   shrink a scrollable container's viewport — applies it with the event's
//!   animation parameters, and restores everything on hide.
//! - [`TapDismiss`](crate::tap::TapDismiss) scopes a tap-to-dismiss gesture
//!   to the active container.
//!
//! The engine talks to the platform only through the
//! [`Host`](headroom_host::Host) trait and never owns a UI object. Every
//! failure it can encounter (a stale element, a missing container, no
//! scrollable ancestor) is advisory: logged through the [`log`] facade and
//! ignored. No entry point panics.
//!
//! ## Wiring sketch
//!
//! The host adapter delivers its notifications to the coordinator's entry
//! points and executes the effects the engine issues back through the trait:
//!
//! ```
//! # use headroom_engine::coordinator::Coordinator;
//! # use headroom_host::*;
//! # use kurbo::Rect;
//! # struct MiniHost {
//! #     frames: Vec<Rect>,
//! #     submits: Vec<SubmitKind>,
//! #     accessories: Vec<Accessory>,
//! #     insets: Vec<f64>,
//! #     next_anim: u64,
//! # }
//! # impl MiniHost {
//! #     fn new() -> Self {
//! #         Self {
//! #             // View 0 is the container; views 1 and 2 back the inputs.
//! #             frames: vec![
//! #                 Rect::new(0.0, 0.0, 375.0, 812.0),
//! #                 Rect::new(16.0, 600.0, 359.0, 640.0),
//! #                 Rect::new(16.0, 700.0, 359.0, 740.0),
//! #             ],
//! #             submits: vec![SubmitKind::Default; 3],
//! #             accessories: vec![Accessory::Empty; 3],
//! #             insets: vec![0.0; 3],
//! #             next_anim: 1,
//! #         }
//! #     }
//! # }
//! # impl Host for MiniHost {
//! #     fn screen_of(&self, _: ElementId) -> Option<ScreenId> { Some(ScreenId(1)) }
//! #     fn container_of(&self, _: ScreenId) -> Option<ViewId> { Some(ViewId(0)) }
//! #     fn view_of(&self, element: ElementId) -> Option<ViewId> { Some(ViewId(element.0)) }
//! #     fn parent_of(&self, view: ViewId) -> Option<ViewId> {
//! #         (view.0 != 0).then_some(ViewId(0))
//! #     }
//! #     fn window_frame(&self, view: ViewId) -> Option<Rect> {
//! #         self.frames.get(view.0 as usize).copied()
//! #     }
//! #     fn window_metrics(&self) -> WindowMetrics {
//! #         WindowMetrics { bounds: Rect::new(0.0, 0.0, 375.0, 812.0), safe_bottom_inset: 0.0 }
//! #     }
//! #     fn elements_on(&self, _: ScreenId) -> Vec<ElementId> {
//! #         vec![ElementId(1), ElementId(2)]
//! #     }
//! #     fn element_flags(&self, _: ElementId) -> ElementFlags { ElementFlags::default() }
//! #     fn padding_override(&self, _: ElementId) -> Option<f64> { None }
//! #     fn focus(&mut self, _: ElementId) -> bool { true }
//! #     fn resign_focus(&mut self) {}
//! #     fn submit_kind(&self, element: ElementId) -> SubmitKind {
//! #         self.submits[element.0 as usize]
//! #     }
//! #     fn set_submit_kind(&mut self, element: ElementId, kind: SubmitKind) {
//! #         self.submits[element.0 as usize] = kind;
//! #     }
//! #     fn accessory(&self, element: ElementId) -> Accessory {
//! #         self.accessories[element.0 as usize]
//! #     }
//! #     fn set_accessory(&mut self, element: ElementId, accessory: Accessory) {
//! #         self.accessories[element.0 as usize] = accessory;
//! #     }
//! #     fn accessory_height(&self, element: ElementId) -> f64 {
//! #         match self.accessory(element) {
//! #             Accessory::Toolbar => headroom_chain::TOOLBAR_HEIGHT,
//! #             _ => 0.0,
//! #         }
//! #     }
//! #     fn scroll_surfaces_on(&self, _: ScreenId) -> Vec<ViewId> { Vec::new() }
//! #     fn is_scroll_surface(&self, _: ViewId) -> bool { false }
//! #     fn height_rule(&self, _: ViewId) -> HeightRule { HeightRule::Free }
//! #     fn bottom_inset(&self, view: ViewId) -> f64 { self.insets[view.0 as usize] }
//! #     fn set_bottom_inset(&mut self, view: ViewId, inset: f64) {
//! #         self.insets[view.0 as usize] = inset;
//! #     }
//! #     fn animate_frame(&mut self, view: ViewId, target: Rect, _: Timing) -> AnimationId {
//! #         self.frames[view.0 as usize] = target;
//! #         self.next_anim += 1;
//! #         AnimationId(self.next_anim)
//! #     }
//! #     fn attach_tap(&mut self, _: ViewId) -> GestureId { GestureId(1) }
//! #     fn detach_tap(&mut self, _: GestureId) {}
//! # }
//! let mut engine = Coordinator::new(MiniHost::new());
//! engine.enable();
//!
//! // The second input gains focus and the keyboard slides in.
//! engine.focus_gained(ElementId(2));
//! engine.keyboard_will_show(KeyboardContext {
//!     end_frame: Rect::new(0.0, 512.0, 375.0, 812.0),
//!     duration: 0.25,
//!     curve: Curve::Keyboard,
//! });
//!
//! // The container was translated up so the input clears the keyboard.
//! let container = engine.host().window_frame(ViewId(0)).unwrap();
//! assert!(container.y0 < 0.0);
//!
//! // The toolbar's "previous" control leads back to the first input.
//! assert_eq!(engine.toolbar().prev(), Some(ElementId(1)));
//! ```
//!
//! ## Ordering guarantees
//!
//! Events are processed strictly in arrival order; a focus change completes
//! its chain rebuild before any later keyboard event runs, because every
//! entry point is synchronous up to the animation boundary. A
//! keyboard-will-hide is authoritative and clears the cached layout state
//! even if the show animation has not visually completed — the hide target
//! simply overwrites it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod coordinator;
pub mod layout;
pub mod responder;
pub mod tap;
#[cfg(test)]
pub(crate) mod testbed;

pub use config::{Config, DEFAULT_MINIMUM_PADDING, DEFAULT_VIEWPORT_CORRECTION};
pub use coordinator::Coordinator;
pub use layout::{LayoutEngine, LayoutMode};
pub use responder::{ResponderManager, SubmitOutcome};
pub use tap::TapDismiss;
