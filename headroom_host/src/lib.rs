// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headroom Host: identifiers, value types, and the platform seam for the
//! Headroom keyboard-avoidance engine.
//!
//! ## Overview
//!
//! This crate is the foundation of the Headroom workspace. It defines
//! everything the engine and a platform adapter need to agree on:
//!
//! - Opaque handles ([`ElementId`], [`ViewId`], [`ScreenId`]) minted by the
//!   host and resolved on demand. The engine never owns a UI object.
//! - Immutable snapshots: [`FocusSession`] (one keyboard presentation) and
//!   [`KeyboardContext`] (one event's keyboard geometry and animation
//!   parameters).
//! - Capability enums: [`SubmitKind`] (return-key semantics),
//!   [`Accessory`] (what occupies the accessory slot), [`HeightRule`]
//!   (height-constraint links), and [`ElementFlags`].
//! - The [`Host`] trait: the single seam through which the engine reads
//!   geometry and issues effects.
//!
//! ## Where this fits
//!
//! - `headroom_host` (this crate): shared vocabulary and the platform seam.
//! - `headroom_chain`: deterministic focus ordering and the toolbar surface.
//! - `headroom_engine`: the event coordinator, layout engine, and responder
//!   management built on both.
//!
//! Geometry uses [`kurbo`] rectangles in window coordinates throughout.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;
pub mod types;

pub use host::Host;
pub use types::{
    Accessory, AnimationId, Curve, ElementFlags, ElementId, FocusSession, GestureId, HeightRule,
    KeyboardContext, ScreenId, SubmitKind, Timing, ViewId, WindowMetrics,
};
