// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout mode engine: keep the focused element visible above the keyboard.
//!
//! ## Overview
//!
//! Two mutually exclusive strategies:
//!
//! - **Offset** — translate the whole container upward by the overlap
//!   between the focused element and the keyboard.
//! - **Scroll** — grow a scrollable ancestor's bottom content inset and
//!   shrink the container's effective viewport so the platform's own
//!   scroll-into-view behavior does the positioning.
//!
//! The mode is decided once per keyboard presentation and cached, so focus
//! changes while the keyboard stays up never flip strategy — even when the
//! newly focused element sits inside a different scrollable container. Only
//! [`LayoutEngine::move_down`] clears the cached mode and the saved inset.
//!
//! All geometry is in window coordinates. Any missing ancestor or container
//! reference is treated as "nothing to adjust" and logged; nothing here is
//! fatal.

use alloc::vec::Vec;
use kurbo::{Rect, Vec2};

use headroom_host::{
    AnimationId, ElementId, FocusSession, HeightRule, Host, KeyboardContext, Timing, ViewId,
};

use crate::config::Config;

/// The strategy chosen for one keyboard presentation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LayoutMode {
    /// Translate the whole container.
    Offset,
    /// Shrink a scrollable container's effective viewport via inset.
    Scroll,
}

/// Owns the cached mode and the saved scroll inset for the active session.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    mode: Option<LayoutMode>,
    saved_inset: Option<(ViewId, f64)>,
}

impl LayoutEngine {
    /// Create an engine with no cached state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mode cached for the active presentation, if any.
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    /// Apply the avoidance strategy for a keyboard-show event.
    ///
    /// Decides the mode on the first call of a presentation and caches it;
    /// subsequent calls (focus changes under the same keyboard) re-apply the
    /// cached mode for the new session geometry.
    pub fn move_up<H: Host>(
        &mut self,
        host: &mut H,
        cfg: &Config,
        session: &FocusSession,
        ctx: &KeyboardContext,
    ) -> LayoutMode {
        let mode = match self.mode {
            Some(m) => m,
            None => {
                let m = self.decide(host, session, ctx);
                self.mode = Some(m);
                m
            }
        };
        match mode {
            LayoutMode::Offset => self.apply_offset(host, cfg, session, ctx),
            LayoutMode::Scroll => self.apply_scroll(host, cfg, session, ctx),
        }
        mode
    }

    /// Re-run the cached branch with current configuration, without
    /// re-deciding the mode. Used when `minimum_padding` changes while a
    /// session is active. No-op when no mode is cached.
    pub fn reapply<H: Host>(
        &mut self,
        host: &mut H,
        cfg: &Config,
        session: &FocusSession,
        ctx: &KeyboardContext,
    ) {
        match self.mode {
            Some(LayoutMode::Offset) => self.apply_offset(host, cfg, session, ctx),
            Some(LayoutMode::Scroll) => self.apply_scroll(host, cfg, session, ctx),
            None => {}
        }
    }

    /// Restore the container to its original frame and the saved inset to
    /// its original value, clearing the cached mode.
    ///
    /// Returns the restore animation's token for completion tracking, or
    /// `None` when there was nothing to animate (the caller then finishes
    /// the teardown immediately). This is the only place the cached mode and
    /// the saved inset are cleared.
    pub fn move_down<H: Host>(
        &mut self,
        host: &mut H,
        session: &FocusSession,
        timing: Timing,
    ) -> Option<AnimationId> {
        self.mode = None;
        if let Some((surface, inset)) = self.saved_inset.take() {
            host.set_bottom_inset(surface, inset);
        }
        match host.window_frame(session.container) {
            Some(_) => Some(host.animate_frame(session.container, session.container_frame, timing)),
            None => {
                log::warn!("move down: container is gone; nothing to restore");
                None
            }
        }
    }

    // Scan scrollable containers largest-area first; scroll mode needs one
    // taller than the keyboard with room to shrink.
    fn decide<H: Host>(
        &self,
        host: &H,
        session: &FocusSession,
        ctx: &KeyboardContext,
    ) -> LayoutMode {
        let keyboard_height = ctx.height();
        let mut surfaces: Vec<(ViewId, Rect)> = host
            .scroll_surfaces_on(session.screen)
            .into_iter()
            .filter_map(|v| host.window_frame(v).map(|f| (v, f)))
            .collect();
        surfaces.sort_by(|a, b| {
            b.1.area()
                .partial_cmp(&a.1.area())
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        for (surface, frame) in surfaces {
            if frame.height() > keyboard_height && can_shrink(host, surface) {
                return LayoutMode::Scroll;
            }
        }
        LayoutMode::Offset
    }

    fn apply_offset<H: Host>(
        &mut self,
        host: &mut H,
        cfg: &Config,
        session: &FocusSession,
        ctx: &KeyboardContext,
    ) {
        let Some(container_frame) = host.window_frame(session.container) else {
            log::warn!("offset mode: container frame unavailable; skipping");
            return;
        };
        let Some(element_frame) = host.element_frame(session.element) else {
            log::warn!("offset mode: focused element frame unavailable; skipping");
            return;
        };
        let padding = padding_for(host, cfg, session.element);
        let accessory = host.accessory_height(session.element);
        // Residual overlap, measured against the keyboard top in window
        // coordinates; equals the container-space formula while the
        // container sits at its original position.
        let overlap = element_frame.y1 - (ctx.top() + accessory) + padding;
        if overlap <= 0.0 {
            return;
        }
        let target = container_frame - Vec2::new(0.0, overlap);
        host.animate_frame(session.container, target, ctx.timing());
    }

    fn apply_scroll<H: Host>(
        &mut self,
        host: &mut H,
        cfg: &Config,
        session: &FocusSession,
        ctx: &KeyboardContext,
    ) {
        let Some(surface) = scroll_ancestor(host, session.element) else {
            // Decision was already cached; offset mode is not retried for
            // this event.
            log::warn!("scroll mode: no scrollable ancestor; nothing to adjust");
            return;
        };
        let padding = padding_for(host, cfg, session.element);
        let accessory = host.accessory_height(session.element);
        // Save the original inset once per session; re-applications keep the
        // first capture as the restoration value.
        if self.saved_inset.is_none() {
            self.saved_inset = Some((surface, host.bottom_inset(surface)));
        }
        host.set_bottom_inset(surface, padding + accessory);

        let metrics = host.window_metrics();
        let shrink = ctx.height() - metrics.safe_bottom_inset - cfg.viewport_correction;
        let original = session.container_frame;
        let target = Rect::new(original.x0, original.y0, original.x1, original.y1 - shrink);
        host.animate_frame(session.container, target, ctx.timing());
    }
}

// Minimum padding for an element: its own override, else the engine default.
fn padding_for<H: Host>(host: &H, cfg: &Config, element: ElementId) -> f64 {
    host.padding_override(element)
        .unwrap_or(cfg.minimum_padding)
}

// Nearest enclosing scrollable ancestor of a focusable element.
fn scroll_ancestor<H: Host>(host: &H, element: ElementId) -> Option<ViewId> {
    let mut view = host.view_of(element)?;
    while let Some(parent) = host.parent_of(view) {
        if host.is_scroll_surface(parent) {
            return Some(parent);
        }
        view = parent;
    }
    None
}

// Walk height relations transitively. A surface can shrink only when the
// walk terminates in a free rule; a relation cycle pins the heights to each
// other and counts as non-shrinkable.
fn can_shrink<H: Host>(host: &H, surface: ViewId) -> bool {
    let mut seen: Vec<ViewId> = Vec::new();
    let mut cur = surface;
    loop {
        if seen.contains(&cur) {
            return false;
        }
        seen.push(cur);
        match host.height_rule(cur) {
            HeightRule::Free => return true,
            HeightRule::Fixed => return false,
            HeightRule::TiedTo(next) => cur = next,
        }
    }
}
