// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responder management: discovery, submit rewiring, and toolbar binding.
//!
//! ## Overview
//!
//! On every focus change the manager rebuilds the focus chain from scratch:
//! it enumerates the screen's focusable elements through the host, filters to
//! enabled editable ones, resolves frames, and hands the entries to
//! [`FocusChain`]. Nothing is patched incrementally.
//!
//! Two element capabilities are touched along the way, and both are undone on
//! release:
//!
//! - **Submit rewiring** — an element whose return-key semantics were left at
//!   [`SubmitKind::Default`] is rewired to advance the chain (or dismiss from
//!   the last position). The original value is saved once per element.
//! - **Accessory installation** — the toolbar is installed in the element's
//!   accessory slot, but only when the slot is empty; a host-installed
//!   accessory is never clobbered.

use alloc::vec::Vec;

use headroom_chain::{ChainEntry, FocusChain, Toolbar, ToolbarStyle};
use headroom_host::{Accessory, ElementFlags, ElementId, Host, ScreenId, SubmitKind};

use crate::config::Config;

/// What an engine-rewired submit resolves to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// Move focus to the next chain element.
    Advance(ElementId),
    /// Last element: resign focus.
    Dismiss,
}

/// Owns the chain, the toolbar binding, and the saved per-element state.
#[derive(Clone, Debug)]
pub struct ResponderManager {
    chain: Option<FocusChain>,
    toolbar: Toolbar,
    saved_submit: Vec<(ElementId, SubmitKind)>,
    installed: Vec<ElementId>,
}

impl ResponderManager {
    /// Create a manager with an unbound toolbar of the given style.
    pub fn new(style: ToolbarStyle) -> Self {
        Self {
            chain: None,
            toolbar: Toolbar::new(style),
            saved_submit: Vec::new(),
            installed: Vec::new(),
        }
    }

    /// The current chain, if one is built.
    pub fn chain(&self) -> Option<&FocusChain> {
        self.chain.as_ref()
    }

    /// The toolbar surface.
    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// The chain's current element, if set.
    pub fn current(&self) -> Option<ElementId> {
        self.chain.as_ref()?.current()
    }

    /// Rebuild the chain around a newly focused element and rewire its
    /// capabilities.
    pub fn update<H: Host>(&mut self, host: &mut H, cfg: &Config, element: ElementId) {
        let Some(screen) = host.screen_of(element) else {
            log::warn!("focus update: element has no owning screen; clearing chain");
            self.chain = None;
            self.toolbar.clear();
            return;
        };

        let chain = FocusChain::build(discover(host, screen), element);
        if cfg.debug_logging {
            log::debug!(
                "focus chain rebuilt: {} entries, current {:?}",
                chain.len(),
                chain.current()
            );
        }

        let (prev, next) = chain.neighbors();
        self.toolbar.bind(prev, next);

        // Rewiring needs a known position; an element missing from its own
        // chain (inserted but not yet laid out) is treated as "no chain".
        if chain.current().is_some() {
            self.rewire_submit(host, element, next.is_some());
        }
        self.sync_accessory(host, cfg, element);

        self.chain = Some(chain);
    }

    /// Restore every touched element and drop the chain. A no-op when
    /// nothing is focused or saved.
    pub fn release<H: Host>(&mut self, host: &mut H) {
        for (element, original) in self.saved_submit.drain(..) {
            host.set_submit_kind(element, original);
        }
        for element in self.installed.drain(..) {
            if host.accessory(element) == Accessory::Toolbar {
                host.set_accessory(element, Accessory::Empty);
            }
        }
        self.chain = None;
        self.toolbar.clear();
    }

    /// Recompute ordering and the current index after a rotation. Layout
    /// state, submit wiring, and accessories are untouched; the toolbar is
    /// re-bound to the recomputed neighbors.
    pub fn rebuild_for_rotation<H: Host>(&mut self, host: &mut H) {
        let Some(element) = self.current() else {
            return;
        };
        let Some(screen) = host.screen_of(element) else {
            log::warn!("rotation: focused element lost its screen; clearing chain");
            self.chain = None;
            self.toolbar.clear();
            return;
        };
        let chain = FocusChain::build(discover(host, screen), element);
        let (prev, next) = chain.neighbors();
        self.toolbar.bind(prev, next);
        self.chain = Some(chain);
    }

    /// Resolve a submit event on an element the engine rewired. `None` when
    /// the engine does not own this element's submit behavior.
    pub fn submit_outcome(&self, element: ElementId) -> Option<SubmitOutcome> {
        if !self.saved_submit.iter().any(|(e, _)| *e == element) {
            return None;
        }
        let chain = self.chain.as_ref()?;
        if chain.current() != Some(element) {
            return None;
        }
        Some(match chain.next() {
            Some(next) => SubmitOutcome::Advance(next),
            None => SubmitOutcome::Dismiss,
        })
    }

    /// Remove every engine-installed accessory, keeping submit wiring and
    /// the chain. Used when the toolbar is disabled mid-session.
    pub fn strip_accessories<H: Host>(&mut self, host: &mut H) {
        for element in self.installed.drain(..) {
            if host.accessory(element) == Accessory::Toolbar {
                host.set_accessory(element, Accessory::Empty);
            }
        }
    }

    // Override a default submit action to advance the chain, saving the
    // original once. An element the engine already rewired is re-pointed
    // when its neighbors change; a host-customized action is left alone.
    fn rewire_submit<H: Host>(&mut self, host: &mut H, element: ElementId, has_next: bool) {
        let kind = host.submit_kind(element);
        let engine_owned = self.saved_submit.iter().any(|(e, _)| *e == element);
        if !engine_owned {
            if kind != SubmitKind::Default {
                return;
            }
            self.saved_submit.push((element, kind));
        }
        host.set_submit_kind(
            element,
            if has_next {
                SubmitKind::Advance
            } else {
                SubmitKind::Dismiss
            },
        );
    }

    fn sync_accessory<H: Host>(&mut self, host: &mut H, cfg: &Config, element: ElementId) {
        if cfg.toolbar_enabled {
            if host.accessory(element) == Accessory::Empty {
                host.set_accessory(element, Accessory::Toolbar);
                if !self.installed.contains(&element) {
                    self.installed.push(element);
                }
            }
        } else if host.accessory(element) == Accessory::Toolbar {
            host.set_accessory(element, Accessory::Empty);
            self.installed.retain(|e| *e != element);
        }
    }
}

// Enumerate a screen's focusable elements and resolve their frames. Elements
// missing either capability flag, or without a resolvable frame, drop out.
fn discover<H: Host>(host: &H, screen: ScreenId) -> Vec<ChainEntry> {
    let mut entries = Vec::new();
    for element in host.elements_on(screen) {
        let flags = host.element_flags(element);
        if !flags.contains(ElementFlags::ENABLED | ElementFlags::EDITABLE) {
            continue;
        }
        let Some(frame) = host.element_frame(element) else {
            continue;
        };
        entries.push(ChainEntry { element, frame });
    }
    entries
}
