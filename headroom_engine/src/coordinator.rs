// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event coordinator: the engine's top-level state machine.
//!
//! ## Overview
//!
//! The coordinator owns the host adapter and sequences every external event
//! into the other components: focus changes drive the responder manager,
//! keyboard events drive the layout engine and the tap-dismiss controller,
//! and the toolbar is driven through the responder's binding.
//!
//! It alone creates, replaces, and clears the engine-wide Session, Context,
//! and cached mode; every other component treats them as read-only
//! snapshots. A new show event replaces Session and Context atomically
//! before any layout call, so overlapping show→hide sequences cannot
//! interleave state.
//!
//! ## Event delivery
//!
//! All entry points are synchronous and run on the UI-affine thread, in
//! arrival order. The only asynchronous boundary is the host animator:
//! `move_up`/`move_down` schedule animations and return, and the host
//! reports the hide animation's completion through
//! [`Coordinator::animation_finished`].
//!
//! While disabled the engine is fully inert: every entry point returns
//! without reading the host.

use headroom_chain::{Toolbar, ToolbarAction};
use headroom_host::{
    AnimationId, ElementId, FocusSession, GestureId, Host, KeyboardContext, Timing,
};

use crate::config::Config;
use crate::layout::{LayoutEngine, LayoutMode};
use crate::responder::{ResponderManager, SubmitOutcome};
use crate::tap::TapDismiss;

/// The engine instance. Construct one at application start and deliver the
/// host's notifications to its entry points.
pub struct Coordinator<H: Host> {
    host: H,
    config: Config,
    responder: ResponderManager,
    layout: LayoutEngine,
    tap: TapDismiss,
    focused: Option<ElementId>,
    session: Option<FocusSession>,
    context: Option<KeyboardContext>,
    pending_hide: Option<AnimationId>,
}

impl<H: Host> core::fmt::Debug for Coordinator<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coordinator")
            .field("enabled", &self.config.enabled)
            .field("focused", &self.focused)
            .field("session", &self.session)
            .field("mode", &self.layout.mode())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Coordinator<H> {
    /// Create a disabled coordinator with default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, Config::default())
    }

    /// Create a coordinator with explicit configuration.
    pub fn with_config(host: H, config: Config) -> Self {
        let responder = ResponderManager::new(config.toolbar_style);
        Self {
            host,
            config,
            responder,
            layout: LayoutEngine::new(),
            tap: TapDismiss::new(),
            focused: None,
            session: None,
            context: None,
            pending_hide: None,
        }
    }

    /// The host adapter.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host adapter, for the platform layer's own
    /// bookkeeping. Engine state is only consistent when mutations flow
    /// through the event entry points.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the engine is processing events.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// The active session, if a keyboard presentation is in progress.
    pub fn session(&self) -> Option<&FocusSession> {
        self.session.as_ref()
    }

    /// The layout mode cached for the active presentation. Diagnostic.
    pub fn mode(&self) -> Option<LayoutMode> {
        self.layout.mode()
    }

    /// The toolbar surface, for the host's renderer.
    pub fn toolbar(&self) -> &Toolbar {
        self.responder.toolbar()
    }

    /// Start processing events. Idempotent.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Stop processing events and tear down: release responder bindings,
    /// disarm the tap gesture, and restore any active layout without
    /// animation. Idempotent.
    pub fn disable(&mut self) {
        if !self.config.enabled {
            return;
        }
        self.config.enabled = false;
        self.responder.release(&mut self.host);
        self.tap.disarm(&mut self.host);
        if let Some(session) = self.session.take() {
            self.layout
                .move_down(&mut self.host, &session, Timing::IMMEDIATE);
        }
        self.context = None;
        self.pending_hide = None;
        self.focused = None;
    }

    /// A focusable element gained input focus.
    pub fn focus_gained(&mut self, element: ElementId) {
        if !self.config.enabled {
            return;
        }
        self.focused = Some(element);
        self.responder.update(&mut self.host, &self.config, element);
        if self.config.debug_logging {
            log::debug!("focus gained: {element:?}");
        }
    }

    /// A focusable element lost input focus. `next_pending` is true when the
    /// host knows another element is about to gain focus; bindings are
    /// released only when nothing is pending.
    pub fn focus_ended(&mut self, element: ElementId, next_pending: bool) {
        if !self.config.enabled || next_pending {
            return;
        }
        self.responder.release(&mut self.host);
        if self.focused == Some(element) {
            self.focused = None;
        }
        if self.config.debug_logging {
            log::debug!("focus ended: {element:?}");
        }
    }

    /// The keyboard is about to appear (or change frame) with the given
    /// geometry and animation parameters.
    pub fn keyboard_will_show(&mut self, ctx: KeyboardContext) {
        if !self.config.enabled {
            return;
        }
        // The host platform always has a focused element when the keyboard
        // appears; a miss here is a recoverable ordering glitch, not fatal.
        let Some(element) = self.focused else {
            log::warn!("keyboard will show with no focused element; ignoring");
            return;
        };
        let Some(screen) = self.host.screen_of(element) else {
            log::warn!("keyboard will show: focused element has no owning screen; ignoring");
            return;
        };
        let Some(container) = self.host.container_of(screen) else {
            log::warn!("keyboard will show: screen has no container; ignoring");
            return;
        };
        // Keep the original restoration target across mid-presentation show
        // events; the container's current frame may already be offset.
        let container_frame = match self.session {
            Some(s) if s.container == container => s.container_frame,
            _ => match self.host.window_frame(container) {
                Some(frame) => frame,
                None => {
                    log::warn!("keyboard will show: container frame unavailable; ignoring");
                    return;
                }
            },
        };
        // A superseding show cancels the pending hide completion so the
        // stale completion cannot clear the new session.
        self.pending_hide = None;
        let session = FocusSession {
            element,
            screen,
            container,
            container_frame,
        };
        self.session = Some(session);
        self.context = Some(ctx);
        if self.config.tap_to_dismiss {
            self.tap.arm(&mut self.host, container);
        }
        let mode = self
            .layout
            .move_up(&mut self.host, &self.config, &session, &ctx);
        if self.config.debug_logging {
            log::debug!("keyboard will show: {mode:?} mode, element {element:?}");
        }
    }

    /// The keyboard is about to disappear.
    ///
    /// The hide animation is authoritative: if the show animation for this
    /// session is still in flight, the hide target simply overwrites it.
    /// Under a rapid focus-then-blur sequence this can read as a brief
    /// double-animation flicker; that matches the behavior this engine is
    /// modeled on and is deliberately not "fixed" by cancelling the show.
    pub fn keyboard_will_hide(&mut self, ctx: KeyboardContext) {
        if !self.config.enabled {
            return;
        }
        let Some(session) = self.session else {
            log::warn!("keyboard will hide with no active session; ignoring");
            return;
        };
        self.context = Some(ctx);
        match self
            .layout
            .move_down(&mut self.host, &session, ctx.timing())
        {
            Some(id) => self.pending_hide = Some(id),
            // Nothing to animate; the presentation is over now.
            None => self.finish_hide(),
        }
    }

    /// The host animator finished an animation. Only the pending hide
    /// completion is meaningful; any other token is ignored.
    pub fn animation_finished(&mut self, id: AnimationId) {
        if self.pending_hide == Some(id) {
            self.finish_hide();
        }
    }

    /// The device rotated: recompute chain ordering and the current index.
    /// Layout state is left untouched.
    pub fn orientation_changed(&mut self) {
        if !self.config.enabled {
            return;
        }
        self.responder.rebuild_for_rotation(&mut self.host);
        if self.config.debug_logging {
            log::debug!("orientation changed: chain recomputed");
        }
    }

    /// The focused element's submit action (return key) fired.
    pub fn submit_pressed(&mut self, element: ElementId) {
        if !self.config.enabled {
            return;
        }
        match self.responder.submit_outcome(element) {
            Some(SubmitOutcome::Advance(next)) => {
                if !self.host.focus(next) {
                    log::warn!("submit advance: focus transfer to {next:?} rejected");
                }
            }
            Some(SubmitOutcome::Dismiss) => self.host.resign_focus(),
            None => {}
        }
    }

    /// A toolbar control was activated. Previous/next request focus transfer
    /// through the host, which re-enters the engine as a `focus_gained`
    /// notification; done requests global resignation.
    pub fn toolbar_action(&mut self, action: ToolbarAction) {
        if !self.config.enabled {
            return;
        }
        if action == ToolbarAction::Done {
            self.host.resign_focus();
            return;
        }
        let Some(target) = self.responder.toolbar().target_of(action) else {
            // Disabled control; nothing bound in that direction.
            return;
        };
        if !self.host.focus(target) {
            log::warn!("toolbar {action:?}: focus transfer to {target:?} rejected");
        }
    }

    /// The tap-to-dismiss gesture fired.
    pub fn tap_triggered(&mut self, gesture: GestureId) {
        if !self.config.enabled {
            return;
        }
        if self.tap.owns(gesture) {
            self.host.resign_focus();
        }
    }

    /// Change the engine-wide minimum padding. When a session is active the
    /// cached layout mode is re-applied immediately with the new value.
    pub fn set_minimum_padding(&mut self, padding: f64) {
        self.config.minimum_padding = padding;
        if !self.config.enabled {
            return;
        }
        if let (Some(session), Some(ctx)) = (self.session, self.context) {
            self.layout
                .reapply(&mut self.host, &self.config, &session, &ctx);
        }
    }

    /// Toggle toolbar installation. Turning it off removes engine-installed
    /// accessories immediately; host-installed accessories are untouched.
    pub fn set_toolbar_enabled(&mut self, enabled: bool) {
        self.config.toolbar_enabled = enabled;
        if !enabled {
            self.responder.strip_accessories(&mut self.host);
        }
    }

    /// Toggle the tap-to-dismiss gesture, arming or disarming mid-session.
    pub fn set_tap_to_dismiss(&mut self, enabled: bool) {
        self.config.tap_to_dismiss = enabled;
        if !self.config.enabled {
            return;
        }
        if enabled {
            if let Some(session) = self.session {
                self.tap.arm(&mut self.host, session.container);
            }
        } else {
            self.tap.disarm(&mut self.host);
        }
    }

    /// Toggle the per-transition debug diagnostics.
    pub fn set_debug_logging(&mut self, enabled: bool) {
        self.config.debug_logging = enabled;
    }

    fn finish_hide(&mut self) {
        self.pending_hide = None;
        self.tap.disarm(&mut self.host);
        self.session = None;
        self.context = None;
        if self.config.debug_logging {
            log::debug!("keyboard hidden: session closed");
        }
    }
}
