// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-to-dismiss: one gesture on the active container, scoped to one
//! session.

use headroom_host::{GestureId, Host, ViewId};

/// Attaches and detaches the tap recognizer that resigns focus.
///
/// At most one gesture is attached at a time, always on the current
/// session's container. Arming is idempotent: re-arming the same container
/// keeps the existing gesture; a different container detaches the old one
/// first.
#[derive(Clone, Debug, Default)]
pub struct TapDismiss {
    attached: Option<(ViewId, GestureId)>,
}

impl TapDismiss {
    /// Create a controller with nothing attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the tap gesture to a container, idempotently.
    pub fn arm<H: Host>(&mut self, host: &mut H, container: ViewId) {
        match self.attached {
            Some((current, _)) if current == container => {}
            Some((_, gesture)) => {
                host.detach_tap(gesture);
                let gesture = host.attach_tap(container);
                self.attached = Some((container, gesture));
            }
            None => {
                let gesture = host.attach_tap(container);
                self.attached = Some((container, gesture));
            }
        }
    }

    /// Detach the gesture if one is attached.
    pub fn disarm<H: Host>(&mut self, host: &mut H) {
        if let Some((_, gesture)) = self.attached.take() {
            host.detach_tap(gesture);
        }
    }

    /// Whether a trigger token belongs to the armed gesture.
    pub fn owns(&self, gesture: GestureId) -> bool {
        self.attached.is_some_and(|(_, g)| g == gesture)
    }

    /// The container currently armed, if any.
    pub fn container(&self) -> Option<ViewId> {
        self.attached.map(|(c, _)| c)
    }
}
