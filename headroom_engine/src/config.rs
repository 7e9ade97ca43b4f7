// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine-wide configuration.

use headroom_chain::ToolbarStyle;

/// Default minimum distance kept between the focused element and the
/// keyboard, in points.
pub const DEFAULT_MINIMUM_PADDING: f64 = 20.0;

/// Default scroll-mode viewport correction, in points.
///
/// In scroll mode the container is shrunk by
/// `keyboard_height - safe_bottom_inset - viewport_correction` so the
/// platform's own scroll-into-view behavior works against the reduced
/// viewport. The correction compensates for residual safe-area and tab-bar
/// overlap. It is an empirically tuned constant, not derived from geometry;
/// tune it through [`Config::viewport_correction`] if your chrome differs.
pub const DEFAULT_VIEWPORT_CORRECTION: f64 = 10.0;

/// Engine configuration.
///
/// Owned by the coordinator. Every field is safe to change at any time; the
/// coordinator's setters apply the live semantics (re-applying layout on a
/// padding change, stripping engine accessories when the toolbar is turned
/// off mid-session).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Master switch. While false the engine is fully inert.
    pub enabled: bool,
    /// Minimum distance kept between the focused element and the keyboard.
    /// Elements may override it per-element through the host.
    pub minimum_padding: f64,
    /// Attach a tap-to-dismiss gesture to the active container.
    pub tap_to_dismiss: bool,
    /// Install the toolbar as the focused element's input accessory.
    pub toolbar_enabled: bool,
    /// Toolbar presentation; purely visual.
    pub toolbar_style: ToolbarStyle,
    /// Emit per-transition diagnostics through the `log` facade at debug
    /// level. Advisory failures are logged at warn level regardless.
    pub debug_logging: bool,
    /// Scroll-mode viewport correction; see [`DEFAULT_VIEWPORT_CORRECTION`].
    pub viewport_correction: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: false,
            minimum_padding: DEFAULT_MINIMUM_PADDING,
            tap_to_dismiss: true,
            toolbar_enabled: true,
            toolbar_style: ToolbarStyle::default(),
            debug_logging: false,
            viewport_correction: DEFAULT_VIEWPORT_CORRECTION,
        }
    }
}
