// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A form inside a tall scroll view: the engine picks scroll mode, grows the
//! bottom inset, and shrinks the container's effective viewport instead of
//! translating it.
//!
//! Run:
//! - `cargo run -p headroom_demos --example scroll_form`

use headroom_demos::DemoHost;
use headroom_engine::Coordinator;
use headroom_host::{Curve, Host, KeyboardContext};
use kurbo::Rect;

fn keyboard(height: f64) -> KeyboardContext {
    KeyboardContext {
        end_frame: Rect::new(0.0, 812.0 - height, 375.0, 812.0),
        duration: 0.25,
        curve: Curve::Keyboard,
    }
}

fn main() {
    let mut host = DemoHost::new();
    // One scroll surface covering the window, taller than any keyboard.
    let surface = host.add_scroll_surface(Rect::new(0.0, 0.0, 375.0, 812.0));
    let fields: Vec<_> = (0..6)
        .map(|i| {
            let top = 120.0 + i as f64 * 90.0;
            let label = format!("field {}", i + 1);
            host.add_field_in(&label, Rect::new(16.0, top, 359.0, top + 40.0), surface)
        })
        .collect();

    let mut engine = Coordinator::new(host);
    engine.enable();

    let report = |engine: &Coordinator<DemoHost>, what: &str| {
        let host = engine.host();
        let container = host.window_frame(host.container()).unwrap();
        println!("\n== {what} ==");
        println!(
            "  mode={:?}  container height={:.0}  bottom inset={:.0}",
            engine.mode(),
            container.height(),
            host.bottom_inset(surface),
        );
    };

    engine.focus_gained(fields[4]);
    engine.keyboard_will_show(keyboard(300.0));
    report(&engine, "field 5 focused, keyboard up");

    // A live padding change re-applies the cached strategy with new values.
    engine.set_minimum_padding(36.0);
    report(&engine, "minimum padding raised to 36");

    // Focus moves within the same presentation; the mode must not flip.
    engine.focus_gained(fields[1]);
    engine.keyboard_will_show(keyboard(300.0));
    report(&engine, "field 2 focused under the same keyboard");

    engine.keyboard_will_hide(keyboard(300.0));
    let done = engine.host().last_animation_id().unwrap();
    engine.animation_finished(done);
    report(&engine, "keyboard away, viewport and inset restored");
}
