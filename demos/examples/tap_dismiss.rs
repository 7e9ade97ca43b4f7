// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-to-dismiss and rotation: tapping outside the inputs resigns focus,
//! and a rotation recomputes the chain order in place.
//!
//! Run:
//! - `cargo run -p headroom_demos --example tap_dismiss`

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
    let top = host.add_field("top", Rect::new(16.0, 200.0, 359.0, 240.0));
    let bottom = host.add_field("bottom", Rect::new(16.0, 700.0, 359.0, 740.0));

    let mut engine = Coordinator::new(host);
    engine.enable();

    engine.focus_gained(bottom);
    engine.keyboard_will_show(keyboard(300.0));
    println!(
        "keyboard up, {} tap gesture(s) armed on the container",
        engine.host().attached_taps().len()
    );
    println!(
        "toolbar: prev={:?} next={:?}",
        engine.toolbar().prev().map(|e| engine.host().label(e)),
        engine.toolbar().next().map(|e| engine.host().label(e)),
    );

    // Rotation to landscape swaps the fields' vertical order.
    let (top_view, bottom_view) = (
        engine.host().view_of(top).unwrap(),
        engine.host().view_of(bottom).unwrap(),
    );
    let (a, b) = (
        engine.host().window_frame(top_view).unwrap(),
        engine.host().window_frame(bottom_view).unwrap(),
    );
    println!(
        "\nrotating (top was at y={:.0}, bottom at y={:.0})",
        a.y0, b.y0
    );
    // Stand in for the host's layout pass: the fields trade places.
    engine.host_mut().set_frame(top_view, b);
    engine.host_mut().set_frame(bottom_view, a);
    engine.orientation_changed();
    println!(
        "after rotation the chain was recomputed; toolbar prev={:?}",
        engine.toolbar().prev().map(|e| engine.host().label(e)),
    );

    // The user taps the background.
    let gesture = engine.host().attached_taps()[0].0;
    engine.tap_triggered(gesture);
    println!(
        "\ntap on background: focused field is now {:?}",
        engine.host().focused().map(|e| engine.host().label(e)),
    );

    engine.focus_ended(bottom, false);
    engine.keyboard_will_hide(keyboard(300.0));
    let done = engine.host().last_animation_id().unwrap();
    engine.animation_finished(done);
    println!(
        "keyboard away, {} tap gesture(s) remain",
        engine.host().attached_taps().len()
    );
}
