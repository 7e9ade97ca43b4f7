// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full walkthrough of a plain (non-scrolling) form: the keyboard slides in,
//! the container offsets, and the toolbar and return key walk the chain.
//!
//! Run:
//! - `cargo run -p headroom_demos --example form_walkthrough`

use headroom_chain::ToolbarAction;
use headroom_demos::DemoHost;
use headroom_engine::Coordinator;
use headroom_host::{Curve, ElementId, Host, KeyboardContext};
use kurbo::Rect;

fn keyboard(height: f64) -> KeyboardContext {
    KeyboardContext {
        end_frame: Rect::new(0.0, 812.0 - height, 375.0, 812.0),
        duration: 0.25,
        curve: Curve::Keyboard,
    }
}

fn print_state(engine: &Coordinator<DemoHost>, what: &str) {
    let host = engine.host();
    let container = host.window_frame(host.container()).unwrap();
    println!("\n== {what} ==");
    println!(
        "  container y0={:+.0}  mode={:?}  session={}",
        container.y0,
        engine.mode(),
        if engine.session().is_some() {
            "active"
        } else {
            "none"
        }
    );
    let prev = engine.toolbar().prev().map(|e| host.label(e).to_owned());
    let next = engine.toolbar().next().map(|e| host.label(e).to_owned());
    println!("  toolbar prev={prev:?} next={next:?}");
}

// Play the platform's part: deliver the focus transfers the engine
// requested back to it as focus notifications.
fn pump_focus(engine: &mut Coordinator<DemoHost>, current: &mut Option<ElementId>) {
    for target in engine.host_mut().take_focus_requests() {
        if let Some(old) = current.take() {
            engine.focus_ended(old, true);
        }
        *current = Some(target);
        engine.focus_gained(target);
    }
}

fn main() {
    let mut host = DemoHost::new();
    // Declared out of reading order on purpose; the chain sorts by position.
    let email = host.add_field("email", Rect::new(16.0, 620.0, 359.0, 660.0));
    let name = host.add_field("name", Rect::new(16.0, 560.0, 359.0, 600.0));
    let notes = host.add_field("notes", Rect::new(16.0, 700.0, 359.0, 740.0));

    let mut engine = Coordinator::new(host);
    engine.enable();

    println!("Form: name (y=560), email (y=620), notes (y=700)");

    // The user taps the name field; the keyboard slides in.
    let mut current = Some(name);
    engine.focus_gained(name);
    engine.keyboard_will_show(keyboard(300.0));
    print_state(&engine, "name focused, keyboard up");

    // Walk forward through the chain with the toolbar.
    engine.toolbar_action(ToolbarAction::Next);
    pump_focus(&mut engine, &mut current);
    engine.keyboard_will_show(keyboard(300.0));
    print_state(&engine, "toolbar next -> email");

    // The return key advances too: notes is next after email.
    engine.submit_pressed(email);
    pump_focus(&mut engine, &mut current);
    engine.keyboard_will_show(keyboard(300.0));
    print_state(&engine, "return key -> notes");

    // Done resigns focus; the platform hides the keyboard.
    engine.toolbar_action(ToolbarAction::Done);
    if let Some(old) = current.take() {
        engine.focus_ended(old, false);
    }
    engine.keyboard_will_hide(keyboard(300.0));
    let done = engine.host().last_animation_id().unwrap();
    engine.animation_finished(done);
    print_state(&engine, "done, keyboard away");

    println!(
        "\n{} frame animations were scheduled in total.",
        engine.host().animations().len()
    );
}
