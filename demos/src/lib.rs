// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo scaffolding: a complete in-memory [`Host`] the runnable examples
//! drive the engine against.
//!
//! [`DemoHost`] models a single window with one screen, a container view,
//! optional scroll surfaces, and labeled text fields. Animated frame changes
//! apply immediately (descendants ride along with a translated ancestor) and
//! are recorded so examples can print what the engine did.

use std::collections::HashMap;

use kurbo::{Rect, Vec2};

use headroom_host::{
    Accessory, AnimationId, ElementFlags, ElementId, GestureId, HeightRule, Host, ScreenId,
    SubmitKind, Timing, ViewId, WindowMetrics,
};

/// The screen used by all demos: 375×812 portrait.
pub const WINDOW: Rect = Rect::new(0.0, 0.0, 375.0, 812.0);

#[derive(Clone, Debug)]
struct DemoView {
    frame: Rect,
    parent: Option<ViewId>,
    scrollable: bool,
    height_rule: HeightRule,
    bottom_inset: f64,
}

#[derive(Clone, Debug)]
struct DemoField {
    view: ViewId,
    label: String,
    flags: ElementFlags,
    padding_override: Option<f64>,
    submit: SubmitKind,
    accessory: Accessory,
}

/// A scriptable single-screen host for the examples.
#[derive(Clone, Debug)]
pub struct DemoHost {
    views: HashMap<u64, DemoView>,
    fields: HashMap<u64, DemoField>,
    order: Vec<ElementId>,
    scroll_surfaces: Vec<ViewId>,
    metrics: WindowMetrics,
    container: ViewId,
    focused: Option<ElementId>,
    focus_requests: Vec<ElementId>,
    animations: Vec<(ViewId, Rect, Timing)>,
    attached_taps: Vec<(GestureId, ViewId)>,
    next_view: u64,
    next_field: u64,
    next_animation: u64,
    next_gesture: u64,
}

impl Default for DemoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoHost {
    /// A window with an empty full-size container.
    pub fn new() -> Self {
        let container = ViewId(1);
        let mut views = HashMap::new();
        views.insert(
            container.0,
            DemoView {
                frame: WINDOW,
                parent: None,
                scrollable: false,
                height_rule: HeightRule::Free,
                bottom_inset: 0.0,
            },
        );
        Self {
            views,
            fields: HashMap::new(),
            order: Vec::new(),
            scroll_surfaces: Vec::new(),
            metrics: WindowMetrics {
                bounds: WINDOW,
                safe_bottom_inset: 34.0,
            },
            container,
            focused: None,
            focus_requests: Vec::new(),
            animations: Vec::new(),
            attached_taps: Vec::new(),
            next_view: 2,
            next_field: 1,
            next_animation: 1,
            next_gesture: 1,
        }
    }

    /// The screen all demo fields live on.
    pub fn screen(&self) -> ScreenId {
        ScreenId(1)
    }

    /// The container view.
    pub fn container(&self) -> ViewId {
        self.container
    }

    /// Add a scrollable surface covering `frame`, as a child of the
    /// container.
    pub fn add_scroll_surface(&mut self, frame: Rect) -> ViewId {
        let id = ViewId(self.next_view);
        self.next_view += 1;
        self.views.insert(
            id.0,
            DemoView {
                frame,
                parent: Some(self.container),
                scrollable: true,
                height_rule: HeightRule::Free,
                bottom_inset: 0.0,
            },
        );
        self.scroll_surfaces.push(id);
        id
    }

    /// Add a labeled text field as a child of `parent` (the container or a
    /// scroll surface).
    pub fn add_field_in(&mut self, label: &str, frame: Rect, parent: ViewId) -> ElementId {
        let view = ViewId(self.next_view);
        self.next_view += 1;
        self.views.insert(
            view.0,
            DemoView {
                frame,
                parent: Some(parent),
                scrollable: false,
                height_rule: HeightRule::Free,
                bottom_inset: 0.0,
            },
        );
        let id = ElementId(self.next_field);
        self.next_field += 1;
        self.fields.insert(
            id.0,
            DemoField {
                view,
                label: label.to_owned(),
                flags: ElementFlags::default(),
                padding_override: None,
                submit: SubmitKind::Default,
                accessory: Accessory::Empty,
            },
        );
        self.order.push(id);
        id
    }

    /// Add a labeled text field directly on the container.
    pub fn add_field(&mut self, label: &str, frame: Rect) -> ElementId {
        let parent = self.container;
        self.add_field_in(label, frame, parent)
    }

    /// The label a field was created with.
    pub fn label(&self, element: ElementId) -> &str {
        self.fields
            .get(&element.0)
            .map(|f| f.label.as_str())
            .unwrap_or("?")
    }

    /// The currently focused field, if any.
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Drain the focus transfers the engine requested, so the demo loop can
    /// play the platform's part and deliver the matching notifications.
    pub fn take_focus_requests(&mut self) -> Vec<ElementId> {
        std::mem::take(&mut self.focus_requests)
    }

    /// Gestures currently attached.
    pub fn attached_taps(&self) -> &[(GestureId, ViewId)] {
        &self.attached_taps
    }

    /// Recorded frame animations, oldest first.
    pub fn animations(&self) -> &[(ViewId, Rect, Timing)] {
        &self.animations
    }

    /// Token of the most recently scheduled animation, for driving the
    /// engine's completion callback from a demo loop.
    pub fn last_animation_id(&self) -> Option<AnimationId> {
        (self.next_animation > 1).then(|| AnimationId(self.next_animation - 1))
    }

    /// Reposition a view directly, standing in for a host layout pass
    /// (rotation demos use this).
    pub fn set_frame(&mut self, view: ViewId, frame: Rect) {
        if let Some(v) = self.views.get_mut(&view.0) {
            v.frame = frame;
        }
    }

    fn is_descendant(&self, view: ViewId, ancestor: ViewId) -> bool {
        let mut cur = view;
        while let Some(parent) = self.views.get(&cur.0).and_then(|v| v.parent) {
            if parent == ancestor {
                return true;
            }
            cur = parent;
        }
        false
    }
}

impl Host for DemoHost {
    fn screen_of(&self, element: ElementId) -> Option<ScreenId> {
        self.fields.contains_key(&element.0).then(|| self.screen())
    }

    fn container_of(&self, _screen: ScreenId) -> Option<ViewId> {
        Some(self.container)
    }

    fn view_of(&self, element: ElementId) -> Option<ViewId> {
        self.fields.get(&element.0).map(|f| f.view)
    }

    fn parent_of(&self, view: ViewId) -> Option<ViewId> {
        self.views.get(&view.0).and_then(|v| v.parent)
    }

    fn window_frame(&self, view: ViewId) -> Option<Rect> {
        self.views.get(&view.0).map(|v| v.frame)
    }

    fn window_metrics(&self) -> WindowMetrics {
        self.metrics
    }

    fn elements_on(&self, _screen: ScreenId) -> Vec<ElementId> {
        self.order.clone()
    }

    fn element_flags(&self, element: ElementId) -> ElementFlags {
        self.fields
            .get(&element.0)
            .map(|f| f.flags)
            .unwrap_or(ElementFlags::empty())
    }

    fn padding_override(&self, element: ElementId) -> Option<f64> {
        self.fields.get(&element.0)?.padding_override
    }

    fn focus(&mut self, element: ElementId) -> bool {
        if !self.fields.contains_key(&element.0) {
            return false;
        }
        self.focused = Some(element);
        self.focus_requests.push(element);
        true
    }

    fn resign_focus(&mut self) {
        self.focused = None;
    }

    fn submit_kind(&self, element: ElementId) -> SubmitKind {
        self.fields
            .get(&element.0)
            .map(|f| f.submit)
            .unwrap_or_default()
    }

    fn set_submit_kind(&mut self, element: ElementId, kind: SubmitKind) {
        if let Some(f) = self.fields.get_mut(&element.0) {
            f.submit = kind;
        }
    }

    fn accessory(&self, element: ElementId) -> Accessory {
        self.fields
            .get(&element.0)
            .map(|f| f.accessory)
            .unwrap_or_default()
    }

    fn set_accessory(&mut self, element: ElementId, accessory: Accessory) {
        if let Some(f) = self.fields.get_mut(&element.0) {
            f.accessory = accessory;
        }
    }

    fn accessory_height(&self, element: ElementId) -> f64 {
        match self.accessory(element) {
            Accessory::Toolbar => headroom_chain::TOOLBAR_HEIGHT,
            _ => 0.0,
        }
    }

    fn scroll_surfaces_on(&self, _screen: ScreenId) -> Vec<ViewId> {
        self.scroll_surfaces.clone()
    }

    fn is_scroll_surface(&self, view: ViewId) -> bool {
        self.views.get(&view.0).is_some_and(|v| v.scrollable)
    }

    fn height_rule(&self, view: ViewId) -> HeightRule {
        self.views
            .get(&view.0)
            .map(|v| v.height_rule)
            .unwrap_or_default()
    }

    fn bottom_inset(&self, view: ViewId) -> f64 {
        self.views.get(&view.0).map(|v| v.bottom_inset).unwrap_or(0.0)
    }

    fn set_bottom_inset(&mut self, view: ViewId, inset: f64) {
        if let Some(v) = self.views.get_mut(&view.0) {
            v.bottom_inset = inset;
        }
    }

    fn animate_frame(&mut self, view: ViewId, target: Rect, timing: Timing) -> AnimationId {
        let id = AnimationId(self.next_animation);
        self.next_animation += 1;
        if let Some(old) = self.views.get(&view.0).map(|v| v.frame) {
            self.views.get_mut(&view.0).unwrap().frame = target;
            let delta = Vec2::new(target.x0 - old.x0, target.y0 - old.y0);
            if delta.x != 0.0 || delta.y != 0.0 {
                let ids: Vec<u64> = self.views.keys().copied().collect();
                for vid in ids {
                    if vid != view.0 && self.is_descendant(ViewId(vid), view) {
                        let v = self.views.get_mut(&vid).unwrap();
                        v.frame = v.frame + delta;
                    }
                }
            }
        }
        self.animations.push((view, target, timing));
        id
    }

    fn attach_tap(&mut self, container: ViewId) -> GestureId {
        let id = GestureId(self.next_gesture);
        self.next_gesture += 1;
        self.attached_taps.push((id, container));
        id
    }

    fn detach_tap(&mut self, gesture: GestureId) {
        self.attached_taps.retain(|(g, _)| *g != gesture);
    }
}
