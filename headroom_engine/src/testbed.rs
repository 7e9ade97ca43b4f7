// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host fixture shared by the engine tests.
//!
//! The mock applies animated frame changes immediately and records them, so
//! tests can assert both the resulting geometry and the scheduling calls.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use kurbo::{Rect, Vec2};

use headroom_host::{
    Accessory, AnimationId, ElementFlags, ElementId, GestureId, HeightRule, Host, ScreenId,
    SubmitKind, Timing, ViewId, WindowMetrics,
};

/// Window bounds used by every fixture: a 375×812 portrait screen.
pub(crate) fn screen_rect() -> Rect {
    Rect::new(0.0, 0.0, 375.0, 812.0)
}

#[derive(Clone, Debug)]
struct MockView {
    frame: Rect,
    parent: Option<ViewId>,
    scrollable: bool,
    height_rule: HeightRule,
    bottom_inset: f64,
}

#[derive(Clone, Debug)]
struct MockElement {
    view: ViewId,
    screen: ScreenId,
    flags: ElementFlags,
    padding_override: Option<f64>,
    submit: SubmitKind,
    accessory: Accessory,
}

#[derive(Clone, Debug, Default)]
struct MockScreen {
    container: Option<ViewId>,
    elements: Vec<ElementId>,
    scroll_surfaces: Vec<ViewId>,
}

/// One recorded `animate_frame` call.
#[derive(Clone, Debug)]
pub(crate) struct AnimationRecord {
    pub(crate) view: ViewId,
    pub(crate) target: Rect,
    pub(crate) timing: Timing,
    pub(crate) id: AnimationId,
}

/// Scriptable in-memory host.
#[derive(Clone, Debug)]
pub(crate) struct MockHost {
    views: BTreeMap<u64, MockView>,
    elements: BTreeMap<u64, MockElement>,
    screens: BTreeMap<u64, MockScreen>,
    pub(crate) metrics: WindowMetrics,
    screen: ScreenId,
    container: ViewId,
    created_elements: Vec<ElementId>,
    created_surfaces: Vec<ViewId>,
    toolbar_height: f64,
    host_accessory_height: f64,
    focused: Option<ElementId>,
    focus_requests: Vec<ElementId>,
    resign_count: usize,
    animations: Vec<AnimationRecord>,
    attached: Vec<(GestureId, ViewId)>,
    attach_count: usize,
    detach_count: usize,
    next_view: u64,
    next_element: u64,
    next_animation: u64,
    next_gesture: u64,
}

impl MockHost {
    /// A screen with a full-window container and no elements.
    pub(crate) fn plain_form() -> Self {
        let screen = ScreenId(1);
        let container = ViewId(1);
        let mut views = BTreeMap::new();
        views.insert(
            container.0,
            MockView {
                frame: screen_rect(),
                parent: None,
                scrollable: false,
                height_rule: HeightRule::Free,
                bottom_inset: 0.0,
            },
        );
        let mut screens = BTreeMap::new();
        screens.insert(
            screen.0,
            MockScreen {
                container: Some(container),
                ..Default::default()
            },
        );
        Self {
            views,
            elements: BTreeMap::new(),
            screens,
            metrics: WindowMetrics {
                bounds: screen_rect(),
                safe_bottom_inset: 0.0,
            },
            screen,
            container,
            created_elements: Vec::new(),
            created_surfaces: Vec::new(),
            toolbar_height: headroom_chain::TOOLBAR_HEIGHT,
            host_accessory_height: 0.0,
            focused: None,
            focus_requests: Vec::new(),
            resign_count: 0,
            animations: Vec::new(),
            attached: Vec::new(),
            attach_count: 0,
            detach_count: 0,
            next_view: 2,
            next_element: 1,
            next_animation: 1,
            next_gesture: 1,
        }
    }

    /// A form inside one tall, shrinkable scroll surface with three inputs.
    pub(crate) fn scrolling_form() -> Self {
        let mut host = Self::plain_form();
        let surface = host.add_scroll_surface(screen_rect(), HeightRule::Free);
        for top in [150.0, 300.0, 450.0] {
            host.add_element_in(Rect::new(16.0, top, 359.0, top + 40.0), surface);
        }
        host
    }

    pub(crate) fn container(&self) -> ViewId {
        self.container
    }

    /// The i-th element created on this host.
    pub(crate) fn element(&self, i: usize) -> ElementId {
        self.created_elements[i]
    }

    /// The i-th scroll surface created on this host.
    pub(crate) fn scroll_surface(&self, i: usize) -> ViewId {
        self.created_surfaces[i]
    }

    pub(crate) fn add_view(&mut self, frame: Rect, height_rule: HeightRule) -> ViewId {
        let id = ViewId(self.next_view);
        self.next_view += 1;
        self.views.insert(
            id.0,
            MockView {
                frame,
                parent: Some(self.container),
                scrollable: false,
                height_rule,
                bottom_inset: 0.0,
            },
        );
        id
    }

    pub(crate) fn add_scroll_surface(&mut self, frame: Rect, height_rule: HeightRule) -> ViewId {
        let id = self.add_view(frame, height_rule);
        self.views.get_mut(&id.0).unwrap().scrollable = true;
        self.screens
            .get_mut(&self.screen.0)
            .unwrap()
            .scroll_surfaces
            .push(id);
        self.created_surfaces.push(id);
        id
    }

    /// Add a focusable element whose view is a direct child of the container.
    pub(crate) fn add_element(&mut self, frame: Rect) -> ElementId {
        let parent = self.container;
        self.add_element_in(frame, parent)
    }

    /// Add a focusable element inside the first scroll surface, creating a
    /// tall shrinkable one if none exists.
    pub(crate) fn add_element_in_scroll(&mut self, frame: Rect) -> ElementId {
        let surface = match self.created_surfaces.first() {
            Some(&s) => s,
            None => self.add_scroll_surface(screen_rect(), HeightRule::Free),
        };
        self.add_element_in(frame, surface)
    }

    pub(crate) fn add_element_in(&mut self, frame: Rect, parent: ViewId) -> ElementId {
        let view = ViewId(self.next_view);
        self.next_view += 1;
        self.views.insert(
            view.0,
            MockView {
                frame,
                parent: Some(parent),
                scrollable: false,
                height_rule: HeightRule::Free,
                bottom_inset: 0.0,
            },
        );
        let id = ElementId(self.next_element);
        self.next_element += 1;
        self.elements.insert(
            id.0,
            MockElement {
                view,
                screen: self.screen,
                flags: ElementFlags::default(),
                padding_override: None,
                submit: SubmitKind::Default,
                accessory: Accessory::Empty,
            },
        );
        self.screens
            .get_mut(&self.screen.0)
            .unwrap()
            .elements
            .push(id);
        self.created_elements.push(id);
        id
    }

    pub(crate) fn set_accessory_raw(&mut self, element: ElementId, accessory: Accessory) {
        self.elements.get_mut(&element.0).unwrap().accessory = accessory;
    }

    pub(crate) fn set_submit_raw(&mut self, element: ElementId, kind: SubmitKind) {
        self.elements.get_mut(&element.0).unwrap().submit = kind;
    }

    pub(crate) fn set_flags_raw(&mut self, element: ElementId, flags: ElementFlags) {
        self.elements.get_mut(&element.0).unwrap().flags = flags;
    }

    pub(crate) fn set_padding_override(&mut self, element: ElementId, padding: f64) {
        self.elements.get_mut(&element.0).unwrap().padding_override = Some(padding);
    }

    pub(crate) fn set_height_rule_raw(&mut self, view: ViewId, rule: HeightRule) {
        self.views.get_mut(&view.0).unwrap().height_rule = rule;
    }

    pub(crate) fn set_frame_raw(&mut self, view: ViewId, frame: Rect) {
        self.views.get_mut(&view.0).unwrap().frame = frame;
    }

    pub(crate) fn set_toolbar_height(&mut self, height: f64) {
        self.toolbar_height = height;
    }

    pub(crate) fn animations(&self) -> &[AnimationRecord] {
        &self.animations
    }

    pub(crate) fn last_animation(&self) -> Option<&AnimationRecord> {
        self.animations.last()
    }

    pub(crate) fn attached_taps(&self) -> &[(GestureId, ViewId)] {
        &self.attached
    }

    pub(crate) fn attach_count(&self) -> usize {
        self.attach_count
    }

    pub(crate) fn detach_count(&self) -> usize {
        self.detach_count
    }

    pub(crate) fn focus_requests(&self) -> &[ElementId] {
        &self.focus_requests
    }

    pub(crate) fn resign_count(&self) -> usize {
        self.resign_count
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

impl Host for MockHost {
    fn screen_of(&self, element: ElementId) -> Option<ScreenId> {
        self.elements.get(&element.0).map(|e| e.screen)
    }

    fn container_of(&self, screen: ScreenId) -> Option<ViewId> {
        self.screens.get(&screen.0).and_then(|s| s.container)
    }

    fn view_of(&self, element: ElementId) -> Option<ViewId> {
        self.elements.get(&element.0).map(|e| e.view)
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

    fn elements_on(&self, screen: ScreenId) -> Vec<ElementId> {
        self.screens
            .get(&screen.0)
            .map(|s| s.elements.clone())
            .unwrap_or_default()
    }

    fn element_flags(&self, element: ElementId) -> ElementFlags {
        self.elements
            .get(&element.0)
            .map(|e| e.flags)
            .unwrap_or(ElementFlags::empty())
    }

    fn padding_override(&self, element: ElementId) -> Option<f64> {
        self.elements.get(&element.0)?.padding_override
    }

    fn focus(&mut self, element: ElementId) -> bool {
        if !self.elements.contains_key(&element.0) {
            return false;
        }
        self.focused = Some(element);
        self.focus_requests.push(element);
        true
    }

    fn resign_focus(&mut self) {
        self.focused = None;
        self.resign_count += 1;
    }

    fn submit_kind(&self, element: ElementId) -> SubmitKind {
        self.elements
            .get(&element.0)
            .map(|e| e.submit)
            .unwrap_or_default()
    }

    fn set_submit_kind(&mut self, element: ElementId, kind: SubmitKind) {
        if let Some(e) = self.elements.get_mut(&element.0) {
            e.submit = kind;
        }
    }

    fn accessory(&self, element: ElementId) -> Accessory {
        self.elements
            .get(&element.0)
            .map(|e| e.accessory)
            .unwrap_or_default()
    }

    fn set_accessory(&mut self, element: ElementId, accessory: Accessory) {
        if let Some(e) = self.elements.get_mut(&element.0) {
            e.accessory = accessory;
        }
    }

    fn accessory_height(&self, element: ElementId) -> f64 {
        match self.accessory(element) {
            Accessory::Empty => 0.0,
            Accessory::Host => self.host_accessory_height,
            Accessory::Toolbar => self.toolbar_height,
        }
    }

    fn scroll_surfaces_on(&self, screen: ScreenId) -> Vec<ViewId> {
        self.screens
            .get(&screen.0)
            .map(|s| s.scroll_surfaces.clone())
            .unwrap_or_default()
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
            // Descendants ride along with a translated ancestor, as in a
            // real view tree. Pure resizes leave them in place.
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
        self.animations.push(AnimationRecord {
            view,
            target,
            timing,
            id,
        });
        id
    }

    fn attach_tap(&mut self, container: ViewId) -> GestureId {
        let id = GestureId(self.next_gesture);
        self.next_gesture += 1;
        self.attached.push((id, container));
        self.attach_count += 1;
        id
    }

    fn detach_tap(&mut self, gesture: GestureId) {
        self.attached.retain(|(g, _)| *g != gesture);
        self.detach_count += 1;
    }
}
