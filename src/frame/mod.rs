//! The frame: root of a view tree and its event dispatcher.

use crate::attributes::{AttributeId, AttributeValue, Attributes};
use crate::backend::{Backend, BackendError, CursorType, DragData, DragResult};
use crate::color::Color;
use crate::config::FrameConfig;
use crate::dirty::DirtyRegion;
use crate::draw::DrawContext;
use crate::editor::{Editor, KnobMode};
use crate::events::ButtonState;
use crate::observer::{KeyboardHook, MouseObserver, MouseObservers, ObserverId, ViewObserver};
use crate::rect::Rect;
use crate::tooltip::{TooltipSupport, TooltipTracker};
use crate::tree::{ViewFlags, ViewTree};
use crate::view::{View, ViewId};
use cgmath::{Point2, Vector2};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

mod dispatch;
mod focus;
mod hover;
mod modal;

use focus::FocusState;
use hover::HoverChain;
use modal::ModalGate;

/// Default width of the focus highlight.
pub const DEFAULT_FOCUS_WIDTH: f64 = 2.;

/// The root container of a view tree, bound to one native window.
///
/// The frame owns all views (see [`ViewTree`]) and everything that refers to them by ID: the hover
/// chain, keyboard focus, the modal view, the pointer-down owner and the drag target. Whenever a
/// subtree is removed those references are cleared before anyone is notified about the removal.
///
/// All methods are meant to be called from a single thread; views receive `&mut Frame` in their
/// handlers and may call back into it.
pub struct Frame {
    tree: ViewTree,
    backend: Option<Box<dyn Backend>>,
    editor: Option<Box<dyn Editor>>,

    hover: HoverChain,
    focus: FocusState,
    modal: ModalGate,
    /// The view that consumed the last pointer-down, until the matching pointer-up.
    mouse_down_view: Option<ViewId>,
    /// The view under an incoming drag.
    drag_view: Option<ViewId>,

    mouse_observers: MouseObservers,
    keyboard_hook: Option<Arc<dyn KeyboardHook>>,
    view_observer: Option<Arc<dyn ViewObserver>>,
    tooltips: Option<Box<dyn TooltipSupport>>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Frame")
            .field("root", &self.tree.root())
            .field("views", &self.tree.len())
            .field("hover", &self.hover)
            .field("focus", &self.focus)
            .field("modal", &self.modal)
            .field("mouse_down_view", &self.mouse_down_view)
            .field("drag_view", &self.drag_view)
            .field("has_backend", &self.backend.is_some())
            .finish()
    }
}

impl Frame {
    /// Creates a frame with an empty root view.
    pub fn new(rect: Rect) -> Frame {
        Frame::with_root_view(Arc::new(()), rect)
    }

    /// Creates a frame whose root container has the given behavior.
    ///
    /// The root view receives focus notifications for the whole tree.
    pub fn with_root_view(root: Arc<dyn View>, rect: Rect) -> Frame {
        Frame {
            tree: ViewTree::new(root, rect),
            backend: None,
            editor: None,
            hover: HoverChain::default(),
            focus: FocusState::default(),
            modal: ModalGate::default(),
            mouse_down_view: None,
            drag_view: None,
            mouse_observers: MouseObservers::default(),
            keyboard_hook: None,
            view_observer: None,
            tooltips: None,
        }
    }

    /// Binds the frame to a native window, returning the previous one.
    pub fn set_backend(&mut self, backend: Option<Box<dyn Backend>>) -> Option<Box<dyn Backend>> {
        std::mem::replace(&mut self.backend, backend)
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn set_editor(&mut self, editor: Option<Box<dyn Editor>>) -> Option<Box<dyn Editor>> {
        std::mem::replace(&mut self.editor, editor)
    }

    /// Applies persisted settings.
    pub fn apply_config(&mut self, config: &FrameConfig) {
        self.enable_tooltips(config.tooltips);
        self.set_focus_drawing_enabled(config.focus_drawing);
        self.set_focus_color(config.focus_color);
        self.set_focus_width(config.focus_width);
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// The frame’s own root container.
    pub fn root(&self) -> ViewId {
        self.tree.root()
    }

    /// The frame’s size and position.
    pub fn rect(&self) -> Rect {
        self.tree.rect(self.tree.root()).unwrap_or_default()
    }

    /// The current hover chain, outermost first.
    pub fn hover_chain(&self) -> &[ViewId] {
        self.hover.entries()
    }

    /// The view that consumed the last pointer-down, if the pointer is still down.
    pub fn mouse_down_view(&self) -> Option<ViewId> {
        self.mouse_down_view
    }

    /// The view under an incoming drag, if one is in progress.
    pub fn drag_view(&self) -> Option<ViewId> {
        self.drag_view
    }

    // structure

    /// Creates a detached view.
    pub fn create_view(&mut self, view: Arc<dyn View>, rect: Rect) -> ViewId {
        self.tree.insert(view, rect, false)
    }

    /// Creates a detached container view.
    pub fn create_container(&mut self, view: Arc<dyn View>, rect: Rect) -> ViewId {
        self.tree.insert(view, rect, true)
    }

    /// Adds a view to a container.
    ///
    /// Fails if the view is already in a container or if `parent` isn’t a container.
    pub fn add_view(&mut self, parent: ViewId, id: ViewId) -> bool {
        if !self.tree.add_subview(parent, id) {
            debug!(view = %id, parent = %parent, "rejected add_view");
            return false;
        }
        debug!(view = %id, parent = %parent, "added view");
        self.tree.set_flags(id, ViewFlags::DIRTY, true);

        if self.tree.is_attached(id) {
            if let Some(observer) = self.view_observer.clone() {
                observer.on_view_added(self, id);
            }
        }
        true
    }

    /// Removes a view and all of its descendants from the frame.
    ///
    /// The view’s ID stops resolving. Returns false if the view doesn’t exist or is the root.
    pub fn remove_view(&mut self, id: ViewId) -> bool {
        self.take_out(id, true)
    }

    /// Removes a view from its container but keeps it (and its subtree) around, detached, so that
    /// it can be added again later.
    pub fn detach_view(&mut self, id: ViewId) -> bool {
        self.take_out(id, false)
    }

    /// Removes all views from the frame. A modal view is detached and kept.
    pub fn remove_all(&mut self) {
        if let Some(modal) = self.modal.view() {
            self.detach_view(modal);
        }
        self.focus.clear();
        self.clear_hover(Point2::new(0., 0.), ButtonState::empty(), false);

        let root = self.tree.root();
        for subview in self.tree.subviews(root).to_vec() {
            self.remove_view(subview);
        }
    }

    fn take_out(&mut self, id: ViewId, destroy: bool) -> bool {
        if id == self.tree.root() || !self.tree.contains(id) {
            return false;
        }
        let was_attached = self.tree.is_attached(id);

        let exited = self.release_references(id);
        self.tree.detach(id);
        self.notify_exited(&exited);
        if destroy {
            // drops the views unless a handler is still holding on to one
            let removed = self.tree.destroy(id);
            debug!(view = %id, count = removed.len(), "removed view");
        } else {
            debug!(view = %id, "detached view");
        }

        if was_attached {
            if let Some(observer) = self.view_observer.clone() {
                observer.on_view_removed(self, id);
            }
        }
        true
    }

    /// Clears every frame reference into the subtree at `id`. Returns the hover chain entries that
    /// were dropped, innermost first.
    fn release_references(&mut self, id: ViewId) -> Vec<ViewId> {
        let tree = &self.tree;
        let inside = |view: ViewId| view == id || tree.is_descendant(id, view);

        if self.modal.view().map_or(false, inside) {
            debug!(view = %id, "modal view removed");
            self.modal.clear();
        }
        if self.mouse_down_view.map_or(false, inside) {
            self.mouse_down_view = None;
        }
        if self.drag_view.map_or(false, inside) {
            self.drag_view = None;
        }
        self.focus.release(inside);

        let mut exited = self.hover.truncate_at(inside);
        exited.reverse();
        exited
    }

    /// Tells tooltips and mouse observers that removed hover entries were exited.
    fn notify_exited(&mut self, exited: &[ViewId]) {
        if !exited.is_empty() {
            self.hide_tooltip();
        }
        for view in exited {
            if let Some(tooltips) = self.tooltips.as_mut() {
                tooltips.on_mouse_exited(*view);
            }
            self.notify_observers_exited(*view);
        }
    }

    // view state

    pub fn set_visible(&mut self, id: ViewId, visible: bool) -> bool {
        self.update_flags(id, ViewFlags::VISIBLE, visible)
    }

    pub fn set_mouse_enabled(&mut self, id: ViewId, enabled: bool) -> bool {
        self.update_flags(id, ViewFlags::MOUSE_ENABLED, enabled)
    }

    pub fn set_wants_focus(&mut self, id: ViewId, wants_focus: bool) -> bool {
        self.update_flags(id, ViewFlags::WANTS_FOCUS, wants_focus)
    }

    fn update_flags(&mut self, id: ViewId, flags: ViewFlags, value: bool) -> bool {
        if !self.tree.set_flags(id, flags, value) {
            return false;
        }
        // the parent repaints where a hidden view used to be
        let repaint = self.tree.parent(id).unwrap_or(id);
        self.tree.set_flags(repaint, ViewFlags::DIRTY, true);
        true
    }

    /// Moves or resizes a view. The rect is in its parent’s coordinate space.
    pub fn set_view_rect(&mut self, id: ViewId, rect: Rect) -> bool {
        if id == self.tree.root() || !self.tree.set_rect(id, rect) {
            return false;
        }
        if let Some(parent) = self.tree.parent(id) {
            self.tree.set_flags(parent, ViewFlags::DIRTY, true);
        }
        true
    }

    /// Marks a view as needing a redraw on the next idle.
    pub fn set_dirty(&mut self, id: ViewId) -> bool {
        self.tree.set_flags(id, ViewFlags::DIRTY, true)
    }

    // attributes

    pub fn attributes(&self, id: ViewId) -> Option<&Attributes> {
        self.tree.node(id).map(|node| &node.attributes)
    }

    pub fn set_attribute(&mut self, id: ViewId, attr: AttributeId, value: AttributeValue) -> bool {
        match self.tree.node_mut(id) {
            Some(node) => {
                node.attributes.set(attr, value);
                true
            }
            None => false,
        }
    }

    pub fn remove_attribute(&mut self, id: ViewId, attr: AttributeId) -> Option<AttributeValue> {
        self.tree
            .node_mut(id)
            .and_then(|node| node.attributes.remove(attr))
    }

    /// Sets the text shown in a view’s tooltip.
    pub fn set_tooltip_text(&mut self, id: ViewId, text: impl Into<String>) -> bool {
        self.set_attribute(id, AttributeId::TOOLTIP, AttributeValue::Text(text.into()))
    }

    fn frame_attributes(&self) -> Option<&Attributes> {
        self.attributes(self.tree.root())
    }

    pub fn focus_drawing_enabled(&self) -> bool {
        self.frame_attributes()
            .map_or(false, |attrs| attrs.contains(AttributeId::FOCUS_DRAWING))
    }

    pub fn set_focus_drawing_enabled(&mut self, enabled: bool) {
        let root = self.tree.root();
        if enabled {
            self.set_attribute(root, AttributeId::FOCUS_DRAWING, AttributeValue::Bool(true));
        } else {
            self.remove_attribute(root, AttributeId::FOCUS_DRAWING);
        }
    }

    pub fn focus_color(&self) -> Color {
        self.frame_attributes()
            .and_then(|attrs| attrs.color(AttributeId::FOCUS_COLOR))
            .unwrap_or(Color::RED)
    }

    pub fn set_focus_color(&mut self, color: Color) {
        let root = self.tree.root();
        self.set_attribute(root, AttributeId::FOCUS_COLOR, AttributeValue::Color(color));
    }

    pub fn focus_width(&self) -> f64 {
        self.frame_attributes()
            .and_then(|attrs| attrs.coord(AttributeId::FOCUS_WIDTH))
            .unwrap_or(DEFAULT_FOCUS_WIDTH)
    }

    pub fn set_focus_width(&mut self, width: f64) {
        let root = self.tree.root();
        self.set_attribute(root, AttributeId::FOCUS_WIDTH, AttributeValue::Coord(width));
    }

    // observers

    pub fn register_mouse_observer(&mut self, observer: Arc<dyn MouseObserver>) -> ObserverId {
        self.mouse_observers.register(observer)
    }

    /// Returns false if the observer wasn’t registered.
    pub fn unregister_mouse_observer(&mut self, id: ObserverId) -> bool {
        self.mouse_observers.unregister(id)
    }

    pub fn mouse_observer_count(&self) -> usize {
        self.mouse_observers.len()
    }

    pub fn set_keyboard_hook(&mut self, hook: Option<Arc<dyn KeyboardHook>>) {
        self.keyboard_hook = hook;
    }

    pub fn set_view_observer(&mut self, observer: Option<Arc<dyn ViewObserver>>) {
        self.view_observer = observer;
    }

    fn notify_observers_entered(&mut self, view: ViewId) {
        for (id, observer) in self.mouse_observers.snapshot() {
            if self.mouse_observers.is_registered(id) {
                observer.on_mouse_entered(self, view);
            }
        }
    }

    fn notify_observers_exited(&mut self, view: ViewId) {
        for (id, observer) in self.mouse_observers.snapshot() {
            if self.mouse_observers.is_registered(id) {
                observer.on_mouse_exited(self, view);
            }
        }
    }

    // tooltips

    /// Attaches the built-in tooltip tracker, or detaches any tooltip coordinator.
    pub fn enable_tooltips(&mut self, enabled: bool) {
        if enabled {
            if self.tooltips.is_none() {
                self.tooltips = Some(Box::new(TooltipTracker::default()));
            }
        } else {
            self.set_tooltip_support(None);
        }
    }

    pub fn set_tooltip_support(&mut self, tooltips: Option<Box<dyn TooltipSupport>>) {
        if tooltips.is_none() && self.tooltips.is_some() {
            self.hide_tooltip();
        }
        self.tooltips = tooltips;
    }

    pub fn tooltips_enabled(&self) -> bool {
        self.tooltips.is_some()
    }

    /// Hides the tooltip, telling the backend if one was up.
    fn hide_tooltip(&mut self) {
        let was_visible = match self.tooltips.as_mut() {
            Some(tooltips) => {
                let visible = tooltips.is_visible();
                tooltips.hide_tooltip();
                visible
            }
            None => return,
        };
        if was_visible {
            self.backend_call_mut("hide_tooltip", |backend| backend.hide_tooltip());
        }
    }

    fn poll_tooltip(&mut self) {
        let ticks = match self.ticks() {
            Some(ticks) => ticks,
            None => return,
        };
        let view = match self.tooltips.as_mut().and_then(|tooltips| tooltips.poll(ticks)) {
            Some(view) => view,
            None => return,
        };
        let text = match self
            .attributes(view)
            .and_then(|attrs| attrs.text(AttributeId::TOOLTIP))
        {
            Some(text) => text.to_string(),
            None => return,
        };
        if let Some(rect) = self.tree.frame_rect(view) {
            self.backend_call_mut("show_tooltip", |backend| backend.show_tooltip(rect, &text));
        }
    }

    // idle and painting

    /// Pushes dirty views to the backend for redrawing and shows pending tooltips.
    pub fn idle(&mut self) {
        let mut region = DirtyRegion::new();
        for rect in self.tree.take_dirty_rects() {
            region.add(rect);
        }
        for rect in region.take() {
            self.invalid_rect(rect);
        }
        self.poll_tooltip();
    }

    /// Paints all visible views intersecting the update rect, back to front.
    pub fn draw_rect(&mut self, context: &mut dyn DrawContext, update_rect: Rect) {
        if update_rect.is_empty() {
            return;
        }
        let old_clip = context.clip_rect();
        let clip = match update_rect.intersect(old_clip) {
            Some(clip) => clip,
            None => return,
        };
        context.set_clip_rect(clip);

        let root = self.tree.root();
        self.draw_view(context, root, clip);

        if self.focus_drawing_enabled() {
            if let Some(focus) = self.focus.view() {
                if self.tree.has_flags(focus, ViewFlags::VISIBLE) {
                    if let Some(rect) = self.tree.frame_rect(focus) {
                        context.draw_focus_ring(rect, self.focus_color(), self.focus_width());
                    }
                }
            }
        }

        context.set_clip_rect(old_clip);
    }

    fn draw_view(&mut self, context: &mut dyn DrawContext, id: ViewId, clip: Rect) {
        if !self.tree.has_flags(id, ViewFlags::VISIBLE) {
            return;
        }
        let rect = match self.tree.frame_rect(id) {
            Some(rect) => rect,
            None => return,
        };
        if rect.intersects(clip) {
            if let Some(view) = self.tree.view(id) {
                view.draw(context, rect);
            }
            self.tree.set_flags(id, ViewFlags::DIRTY, false);
        }
        for subview in self.tree.subviews(id).to_vec() {
            self.draw_view(context, subview, clip);
        }
    }

    // backend

    fn backend_call<T>(
        &self,
        operation: &'static str,
        call: impl FnOnce(&dyn Backend) -> Result<T, BackendError>,
    ) -> Option<T> {
        let backend = self.backend.as_deref()?;
        match call(backend) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(operation = operation, error = %err, "backend call failed");
                None
            }
        }
    }

    fn backend_call_mut<T>(
        &mut self,
        operation: &'static str,
        call: impl FnOnce(&mut dyn Backend) -> Result<T, BackendError>,
    ) -> Option<T> {
        let backend = self.backend.as_deref_mut()?;
        match call(backend) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(operation = operation, error = %err, "backend call failed");
                None
            }
        }
    }

    /// Moves the native window.
    pub fn set_position(&mut self, x: f64, y: f64) -> bool {
        let rect = self.rect();
        let moved = rect.offset(Vector2::new(x - rect.left, y - rect.top));
        if self
            .backend_call_mut("set_position", |backend| backend.set_size(moved))
            .is_none()
        {
            return false;
        }
        let root = self.tree.root();
        self.tree.set_rect(root, moved)
    }

    /// The position of the native window on screen.
    pub fn position(&self) -> Option<Point2<f64>> {
        self.backend_call("position", |backend| backend.global_position())
    }

    /// Resizes the native window. Returns false if the size didn’t change.
    pub fn set_size(&mut self, width: f64, height: f64) -> bool {
        let rect = self.rect();
        if rect.width() == width && rect.height() == height {
            return false;
        }
        let resized = rect.with_size(width, height);
        if self
            .backend_call_mut("set_size", |backend| backend.set_size(resized))
            .is_none()
        {
            return false;
        }
        let root = self.tree.root();
        self.tree.set_flags(root, ViewFlags::DIRTY, true);
        self.tree.set_rect(root, resized)
    }

    /// The size of the native window.
    pub fn platform_size(&self) -> Option<Rect> {
        self.backend_call("platform_size", |backend| backend.size())
    }

    pub fn current_mouse_location(&self) -> Option<Point2<f64>> {
        self.backend_call("current_mouse_location", |backend| {
            backend.current_mouse_position()
        })
    }

    /// The current button state, or no buttons without a backend.
    pub fn current_mouse_buttons(&self) -> ButtonState {
        self.backend_call("current_mouse_buttons", |backend| {
            backend.current_mouse_buttons()
        })
        .unwrap_or_default()
    }

    pub fn set_cursor(&mut self, cursor: CursorType) -> bool {
        self.backend_call_mut("set_cursor", |backend| backend.set_mouse_cursor(cursor))
            .is_some()
    }

    /// A millisecond tick counter.
    pub fn ticks(&self) -> Option<u32> {
        self.backend_call("ticks", |backend| backend.ticks())
    }

    /// Starts dragging data out of the frame.
    pub fn do_drag(&mut self, data: DragData, offset: Vector2<f64>) -> DragResult {
        self.backend_call_mut("do_drag", |backend| backend.do_drag(data, offset))
            .unwrap_or(DragResult::Error)
    }

    /// Scrolls a region of the window, or invalidates it if the backend can’t scroll.
    ///
    /// Returns true if the backend scrolled.
    pub fn scroll_rect(&mut self, rect: Rect, distance: Vector2<f64>) -> bool {
        match self.backend_call_mut("scroll_rect", |backend| backend.scroll_rect(rect, distance)) {
            Some(true) => true,
            _ => {
                self.invalid_rect(rect);
                false
            }
        }
    }

    /// Asks the backend to redraw a region.
    pub fn invalid_rect(&mut self, rect: Rect) -> bool {
        if !self.tree.has_flags(self.tree.root(), ViewFlags::VISIBLE) {
            return false;
        }
        self.backend_call_mut("invalid_rect", |backend| backend.invalid_rect(rect))
            .is_some()
    }

    /// Marks all top-level views overlapping the rect as dirty.
    pub fn invalidate(&mut self, rect: Rect) {
        let root = self.tree.root();
        for subview in self.tree.subviews(root).to_vec() {
            if self.tree.rect(subview).map_or(false, |r| r.intersects(rect)) {
                self.tree.set_flags(subview, ViewFlags::DIRTY, true);
            }
        }
    }

    // editor

    pub fn do_idle_stuff(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.do_idle_stuff();
        }
    }

    pub fn begin_edit(&mut self, index: i32) {
        if let Some(editor) = self.editor.as_mut() {
            editor.begin_edit(index);
        }
    }

    pub fn end_edit(&mut self, index: i32) {
        if let Some(editor) = self.editor.as_mut() {
            editor.end_edit(index);
        }
    }

    pub fn knob_mode(&self) -> KnobMode {
        self.editor
            .as_ref()
            .map_or(KnobMode::default(), |editor| editor.knob_mode())
    }

    /// Tears the frame down: removes all views and releases the backend.
    ///
    /// Hover entries are dropped without exit callbacks. Dropping a frame closes it.
    pub fn close(&mut self) {
        self.clear_hover(Point2::new(0., 0.), ButtonState::empty(), false);
        if let Some(modal) = self.modal.view() {
            self.detach_view(modal);
        }
        if self.backend.is_some() {
            self.set_cursor(CursorType::Default);
        }
        self.remove_all();
        if self.backend.take().is_some() {
            debug!("frame closed");
        }
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        self.close();
    }
}
