//! Hover tracking.
//!
//! The hover chain is the path of views under the pointer, from the outermost container below the
//! frame down to the view actually hit. Every entry has been sent exactly one enter notification
//! and will get exactly one exit notification (unless it is removed from the frame first).

use super::Frame;
use crate::events::ButtonState;
use crate::view::ViewId;
use cgmath::Point2;
use tracing::trace;

/// Views under the pointer, outermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct HoverChain {
    entries: Vec<ViewId>,
}

impl HoverChain {
    pub(crate) fn entries(&self) -> &[ViewId] {
        &self.entries
    }

    pub(crate) fn innermost(&self) -> Option<ViewId> {
        self.entries.last().copied()
    }

    pub(crate) fn contains(&self, id: ViewId) -> bool {
        self.entries.contains(&id)
    }

    pub(crate) fn push(&mut self, id: ViewId) {
        self.entries.push(id);
    }

    pub(crate) fn pop(&mut self) -> Option<ViewId> {
        self.entries.pop()
    }

    /// Empties the chain, returning the old entries outermost first.
    pub(crate) fn take(&mut self) -> Vec<ViewId> {
        std::mem::replace(&mut self.entries, Vec::new())
    }

    /// Removes the first entry matching the predicate and everything after it.
    ///
    /// Entries are returned outermost first.
    pub(crate) fn truncate_at(&mut self, matches: impl Fn(ViewId) -> bool) -> Vec<ViewId> {
        match self.entries.iter().position(|entry| matches(*entry)) {
            Some(index) => self.entries.split_off(index),
            None => Vec::new(),
        }
    }
}

impl Frame {
    /// Brings the hover chain up to date with the pointer location.
    ///
    /// Does nothing while a view owns the pointer, so dragging doesn’t change hover state.
    pub(crate) fn check_mouse_views(&mut self, point: Point2<f64>, buttons: ButtonState) {
        if self.mouse_down_view.is_some() {
            return;
        }

        let root = self.tree.root();
        let target = self
            .view_at(point, true)
            .or_else(|| self.container_at(point, true))
            .filter(|target| *target != root);
        let current = self.hover.innermost();
        if target == current {
            return;
        }

        if self.tooltips.is_some() {
            self.hide_tooltip();
            let ticks = self.ticks().unwrap_or(0);
            if let Some(tooltips) = self.tooltips.as_mut() {
                if let Some(current) = current {
                    tooltips.on_mouse_exited(current);
                }
                if let Some(target) = target {
                    tooltips.on_mouse_entered(target, ticks);
                }
            }
        }

        let target = match target {
            Some(target) => target,
            None => {
                self.clear_hover(point, buttons, true);
                return;
            }
        };

        // unwind everything that isn’t on the path to the new target
        while let Some(entry) = self.hover.innermost() {
            if entry == target || self.tree.is_descendant(entry, target) {
                break;
            }
            self.hover.pop();
            self.fire_mouse_exited(entry, point, buttons);
        }

        let surviving = self.hover.innermost();
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(view) = current {
            if Some(view) == surviving || view == root {
                break;
            }
            path.push(view);
            current = self.tree.parent(view);
        }
        path.reverse();

        for view in &path {
            self.hover.push(*view);
        }
        for view in path {
            // an enter handler may have removed views further down the path
            if self.hover.contains(view) {
                self.fire_mouse_entered(view, point, buttons);
            }
        }
    }

    /// Empties the hover chain, innermost entry first.
    ///
    /// If `call_exit` is false, views aren’t told that they were exited (but tooltips and mouse
    /// observers still are).
    pub(crate) fn clear_hover(
        &mut self,
        point: Point2<f64>,
        buttons: ButtonState,
        call_exit: bool,
    ) {
        self.hide_tooltip();
        let entries = self.hover.take();
        for entry in entries.into_iter().rev() {
            if !self.tree.contains(entry) {
                continue;
            }
            if call_exit {
                self.send_mouse_exited(entry, point, buttons);
            }
            if let Some(tooltips) = self.tooltips.as_mut() {
                tooltips.on_mouse_exited(entry);
            }
            self.notify_observers_exited(entry);
        }
    }

    fn fire_mouse_entered(&mut self, id: ViewId, point: Point2<f64>, buttons: ButtonState) {
        trace!(view = %id, "mouse entered");
        if let Some(view) = self.tree.view(id) {
            let local = self.tree.to_local(id, point);
            view.on_mouse_entered(self, id, local, buttons);
        }
        self.notify_observers_entered(id);
    }

    fn fire_mouse_exited(&mut self, id: ViewId, point: Point2<f64>, buttons: ButtonState) {
        self.send_mouse_exited(id, point, buttons);
        self.notify_observers_exited(id);
    }

    fn send_mouse_exited(&mut self, id: ViewId, point: Point2<f64>, buttons: ButtonState) {
        trace!(view = %id, "mouse exited");
        if let Some(view) = self.tree.view(id) {
            let local = self.tree.to_local(id, point);
            view.on_mouse_exited(self, id, local, buttons);
        }
    }
}
