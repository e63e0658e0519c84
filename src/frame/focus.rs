//! Keyboard focus.

use super::Frame;
use crate::tree::ViewFlags;
use crate::view::{FocusMessage, ViewId};
use tracing::debug;

/// Focus bookkeeping of a frame.
#[derive(Debug, Clone)]
pub(crate) struct FocusState {
    focus: Option<ViewId>,
    /// The focus view at the time the frame was deactivated.
    suspended: Option<ViewId>,
    /// The focus view to restore on activation. Focus requests made while inactive end up here.
    pending: Option<ViewId>,
    active: bool,
    /// Set while a focus change is being carried out.
    changing: bool,
}

impl Default for FocusState {
    fn default() -> Self {
        FocusState {
            focus: None,
            suspended: None,
            pending: None,
            active: true,
            changing: false,
        }
    }
}

impl FocusState {
    pub(crate) fn view(&self) -> Option<ViewId> {
        self.focus
    }

    /// Forgets every view, without notifications.
    pub(crate) fn clear(&mut self) {
        self.focus = None;
        self.suspended = None;
        self.pending = None;
    }

    /// Forgets the views matching the predicate, without notifications.
    pub(crate) fn release(&mut self, matches: impl Fn(ViewId) -> bool) {
        for slot in &mut [&mut self.focus, &mut self.suspended, &mut self.pending] {
            if slot.map_or(false, &matches) {
                **slot = None;
            }
        }
    }
}

impl Frame {
    /// The view that currently receives keyboard input.
    pub fn focus_view(&self) -> Option<ViewId> {
        self.focus.view()
    }

    /// Returns false while the host window is deactivated.
    pub fn is_active(&self) -> bool {
        self.focus.active
    }

    /// Moves keyboard focus to a view, or clears it.
    ///
    /// Views that aren’t attached or don’t want focus are ignored. While the frame is inactive,
    /// the request is remembered and carried out on the next activation. A focus change requested
    /// from within a focus change is dropped.
    ///
    /// The new view and its ancestors are notified first, then the old view and its ancestors;
    /// then the old view loses focus and the new view takes it.
    pub fn set_focus(&mut self, view: Option<ViewId>) {
        if self.focus.changing {
            debug!(view = ?view, "dropped nested focus change");
            return;
        }
        if let Some(id) = view {
            if !self
                .tree
                .has_flags(id, ViewFlags::ATTACHED | ViewFlags::WANTS_FOCUS)
            {
                debug!(view = %id, "ignored focus request");
                return;
            }
        }
        if !self.focus.active {
            self.focus.pending = view;
            return;
        }
        if view == self.focus.focus {
            return;
        }

        self.focus.changing = true;
        let old = std::mem::replace(&mut self.focus.focus, view);
        debug!(new = ?view, old = ?old, "focus changed");

        if let Some(new) = view {
            self.tree.set_flags(new, ViewFlags::DIRTY, true);
            self.notify_focus(new, FocusMessage::NewFocusView(new));
        }
        if let Some(old) = old {
            if self.tree.has_flags(old, ViewFlags::WANTS_FOCUS) {
                self.tree.set_flags(old, ViewFlags::DIRTY, true);
                self.notify_focus(old, FocusMessage::OldFocusView(old));
            }
            if let Some(old_view) = self.tree.view(old) {
                old_view.lose_focus(self, old);
            }
        }
        if let Some(new) = view {
            // a handler may have removed the new view in the meantime
            if self.focus.focus == Some(new) {
                if let Some(new_view) = self.tree.view(new) {
                    new_view.take_focus(self, new);
                }
            }
        }
        self.focus.changing = false;
    }

    /// Sends a focus message to the ancestors of `id` up to the frame, then to the frame itself.
    fn notify_focus(&mut self, id: ViewId, message: FocusMessage) {
        let root = self.tree.root();
        let mut receivers: Vec<_> = self
            .tree
            .ancestors(id)
            .into_iter()
            .filter(|ancestor| *ancestor != root)
            .collect();
        receivers.push(root);

        for receiver in receivers {
            if let Some(view) = self.tree.view(receiver) {
                view.notify(self, receiver, message);
            }
        }
    }

    /// Called when the host window is activated or deactivated.
    ///
    /// Deactivation parks the focus view without notifying anyone; activation restores it the
    /// same way. If the parked view went away in the meantime, focus moves to the first view that
    /// accepts it.
    pub fn on_activate(&mut self, active: bool) {
        if self.focus.active == active {
            return;
        }

        if active {
            self.focus.active = true;
            let tree = &self.tree;
            let suspended = self
                .focus
                .suspended
                .take()
                .filter(|id| tree.has_flags(*id, ViewFlags::ATTACHED | ViewFlags::WANTS_FOCUS));
            let pending = self.focus.pending.take();
            debug!(restored = ?suspended, pending = ?pending, "frame activated");

            match (suspended, pending) {
                (Some(suspended), pending) => {
                    self.focus.focus = Some(suspended);
                    if pending != Some(suspended) {
                        self.set_focus(pending);
                    }
                }
                (None, Some(pending)) => self.set_focus(Some(pending)),
                (None, None) => {
                    self.advance_focus(None, false);
                }
            }
        } else {
            self.hide_tooltip();
            let focus = self.focus.focus.take();
            self.focus.suspended = focus;
            self.focus.pending = focus;
            self.focus.active = false;
            debug!(parked = ?focus, "frame deactivated");
        }
    }

    /// Moves focus to the next (or previous) view that accepts it.
    ///
    /// `current` defaults to the focus view. With a modal view installed, only views inside it are
    /// considered. Returns false if nothing could be focused; if `current` is part of the frame,
    /// focus is cleared in that case.
    pub fn advance_focus(&mut self, current: Option<ViewId>, reverse: bool) -> bool {
        if let Some(modal) = self.modal.view() {
            if self.tree.is_container(modal) {
                return self.advance_focus_in(modal, current, reverse);
            }
            // a single modal view has nowhere to go after the first stop
            if current != Some(modal) {
                self.set_focus(Some(modal));
                return self.focus.view() == Some(modal);
            }
            return false;
        }

        let root = self.tree.root();
        let current = match current.or(self.focus.view()) {
            Some(current) => current,
            None => return self.advance_focus_in(root, None, reverse),
        };

        if self.tree.is_descendant(root, current) {
            if self.advance_focus_in(root, Some(current), reverse) {
                return true;
            }
            self.set_focus(None);
            return false;
        }

        // a view outside the frame: try each of its containers on the way up
        let mut from = current;
        let mut parent = self.tree.parent(current);
        while let Some(container) = parent {
            if self.advance_focus_in(container, Some(from), reverse) {
                return true;
            }
            from = container;
            parent = self.tree.parent(container);
        }
        self.advance_focus_in(root, Some(current), reverse)
    }

    /// Focuses the view after (or before) `from` among the focusable views inside `container`,
    /// wrapping around at the ends.
    ///
    /// If `from` isn’t inside the container, starts at the first (or last) focusable view.
    pub(crate) fn advance_focus_in(
        &mut self,
        container: ViewId,
        from: Option<ViewId>,
        reverse: bool,
    ) -> bool {
        let order = self.tree.focus_order(container);
        let (first, last) = match (order.first(), order.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return false,
        };

        // position of `from` in paint order, so that views which can’t take focus themselves
        // still have a place in the sequence
        let all = self.tree.descendants(container);
        let next = match from.and_then(|from| all.iter().position(|id| *id == from)) {
            Some(index) if reverse => all[..index]
                .iter()
                .rev()
                .find(|id| order.contains(id))
                .copied()
                .unwrap_or(last),
            Some(index) => all[index + 1..]
                .iter()
                .find(|id| order.contains(id))
                .copied()
                .unwrap_or(first),
            None if reverse => last,
            None => first,
        };

        self.set_focus(Some(next));
        self.focus.view() == Some(next)
    }
}
