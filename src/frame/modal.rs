//! Modal views and hit testing.

use super::Frame;
use crate::events::ButtonState;
use crate::tree::{ViewFlags, ViewTree};
use crate::view::ViewId;
use cgmath::Point2;
use tracing::debug;

/// Holds the modal view, if any.
///
/// While a modal view is installed it is also a regular child of the frame; the gate only
/// confines routing to its subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ModalGate {
    view: Option<ViewId>,
}

impl ModalGate {
    pub(crate) fn view(&self) -> Option<ViewId> {
        self.view
    }

    pub(crate) fn set(&mut self, view: ViewId) {
        self.view = Some(view);
    }

    pub(crate) fn clear(&mut self) -> Option<ViewId> {
        self.view.take()
    }

    /// Returns true if `id` is the modal view or inside it.
    pub(crate) fn contains(&self, tree: &ViewTree, id: ViewId) -> bool {
        match self.view {
            Some(modal) => modal == id || tree.is_descendant(modal, id),
            None => false,
        }
    }
}

impl Frame {
    /// The modal view, if one is installed.
    pub fn modal_view(&self) -> Option<ViewId> {
        self.modal.view()
    }

    /// Installs or removes the modal view.
    ///
    /// Installing fails if there already is a modal view, or if the view is already in a
    /// container. The view is added to the frame, the hover chain is cleared and the view (or the
    /// first focusable view inside it) gets keyboard focus. If nothing inside it can take focus,
    /// focus is cleared.
    ///
    /// Passing `None` detaches the current modal view (it is not destroyed) and updates the hover
    /// chain for the current pointer location.
    pub fn set_modal_view(&mut self, view: Option<ViewId>) -> bool {
        if let Some(id) = view {
            if self.modal.view().is_some() {
                debug!(view = %id, "rejected modal view: already modal");
                return false;
            }
            if !self.tree.contains(id) || self.tree.is_attached(id) {
                debug!(view = %id, "rejected modal view: already attached");
                return false;
            }
        }

        if let Some(old) = self.modal.view() {
            self.detach_view(old);
            debug!(view = %old, "modal view removed");
        }

        match view {
            Some(id) => {
                let root = self.tree.root();
                if !self.add_view(root, id) {
                    return false;
                }
                self.modal.set(id);
                debug!(view = %id, "modal view installed");

                self.clear_hover(Point2::new(0., 0.), ButtonState::empty(), true);
                if self.tree.is_container(id) {
                    let focused = self.advance_focus_in(id, None, false);
                    let outside = self
                        .focus
                        .view()
                        .map_or(false, |focus| !self.modal.contains(&self.tree, focus));
                    if !focused && outside {
                        self.set_focus(None);
                    }
                } else if self.tree.has_flags(id, ViewFlags::WANTS_FOCUS) {
                    self.set_focus(Some(id));
                } else {
                    self.set_focus(None);
                }
                true
            }
            None => {
                if let Some(point) = self.current_mouse_location() {
                    let buttons = self.current_mouse_buttons();
                    self.check_mouse_views(point, buttons);
                }
                true
            }
        }
    }

    /// Returns the front-most visible view under a point in frame coordinates.
    ///
    /// If `deep` is set, descends into containers. With a modal view installed, only the modal
    /// view and its subtree are considered.
    pub fn view_at(&self, point: Point2<f64>, deep: bool) -> Option<ViewId> {
        match self.modal.view() {
            Some(modal) => {
                if !self.tree.rect(modal)?.contains(point) {
                    return None;
                }
                if deep && self.tree.is_container(modal) {
                    let local = self.tree.to_child_space(modal, point);
                    return self.tree.view_at(modal, local, deep);
                }
                Some(modal)
            }
            None => self.tree.view_at(self.tree.root(), point, deep),
        }
    }

    /// Returns the front-most visible container under a point in frame coordinates.
    ///
    /// Without a modal view this falls back to the frame’s root. With a modal view installed,
    /// returns `None` unless the point is inside a modal container.
    pub fn container_at(&self, point: Point2<f64>, deep: bool) -> Option<ViewId> {
        match self.modal.view() {
            Some(modal) => {
                if !self.tree.is_container(modal) || !self.tree.rect(modal)?.contains(point) {
                    return None;
                }
                if deep {
                    let local = self.tree.to_child_space(modal, point);
                    return Some(self.tree.container_at(modal, local, deep));
                }
                Some(modal)
            }
            None => Some(self.tree.container_at(self.tree.root(), point, deep)),
        }
    }
}
