//! Input routing.

use super::Frame;
use crate::backend::DragData;
use crate::events::{ButtonState, KeyEvent, KeyOutcome, MouseEventResult, WheelAxis};
use crate::tree::ViewFlags;
use crate::view::ViewId;
use cgmath::Point2;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyPhase {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragPhase {
    Enter,
    Move,
    Leave,
}

impl Frame {
    /// Handles a pointer-down event. `point` is in frame coordinates.
    ///
    /// Mouse observers get first refusal. Otherwise the event goes to the front-most view under
    /// the pointer (only inside the modal view, if there is one), and the view that consumed it
    /// receives all pointer events up to the next pointer-up.
    pub fn dispatch_pointer_down(
        &mut self,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        self.mouse_down_view = None;

        if let Some(focus) = self.focus.view() {
            if self.tree.view(focus).map_or(false, |view| view.is_text_edit()) {
                // commit the edit before anything else happens
                self.set_focus(None);
            }
        }

        self.hide_tooltip();
        if let Some(tooltips) = self.tooltips.as_mut() {
            tooltips.on_mouse_down(point);
        }

        if self.offer_observers_mouse_down(point, buttons).is_handled() {
            return MouseEventResult::Handled;
        }

        let owner = match self.modal.view() {
            Some(modal) => {
                if self.accepts_pointer(modal, point, buttons) {
                    self.offer_mouse_down(modal, point, buttons)
                } else {
                    None
                }
            }
            None => {
                let root = self.tree.root();
                self.route_mouse_down(root, point, buttons)
            }
        };

        match owner {
            Some(owner) => {
                trace!(view = %owner, "pointer down owner");
                if self.tree.is_attached(owner) {
                    self.mouse_down_view = Some(owner);
                }
                MouseEventResult::Handled
            }
            None => MouseEventResult::NotHandled,
        }
    }

    /// Handles a pointer-up event. The view that consumed the pointer-down receives it, then the
    /// hover chain is updated.
    pub fn dispatch_pointer_up(
        &mut self,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let result = match self.mouse_down_view.take() {
            Some(owner) => match self.tree.view(owner) {
                Some(view) => {
                    let local = self.tree.to_local(owner, point);
                    view.on_mouse_up(self, owner, local, buttons);
                    MouseEventResult::Handled
                }
                None => MouseEventResult::NotHandled,
            },
            None => MouseEventResult::NotHandled,
        };

        // buttons were just released, only modifiers are still relevant
        self.check_mouse_views(point, buttons.modifiers());
        result
    }

    /// Handles a pointer-move event.
    ///
    /// If nobody claims the move, it is offered to the hover chain from the innermost view
    /// outwards.
    pub fn dispatch_pointer_moved(
        &mut self,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        if self.tooltips.is_some() {
            let ticks = self.ticks().unwrap_or(0);
            if let Some(tooltips) = self.tooltips.as_mut() {
                tooltips.on_mouse_moved(point, ticks);
            }
        }

        self.check_mouse_views(point, buttons);

        if self.offer_observers_mouse_moved(point, buttons).is_handled() {
            return MouseEventResult::Handled;
        }

        if let Some(modal) = self.modal.view() {
            let target = match self.mouse_down_view {
                Some(owner) if self.modal.contains(&self.tree, owner) => owner,
                _ => modal,
            };
            return self.send_mouse_moved(target, point, buttons);
        }

        if let Some(owner) = self.mouse_down_view {
            if self.send_mouse_moved(owner, point, buttons).is_handled() {
                return MouseEventResult::Handled;
            }
        }

        let modifiers = buttons.modifiers();
        for entry in self.hover.entries().to_vec().into_iter().rev() {
            if !self.hover.contains(entry) {
                continue;
            }
            if self.send_mouse_moved(entry, point, modifiers).is_handled() {
                return MouseEventResult::Handled;
            }
        }
        MouseEventResult::NotHandled
    }

    /// Called by the backend when the pointer leaves the window.
    pub fn dispatch_pointer_exited(
        &mut self,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        if self.mouse_down_view.is_none() {
            self.clear_hover(point, buttons, true);
        }
        MouseEventResult::Handled
    }

    /// Handles a scroll wheel event. The deepest view under the pointer gets the first chance to
    /// consume it, then its containers. Ignored while a view owns the pointer.
    pub fn dispatch_wheel(
        &mut self,
        point: Point2<f64>,
        axis: WheelAxis,
        distance: f32,
        buttons: ButtonState,
    ) -> bool {
        if self.mouse_down_view.is_some() {
            return false;
        }
        let target = match self.view_at(point, true) {
            Some(target) => target,
            None => return false,
        };

        let root = self.tree.root();
        let mut receivers = vec![target];
        receivers.extend(
            self.tree
                .ancestors(target)
                .into_iter()
                .take_while(|ancestor| *ancestor != root),
        );

        let mut handled = false;
        for id in receivers {
            if !self.tree.has_flags(id, ViewFlags::MOUSE_ENABLED) {
                continue;
            }
            if let Some(view) = self.tree.view(id) {
                let local = self.tree.to_local(id, point);
                if view.on_wheel(self, id, local, axis, distance, buttons) {
                    handled = true;
                    break;
                }
            }
        }

        self.check_mouse_views(point, buttons);
        handled
    }

    /// Called by the backend when a drag from outside enters the window.
    ///
    /// The deepest view under the pointer becomes the drag target (only inside the modal view, if
    /// there is one).
    pub fn dispatch_drag_enter(&mut self, data: &DragData, point: Point2<f64>) {
        self.retarget_drag(data, point);
    }

    /// Called by the backend when an incoming drag moves. Views the drag moves off of are told
    /// it left; the view it moves onto is told it entered.
    pub fn dispatch_drag_move(&mut self, data: &DragData, point: Point2<f64>) {
        let previous = self.drag_view;
        let target = self.retarget_drag(data, point);
        if let Some(target) = target.filter(|target| previous == Some(*target)) {
            self.send_drag(target, data, point, DragPhase::Move);
        }
    }

    /// Called by the backend when an incoming drag leaves the window or is canceled.
    pub fn dispatch_drag_leave(&mut self, data: &DragData, point: Point2<f64>) {
        if let Some(target) = self.drag_view.take() {
            self.send_drag(target, data, point, DragPhase::Leave);
        }
    }

    /// Called by the backend when the data is dropped. Returns true if a view accepted it.
    ///
    /// If the drop lands on a different view than the current drag target, the target is told the
    /// drag left. The view under the pointer then receives the drop, and the drag ends.
    pub fn dispatch_drop(&mut self, data: &DragData, point: Point2<f64>) -> bool {
        let target = self.drag_target(point);
        if let Some(previous) = self.drag_view.take() {
            if Some(previous) != target {
                self.send_drag(previous, data, point, DragPhase::Leave);
            }
        }

        let id = match target {
            Some(id) => id,
            None => return false,
        };
        let view = match self.tree.view(id) {
            Some(view) => view,
            None => return false,
        };
        let local = self.tree.to_local(id, point);
        let accepted = view.on_drop(self, id, data, local);
        trace!(view = %id, accepted, "drop");
        accepted
    }

    fn drag_target(&self, point: Point2<f64>) -> Option<ViewId> {
        self.view_at(point, true)
            .filter(|id| self.tree.has_flags(*id, ViewFlags::MOUSE_ENABLED))
    }

    /// Moves the drag target to the view under the pointer, sending leave and enter as needed.
    fn retarget_drag(&mut self, data: &DragData, point: Point2<f64>) -> Option<ViewId> {
        let target = self.drag_target(point);
        if target == self.drag_view {
            return target;
        }
        if let Some(previous) = self.drag_view.take() {
            self.send_drag(previous, data, point, DragPhase::Leave);
        }
        // a leave handler may have removed the new target
        let target = target.filter(|id| self.tree.is_attached(*id));
        self.drag_view = target;
        if let Some(target) = target {
            self.send_drag(target, data, point, DragPhase::Enter);
        }
        self.drag_view
    }

    fn send_drag(&mut self, id: ViewId, data: &DragData, point: Point2<f64>, phase: DragPhase) {
        let view = match self.tree.view(id) {
            Some(view) => view,
            None => return,
        };
        let local = self.tree.to_local(id, point);
        match phase {
            DragPhase::Enter => view.on_drag_enter(self, id, data, local),
            DragPhase::Move => view.on_drag_move(self, id, data, local),
            DragPhase::Leave => view.on_drag_leave(self, id, data, local),
        }
    }

    /// Handles a key-down event.
    ///
    /// The keyboard hook goes first, then the focus view and its containers, then the modal view.
    /// An unclaimed Tab moves focus.
    pub fn dispatch_key_down(&mut self, key: &KeyEvent) -> KeyOutcome {
        if self.route_key(key, KeyPhase::Down) {
            return KeyOutcome::Handled;
        }
        if key.is_focus_advance() {
            let focus = self.focus.view();
            if self.advance_focus(focus, key.is_reverse()) {
                return KeyOutcome::FocusAdvanced;
            }
        }
        KeyOutcome::Unhandled
    }

    /// Handles a key-up event. Returns true if the key was consumed.
    pub fn dispatch_key_up(&mut self, key: &KeyEvent) -> bool {
        self.route_key(key, KeyPhase::Up)
    }

    fn route_key(&mut self, key: &KeyEvent, phase: KeyPhase) -> bool {
        if let Some(hook) = self.keyboard_hook.clone() {
            let consumed = match phase {
                KeyPhase::Down => hook.on_key_down(self, key),
                KeyPhase::Up => hook.on_key_up(self, key),
            };
            if consumed {
                return true;
            }
        }

        // a focus view outside the modal view never sees keys
        let focus = self.focus.view().filter(|focus| {
            self.modal.view().is_none() || self.modal.contains(&self.tree, *focus)
        });
        if let Some(focus) = focus {
            let root = self.tree.root();
            let mut receivers = vec![focus];
            receivers.extend(
                self.tree
                    .ancestors(focus)
                    .into_iter()
                    .take_while(|ancestor| *ancestor != root),
            );
            for id in receivers {
                if self.tree.has_flags(id, ViewFlags::MOUSE_ENABLED)
                    && self.send_key(id, key, phase)
                {
                    return true;
                }
            }
        }

        match self.modal.view() {
            Some(modal) => self.send_key(modal, key, phase),
            None => false,
        }
    }

    fn send_key(&mut self, id: ViewId, key: &KeyEvent, phase: KeyPhase) -> bool {
        match self.tree.view(id) {
            Some(view) => match phase {
                KeyPhase::Down => view.on_key_down(self, id, key),
                KeyPhase::Up => view.on_key_up(self, id, key),
            },
            None => false,
        }
    }

    /// Returns true if the view would take a pointer event at `point` (in its parent’s space).
    fn accepts_pointer(&self, id: ViewId, point: Point2<f64>, buttons: ButtonState) -> bool {
        let node = match self.tree.node(id) {
            Some(node) => node,
            None => return false,
        };
        node.flags
            .contains(ViewFlags::VISIBLE | ViewFlags::MOUSE_ENABLED)
            && node.view.hit_test(point, node.rect, buttons)
    }

    /// Offers a pointer-down to the subviews of a container, front to back. `point` is in the
    /// container’s subview space. Returns the view that consumed the event.
    fn route_mouse_down(
        &mut self,
        container: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> Option<ViewId> {
        let subviews = self.tree.subviews(container).to_vec();
        for subview in subviews.into_iter().rev() {
            if self.accepts_pointer(subview, point, buttons) {
                // the front-most hit view decides
                return self.offer_mouse_down(subview, point, buttons);
            }
        }
        None
    }

    /// Offers a pointer-down to a view. Containers offer it to their subviews first and handle it
    /// themselves if none of them does.
    fn offer_mouse_down(
        &mut self,
        id: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> Option<ViewId> {
        if self.tree.is_container(id) {
            let local = self.tree.to_child_space(id, point);
            if let Some(owner) = self.route_mouse_down(id, local, buttons) {
                return Some(owner);
            }
        }
        let view = self.tree.view(id)?;
        if view.on_mouse_down(self, id, point, buttons).is_handled() {
            Some(id)
        } else {
            None
        }
    }

    fn send_mouse_moved(
        &mut self,
        id: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        match self.tree.view(id) {
            Some(view) => {
                let local = self.tree.to_local(id, point);
                view.on_mouse_moved(self, id, local, buttons)
            }
            None => MouseEventResult::NotHandled,
        }
    }

    /// Offers a pointer-down to all mouse observers. Handled if any of them handled it.
    fn offer_observers_mouse_down(
        &mut self,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let mut result = MouseEventResult::NotHandled;
        for (id, observer) in self.mouse_observers.snapshot() {
            if self.mouse_observers.is_registered(id)
                && observer.on_mouse_down(self, point, buttons).is_handled()
            {
                result = MouseEventResult::Handled;
            }
        }
        result
    }

    fn offer_observers_mouse_moved(
        &mut self,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let mut result = MouseEventResult::NotHandled;
        for (id, observer) in self.mouse_observers.snapshot() {
            if self.mouse_observers.is_registered(id)
                && observer.on_mouse_moved(self, point, buttons).is_handled()
            {
                result = MouseEventResult::Handled;
            }
        }
        result
    }
}
