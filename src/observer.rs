//! External listeners on a frame.

use crate::events::{ButtonState, KeyEvent, MouseEventResult};
use crate::frame::Frame;
use crate::view::ViewId;
use cgmath::Point2;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Listens to pointer activity on a frame independently of the view tree.
///
/// Observers get first refusal on pointer-down and pointer-move events and are told about every
/// hover transition.
pub trait MouseObserver: Send + Sync {
    fn on_mouse_entered(&self, frame: &mut Frame, view: ViewId) {
        let _ = (frame, view);
    }

    fn on_mouse_exited(&self, frame: &mut Frame, view: ViewId) {
        let _ = (frame, view);
    }

    fn on_mouse_down(
        &self,
        frame: &mut Frame,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let _ = (frame, point, buttons);
        MouseEventResult::NotHandled
    }

    fn on_mouse_moved(
        &self,
        frame: &mut Frame,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let _ = (frame, point, buttons);
        MouseEventResult::NotHandled
    }
}

/// Handle of a registered mouse observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

/// Registered mouse observers, in registration order.
#[derive(Default)]
pub(crate) struct MouseObservers {
    next_id: u64,
    observers: BTreeMap<ObserverId, Arc<dyn MouseObserver>>,
}

impl MouseObservers {
    pub(crate) fn register(&mut self, observer: Arc<dyn MouseObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        id
    }

    pub(crate) fn unregister(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub(crate) fn is_registered(&self, id: ObserverId) -> bool {
        self.observers.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    /// A copy of the current registrations.
    ///
    /// Callers iterate over the snapshot and skip entries that were unregistered in the meantime,
    /// because observers may unregister themselves or others while being called.
    pub(crate) fn snapshot(&self) -> Vec<(ObserverId, Arc<dyn MouseObserver>)> {
        self.observers
            .iter()
            .map(|(id, observer)| (*id, Arc::clone(observer)))
            .collect()
    }
}

/// Gets first refusal on every key event, before focus-based routing.
pub trait KeyboardHook: Send + Sync {
    /// Returns true if the key was consumed.
    fn on_key_down(&self, frame: &mut Frame, key: &KeyEvent) -> bool;

    /// Returns true if the key was consumed.
    fn on_key_up(&self, frame: &mut Frame, key: &KeyEvent) -> bool;
}

/// Notified after every structural change to the view tree.
pub trait ViewObserver: Send + Sync {
    fn on_view_added(&self, frame: &mut Frame, view: ViewId) {
        let _ = (frame, view);
    }

    /// The view no longer resolves in the frame when this is called.
    fn on_view_removed(&self, frame: &mut Frame, view: ViewId) {
        let _ = (frame, view);
    }
}
