use crate::backend::DragData;
use crate::draw::DrawContext;
use crate::events::{ButtonState, KeyEvent, MouseEventResult, WheelAxis};
use crate::frame::Frame;
use crate::rect::Rect;
use cgmath::Point2;
use core::any::Any;
use core::fmt;
use uuid::Uuid;

/// A unique identifier for a view.
///
/// (this is just a UUID)
///
/// View IDs never own anything. A view ID whose view has been removed from the frame simply stops
/// resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(Uuid);

impl ViewId {
    pub(crate) fn new() -> ViewId {
        ViewId(Uuid::new_v4())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Focus notifications sent to the ancestors of a view whose focus state changed, and finally to
/// the frame’s root view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMessage {
    /// The view gained keyboard focus.
    NewFocusView(ViewId),
    /// The view lost keyboard focus.
    OldFocusView(ViewId),
}

/// The behavior of a view in the frame.
///
/// Geometry, visibility and the other flags are owned by the frame; a `View` only decides how to
/// react to events. Every method receives the frame and the view’s own ID, so handlers may change
/// focus, add or remove views, and so on. The frame holds a strong reference to the view for the
/// duration of each call, so a view that removes itself will still finish running its handler.
///
/// Points are always in the coordinate space of the view’s parent, i.e. the same space as the
/// view’s rect.
///
/// All methods have do-nothing defaults. Containers receive events their children didn’t handle.
pub trait View: Any + fmt::Debug + Send + Sync {
    /// Returns true if the point hits the view. `rect` is the view’s rect.
    fn hit_test(&self, point: Point2<f64>, rect: Rect, buttons: ButtonState) -> bool {
        let _ = buttons;
        rect.contains(point)
    }

    fn on_mouse_down(
        &self,
        frame: &mut Frame,
        id: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let _ = (frame, id, point, buttons);
        MouseEventResult::NotHandled
    }

    fn on_mouse_up(
        &self,
        frame: &mut Frame,
        id: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let _ = (frame, id, point, buttons);
        MouseEventResult::NotHandled
    }

    fn on_mouse_moved(
        &self,
        frame: &mut Frame,
        id: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) -> MouseEventResult {
        let _ = (frame, id, point, buttons);
        MouseEventResult::NotHandled
    }

    /// Called when the view joins the hover chain.
    fn on_mouse_entered(
        &self,
        frame: &mut Frame,
        id: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) {
        let _ = (frame, id, point, buttons);
    }

    /// Called when the view leaves the hover chain.
    fn on_mouse_exited(
        &self,
        frame: &mut Frame,
        id: ViewId,
        point: Point2<f64>,
        buttons: ButtonState,
    ) {
        let _ = (frame, id, point, buttons);
    }

    /// Returns true if the wheel event was consumed.
    fn on_wheel(
        &self,
        frame: &mut Frame,
        id: ViewId,
        point: Point2<f64>,
        axis: WheelAxis,
        distance: f32,
        buttons: ButtonState,
    ) -> bool {
        let _ = (frame, id, point, axis, distance, buttons);
        false
    }

    /// Called when a drag from outside the frame moves onto the view.
    fn on_drag_enter(&self, frame: &mut Frame, id: ViewId, data: &DragData, point: Point2<f64>) {
        let _ = (frame, id, data, point);
    }

    fn on_drag_move(&self, frame: &mut Frame, id: ViewId, data: &DragData, point: Point2<f64>) {
        let _ = (frame, id, data, point);
    }

    /// Called when the drag moves off the view or is canceled.
    fn on_drag_leave(&self, frame: &mut Frame, id: ViewId, data: &DragData, point: Point2<f64>) {
        let _ = (frame, id, data, point);
    }

    /// Returns true if the view accepted the dropped data.
    fn on_drop(&self, frame: &mut Frame, id: ViewId, data: &DragData, point: Point2<f64>) -> bool {
        let _ = (frame, id, data, point);
        false
    }

    /// Returns true if the key was consumed.
    fn on_key_down(&self, frame: &mut Frame, id: ViewId, key: &KeyEvent) -> bool {
        let _ = (frame, id, key);
        false
    }

    /// Returns true if the key was consumed.
    fn on_key_up(&self, frame: &mut Frame, id: ViewId, key: &KeyEvent) -> bool {
        let _ = (frame, id, key);
        false
    }

    /// Called after the view received keyboard focus.
    fn take_focus(&self, frame: &mut Frame, id: ViewId) {
        let _ = (frame, id);
    }

    /// Called after the view lost keyboard focus.
    fn lose_focus(&self, frame: &mut Frame, id: ViewId) {
        let _ = (frame, id);
    }

    /// Receives focus notifications about descendants.
    fn notify(&self, frame: &mut Frame, id: ViewId, message: FocusMessage) {
        let _ = (frame, id, message);
    }

    /// If true, the view edits text and loses focus whenever the pointer goes down anywhere, so
    /// that the edit is committed before the next interaction.
    fn is_text_edit(&self) -> bool {
        false
    }

    /// Paints the view. `rect` is the view’s rect in frame coordinates.
    fn draw(&self, context: &mut dyn DrawContext, rect: Rect) {
        let _ = (context, rect);
    }
}

/// An empty view type that does absolutely nothing.
///
/// Useful as the behavior of plain containers and of the frame’s root.
impl View for () {}
