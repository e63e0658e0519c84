//! Input events as the native backend delivers them.

use crate::backend::DragData;
use crate::events::{ButtonState, KeyEvent, WheelAxis};
use cgmath::Point2;

/// A raw input event. Locations are in frame coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    PointerDown {
        location: Point2<f64>,
        buttons: ButtonState,
    },
    PointerUp {
        location: Point2<f64>,
        buttons: ButtonState,
    },
    PointerMoved {
        location: Point2<f64>,
        buttons: ButtonState,
    },
    /// The pointer left the window.
    PointerExited {
        location: Point2<f64>,
        buttons: ButtonState,
    },
    Wheel {
        location: Point2<f64>,
        axis: WheelAxis,
        distance: f32,
        buttons: ButtonState,
    },
    /// A drag from outside entered the window.
    DragEnter {
        data: DragData,
        location: Point2<f64>,
    },
    DragMove {
        data: DragData,
        location: Point2<f64>,
    },
    /// The drag left the window or was canceled.
    DragLeave {
        data: DragData,
        location: Point2<f64>,
    },
    Drop {
        data: DragData,
        location: Point2<f64>,
    },
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    /// The window was activated (`true`) or deactivated.
    Activate(bool),
    /// Periodic idle tick.
    Idle,
}
