//! Traits for backends.

use crate::events::ButtonState;
use crate::rect::Rect;
use cgmath::{Point2, Vector2};
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by a backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The native window doesn’t exist (yet, or anymore).
    #[error("no native window")]
    NoWindow,

    /// The backend doesn’t support the operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// The platform reported an error.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Mouse cursor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorType {
    Default,
    Wait,
    HSize,
    VSize,
    SizeAll,
    NeSwSize,
    NwSeSize,
    Copy,
    NotAllowed,
    Hand,
}

/// One item of a drag operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DragItem {
    Text(String),
    File(PathBuf),
    Binary(Vec<u8>),
}

/// The data carried by a drag operation, into or out of the frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragData {
    pub items: Vec<DragItem>,
}

/// Outcome of a drag operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResult {
    Error,
    /// The drop target copied the data.
    Copied,
    /// The drop target moved the data.
    Moved,
    /// The drag was canceled.
    NoDrag,
}

/// A native window backend.
///
/// The backend owns the platform window the frame is embedded in. It forwards input to the frame
/// (see [`Host`](crate::Host)) and is asked to redraw invalidated regions.
pub trait Backend: Send {
    /// The current pointer location in frame coordinates.
    fn current_mouse_position(&self) -> Result<Point2<f64>, BackendError>;

    /// The current mouse button and modifier state.
    fn current_mouse_buttons(&self) -> Result<ButtonState, BackendError>;

    fn set_mouse_cursor(&mut self, cursor: CursorType) -> Result<(), BackendError>;

    /// Requests a redraw of a region, in frame coordinates.
    fn invalid_rect(&mut self, rect: Rect) -> Result<(), BackendError>;

    /// Scrolls the contents of a region. Returning `Ok(false)` means the backend can’t scroll and
    /// the region should be redrawn instead.
    fn scroll_rect(&mut self, rect: Rect, distance: Vector2<f64>) -> Result<bool, BackendError> {
        let _ = (rect, distance);
        Ok(false)
    }

    /// A millisecond tick counter.
    fn ticks(&self) -> Result<u32, BackendError>;

    /// Starts a drag operation with the frame as the drag source.
    fn do_drag(&mut self, data: DragData, offset: Vector2<f64>) -> Result<DragResult, BackendError>;

    /// The size of the native window.
    fn size(&self) -> Result<Rect, BackendError>;

    /// Resizes and/or moves the native window.
    fn set_size(&mut self, rect: Rect) -> Result<(), BackendError>;

    /// The position of the native window on screen.
    fn global_position(&self) -> Result<Point2<f64>, BackendError>;

    /// Shows a tooltip near the given rect, in frame coordinates.
    fn show_tooltip(&mut self, rect: Rect, text: &str) -> Result<(), BackendError> {
        let _ = (rect, text);
        Err(BackendError::Unsupported("tooltips"))
    }

    fn hide_tooltip(&mut self) -> Result<(), BackendError> {
        Ok(())
    }
}
