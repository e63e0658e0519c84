//! Drawing contexts.

use crate::color::Color;
use crate::rect::Rect;

/// A drawing surface provided by the backend for one painting pass.
///
/// The actual drawing primitives belong to the backend; the frame only needs clipping and the
/// focus highlight.
pub trait DrawContext {
    /// The current clip rectangle, in frame coordinates.
    fn clip_rect(&self) -> Rect;

    fn set_clip_rect(&mut self, rect: Rect);

    /// Strokes a highlight around the focus view.
    fn draw_focus_ring(&mut self, rect: Rect, color: Color, width: f64);
}
