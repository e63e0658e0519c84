//! Tooltip coordination.

use crate::view::ViewId;
use cgmath::Point2;

/// Receives the pointer activity needed to decide when tooltips show and hide.
///
/// A coordinator owns no frame state; the frame asks it on idle which view’s tooltip should be
/// visible.
pub trait TooltipSupport: Send {
    fn on_mouse_entered(&mut self, view: ViewId, ticks: u32);
    fn on_mouse_exited(&mut self, view: ViewId);
    fn on_mouse_down(&mut self, point: Point2<f64>);
    fn on_mouse_moved(&mut self, point: Point2<f64>, ticks: u32);
    fn hide_tooltip(&mut self);

    /// Returns a view whose tooltip should be shown now, if any. Called on idle.
    fn poll(&mut self, ticks: u32) -> Option<ViewId>;

    /// Returns true if a tooltip is currently shown.
    fn is_visible(&self) -> bool;
}

/// Delay between hovering a view and showing its tooltip.
pub const DEFAULT_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TooltipState {
    Hidden,
    /// Waiting for the delay to pass since `since`.
    Pending { since: u32 },
    Visible,
    /// Hidden by a click; stays hidden until the pointer enters another view.
    ForceHidden,
}

/// The built-in tooltip coordinator.
#[derive(Debug, Clone)]
pub struct TooltipTracker {
    delay: u32,
    current: Option<ViewId>,
    state: TooltipState,
}

impl Default for TooltipTracker {
    fn default() -> Self {
        TooltipTracker::new(DEFAULT_DELAY_MS)
    }
}

impl TooltipTracker {
    pub fn new(delay: u32) -> TooltipTracker {
        TooltipTracker {
            delay,
            current: None,
            state: TooltipState::Hidden,
        }
    }

    /// The view the pointer is currently over.
    pub fn current(&self) -> Option<ViewId> {
        self.current
    }
}

impl TooltipSupport for TooltipTracker {
    fn on_mouse_entered(&mut self, view: ViewId, ticks: u32) {
        self.current = Some(view);
        self.state = TooltipState::Pending { since: ticks };
    }

    fn on_mouse_exited(&mut self, view: ViewId) {
        if self.current == Some(view) {
            self.current = None;
            self.state = TooltipState::Hidden;
        }
    }

    fn on_mouse_down(&mut self, _point: Point2<f64>) {
        self.state = TooltipState::ForceHidden;
    }

    fn on_mouse_moved(&mut self, _point: Point2<f64>, ticks: u32) {
        // moving restarts the delay unless the tooltip is already up
        if let TooltipState::Pending { .. } = self.state {
            self.state = TooltipState::Pending { since: ticks };
        }
    }

    fn hide_tooltip(&mut self) {
        if self.state == TooltipState::Visible {
            self.state = TooltipState::Hidden;
        }
    }

    fn poll(&mut self, ticks: u32) -> Option<ViewId> {
        match self.state {
            TooltipState::Pending { since } if ticks.wrapping_sub(since) >= self.delay => {
                self.state = TooltipState::Visible;
                self.current
            }
            _ => None,
        }
    }

    fn is_visible(&self) -> bool {
        self.state == TooltipState::Visible
    }
}
