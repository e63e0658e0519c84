#![allow(dead_code)]

use cgmath::{Point2, Vector2};
use parking_lot::Mutex;
use perch::backend::{Backend, BackendError, CursorType, DragData, DragResult};
use perch::events::{ButtonState, KeyEvent, MouseEventResult, WheelAxis};
use perch::observer::MouseObserver;
use perch::{FocusMessage, Frame, Rect, View, ViewId};
use std::sync::Arc;

/// A recorded callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Entered(&'static str),
    Exited(&'static str),
    Down(&'static str),
    Up(&'static str),
    Moved(&'static str),
    Wheel(&'static str),
    KeyDown(&'static str),
    KeyUp(&'static str),
    DragEnter(&'static str),
    DragMove(&'static str),
    DragLeave(&'static str),
    Drop(&'static str),
    TakeFocus(&'static str),
    LoseFocus(&'static str),
    Notify(&'static str, FocusMessage),
}

pub type Log = Arc<Mutex<Vec<Call>>>;

pub fn log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn take(log: &Log) -> Vec<Call> {
    std::mem::replace(&mut *log.lock(), Vec::new())
}

pub fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

pub fn frame() -> Frame {
    Frame::new(Rect::new(0., 0., 200., 200.))
}

/// A view that records every callback.
#[derive(Debug)]
pub struct Probe {
    name: &'static str,
    log: Log,
    handles_mouse: bool,
    handles_keys: bool,
    handles_wheel: bool,
    accepts_drops: bool,
    text_edit: bool,
}

impl Probe {
    pub fn new(name: &'static str, log: &Log) -> Probe {
        Probe {
            name,
            log: Arc::clone(log),
            handles_mouse: false,
            handles_keys: false,
            handles_wheel: false,
            accepts_drops: false,
            text_edit: false,
        }
    }

    pub fn handling_mouse(mut self) -> Probe {
        self.handles_mouse = true;
        self
    }

    pub fn handling_keys(mut self) -> Probe {
        self.handles_keys = true;
        self
    }

    pub fn handling_wheel(mut self) -> Probe {
        self.handles_wheel = true;
        self
    }

    pub fn accepting_drops(mut self) -> Probe {
        self.accepts_drops = true;
        self
    }

    pub fn text_edit(mut self) -> Probe {
        self.text_edit = true;
        self
    }

    fn record(&self, call: Call) {
        self.log.lock().push(call);
    }
}

impl View for Probe {
    fn on_mouse_down(
        &self,
        _: &mut Frame,
        _: ViewId,
        _: Point2<f64>,
        _: ButtonState,
    ) -> MouseEventResult {
        self.record(Call::Down(self.name));
        self.handles_mouse.into()
    }

    fn on_mouse_up(
        &self,
        _: &mut Frame,
        _: ViewId,
        _: Point2<f64>,
        _: ButtonState,
    ) -> MouseEventResult {
        self.record(Call::Up(self.name));
        self.handles_mouse.into()
    }

    fn on_mouse_moved(
        &self,
        _: &mut Frame,
        _: ViewId,
        _: Point2<f64>,
        _: ButtonState,
    ) -> MouseEventResult {
        self.record(Call::Moved(self.name));
        self.handles_mouse.into()
    }

    fn on_mouse_entered(&self, _: &mut Frame, _: ViewId, _: Point2<f64>, _: ButtonState) {
        self.record(Call::Entered(self.name));
    }

    fn on_mouse_exited(&self, _: &mut Frame, _: ViewId, _: Point2<f64>, _: ButtonState) {
        self.record(Call::Exited(self.name));
    }

    fn on_wheel(
        &self,
        _: &mut Frame,
        _: ViewId,
        _: Point2<f64>,
        _: WheelAxis,
        _: f32,
        _: ButtonState,
    ) -> bool {
        self.record(Call::Wheel(self.name));
        self.handles_wheel
    }

    fn on_drag_enter(&self, _: &mut Frame, _: ViewId, _: &DragData, _: Point2<f64>) {
        self.record(Call::DragEnter(self.name));
    }

    fn on_drag_move(&self, _: &mut Frame, _: ViewId, _: &DragData, _: Point2<f64>) {
        self.record(Call::DragMove(self.name));
    }

    fn on_drag_leave(&self, _: &mut Frame, _: ViewId, _: &DragData, _: Point2<f64>) {
        self.record(Call::DragLeave(self.name));
    }

    fn on_drop(&self, _: &mut Frame, _: ViewId, _: &DragData, _: Point2<f64>) -> bool {
        self.record(Call::Drop(self.name));
        self.accepts_drops
    }

    fn on_key_down(&self, _: &mut Frame, _: ViewId, _: &KeyEvent) -> bool {
        self.record(Call::KeyDown(self.name));
        self.handles_keys
    }

    fn on_key_up(&self, _: &mut Frame, _: ViewId, _: &KeyEvent) -> bool {
        self.record(Call::KeyUp(self.name));
        self.handles_keys
    }

    fn take_focus(&self, _: &mut Frame, _: ViewId) {
        self.record(Call::TakeFocus(self.name));
    }

    fn lose_focus(&self, _: &mut Frame, _: ViewId) {
        self.record(Call::LoseFocus(self.name));
    }

    fn notify(&self, _: &mut Frame, _: ViewId, message: FocusMessage) {
        self.record(Call::Notify(self.name, message));
    }

    fn is_text_edit(&self) -> bool {
        self.text_edit
    }
}

/// Adds a recording leaf view.
pub fn leaf(
    frame: &mut Frame,
    parent: ViewId,
    name: &'static str,
    log: &Log,
    rect: Rect,
) -> ViewId {
    let id = frame.create_view(Arc::new(Probe::new(name, log)), rect);
    assert!(frame.add_view(parent, id));
    id
}

/// Adds a recording container view.
pub fn container(
    frame: &mut Frame,
    parent: ViewId,
    name: &'static str,
    log: &Log,
    rect: Rect,
) -> ViewId {
    let id = frame.create_container(Arc::new(Probe::new(name, log)), rect);
    assert!(frame.add_view(parent, id));
    id
}

/// Adds a recording leaf view that accepts focus.
pub fn focusable(
    frame: &mut Frame,
    parent: ViewId,
    name: &'static str,
    log: &Log,
    rect: Rect,
) -> ViewId {
    let id = leaf(frame, parent, name, log, rect);
    frame.set_wants_focus(id, true);
    id
}

/// Records hover notifications sent to mouse observers.
#[derive(Debug, Default)]
pub struct ObserverLog {
    pub entered: Mutex<Vec<ViewId>>,
    pub exited: Mutex<Vec<ViewId>>,
    pub downs: Mutex<usize>,
    pub handles_down: bool,
}

impl MouseObserver for ObserverLog {
    fn on_mouse_entered(&self, _: &mut Frame, view: ViewId) {
        self.entered.lock().push(view);
    }

    fn on_mouse_exited(&self, _: &mut Frame, view: ViewId) {
        self.exited.lock().push(view);
    }

    fn on_mouse_down(&self, _: &mut Frame, _: Point2<f64>, _: ButtonState) -> MouseEventResult {
        *self.downs.lock() += 1;
        self.handles_down.into()
    }
}

/// Shared state of a [`FakeBackend`].
#[derive(Debug, Default)]
pub struct BackendState {
    pub mouse: (f64, f64),
    pub buttons: ButtonState,
    pub ticks: u32,
    pub size: Rect,
    pub cursor: Option<CursorType>,
    pub invalidated: Vec<Rect>,
    pub tooltips: Vec<(Rect, String)>,
    pub tooltips_hidden: usize,
    pub fail: bool,
}

/// A backend that records what the frame asks of it.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    pub state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    fn check(&self) -> Result<(), BackendError> {
        if self.state.lock().fail {
            Err(BackendError::NoWindow)
        } else {
            Ok(())
        }
    }
}

impl Backend for FakeBackend {
    fn current_mouse_position(&self) -> Result<Point2<f64>, BackendError> {
        self.check()?;
        let (x, y) = self.state.lock().mouse;
        Ok(Point2::new(x, y))
    }

    fn current_mouse_buttons(&self) -> Result<ButtonState, BackendError> {
        self.check()?;
        Ok(self.state.lock().buttons)
    }

    fn set_mouse_cursor(&mut self, cursor: CursorType) -> Result<(), BackendError> {
        self.check()?;
        self.state.lock().cursor = Some(cursor);
        Ok(())
    }

    fn invalid_rect(&mut self, rect: Rect) -> Result<(), BackendError> {
        self.check()?;
        self.state.lock().invalidated.push(rect);
        Ok(())
    }

    fn ticks(&self) -> Result<u32, BackendError> {
        self.check()?;
        Ok(self.state.lock().ticks)
    }

    fn do_drag(&mut self, _: DragData, _: Vector2<f64>) -> Result<DragResult, BackendError> {
        self.check()?;
        Ok(DragResult::Copied)
    }

    fn size(&self) -> Result<Rect, BackendError> {
        self.check()?;
        Ok(self.state.lock().size)
    }

    fn set_size(&mut self, rect: Rect) -> Result<(), BackendError> {
        self.check()?;
        self.state.lock().size = rect;
        Ok(())
    }

    fn global_position(&self) -> Result<Point2<f64>, BackendError> {
        self.check()?;
        let size = self.state.lock().size;
        Ok(Point2::new(size.left, size.top))
    }

    fn show_tooltip(&mut self, rect: Rect, text: &str) -> Result<(), BackendError> {
        self.check()?;
        self.state.lock().tooltips.push((rect, text.to_string()));
        Ok(())
    }

    fn hide_tooltip(&mut self) -> Result<(), BackendError> {
        self.check()?;
        self.state.lock().tooltips_hidden += 1;
        Ok(())
    }
}

/// Takes the recorded calls, keeping only hover notifications.
pub fn hover_calls(log: &Log) -> Vec<Call> {
    take(log)
        .into_iter()
        .filter(|call| match call {
            Call::Entered(_) | Call::Exited(_) => true,
            _ => false,
        })
        .collect()
}

/// Takes the recorded calls, keeping only focus notifications.
pub fn focus_calls(log: &Log) -> Vec<Call> {
    take(log)
        .into_iter()
        .filter(|call| match call {
            Call::TakeFocus(_) | Call::LoseFocus(_) | Call::Notify(..) => true,
            _ => false,
        })
        .collect()
}
