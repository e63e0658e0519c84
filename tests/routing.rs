mod common;

use cgmath::Vector2;
use common::*;
use parking_lot::Mutex;
use perch::backend::{CursorType, DragData, DragResult};
use perch::color::Color;
use perch::draw::DrawContext;
use perch::editor::{Editor, KnobMode};
use perch::events::{ButtonState, KeyEvent, KeyOutcome, MouseEventResult, WheelAxis};
use perch::observer::{KeyboardHook, ViewObserver};
use perch::{Frame, FrameConfig, Host, RawEvent, Rect, View, ViewId, DEFAULT_FOCUS_WIDTH};
use std::sync::Arc;

const NONE: ButtonState = ButtonState::empty();

fn with_backend(frame: &mut Frame) -> FakeBackend {
    let backend = FakeBackend::default();
    frame.set_backend(Some(Box::new(backend.clone())));
    backend
}

#[test]
fn front_most_hit_view_decides_pointer_down() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let back = frame.create_view(
        Arc::new(Probe::new("back", &log).handling_mouse()),
        Rect::new(0., 0., 100., 100.),
    );
    frame.add_view(root, back);
    leaf(&mut frame, root, "front", &log, Rect::new(50., 50., 150., 150.));

    let result = frame.dispatch_pointer_down(p(75., 75.), ButtonState::LEFT);
    assert_eq!(result, MouseEventResult::NotHandled);
    assert_eq!(take(&log), vec![Call::Down("front")]);

    let result = frame.dispatch_pointer_down(p(10., 10.), ButtonState::LEFT);
    assert_eq!(result, MouseEventResult::Handled);
    assert_eq!(frame.mouse_down_view(), Some(back));
}

#[test]
fn container_handles_what_its_subviews_dont() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let panel = frame.create_container(
        Arc::new(Probe::new("panel", &log).handling_mouse()),
        Rect::new(0., 0., 100., 100.),
    );
    frame.add_view(root, panel);
    leaf(&mut frame, panel, "label", &log, Rect::new(10., 10., 50., 50.));
    take(&log);

    assert!(frame.dispatch_pointer_down(p(20., 20.), ButtonState::LEFT).is_handled());
    assert_eq!(frame.mouse_down_view(), Some(panel));
    frame.dispatch_pointer_up(p(20., 20.), NONE);

    let calls: Vec<_> = take(&log)
        .into_iter()
        .filter(|call| match call {
            Call::Down(_) | Call::Up(_) => true,
            _ => false,
        })
        .collect();
    assert_eq!(
        calls,
        vec![Call::Down("label"), Call::Down("panel"), Call::Up("panel")]
    );
}

#[test]
fn disabled_views_are_skipped_by_pointer_routing() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let under = frame.create_view(
        Arc::new(Probe::new("under", &log).handling_mouse()),
        Rect::new(0., 0., 100., 100.),
    );
    frame.add_view(root, under);
    let over = leaf(&mut frame, root, "over", &log, Rect::new(0., 0., 100., 100.));
    frame.set_mouse_enabled(over, false);

    assert!(frame.dispatch_pointer_down(p(10., 10.), ButtonState::LEFT).is_handled());
    assert_eq!(frame.mouse_down_view(), Some(under));
    assert_eq!(take(&log), vec![Call::Down("under")]);
}

/// Removes itself from the frame when clicked.
#[derive(Debug)]
struct Vanisher;

impl View for Vanisher {
    fn on_mouse_down(
        &self,
        frame: &mut Frame,
        id: ViewId,
        _: cgmath::Point2<f64>,
        _: ButtonState,
    ) -> MouseEventResult {
        frame.remove_view(id);
        MouseEventResult::Handled
    }
}

#[test]
fn view_removed_during_pointer_down_does_not_own_pointer() {
    let mut frame = frame();
    let root = frame.root();
    let id = frame.create_view(Arc::new(Vanisher), Rect::new(0., 0., 50., 50.));
    frame.add_view(root, id);

    assert!(frame.dispatch_pointer_down(p(10., 10.), ButtonState::LEFT).is_handled());
    assert!(!frame.tree().contains(id));
    assert_eq!(frame.mouse_down_view(), None);
    assert!(!frame.dispatch_pointer_up(p(10., 10.), NONE).is_handled());
}

#[test]
fn mouse_observers_get_first_refusal() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let button = frame.create_view(
        Arc::new(Probe::new("button", &log).handling_mouse()),
        Rect::new(0., 0., 50., 50.),
    );
    frame.add_view(root, button);

    let claiming = Arc::new(ObserverLog {
        handles_down: true,
        ..ObserverLog::default()
    });
    let passive = Arc::new(ObserverLog::default());
    frame.register_mouse_observer(claiming.clone());
    frame.register_mouse_observer(passive.clone());

    assert!(frame.dispatch_pointer_down(p(10., 10.), ButtonState::LEFT).is_handled());
    assert_eq!(*claiming.downs.lock(), 1);
    assert_eq!(*passive.downs.lock(), 1);
    assert_eq!(frame.mouse_down_view(), None);
    assert!(!take(&log).contains(&Call::Down("button")));
}

/// Consumes a single character.
#[derive(Debug)]
struct Shortcut {
    key: char,
    seen: Mutex<Vec<char>>,
}

impl KeyboardHook for Shortcut {
    fn on_key_down(&self, _: &mut Frame, key: &KeyEvent) -> bool {
        self.seen.lock().extend(key.character);
        key.character == Some(self.key)
    }

    fn on_key_up(&self, _: &mut Frame, key: &KeyEvent) -> bool {
        key.character == Some(self.key)
    }
}

#[test]
fn keyboard_hook_sees_keys_before_focus_view() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let field = focusable(&mut frame, root, "field", &log, Rect::new(0., 0., 50., 20.));
    frame.set_focus(Some(field));
    let hook = Arc::new(Shortcut {
        key: 'q',
        seen: Mutex::new(Vec::new()),
    });
    frame.set_keyboard_hook(Some(hook.clone()));
    take(&log);

    assert_eq!(
        frame.dispatch_key_down(&KeyEvent::character('q')),
        KeyOutcome::Handled
    );
    assert!(frame.dispatch_key_up(&KeyEvent::character('q')));
    assert_eq!(take(&log), vec![]);

    assert_eq!(
        frame.dispatch_key_down(&KeyEvent::character('a')),
        KeyOutcome::Unhandled
    );
    assert_eq!(take(&log), vec![Call::KeyDown("field")]);
    assert_eq!(*hook.seen.lock(), vec!['q', 'a']);

    frame.set_keyboard_hook(None);
    frame.dispatch_key_down(&KeyEvent::character('q'));
    assert_eq!(take(&log), vec![Call::KeyDown("field")]);
}

#[test]
fn wheel_bubbles_until_consumed() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let list = frame.create_container(
        Arc::new(Probe::new("list", &log).handling_wheel()),
        Rect::new(0., 0., 100., 100.),
    );
    frame.add_view(root, list);
    leaf(&mut frame, list, "row", &log, Rect::new(0., 0., 100., 20.));
    let knob = frame.create_view(
        Arc::new(Probe::new("knob", &log).handling_mouse()),
        Rect::new(0., 50., 20., 70.),
    );
    frame.add_view(list, knob);
    take(&log);

    let wheels = |log: &Log| -> Vec<Call> {
        take(log)
            .into_iter()
            .filter(|call| match call {
                Call::Wheel(_) => true,
                _ => false,
            })
            .collect()
    };

    assert!(frame.dispatch_wheel(p(10., 10.), WheelAxis::Y, 1., NONE));
    assert_eq!(wheels(&log), vec![Call::Wheel("row"), Call::Wheel("list")]);

    assert!(!frame.dispatch_wheel(p(150., 150.), WheelAxis::Y, 1., NONE));
    assert_eq!(wheels(&log), vec![]);

    // ignored while a view owns the pointer
    assert!(frame.dispatch_pointer_down(p(10., 60.), ButtonState::LEFT).is_handled());
    assert!(!frame.dispatch_wheel(p(10., 10.), WheelAxis::Y, 1., ButtonState::LEFT));
    assert_eq!(wheels(&log), vec![]);
}

#[test]
fn idle_pushes_merged_dirty_regions() {
    let log = log();
    let mut frame = frame();
    let backend = with_backend(&mut frame);
    let root = frame.root();
    leaf(&mut frame, root, "a", &log, Rect::new(0., 0., 50., 50.));
    leaf(&mut frame, root, "b", &log, Rect::new(40., 0., 100., 50.));
    let panel = container(&mut frame, root, "panel", &log, Rect::new(100., 100., 200., 200.));
    let inner = leaf(&mut frame, panel, "inner", &log, Rect::new(10., 10., 20., 20.));

    frame.idle();
    let mut invalidated = std::mem::replace(&mut backend.state.lock().invalidated, Vec::new());
    invalidated.sort_by(|a, b| a.left.partial_cmp(&b.left).unwrap());
    assert_eq!(
        invalidated,
        vec![
            Rect::new(0., 0., 100., 50.),
            Rect::new(100., 100., 200., 200.),
        ]
    );

    frame.idle();
    assert!(backend.state.lock().invalidated.is_empty());

    // nested views are reported in frame coordinates
    frame.set_dirty(inner);
    frame.idle();
    assert_eq!(
        backend.state.lock().invalidated,
        vec![Rect::new(110., 110., 120., 120.)]
    );
}

#[test]
fn idle_without_backend_consumes_dirty_flags() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let view = leaf(&mut frame, root, "a", &log, Rect::new(0., 0., 50., 50.));
    frame.idle();
    assert!(!frame.tree().has_flags(view, perch::ViewFlags::DIRTY));
}

/// Records clip changes and focus rings.
struct Canvas {
    clip: Rect,
    clips: Vec<Rect>,
    rings: Vec<(Rect, Color, f64)>,
}

impl Canvas {
    fn new(clip: Rect) -> Canvas {
        Canvas {
            clip,
            clips: Vec::new(),
            rings: Vec::new(),
        }
    }
}

impl DrawContext for Canvas {
    fn clip_rect(&self) -> Rect {
        self.clip
    }

    fn set_clip_rect(&mut self, rect: Rect) {
        self.clip = rect;
        self.clips.push(rect);
    }

    fn draw_focus_ring(&mut self, rect: Rect, color: Color, width: f64) {
        self.rings.push((rect, color, width));
    }
}

type Painted = Arc<Mutex<Vec<(&'static str, Rect)>>>;

#[derive(Debug)]
struct Painter {
    name: &'static str,
    painted: Painted,
}

impl View for Painter {
    fn draw(&self, _: &mut dyn DrawContext, rect: Rect) {
        self.painted.lock().push((self.name, rect));
    }
}

fn painter(name: &'static str, painted: &Painted) -> Arc<Painter> {
    Arc::new(Painter {
        name,
        painted: Arc::clone(painted),
    })
}

#[test]
fn draw_rect_paints_back_to_front_inside_update_rect() {
    let painted = Painted::default();
    let mut frame = frame();
    let backend = with_backend(&mut frame);
    let root = frame.root();
    let panel = frame.create_container(painter("panel", &painted), Rect::new(20., 20., 120., 120.));
    frame.add_view(root, panel);
    let knob = frame.create_view(painter("knob", &painted), Rect::new(10., 10., 30., 30.));
    frame.add_view(panel, knob);
    let meter = frame.create_view(painter("meter", &painted), Rect::new(150., 150., 200., 200.));
    frame.add_view(root, meter);

    let mut canvas = Canvas::new(Rect::new(0., 0., 200., 200.));
    frame.draw_rect(&mut canvas, Rect::new(0., 0., 50., 50.));
    assert_eq!(
        *painted.lock(),
        vec![
            ("panel", Rect::new(20., 20., 120., 120.)),
            ("knob", Rect::new(30., 30., 50., 50.)),
        ]
    );
    assert_eq!(
        canvas.clips,
        vec![Rect::new(0., 0., 50., 50.), Rect::new(0., 0., 200., 200.)]
    );
    assert_eq!(canvas.clip, Rect::new(0., 0., 200., 200.));
    assert!(canvas.rings.is_empty());

    // painted views are no longer dirty
    frame.idle();
    assert_eq!(
        backend.state.lock().invalidated,
        vec![Rect::new(150., 150., 200., 200.)]
    );

    painted.lock().clear();
    frame.draw_rect(&mut canvas, Rect::zero());
    assert!(painted.lock().is_empty());
    assert_eq!(canvas.clips.len(), 2);
}

#[test]
fn focus_ring_is_drawn_around_focus_view() {
    let painted = Painted::default();
    let mut frame = frame();
    let root = frame.root();
    let panel = frame.create_container(painter("panel", &painted), Rect::new(20., 20., 120., 120.));
    frame.add_view(root, panel);
    let knob = frame.create_view(painter("knob", &painted), Rect::new(10., 10., 30., 30.));
    frame.add_view(panel, knob);
    frame.set_wants_focus(knob, true);
    frame.set_focus(Some(knob));

    let mut canvas = Canvas::new(Rect::new(0., 0., 200., 200.));
    frame.draw_rect(&mut canvas, Rect::new(0., 0., 200., 200.));
    assert!(canvas.rings.is_empty());

    frame.set_focus_drawing_enabled(true);
    frame.set_focus_width(3.);
    frame.draw_rect(&mut canvas, Rect::new(0., 0., 200., 200.));
    assert_eq!(
        canvas.rings,
        vec![(Rect::new(30., 30., 50., 50.), Color::RED, 3.)]
    );

    frame.set_visible(knob, false);
    canvas.rings.clear();
    frame.draw_rect(&mut canvas, Rect::new(0., 0., 200., 200.));
    assert!(canvas.rings.is_empty());
}

#[test]
fn tooltip_is_shown_after_hovering() {
    let log = log();
    let mut frame = frame();
    let backend = with_backend(&mut frame);
    let root = frame.root();
    let panel = container(&mut frame, root, "panel", &log, Rect::new(100., 100., 200., 200.));
    let knob = leaf(&mut frame, panel, "knob", &log, Rect::new(10., 10., 30., 30.));
    frame.set_tooltip_text(knob, "Gain");
    frame.enable_tooltips(true);
    assert!(frame.tooltips_enabled());

    frame.dispatch_pointer_moved(p(115., 115.), NONE);
    frame.idle();
    assert!(backend.state.lock().tooltips.is_empty());

    backend.state.lock().ticks = 1500;
    frame.idle();
    assert_eq!(
        backend.state.lock().tooltips,
        vec![(Rect::new(110., 110., 130., 130.), "Gain".to_string())]
    );

    // shown once per hover
    frame.idle();
    assert_eq!(backend.state.lock().tooltips.len(), 1);

    // moving off the knob takes it down
    frame.dispatch_pointer_moved(p(10., 10.), NONE);
    assert_eq!(backend.state.lock().tooltips_hidden, 1);

    frame.enable_tooltips(false);
    assert!(!frame.tooltips_enabled());
}

#[test]
fn click_takes_tooltip_down() {
    let log = log();
    let mut frame = frame();
    let backend = with_backend(&mut frame);
    let root = frame.root();
    let knob = leaf(&mut frame, root, "knob", &log, Rect::new(10., 10., 30., 30.));
    frame.set_tooltip_text(knob, "Gain");
    frame.enable_tooltips(true);

    frame.dispatch_pointer_moved(p(15., 15.), NONE);
    backend.state.lock().ticks = 1500;
    frame.idle();
    assert_eq!(backend.state.lock().tooltips.len(), 1);

    frame.dispatch_pointer_down(p(15., 15.), ButtonState::LEFT);
    assert_eq!(backend.state.lock().tooltips_hidden, 1);
    frame.dispatch_pointer_up(p(15., 15.), ButtonState::LEFT);
    frame.dispatch_pointer_exited(p(15., 15.), NONE);
    assert_eq!(backend.state.lock().tooltips_hidden, 1);

    // stays down until another view is entered
    backend.state.lock().ticks = 5000;
    frame.idle();
    assert_eq!(backend.state.lock().tooltips.len(), 1);
}

#[test]
fn geometry_without_backend_degrades() {
    let mut frame = frame();
    assert!(!frame.has_backend());
    assert!(!frame.set_size(300., 300.));
    assert_eq!(frame.rect(), Rect::new(0., 0., 200., 200.));
    assert_eq!(frame.position(), None);
    assert_eq!(frame.platform_size(), None);
    assert_eq!(frame.ticks(), None);
    assert_eq!(frame.current_mouse_location(), None);
    assert_eq!(frame.current_mouse_buttons(), ButtonState::empty());
    assert!(!frame.set_cursor(CursorType::Hand));
    assert!(!frame.invalid_rect(Rect::new(0., 0., 10., 10.)));
    assert!(!frame.scroll_rect(Rect::new(0., 0., 10., 10.), Vector2::new(0., 5.)));
    assert_eq!(
        frame.do_drag(DragData::default(), Vector2::new(0., 0.)),
        DragResult::Error
    );
}

#[test]
fn geometry_goes_through_backend() {
    let mut frame = frame();
    let backend = with_backend(&mut frame);

    assert!(frame.set_size(300., 250.));
    assert_eq!(frame.rect(), Rect::new(0., 0., 300., 250.));
    assert_eq!(frame.platform_size(), Some(Rect::new(0., 0., 300., 250.)));
    assert!(!frame.set_size(300., 250.));

    assert!(frame.set_position(10., 20.));
    assert_eq!(frame.rect(), Rect::new(10., 20., 310., 270.));
    assert_eq!(frame.position(), Some(p(10., 20.)));

    assert!(frame.set_cursor(CursorType::Hand));
    assert_eq!(backend.state.lock().cursor, Some(CursorType::Hand));
    assert_eq!(
        frame.do_drag(DragData::default(), Vector2::new(0., 0.)),
        DragResult::Copied
    );

    // backends that can't scroll redraw the region instead
    let region = Rect::new(0., 0., 10., 10.);
    assert!(!frame.scroll_rect(region, Vector2::new(0., 5.)));
    assert_eq!(backend.state.lock().invalidated, vec![region]);
}

#[test]
fn failing_backend_leaves_frame_unchanged() {
    let mut frame = frame();
    let backend = with_backend(&mut frame);
    backend.state.lock().fail = true;

    assert!(!frame.set_size(300., 250.));
    assert_eq!(frame.rect(), Rect::new(0., 0., 200., 200.));
    assert_eq!(frame.ticks(), None);
    assert_eq!(frame.current_mouse_location(), None);
    assert!(!frame.invalid_rect(Rect::new(0., 0., 10., 10.)));
}

#[test]
fn hidden_frame_does_not_invalidate() {
    let mut frame = frame();
    let backend = with_backend(&mut frame);
    let root = frame.root();
    frame.set_visible(root, false);
    assert!(!frame.invalid_rect(Rect::new(0., 0., 10., 10.)));
    assert!(backend.state.lock().invalidated.is_empty());
}

#[derive(Debug, Default, Clone)]
struct FakeEditor {
    edits: Arc<Mutex<Vec<(&'static str, i32)>>>,
    idles: Arc<Mutex<usize>>,
}

impl Editor for FakeEditor {
    fn do_idle_stuff(&mut self) {
        *self.idles.lock() += 1;
    }

    fn begin_edit(&mut self, index: i32) {
        self.edits.lock().push(("begin", index));
    }

    fn end_edit(&mut self, index: i32) {
        self.edits.lock().push(("end", index));
    }

    fn knob_mode(&self) -> KnobMode {
        KnobMode::Linear
    }
}

#[test]
fn editor_calls_are_forwarded() {
    let mut frame = frame();
    assert_eq!(frame.knob_mode(), KnobMode::Circular);
    frame.begin_edit(1);

    let editor = FakeEditor::default();
    frame.set_editor(Some(Box::new(editor.clone())));
    frame.begin_edit(3);
    frame.end_edit(3);
    assert_eq!(frame.knob_mode(), KnobMode::Linear);
    assert_eq!(*editor.edits.lock(), vec![("begin", 3), ("end", 3)]);

    let mut host = Host::new(frame);
    let sender = host.sender();
    sender.send(RawEvent::Idle).unwrap();
    sender.send(RawEvent::Idle).unwrap();
    assert_eq!(host.poll(), 2);
    assert_eq!(*editor.idles.lock(), 2);
}

#[test]
fn config_is_applied() {
    let mut frame = frame();
    let config = FrameConfig {
        tooltips: true,
        focus_drawing: true,
        focus_color: Color::rgb(0.2, 0.4, 1.),
        focus_width: 1.5,
    };
    frame.apply_config(&config);
    assert!(frame.tooltips_enabled());
    assert!(frame.focus_drawing_enabled());
    assert_eq!(frame.focus_color(), Color::rgb(0.2, 0.4, 1.));
    assert_eq!(frame.focus_width(), 1.5);

    frame.apply_config(&FrameConfig::default());
    assert!(!frame.tooltips_enabled());
    assert!(!frame.focus_drawing_enabled());
    assert_eq!(frame.focus_color(), Color::RED);
    assert_eq!(frame.focus_width(), DEFAULT_FOCUS_WIDTH);
}

/// Records structural changes and whether the view still resolved at the time.
#[derive(Debug, Default)]
struct Structure {
    events: Mutex<Vec<(&'static str, ViewId, bool)>>,
}

impl ViewObserver for Structure {
    fn on_view_added(&self, frame: &mut Frame, view: ViewId) {
        let exists = frame.tree().contains(view);
        self.events.lock().push(("added", view, exists));
    }

    fn on_view_removed(&self, frame: &mut Frame, view: ViewId) {
        let exists = frame.tree().contains(view);
        self.events.lock().push(("removed", view, exists));
    }
}

#[test]
fn view_observer_sees_attach_and_removal() {
    let log = log();
    let mut frame = frame();
    let structure = Arc::new(Structure::default());
    frame.set_view_observer(Some(structure.clone()));
    let root = frame.root();

    let loose = frame.create_container(Arc::new(()), Rect::zero());
    let child = frame.create_view(Arc::new(()), Rect::zero());
    frame.add_view(loose, child);
    assert!(structure.events.lock().is_empty());

    let panel = container(&mut frame, root, "panel", &log, Rect::new(0., 0., 50., 50.));
    assert!(frame.detach_view(panel));
    assert!(frame.add_view(root, panel));
    assert!(frame.remove_view(panel));

    assert_eq!(
        *structure.events.lock(),
        vec![
            ("added", panel, true),
            ("removed", panel, true),
            ("added", panel, true),
            ("removed", panel, false),
        ]
    );
}

#[test]
fn close_tears_down_quietly() {
    let log = log();
    let mut frame = frame();
    let backend = with_backend(&mut frame);
    let root = frame.root();
    let panel = container(&mut frame, root, "panel", &log, Rect::new(0., 0., 100., 100.));
    leaf(&mut frame, panel, "knob", &log, Rect::new(0., 0., 50., 50.));
    frame.dispatch_pointer_moved(p(10., 10.), NONE);
    assert_eq!(frame.hover_chain().len(), 2);
    take(&log);

    frame.close();
    assert!(frame.hover_chain().is_empty());
    assert!(frame.tree().subviews(root).is_empty());
    assert!(!frame.tree().contains(panel));
    assert!(!frame.has_backend());
    assert_eq!(backend.state.lock().cursor, Some(CursorType::Default));
    assert_eq!(hover_calls(&log), vec![]);
}

#[test]
fn dropping_frame_closes_it() {
    let backend = {
        let mut frame = frame();
        let log = log();
        let root = frame.root();
        leaf(&mut frame, root, "knob", &log, Rect::new(0., 0., 50., 50.));
        let backend = with_backend(&mut frame);
        backend
    };
    assert_eq!(backend.state.lock().cursor, Some(CursorType::Default));
}

#[test]
fn host_dispatches_raw_events() {
    let log = log();
    let mut frame = frame();
    let root = frame.root();
    let button = frame.create_view(
        Arc::new(Probe::new("button", &log).handling_mouse()),
        Rect::new(0., 0., 50., 50.),
    );
    frame.add_view(root, button);

    let mut host = Host::new(frame);
    let sender = host.sender();
    sender
        .send(RawEvent::PointerMoved {
            location: p(10., 10.),
            buttons: NONE,
        })
        .unwrap();
    sender
        .send(RawEvent::PointerDown {
            location: p(10., 10.),
            buttons: ButtonState::LEFT,
        })
        .unwrap();
    sender
        .send(RawEvent::PointerUp {
            location: p(10., 10.),
            buttons: ButtonState::LEFT,
        })
        .unwrap();
    assert_eq!(host.poll(), 3);
    assert_eq!(host.poll(), 0);

    assert_eq!(
        take(&log),
        vec![
            Call::Entered("button"),
            Call::Moved("button"),
            Call::Down("button"),
            Call::Up("button"),
        ]
    );
    assert_eq!(host.frame().lock().mouse_down_view(), None);
}
