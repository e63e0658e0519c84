use crate::frame::Frame;
use crate::raw_events::RawEvent;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

/// Sends raw input events from the native backend to a [`Host`].
pub type EventSender = Sender<RawEvent>;

/// Connects a frame to the native backend.
///
/// The backend pushes [`RawEvent`]s into the sender returned by [`Host::sender`] (from any thread)
/// and the event loop calls [`Host::poll`] to feed them into the frame.
pub struct Host {
    frame: Arc<Mutex<Frame>>,
    event_send: EventSender,
    event_recv: Receiver<RawEvent>,
}

impl Host {
    /// Creates a new Host.
    ///
    /// Nothing is dispatched until you call `poll`.
    pub fn new(frame: Frame) -> Host {
        let (event_send, event_recv) = channel::unbounded();

        Host {
            frame: Arc::new(Mutex::new(frame)),
            event_send,
            event_recv,
        }
    }

    /// The hosted frame.
    pub fn frame(&self) -> Arc<Mutex<Frame>> {
        Arc::clone(&self.frame)
    }

    /// Returns a sender for raw events.
    pub fn sender(&self) -> EventSender {
        self.event_send.clone()
    }

    /// Receives all events from the event queue and dispatches them. Returns the number of events
    /// dispatched.
    pub fn poll(&mut self) -> usize {
        let mut count = 0;
        loop {
            match self.event_recv.try_recv() {
                Ok(event) => {
                    self.recv_raw_event(event);
                    count += 1;
                }
                Err(TryRecvError::Empty) => break,
                // can’t happen while we’re holding a sender ourselves
                Err(TryRecvError::Disconnected) => break,
            }
        }
        count
    }

    fn recv_raw_event(&mut self, event: RawEvent) {
        trace!(event = ?event, "raw event");

        // keeps the frame alive even if a handler drops the host’s reference
        let frame = Arc::clone(&self.frame);
        let mut frame = frame.lock();

        match event {
            RawEvent::PointerDown { location, buttons } => {
                frame.dispatch_pointer_down(location, buttons);
            }
            RawEvent::PointerUp { location, buttons } => {
                frame.dispatch_pointer_up(location, buttons);
            }
            RawEvent::PointerMoved { location, buttons } => {
                frame.dispatch_pointer_moved(location, buttons);
            }
            RawEvent::PointerExited { location, buttons } => {
                frame.dispatch_pointer_exited(location, buttons);
            }
            RawEvent::Wheel {
                location,
                axis,
                distance,
                buttons,
            } => {
                frame.dispatch_wheel(location, axis, distance, buttons);
            }
            RawEvent::DragEnter { data, location } => frame.dispatch_drag_enter(&data, location),
            RawEvent::DragMove { data, location } => frame.dispatch_drag_move(&data, location),
            RawEvent::DragLeave { data, location } => frame.dispatch_drag_leave(&data, location),
            RawEvent::Drop { data, location } => {
                frame.dispatch_drop(&data, location);
            }
            RawEvent::KeyDown(key) => {
                frame.dispatch_key_down(&key);
            }
            RawEvent::KeyUp(key) => {
                frame.dispatch_key_up(&key);
            }
            RawEvent::Activate(active) => frame.on_activate(active),
            RawEvent::Idle => {
                frame.idle();
                frame.do_idle_stuff();
            }
        }
    }
}
