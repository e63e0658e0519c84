//! Plugin editor view hierarchy.
//!
//! # Conceptual overview
//! Perch manages the tree of views inside a plugin editor window and routes input to them.
//!
//! ## Views
//! A [`Frame`] owns every view in its window. Views are referenced by [`ViewId`]s, which never own
//! anything: once a view has been removed from the frame, its ID simply stops resolving. The
//! frame keeps each view’s geometry and flags; the view itself is just a [`View`] behavior object
//! that reacts to events. Container views have ordered subviews, painted back to front and hit
//! tested front to back.
//!
//! A view is created detached, and becomes attached once it is added to a container chain that
//! leads up to the frame.
//!
//! ## Events
//! The native backend delivers [`RawEvent`]s, usually through a [`Host`]. Pointer events target
//! the front-most view under the pointer; the view that consumes a pointer-down receives all
//! pointer events until the pointer is released. Keyboard events target the view that has
//! keyboard focus and bubble up through its containers. Tab moves focus. Data dragged in from
//! outside goes to the deepest view under the pointer, which is told when the drag enters and
//! leaves it.
//!
//! The frame also tracks which views are under the pointer (the hover chain) and sends them
//! enter and exit notifications, always in matching pairs.
//!
//! While a modal view is installed, only the modal view and its subviews receive input.
//!
//! View handlers get mutable access to the frame, so they may change focus, add views or remove
//! themselves while being called.
//!
//! ## Redrawing
//! Views that need to be redrawn are marked dirty. On idle, the frame collects their rectangles
//! and asks the backend to redraw those regions, which it does by calling [`Frame::draw_rect`].
//!
//! ## Coordinate System
//! The origin of the frame coordinate system is at the top left corner of the window’s content
//! area, and positive y points down. A view’s rect is in its container’s coordinate system, and
//! points passed to a view’s handlers use that same coordinate system. Direct subviews of the
//! frame use frame coordinates.

pub mod attributes;
pub mod backend;
pub mod color;
mod config;
mod dirty;
pub mod draw;
pub mod editor;
pub mod events;
mod frame;
mod host;
pub mod observer;
mod raw_events;
mod rect;
pub mod tooltip;
mod tree;
mod view;

pub use config::{ConfigError, FrameConfig};
pub use dirty::DirtyRegion;
pub use frame::{Frame, DEFAULT_FOCUS_WIDTH};
pub use host::{EventSender, Host};
pub use raw_events::RawEvent;
pub use rect::Rect;
pub use tree::{ViewFlags, ViewTree};
pub use view::{FocusMessage, View, ViewId};
