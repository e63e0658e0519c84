//! The plugin editor a frame belongs to.

/// How knobs react to dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobMode {
    Circular,
    RelativeCircular,
    Linear,
}

impl Default for KnobMode {
    fn default() -> Self {
        KnobMode::Circular
    }
}

/// The host-side editor object.
///
/// Parameter indices are the host’s parameter indices.
pub trait Editor: Send {
    /// Called periodically while the frame is idle.
    fn do_idle_stuff(&mut self) {}

    /// A control started changing a parameter.
    fn begin_edit(&mut self, index: i32) {
        let _ = index;
    }

    /// A control stopped changing a parameter.
    fn end_edit(&mut self, index: i32) {
        let _ = index;
    }

    fn knob_mode(&self) -> KnobMode {
        KnobMode::default()
    }
}
