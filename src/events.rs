//! Events.

use bitflags::bitflags;

bitflags! {
    /// Mouse button and modifier key state that accompanies pointer events.
    #[derive(Default)]
    pub struct ButtonState: u32 {
        const LEFT = 1 << 1;
        const RIGHT = 1 << 2;
        const MIDDLE = 1 << 3;
        const DOUBLE_CLICK = 1 << 4;
        const SHIFT = 1 << 5;
        const CONTROL = 1 << 6;
        const ALT = 1 << 7;
        /// Command key on macOS, Windows key elsewhere.
        const APPLE = 1 << 8;
        const BUTTON4 = 1 << 9;
        const BUTTON5 = 1 << 10;

        const MODIFIERS = Self::SHIFT.bits | Self::CONTROL.bits | Self::ALT.bits | Self::APPLE.bits;
    }
}

impl ButtonState {
    /// The modifier keys only, with all mouse buttons masked out.
    ///
    /// Hover comparisons use this so that a released button doesn’t count as state.
    pub fn modifiers(self) -> ButtonState {
        self & ButtonState::MODIFIERS
    }

    /// Returns true if any mouse button is pressed.
    pub fn is_button_down(self) -> bool {
        self.intersects(
            ButtonState::LEFT
                | ButtonState::RIGHT
                | ButtonState::MIDDLE
                | ButtonState::BUTTON4
                | ButtonState::BUTTON5,
        )
    }
}

/// Result of offering a pointer event to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventResult {
    Handled,
    NotHandled,
}

impl MouseEventResult {
    pub fn is_handled(self) -> bool {
        self == MouseEventResult::Handled
    }
}

impl From<bool> for MouseEventResult {
    fn from(handled: bool) -> Self {
        if handled {
            MouseEventResult::Handled
        } else {
            MouseEventResult::NotHandled
        }
    }
}

/// Result of dispatching a key-down event through the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Unhandled,
    Handled,
    /// The key was the focus-advance key and focus moved to another view.
    FocusAdvanced,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        self != KeyOutcome::Unhandled
    }
}

/// Scroll wheel axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelAxis {
    X,
    Y,
}

bitflags! {
    /// Modifier key state of a key event.
    #[derive(Default)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 1;
        const ALTERNATE = 1 << 1;
        const COMMAND = 1 << 2;
        const CONTROL = 1 << 3;
    }
}

/// Keys without a character representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    Back,
    Tab,
    Clear,
    Return,
    Pause,
    Escape,
    Space,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    PageUp,
    PageDown,
    Select,
    Print,
    Enter,
    Insert,
    Delete,
    Help,
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    Multiply,
    Add,
    Subtract,
    Decimal,
    Divide,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    NumLock,
    ScrollLock,
    Shift,
    Control,
    Alt,
    Equals,
}

/// A key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// The produced character, if any.
    pub character: Option<char>,
    /// The virtual key, for keys that don’t produce a character.
    pub virtual_key: Option<VirtualKey>,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// A key event for a character key.
    pub fn character(character: char) -> KeyEvent {
        KeyEvent {
            character: Some(character),
            ..KeyEvent::default()
        }
    }

    /// A key event for a virtual key.
    pub fn virtual_key(key: VirtualKey) -> KeyEvent {
        KeyEvent {
            virtual_key: Some(key),
            ..KeyEvent::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> KeyEvent {
        self.modifiers = modifiers;
        self
    }

    /// If true, this key advances keyboard focus when nothing else claims it.
    pub fn is_focus_advance(&self) -> bool {
        self.virtual_key == Some(VirtualKey::Tab)
    }

    /// If true, focus traversal triggered by this key runs backwards.
    pub fn is_reverse(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }
}
