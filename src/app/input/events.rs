//! Raw input events and code translation

/// Integer key code (DOM `keyCode` numbering)
pub type KeyCode = u32;

/// Named key codes for the keys game logic asks about most often
pub mod keys {
    use super::KeyCode;

    pub const BACKSPACE: KeyCode = 8;
    pub const TAB: KeyCode = 9;
    pub const ENTER: KeyCode = 13;
    pub const SHIFT: KeyCode = 16;
    pub const CONTROL: KeyCode = 17;
    pub const ALT: KeyCode = 18;
    pub const ESCAPE: KeyCode = 27;
    pub const SPACE: KeyCode = 32;
    pub const LEFT: KeyCode = 37;
    pub const UP: KeyCode = 38;
    pub const RIGHT: KeyCode = 39;
    pub const DOWN: KeyCode = 40;
    pub const DIGIT_0: KeyCode = 48;
    pub const A: KeyCode = 65;
    pub const R: KeyCode = 82;
    pub const Z: KeyCode = 90;
    pub const NUMPAD_0: KeyCode = 96;
    pub const F1: KeyCode = 112;
}

/// Raw input event in logical game-view space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// Pointer moved; coordinates already in logical view space
    PointerMove { x: f32, y: f32 },
    ButtonDown(usize),
    ButtonUp(usize),
    /// Pointer left the tracked surface (or the window lost focus)
    PointerLeave,
    Wheel(f32),
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
}

impl MouseButton {
    /// Button code used by the input state (0 = left, 1 = right)
    pub fn code(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Back => 3,
            MouseButton::Forward => 4,
        }
    }

    /// Convert from a winit button; extra vendor buttons are not tracked
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        use winit::event::MouseButton as WB;
        match button {
            WB::Left => Some(Self::Left),
            WB::Right => Some(Self::Right),
            WB::Middle => Some(Self::Middle),
            WB::Back => Some(Self::Back),
            WB::Forward => Some(Self::Forward),
            WB::Other(_) => None,
        }
    }
}

/// Convert a winit physical key to its DOM key code
pub fn dom_key_code(key: winit::keyboard::KeyCode) -> Option<KeyCode> {
    use winit::keyboard::KeyCode as WK;
    let code = match key {
        WK::Backspace => 8,
        WK::Tab => 9,
        WK::Enter | WK::NumpadEnter => 13,
        WK::ShiftLeft | WK::ShiftRight => 16,
        WK::ControlLeft | WK::ControlRight => 17,
        WK::AltLeft | WK::AltRight => 18,
        WK::Pause => 19,
        WK::CapsLock => 20,
        WK::Escape => 27,
        WK::Space => 32,
        WK::PageUp => 33,
        WK::PageDown => 34,
        WK::End => 35,
        WK::Home => 36,
        WK::ArrowLeft => 37,
        WK::ArrowUp => 38,
        WK::ArrowRight => 39,
        WK::ArrowDown => 40,
        WK::Insert => 45,
        WK::Delete => 46,

        WK::Digit0 => 48,
        WK::Digit1 => 49,
        WK::Digit2 => 50,
        WK::Digit3 => 51,
        WK::Digit4 => 52,
        WK::Digit5 => 53,
        WK::Digit6 => 54,
        WK::Digit7 => 55,
        WK::Digit8 => 56,
        WK::Digit9 => 57,

        WK::KeyA => 65,
        WK::KeyB => 66,
        WK::KeyC => 67,
        WK::KeyD => 68,
        WK::KeyE => 69,
        WK::KeyF => 70,
        WK::KeyG => 71,
        WK::KeyH => 72,
        WK::KeyI => 73,
        WK::KeyJ => 74,
        WK::KeyK => 75,
        WK::KeyL => 76,
        WK::KeyM => 77,
        WK::KeyN => 78,
        WK::KeyO => 79,
        WK::KeyP => 80,
        WK::KeyQ => 81,
        WK::KeyR => 82,
        WK::KeyS => 83,
        WK::KeyT => 84,
        WK::KeyU => 85,
        WK::KeyV => 86,
        WK::KeyW => 87,
        WK::KeyX => 88,
        WK::KeyY => 89,
        WK::KeyZ => 90,

        WK::SuperLeft => 91,
        WK::SuperRight => 92,
        WK::ContextMenu => 93,

        WK::Numpad0 => 96,
        WK::Numpad1 => 97,
        WK::Numpad2 => 98,
        WK::Numpad3 => 99,
        WK::Numpad4 => 100,
        WK::Numpad5 => 101,
        WK::Numpad6 => 102,
        WK::Numpad7 => 103,
        WK::Numpad8 => 104,
        WK::Numpad9 => 105,
        WK::NumpadMultiply => 106,
        WK::NumpadAdd => 107,
        WK::NumpadSubtract => 109,
        WK::NumpadDecimal => 110,
        WK::NumpadDivide => 111,

        WK::F1 => 112,
        WK::F2 => 113,
        WK::F3 => 114,
        WK::F4 => 115,
        WK::F5 => 116,
        WK::F6 => 117,
        WK::F7 => 118,
        WK::F8 => 119,
        WK::F9 => 120,
        WK::F10 => 121,
        WK::F11 => 122,
        WK::F12 => 123,

        WK::NumLock => 144,
        WK::ScrollLock => 145,

        WK::Semicolon => 186,
        WK::Equal => 187,
        WK::Comma => 188,
        WK::Minus => 189,
        WK::Period => 190,
        WK::Slash => 191,
        WK::Backquote => 192,
        WK::BracketLeft => 219,
        WK::Backslash => 220,
        WK::BracketRight => 221,
        WK::Quote => 222,

        _ => return None,
    };
    Some(code)
}
