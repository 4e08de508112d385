// src/keys.rs

use serde::{Deserialize, Serialize};

/// Portable key identifier.
///
/// This is the only key vocabulary the embedding application sees. Each
/// backend translates its own native key codes into these values; left and
/// right variants of a physical key stay distinct.
///
/// Escape is deliberately absent: the backends intercept it as the
/// close-window shortcut before translation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Key {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Top-row digits
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Function keys
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
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,

    // Modifiers
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    LeftSuper,
    RightSuper,
    CapsLock,
    NumLock,
    ScrollLock,

    // Navigation
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,

    // Editing and system keys
    Enter,
    Backspace,
    Tab,
    Space,
    PrintScreen,
    Pause,
    Menu,

    // Keypad
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadEnter,
    KeypadPlus,
    KeypadMinus,
    KeypadMultiply,
    KeypadDivide,
    KeypadDecimal,
    KeypadEquals,

    // Punctuation
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equals,
    LeftBracket,
    RightBracket,
    Backslash,
    Grave,

    #[default]
    Unknown,
}

impl Key {
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Key::LeftShift
                | Key::RightShift
                | Key::LeftControl
                | Key::RightControl
                | Key::LeftAlt
                | Key::RightAlt
                | Key::LeftSuper
                | Key::RightSuper
                | Key::CapsLock
                | Key::NumLock
                | Key::ScrollLock
        )
    }

    /// Letter key for an ASCII letter, case-insensitive.
    pub fn from_ascii_letter(byte: u8) -> Option<Key> {
        const LETTERS: [Key; 26] = [
            Key::A,
            Key::B,
            Key::C,
            Key::D,
            Key::E,
            Key::F,
            Key::G,
            Key::H,
            Key::I,
            Key::J,
            Key::K,
            Key::L,
            Key::M,
            Key::N,
            Key::O,
            Key::P,
            Key::Q,
            Key::R,
            Key::S,
            Key::T,
            Key::U,
            Key::V,
            Key::W,
            Key::X,
            Key::Y,
            Key::Z,
        ];
        let upper = byte.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| LETTERS[(upper - b'A') as usize])
    }

    /// Top-row digit key for an ASCII digit.
    pub fn from_ascii_digit(byte: u8) -> Option<Key> {
        const DIGITS: [Key; 10] = [
            Key::Num0,
            Key::Num1,
            Key::Num2,
            Key::Num3,
            Key::Num4,
            Key::Num5,
            Key::Num6,
            Key::Num7,
            Key::Num8,
            Key::Num9,
        ];
        byte.is_ascii_digit()
            .then(|| DIGITS[(byte - b'0') as usize])
    }

    /// Function key `F<n>` for `n` in 1..=24.
    pub fn function(n: u8) -> Option<Key> {
        const FUNCTION: [Key; 24] = [
            Key::F1,
            Key::F2,
            Key::F3,
            Key::F4,
            Key::F5,
            Key::F6,
            Key::F7,
            Key::F8,
            Key::F9,
            Key::F10,
            Key::F11,
            Key::F12,
            Key::F13,
            Key::F14,
            Key::F15,
            Key::F16,
            Key::F17,
            Key::F18,
            Key::F19,
            Key::F20,
            Key::F21,
            Key::F22,
            Key::F23,
            Key::F24,
        ];
        (1..=24)
            .contains(&n)
            .then(|| FUNCTION[(n - 1) as usize])
    }

    /// Keypad digit key for `n` in 0..=9.
    pub fn keypad_digit(n: u8) -> Option<Key> {
        const KEYPAD: [Key; 10] = [
            Key::Keypad0,
            Key::Keypad1,
            Key::Keypad2,
            Key::Keypad3,
            Key::Keypad4,
            Key::Keypad5,
            Key::Keypad6,
            Key::Keypad7,
            Key::Keypad8,
            Key::Keypad9,
        ];
        KEYPAD.get(n as usize).copied()
    }
}

/// Direction of a key transition as delivered to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTransition {
    Down,
    Up,
}
