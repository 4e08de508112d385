// src/backends/glfw/keymap.rs

//! GLFW key token (`GLFW_KEY_*`) to portable key table.
//!
//! GLFW numbers printable keys by their US-layout uppercase ASCII value and
//! everything else from 256 upwards. None of this overlaps SDL's numbering.

use crate::keys::Key;

pub const GLFW_KEY_SPACE: i32 = 32;
pub const GLFW_KEY_APOSTROPHE: i32 = 39;
pub const GLFW_KEY_COMMA: i32 = 44;
pub const GLFW_KEY_MINUS: i32 = 45;
pub const GLFW_KEY_PERIOD: i32 = 46;
pub const GLFW_KEY_SLASH: i32 = 47;
pub const GLFW_KEY_0: i32 = 48;
pub const GLFW_KEY_9: i32 = 57;
pub const GLFW_KEY_SEMICOLON: i32 = 59;
pub const GLFW_KEY_EQUAL: i32 = 61;
pub const GLFW_KEY_A: i32 = 65;
pub const GLFW_KEY_Z: i32 = 90;
pub const GLFW_KEY_LEFT_BRACKET: i32 = 91;
pub const GLFW_KEY_BACKSLASH: i32 = 92;
pub const GLFW_KEY_RIGHT_BRACKET: i32 = 93;
pub const GLFW_KEY_GRAVE_ACCENT: i32 = 96;

pub const GLFW_KEY_ESCAPE: i32 = 256;
pub const GLFW_KEY_ENTER: i32 = 257;
pub const GLFW_KEY_TAB: i32 = 258;
pub const GLFW_KEY_BACKSPACE: i32 = 259;
pub const GLFW_KEY_INSERT: i32 = 260;
pub const GLFW_KEY_DELETE: i32 = 261;
pub const GLFW_KEY_RIGHT: i32 = 262;
pub const GLFW_KEY_LEFT: i32 = 263;
pub const GLFW_KEY_DOWN: i32 = 264;
pub const GLFW_KEY_UP: i32 = 265;
pub const GLFW_KEY_PAGE_UP: i32 = 266;
pub const GLFW_KEY_PAGE_DOWN: i32 = 267;
pub const GLFW_KEY_HOME: i32 = 268;
pub const GLFW_KEY_END: i32 = 269;
pub const GLFW_KEY_CAPS_LOCK: i32 = 280;
pub const GLFW_KEY_SCROLL_LOCK: i32 = 281;
pub const GLFW_KEY_NUM_LOCK: i32 = 282;
pub const GLFW_KEY_PRINT_SCREEN: i32 = 283;
pub const GLFW_KEY_PAUSE: i32 = 284;
pub const GLFW_KEY_F1: i32 = 290;
pub const GLFW_KEY_F24: i32 = 313;
pub const GLFW_KEY_KP_0: i32 = 320;
pub const GLFW_KEY_KP_9: i32 = 329;
pub const GLFW_KEY_KP_DECIMAL: i32 = 330;
pub const GLFW_KEY_KP_DIVIDE: i32 = 331;
pub const GLFW_KEY_KP_MULTIPLY: i32 = 332;
pub const GLFW_KEY_KP_SUBTRACT: i32 = 333;
pub const GLFW_KEY_KP_ADD: i32 = 334;
pub const GLFW_KEY_KP_ENTER: i32 = 335;
pub const GLFW_KEY_KP_EQUAL: i32 = 336;
pub const GLFW_KEY_LEFT_SHIFT: i32 = 340;
pub const GLFW_KEY_LEFT_CONTROL: i32 = 341;
pub const GLFW_KEY_LEFT_ALT: i32 = 342;
pub const GLFW_KEY_LEFT_SUPER: i32 = 343;
pub const GLFW_KEY_RIGHT_SHIFT: i32 = 344;
pub const GLFW_KEY_RIGHT_CONTROL: i32 = 345;
pub const GLFW_KEY_RIGHT_ALT: i32 = 346;
pub const GLFW_KEY_RIGHT_SUPER: i32 = 347;
pub const GLFW_KEY_MENU: i32 = 348;

/// Translates a GLFW key token. `None` for codes outside the table,
/// including `GLFW_KEY_UNKNOWN` (-1).
pub fn translate(code: i32) -> Option<Key> {
    let key = match code {
        GLFW_KEY_A..=GLFW_KEY_Z => return Key::from_ascii_letter(code as u8),
        GLFW_KEY_0..=GLFW_KEY_9 => return Key::from_ascii_digit(code as u8),
        GLFW_KEY_F1..=GLFW_KEY_F24 => return Key::function((code - GLFW_KEY_F1 + 1) as u8),
        GLFW_KEY_KP_0..=GLFW_KEY_KP_9 => return Key::keypad_digit((code - GLFW_KEY_KP_0) as u8),

        GLFW_KEY_SPACE => Key::Space,
        GLFW_KEY_APOSTROPHE => Key::Apostrophe,
        GLFW_KEY_COMMA => Key::Comma,
        GLFW_KEY_MINUS => Key::Minus,
        GLFW_KEY_PERIOD => Key::Period,
        GLFW_KEY_SLASH => Key::Slash,
        GLFW_KEY_SEMICOLON => Key::Semicolon,
        GLFW_KEY_EQUAL => Key::Equals,
        GLFW_KEY_LEFT_BRACKET => Key::LeftBracket,
        GLFW_KEY_BACKSLASH => Key::Backslash,
        GLFW_KEY_RIGHT_BRACKET => Key::RightBracket,
        GLFW_KEY_GRAVE_ACCENT => Key::Grave,

        GLFW_KEY_ENTER => Key::Enter,
        GLFW_KEY_TAB => Key::Tab,
        GLFW_KEY_BACKSPACE => Key::Backspace,
        GLFW_KEY_INSERT => Key::Insert,
        GLFW_KEY_DELETE => Key::Delete,
        GLFW_KEY_RIGHT => Key::Right,
        GLFW_KEY_LEFT => Key::Left,
        GLFW_KEY_DOWN => Key::Down,
        GLFW_KEY_UP => Key::Up,
        GLFW_KEY_PAGE_UP => Key::PageUp,
        GLFW_KEY_PAGE_DOWN => Key::PageDown,
        GLFW_KEY_HOME => Key::Home,
        GLFW_KEY_END => Key::End,
        GLFW_KEY_CAPS_LOCK => Key::CapsLock,
        GLFW_KEY_SCROLL_LOCK => Key::ScrollLock,
        GLFW_KEY_NUM_LOCK => Key::NumLock,
        GLFW_KEY_PRINT_SCREEN => Key::PrintScreen,
        GLFW_KEY_PAUSE => Key::Pause,

        GLFW_KEY_KP_DECIMAL => Key::KeypadDecimal,
        GLFW_KEY_KP_DIVIDE => Key::KeypadDivide,
        GLFW_KEY_KP_MULTIPLY => Key::KeypadMultiply,
        GLFW_KEY_KP_SUBTRACT => Key::KeypadMinus,
        GLFW_KEY_KP_ADD => Key::KeypadPlus,
        GLFW_KEY_KP_ENTER => Key::KeypadEnter,
        GLFW_KEY_KP_EQUAL => Key::KeypadEquals,

        GLFW_KEY_LEFT_SHIFT => Key::LeftShift,
        GLFW_KEY_LEFT_CONTROL => Key::LeftControl,
        GLFW_KEY_LEFT_ALT => Key::LeftAlt,
        GLFW_KEY_LEFT_SUPER => Key::LeftSuper,
        GLFW_KEY_RIGHT_SHIFT => Key::RightShift,
        GLFW_KEY_RIGHT_CONTROL => Key::RightControl,
        GLFW_KEY_RIGHT_ALT => Key::RightAlt,
        GLFW_KEY_RIGHT_SUPER => Key::RightSuper,
        GLFW_KEY_MENU => Key::Menu,

        _ => return None,
    };
    Some(key)
}

/// Every key token the table maps.
pub fn mapped_codes() -> Vec<i32> {
    let mut codes: Vec<i32> = Vec::new();
    codes.extend(GLFW_KEY_A..=GLFW_KEY_Z);
    codes.extend(GLFW_KEY_0..=GLFW_KEY_9);
    codes.extend(GLFW_KEY_F1..=GLFW_KEY_F24);
    codes.extend(GLFW_KEY_KP_0..=GLFW_KEY_KP_9);
    codes.extend([
        GLFW_KEY_SPACE,
        GLFW_KEY_APOSTROPHE,
        GLFW_KEY_COMMA,
        GLFW_KEY_MINUS,
        GLFW_KEY_PERIOD,
        GLFW_KEY_SLASH,
        GLFW_KEY_SEMICOLON,
        GLFW_KEY_EQUAL,
        GLFW_KEY_LEFT_BRACKET,
        GLFW_KEY_BACKSLASH,
        GLFW_KEY_RIGHT_BRACKET,
        GLFW_KEY_GRAVE_ACCENT,
        GLFW_KEY_ENTER,
        GLFW_KEY_TAB,
        GLFW_KEY_BACKSPACE,
        GLFW_KEY_INSERT,
        GLFW_KEY_DELETE,
        GLFW_KEY_RIGHT,
        GLFW_KEY_LEFT,
        GLFW_KEY_DOWN,
        GLFW_KEY_UP,
        GLFW_KEY_PAGE_UP,
        GLFW_KEY_PAGE_DOWN,
        GLFW_KEY_HOME,
        GLFW_KEY_END,
        GLFW_KEY_CAPS_LOCK,
        GLFW_KEY_SCROLL_LOCK,
        GLFW_KEY_NUM_LOCK,
        GLFW_KEY_PRINT_SCREEN,
        GLFW_KEY_PAUSE,
        GLFW_KEY_KP_DECIMAL,
        GLFW_KEY_KP_DIVIDE,
        GLFW_KEY_KP_MULTIPLY,
        GLFW_KEY_KP_SUBTRACT,
        GLFW_KEY_KP_ADD,
        GLFW_KEY_KP_ENTER,
        GLFW_KEY_KP_EQUAL,
        GLFW_KEY_LEFT_SHIFT,
        GLFW_KEY_LEFT_CONTROL,
        GLFW_KEY_LEFT_ALT,
        GLFW_KEY_LEFT_SUPER,
        GLFW_KEY_RIGHT_SHIFT,
        GLFW_KEY_RIGHT_CONTROL,
        GLFW_KEY_RIGHT_ALT,
        GLFW_KEY_RIGHT_SUPER,
        GLFW_KEY_MENU,
    ]);
    codes
}
