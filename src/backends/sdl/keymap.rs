// src/backends/sdl/keymap.rs

//! SDL2 keycode (`SDL_Keycode`, `keysym.sym`) to portable key table.
//!
//! Printable keys use their ASCII value; everything else is the scancode
//! with bit 30 set.

use crate::keys::Key;

const fn scancode(sc: i32) -> i32 {
    sc | (1 << 30)
}

pub const SDLK_ESCAPE: i32 = 27;

pub const SDLK_RETURN: i32 = 13;
pub const SDLK_BACKSPACE: i32 = 8;
pub const SDLK_TAB: i32 = 9;
pub const SDLK_SPACE: i32 = 32;
pub const SDLK_QUOTE: i32 = b'\'' as i32;
pub const SDLK_COMMA: i32 = b',' as i32;
pub const SDLK_MINUS: i32 = b'-' as i32;
pub const SDLK_PERIOD: i32 = b'.' as i32;
pub const SDLK_SLASH: i32 = b'/' as i32;
pub const SDLK_SEMICOLON: i32 = b';' as i32;
pub const SDLK_EQUALS: i32 = b'=' as i32;
pub const SDLK_LEFTBRACKET: i32 = b'[' as i32;
pub const SDLK_BACKSLASH: i32 = b'\\' as i32;
pub const SDLK_RIGHTBRACKET: i32 = b']' as i32;
pub const SDLK_BACKQUOTE: i32 = b'`' as i32;
pub const SDLK_DELETE: i32 = 127;
pub const SDLK_0: i32 = b'0' as i32;
pub const SDLK_9: i32 = b'9' as i32;
pub const SDLK_A: i32 = b'a' as i32;
pub const SDLK_Z: i32 = b'z' as i32;

pub const SDLK_CAPSLOCK: i32 = scancode(57);
pub const SDLK_F1: i32 = scancode(58);
pub const SDLK_F12: i32 = scancode(69);
pub const SDLK_PRINTSCREEN: i32 = scancode(70);
pub const SDLK_SCROLLLOCK: i32 = scancode(71);
pub const SDLK_PAUSE: i32 = scancode(72);
pub const SDLK_INSERT: i32 = scancode(73);
pub const SDLK_HOME: i32 = scancode(74);
pub const SDLK_PAGEUP: i32 = scancode(75);
pub const SDLK_END: i32 = scancode(77);
pub const SDLK_PAGEDOWN: i32 = scancode(78);
pub const SDLK_RIGHT: i32 = scancode(79);
pub const SDLK_LEFT: i32 = scancode(80);
pub const SDLK_DOWN: i32 = scancode(81);
pub const SDLK_UP: i32 = scancode(82);
pub const SDLK_NUMLOCKCLEAR: i32 = scancode(83);
pub const SDLK_KP_DIVIDE: i32 = scancode(84);
pub const SDLK_KP_MULTIPLY: i32 = scancode(85);
pub const SDLK_KP_MINUS: i32 = scancode(86);
pub const SDLK_KP_PLUS: i32 = scancode(87);
pub const SDLK_KP_ENTER: i32 = scancode(88);
pub const SDLK_KP_1: i32 = scancode(89);
pub const SDLK_KP_9: i32 = scancode(97);
pub const SDLK_KP_0: i32 = scancode(98);
pub const SDLK_KP_PERIOD: i32 = scancode(99);
pub const SDLK_APPLICATION: i32 = scancode(101);
pub const SDLK_KP_EQUALS: i32 = scancode(103);
pub const SDLK_F13: i32 = scancode(104);
pub const SDLK_F24: i32 = scancode(115);
pub const SDLK_LCTRL: i32 = scancode(224);
pub const SDLK_LSHIFT: i32 = scancode(225);
pub const SDLK_LALT: i32 = scancode(226);
pub const SDLK_LGUI: i32 = scancode(227);
pub const SDLK_RCTRL: i32 = scancode(228);
pub const SDLK_RSHIFT: i32 = scancode(229);
pub const SDLK_RALT: i32 = scancode(230);
pub const SDLK_RGUI: i32 = scancode(231);

/// Translates an SDL keycode. `None` for codes outside the table.
pub fn translate(code: i32) -> Option<Key> {
    let key = match code {
        SDLK_A..=SDLK_Z => return Key::from_ascii_letter(code as u8),
        SDLK_0..=SDLK_9 => return Key::from_ascii_digit(code as u8),
        SDLK_F1..=SDLK_F12 => return Key::function((code - SDLK_F1 + 1) as u8),
        SDLK_F13..=SDLK_F24 => return Key::function((code - SDLK_F13 + 13) as u8),
        SDLK_KP_1..=SDLK_KP_9 => return Key::keypad_digit((code - SDLK_KP_1 + 1) as u8),

        SDLK_RETURN => Key::Enter,
        SDLK_BACKSPACE => Key::Backspace,
        SDLK_TAB => Key::Tab,
        SDLK_SPACE => Key::Space,
        SDLK_DELETE => Key::Delete,

        SDLK_QUOTE => Key::Apostrophe,
        SDLK_COMMA => Key::Comma,
        SDLK_MINUS => Key::Minus,
        SDLK_PERIOD => Key::Period,
        SDLK_SLASH => Key::Slash,
        SDLK_SEMICOLON => Key::Semicolon,
        SDLK_EQUALS => Key::Equals,
        SDLK_LEFTBRACKET => Key::LeftBracket,
        SDLK_BACKSLASH => Key::Backslash,
        SDLK_RIGHTBRACKET => Key::RightBracket,
        SDLK_BACKQUOTE => Key::Grave,

        SDLK_CAPSLOCK => Key::CapsLock,
        SDLK_PRINTSCREEN => Key::PrintScreen,
        SDLK_SCROLLLOCK => Key::ScrollLock,
        SDLK_PAUSE => Key::Pause,
        SDLK_INSERT => Key::Insert,
        SDLK_HOME => Key::Home,
        SDLK_PAGEUP => Key::PageUp,
        SDLK_END => Key::End,
        SDLK_PAGEDOWN => Key::PageDown,
        SDLK_RIGHT => Key::Right,
        SDLK_LEFT => Key::Left,
        SDLK_DOWN => Key::Down,
        SDLK_UP => Key::Up,
        SDLK_NUMLOCKCLEAR => Key::NumLock,
        SDLK_APPLICATION => Key::Menu,

        SDLK_KP_DIVIDE => Key::KeypadDivide,
        SDLK_KP_MULTIPLY => Key::KeypadMultiply,
        SDLK_KP_MINUS => Key::KeypadMinus,
        SDLK_KP_PLUS => Key::KeypadPlus,
        SDLK_KP_ENTER => Key::KeypadEnter,
        SDLK_KP_0 => Key::Keypad0,
        SDLK_KP_PERIOD => Key::KeypadDecimal,
        SDLK_KP_EQUALS => Key::KeypadEquals,

        SDLK_LCTRL => Key::LeftControl,
        SDLK_LSHIFT => Key::LeftShift,
        SDLK_LALT => Key::LeftAlt,
        SDLK_LGUI => Key::LeftSuper,
        SDLK_RCTRL => Key::RightControl,
        SDLK_RSHIFT => Key::RightShift,
        SDLK_RALT => Key::RightAlt,
        SDLK_RGUI => Key::RightSuper,

        _ => return None,
    };
    Some(key)
}

/// Every keycode the table maps.
pub fn mapped_codes() -> Vec<i32> {
    let mut codes: Vec<i32> = Vec::new();
    codes.extend(SDLK_A..=SDLK_Z);
    codes.extend(SDLK_0..=SDLK_9);
    codes.extend(SDLK_F1..=SDLK_F12);
    codes.extend(SDLK_F13..=SDLK_F24);
    codes.extend(SDLK_KP_1..=SDLK_KP_9);
    codes.extend([
        SDLK_RETURN,
        SDLK_BACKSPACE,
        SDLK_TAB,
        SDLK_SPACE,
        SDLK_DELETE,
        SDLK_QUOTE,
        SDLK_COMMA,
        SDLK_MINUS,
        SDLK_PERIOD,
        SDLK_SLASH,
        SDLK_SEMICOLON,
        SDLK_EQUALS,
        SDLK_LEFTBRACKET,
        SDLK_BACKSLASH,
        SDLK_RIGHTBRACKET,
        SDLK_BACKQUOTE,
        SDLK_CAPSLOCK,
        SDLK_PRINTSCREEN,
        SDLK_SCROLLLOCK,
        SDLK_PAUSE,
        SDLK_INSERT,
        SDLK_HOME,
        SDLK_PAGEUP,
        SDLK_END,
        SDLK_PAGEDOWN,
        SDLK_RIGHT,
        SDLK_LEFT,
        SDLK_DOWN,
        SDLK_UP,
        SDLK_NUMLOCKCLEAR,
        SDLK_APPLICATION,
        SDLK_KP_DIVIDE,
        SDLK_KP_MULTIPLY,
        SDLK_KP_MINUS,
        SDLK_KP_PLUS,
        SDLK_KP_ENTER,
        SDLK_KP_0,
        SDLK_KP_PERIOD,
        SDLK_KP_EQUALS,
        SDLK_LCTRL,
        SDLK_LSHIFT,
        SDLK_LALT,
        SDLK_LGUI,
        SDLK_RCTRL,
        SDLK_RSHIFT,
        SDLK_RALT,
        SDLK_RGUI,
    ]);
    codes
}
