// src/backends/sdl/stub.rs

//! Stub SDL2 exports for driver tests.

#![allow(non_snake_case)]

use super::ffi::{SDL_Event, SDL_KeyboardEvent, SDL_Keysym, SDL_Rect, SDL_KEYDOWN, SDL_KEYUP, SDL_QUIT};
use crate::native::testing::{record, StubLibrary};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::{c_void, CStr, CString};
use std::os::raw::{c_char, c_int};

pub const LIBRARY: &str = "libSDL2-stub.so";

const WINDOW: *mut c_void = 0x51 as *mut c_void;
const RENDERER: *mut c_void = 0x52 as *mut c_void;
const TEXTURE: *mut c_void = 0x53 as *mut c_void;

#[derive(Default)]
struct State {
    events: VecDeque<SDL_Event>,
    fail: Option<&'static str>,
    error: CString,
    window: Option<(String, c_int, c_int, u32)>,
    texture: Option<(u32, c_int, c_int)>,
    uploads: Vec<(usize, c_int)>,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

/// Stub library exporting every SDL symbol the driver binds.
pub fn library() -> StubLibrary {
    StubLibrary::new(LIBRARY)
        .with("SDL_Init", SDL_Init as *const c_void)
        .with("SDL_Quit", SDL_Quit as *const c_void)
        .with("SDL_GetError", SDL_GetError as *const c_void)
        .with("SDL_ClearError", SDL_ClearError as *const c_void)
        .with("SDL_SetHint", SDL_SetHint as *const c_void)
        .with("SDL_CreateWindow", SDL_CreateWindow as *const c_void)
        .with("SDL_DestroyWindow", SDL_DestroyWindow as *const c_void)
        .with("SDL_CreateRenderer", SDL_CreateRenderer as *const c_void)
        .with("SDL_DestroyRenderer", SDL_DestroyRenderer as *const c_void)
        .with("SDL_RenderSetLogicalSize", SDL_RenderSetLogicalSize as *const c_void)
        .with("SDL_SetRenderDrawColor", SDL_SetRenderDrawColor as *const c_void)
        .with("SDL_CreateTexture", SDL_CreateTexture as *const c_void)
        .with("SDL_DestroyTexture", SDL_DestroyTexture as *const c_void)
        .with("SDL_UpdateTexture", SDL_UpdateTexture as *const c_void)
        .with("SDL_RenderClear", SDL_RenderClear as *const c_void)
        .with("SDL_RenderCopy", SDL_RenderCopy as *const c_void)
        .with("SDL_RenderPresent", SDL_RenderPresent as *const c_void)
        .with("SDL_PollEvent", SDL_PollEvent as *const c_void)
        .with("SDL_SetTextureScaleMode", SDL_SetTextureScaleMode as *const c_void)
}

/// Makes the named export fail on its next calls.
pub fn fail_on(symbol: &'static str) {
    STATE.with(|s| s.borrow_mut().fail = Some(symbol));
}

pub fn push_key(down: bool, sym: i32, repeat: bool) {
    let key = SDL_KeyboardEvent {
        kind: if down { SDL_KEYDOWN } else { SDL_KEYUP },
        state: u8::from(down),
        repeat: u8::from(repeat),
        keysym: SDL_Keysym {
            sym,
            ..SDL_Keysym::default()
        },
        ..SDL_KeyboardEvent::default()
    };
    STATE.with(|s| s.borrow_mut().events.push_back(SDL_Event { key }));
}

pub fn push_quit() {
    STATE.with(|s| s.borrow_mut().events.push_back(SDL_Event { kind: SDL_QUIT }));
}

/// Title, width, height and flags passed to `SDL_CreateWindow`.
pub fn window() -> Option<(String, c_int, c_int, u32)> {
    STATE.with(|s| s.borrow().window.clone())
}

/// Format, width and height passed to `SDL_CreateTexture`.
pub fn texture() -> Option<(u32, c_int, c_int)> {
    STATE.with(|s| s.borrow().texture)
}

/// Byte length and pitch of each `SDL_UpdateTexture` call.
pub fn uploads() -> Vec<(usize, c_int)> {
    STATE.with(|s| s.borrow().uploads.clone())
}

fn failing(symbol: &'static str) -> bool {
    STATE.with(|s| {
        let mut state = s.borrow_mut();
        if state.fail == Some(symbol) {
            state.error = CString::new(format!("{symbol} refused by stub")).unwrap_or_default();
            true
        } else {
            false
        }
    })
}

extern "C" fn SDL_Init(_flags: u32) -> c_int {
    if failing("SDL_Init") {
        return -1;
    }
    record("create sdl-video");
    0
}

extern "C" fn SDL_Quit() {
    record("destroy sdl-video");
}

extern "C" fn SDL_GetError() -> *const c_char {
    STATE.with(|s| s.borrow().error.as_ptr())
}

extern "C" fn SDL_ClearError() {
    STATE.with(|s| s.borrow_mut().error = CString::default());
}

extern "C" fn SDL_SetHint(name: *const c_char, value: *const c_char) -> c_int {
    let (name, value) = unsafe { (CStr::from_ptr(name), CStr::from_ptr(value)) };
    record(format!(
        "hint {}={}",
        name.to_string_lossy(),
        value.to_string_lossy()
    ));
    1
}

extern "C" fn SDL_CreateWindow(
    title: *const c_char,
    _x: c_int,
    _y: c_int,
    w: c_int,
    h: c_int,
    flags: u32,
) -> *mut c_void {
    if failing("SDL_CreateWindow") {
        return std::ptr::null_mut();
    }
    let title = unsafe { CStr::from_ptr(title) }.to_string_lossy().into_owned();
    STATE.with(|s| s.borrow_mut().window = Some((title, w, h, flags)));
    record("create window");
    WINDOW
}

extern "C" fn SDL_DestroyWindow(window: *mut c_void) {
    assert_eq!(window, WINDOW);
    record("destroy window");
}

extern "C" fn SDL_CreateRenderer(window: *mut c_void, _index: c_int, _flags: u32) -> *mut c_void {
    assert_eq!(window, WINDOW);
    if failing("SDL_CreateRenderer") {
        return std::ptr::null_mut();
    }
    record("create renderer");
    RENDERER
}

extern "C" fn SDL_DestroyRenderer(renderer: *mut c_void) {
    assert_eq!(renderer, RENDERER);
    record("destroy renderer");
}

extern "C" fn SDL_RenderSetLogicalSize(_renderer: *mut c_void, w: c_int, h: c_int) -> c_int {
    record(format!("logical {w}x{h}"));
    0
}

extern "C" fn SDL_SetRenderDrawColor(_renderer: *mut c_void, _r: u8, _g: u8, _b: u8, _a: u8) -> c_int {
    0
}

extern "C" fn SDL_CreateTexture(
    renderer: *mut c_void,
    format: u32,
    _access: c_int,
    w: c_int,
    h: c_int,
) -> *mut c_void {
    assert_eq!(renderer, RENDERER);
    if failing("SDL_CreateTexture") {
        return std::ptr::null_mut();
    }
    STATE.with(|s| s.borrow_mut().texture = Some((format, w, h)));
    record("create texture");
    TEXTURE
}

extern "C" fn SDL_DestroyTexture(texture: *mut c_void) {
    assert_eq!(texture, TEXTURE);
    record("destroy texture");
}

extern "C" fn SDL_UpdateTexture(
    texture: *mut c_void,
    _rect: *const SDL_Rect,
    _pixels: *const c_void,
    pitch: c_int,
) -> c_int {
    assert_eq!(texture, TEXTURE);
    if failing("SDL_UpdateTexture") {
        return -1;
    }
    let len = STATE.with(|s| s.borrow().texture.map(|(_, _, h)| (h * pitch) as usize).unwrap_or(0));
    STATE.with(|s| s.borrow_mut().uploads.push((len, pitch)));
    record("upload");
    0
}

extern "C" fn SDL_RenderClear(_renderer: *mut c_void) -> c_int {
    0
}

extern "C" fn SDL_RenderCopy(
    _renderer: *mut c_void,
    texture: *mut c_void,
    _src: *const SDL_Rect,
    _dst: *const SDL_Rect,
) -> c_int {
    assert_eq!(texture, TEXTURE);
    record("copy");
    0
}

extern "C" fn SDL_RenderPresent(_renderer: *mut c_void) {
    record("present");
}

extern "C" fn SDL_PollEvent(event: *mut SDL_Event) -> c_int {
    match STATE.with(|s| s.borrow_mut().events.pop_front()) {
        Some(next) => {
            unsafe { *event = next };
            record("poll event");
            1
        }
        None => 0,
    }
}

extern "C" fn SDL_SetTextureScaleMode(_texture: *mut c_void, mode: c_int) -> c_int {
    record(format!("scale mode {mode}"));
    0
}
