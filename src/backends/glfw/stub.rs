// src/backends/glfw/stub.rs

//! Stub GLFW and OpenGL exports for driver tests.
//!
//! `glfwPollEvents` replays queued key events through whatever key callback
//! the driver registered, so the real callback path is exercised.

#![allow(non_snake_case)]

use super::ffi::*;
use crate::native::testing::{record, StubLibrary};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::{c_void, CStr, CString};
use std::os::raw::{c_char, c_double, c_float, c_int};
use std::ptr;

pub const GLFW_LIBRARY: &str = "libglfw-stub.so";
pub const GL_LIBRARY: &str = "libGL-stub.so";

pub const WINDOW: GlfwWindowPtr = 0x61 as GlfwWindowPtr;
const TEXTURE: GLuint = 7;
const GL_INVALID_OPERATION: GLenum = 0x0502;

/// Arguments of one `glTexSubImage2D` call plus the row length in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upload {
    pub width: GLsizei,
    pub height: GLsizei,
    pub row_length: GLint,
    pub format: GLenum,
}

#[derive(Default)]
struct State {
    fail: Option<&'static str>,
    error_callback: Option<GlfwErrorCallback>,
    key_callback: Option<GlfwKeyCallback>,
    events: VecDeque<(c_int, c_int)>,
    should_close: bool,
    hints: Vec<(c_int, c_int)>,
    swap_interval: Option<c_int>,
    window: Option<(String, c_int, c_int)>,
    framebuffer: Option<(c_int, c_int)>,
    texture_image: Option<(GLsizei, GLsizei)>,
    row_length: GLint,
    gl_error: GLenum,
    uploads: Vec<Upload>,
    viewport: Option<(GLsizei, GLsizei)>,
    ortho: Option<(c_double, c_double)>,
    filters: Vec<(GLenum, GLint)>,
    vertices: Vec<(c_float, c_float)>,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

pub fn glfw_library() -> StubLibrary {
    glfw_library_named(GLFW_LIBRARY)
}

/// The GLFW exports under another file name, standing in for a second
/// GLFW build.
pub fn glfw_library_named(name: &str) -> StubLibrary {
    StubLibrary::new(name)
        .with("glfwInit", glfwInit as *const c_void)
        .with("glfwTerminate", glfwTerminate as *const c_void)
        .with("glfwSetErrorCallback", glfwSetErrorCallback as *const c_void)
        .with("glfwWindowHint", glfwWindowHint as *const c_void)
        .with("glfwCreateWindow", glfwCreateWindow as *const c_void)
        .with("glfwDestroyWindow", glfwDestroyWindow as *const c_void)
        .with("glfwMakeContextCurrent", glfwMakeContextCurrent as *const c_void)
        .with("glfwSwapInterval", glfwSwapInterval as *const c_void)
        .with("glfwSetKeyCallback", glfwSetKeyCallback as *const c_void)
        .with("glfwPollEvents", glfwPollEvents as *const c_void)
        .with("glfwWindowShouldClose", glfwWindowShouldClose as *const c_void)
        .with("glfwSetWindowShouldClose", glfwSetWindowShouldClose as *const c_void)
        .with("glfwGetFramebufferSize", glfwGetFramebufferSize as *const c_void)
        .with("glfwSwapBuffers", glfwSwapBuffers as *const c_void)
}

pub fn gl_library() -> StubLibrary {
    StubLibrary::new(GL_LIBRARY)
        .with("glGetError", glGetError as *const c_void)
        .with("glGenTextures", glGenTextures as *const c_void)
        .with("glDeleteTextures", glDeleteTextures as *const c_void)
        .with("glBindTexture", glBindTexture as *const c_void)
        .with("glTexParameteri", glTexParameteri as *const c_void)
        .with("glPixelStorei", glPixelStorei as *const c_void)
        .with("glTexImage2D", glTexImage2D as *const c_void)
        .with("glTexSubImage2D", glTexSubImage2D as *const c_void)
        .with("glViewport", glViewport as *const c_void)
        .with("glMatrixMode", glMatrixMode as *const c_void)
        .with("glLoadIdentity", glLoadIdentity as *const c_void)
        .with("glOrtho", glOrtho as *const c_void)
        .with("glEnable", glEnable as *const c_void)
        .with("glDisable", glDisable as *const c_void)
        .with("glClearColor", glClearColor as *const c_void)
        .with("glClear", glClear as *const c_void)
        .with("glBegin", glBegin as *const c_void)
        .with("glEnd", glEnd as *const c_void)
        .with("glTexCoord2f", glTexCoord2f as *const c_void)
        .with("glVertex2f", glVertex2f as *const c_void)
}

/// Makes the named export fail on its next calls.
pub fn fail_on(symbol: &'static str) {
    STATE.with(|s| s.borrow_mut().fail = Some(symbol));
}

pub fn clear_failure() {
    STATE.with(|s| s.borrow_mut().fail = None);
}

/// Queues a key event for the next `glfwPollEvents`.
pub fn push_key(key: c_int, action: c_int) {
    STATE.with(|s| s.borrow_mut().events.push_back((key, action)));
}

/// Simulates the user clicking the window's close button.
pub fn request_close() {
    STATE.with(|s| s.borrow_mut().should_close = true);
}

pub fn set_framebuffer(width: c_int, height: c_int) {
    STATE.with(|s| s.borrow_mut().framebuffer = Some((width, height)));
}

/// Title, width and height passed to `glfwCreateWindow`.
pub fn window() -> Option<(String, c_int, c_int)> {
    STATE.with(|s| s.borrow().window.clone())
}

pub fn hints() -> Vec<(c_int, c_int)> {
    STATE.with(|s| s.borrow().hints.clone())
}

pub fn swap_interval() -> Option<c_int> {
    STATE.with(|s| s.borrow().swap_interval)
}

pub fn texture_image() -> Option<(GLsizei, GLsizei)> {
    STATE.with(|s| s.borrow().texture_image)
}

pub fn uploads() -> Vec<Upload> {
    STATE.with(|s| s.borrow().uploads.clone())
}

pub fn viewport() -> Option<(GLsizei, GLsizei)> {
    STATE.with(|s| s.borrow().viewport)
}

/// Right and bottom edges of the last `glOrtho` projection.
pub fn ortho() -> Option<(c_double, c_double)> {
    STATE.with(|s| s.borrow().ortho)
}

/// Every `(pname, value)` filter parameter set on the texture.
pub fn filters() -> Vec<(GLenum, GLint)> {
    STATE.with(|s| s.borrow().filters.clone())
}

pub fn vertices() -> Vec<(c_float, c_float)> {
    STATE.with(|s| s.borrow().vertices.clone())
}

pub fn has_key_callback() -> bool {
    STATE.with(|s| s.borrow().key_callback.is_some())
}

fn failing(symbol: &'static str) -> bool {
    STATE.with(|s| s.borrow().fail == Some(symbol))
}

fn report_error(code: c_int, text: &str) {
    let callback = STATE.with(|s| s.borrow().error_callback);
    if let Some(callback) = callback {
        let text = CString::new(text).unwrap_or_default();
        callback(code, text.as_ptr());
    }
}

extern "C" fn glfwInit() -> c_int {
    if failing("glfwInit") {
        report_error(0x0001_0008, "glfwInit refused by stub");
        return GLFW_FALSE;
    }
    record("create glfw");
    GLFW_TRUE
}

extern "C" fn glfwTerminate() {
    record("destroy glfw");
}

extern "C" fn glfwSetErrorCallback(callback: Option<GlfwErrorCallback>) -> Option<GlfwErrorCallback> {
    STATE.with(|s| std::mem::replace(&mut s.borrow_mut().error_callback, callback))
}

extern "C" fn glfwWindowHint(hint: c_int, value: c_int) {
    STATE.with(|s| s.borrow_mut().hints.push((hint, value)));
}

extern "C" fn glfwCreateWindow(
    width: c_int,
    height: c_int,
    title: *const c_char,
    _monitor: GlfwMonitorPtr,
    _share: GlfwWindowPtr,
) -> GlfwWindowPtr {
    if failing("glfwCreateWindow") {
        report_error(0x0001_0006, "glfwCreateWindow refused by stub");
        return ptr::null_mut();
    }
    let title = unsafe { CStr::from_ptr(title) }.to_string_lossy().into_owned();
    STATE.with(|s| s.borrow_mut().window = Some((title, width, height)));
    record("create window");
    WINDOW
}

extern "C" fn glfwDestroyWindow(window: GlfwWindowPtr) {
    assert_eq!(window, WINDOW);
    record("destroy window");
}

extern "C" fn glfwMakeContextCurrent(window: GlfwWindowPtr) {
    assert_eq!(window, WINDOW);
}

extern "C" fn glfwSwapInterval(interval: c_int) {
    STATE.with(|s| s.borrow_mut().swap_interval = Some(interval));
}

extern "C" fn glfwSetKeyCallback(
    window: GlfwWindowPtr,
    callback: Option<GlfwKeyCallback>,
) -> Option<GlfwKeyCallback> {
    assert_eq!(window, WINDOW);
    STATE.with(|s| std::mem::replace(&mut s.borrow_mut().key_callback, callback))
}

extern "C" fn glfwPollEvents() {
    record("poll events");
    let (callback, events) = STATE.with(|s| {
        let mut state = s.borrow_mut();
        (state.key_callback, std::mem::take(&mut state.events))
    });
    let Some(callback) = callback else {
        return;
    };
    for (key, action) in events {
        callback(WINDOW, key, 0, action, 0);
    }
}

extern "C" fn glfwWindowShouldClose(window: GlfwWindowPtr) -> c_int {
    assert_eq!(window, WINDOW);
    c_int::from(STATE.with(|s| s.borrow().should_close))
}

extern "C" fn glfwSetWindowShouldClose(window: GlfwWindowPtr, value: c_int) {
    assert_eq!(window, WINDOW);
    STATE.with(|s| s.borrow_mut().should_close = value != GLFW_FALSE);
}

extern "C" fn glfwGetFramebufferSize(window: GlfwWindowPtr, width: *mut c_int, height: *mut c_int) {
    assert_eq!(window, WINDOW);
    let (w, h) = STATE.with(|s| {
        let state = s.borrow();
        state
            .framebuffer
            .or_else(|| state.window.as_ref().map(|(_, w, h)| (*w, *h)))
            .unwrap_or((0, 0))
    });
    unsafe {
        *width = w;
        *height = h;
    }
}

extern "C" fn glfwSwapBuffers(window: GlfwWindowPtr) {
    assert_eq!(window, WINDOW);
    record("present");
}

extern "C" fn glGetError() -> GLenum {
    STATE.with(|s| std::mem::replace(&mut s.borrow_mut().gl_error, GL_NO_ERROR))
}

extern "C" fn glGenTextures(count: GLsizei, textures: *mut GLuint) {
    assert_eq!(count, 1);
    let name = if failing("glGenTextures") { 0 } else { TEXTURE };
    unsafe { *textures = name };
    if name != 0 {
        record("create texture");
    }
}

extern "C" fn glDeleteTextures(count: GLsizei, textures: *const GLuint) {
    assert_eq!(count, 1);
    assert_eq!(unsafe { *textures }, TEXTURE);
    record("destroy texture");
}

extern "C" fn glBindTexture(target: GLenum, texture: GLuint) {
    assert_eq!(target, GL_TEXTURE_2D);
    assert_eq!(texture, TEXTURE);
}

extern "C" fn glTexParameteri(_target: GLenum, pname: GLenum, value: GLint) {
    if pname == GL_TEXTURE_MIN_FILTER || pname == GL_TEXTURE_MAG_FILTER {
        STATE.with(|s| s.borrow_mut().filters.push((pname, value)));
    }
}

extern "C" fn glPixelStorei(pname: GLenum, value: GLint) {
    if pname == GL_UNPACK_ROW_LENGTH {
        STATE.with(|s| s.borrow_mut().row_length = value);
    }
}

extern "C" fn glTexImage2D(
    _target: GLenum,
    _level: GLint,
    _internal: GLint,
    width: GLsizei,
    height: GLsizei,
    _border: GLint,
    _format: GLenum,
    _kind: GLenum,
    pixels: *const c_void,
) {
    assert!(pixels.is_null(), "texture storage is allocated without data");
    STATE.with(|s| {
        let mut state = s.borrow_mut();
        state.texture_image = Some((width, height));
        if state.fail == Some("glTexImage2D") {
            state.gl_error = GL_INVALID_OPERATION;
        }
    });
}

extern "C" fn glTexSubImage2D(
    _target: GLenum,
    _level: GLint,
    _x: GLint,
    _y: GLint,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    _kind: GLenum,
    pixels: *const c_void,
) {
    assert!(!pixels.is_null());
    STATE.with(|s| {
        let mut state = s.borrow_mut();
        if state.fail == Some("glTexSubImage2D") {
            state.gl_error = GL_INVALID_OPERATION;
            return;
        }
        let row_length = state.row_length;
        state.uploads.push(Upload {
            width,
            height,
            row_length,
            format,
        });
    });
    record("upload");
}

extern "C" fn glViewport(_x: GLint, _y: GLint, width: GLsizei, height: GLsizei) {
    STATE.with(|s| s.borrow_mut().viewport = Some((width, height)));
}

extern "C" fn glMatrixMode(_mode: GLenum) {}

extern "C" fn glLoadIdentity() {}

extern "C" fn glOrtho(
    _left: c_double,
    right: c_double,
    bottom: c_double,
    _top: c_double,
    _near: c_double,
    _far: c_double,
) {
    STATE.with(|s| s.borrow_mut().ortho = Some((right, bottom)));
}

extern "C" fn glEnable(_cap: GLenum) {}

extern "C" fn glDisable(_cap: GLenum) {}

extern "C" fn glClearColor(_r: c_float, _g: c_float, _b: c_float, _a: c_float) {}

extern "C" fn glClear(_mask: GLbitfield) {}

extern "C" fn glBegin(mode: GLenum) {
    assert_eq!(mode, GL_QUADS);
    STATE.with(|s| s.borrow_mut().vertices.clear());
}

extern "C" fn glEnd() {
    record("draw quad");
}

extern "C" fn glTexCoord2f(_s: c_float, _t: c_float) {}

extern "C" fn glVertex2f(x: c_float, y: c_float) {
    STATE.with(|s| s.borrow_mut().vertices.push((x, y)));
}
