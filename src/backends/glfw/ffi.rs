// src/backends/glfw/ffi.rs

//! GLFW 3 and legacy OpenGL entry points, resolved by name at runtime.
//!
//! # Safety
//!
//! Everything here is raw FFI.

use std::ffi::c_void;
use std::os::raw::{c_char, c_double, c_float, c_int, c_uint};

pub type GlfwWindowPtr = *mut c_void;
pub type GlfwMonitorPtr = *mut c_void;

pub type GlfwErrorCallback = extern "C" fn(c_int, *const c_char);
pub type GlfwKeyCallback = extern "C" fn(GlfwWindowPtr, c_int, c_int, c_int, c_int);

pub const GLFW_TRUE: c_int = 1;
pub const GLFW_FALSE: c_int = 0;
pub const GLFW_RESIZABLE: c_int = 0x0002_0003;

pub const GLFW_RELEASE: c_int = 0;
pub const GLFW_PRESS: c_int = 1;
pub const GLFW_REPEAT: c_int = 2;

pub type GLenum = c_uint;
pub type GLuint = c_uint;
pub type GLint = c_int;
pub type GLsizei = c_int;
pub type GLbitfield = c_uint;

pub const GL_NO_ERROR: GLenum = 0;
pub const GL_QUADS: GLenum = 0x0007;
pub const GL_TEXTURE_2D: GLenum = 0x0DE1;
pub const GL_UNPACK_ALIGNMENT: GLenum = 0x0CF5;
pub const GL_UNPACK_ROW_LENGTH: GLenum = 0x0CF2;
pub const GL_UNSIGNED_BYTE: GLenum = 0x1401;
pub const GL_MODELVIEW: GLenum = 0x1700;
pub const GL_PROJECTION: GLenum = 0x1701;
pub const GL_RGBA: GLenum = 0x1908;
pub const GL_NEAREST: GLint = 0x2600;
pub const GL_TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const GL_TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const GL_TEXTURE_WRAP_S: GLenum = 0x2802;
pub const GL_TEXTURE_WRAP_T: GLenum = 0x2803;
pub const GL_CLAMP_TO_EDGE: GLint = 0x812F;
pub const GL_DEPTH_TEST: GLenum = 0x0B71;
pub const GL_COLOR_BUFFER_BIT: GLbitfield = 0x0000_4000;

crate::symbol_table! {
    /// Bound GLFW API.
    pub struct GlfwApi {
        glfwInit: unsafe extern "C" fn() -> c_int,
        glfwTerminate: unsafe extern "C" fn(),
        glfwSetErrorCallback: unsafe extern "C" fn(Option<GlfwErrorCallback>) -> Option<GlfwErrorCallback>,
        glfwWindowHint: unsafe extern "C" fn(c_int, c_int),
        glfwCreateWindow: unsafe extern "C" fn(c_int, c_int, *const c_char, GlfwMonitorPtr, GlfwWindowPtr) -> GlfwWindowPtr,
        glfwDestroyWindow: unsafe extern "C" fn(GlfwWindowPtr),
        glfwMakeContextCurrent: unsafe extern "C" fn(GlfwWindowPtr),
        glfwSwapInterval: unsafe extern "C" fn(c_int),
        glfwSetKeyCallback: unsafe extern "C" fn(GlfwWindowPtr, Option<GlfwKeyCallback>) -> Option<GlfwKeyCallback>,
        glfwPollEvents: unsafe extern "C" fn(),
        glfwWindowShouldClose: unsafe extern "C" fn(GlfwWindowPtr) -> c_int,
        glfwSetWindowShouldClose: unsafe extern "C" fn(GlfwWindowPtr, c_int),
        glfwGetFramebufferSize: unsafe extern "C" fn(GlfwWindowPtr, *mut c_int, *mut c_int),
        glfwSwapBuffers: unsafe extern "C" fn(GlfwWindowPtr),
    }
}

crate::symbol_table! {
    /// Bound OpenGL 1.x API.
    pub struct GlApi {
        glGetError: unsafe extern "C" fn() -> GLenum,
        glGenTextures: unsafe extern "C" fn(GLsizei, *mut GLuint),
        glDeleteTextures: unsafe extern "C" fn(GLsizei, *const GLuint),
        glBindTexture: unsafe extern "C" fn(GLenum, GLuint),
        glTexParameteri: unsafe extern "C" fn(GLenum, GLenum, GLint),
        glPixelStorei: unsafe extern "C" fn(GLenum, GLint),
        glTexImage2D: unsafe extern "C" fn(GLenum, GLint, GLint, GLsizei, GLsizei, GLint, GLenum, GLenum, *const c_void),
        glTexSubImage2D: unsafe extern "C" fn(GLenum, GLint, GLint, GLint, GLsizei, GLsizei, GLenum, GLenum, *const c_void),
        glViewport: unsafe extern "C" fn(GLint, GLint, GLsizei, GLsizei),
        glMatrixMode: unsafe extern "C" fn(GLenum),
        glLoadIdentity: unsafe extern "C" fn(),
        glOrtho: unsafe extern "C" fn(c_double, c_double, c_double, c_double, c_double, c_double),
        glEnable: unsafe extern "C" fn(GLenum),
        glDisable: unsafe extern "C" fn(GLenum),
        glClearColor: unsafe extern "C" fn(c_float, c_float, c_float, c_float),
        glClear: unsafe extern "C" fn(GLbitfield),
        glBegin: unsafe extern "C" fn(GLenum),
        glEnd: unsafe extern "C" fn(),
        glTexCoord2f: unsafe extern "C" fn(c_float, c_float),
        glVertex2f: unsafe extern "C" fn(c_float, c_float),
    }
}
