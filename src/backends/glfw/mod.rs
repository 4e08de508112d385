// src/backends/glfw/mod.rs

//! GLFW + OpenGL backend driver.
//!
//! GLFW owns the window, the GL context and input; OpenGL draws the frame as
//! one textured quad under an orthographic projection that maps window
//! pixels 1:1.
//!
//! Key events arrive through a GLFW callback during `glfwPollEvents`. The
//! callback only queues them on the session's queue, found through a
//! per-thread slot naming the session's window; `render` then routes the
//! queue into the capability before drawing. The slot holds no native
//! function pointers, so nothing in it outlives an unloaded library.

pub mod ffi;
pub mod keymap;

#[cfg(test)]
pub(crate) mod stub;

use self::ffi::*;
use super::{route_key, BackendDriver, KeyRouting, NativeKeyAction, NativeKeyEvent, RenderStatus};
use crate::capability::{Capability, Dimensions};
use crate::config::Config;
use crate::error::{Error, ErrorCell, Result};
use crate::native::{LibraryLoader, NativeLibrary, SymbolSource};
use log::{debug, info, trace, warn};
use std::cell::RefCell;
use std::ffi::{c_void, CStr, CString};
use std::os::raw::{c_char, c_int};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::rc::{Rc, Weak};

type KeyQueue = RefCell<Vec<NativeKeyEvent>>;

/// The window this thread's session owns and where its key events go.
struct KeyTarget {
    window: GlfwWindowPtr,
    queue: Weak<KeyQueue>,
}

thread_local! {
    // GLFW reports errors on the thread whose call failed.
    static GLFW_ERROR: ErrorCell = const { ErrorCell::new() };
    // GLFW delivers input on the thread that polls, which owns the window.
    static KEY_TARGET: RefCell<Option<KeyTarget>> = const { RefCell::new(None) };
}

extern "C" fn on_glfw_error(code: c_int, description: *const c_char) {
    let text = if description.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(description) }
            .to_string_lossy()
            .into_owned()
    };
    warn!("GLFW error {:#x}: {}", code, text);
    GLFW_ERROR.with(|cell| cell.set(format!("GLFW error {code:#x}: {text}")));
}

extern "C" fn on_glfw_key(
    window: GlfwWindowPtr,
    key: c_int,
    _scancode: c_int,
    action: c_int,
    _mods: c_int,
) {
    let queued = panic::catch_unwind(AssertUnwindSafe(|| {
        let action = match action {
            GLFW_PRESS => NativeKeyAction::Press,
            GLFW_RELEASE => NativeKeyAction::Release,
            GLFW_REPEAT => NativeKeyAction::Repeat,
            _ => return,
        };
        let queue = KEY_TARGET
            .try_with(|slot| {
                slot.borrow()
                    .as_ref()
                    .filter(|target| target.window == window)
                    .and_then(|target| target.queue.upgrade())
            })
            .ok()
            .flatten();
        let Some(queue) = queue else {
            trace!("GLFW key event for an unowned window dropped");
            return;
        };
        if let Ok(mut events) = queue.try_borrow_mut() {
            events.push(NativeKeyEvent { code: key, action });
        };
    }));
    if queued.is_err() {
        log::error!("GLFW key callback panicked; event dropped");
    }
}

fn take_glfw_error(default: &str) -> String {
    GLFW_ERROR.with(|cell| cell.take_or(default))
}

pub struct GlfwDriver {
    glfw: GlfwApi,
    gl: GlApi,
    dimensions: Dimensions,
    clear_color: [u8; 4],
    vsync: bool,
    initialized: bool,
    window: GlfwWindowPtr,
    texture: GLuint,
    key_queue: Rc<KeyQueue>,
    // Unloaded after the handles above, OpenGL before GLFW.
    _gl_library: Box<dyn SymbolSource>,
    _glfw_library: Box<dyn SymbolSource>,
}

impl BackendDriver for GlfwDriver {
    const NAME: &'static str = "GLFW+OpenGL";

    fn setup<C: Capability + ?Sized>(
        capability: &C,
        config: &Config,
        loader: &dyn LibraryLoader,
    ) -> Result<Self> {
        let dimensions = capability.dimensions();
        dimensions.validate()?;

        let glfw_library = loader.open(&config.library_file(NativeLibrary::Glfw)?)?;
        let glfw = GlfwApi::bind(glfw_library.as_ref())?;
        let gl_library = loader.open(&config.library_file(NativeLibrary::OpenGl)?)?;
        let gl = GlApi::bind(gl_library.as_ref())?;
        info!(
            "GlfwDriver: bound {} GLFW symbols from '{}' and {} GL symbols from '{}'",
            GlfwApi::REQUIRED.len(),
            glfw_library.library_name(),
            GlApi::REQUIRED.len(),
            gl_library.library_name()
        );

        let mut driver = GlfwDriver {
            glfw,
            gl,
            dimensions,
            clear_color: config.display.clear_color,
            vsync: config.display.vsync,
            initialized: false,
            window: ptr::null_mut(),
            texture: 0,
            key_queue: Rc::new(RefCell::new(Vec::new())),
            _gl_library: gl_library,
            _glfw_library: glfw_library,
        };

        if let Err(err) = driver.create_resources(capability.title()) {
            warn!("GlfwDriver: setup failed, tearing down: {}", err);
            driver.cleanup();
            return Err(err);
        }
        Ok(driver)
    }

    fn render<C: Capability + ?Sized>(&mut self, capability: &mut C) -> Result<RenderStatus> {
        self.drain_events(capability);
        if unsafe { (self.glfw.glfwWindowShouldClose)(self.window) } != GLFW_FALSE {
            debug!("GlfwDriver: window should close");
            return Ok(RenderStatus::Close);
        }

        let frame = capability.frame();
        self.dimensions.check_frame(frame)?;
        self.draw(frame)?;
        unsafe { (self.glfw.glfwSwapBuffers)(self.window) };
        trace!("GlfwDriver: frame presented");
        Ok(RenderStatus::Continue)
    }

    fn cleanup(&mut self) {
        unsafe {
            if self.texture != 0 {
                (self.gl.glDeleteTextures)(1, &self.texture);
                self.texture = 0;
                debug!("GlfwDriver: texture deleted");
            }
            if !self.window.is_null() {
                (self.glfw.glfwSetKeyCallback)(self.window, None);
                self.release_key_target();
                (self.glfw.glfwDestroyWindow)(self.window);
                self.window = ptr::null_mut();
                debug!("GlfwDriver: window destroyed");
            }
            if self.initialized {
                (self.glfw.glfwTerminate)();
                (self.glfw.glfwSetErrorCallback)(None);
                self.initialized = false;
                info!("GlfwDriver: GLFW terminated");
            }
        }
        self.key_queue.borrow_mut().clear();
    }
}

impl GlfwDriver {
    /// Points this thread's key callback at this session's window and queue.
    fn claim_key_target(&self) {
        KEY_TARGET.with(|slot| {
            let previous = slot.borrow_mut().replace(KeyTarget {
                window: self.window,
                queue: Rc::downgrade(&self.key_queue),
            });
            if previous.is_some_and(|p| p.queue.strong_count() > 0) {
                warn!("GlfwDriver: another live session on this thread loses key input");
            }
        });
    }

    fn release_key_target(&self) {
        let _ = KEY_TARGET.try_with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot
                .as_ref()
                .is_some_and(|t| t.queue.as_ptr() == Rc::as_ptr(&self.key_queue))
            {
                *slot = None;
            }
        });
    }

    fn create_resources(&mut self, title: &str) -> Result<()> {
        let (glfw, gl) = (self.glfw, self.gl);
        let (width, height) = (self.dimensions.width as GLsizei, self.dimensions.height as GLsizei);
        let (window_w, window_h) = self.dimensions.physical_size();

        unsafe {
            GLFW_ERROR.with(ErrorCell::clear);
            (glfw.glfwSetErrorCallback)(Some(on_glfw_error));
            if (glfw.glfwInit)() != GLFW_TRUE {
                return Err(Error::native("glfwInit", take_glfw_error("glfwInit returned false")));
            }
            self.initialized = true;

            (glfw.glfwWindowHint)(GLFW_RESIZABLE, GLFW_FALSE);
            let c_title = CString::new(title.replace('\0', "")).unwrap_or_default();
            self.window = (glfw.glfwCreateWindow)(
                window_w as c_int,
                window_h as c_int,
                c_title.as_ptr(),
                ptr::null_mut(),
                ptr::null_mut(),
            );
            if self.window.is_null() {
                return Err(Error::native(
                    "glfwCreateWindow",
                    take_glfw_error("glfwCreateWindow returned NULL"),
                ));
            }
            info!("GlfwDriver: created {}x{} window '{}'", window_w, window_h, title);

            (glfw.glfwMakeContextCurrent)(self.window);
            (glfw.glfwSwapInterval)(c_int::from(self.vsync));
            self.claim_key_target();
            (glfw.glfwSetKeyCallback)(self.window, Some(on_glfw_key));

            (gl.glGenTextures)(1, &mut self.texture);
            if self.texture == 0 {
                return Err(Error::native("glGenTextures", "no texture name returned"));
            }
            (gl.glBindTexture)(GL_TEXTURE_2D, self.texture);
            self.set_nearest_filtering();
            (gl.glTexParameteri)(GL_TEXTURE_2D, GL_TEXTURE_WRAP_S, GL_CLAMP_TO_EDGE);
            (gl.glTexParameteri)(GL_TEXTURE_2D, GL_TEXTURE_WRAP_T, GL_CLAMP_TO_EDGE);
            (gl.glPixelStorei)(GL_UNPACK_ALIGNMENT, 4);
            // Allocated once at the logical size; never resized.
            (gl.glTexImage2D)(
                GL_TEXTURE_2D,
                0,
                GL_RGBA as GLint,
                width,
                height,
                0,
                GL_RGBA,
                GL_UNSIGNED_BYTE,
                ptr::null(),
            );
            self.check_gl("glTexImage2D")?;
            debug!("GlfwDriver: created {}x{} RGBA texture {}", width, height, self.texture);

            (gl.glDisable)(GL_DEPTH_TEST);
            let [r, g, b, a] = self.clear_color.map(|c| f32::from(c) / 255.0);
            (gl.glClearColor)(r, g, b, a);
        }
        Ok(())
    }

    fn drain_events<C: Capability + ?Sized>(&mut self, capability: &mut C) {
        unsafe { (self.glfw.glfwPollEvents)() };
        let events: Vec<NativeKeyEvent> = self.key_queue.borrow_mut().drain(..).collect();
        for event in events {
            if route_key(event, keymap::GLFW_KEY_ESCAPE, keymap::translate, capability)
                == KeyRouting::CloseRequested
            {
                debug!("GlfwDriver: escape pressed");
                unsafe { (self.glfw.glfwSetWindowShouldClose)(self.window, GLFW_TRUE) };
            }
        }
    }

    fn draw(&mut self, frame: &[u8]) -> Result<()> {
        let gl = self.gl;
        let (width, height) = (self.dimensions.width as GLsizei, self.dimensions.height as GLsizei);
        let (window_w, window_h) = self.dimensions.physical_size();
        let (window_w, window_h) = (window_w as f32, window_h as f32);

        unsafe {
            let (mut fb_w, mut fb_h) = (0, 0);
            (self.glfw.glfwGetFramebufferSize)(self.window, &mut fb_w, &mut fb_h);
            (gl.glViewport)(0, 0, fb_w, fb_h);

            (gl.glMatrixMode)(GL_PROJECTION);
            (gl.glLoadIdentity)();
            (gl.glOrtho)(0.0, f64::from(window_w), f64::from(window_h), 0.0, -1.0, 1.0);
            (gl.glMatrixMode)(GL_MODELVIEW);
            (gl.glLoadIdentity)();

            (gl.glClear)(GL_COLOR_BUFFER_BIT);
            (gl.glEnable)(GL_TEXTURE_2D);
            (gl.glBindTexture)(GL_TEXTURE_2D, self.texture);
            self.set_nearest_filtering();

            // Whole frame every time; rows are exactly `width` pixels apart.
            (gl.glPixelStorei)(GL_UNPACK_ROW_LENGTH, width);
            (gl.glTexSubImage2D)(
                GL_TEXTURE_2D,
                0,
                0,
                0,
                width,
                height,
                GL_RGBA,
                GL_UNSIGNED_BYTE,
                frame.as_ptr().cast::<c_void>(),
            );
            self.check_gl("glTexSubImage2D")?;

            (gl.glBegin)(GL_QUADS);
            (gl.glTexCoord2f)(0.0, 0.0);
            (gl.glVertex2f)(0.0, 0.0);
            (gl.glTexCoord2f)(1.0, 0.0);
            (gl.glVertex2f)(window_w, 0.0);
            (gl.glTexCoord2f)(1.0, 1.0);
            (gl.glVertex2f)(window_w, window_h);
            (gl.glTexCoord2f)(0.0, 1.0);
            (gl.glVertex2f)(0.0, window_h);
            (gl.glEnd)();
            self.check_gl("draw")?;
        }
        Ok(())
    }

    unsafe fn set_nearest_filtering(&self) {
        (self.gl.glTexParameteri)(GL_TEXTURE_2D, GL_TEXTURE_MIN_FILTER, GL_NEAREST);
        (self.gl.glTexParameteri)(GL_TEXTURE_2D, GL_TEXTURE_MAG_FILTER, GL_NEAREST);
    }

    fn check_gl(&self, operation: &'static str) -> Result<()> {
        let code = unsafe { (self.gl.glGetError)() };
        if code != GL_NO_ERROR {
            return Err(Error::native(operation, format!("glGetError returned {code:#06x}")));
        }
        Ok(())
    }
}

impl Drop for GlfwDriver {
    fn drop(&mut self) {
        self.cleanup();
    }
}
