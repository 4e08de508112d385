// src/backends/sdl/mod.rs

//! SDL2 backend driver.
//!
//! SDL2 provides the window, input and a 2D renderer, so a single native
//! library covers both dependency roles. The frame is streamed into one
//! RGBA texture that the renderer stretches over the window with nearest
//! neighbour sampling.

pub mod ffi;
pub mod keymap;

#[cfg(test)]
pub(crate) mod stub;

use self::ffi::{
    InitFlags, RendererFlags, SdlApi, SdlRendererPtr, SdlTexturePtr, SdlWindowPtr, WindowFlags,
    SDL_Event, SDL_KEYDOWN, SDL_KEYUP, SDL_PIXELFORMAT_RGBA32, SDL_QUIT,
};
use super::{route_key, BackendDriver, KeyRouting, NativeKeyAction, NativeKeyEvent, RenderStatus};
use crate::capability::{Capability, Dimensions};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::native::{LibraryLoader, NativeLibrary, SymbolSource};
use log::{debug, info, trace, warn};
use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_int;
use std::ptr;

pub struct SdlDriver {
    api: SdlApi,
    dimensions: Dimensions,
    clear_color: [u8; 4],
    vsync: bool,
    video_initialized: bool,
    window: SdlWindowPtr,
    renderer: SdlRendererPtr,
    texture: SdlTexturePtr,
    close_requested: bool,
    // Declared last: unloaded only after the handles above are gone.
    _library: Box<dyn SymbolSource>,
}

impl BackendDriver for SdlDriver {
    const NAME: &'static str = "SDL2";

    fn setup<C: Capability + ?Sized>(
        capability: &C,
        config: &Config,
        loader: &dyn LibraryLoader,
    ) -> Result<Self> {
        let dimensions = capability.dimensions();
        dimensions.validate()?;

        let file = config.library_file(NativeLibrary::Sdl2)?;
        let library = loader.open(&file)?;
        let api = SdlApi::bind(library.as_ref())?;
        info!(
            "SdlDriver: bound {} symbols from '{}'",
            SdlApi::REQUIRED.len(),
            library.library_name()
        );

        let mut driver = SdlDriver {
            api,
            dimensions,
            clear_color: config.display.clear_color,
            vsync: config.display.vsync,
            video_initialized: false,
            window: ptr::null_mut(),
            renderer: ptr::null_mut(),
            texture: ptr::null_mut(),
            close_requested: false,
            _library: library,
        };

        if let Err(err) = driver.create_resources(capability.title()) {
            warn!("SdlDriver: setup failed, tearing down: {}", err);
            driver.cleanup();
            return Err(err);
        }
        Ok(driver)
    }

    fn render<C: Capability + ?Sized>(&mut self, capability: &mut C) -> Result<RenderStatus> {
        self.drain_events(capability);
        if self.close_requested {
            debug!("SdlDriver: close requested");
            return Ok(RenderStatus::Close);
        }

        let frame = capability.frame();
        self.dimensions.check_frame(frame)?;
        self.present(frame)?;
        Ok(RenderStatus::Continue)
    }

    fn cleanup(&mut self) {
        unsafe {
            if !self.texture.is_null() {
                (self.api.SDL_DestroyTexture)(self.texture);
                self.texture = ptr::null_mut();
                debug!("SdlDriver: texture destroyed");
            }
            if !self.renderer.is_null() {
                (self.api.SDL_DestroyRenderer)(self.renderer);
                self.renderer = ptr::null_mut();
                debug!("SdlDriver: renderer destroyed");
            }
            if !self.window.is_null() {
                (self.api.SDL_DestroyWindow)(self.window);
                self.window = ptr::null_mut();
                debug!("SdlDriver: window destroyed");
            }
            if self.video_initialized {
                (self.api.SDL_Quit)();
                self.video_initialized = false;
                info!("SdlDriver: SDL shut down");
            }
        }
    }
}

impl SdlDriver {
    fn create_resources(&mut self, title: &str) -> Result<()> {
        let api = self.api;
        let (width, height) = (self.dimensions.width as c_int, self.dimensions.height as c_int);
        let (window_w, window_h) = self.dimensions.physical_size();

        unsafe {
            (api.SDL_ClearError)();
            if (api.SDL_Init)((InitFlags::VIDEO | InitFlags::EVENTS).bits()) != 0 {
                return Err(self.native_error("SDL_Init"));
            }
            self.video_initialized = true;

            if (api.SDL_SetHint)(
                ffi::SDL_HINT_RENDER_SCALE_QUALITY.as_ptr().cast(),
                ffi::SDL_HINT_VALUE_NEAREST.as_ptr().cast(),
            ) == 0
            {
                warn!("SdlDriver: scale quality hint rejected");
            }

            let c_title = CString::new(title.replace('\0', "")).unwrap_or_default();
            self.window = (api.SDL_CreateWindow)(
                c_title.as_ptr(),
                ffi::SDL_WINDOWPOS_CENTERED,
                ffi::SDL_WINDOWPOS_CENTERED,
                window_w as c_int,
                window_h as c_int,
                WindowFlags::SHOWN.bits(),
            );
            if self.window.is_null() {
                return Err(self.native_error("SDL_CreateWindow"));
            }
            info!("SdlDriver: created {}x{} window '{}'", window_w, window_h, title);

            let mut renderer_flags = RendererFlags::ACCELERATED;
            if self.vsync {
                renderer_flags |= RendererFlags::PRESENTVSYNC;
            }
            self.renderer = (api.SDL_CreateRenderer)(
                self.window,
                ffi::SDL_RENDERER_FIRST_AVAILABLE,
                renderer_flags.bits(),
            );
            if self.renderer.is_null() {
                return Err(self.native_error("SDL_CreateRenderer"));
            }

            // Logical coordinates equal frame pixels: a 1:1 orthographic mapping.
            if (api.SDL_RenderSetLogicalSize)(self.renderer, width, height) != 0 {
                return Err(self.native_error("SDL_RenderSetLogicalSize"));
            }
            let [r, g, b, a] = self.clear_color;
            if (api.SDL_SetRenderDrawColor)(self.renderer, r, g, b, a) != 0 {
                return Err(self.native_error("SDL_SetRenderDrawColor"));
            }

            self.texture = (api.SDL_CreateTexture)(
                self.renderer,
                SDL_PIXELFORMAT_RGBA32,
                ffi::SDL_TEXTUREACCESS_STREAMING,
                width,
                height,
            );
            if self.texture.is_null() {
                return Err(self.native_error("SDL_CreateTexture"));
            }
            debug!("SdlDriver: created {}x{} RGBA texture", width, height);
        }

        if api.SDL_SetTextureScaleMode.is_none() {
            debug!("SdlDriver: SDL_SetTextureScaleMode unavailable, relying on scale hint");
        }
        Ok(())
    }

    fn drain_events<C: Capability + ?Sized>(&mut self, capability: &mut C) {
        let mut event = SDL_Event::zeroed();
        while unsafe { (self.api.SDL_PollEvent)(&mut event) } != 0 {
            match event.kind() {
                SDL_QUIT => {
                    debug!("SdlDriver: SDL_QUIT received");
                    self.close_requested = true;
                }
                kind @ (SDL_KEYDOWN | SDL_KEYUP) => {
                    // SAFETY: the tag says this is a keyboard event.
                    let key = unsafe { event.key };
                    let action = if kind == SDL_KEYUP {
                        NativeKeyAction::Release
                    } else if key.repeat != 0 {
                        NativeKeyAction::Repeat
                    } else {
                        NativeKeyAction::Press
                    };
                    let native = NativeKeyEvent {
                        code: key.keysym.sym,
                        action,
                    };
                    if route_key(native, keymap::SDLK_ESCAPE, keymap::translate, capability)
                        == KeyRouting::CloseRequested
                    {
                        debug!("SdlDriver: escape pressed");
                        self.close_requested = true;
                    }
                }
                _ => {}
            }
        }
    }

    fn present(&mut self, frame: &[u8]) -> Result<()> {
        let api = self.api;
        let pitch = self.dimensions.pitch() as c_int;
        unsafe {
            (api.SDL_ClearError)();
            if (api.SDL_UpdateTexture)(self.texture, ptr::null(), frame.as_ptr().cast::<c_void>(), pitch)
                != 0
            {
                return Err(self.native_error("SDL_UpdateTexture"));
            }
            if let Some(set_scale_mode) = api.SDL_SetTextureScaleMode {
                if set_scale_mode(self.texture, ffi::SDL_SCALEMODE_NEAREST) != 0 {
                    return Err(self.native_error("SDL_SetTextureScaleMode"));
                }
            }
            if (api.SDL_RenderClear)(self.renderer) != 0 {
                return Err(self.native_error("SDL_RenderClear"));
            }
            if (api.SDL_RenderCopy)(self.renderer, self.texture, ptr::null(), ptr::null()) != 0 {
                return Err(self.native_error("SDL_RenderCopy"));
            }
            (api.SDL_RenderPresent)(self.renderer);
        }
        trace!("SdlDriver: frame presented");
        Ok(())
    }

    fn native_error(&self, operation: &'static str) -> Error {
        let message = unsafe {
            let raw = (self.api.SDL_GetError)();
            if raw.is_null() {
                String::new()
            } else {
                CStr::from_ptr(raw).to_string_lossy().into_owned()
            }
        };
        let message = if message.is_empty() {
            "no diagnostic available".to_string()
        } else {
            message
        };
        Error::native(operation, message)
    }
}

impl Drop for SdlDriver {
    fn drop(&mut self) {
        self.cleanup();
    }
}
