// src/backends/sdl/ffi.rs

//! SDL2 entry points, resolved by name at runtime.
//!
//! # Safety
//!
//! Everything here is raw FFI. Layouts follow the SDL 2.0 headers.

#![allow(non_camel_case_types)]

use bitflags::bitflags;
use std::ffi::c_void;
use std::os::raw::{c_char, c_int};

pub type SdlWindowPtr = *mut c_void;
pub type SdlRendererPtr = *mut c_void;
pub type SdlTexturePtr = *mut c_void;

bitflags! {
    /// `SDL_Init` subsystem flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InitFlags: u32 {
        const VIDEO = 0x0000_0020;
        const EVENTS = 0x0000_4000;
    }
}

bitflags! {
    /// `SDL_CreateWindow` flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowFlags: u32 {
        const SHOWN = 0x0000_0004;
        const RESIZABLE = 0x0000_0020;
    }
}

bitflags! {
    /// `SDL_CreateRenderer` flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RendererFlags: u32 {
        const ACCELERATED = 0x0000_0002;
        const PRESENTVSYNC = 0x0000_0004;
    }
}

pub const SDL_WINDOWPOS_CENTERED: c_int = 0x2FFF_0000;

/// Any rendering driver.
pub const SDL_RENDERER_FIRST_AVAILABLE: c_int = -1;

pub const SDL_TEXTUREACCESS_STREAMING: c_int = 1;

/// `SDL_PIXELFORMAT_RGBA32`: bytes in memory are R, G, B, A.
#[cfg(target_endian = "little")]
pub const SDL_PIXELFORMAT_RGBA32: u32 = 0x1676_2004; // ABGR8888
#[cfg(target_endian = "big")]
pub const SDL_PIXELFORMAT_RGBA32: u32 = 0x1646_2004; // RGBA8888

pub const SDL_SCALEMODE_NEAREST: c_int = 0;

pub const SDL_HINT_RENDER_SCALE_QUALITY: &[u8] = b"SDL_RENDER_SCALE_QUALITY\0";
pub const SDL_HINT_VALUE_NEAREST: &[u8] = b"nearest\0";

// Event types
pub const SDL_QUIT: u32 = 0x100;
pub const SDL_KEYDOWN: u32 = 0x300;
pub const SDL_KEYUP: u32 = 0x301;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_Keysym {
    pub scancode: i32,
    pub sym: i32,
    pub modifiers: u16,
    pub unused: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_KeyboardEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub state: u8,
    pub repeat: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub keysym: SDL_Keysym,
}

/// `SDL_Event`: a 56-byte union tagged by its first `u32`.
#[repr(C)]
#[derive(Clone, Copy)]
pub union SDL_Event {
    pub kind: u32,
    pub key: SDL_KeyboardEvent,
    pub padding: [u8; 56],
}

impl SDL_Event {
    pub fn zeroed() -> Self {
        SDL_Event { padding: [0; 56] }
    }

    pub fn kind(&self) -> u32 {
        // SAFETY: every variant starts with the u32 type tag.
        unsafe { self.kind }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

crate::symbol_table! {
    /// Bound SDL2 API.
    pub struct SdlApi {
        SDL_Init: unsafe extern "C" fn(u32) -> c_int,
        SDL_Quit: unsafe extern "C" fn(),
        SDL_GetError: unsafe extern "C" fn() -> *const c_char,
        SDL_ClearError: unsafe extern "C" fn(),
        SDL_SetHint: unsafe extern "C" fn(*const c_char, *const c_char) -> c_int,
        SDL_CreateWindow: unsafe extern "C" fn(*const c_char, c_int, c_int, c_int, c_int, u32) -> SdlWindowPtr,
        SDL_DestroyWindow: unsafe extern "C" fn(SdlWindowPtr),
        SDL_CreateRenderer: unsafe extern "C" fn(SdlWindowPtr, c_int, u32) -> SdlRendererPtr,
        SDL_DestroyRenderer: unsafe extern "C" fn(SdlRendererPtr),
        SDL_RenderSetLogicalSize: unsafe extern "C" fn(SdlRendererPtr, c_int, c_int) -> c_int,
        SDL_SetRenderDrawColor: unsafe extern "C" fn(SdlRendererPtr, u8, u8, u8, u8) -> c_int,
        SDL_CreateTexture: unsafe extern "C" fn(SdlRendererPtr, u32, c_int, c_int, c_int) -> SdlTexturePtr,
        SDL_DestroyTexture: unsafe extern "C" fn(SdlTexturePtr),
        SDL_UpdateTexture: unsafe extern "C" fn(SdlTexturePtr, *const SDL_Rect, *const c_void, c_int) -> c_int,
        SDL_RenderClear: unsafe extern "C" fn(SdlRendererPtr) -> c_int,
        SDL_RenderCopy: unsafe extern "C" fn(SdlRendererPtr, SdlTexturePtr, *const SDL_Rect, *const SDL_Rect) -> c_int,
        SDL_RenderPresent: unsafe extern "C" fn(SdlRendererPtr),
        SDL_PollEvent: unsafe extern "C" fn(*mut SDL_Event) -> c_int,
    }
    optional {
        // SDL >= 2.0.12
        SDL_SetTextureScaleMode: unsafe extern "C" fn(SdlTexturePtr, c_int) -> c_int,
    }
}
