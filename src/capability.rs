// src/capability.rs

//! The contract between the embedding application and the renderer.

use crate::error::{Error, Result};
use crate::keys::Key;

/// Bytes per pixel of the packed RGBA frame buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest extent native windowing calls accept (`c_int`).
const MAX_NATIVE_SIZE: u64 = i32::MAX as u64;

/// Logical frame-buffer size and the window scale applied to it.
///
/// Read once at setup; a session never observes a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub scale_factor: f64,
}

impl Dimensions {
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Rejects empty sizes, non-positive scales, and any size, physical size
    /// or row pitch that does not fit a native `int`.
    pub fn validate(&self) -> Result<()> {
        let scale_ok = self.scale_factor.is_finite() && self.scale_factor > 0.0;
        let fits = |v: u64| v <= MAX_NATIVE_SIZE;
        let (physical_w, physical_h) = self.physical_size();
        let sizes_ok = fits(u64::from(self.width))
            && fits(u64::from(self.height))
            && fits(u64::from(self.width) * BYTES_PER_PIXEL as u64)
            && fits(u64::from(physical_w))
            && fits(u64::from(physical_h));
        if self.width == 0 || self.height == 0 || !scale_ok || !sizes_ok {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
                scale_factor: self.scale_factor,
            });
        }
        Ok(())
    }

    /// Window size in physical pixels, truncated toward zero.
    pub fn physical_size(&self) -> (u32, u32) {
        let scale = |v: u32| (f64::from(v) * self.scale_factor).trunc() as u32;
        (scale(self.width).max(1), scale(self.height).max(1))
    }

    /// Exact byte length of one frame.
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * BYTES_PER_PIXEL
    }

    /// Bytes per texture row.
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Rejects a frame whose length is not exactly `width * height * 4`.
    pub fn check_frame(&self, frame: &[u8]) -> Result<()> {
        let expected = self.frame_len();
        if frame.len() != expected {
            return Err(Error::FrameSizeMismatch {
                expected,
                actual: frame.len(),
            });
        }
        Ok(())
    }
}

/// Implemented by the embedding application.
///
/// `frame` is called once per `render`; its result is treated as the
/// authoritative current frame and is never retained past that call.
pub trait Capability {
    /// The current frame as packed row-major RGBA, 8 bits per channel.
    fn frame(&self) -> &[u8];

    fn dimensions(&self) -> Dimensions;

    fn title(&self) -> &str;

    fn key_down(&mut self, key: Key);

    fn key_up(&mut self, key: Key);
}
