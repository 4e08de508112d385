// src/lib.rs

//! Presents an application-owned RGBA frame buffer in a native window and
//! feeds keyboard input back, using a windowing library bound at runtime.

pub mod backends;
pub mod capability;
pub mod config;
pub mod error;
pub mod keys;
pub mod native;
pub mod renderer;
pub mod thread;

pub use backends::RenderStatus;
pub use capability::{Capability, Dimensions, BYTES_PER_PIXEL};
pub use config::Config;
pub use error::{Error, Result};
pub use keys::{Key, KeyTransition};
pub use renderer::{setup, setup_with, ActiveBackend, Session};
