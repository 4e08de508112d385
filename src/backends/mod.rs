// src/backends/mod.rs

//! Backend drivers: one per native windowing library.
//!
//! Every driver implements the same session life cycle
//! (`setup` -> `render`* -> `cleanup`) so the facade never needs to know
//! which library is underneath.
//!
//! ## Threading Model
//! A driver is created, rendered and cleaned up on one thread. Native
//! windowing calls must stay on the thread that created the window.

use crate::capability::Capability;
use crate::config::Config;
use crate::error::Result;
use crate::keys::{Key, KeyTransition};
use crate::native::LibraryLoader;
use log::trace;

pub mod glfw;
pub mod sdl;

/// Result of one successful `render` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// The frame was presented; keep calling `render`.
    Continue,
    /// The window was asked to close. Not an error.
    Close,
}

/// Platform-specific render session.
pub trait BackendDriver: Sized {
    /// Human readable backend name for logs.
    const NAME: &'static str;

    /// Binds the native libraries and creates window, surface and texture.
    ///
    /// On failure everything already created is torn down before returning.
    fn setup<C: Capability + ?Sized>(
        capability: &C,
        config: &Config,
        loader: &dyn LibraryLoader,
    ) -> Result<Self>;

    /// Drains input into `capability`, then uploads and presents its frame.
    fn render<C: Capability + ?Sized>(&mut self, capability: &mut C) -> Result<RenderStatus>;

    /// Releases native resources in reverse creation order. Safe to repeat.
    fn cleanup(&mut self);
}

/// What a native key transition looked like before translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeKeyAction {
    Press,
    Release,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeKeyEvent {
    pub code: i32,
    pub action: NativeKeyAction,
}

/// Outcome of routing one native key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRouting {
    Delivered(Key, KeyTransition),
    /// The escape shortcut was pressed.
    CloseRequested,
    Ignored,
}

/// Routes a native key event through `translate` into `capability`.
///
/// `escape_code` is intercepted before the lookup: a press requests close,
/// a release is swallowed. Auto-repeat and unmapped codes are dropped.
pub fn route_key<C: Capability + ?Sized>(
    event: NativeKeyEvent,
    escape_code: i32,
    translate: fn(i32) -> Option<Key>,
    capability: &mut C,
) -> KeyRouting {
    if event.code == escape_code {
        return match event.action {
            NativeKeyAction::Press => KeyRouting::CloseRequested,
            _ => KeyRouting::Ignored,
        };
    }

    let transition = match event.action {
        NativeKeyAction::Press => KeyTransition::Down,
        NativeKeyAction::Release => KeyTransition::Up,
        NativeKeyAction::Repeat => return KeyRouting::Ignored,
    };

    let Some(key) = translate(event.code) else {
        trace!("dropping unmapped native key code {}", event.code);
        return KeyRouting::Ignored;
    };

    match transition {
        KeyTransition::Down => capability.key_down(key),
        KeyTransition::Up => capability.key_up(key),
    }
    KeyRouting::Delivered(key, transition)
}

#[cfg(test)]
pub(crate) mod test_support;
