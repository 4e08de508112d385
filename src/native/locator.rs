// src/native/locator.rs

//! Host operating system to shared-library file name table.
//!
//! This table is the only place the supported platform list is declared.
//! Only hosts with a `dlopen` loader are listed.

use crate::error::{Error, Result};
use std::fmt;

/// Operating systems the locator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOs {
    Linux,
    MacOs,
    FreeBsd,
    Other(&'static str),
}

impl HostOs {
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` style identifier.
    pub fn from_identifier(os: &'static str) -> Self {
        match os {
            "linux" => HostOs::Linux,
            "macos" => HostOs::MacOs,
            "freebsd" => HostOs::FreeBsd,
            other => HostOs::Other(other),
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::Linux => f.write_str("linux"),
            HostOs::MacOs => f.write_str("macos"),
            HostOs::FreeBsd => f.write_str("freebsd"),
            HostOs::Other(name) => f.write_str(name),
        }
    }
}

/// Which role a native library plays for its backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Graphics,
    Windowing,
}

/// The native libraries a backend may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeLibrary {
    /// SDL2: windowing, input and its own 2D renderer.
    Sdl2,
    /// GLFW: windowing and input for the OpenGL backend.
    Glfw,
    OpenGl,
}

impl NativeLibrary {
    pub const ALL: [NativeLibrary; 3] = [
        NativeLibrary::Sdl2,
        NativeLibrary::Glfw,
        NativeLibrary::OpenGl,
    ];

    pub fn kind(&self) -> DependencyKind {
        match self {
            NativeLibrary::Sdl2 | NativeLibrary::Glfw => DependencyKind::Windowing,
            NativeLibrary::OpenGl => DependencyKind::Graphics,
        }
    }
}

impl fmt::Display for NativeLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeLibrary::Sdl2 => f.write_str("SDL2"),
            NativeLibrary::Glfw => f.write_str("GLFW"),
            NativeLibrary::OpenGl => f.write_str("OpenGL"),
        }
    }
}

/// Returns the platform file name for `library` on `os`.
pub fn locate(os: HostOs, library: NativeLibrary) -> Result<&'static str> {
    use HostOs::*;
    use NativeLibrary::*;

    let name = match (os, library) {
        (Linux | FreeBsd, Sdl2) => "libSDL2-2.0.so.0",
        (Linux | FreeBsd, Glfw) => "libglfw.so.3",
        (Linux | FreeBsd, OpenGl) => "libGL.so.1",

        (MacOs, Sdl2) => "libSDL2-2.0.0.dylib",
        (MacOs, Glfw) => "libglfw.3.dylib",
        (MacOs, OpenGl) => "/System/Library/Frameworks/OpenGL.framework/OpenGL",

        (Other(name), _) => {
            return Err(Error::UnsupportedPlatform {
                os: name.to_string(),
            })
        }
    };
    Ok(name)
}

/// `locate` for the host this process runs on.
pub fn locate_for_host(library: NativeLibrary) -> Result<&'static str> {
    locate(HostOs::current(), library)
}
