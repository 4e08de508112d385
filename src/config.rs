// src/config.rs

//! Runtime configuration for the renderer.
//!
//! Every field has a default, so an absent or partial file is fine. The
//! configuration only tunes a backend; which backend is compiled in is a
//! build-time decision (the `glfw` cargo feature).

use crate::error::{Error, Result};
use crate::native::{locate_for_host, NativeLibrary};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "FRAMEVIEW_CONFIG";
pub const SDL2_LIBRARY_ENV: &str = "FRAMEVIEW_SDL2_LIBRARY";
pub const GLFW_LIBRARY_ENV: &str = "FRAMEVIEW_GLFW_LIBRARY";
pub const OPENGL_LIBRARY_ENV: &str = "FRAMEVIEW_OPENGL_LIBRARY";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Overrides for native library file names.
    pub libraries: LibraryConfig,
    /// Presentation settings.
    pub display: DisplayConfig,
}

/// Per-library file name or path overrides.
///
/// `None` means "ask the locator for this host's default name".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    pub sdl2: Option<String>,
    pub glfw: Option<String>,
    pub opengl: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Synchronise presentation with the display refresh.
    pub vsync: bool,
    /// RGBA colour the surface is cleared to before each frame.
    pub clear_color: [u8; 4],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            vsync: true,
            clear_color: [0, 0, 0, 255],
        }
    }
}

impl Config {
    /// Loads from `$FRAMEVIEW_CONFIG` when set, then applies library
    /// overrides from the environment.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                debug!("{} not set, using default configuration", CONFIG_ENV);
                Self::default()
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&text)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let slots = [
            (SDL2_LIBRARY_ENV, &mut self.libraries.sdl2),
            (GLFW_LIBRARY_ENV, &mut self.libraries.glfw),
            (OPENGL_LIBRARY_ENV, &mut self.libraries.opengl),
        ];
        for (key, slot) in slots {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                debug!("{} overrides library name with '{}'", key, value);
                *slot = Some(value);
            }
        }
    }

    /// File name to open for `library`.
    ///
    /// The locator is consulted even when an override exists, so an
    /// unsupported host is still reported as such.
    pub fn library_file(&self, library: NativeLibrary) -> Result<String> {
        let default = locate_for_host(library)?;
        let override_name = match library {
            NativeLibrary::Sdl2 => &self.libraries.sdl2,
            NativeLibrary::Glfw => &self.libraries.glfw,
            NativeLibrary::OpenGl => &self.libraries.opengl,
        };
        Ok(override_name
            .clone()
            .unwrap_or_else(|| default.to_string()))
    }
}
