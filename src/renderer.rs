// src/renderer.rs

//! Backend-agnostic renderer facade.
//!
//! The application hands over a [`Capability`] and gets a [`Session`] back.
//! Which native library draws the window is chosen at build time: SDL2 by
//! default, GLFW + OpenGL with the `glfw` feature. The application code is
//! the same either way.

use crate::backends::{BackendDriver, RenderStatus};
use crate::capability::Capability;
use crate::config::Config;
use crate::error::Result;
use crate::native::{LibraryLoader, SystemLoader};
use crate::thread::OwnerThread;
use log::{error, info};

#[cfg(not(feature = "glfw"))]
pub type ActiveBackend = crate::backends::sdl::SdlDriver;
#[cfg(feature = "glfw")]
pub type ActiveBackend = crate::backends::glfw::GlfwDriver;

/// Opens a window for `capability` with the build's backend, the
/// environment's configuration and the system's dynamic loader.
pub fn setup<C: Capability>(capability: C) -> Result<Session<C>> {
    let config = Config::load()?;
    setup_with(capability, &config, &SystemLoader)
}

/// Like [`setup`] with an explicit configuration and loader.
pub fn setup_with<C: Capability>(
    capability: C,
    config: &Config,
    loader: &dyn LibraryLoader,
) -> Result<Session<C>> {
    setup_with_backend::<ActiveBackend, C>(capability, config, loader)
}

/// Like [`setup_with`] for a backend other than the build's default.
pub fn setup_with_backend<B: BackendDriver, C: Capability>(
    capability: C,
    config: &Config,
    loader: &dyn LibraryLoader,
) -> Result<Session<C, B>> {
    let owner = OwnerThread::current();
    let dims = capability.dimensions();
    info!(
        "Setting up {} session for '{}' ({}x{} x{})",
        B::NAME,
        capability.title(),
        dims.width,
        dims.height,
        dims.scale_factor
    );
    let driver = B::setup(&capability, config, loader)?;
    Ok(Session {
        capability,
        driver: OwnedDriver {
            driver: Some(driver),
            owner,
        },
    })
}

/// An open window bound to one capability.
///
/// Must be rendered and dropped on the thread that created it. Dropping an
/// open session cleans it up.
pub struct Session<C: Capability, B: BackendDriver = ActiveBackend> {
    capability: C,
    driver: OwnedDriver<B>,
}

impl<C: Capability, B: BackendDriver> Session<C, B> {
    /// Delivers pending key input to the capability, then presents its
    /// current frame.
    ///
    /// Returns [`RenderStatus::Close`] once the user asked to close the
    /// window; later calls keep returning it without drawing.
    pub fn render(&mut self) -> Result<RenderStatus> {
        self.driver.owner.check()?;
        match self.driver.driver.as_mut() {
            Some(driver) => driver.render(&mut self.capability),
            None => Ok(RenderStatus::Close),
        }
    }

    /// Destroys the window and unloads the native libraries, handing the
    /// capability back.
    pub fn cleanup(self) -> Result<C> {
        self.driver.owner.check()?;
        let Session {
            capability,
            mut driver,
        } = self;
        if let Some(mut driver) = driver.driver.take() {
            driver.cleanup();
            info!("{} session closed", B::NAME);
        }
        Ok(capability)
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn capability_mut(&mut self) -> &mut C {
        &mut self.capability
    }
}

/// Driver plus the thread allowed to tear it down.
struct OwnedDriver<B: BackendDriver> {
    driver: Option<B>,
    owner: OwnerThread,
}

impl<B: BackendDriver> Drop for OwnedDriver<B> {
    fn drop(&mut self) {
        let Some(mut driver) = self.driver.take() else {
            return;
        };
        if self.owner.check().is_ok() {
            driver.cleanup();
        } else {
            // Native teardown off the owning thread is undefined; leak instead.
            error!("{} session dropped on a foreign thread; leaking it", B::NAME);
            std::mem::forget(driver);
        }
    }
}
