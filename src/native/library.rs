// src/native/library.rs

//! Opening shared libraries through the platform dynamic loader.
//!
//! # Safety
//!
//! Raw `dlopen`/`dlsym`. Pointers returned here are untyped; the binder is
//! responsible for giving them a type.

use crate::error::{Error, ErrorCell, Result};
use log::{debug, info};
use std::ffi::c_void;

/// Anything that can resolve an exported symbol by exact name.
pub trait SymbolSource {
    /// File name or path this source was opened from.
    fn library_name(&self) -> &str;

    /// Address of `symbol`, or the loader's diagnostic if it is absent.
    fn resolve(&self, symbol: &str) -> std::result::Result<*const c_void, String>;
}

/// Opens libraries by file name.
pub trait LibraryLoader {
    fn open(&self, file_name: &str) -> Result<Box<dyn SymbolSource>>;
}

/// Loader backed by the operating system's dynamic loader.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLoader;

impl LibraryLoader for SystemLoader {
    fn open(&self, file_name: &str) -> Result<Box<dyn SymbolSource>> {
        Ok(Box::new(SharedLibrary::open(file_name)?))
    }
}

/// A library mapped into the process with immediate symbol resolution.
///
/// Unmapped on drop.
#[derive(Debug)]
pub struct SharedLibrary {
    #[cfg_attr(not(unix), allow(dead_code))]
    handle: *mut c_void,
    name: String,
    last_error: ErrorCell,
}

#[cfg(unix)]
impl SharedLibrary {
    pub fn open(file_name: &str) -> Result<Self> {
        use std::ffi::CString;

        let c_name = CString::new(file_name).map_err(|_| Error::LibraryLoadFailed {
            library: file_name.to_string(),
            reason: "library name contains an interior NUL byte".to_string(),
        })?;

        let last_error = ErrorCell::new();
        // dlerror is per-thread state; drain anything left from earlier calls.
        let _ = take_dlerror();
        let handle = unsafe { libc::dlopen(c_name.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        if handle.is_null() {
            if let Some(message) = take_dlerror() {
                last_error.set(message);
            }
            return Err(Error::LibraryLoadFailed {
                library: file_name.to_string(),
                reason: last_error.take_or("dlopen returned NULL"),
            });
        }

        info!("Loaded native library '{}'", file_name);
        Ok(Self {
            handle,
            name: file_name.to_string(),
            last_error,
        })
    }
}

#[cfg(not(unix))]
impl SharedLibrary {
    pub fn open(file_name: &str) -> Result<Self> {
        Err(Error::LibraryLoadFailed {
            library: file_name.to_string(),
            reason: "no dynamic loader implementation for this host".to_string(),
        })
    }
}

impl SymbolSource for SharedLibrary {
    fn library_name(&self) -> &str {
        &self.name
    }

    #[cfg(unix)]
    fn resolve(&self, symbol: &str) -> std::result::Result<*const c_void, String> {
        use std::ffi::CString;

        self.last_error.clear();
        let c_symbol = CString::new(symbol)
            .map_err(|_| "symbol name contains an interior NUL byte".to_string())?;

        let _ = take_dlerror();
        let address = unsafe { libc::dlsym(self.handle, c_symbol.as_ptr()) };
        // A NULL address is only an error when dlerror says so.
        if let Some(message) = take_dlerror() {
            self.last_error.set(message);
        }
        match self.last_error.take() {
            Some(message) => Err(message),
            None if address.is_null() => Err("symbol resolved to NULL".to_string()),
            None => Ok(address as *const c_void),
        }
    }

    #[cfg(not(unix))]
    fn resolve(&self, _symbol: &str) -> std::result::Result<*const c_void, String> {
        Err("no dynamic loader implementation for this host".to_string())
    }
}

impl Drop for SharedLibrary {
    fn drop(&mut self) {
        #[cfg(unix)]
        unsafe {
            if !self.handle.is_null() && libc::dlclose(self.handle) != 0 {
                log::warn!(
                    "dlclose('{}') failed: {}",
                    self.name,
                    take_dlerror().unwrap_or_default()
                );
            }
        }
        debug!("Unloaded native library '{}'", self.name);
    }
}

#[cfg(unix)]
fn take_dlerror() -> Option<String> {
    unsafe {
        let message = libc::dlerror();
        if message.is_null() {
            None
        } else {
            Some(
                std::ffi::CStr::from_ptr(message)
                    .to_string_lossy()
                    .into_owned(),
            )
        }
    }
}
