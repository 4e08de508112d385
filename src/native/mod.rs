// src/native/mod.rs

//! Runtime binding to native shared libraries.
//!
//! - `locator`: which file to open for a library on this host
//! - `library`: opening it through the dynamic loader
//! - `binder`: turning exported names into typed function pointers

pub mod binder;
pub mod library;
pub mod locator;


pub use binder::{bind, bind_optional};
pub use library::{LibraryLoader, SharedLibrary, SymbolSource, SystemLoader};
pub use locator::{locate, locate_for_host, DependencyKind, HostOs, NativeLibrary};
