// src/native/binder.rs

//! Binding exported symbols into typed function pointers.
//!
//! Tables of bound symbols are declared with [`symbol_table!`]. A table value
//! only exists once every required field has been resolved, so a slot that
//! was never bound cannot be called. Missing symbols fail at setup, naming the
//! symbol, instead of crashing at first use.

use super::library::SymbolSource;
use crate::error::{Error, Result};
use log::{trace, warn};
use std::ffi::c_void;
use std::mem;
use std::panic::{self, AssertUnwindSafe};

/// Resolves `symbol` from `source` and reinterprets it as `F`.
///
/// Binding the same symbol again simply yields the same pointer.
///
/// # Safety
///
/// `F` must be an `extern "C"` function pointer type matching the native
/// signature of `symbol`.
pub unsafe fn bind<F: Copy>(source: &dyn SymbolSource, symbol: &str) -> Result<F> {
    let fail = |reason: String| Error::SymbolBindFailed {
        symbol: symbol.to_string(),
        library: source.library_name().to_string(),
        reason,
    };

    if mem::size_of::<F>() != mem::size_of::<*const c_void>() {
        return Err(fail(format!(
            "slot type is {} bytes, not a function pointer",
            mem::size_of::<F>()
        )));
    }

    // A resolver fault must surface as a bind error, never unwind further.
    let resolved = panic::catch_unwind(AssertUnwindSafe(|| source.resolve(symbol)))
        .map_err(|payload| fail(format!("resolver panicked: {}", panic_message(&payload))))?;

    let address = resolved.map_err(fail)?;
    if address.is_null() {
        return Err(fail("symbol resolved to NULL".to_string()));
    }

    trace!("bound {}!{} at {:p}", source.library_name(), symbol, address);
    Ok(mem::transmute_copy::<*const c_void, F>(&address))
}

/// Like [`bind`], but a missing symbol is logged and reported as `None`.
///
/// For entry points that only newer library versions export.
///
/// # Safety
///
/// Same contract as [`bind`].
pub unsafe fn bind_optional<F: Copy>(source: &dyn SymbolSource, symbol: &str) -> Option<F> {
    match bind::<F>(source, symbol) {
        Ok(f) => Some(f),
        Err(err) => {
            warn!("optional native symbol unavailable: {}", err);
            None
        }
    }
}

fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Declares a table of native entry points.
///
/// Field names are the exact exported symbol names. Every field of the main
/// block is required; fields in the `optional` block become `Option<_>`.
///
/// ```ignore
/// symbol_table! {
///     pub struct Api {
///         SDL_Init: unsafe extern "C" fn(u32) -> c_int,
///     }
///     optional {
///         SDL_SetTextureScaleMode: unsafe extern "C" fn(*mut c_void, c_int) -> c_int,
///     }
/// }
/// ```
#[macro_export]
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field:ident : $ty:ty),* $(,)?
        }
        $(optional {
            $($opt:ident : $opt_ty:ty),* $(,)?
        })?
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Clone, Copy)]
        $vis struct $name {
            $(pub $field: $ty,)*
            $($(pub $opt: Option<$opt_ty>,)*)?
        }

        impl $name {
            /// Names of the required symbols, in declaration order.
            pub const REQUIRED: &'static [&'static str] = &[$(stringify!($field)),*];

            /// Binds every symbol, failing on the first required one missing.
            pub fn bind(source: &dyn $crate::native::SymbolSource) -> $crate::error::Result<Self> {
                // SAFETY: each field's type is the declared native signature.
                unsafe {
                    Ok(Self {
                        $($field: $crate::native::bind::<$ty>(source, stringify!($field))?,)*
                        $($($opt: $crate::native::bind_optional::<$opt_ty>(source, stringify!($opt)),)*)?
                    })
                }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("required", &Self::REQUIRED.len())
                    .finish_non_exhaustive()
            }
        }
    };
}
