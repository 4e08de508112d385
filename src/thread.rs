// src/thread.rs

//! Owning-thread token for native windowing resources.
//!
//! Native windowing libraries require event handling on the thread that
//! created the window. The token is captured at setup and checked on every
//! call into a session.

use crate::error::{Error, Result};
use std::thread::{self, ThreadId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerThread {
    id: ThreadId,
}

impl OwnerThread {
    /// Pins ownership to the calling thread.
    pub fn current() -> Self {
        Self {
            id: thread::current().id(),
        }
    }

    pub fn check(&self) -> Result<()> {
        if thread::current().id() != self.id {
            log::error!("render session touched from foreign thread {:?}", thread::current().id());
            return Err(Error::WrongThread);
        }
        Ok(())
    }
}
