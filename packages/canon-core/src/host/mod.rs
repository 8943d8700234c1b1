//! Host runtime interface.
//!
//! Components only produce markup. Attaching that markup somewhere, tearing
//! it down and delivering events belongs to a host. [`MemoryHost`] keeps
//! mounted trees in memory and delivers simulated events synchronously.

mod memory;

pub use memory::MemoryHost;

use crate::{Node, Result};
use serde::Serialize;
use std::fmt;

/// Identifies a mounted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MountHandle(u64);

impl MountHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MountHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Events a host can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Click,
}

/// What happened while delivering an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    /// Number of element handlers called on the way from target to root
    pub handlers_invoked: usize,
}

/// A runtime that owns mounted trees.
pub trait Host {
    /// Attach a tree and return its handle.
    fn mount(&mut self, tree: Node) -> MountHandle;

    /// Detach a tree, returning it.
    fn unmount(&mut self, handle: MountHandle) -> Result<Node>;

    /// Deliver `event` to the root of a mounted tree.
    fn dispatch_event(&mut self, handle: MountHandle, event: Event) -> Result<DispatchOutcome>;
}
