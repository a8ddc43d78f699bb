//! Vertex identity.
//!
//! Every vertex receives exactly one identifier, at the moment it is added to a graph. By
//! default identifiers come from a process-wide counter that starts at `0` and only ever moves
//! forward, so two vertices built anywhere in the same process never collide even when they
//! live in different graphs. Graphs can also be given their own [`IdAllocator`], which keeps
//! identifiers stable for snapshot-style tests.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a vertex. Rendered in markup as `node<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

impl VertexId {
    pub fn get(self) -> u64 {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

/// Monotonic identifier counter.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Returns the current value and advances the counter by one.
    pub fn next_id(&self) -> VertexId {
        VertexId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The value the next call to [`IdAllocator::next_id`] will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

static GLOBAL_IDS: IdAllocator = IdAllocator::new();

/// The process-wide allocator used by [`crate::RefinementGraph::new`].
pub fn global() -> &'static IdAllocator {
    &GLOBAL_IDS
}

/// Where a graph draws its identifiers from.
#[derive(Debug, Clone, Default)]
pub enum IdSource {
    #[default]
    Global,
    Shared(Arc<IdAllocator>),
}

impl IdSource {
    pub fn next_id(&self) -> VertexId {
        match self {
            IdSource::Global => GLOBAL_IDS.next_id(),
            IdSource::Shared(ids) => ids.next_id(),
        }
    }
}
