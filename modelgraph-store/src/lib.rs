//! # modelgraph-store
//!
//! Operation-sourced resource stores.
//!
//! A store holds a resource map plus the append-only log of every operation
//! that produced it. Mutation happens only through [`ResourceWriter::apply_operation`]:
//! the store runs the pure executor against its current state, then applies the
//! returned delta atomically. A failed operation leaves the store exactly as
//! it was.
//!
//! [`MemoryResourceStore`] is the in-memory implementation; other backends
//! plug in behind the same trait.

pub mod error;
pub mod memory;
pub mod writer;

pub use error::{Result, StoreError};
pub use memory::{LogEntry, MemoryResourceStore, StoreSnapshot};
pub use writer::ResourceWriter;
