//! Trait seams between the resource model and the stores that hold it
//!
//! Executors and the structure builder only ever see these traits, never a
//! concrete store - reads may be backed by memory, disk, or the network, so
//! the seam is async even though the in-memory implementations resolve
//! immediately.

use crate::error::Result;
use crate::resource::Resource;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Read-only access to a resource map.
#[async_trait]
pub trait ResourceReader: Send + Sync {
    /// Read a resource by IRI.
    ///
    /// A missing IRI is `Ok(None)`, never an error.
    async fn read_resource(&self, iri: &str) -> Result<Option<Resource>>;

    /// List the IRIs of every resource held by this reader.
    async fn list_resources(&self) -> Result<Vec<String>>;
}

/// Capability handed to create-executors for minting new IRIs.
///
/// Generated IRIs must be unique for the lifetime of the owning store;
/// a collision on merge is a programming-invariant violation, not a domain
/// error.
pub trait IriGenerator: Send + Sync {
    /// Mint the next IRI
    fn next_iri(&self) -> String;
}

/// Deterministic generator: `<prefix><counter>`.
///
/// Determinism keeps operation logs replayable and tests stable; uniqueness
/// within one store is all the contract asks for.
#[derive(Debug)]
pub struct SequentialIriGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIriGenerator {
    /// Create a generator minting `<prefix>1`, `<prefix>2`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_after(prefix, 0)
    }

    /// Create a generator whose next IRI is `<prefix>{last + 1}`.
    ///
    /// Used when resuming from a snapshot so fresh IRIs never collide with
    /// restored ones.
    pub fn starting_after(prefix: impl Into<String>, last: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(last),
        }
    }

    /// The prefix this generator mints under
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl IriGenerator for SequentialIriGenerator {
    fn next_iri(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_generator() {
        let ids = SequentialIriGenerator::new("http://example.com/resource/");
        assert_eq!(ids.next_iri(), "http://example.com/resource/1");
        assert_eq!(ids.next_iri(), "http://example.com/resource/2");
        assert_eq!(ids.next_iri(), "http://example.com/resource/3");
    }
}
