//! The write seam over resource stores

use crate::error::Result;
use async_trait::async_trait;
use modelgraph_core::ResourceReader;
use modelgraph_ops::{Operation, OperationDelta};
use serde_json::Value;

/// A store that accepts operations.
///
/// Implementations apply each operation atomically: either the whole delta
/// lands and the operation is appended to the log, or the store is left
/// untouched and the failure is reported as a value.
#[async_trait]
pub trait ResourceWriter: ResourceReader {
    /// Execute one typed operation and apply its delta
    async fn apply_operation(&self, op: &Operation) -> Result<OperationDelta>;

    /// Parse a wire-form operation and apply it.
    ///
    /// This is where an unrecognized operation tag surfaces; typed callers
    /// never construct one because [`Operation`] is a closed enum.
    async fn apply_json(&self, op: Value) -> Result<OperationDelta> {
        let op = Operation::from_json(op)?;
        self.apply_operation(&op).await
    }
}
