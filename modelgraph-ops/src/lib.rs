//! # modelgraph-ops
//!
//! Mutation operations and their executors.
//!
//! Every mutation of the resource graph is an immutable [`Operation`] value.
//! An executor is a pure async function
//! `(reader, id generator, operation) -> OperationDelta` producing the minimal
//! created/changed/deleted sets; it never mutates store state itself and it
//! reports expected domain errors ([`OperationError`]) as values.
//!
//! The operation kinds form a closed enum dispatched through one exhaustive
//! match in [`execute_operation`], so adding a kind without an executor is a
//! compile error. "Unknown operation" exists only at the wire boundary, where
//! [`Operation::from_json`] rejects unrecognized tags.

pub mod error;
pub mod executor;
pub mod operation;
pub mod result;

pub use error::{OperationError, OperationParseError};
pub use executor::execute_operation;
pub use operation::Operation;
pub use result::OperationDelta;
