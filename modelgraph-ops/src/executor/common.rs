//! Shared executor helpers

use crate::error::OperationError;
use modelgraph_core::storage::ResourceReader;
use modelgraph_core::{vocab, Resource};

/// Read a resource, turning absence into a domain error.
pub(super) async fn require(
    reader: &dyn ResourceReader,
    iri: &str,
) -> Result<Resource, OperationError> {
    reader
        .read_resource(iri)
        .await?
        .ok_or_else(|| OperationError::not_found(iri))
}

/// Look for the single structural schema resource of the store.
///
/// Operations do not carry a schema IRI; each sub-store holds exactly one
/// schema and the executor resolves it by scanning the resource list. A
/// reader failure propagates; only a completed scan reports absence.
pub(super) async fn try_find_data_psm_schema(
    reader: &dyn ResourceReader,
) -> Result<Option<Resource>, OperationError> {
    for iri in reader.list_resources().await? {
        if let Some(resource) = reader.read_resource(&iri).await? {
            if resource.is_data_psm_schema() {
                return Ok(Some(resource));
            }
        }
    }
    Ok(None)
}

/// Locate the structural schema, treating absence as a constraint violation.
pub(super) async fn find_data_psm_schema(
    reader: &dyn ResourceReader,
) -> Result<Resource, OperationError> {
    try_find_data_psm_schema(reader)
        .await?
        .ok_or_else(|| OperationError::constraint("store has no schema"))
}

/// Look for the single conceptual schema resource of the store.
pub(super) async fn try_find_pim_schema(
    reader: &dyn ResourceReader,
) -> Result<Option<Resource>, OperationError> {
    for iri in reader.list_resources().await? {
        if let Some(resource) = reader.read_resource(&iri).await? {
            if resource.is_pim_schema() {
                return Ok(Some(resource));
            }
        }
    }
    Ok(None)
}

/// Locate the conceptual schema, treating absence as a constraint violation.
pub(super) async fn find_pim_schema(
    reader: &dyn ResourceReader,
) -> Result<Resource, OperationError> {
    try_find_pim_schema(reader)
        .await?
        .ok_or_else(|| OperationError::constraint("store has no schema"))
}

/// Remove the first occurrence of `iri`, keeping sibling order.
pub(super) fn remove_stable(list: &mut Vec<String>, iri: &str) -> bool {
    match list.iter().position(|entry| entry == iri) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// Whether a resource may stand as a schema root or association target.
pub(super) fn is_root_candidate(resource: &Resource) -> bool {
    resource.has_type(vocab::data_psm::CLASS)
        || resource.has_type(vocab::data_psm::CLASS_REFERENCE)
        || resource.has_type(vocab::data_psm::OR)
}
