//! Reference a class owned by another schema

use crate::error::{ComplexError, Result};
use crate::operation::ComplexOperation;
use async_trait::async_trait;
use modelgraph_federation::FederatedStore;
use modelgraph_ops::operation::DataPsmCreateClassReference;

/// Create a class reference in one schema pointing at a class owned by
/// another schema's sub-store.
///
/// The target is validated through the federation facade before the
/// reference primitive runs: it must exist, be a class, and actually belong
/// to the named specification. The primitive executor itself cannot see
/// across stores, so this composite is the only place such a reference is
/// checked.
#[derive(Debug, Clone, Default)]
pub struct ReferenceExternalClass {
    /// Schema receiving the reference
    pub schema: String,
    /// Schema that owns the referenced class
    pub specification: String,
    /// The referenced class IRI
    pub class: String,
}

#[async_trait]
impl ComplexOperation for ReferenceExternalClass {
    /// IRI of the created class reference
    type Output = String;

    async fn execute(&self, federation: &FederatedStore) -> Result<String> {
        let target = federation.require_resource(&self.class).await?;
        if !target.is_data_psm_class() {
            return Err(ComplexError::precondition(format!(
                "{} is not a class",
                self.class
            )));
        }
        match federation.schema_for_resource(&self.class) {
            Some(owner) if owner == self.specification => {}
            owner => {
                return Err(ComplexError::precondition(format!(
                    "{} is owned by {}, not by {}",
                    self.class,
                    owner.as_deref().unwrap_or("no store"),
                    self.specification
                )))
            }
        }

        let delta = federation
            .apply_operation(
                &self.schema,
                &DataPsmCreateClassReference {
                    specification: self.specification.clone(),
                    class: self.class.clone(),
                }
                .into(),
            )
            .await
            .map_err(ComplexError::Failed)?;
        Ok(delta.created_iris().remove(0))
    }
}
