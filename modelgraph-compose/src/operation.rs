//! The composite operation seam

use crate::error::Result;
use async_trait::async_trait;
use modelgraph_federation::FederatedStore;

/// A user-level intent executed as a sequence of primitive operations.
///
/// Composites receive the federation facade rather than a concrete store, so
/// one composite may touch several sub-stores.
#[async_trait]
pub trait ComplexOperation {
    /// What the composite hands back on success, typically the IRI of the
    /// resource it is about
    type Output;

    async fn execute(&self, federation: &FederatedStore) -> Result<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComplexError;
    use crate::initialize_schema::InitializeSchema;
    use modelgraph_core::ResourceReader;
    use modelgraph_ops::operation::{DataPsmCreateClass, DataPsmSetHumanLabel};

    /// Creates a class, then sets a label on an IRI that was never minted.
    struct ClassWithDanglingLabel {
        schema: String,
    }

    #[async_trait]
    impl ComplexOperation for ClassWithDanglingLabel {
        type Output = String;

        async fn execute(&self, federation: &FederatedStore) -> Result<String> {
            let delta = federation
                .apply_operation(&self.schema, &DataPsmCreateClass::default().into())
                .await
                .map_err(|source| ComplexError::after(0, source))?;
            let class_iri = delta.created_iris().remove(0);

            federation
                .apply_operation(
                    &self.schema,
                    &DataPsmSetHumanLabel {
                        resource: "http://example.com/missing".to_string(),
                        human_label: None,
                    }
                    .into(),
                )
                .await
                .map_err(|source| ComplexError::after(1, source))?;
            Ok(class_iri)
        }
    }

    #[tokio::test]
    async fn test_failed_second_step_keeps_the_first_and_is_partial() {
        let federation = FederatedStore::new();
        let schema = InitializeSchema {
            iri_prefix: "http://example.com/e/".to_string(),
            ..Default::default()
        }
        .execute(&federation)
        .await
        .unwrap();

        let result = ClassWithDanglingLabel {
            schema: schema.clone(),
        }
        .execute(&federation)
        .await;
        assert!(matches!(
            result,
            Err(ComplexError::PartialFailure { completed: 1, .. })
        ));

        // the class from the first step stays committed
        let schema_view = federation.read_resource(&schema).await.unwrap().unwrap();
        assert_eq!(schema_view.as_data_psm_schema().unwrap().parts.len(), 1);
    }
}
