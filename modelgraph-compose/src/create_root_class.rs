//! Create a class and append it to the schema roots

use crate::error::{ComplexError, Result};
use crate::normalize::{normalize_language_string, normalize_string};
use crate::operation::ComplexOperation;
use async_trait::async_trait;
use modelgraph_core::LanguageString;
use modelgraph_federation::FederatedStore;
use modelgraph_ops::operation::{DataPsmCreateClass, DataPsmSetHumanLabel, DataPsmSetRoots};

/// Create a class in a schema's sub-store and make it a root.
///
/// Existing roots are kept; the new class is appended.
#[derive(Debug, Clone, Default)]
pub struct CreateRootClass {
    /// Schema whose sub-store receives the class
    pub schema: String,
    pub interpretation: Option<String>,
    pub technical_label: Option<String>,
    pub human_label: Option<LanguageString>,
}

#[async_trait]
impl ComplexOperation for CreateRootClass {
    /// IRI of the created class
    type Output = String;

    async fn execute(&self, federation: &FederatedStore) -> Result<String> {
        let mut completed = 0;

        let create = DataPsmCreateClass {
            interpretation: normalize_string(self.interpretation.clone()),
            technical_label: normalize_string(self.technical_label.clone()),
        };
        let delta = federation
            .apply_operation(&self.schema, &create.into())
            .await
            .map_err(|source| ComplexError::after(completed, source))?;
        completed += 1;
        let class_iri = delta.created_iris().remove(0);

        if let Some(label) = normalize_language_string(self.human_label.clone()) {
            federation
                .apply_operation(
                    &self.schema,
                    &DataPsmSetHumanLabel {
                        resource: class_iri.clone(),
                        human_label: Some(label),
                    }
                    .into(),
                )
                .await
                .map_err(|source| ComplexError::after(completed, source))?;
            completed += 1;
        }

        let schema = federation
            .require_resource(&self.schema)
            .await
            .map_err(|source| ComplexError::after(completed, source))?;
        let mut roots = schema
            .as_data_psm_schema()
            .ok_or_else(|| {
                ComplexError::precondition(format!("{} is not a schema", self.schema))
            })?
            .roots
            .clone();
        roots.push(class_iri.clone());
        federation
            .apply_operation(&self.schema, &DataPsmSetRoots { roots }.into())
            .await
            .map_err(|source| ComplexError::after(completed, source))?;

        Ok(class_iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialize_schema::InitializeSchema;
    use modelgraph_core::ResourceReader;
    use pretty_assertions::assert_eq;

    async fn demo_schema(federation: &FederatedStore) -> String {
        InitializeSchema {
            iri_prefix: "http://example.com/demo/".to_string(),
            ..Default::default()
        }
        .execute(federation)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_class_becomes_a_root() {
        let federation = FederatedStore::new();
        let schema_iri = demo_schema(&federation).await;

        let class_iri = CreateRootClass {
            schema: schema_iri.clone(),
            technical_label: Some("person".to_string()),
            ..Default::default()
        }
        .execute(&federation)
        .await
        .unwrap();

        let schema = federation.read_resource(&schema_iri).await.unwrap().unwrap();
        let view = schema.as_data_psm_schema().unwrap();
        assert_eq!(view.roots, vec![class_iri.clone()]);
        assert!(view.parts.contains(&class_iri));
    }

    #[tokio::test]
    async fn test_existing_roots_are_kept() {
        let federation = FederatedStore::new();
        let schema_iri = demo_schema(&federation).await;

        let first = CreateRootClass {
            schema: schema_iri.clone(),
            ..Default::default()
        }
        .execute(&federation)
        .await
        .unwrap();
        let second = CreateRootClass {
            schema: schema_iri.clone(),
            ..Default::default()
        }
        .execute(&federation)
        .await
        .unwrap();

        let schema = federation.read_resource(&schema_iri).await.unwrap().unwrap();
        assert_eq!(schema.as_data_psm_schema().unwrap().roots, vec![first, second]);
    }

    #[tokio::test]
    async fn test_unknown_schema_fails_before_any_state_change() {
        let federation = FederatedStore::new();
        let result = CreateRootClass {
            schema: "http://example.com/nowhere".to_string(),
            ..Default::default()
        }
        .execute(&federation)
        .await;
        assert!(matches!(result, Err(ComplexError::Failed(_))));
    }
}
