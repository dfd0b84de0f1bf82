//! Replace a schema root with a choice over it

use crate::error::{ComplexError, Result};
use crate::operation::ComplexOperation;
use async_trait::async_trait;
use modelgraph_federation::FederatedStore;
use modelgraph_ops::operation::{DataPsmAddChoice, DataPsmCreateOr, DataPsmSetRoots};

/// Wrap an existing root class in a new or node.
///
/// The or takes the root's position in the root list, with the class as its
/// first choice, so further choices can be added without touching the roots
/// again.
#[derive(Debug, Clone, Default)]
pub struct WrapRootWithOr {
    pub schema: String,
    /// Root class to wrap; must currently be a root of the schema
    pub root: String,
}

#[async_trait]
impl ComplexOperation for WrapRootWithOr {
    /// IRI of the created or node
    type Output = String;

    async fn execute(&self, federation: &FederatedStore) -> Result<String> {
        let schema = federation.require_resource(&self.schema).await?;
        let roots = schema
            .as_data_psm_schema()
            .ok_or_else(|| ComplexError::precondition(format!("{} is not a schema", self.schema)))?
            .roots
            .clone();
        if !roots.iter().any(|root| root == &self.root) {
            return Err(ComplexError::precondition(format!(
                "{} is not a root of {}",
                self.root, self.schema
            )));
        }

        let mut completed = 0;
        let delta = federation
            .apply_operation(&self.schema, &DataPsmCreateOr {}.into())
            .await
            .map_err(|source| ComplexError::after(completed, source))?;
        completed += 1;
        let or_iri = delta.created_iris().remove(0);

        federation
            .apply_operation(
                &self.schema,
                &DataPsmAddChoice {
                    or: or_iri.clone(),
                    choice: self.root.clone(),
                }
                .into(),
            )
            .await
            .map_err(|source| ComplexError::after(completed, source))?;
        completed += 1;

        let roots = roots
            .into_iter()
            .map(|root| if root == self.root { or_iri.clone() } else { root })
            .collect();
        federation
            .apply_operation(&self.schema, &DataPsmSetRoots { roots }.into())
            .await
            .map_err(|source| ComplexError::after(completed, source))?;

        Ok(or_iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_root_class::CreateRootClass;
    use crate::initialize_schema::InitializeSchema;
    use modelgraph_core::ResourceReader;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_or_takes_the_root_position() {
        let federation = FederatedStore::new();
        let schema_iri = InitializeSchema {
            iri_prefix: "http://example.com/demo/".to_string(),
            ..Default::default()
        }
        .execute(&federation)
        .await
        .unwrap();
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

        let or_iri = WrapRootWithOr {
            schema: schema_iri.clone(),
            root: first.clone(),
        }
        .execute(&federation)
        .await
        .unwrap();

        let schema = federation.read_resource(&schema_iri).await.unwrap().unwrap();
        assert_eq!(
            schema.as_data_psm_schema().unwrap().roots,
            vec![or_iri.clone(), second]
        );

        let or = federation.read_resource(&or_iri).await.unwrap().unwrap();
        assert_eq!(or.as_data_psm_or().unwrap().choices, vec![first]);
    }

    #[tokio::test]
    async fn test_non_root_is_rejected_up_front() {
        let federation = FederatedStore::new();
        let schema_iri = InitializeSchema {
            iri_prefix: "http://example.com/demo/".to_string(),
            ..Default::default()
        }
        .execute(&federation)
        .await
        .unwrap();

        let result = WrapRootWithOr {
            schema: schema_iri,
            root: "http://example.com/not-a-root".to_string(),
        }
        .execute(&federation)
        .await;
        assert!(matches!(result, Err(ComplexError::Precondition(_))));
    }
}
