//! In-memory operation-sourced store

use crate::error::Result;
use crate::writer::ResourceWriter;
use async_trait::async_trait;
use modelgraph_core::{Resource, ResourceReader, SequentialIriGenerator};
use modelgraph_ops::{execute_operation, Operation, OperationDelta};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One applied operation in the store's history.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Position in the log, starting at 1
    pub seq: u64,
    pub operation: Operation,
}

/// Serializable store state: the resource map plus the operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub resources: Vec<Value>,
    pub operations: Vec<Operation>,
}

/// Resource store backed by a plain map.
///
/// Reads clone; the lock is never held across an await point. Writes go
/// through [`ResourceWriter::apply_operation`], which applies the executor's
/// delta under one write lock so a reader never observes a half-applied
/// operation.
pub struct MemoryResourceStore {
    ids: SequentialIriGenerator,
    resources: RwLock<HashMap<String, Resource>>,
    log: RwLock<Vec<LogEntry>>,
}

impl MemoryResourceStore {
    /// Create an empty store minting IRIs under the given prefix
    pub fn new(iri_prefix: impl Into<String>) -> Self {
        Self {
            ids: SequentialIriGenerator::new(iri_prefix),
            resources: RwLock::new(HashMap::new()),
            log: RwLock::new(Vec::new()),
        }
    }

    /// Seed a resource without going through an operation.
    ///
    /// Panics if the IRI is already taken; IRIs are never reused, so a
    /// collision is a programming error rather than a recoverable failure.
    pub fn insert_resource(&self, resource: Resource) {
        let mut resources = self.resources.write();
        assert!(
            !resources.contains_key(&resource.iri),
            "IRI collision: {} already exists",
            resource.iri
        );
        resources.insert(resource.iri.clone(), resource);
    }

    /// The applied-operation history, oldest first
    pub fn log(&self) -> Vec<LogEntry> {
        self.log.read().clone()
    }

    /// Serialize the full store state
    pub fn snapshot(&self) -> Result<StoreSnapshot> {
        let resources = self.resources.read();
        let mut iris: Vec<&String> = resources.keys().collect();
        iris.sort();
        let resources = iris
            .into_iter()
            .map(|iri| resources[iri].to_json())
            .collect::<modelgraph_core::Result<Vec<Value>>>()?;
        let operations = self
            .log
            .read()
            .iter()
            .map(|entry| entry.operation.clone())
            .collect();
        Ok(StoreSnapshot {
            resources,
            operations,
        })
    }

    /// Rebuild a store from a snapshot.
    ///
    /// The IRI generator resumes past the highest numeric suffix found under
    /// its prefix, so freshly minted IRIs never collide with restored ones.
    pub fn from_snapshot(iri_prefix: impl Into<String>, snapshot: StoreSnapshot) -> Result<Self> {
        let iri_prefix = iri_prefix.into();
        let mut resources = HashMap::new();
        let mut last = 0u64;
        for value in snapshot.resources {
            let resource = Resource::from_json(value)?;
            if let Some(suffix) = resource.iri.strip_prefix(&iri_prefix) {
                if let Ok(n) = suffix.parse::<u64>() {
                    last = last.max(n);
                }
            }
            resources.insert(resource.iri.clone(), resource);
        }
        let log = snapshot
            .operations
            .into_iter()
            .enumerate()
            .map(|(index, operation)| LogEntry {
                seq: index as u64 + 1,
                operation,
            })
            .collect();
        Ok(Self {
            ids: SequentialIriGenerator::starting_after(iri_prefix, last),
            resources: RwLock::new(resources),
            log: RwLock::new(log),
        })
    }

    fn apply_delta(&self, operation: &Operation, delta: &OperationDelta) {
        let mut resources = self.resources.write();
        for (iri, resource) in &delta.created {
            assert!(
                !resources.contains_key(iri),
                "IRI collision: {iri} already exists"
            );
            resources.insert(iri.clone(), resource.clone());
        }
        for (iri, resource) in &delta.changed {
            resources.insert(iri.clone(), resource.clone());
        }
        for iri in &delta.deleted {
            resources.remove(iri);
        }
        drop(resources);

        let mut log = self.log.write();
        let seq = log.len() as u64 + 1;
        tracing::debug!(
            seq,
            operation = operation.wire_type(),
            created = delta.created.len(),
            changed = delta.changed.len(),
            deleted = delta.deleted.len(),
            "applied operation"
        );
        log.push(LogEntry {
            seq,
            operation: operation.clone(),
        });
    }
}

#[async_trait]
impl ResourceReader for MemoryResourceStore {
    async fn read_resource(&self, iri: &str) -> modelgraph_core::Result<Option<Resource>> {
        Ok(self.resources.read().get(iri).cloned())
    }

    async fn list_resources(&self) -> modelgraph_core::Result<Vec<String>> {
        let mut iris: Vec<String> = self.resources.read().keys().cloned().collect();
        iris.sort();
        Ok(iris)
    }
}

#[async_trait]
impl ResourceWriter for MemoryResourceStore {
    async fn apply_operation(&self, op: &Operation) -> Result<OperationDelta> {
        let delta = execute_operation(op, self, &self.ids).await?;
        self.apply_delta(op, &delta);
        Ok(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use modelgraph_core::data_psm::DataPsmClass;
    use modelgraph_core::ResourceContent;
    use modelgraph_ops::operation::{
        DataPsmCreateClass, DataPsmCreateSchema, DataPsmSetRoots, DataPsmSetTechnicalLabel,
    };
    use modelgraph_ops::OperationParseError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PREFIX: &str = "http://example.com/store/";

    async fn store_with_schema() -> MemoryResourceStore {
        let store = MemoryResourceStore::new(PREFIX);
        store
            .apply_operation(&DataPsmCreateSchema::default().into())
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_apply_and_read_back() {
        let store = store_with_schema().await;
        let delta = store
            .apply_operation(
                &DataPsmCreateClass {
                    technical_label: Some("person".to_string()),
                    ..Default::default()
                }
                .into(),
            )
            .await
            .unwrap();

        let class_iri = &delta.created_iris()[0];
        let class = store.read_resource(class_iri).await.unwrap().unwrap();
        assert_eq!(
            class.as_data_psm_class().unwrap().technical_label,
            Some("person".to_string())
        );

        let schema = store
            .read_resource(&format!("{PREFIX}1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            schema.as_data_psm_schema().unwrap().parts,
            vec![class_iri.clone()]
        );
    }

    #[tokio::test]
    async fn test_failed_operation_leaves_state_untouched() {
        let store = store_with_schema().await;
        let before = store.snapshot().unwrap();

        let result = store
            .apply_operation(
                &DataPsmSetRoots {
                    roots: vec!["http://example.com/nowhere".to_string()],
                }
                .into(),
            )
            .await;
        assert!(matches!(result, Err(StoreError::Operation(_))));

        let after = store.snapshot().unwrap();
        assert_eq!(after.resources, before.resources);
        assert_eq!(store.log().len(), 1);
    }

    #[tokio::test]
    async fn test_log_records_applied_operations_in_order() {
        let store = store_with_schema().await;
        store
            .apply_operation(&DataPsmCreateClass::default().into())
            .await
            .unwrap();

        let log = store.log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].seq, 1);
        assert_eq!(log[1].seq, 2);
        assert_eq!(log[1].operation.wire_type(), "data-psm-action-create-class");
    }

    #[tokio::test]
    async fn test_apply_json_rejects_unknown_operation() {
        let store = store_with_schema().await;
        let result = store
            .apply_json(json!({"types": ["vendor-action-frobnicate"]}))
            .await;
        assert!(matches!(
            result,
            Err(StoreError::Parse(OperationParseError::UnknownOperation(_)))
        ));
        assert_eq!(store.log().len(), 1);
    }

    #[tokio::test]
    async fn test_apply_json_applies_known_operation() {
        let store = store_with_schema().await;
        let class_delta = store
            .apply_operation(&DataPsmCreateClass::default().into())
            .await
            .unwrap();
        let class_iri = class_delta.created_iris()[0].clone();

        store
            .apply_json(json!({
                "types": ["data-psm-action-set-technical-label"],
                "dataPsmResource": class_iri,
                "dataPsmTechnicalLabel": "person",
            }))
            .await
            .unwrap();

        let class = store.read_resource(&class_iri).await.unwrap().unwrap();
        assert_eq!(
            class.as_data_psm_class().unwrap().technical_label,
            Some("person".to_string())
        );
        assert_eq!(
            store.log().last().unwrap().operation,
            DataPsmSetTechnicalLabel {
                resource: class_iri,
                technical_label: Some("person".to_string()),
            }
            .into()
        );
    }

    #[tokio::test]
    async fn test_snapshot_round_trip_resumes_iri_generation() {
        let store = store_with_schema().await;
        store
            .apply_operation(&DataPsmCreateClass::default().into())
            .await
            .unwrap();

        let restored =
            MemoryResourceStore::from_snapshot(PREFIX, store.snapshot().unwrap()).unwrap();
        assert_eq!(
            restored.list_resources().await.unwrap(),
            store.list_resources().await.unwrap()
        );
        assert_eq!(restored.log(), store.log());

        let delta = restored
            .apply_operation(&DataPsmCreateClass::default().into())
            .await
            .unwrap();
        assert_eq!(delta.created_iris(), vec![format!("{PREFIX}3")]);
    }

    #[test]
    #[should_panic(expected = "IRI collision")]
    fn test_seeding_a_taken_iri_panics() {
        let store = MemoryResourceStore::new(PREFIX);
        let class = Resource::new(
            "http://example.com/class",
            ResourceContent::DataPsmClass(DataPsmClass::default()),
        );
        store.insert_resource(class.clone());
        store.insert_resource(class);
    }
}
