//! Operation dispatch
//!
//! [`execute_operation`] is the single entry point: it matches exhaustively
//! over the closed [`Operation`] enum and delegates to the per-kind executor.
//! Executors are pure with respect to store state; they read through the
//! [`ResourceReader`] and return an [`OperationDelta`] for the store to apply
//! atomically.

mod common;
mod data_psm;
mod pim;

use crate::error::OperationError;
use crate::operation::Operation;
use crate::result::OperationDelta;
use modelgraph_core::storage::{IriGenerator, ResourceReader};

/// Execute one operation against the current store state.
pub async fn execute_operation(
    op: &Operation,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> Result<OperationDelta, OperationError> {
    tracing::debug!(operation = op.wire_type(), "executing operation");
    match op {
        Operation::DataPsmCreateSchema(op) => data_psm::create_schema(op, reader, ids).await,
        Operation::DataPsmCreateClass(op) => data_psm::create_class(op, reader, ids).await,
        Operation::DataPsmCreateAttribute(op) => data_psm::create_attribute(op, reader, ids).await,
        Operation::DataPsmCreateAssociationEnd(op) => {
            data_psm::create_association_end(op, reader, ids).await
        }
        Operation::DataPsmCreateClassReference(op) => {
            data_psm::create_class_reference(op, reader, ids).await
        }
        Operation::DataPsmCreateInclude(op) => data_psm::create_include(op, reader, ids).await,
        Operation::DataPsmCreateOr(op) => data_psm::create_or(op, reader, ids).await,
        Operation::DataPsmSetHumanLabel(op) => data_psm::set_human_label(op, reader).await,
        Operation::DataPsmSetHumanDescription(op) => {
            data_psm::set_human_description(op, reader).await
        }
        Operation::DataPsmSetTechnicalLabel(op) => data_psm::set_technical_label(op, reader).await,
        Operation::DataPsmSetDatatype(op) => data_psm::set_datatype(op, reader).await,
        Operation::DataPsmSetCardinality(op) => data_psm::set_cardinality(op, reader).await,
        Operation::DataPsmSetRegex(op) => data_psm::set_regex(op, reader).await,
        Operation::DataPsmSetExample(op) => data_psm::set_example(op, reader).await,
        Operation::DataPsmSetRoots(op) => data_psm::set_roots(op, reader).await,
        Operation::DataPsmSetOrder(op) => data_psm::set_order(op, reader).await,
        Operation::DataPsmSetExtends(op) => data_psm::set_extends(op, reader).await,
        Operation::DataPsmAddChoice(op) => data_psm::add_choice(op, reader).await,
        Operation::DataPsmRemoveChoice(op) => data_psm::remove_choice(op, reader).await,
        Operation::DataPsmDeleteClass(op) => data_psm::delete_class(op, reader).await,
        Operation::DataPsmDeleteAttribute(op) => data_psm::delete_attribute(op, reader).await,
        Operation::DataPsmDeleteAssociationEnd(op) => {
            data_psm::delete_association_end(op, reader).await
        }
        Operation::DataPsmDeleteInclude(op) => data_psm::delete_include(op, reader).await,
        Operation::DataPsmDeleteOr(op) => data_psm::delete_or(op, reader).await,
        Operation::PimCreateSchema(op) => pim::create_schema(op, reader, ids).await,
        Operation::PimCreateClass(op) => pim::create_class(op, reader, ids).await,
        Operation::PimCreateAttribute(op) => pim::create_attribute(op, reader, ids).await,
        Operation::PimSetDatatype(op) => pim::set_datatype(op, reader).await,
        Operation::PimSetHumanLabel(op) => pim::set_human_label(op, reader).await,
        Operation::PimSetCodelist(op) => pim::set_codelist(op, reader).await,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MapReader;
    use super::*;
    use crate::operation::*;
    use modelgraph_core::data_psm::{DataPsmAttribute, DataPsmClass, DataPsmSchema};
    use modelgraph_core::pim::{PimAttribute, PimClass, PimSchema};
    use modelgraph_core::storage::SequentialIriGenerator;
    use modelgraph_core::{LanguageString, Resource, ResourceContent};
    use pretty_assertions::assert_eq;

    const SCHEMA: &str = "http://example.com/schema";
    const CLASS: &str = "http://example.com/class";
    const ATTRIBUTE: &str = "http://example.com/attribute";

    fn lang(text: &str) -> Option<LanguageString> {
        let mut map = LanguageString::new();
        map.insert("en".to_string(), text.to_string());
        Some(map)
    }

    fn schema_with(roots: &[&str], parts: &[&str]) -> Resource {
        Resource::new(
            SCHEMA,
            ResourceContent::DataPsmSchema(DataPsmSchema {
                roots: roots.iter().map(|s| s.to_string()).collect(),
                parts: parts.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }),
        )
    }

    fn class_with(parts: &[&str]) -> Resource {
        Resource::new(
            CLASS,
            ResourceContent::DataPsmClass(DataPsmClass {
                parts: parts.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }),
        )
    }

    fn generator() -> SequentialIriGenerator {
        SequentialIriGenerator::new("http://example.com/generated/")
    }

    #[tokio::test]
    async fn test_create_class_registers_in_schema() {
        let reader = MapReader::new([schema_with(&[], &[])]);
        let op = Operation::from(DataPsmCreateClass {
            technical_label: Some("person".to_string()),
            ..Default::default()
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        let created = delta.created_iris();
        assert_eq!(created, vec!["http://example.com/generated/1".to_string()]);
        let schema = &delta.changed[SCHEMA];
        assert_eq!(schema.as_data_psm_schema().unwrap().parts, created);
        assert!(delta.deleted.is_empty());
    }

    #[tokio::test]
    async fn test_create_attribute_appends_to_owner_and_schema() {
        let reader = MapReader::new([schema_with(&[], &[CLASS]), class_with(&["existing"])]);
        let op = Operation::from(DataPsmCreateAttribute {
            owner: CLASS.to_string(),
            datatype: Some("xsd:string".to_string()),
            ..Default::default()
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        let attribute_iri = delta.created_iris()[0].clone();
        let owner = delta.changed[CLASS].as_data_psm_class().unwrap();
        assert_eq!(owner.parts, vec!["existing".to_string(), attribute_iri.clone()]);
        let schema = delta.changed[SCHEMA].as_data_psm_schema().unwrap();
        assert_eq!(schema.parts, vec![CLASS.to_string(), attribute_iri]);
    }

    #[tokio::test]
    async fn test_set_human_description_touches_only_the_class() {
        let reader = MapReader::new([schema_with(&[], &[CLASS]), class_with(&[])]);
        let op = Operation::from(DataPsmSetHumanDescription {
            resource: CLASS.to_string(),
            human_description: lang("A person."),
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        assert!(delta.created.is_empty());
        assert!(delta.deleted.is_empty());
        assert_eq!(
            delta.changed.keys().map(String::as_str).collect::<Vec<_>>(),
            vec![CLASS]
        );
        assert_eq!(
            delta.changed[CLASS]
                .as_data_psm_class()
                .unwrap()
                .human_description,
            lang("A person.")
        );
    }

    #[tokio::test]
    async fn test_set_roots_leaves_parts_untouched() {
        let reader = MapReader::new([schema_with(&[], &[CLASS, "other"]), class_with(&[])]);
        let op = Operation::from(DataPsmSetRoots {
            roots: vec![CLASS.to_string()],
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        let schema = delta.changed[SCHEMA].as_data_psm_schema().unwrap();
        assert_eq!(schema.roots, vec![CLASS.to_string()]);
        assert_eq!(schema.parts, vec![CLASS.to_string(), "other".to_string()]);
    }

    #[tokio::test]
    async fn test_set_roots_rejects_attribute() {
        let attribute = Resource::new(
            ATTRIBUTE,
            ResourceContent::DataPsmAttribute(DataPsmAttribute::default()),
        );
        let reader = MapReader::new([schema_with(&[], &[ATTRIBUTE]), attribute]);
        let op = Operation::from(DataPsmSetRoots {
            roots: vec![ATTRIBUTE.to_string()],
        });

        let result = execute_operation(&op, &reader, &generator()).await;
        assert!(matches!(result, Err(OperationError::InvalidType { .. })));
    }

    #[tokio::test]
    async fn test_set_order_moves_to_front() {
        let reader = MapReader::new([schema_with(&[], &[CLASS]), class_with(&["a", "b", "c"])]);
        let op = Operation::from(DataPsmSetOrder {
            owner: CLASS.to_string(),
            resource: "c".to_string(),
            move_after: None,
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        assert_eq!(
            delta.changed[CLASS].as_data_psm_class().unwrap().parts,
            vec!["c".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[tokio::test]
    async fn test_set_order_moves_after_sibling() {
        let reader = MapReader::new([schema_with(&[], &[CLASS]), class_with(&["a", "b", "c"])]);
        let op = Operation::from(DataPsmSetOrder {
            owner: CLASS.to_string(),
            resource: "a".to_string(),
            move_after: Some("c".to_string()),
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        assert_eq!(
            delta.changed[CLASS].as_data_psm_class().unwrap().parts,
            vec!["b".to_string(), "c".to_string(), "a".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_class_rejects_schema_root() {
        let reader = MapReader::new([schema_with(&[CLASS], &[CLASS]), class_with(&[])]);
        let op = Operation::from(DataPsmDeleteClass {
            class: CLASS.to_string(),
        });

        let result = execute_operation(&op, &reader, &generator()).await;
        assert!(matches!(result, Err(OperationError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_delete_attribute_unregisters_everywhere() {
        let attribute = Resource::new(
            ATTRIBUTE,
            ResourceContent::DataPsmAttribute(DataPsmAttribute::default()),
        );
        let reader = MapReader::new([
            schema_with(&[], &[CLASS, ATTRIBUTE]),
            class_with(&[ATTRIBUTE]),
            attribute,
        ]);
        let op = Operation::from(DataPsmDeleteAttribute {
            owner: CLASS.to_string(),
            attribute: ATTRIBUTE.to_string(),
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        assert!(delta.deleted.contains(ATTRIBUTE));
        assert!(delta.changed[CLASS].as_data_psm_class().unwrap().parts.is_empty());
        assert_eq!(
            delta.changed[SCHEMA].as_data_psm_schema().unwrap().parts,
            vec![CLASS.to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_target_reports_not_found() {
        let reader = MapReader::new([schema_with(&[], &[])]);
        let op = Operation::from(DataPsmSetTechnicalLabel {
            resource: "http://example.com/nowhere".to_string(),
            technical_label: Some("x".to_string()),
        });

        let result = execute_operation(&op, &reader, &generator()).await;
        assert!(matches!(result, Err(OperationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_pim_set_datatype_touches_only_the_attribute() {
        let pim_schema = Resource::new(
            "http://example.com/pim-schema",
            ResourceContent::PimSchema(PimSchema {
                parts: vec!["http://example.com/pim-attr".to_string()],
                ..Default::default()
            }),
        );
        let pim_attribute = Resource::new(
            "http://example.com/pim-attr",
            ResourceContent::PimAttribute(PimAttribute {
                datatype: Some("xsd:string".to_string()),
                ..Default::default()
            }),
        );
        let reader = MapReader::new([pim_schema, pim_attribute]);
        let op = Operation::from(PimSetDatatype {
            attribute: "http://example.com/pim-attr".to_string(),
            datatype: Some("xsd:integer".to_string()),
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        assert!(delta.created.is_empty());
        assert!(delta.deleted.is_empty());
        assert_eq!(
            delta.changed.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["http://example.com/pim-attr"]
        );
        assert_eq!(
            delta.changed["http://example.com/pim-attr"]
                .as_pim_attribute()
                .unwrap()
                .datatype,
            Some("xsd:integer".to_string())
        );
    }

    #[tokio::test]
    async fn test_pim_create_attribute_records_owner() {
        let pim_schema = Resource::new(
            "http://example.com/pim-schema",
            ResourceContent::PimSchema(PimSchema::default()),
        );
        let pim_class = Resource::new(
            "http://example.com/pim-class",
            ResourceContent::PimClass(PimClass::default()),
        );
        let reader = MapReader::new([pim_schema, pim_class]);
        let op = Operation::from(PimCreateAttribute {
            owner_class: "http://example.com/pim-class".to_string(),
            datatype: Some("xsd:string".to_string()),
            cardinality_min: Some(1),
            cardinality_max: Some(1),
        });

        let delta = execute_operation(&op, &reader, &generator()).await.unwrap();

        let attribute = delta.created.values().next().unwrap();
        let view = attribute.as_pim_attribute().unwrap();
        assert_eq!(view.owner_class, Some("http://example.com/pim-class".to_string()));
        assert_eq!(view.cardinality_min, Some(1));
    }

    #[tokio::test]
    async fn test_second_schema_rejected() {
        let reader = MapReader::new([schema_with(&[], &[])]);
        let op = Operation::from(DataPsmCreateSchema::default());

        let result = execute_operation(&op, &reader, &generator()).await;
        assert!(matches!(result, Err(OperationError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_create_schema_propagates_reader_failure() {
        let op = Operation::from(DataPsmCreateSchema::default());
        let result = execute_operation(&op, &super::testing::FailingReader, &generator()).await;
        assert!(matches!(result, Err(OperationError::Read(_))));

        let op = Operation::from(PimCreateSchema::default());
        let result = execute_operation(&op, &super::testing::FailingReader, &generator()).await;
        assert!(matches!(result, Err(OperationError::Read(_))));
    }
}
