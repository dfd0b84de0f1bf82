//! End-to-end derivation across federated sub-stores

use modelgraph_compose::{
    ComplexOperation, CreateDetailedAttribute, CreateRootClass, InitializeSchema,
    ReferenceExternalClass,
};
use modelgraph_federation::FederatedStore;
use modelgraph_ops::operation::DataPsmSetRoots;
use modelgraph_structure::{build_structure_model, StructureType};
use pretty_assertions::assert_eq;

async fn schema(federation: &FederatedStore, prefix: &str) -> String {
    InitializeSchema {
        iri_prefix: prefix.to_string(),
        ..Default::default()
    }
    .execute(federation)
    .await
    .unwrap()
}

#[tokio::test]
async fn test_structure_model_follows_references_across_stores() {
    let federation = FederatedStore::new();
    let local = schema(&federation, "http://example.com/local/").await;
    let remote = schema(&federation, "http://example.com/remote/").await;

    // The remote store owns the address class and its attribute.
    let address = CreateRootClass {
        schema: remote.clone(),
        technical_label: Some("address".to_string()),
        ..Default::default()
    }
    .execute(&federation)
    .await
    .unwrap();
    CreateDetailedAttribute {
        schema: remote.clone(),
        owner: address.clone(),
        technical_label: Some("postal_code".to_string()),
        datatype: Some("xsd:string".to_string()),
        ..Default::default()
    }
    .execute(&federation)
    .await
    .unwrap();

    // The local schema's only root is a reference to the remote class.
    let reference = ReferenceExternalClass {
        schema: local.clone(),
        specification: remote.clone(),
        class: address.clone(),
    }
    .execute(&federation)
    .await
    .unwrap();
    federation
        .apply_operation(&local, &DataPsmSetRoots { roots: vec![reference] }.into())
        .await
        .unwrap();

    // Built through the federated reader, the remote class resolves and
    // carries its origin specification.
    let model = build_structure_model(&local, &federation).await.unwrap();
    assert_eq!(model.roots.len(), 1);
    let root = model.class(model.roots[0]);
    assert_eq!(root.iri, address);
    assert_eq!(root.specification, Some(remote));
    assert_eq!(root.properties.len(), 1);
    assert_eq!(
        root.properties[0].technical_label,
        Some("postal_code".to_string())
    );
    assert!(matches!(
        root.properties[0].types[0],
        StructureType::Primitive(_)
    ));
}

#[tokio::test]
async fn test_single_store_reader_cannot_see_across() {
    use modelgraph_core::data_psm::{DataPsmClassReference, DataPsmSchema};
    use modelgraph_core::{Resource, ResourceContent};
    use modelgraph_store::MemoryResourceStore;

    // A lone sub-store holding a reference whose target lives elsewhere.
    let store = MemoryResourceStore::new("http://example.com/local/");
    store.insert_resource(Resource::new(
        "http://example.com/local/schema",
        ResourceContent::DataPsmSchema(DataPsmSchema {
            roots: vec!["http://example.com/local/reference".to_string()],
            parts: vec!["http://example.com/local/reference".to_string()],
            ..Default::default()
        }),
    ));
    store.insert_resource(Resource::new(
        "http://example.com/local/reference",
        ResourceContent::DataPsmClassReference(DataPsmClassReference {
            specification: Some("http://example.com/remote/schema".to_string()),
            class: Some("http://example.com/remote/address".to_string()),
            ..Default::default()
        }),
    ));

    let result = build_structure_model("http://example.com/local/schema", &store).await;
    assert!(result.is_err());
}
