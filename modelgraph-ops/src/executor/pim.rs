//! Executors for conceptual (pim) operations

use crate::error::OperationError;
use crate::operation::*;
use crate::result::OperationDelta;
use modelgraph_core::pim::{PimAttribute, PimClass, PimSchema};
use modelgraph_core::storage::{IriGenerator, ResourceReader};
use modelgraph_core::{Resource, ResourceContent};

use super::common::{find_pim_schema, require, try_find_pim_schema};

type OpResult = Result<OperationDelta, OperationError>;

pub(super) async fn create_schema(
    op: &PimCreateSchema,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    if try_find_pim_schema(reader).await?.is_some() {
        return Err(OperationError::constraint("store already has a schema"));
    }
    let schema = Resource::new(
        ids.next_iri(),
        ResourceContent::PimSchema(PimSchema {
            human_label: op.human_label.clone(),
            human_description: op.human_description.clone(),
            ..Default::default()
        }),
    );
    Ok(OperationDelta::new().create(schema))
}

pub(super) async fn create_class(
    op: &PimCreateClass,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let mut schema = find_pim_schema(reader).await?;
    let class = Resource::new(
        ids.next_iri(),
        ResourceContent::PimClass(PimClass {
            interpretation: op.interpretation.clone(),
            human_label: op.human_label.clone(),
            ..Default::default()
        }),
    );
    schema
        .as_pim_schema_mut()
        .expect("located by type tag")
        .parts
        .push(class.iri.clone());
    Ok(OperationDelta::new().create(class).change(schema))
}

pub(super) async fn create_attribute(
    op: &PimCreateAttribute,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let owner = require(reader, &op.owner_class).await?;
    if !owner.is_pim_class() {
        return Err(OperationError::invalid_type(&op.owner_class, "pim-class"));
    }
    let mut schema = find_pim_schema(reader).await?;
    let attribute = Resource::new(
        ids.next_iri(),
        ResourceContent::PimAttribute(PimAttribute {
            owner_class: Some(op.owner_class.clone()),
            datatype: op.datatype.clone(),
            cardinality_min: op.cardinality_min,
            cardinality_max: op.cardinality_max,
            ..Default::default()
        }),
    );
    schema
        .as_pim_schema_mut()
        .expect("located by type tag")
        .parts
        .push(attribute.iri.clone());
    Ok(OperationDelta::new().create(attribute).change(schema))
}

pub(super) async fn set_datatype(op: &PimSetDatatype, reader: &dyn ResourceReader) -> OpResult {
    let mut resource = require(reader, &op.attribute).await?;
    resource
        .as_pim_attribute_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.attribute, "pim-attribute"))?
        .datatype = op.datatype.clone();
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_human_label(op: &PimSetHumanLabel, reader: &dyn ResourceReader) -> OpResult {
    let mut resource = require(reader, &op.resource).await?;
    let label = op.human_label.clone();
    match &mut resource.content {
        ResourceContent::PimSchema(schema) => schema.human_label = label,
        ResourceContent::PimClass(class) => class.human_label = label,
        ResourceContent::PimAttribute(attribute) => attribute.human_label = label,
        _ => {
            return Err(OperationError::invalid_type(
                &op.resource,
                "pim resource with a human label",
            ))
        }
    }
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_codelist(op: &PimSetCodelist, reader: &dyn ResourceReader) -> OpResult {
    let mut class = require(reader, &op.class).await?;
    let view = class
        .as_pim_class_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.class, "pim-class"))?;
    view.is_codelist = op.is_codelist;
    view.codelist_url = op.codelist_url.clone();
    Ok(OperationDelta::new().change(class))
}
