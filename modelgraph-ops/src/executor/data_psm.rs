//! Executors for structural (data-psm) operations
//!
//! Every executor reads the current state it needs, builds the minimal delta,
//! and returns. Set executors touch only the target resource; create and
//! delete executors additionally maintain the schema's part registry and (for
//! class-owned properties) the owner's ordered property list.

use crate::error::OperationError;
use crate::operation::*;
use crate::result::OperationDelta;
use modelgraph_core::data_psm::{
    DataPsmAssociationEnd, DataPsmAttribute, DataPsmClass, DataPsmClassReference, DataPsmInclude,
    DataPsmOr, DataPsmSchema,
};
use modelgraph_core::storage::{IriGenerator, ResourceReader};
use modelgraph_core::{Resource, ResourceContent};

use super::common::{
    find_data_psm_schema, is_root_candidate, remove_stable, require, try_find_data_psm_schema,
};

type OpResult = Result<OperationDelta, OperationError>;

pub(super) async fn create_schema(
    op: &DataPsmCreateSchema,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    if try_find_data_psm_schema(reader).await?.is_some() {
        return Err(OperationError::constraint("store already has a schema"));
    }
    let schema = Resource::new(
        ids.next_iri(),
        ResourceContent::DataPsmSchema(DataPsmSchema {
            human_label: op.human_label.clone(),
            human_description: op.human_description.clone(),
            ..Default::default()
        }),
    );
    Ok(OperationDelta::new().create(schema))
}

pub(super) async fn create_class(
    op: &DataPsmCreateClass,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let mut schema = find_data_psm_schema(reader).await?;
    let class = Resource::new(
        ids.next_iri(),
        ResourceContent::DataPsmClass(DataPsmClass {
            interpretation: op.interpretation.clone(),
            technical_label: op.technical_label.clone(),
            ..Default::default()
        }),
    );
    schema
        .as_data_psm_schema_mut()
        .expect("located by type tag")
        .parts
        .push(class.iri.clone());
    Ok(OperationDelta::new().create(class).change(schema))
}

pub(super) async fn create_attribute(
    op: &DataPsmCreateAttribute,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let mut owner = require(reader, &op.owner).await?;
    let mut schema = find_data_psm_schema(reader).await?;

    let attribute = Resource::new(
        ids.next_iri(),
        ResourceContent::DataPsmAttribute(DataPsmAttribute {
            interpretation: op.interpretation.clone(),
            technical_label: op.technical_label.clone(),
            datatype: op.datatype.clone(),
            ..Default::default()
        }),
    );

    owner
        .as_data_psm_class_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.owner, "data-psm-class"))?
        .parts
        .push(attribute.iri.clone());
    schema
        .as_data_psm_schema_mut()
        .expect("located by type tag")
        .parts
        .push(attribute.iri.clone());

    Ok(OperationDelta::new()
        .create(attribute)
        .change(owner)
        .change(schema))
}

pub(super) async fn create_association_end(
    op: &DataPsmCreateAssociationEnd,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let mut owner = require(reader, &op.owner).await?;
    let target = require(reader, &op.part).await?;
    if !is_root_candidate(&target) {
        return Err(OperationError::invalid_type(
            &op.part,
            "data-psm-class, data-psm-class-reference or data-psm-or",
        ));
    }
    let mut schema = find_data_psm_schema(reader).await?;

    let end = Resource::new(
        ids.next_iri(),
        ResourceContent::DataPsmAssociationEnd(DataPsmAssociationEnd {
            interpretation: op.interpretation.clone(),
            technical_label: op.technical_label.clone(),
            part: Some(op.part.clone()),
            ..Default::default()
        }),
    );

    owner
        .as_data_psm_class_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.owner, "data-psm-class"))?
        .parts
        .push(end.iri.clone());
    schema
        .as_data_psm_schema_mut()
        .expect("located by type tag")
        .parts
        .push(end.iri.clone());

    Ok(OperationDelta::new()
        .create(end)
        .change(owner)
        .change(schema))
}

/// The referenced class lives in another store, so its existence is not
/// checked here; composite operations validate through the federation layer
/// before issuing this operation.
pub(super) async fn create_class_reference(
    op: &DataPsmCreateClassReference,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let mut schema = find_data_psm_schema(reader).await?;
    let reference = Resource::new(
        ids.next_iri(),
        ResourceContent::DataPsmClassReference(DataPsmClassReference {
            specification: Some(op.specification.clone()),
            class: Some(op.class.clone()),
            ..Default::default()
        }),
    );
    schema
        .as_data_psm_schema_mut()
        .expect("located by type tag")
        .parts
        .push(reference.iri.clone());
    Ok(OperationDelta::new().create(reference).change(schema))
}

pub(super) async fn create_include(
    op: &DataPsmCreateInclude,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let mut owner = require(reader, &op.owner).await?;
    let target = require(reader, &op.includes).await?;
    if !target.is_data_psm_class() {
        return Err(OperationError::invalid_type(&op.includes, "data-psm-class"));
    }
    let mut schema = find_data_psm_schema(reader).await?;

    let include = Resource::new(
        ids.next_iri(),
        ResourceContent::DataPsmInclude(DataPsmInclude {
            includes: Some(op.includes.clone()),
            ..Default::default()
        }),
    );

    owner
        .as_data_psm_class_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.owner, "data-psm-class"))?
        .parts
        .push(include.iri.clone());
    schema
        .as_data_psm_schema_mut()
        .expect("located by type tag")
        .parts
        .push(include.iri.clone());

    Ok(OperationDelta::new()
        .create(include)
        .change(owner)
        .change(schema))
}

pub(super) async fn create_or(
    _op: &DataPsmCreateOr,
    reader: &dyn ResourceReader,
    ids: &dyn IriGenerator,
) -> OpResult {
    let mut schema = find_data_psm_schema(reader).await?;
    let or = Resource::new(
        ids.next_iri(),
        ResourceContent::DataPsmOr(DataPsmOr::default()),
    );
    schema
        .as_data_psm_schema_mut()
        .expect("located by type tag")
        .parts
        .push(or.iri.clone());
    Ok(OperationDelta::new().create(or).change(schema))
}

pub(super) async fn set_human_label(
    op: &DataPsmSetHumanLabel,
    reader: &dyn ResourceReader,
) -> OpResult {
    let mut resource = require(reader, &op.resource).await?;
    let label = op.human_label.clone();
    match &mut resource.content {
        ResourceContent::DataPsmSchema(schema) => schema.human_label = label,
        ResourceContent::DataPsmClass(class) => class.human_label = label,
        ResourceContent::DataPsmAttribute(attribute) => attribute.human_label = label,
        ResourceContent::DataPsmAssociationEnd(end) => end.human_label = label,
        _ => {
            return Err(OperationError::invalid_type(
                &op.resource,
                "resource with a human label",
            ))
        }
    }
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_human_description(
    op: &DataPsmSetHumanDescription,
    reader: &dyn ResourceReader,
) -> OpResult {
    let mut resource = require(reader, &op.resource).await?;
    let description = op.human_description.clone();
    match &mut resource.content {
        ResourceContent::DataPsmSchema(schema) => schema.human_description = description,
        ResourceContent::DataPsmClass(class) => class.human_description = description,
        ResourceContent::DataPsmAttribute(attribute) => attribute.human_description = description,
        ResourceContent::DataPsmAssociationEnd(end) => end.human_description = description,
        _ => {
            return Err(OperationError::invalid_type(
                &op.resource,
                "resource with a human description",
            ))
        }
    }
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_technical_label(
    op: &DataPsmSetTechnicalLabel,
    reader: &dyn ResourceReader,
) -> OpResult {
    let mut resource = require(reader, &op.resource).await?;
    let label = op.technical_label.clone();
    match &mut resource.content {
        ResourceContent::DataPsmSchema(schema) => schema.technical_label = label,
        ResourceContent::DataPsmClass(class) => class.technical_label = label,
        ResourceContent::DataPsmAttribute(attribute) => attribute.technical_label = label,
        ResourceContent::DataPsmAssociationEnd(end) => end.technical_label = label,
        _ => {
            return Err(OperationError::invalid_type(
                &op.resource,
                "resource with a technical label",
            ))
        }
    }
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_datatype(op: &DataPsmSetDatatype, reader: &dyn ResourceReader) -> OpResult {
    let mut resource = require(reader, &op.attribute).await?;
    resource
        .as_data_psm_attribute_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.attribute, "data-psm-attribute"))?
        .datatype = op.datatype.clone();
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_cardinality(
    op: &DataPsmSetCardinality,
    reader: &dyn ResourceReader,
) -> OpResult {
    if let Some(max) = op.cardinality_max {
        if max < op.cardinality_min {
            return Err(OperationError::constraint(format!(
                "cardinality maximum {max} is below minimum {}",
                op.cardinality_min
            )));
        }
    }
    let mut resource = require(reader, &op.resource).await?;
    match &mut resource.content {
        ResourceContent::DataPsmAttribute(attribute) => {
            attribute.cardinality_min = Some(op.cardinality_min);
            attribute.cardinality_max = op.cardinality_max;
        }
        ResourceContent::DataPsmAssociationEnd(end) => {
            end.cardinality_min = Some(op.cardinality_min);
            end.cardinality_max = op.cardinality_max;
        }
        _ => {
            return Err(OperationError::invalid_type(
                &op.resource,
                "data-psm-attribute or data-psm-association-end",
            ))
        }
    }
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_regex(op: &DataPsmSetRegex, reader: &dyn ResourceReader) -> OpResult {
    let mut resource = require(reader, &op.attribute).await?;
    resource
        .as_data_psm_attribute_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.attribute, "data-psm-attribute"))?
        .regex = op.regex.clone();
    Ok(OperationDelta::new().change(resource))
}

pub(super) async fn set_example(op: &DataPsmSetExample, reader: &dyn ResourceReader) -> OpResult {
    let mut resource = require(reader, &op.attribute).await?;
    resource
        .as_data_psm_attribute_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.attribute, "data-psm-attribute"))?
        .example = op.example.clone();
    Ok(OperationDelta::new().change(resource))
}

/// Replaces the schema's root list. The part registry is left untouched;
/// classes dropped from the roots remain reachable parts of the schema.
pub(super) async fn set_roots(op: &DataPsmSetRoots, reader: &dyn ResourceReader) -> OpResult {
    for iri in &op.roots {
        let root = require(reader, iri).await?;
        if !is_root_candidate(&root) {
            return Err(OperationError::invalid_type(
                iri,
                "data-psm-class, data-psm-class-reference or data-psm-or",
            ));
        }
    }
    let mut schema = find_data_psm_schema(reader).await?;
    schema
        .as_data_psm_schema_mut()
        .expect("located by type tag")
        .roots = op.roots.clone();
    Ok(OperationDelta::new().change(schema))
}

pub(super) async fn set_order(op: &DataPsmSetOrder, reader: &dyn ResourceReader) -> OpResult {
    let mut owner = require(reader, &op.owner).await?;
    let parts = &mut owner
        .as_data_psm_class_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.owner, "data-psm-class"))?
        .parts;

    if !remove_stable(parts, &op.resource) {
        return Err(OperationError::constraint(format!(
            "{} is not a property of {}",
            op.resource, op.owner
        )));
    }
    let position = match &op.move_after {
        None => 0,
        Some(anchor) => {
            let index = parts.iter().position(|part| part == anchor).ok_or_else(|| {
                OperationError::constraint(format!("{anchor} is not a property of {}", op.owner))
            })?;
            index + 1
        }
    };
    parts.insert(position, op.resource.clone());
    Ok(OperationDelta::new().change(owner))
}

pub(super) async fn set_extends(op: &DataPsmSetExtends, reader: &dyn ResourceReader) -> OpResult {
    for iri in &op.extends {
        let parent = require(reader, iri).await?;
        if !parent.is_data_psm_class() {
            return Err(OperationError::invalid_type(iri, "data-psm-class"));
        }
    }
    let mut class = require(reader, &op.class).await?;
    class
        .as_data_psm_class_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.class, "data-psm-class"))?
        .extends = op.extends.clone();
    Ok(OperationDelta::new().change(class))
}

pub(super) async fn add_choice(op: &DataPsmAddChoice, reader: &dyn ResourceReader) -> OpResult {
    let choice = require(reader, &op.choice).await?;
    if !choice.is_data_psm_class() {
        return Err(OperationError::invalid_type(&op.choice, "data-psm-class"));
    }
    let mut or = require(reader, &op.or).await?;
    let choices = &mut or
        .as_data_psm_or_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.or, "data-psm-or"))?
        .choices;
    if choices.iter().any(|existing| existing == &op.choice) {
        return Err(OperationError::constraint(format!(
            "{} is already a choice of {}",
            op.choice, op.or
        )));
    }
    choices.push(op.choice.clone());
    Ok(OperationDelta::new().change(or))
}

pub(super) async fn remove_choice(
    op: &DataPsmRemoveChoice,
    reader: &dyn ResourceReader,
) -> OpResult {
    let mut or = require(reader, &op.or).await?;
    let choices = &mut or
        .as_data_psm_or_mut()
        .ok_or_else(|| OperationError::invalid_type(&op.or, "data-psm-or"))?
        .choices;
    if !remove_stable(choices, &op.choice) {
        return Err(OperationError::constraint(format!(
            "{} is not a choice of {}",
            op.choice, op.or
        )));
    }
    Ok(OperationDelta::new().change(or))
}

pub(super) async fn delete_class(op: &DataPsmDeleteClass, reader: &dyn ResourceReader) -> OpResult {
    let class = require(reader, &op.class).await?;
    let view = class
        .as_data_psm_class()
        .ok_or_else(|| OperationError::invalid_type(&op.class, "data-psm-class"))?;
    if !view.parts.is_empty() {
        return Err(OperationError::constraint(format!(
            "{} still owns properties",
            op.class
        )));
    }
    let mut schema = find_data_psm_schema(reader).await?;
    let schema_view = schema
        .as_data_psm_schema_mut()
        .expect("located by type tag");
    if schema_view.roots.iter().any(|root| root == &op.class) {
        return Err(OperationError::constraint(format!(
            "{} is a schema root",
            op.class
        )));
    }
    remove_stable(&mut schema_view.parts, &op.class);
    Ok(OperationDelta::new().change(schema).delete(&op.class))
}

pub(super) async fn delete_attribute(
    op: &DataPsmDeleteAttribute,
    reader: &dyn ResourceReader,
) -> OpResult {
    delete_property(reader, &op.owner, &op.attribute).await
}

pub(super) async fn delete_association_end(
    op: &DataPsmDeleteAssociationEnd,
    reader: &dyn ResourceReader,
) -> OpResult {
    delete_property(reader, &op.owner, &op.association_end).await
}

pub(super) async fn delete_include(
    op: &DataPsmDeleteInclude,
    reader: &dyn ResourceReader,
) -> OpResult {
    delete_property(reader, &op.owner, &op.include).await
}

/// Shared removal path for class-owned properties: drop the property from the
/// owner's ordered list and the schema's part registry, then delete it.
async fn delete_property(reader: &dyn ResourceReader, owner: &str, property: &str) -> OpResult {
    require(reader, property).await?;
    let mut owner_resource = require(reader, owner).await?;
    let parts = &mut owner_resource
        .as_data_psm_class_mut()
        .ok_or_else(|| OperationError::invalid_type(owner, "data-psm-class"))?
        .parts;
    if !remove_stable(parts, property) {
        return Err(OperationError::constraint(format!(
            "{property} is not a property of {owner}"
        )));
    }
    let mut schema = find_data_psm_schema(reader).await?;
    remove_stable(
        &mut schema
            .as_data_psm_schema_mut()
            .expect("located by type tag")
            .parts,
        property,
    );
    Ok(OperationDelta::new()
        .change(owner_resource)
        .change(schema)
        .delete(property))
}

pub(super) async fn delete_or(op: &DataPsmDeleteOr, reader: &dyn ResourceReader) -> OpResult {
    let or = require(reader, &op.or).await?;
    if !or.is_data_psm_or() {
        return Err(OperationError::invalid_type(&op.or, "data-psm-or"));
    }
    let mut schema = find_data_psm_schema(reader).await?;
    let schema_view = schema
        .as_data_psm_schema_mut()
        .expect("located by type tag");
    if schema_view.roots.iter().any(|root| root == &op.or) {
        return Err(OperationError::constraint(format!(
            "{} is a schema root",
            op.or
        )));
    }
    remove_stable(&mut schema_view.parts, &op.or);
    Ok(OperationDelta::new().change(schema).delete(&op.or))
}
