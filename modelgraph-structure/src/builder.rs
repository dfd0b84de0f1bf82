//! Structure-model construction
//!
//! Building runs in two phases. First an async breadth-first fetch pulls
//! every reachable resource through the reader into a local map, so the
//! second phase can recurse synchronously without suspension points. The
//! second phase resolves the graph into the arena model: classes are
//! reserved in the arena before their bodies are filled, so association
//! cycles resolve to the reserved id instead of recursing forever, while
//! inheritance and include chains carry an explicit ancestry and fail on a
//! repeat.

use crate::error::{Result, StructureError};
use crate::model::{
    Cardinality, ClassId, StructureProperty, StructureSchema, StructureType,
};
use modelgraph_core::data_psm::DataPsmClass;
use modelgraph_core::{PrimitiveType, Resource, ResourceContent, ResourceReader};
use std::collections::{HashMap, VecDeque};

/// Build the structure model rooted at a schema.
///
/// The reader decides visibility: handed a federated reader, class
/// references resolve across sub-stores; handed a single store, they fail as
/// unresolved.
pub async fn build_structure_model(
    schema_iri: &str,
    reader: &dyn ResourceReader,
) -> Result<StructureSchema> {
    let resources = fetch_reachable(schema_iri, reader).await?;
    tracing::debug!(
        schema = schema_iri,
        fetched = resources.len(),
        "building structure model"
    );
    Builder {
        resources: &resources,
        model: StructureSchema::default(),
        built: HashMap::new(),
    }
    .build(schema_iri)
}

/// Fetch everything reachable from the schema into a local map.
///
/// A dangling IRI is skipped here; whether its absence matters is decided by
/// the build phase, which only fails on IRIs it actually needs.
async fn fetch_reachable(
    schema_iri: &str,
    reader: &dyn ResourceReader,
) -> Result<HashMap<String, Resource>> {
    let mut fetched = HashMap::new();
    let mut queue = VecDeque::from([schema_iri.to_string()]);
    while let Some(iri) = queue.pop_front() {
        if fetched.contains_key(&iri) {
            continue;
        }
        let Some(resource) = reader.read_resource(&iri).await? else {
            continue;
        };
        queue.extend(referenced_iris(&resource));
        fetched.insert(iri, resource);
    }
    Ok(fetched)
}

/// The IRIs a resource points at, for the fetch phase
fn referenced_iris(resource: &Resource) -> Vec<String> {
    match &resource.content {
        ResourceContent::DataPsmSchema(schema) => schema.roots.clone(),
        ResourceContent::DataPsmClass(class) => {
            let mut iris = class.extends.clone();
            iris.extend(class.parts.clone());
            iris
        }
        ResourceContent::DataPsmAssociationEnd(end) => end.part.clone().into_iter().collect(),
        ResourceContent::DataPsmClassReference(reference) => {
            reference.class.clone().into_iter().collect()
        }
        ResourceContent::DataPsmInclude(include) => include.includes.clone().into_iter().collect(),
        ResourceContent::DataPsmOr(or) => or.choices.clone(),
        _ => Vec::new(),
    }
}

struct Builder<'a> {
    resources: &'a HashMap<String, Resource>,
    model: StructureSchema,
    /// Class or class-reference IRI to its arena slot, reserved before fill
    built: HashMap<String, ClassId>,
}

impl<'a> Builder<'a> {
    fn build(mut self, schema_iri: &str) -> Result<StructureSchema> {
        let schema = self.get(schema_iri)?;
        let view = schema
            .as_data_psm_schema()
            .ok_or_else(|| StructureError::unexpected(schema_iri, "data-psm-schema"))?;
        self.model.iri = schema_iri.to_string();
        self.model.human_label = view.human_label.clone();
        self.model.human_description = view.human_description.clone();
        self.model.technical_label = view.technical_label.clone();

        let mut roots = Vec::new();
        for root_iri in &view.roots {
            let root = self.get(root_iri)?;
            // A choice at the schema root flattens to one root per
            // alternative.
            if let Some(or) = root.as_data_psm_or() {
                for choice in &or.choices {
                    roots.push(self.build_class(choice, &mut Vec::new())?);
                }
            } else {
                roots.push(self.build_class(root_iri, &mut Vec::new())?);
            }
        }
        self.model.roots = roots;
        Ok(self.model)
    }

    fn get(&self, iri: &str) -> Result<&'a Resource> {
        self.resources
            .get(iri)
            .ok_or_else(|| StructureError::unresolved(iri))
    }

    /// Resolve a class or class reference to its arena slot, building it on
    /// first encounter. `ancestry` is the chain of inheritance edges leading
    /// here; association edges always start a fresh chain.
    fn build_class(&mut self, iri: &str, ancestry: &mut Vec<String>) -> Result<ClassId> {
        if let Some(id) = self.built.get(iri) {
            return Ok(*id);
        }
        let resource = self.get(iri)?;
        match &resource.content {
            ResourceContent::DataPsmClass(view) => {
                let id = self.model.reserve_class();
                self.built.insert(iri.to_string(), id);
                self.fill_class(id, iri, view, None, ancestry)?;
                Ok(id)
            }
            ResourceContent::DataPsmClassReference(reference) => {
                let target_iri = reference
                    .class
                    .clone()
                    .ok_or_else(|| StructureError::unexpected(iri, "reference with a target"))?;
                let target = self.get(&target_iri)?;
                let view = target
                    .as_data_psm_class()
                    .ok_or_else(|| StructureError::unexpected(&target_iri, "data-psm-class"))?;
                // The reference gets its own arena node so the origin
                // specification tag stays local to this use of the class.
                let id = self.model.reserve_class();
                self.built.insert(iri.to_string(), id);
                self.fill_class(id, &target_iri, view, reference.specification.clone(), ancestry)?;
                Ok(id)
            }
            _ => Err(StructureError::unexpected(
                iri,
                "data-psm-class or data-psm-class-reference",
            )),
        }
    }

    fn fill_class(
        &mut self,
        id: ClassId,
        iri: &str,
        view: &'a DataPsmClass,
        specification: Option<String>,
        ancestry: &mut Vec<String>,
    ) -> Result<()> {
        ancestry.push(iri.to_string());
        let mut extends = Vec::new();
        for parent_iri in &view.extends {
            if ancestry.contains(parent_iri) {
                return Err(StructureError::CyclicExtends {
                    iri: parent_iri.clone(),
                });
            }
            extends.push(self.build_class(parent_iri, ancestry)?);
        }
        let properties =
            self.build_properties(&view.parts, &mut vec![iri.to_string()])?;
        ancestry.pop();

        let class = self.model.class_mut(id);
        class.iri = iri.to_string();
        class.interpretation = view.interpretation.clone();
        class.specification = specification;
        class.technical_label = view.technical_label.clone();
        class.human_label = view.human_label.clone();
        class.human_description = view.human_description.clone();
        class.extends = extends;
        class.properties = properties;
        Ok(())
    }

    /// Resolve a class's parts, in declaration order, splicing includes
    /// inline. `include_chain` carries the classes whose parts are currently
    /// being spliced.
    fn build_properties(
        &mut self,
        parts: &[String],
        include_chain: &mut Vec<String>,
    ) -> Result<Vec<StructureProperty>> {
        let mut properties = Vec::new();
        for part_iri in parts {
            let part = self.get(part_iri)?;
            match &part.content {
                ResourceContent::DataPsmAttribute(attribute) => {
                    properties.push(StructureProperty {
                        iri: part_iri.clone(),
                        technical_label: attribute.technical_label.clone(),
                        human_label: attribute.human_label.clone(),
                        human_description: attribute.human_description.clone(),
                        cardinality: cardinality_of(
                            attribute.cardinality_min,
                            attribute.cardinality_max,
                        ),
                        types: datatype_types(attribute.datatype.as_deref()),
                        regex: attribute.regex.clone(),
                        example: attribute.example.clone(),
                    });
                }
                ResourceContent::DataPsmAssociationEnd(end) => {
                    let target = end.part.as_deref().ok_or_else(|| {
                        StructureError::unexpected(part_iri, "association end with a target")
                    })?;
                    let types = self.association_types(target)?;
                    properties.push(StructureProperty {
                        iri: part_iri.clone(),
                        technical_label: end.technical_label.clone(),
                        human_label: end.human_label.clone(),
                        human_description: end.human_description.clone(),
                        cardinality: cardinality_of(end.cardinality_min, end.cardinality_max),
                        types,
                        regex: None,
                        example: None,
                    });
                }
                ResourceContent::DataPsmInclude(include) => {
                    let target_iri = include.includes.clone().ok_or_else(|| {
                        StructureError::unexpected(part_iri, "include with a target")
                    })?;
                    if include_chain.contains(&target_iri) {
                        return Err(StructureError::CyclicInclude { iri: target_iri });
                    }
                    let target = self.get(&target_iri)?;
                    let view = target
                        .as_data_psm_class()
                        .ok_or_else(|| StructureError::unexpected(&target_iri, "data-psm-class"))?;
                    include_chain.push(target_iri);
                    properties.extend(self.build_properties(&view.parts, include_chain)?);
                    include_chain.pop();
                }
                _ => {
                    return Err(StructureError::unexpected(
                        part_iri,
                        "data-psm-attribute, data-psm-association-end or data-psm-include",
                    ))
                }
            }
        }
        Ok(properties)
    }

    /// A choice target contributes one type variant per alternative on the
    /// same property; anything else contributes exactly one.
    fn association_types(&mut self, target: &str) -> Result<Vec<StructureType>> {
        let resource = self.get(target)?;
        if let Some(or) = resource.as_data_psm_or() {
            let mut types = Vec::new();
            for choice in &or.choices {
                types.push(StructureType::Class(
                    self.build_class(choice, &mut Vec::new())?,
                ));
            }
            Ok(types)
        } else {
            Ok(vec![StructureType::Class(
                self.build_class(target, &mut Vec::new())?,
            )])
        }
    }
}

/// Both bounds absent means the cardinality was never set and defaults to an
/// optional single value; an absent maximum alongside a set minimum means
/// unbounded.
fn cardinality_of(min: Option<u32>, max: Option<u32>) -> Cardinality {
    match (min, max) {
        (None, None) => Cardinality::default(),
        (min, max) => Cardinality {
            min: min.unwrap_or(0),
            max,
        },
    }
}

/// Match a datatype IRI against the known catalog, preserving unmatched IRIs
/// as opaque custom types
fn datatype_types(datatype: Option<&str>) -> Vec<StructureType> {
    match datatype {
        None => Vec::new(),
        Some(iri) => vec![match PrimitiveType::from_iri(iri) {
            Some(primitive) => StructureType::Primitive(primitive),
            None => StructureType::Custom(iri.to_string()),
        }],
    }
}
