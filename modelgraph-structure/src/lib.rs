//! # modelgraph-structure
//!
//! The structural intermediate representation.
//!
//! Artefact generators (XML Schema, JSON Schema, documentation, ...) never
//! read the resource graph directly; they consume a [`StructureSchema`] built
//! fresh for each generation run by [`build_structure_model`]. The builder
//! walks the graph from the schema roots, flattening includes, turning
//! choices into sibling type variants, and following class references across
//! sub-stores through whatever reader it is handed. The result is immutable;
//! staleness is impossible because nothing is cached between runs.

pub mod builder;
pub mod codelist;
pub mod error;
pub mod model;

pub use builder::build_structure_model;
pub use codelist::enrich_with_codelists;
pub use error::{Result, StructureError};
pub use model::{
    Cardinality, ClassId, StructureClass, StructureProperty, StructureSchema, StructureType,
};
