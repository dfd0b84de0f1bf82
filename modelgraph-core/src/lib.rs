//! # modelgraph-core
//!
//! Core library for the modelgraph resource store.
//!
//! This crate provides:
//! - The universal [`Resource`] node type: an IRI-keyed, type-tagged value
//!   with a closed set of typed views (PIM and Data-PSM)
//! - Wire (de)serialization with forward-compatible unknown-field round-trip
//! - Vocabulary constants (type tags, XSD datatype IRIs)
//! - The [`PrimitiveType`] datatype catalog with opaque-IRI fallback
//! - Trait seams consumed by higher crates: [`ResourceReader`] and
//!   [`IriGenerator`]
//!
//! ## Design Principles
//!
//! 1. **Closed tagged unions**: resource kinds are enum variants, not
//!    string-keyed duck typing, so dispatch is exhaustive at compile time
//! 2. **Pure data shapes**: no mutation logic here; executors own all
//!    validation and field semantics
//! 3. **Forward compatibility**: fields a store does not understand survive a
//!    deserialize/serialize round-trip untouched

pub mod data_psm;
pub mod datatype;
pub mod error;
pub mod pim;
pub mod resource;
pub mod storage;
pub mod vocab;

pub use data_psm::{
    DataPsmAssociationEnd, DataPsmAttribute, DataPsmClass, DataPsmClassReference, DataPsmInclude,
    DataPsmOr, DataPsmSchema,
};
pub use datatype::PrimitiveType;
pub use error::{Error, Result};
pub use pim::{PimAttribute, PimClass, PimSchema};
pub use resource::{LanguageString, Resource, ResourceContent};
pub use storage::{IriGenerator, ResourceReader, SequentialIriGenerator};
