//! Data-PSM typed views
//!
//! Platform-specific (structural) resource shapes. These are pure data: field
//! presence is not validated here, executors check what they need when they
//! need it.
//!
//! Every view carries a flattened `extra` map so fields this version does not
//! understand round-trip untouched through (de)serialization.

use crate::resource::LanguageString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema root: owns the ordered root list and the flat part list of every
/// resource belonging to this schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSchema {
    #[serde(rename = "dataPsmHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,

    #[serde(
        rename = "dataPsmHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,

    #[serde(
        rename = "dataPsmTechnicalLabel",
        skip_serializing_if = "Option::is_none"
    )]
    pub technical_label: Option<String>,

    /// Ordered root resources (classes, ors, or class references)
    #[serde(rename = "dataPsmRoots", default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<String>,

    /// Every resource owned by this schema, in creation order
    #[serde(rename = "dataPsmParts", default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Structural class with an ordered property list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmClass {
    /// IRI of the conceptual (PIM) resource this class interprets
    #[serde(
        rename = "dataPsmInterpretation",
        skip_serializing_if = "Option::is_none"
    )]
    pub interpretation: Option<String>,

    #[serde(
        rename = "dataPsmTechnicalLabel",
        skip_serializing_if = "Option::is_none"
    )]
    pub technical_label: Option<String>,

    #[serde(rename = "dataPsmHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,

    #[serde(
        rename = "dataPsmHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,

    /// Parent classes (inheritance, by IRI)
    #[serde(
        rename = "dataPsmExtends",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extends: Vec<String>,

    /// Ordered properties (attributes, association ends, includes).
    /// Declaration order is authoritative for generated field order.
    #[serde(rename = "dataPsmParts", default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Primitive-valued property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmAttribute {
    #[serde(
        rename = "dataPsmInterpretation",
        skip_serializing_if = "Option::is_none"
    )]
    pub interpretation: Option<String>,

    #[serde(
        rename = "dataPsmTechnicalLabel",
        skip_serializing_if = "Option::is_none"
    )]
    pub technical_label: Option<String>,

    #[serde(rename = "dataPsmHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,

    #[serde(
        rename = "dataPsmHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,

    /// Datatype IRI; matched against the primitive catalog during structure
    /// building, unmatched IRIs stay opaque
    #[serde(rename = "dataPsmDatatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    #[serde(
        rename = "dataPsmCardinalityMin",
        skip_serializing_if = "Option::is_none"
    )]
    pub cardinality_min: Option<u32>,

    /// `None` while unset; a stored `None` after an explicit set means unbounded
    #[serde(
        rename = "dataPsmCardinalityMax",
        skip_serializing_if = "Option::is_none"
    )]
    pub cardinality_max: Option<u32>,

    #[serde(rename = "dataPsmRegex", skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    #[serde(rename = "dataPsmExample", skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Class-valued property pointing at another structural node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmAssociationEnd {
    #[serde(
        rename = "dataPsmInterpretation",
        skip_serializing_if = "Option::is_none"
    )]
    pub interpretation: Option<String>,

    #[serde(
        rename = "dataPsmTechnicalLabel",
        skip_serializing_if = "Option::is_none"
    )]
    pub technical_label: Option<String>,

    #[serde(rename = "dataPsmHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,

    #[serde(
        rename = "dataPsmHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,

    /// Target node (class, class reference, or or)
    #[serde(rename = "dataPsmPart", skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,

    #[serde(
        rename = "dataPsmCardinalityMin",
        skip_serializing_if = "Option::is_none"
    )]
    pub cardinality_min: Option<u32>,

    #[serde(
        rename = "dataPsmCardinalityMax",
        skip_serializing_if = "Option::is_none"
    )]
    pub cardinality_max: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to a class owned by a different schema (cross-specification).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmClassReference {
    /// IRI of the schema owning the referenced class
    #[serde(
        rename = "dataPsmSpecification",
        skip_serializing_if = "Option::is_none"
    )]
    pub specification: Option<String>,

    /// IRI of the referenced class
    #[serde(rename = "dataPsmClass", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Splice of another class's properties into the including context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmInclude {
    /// IRI of the class whose properties are spliced in
    #[serde(rename = "dataPsmIncludes", skip_serializing_if = "Option::is_none")]
    pub includes: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Alternative sub-structures; choices become sibling type variants rather
/// than separate properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmOr {
    #[serde(
        rename = "dataPsmChoices",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub choices: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
