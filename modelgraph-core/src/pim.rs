//! PIM typed views
//!
//! Conceptual-level (platform-independent) resource shapes. The structure
//! builder reads these only for enrichment (codelist propagation); they are
//! otherwise mutated through their own operations like any resource.

use crate::resource::LanguageString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Conceptual schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimSchema {
    #[serde(rename = "pimHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,

    #[serde(
        rename = "pimHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,

    /// Every resource owned by this schema, in creation order
    #[serde(rename = "pimParts", default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Conceptual class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimClass {
    /// Upstream interpretation (e.g. a CIM-level IRI), opaque to this system
    #[serde(rename = "pimInterpretation", skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,

    #[serde(rename = "pimHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,

    #[serde(
        rename = "pimHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,

    #[serde(rename = "pimExtends", default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Whether instances are drawn from an externally published value set
    #[serde(rename = "pimIsCodelist", default)]
    pub is_codelist: bool,

    /// Published codelist locations
    #[serde(
        rename = "pimCodelistUrl",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub codelist_url: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Conceptual attribute; carries a back-reference to its owning class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimAttribute {
    #[serde(rename = "pimInterpretation", skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,

    #[serde(rename = "pimOwnerClass", skip_serializing_if = "Option::is_none")]
    pub owner_class: Option<String>,

    #[serde(rename = "pimHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,

    #[serde(
        rename = "pimHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,

    #[serde(rename = "pimDatatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    #[serde(rename = "pimCardinalityMin", skip_serializing_if = "Option::is_none")]
    pub cardinality_min: Option<u32>,

    #[serde(rename = "pimCardinalityMax", skip_serializing_if = "Option::is_none")]
    pub cardinality_max: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
