//! The universal resource node
//!
//! Every node in the graph is a [`Resource`]: an IRI plus a closed
//! [`ResourceContent`] tagged union. The wire form is
//! `{"iri": ..., "types": [...], ...fields}` where the first recognized tag
//! selects the content variant and any further tags are preserved in
//! `extra_types`. Fields the content variant does not know are kept in the
//! view's flattened `extra` map, so a store that merely passes a resource
//! through never drops them.

use crate::data_psm::{
    DataPsmAssociationEnd, DataPsmAttribute, DataPsmClass, DataPsmClassReference, DataPsmInclude,
    DataPsmOr, DataPsmSchema,
};
use crate::error::{Error, Result};
use crate::pim::{PimAttribute, PimClass, PimSchema};
use crate::vocab;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Language-tagged text (language tag → text), deterministic order.
pub type LanguageString = BTreeMap<String, String>;

/// A typed, IRI-keyed graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Globally unique identifier, never reused
    pub iri: String,

    /// Typed content selected by the primary type tag
    pub content: ResourceContent,

    /// Additional type tags beyond the content's canonical tag
    pub extra_types: Vec<String>,
}

/// Closed set of recognized resource kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceContent {
    DataPsmSchema(DataPsmSchema),
    DataPsmClass(DataPsmClass),
    DataPsmAttribute(DataPsmAttribute),
    DataPsmAssociationEnd(DataPsmAssociationEnd),
    DataPsmClassReference(DataPsmClassReference),
    DataPsmInclude(DataPsmInclude),
    DataPsmOr(DataPsmOr),
    PimSchema(PimSchema),
    PimClass(PimClass),
    PimAttribute(PimAttribute),
}

impl ResourceContent {
    /// The canonical type tag for this content variant
    pub fn primary_type(&self) -> &'static str {
        match self {
            ResourceContent::DataPsmSchema(_) => vocab::data_psm::SCHEMA,
            ResourceContent::DataPsmClass(_) => vocab::data_psm::CLASS,
            ResourceContent::DataPsmAttribute(_) => vocab::data_psm::ATTRIBUTE,
            ResourceContent::DataPsmAssociationEnd(_) => vocab::data_psm::ASSOCIATION_END,
            ResourceContent::DataPsmClassReference(_) => vocab::data_psm::CLASS_REFERENCE,
            ResourceContent::DataPsmInclude(_) => vocab::data_psm::INCLUDE,
            ResourceContent::DataPsmOr(_) => vocab::data_psm::OR,
            ResourceContent::PimSchema(_) => vocab::pim::SCHEMA,
            ResourceContent::PimClass(_) => vocab::pim::CLASS,
            ResourceContent::PimAttribute(_) => vocab::pim::ATTRIBUTE,
        }
    }

    /// Serialize the content's fields as a flat JSON object
    fn fields_json(&self) -> Result<Map<String, Value>> {
        let value = match self {
            ResourceContent::DataPsmSchema(v) => serde_json::to_value(v)?,
            ResourceContent::DataPsmClass(v) => serde_json::to_value(v)?,
            ResourceContent::DataPsmAttribute(v) => serde_json::to_value(v)?,
            ResourceContent::DataPsmAssociationEnd(v) => serde_json::to_value(v)?,
            ResourceContent::DataPsmClassReference(v) => serde_json::to_value(v)?,
            ResourceContent::DataPsmInclude(v) => serde_json::to_value(v)?,
            ResourceContent::DataPsmOr(v) => serde_json::to_value(v)?,
            ResourceContent::PimSchema(v) => serde_json::to_value(v)?,
            ResourceContent::PimClass(v) => serde_json::to_value(v)?,
            ResourceContent::PimAttribute(v) => serde_json::to_value(v)?,
        };
        match value {
            Value::Object(map) => Ok(map),
            other => Err(Error::invalid_resource(format!(
                "content serialized to non-object: {other}"
            ))),
        }
    }

    /// Build content from a recognized tag and a flat field object.
    ///
    /// Returns `Ok(None)` when the tag is not recognized.
    fn from_tag(tag: &str, fields: Value) -> Result<Option<ResourceContent>> {
        let content = match tag {
            vocab::data_psm::SCHEMA => {
                ResourceContent::DataPsmSchema(serde_json::from_value(fields)?)
            }
            vocab::data_psm::CLASS => ResourceContent::DataPsmClass(serde_json::from_value(fields)?),
            vocab::data_psm::ATTRIBUTE => {
                ResourceContent::DataPsmAttribute(serde_json::from_value(fields)?)
            }
            vocab::data_psm::ASSOCIATION_END => {
                ResourceContent::DataPsmAssociationEnd(serde_json::from_value(fields)?)
            }
            vocab::data_psm::CLASS_REFERENCE => {
                ResourceContent::DataPsmClassReference(serde_json::from_value(fields)?)
            }
            vocab::data_psm::INCLUDE => {
                ResourceContent::DataPsmInclude(serde_json::from_value(fields)?)
            }
            vocab::data_psm::OR => ResourceContent::DataPsmOr(serde_json::from_value(fields)?),
            vocab::pim::SCHEMA => ResourceContent::PimSchema(serde_json::from_value(fields)?),
            vocab::pim::CLASS => ResourceContent::PimClass(serde_json::from_value(fields)?),
            vocab::pim::ATTRIBUTE => ResourceContent::PimAttribute(serde_json::from_value(fields)?),
            _ => return Ok(None),
        };
        Ok(Some(content))
    }
}

impl Resource {
    /// Create a resource with the given IRI and content
    pub fn new(iri: impl Into<String>, content: ResourceContent) -> Self {
        Self {
            iri: iri.into(),
            content,
            extra_types: Vec::new(),
        }
    }

    /// All type tags, canonical tag first
    pub fn types(&self) -> Vec<&str> {
        let mut types = vec![self.content.primary_type()];
        types.extend(self.extra_types.iter().map(String::as_str));
        types
    }

    /// Check membership of an arbitrary type tag
    pub fn has_type(&self, tag: &str) -> bool {
        self.content.primary_type() == tag || self.extra_types.iter().any(|t| t == tag)
    }

    /// Serialize to the wire form `{iri, types, ...fields}`
    pub fn to_json(&self) -> Result<Value> {
        let mut map = Map::new();
        map.insert("iri".to_string(), Value::String(self.iri.clone()));
        map.insert(
            "types".to_string(),
            Value::Array(
                self.types()
                    .into_iter()
                    .map(|t| Value::String(t.to_string()))
                    .collect(),
            ),
        );
        for (key, value) in self.content.fields_json()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }

    /// Deserialize from the wire form.
    ///
    /// The first recognized tag in `types` selects the content variant; all
    /// other tags become `extra_types`. A resource with no recognized tag is
    /// rejected here - untyped resources never enter a store.
    pub fn from_json(value: Value) -> Result<Resource> {
        let Value::Object(mut map) = value else {
            return Err(Error::invalid_resource("resource must be a JSON object"));
        };
        let iri = match map.remove("iri") {
            Some(Value::String(iri)) => iri,
            _ => return Err(Error::invalid_resource("missing string field `iri`")),
        };
        let tags: Vec<String> = match map.remove("types") {
            Some(Value::Array(tags)) => tags
                .into_iter()
                .map(|t| match t {
                    Value::String(s) => Ok(s),
                    _ => Err(Error::invalid_resource("`types` entries must be strings")),
                })
                .collect::<Result<_>>()?,
            _ => return Err(Error::invalid_resource("missing array field `types`")),
        };

        let fields = Value::Object(map);
        let mut content = None;
        let mut extra_types = Vec::new();
        for tag in tags {
            if content.is_none() {
                if let Some(parsed) = ResourceContent::from_tag(&tag, fields.clone())? {
                    content = Some(parsed);
                    continue;
                }
            }
            extra_types.push(tag);
        }

        match content {
            Some(content) => Ok(Resource {
                iri,
                content,
                extra_types,
            }),
            None => Err(Error::unknown_type(extra_types.join(", "))),
        }
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Resource::from_json(value).map_err(serde::de::Error::custom)
    }
}

// Safe downcasts: `Option`-returning views instead of mutation-based casts.
// Calling a downcast never widens the type set; repeated calls are idempotent.
macro_rules! downcasts {
    ($variant:ident, $view:ty, $is:ident, $as:ident, $as_mut:ident) => {
        impl Resource {
            /// Check whether this resource is tagged as the given kind
            pub fn $is(&self) -> bool {
                matches!(self.content, ResourceContent::$variant(_))
            }

            /// Downcast to a shared typed view
            pub fn $as(&self) -> Option<&$view> {
                match &self.content {
                    ResourceContent::$variant(v) => Some(v),
                    _ => None,
                }
            }

            /// Downcast to a mutable typed view
            pub fn $as_mut(&mut self) -> Option<&mut $view> {
                match &mut self.content {
                    ResourceContent::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

downcasts!(
    DataPsmSchema,
    DataPsmSchema,
    is_data_psm_schema,
    as_data_psm_schema,
    as_data_psm_schema_mut
);
downcasts!(
    DataPsmClass,
    DataPsmClass,
    is_data_psm_class,
    as_data_psm_class,
    as_data_psm_class_mut
);
downcasts!(
    DataPsmAttribute,
    DataPsmAttribute,
    is_data_psm_attribute,
    as_data_psm_attribute,
    as_data_psm_attribute_mut
);
downcasts!(
    DataPsmAssociationEnd,
    DataPsmAssociationEnd,
    is_data_psm_association_end,
    as_data_psm_association_end,
    as_data_psm_association_end_mut
);
downcasts!(
    DataPsmClassReference,
    DataPsmClassReference,
    is_data_psm_class_reference,
    as_data_psm_class_reference,
    as_data_psm_class_reference_mut
);
downcasts!(
    DataPsmInclude,
    DataPsmInclude,
    is_data_psm_include,
    as_data_psm_include,
    as_data_psm_include_mut
);
downcasts!(
    DataPsmOr,
    DataPsmOr,
    is_data_psm_or,
    as_data_psm_or,
    as_data_psm_or_mut
);
downcasts!(PimSchema, PimSchema, is_pim_schema, as_pim_schema, as_pim_schema_mut);
downcasts!(PimClass, PimClass, is_pim_class, as_pim_class, as_pim_class_mut);
downcasts!(
    PimAttribute,
    PimAttribute,
    is_pim_attribute,
    as_pim_attribute,
    as_pim_attribute_mut
);
