//! Operation value types
//!
//! Each operation is an immutable command carrying only the minimal delta
//! needed for one mutation. Operations are type-tagged on the wire like
//! resources (`{"types": ["data-psm-action-..."], ...fields}`) and form the
//! unit of the append-only store log.

use crate::error::OperationParseError;
use modelgraph_core::LanguageString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// -- Data-PSM create operations ---------------------------------------------

/// Create an empty schema resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmCreateSchema {
    #[serde(rename = "dataPsmHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,
    #[serde(
        rename = "dataPsmHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,
}

/// Create a class registered in the schema's part list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmCreateClass {
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
}

/// Create an attribute appended to its owner class's ordered properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmCreateAttribute {
    /// Owning class IRI
    #[serde(rename = "dataPsmOwner")]
    pub owner: String,
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
    #[serde(rename = "dataPsmDatatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

/// Create an association end appended to its owner class's ordered properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmCreateAssociationEnd {
    #[serde(rename = "dataPsmOwner")]
    pub owner: String,
    /// Target node (class, class reference, or or)
    #[serde(rename = "dataPsmPart")]
    pub part: String,
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
}

/// Create a reference to a class owned by another schema.
///
/// The referenced class lives in a different store, so this executor cannot
/// validate it; composite operations validate through the federation layer
/// before issuing this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmCreateClassReference {
    #[serde(rename = "dataPsmSpecification")]
    pub specification: String,
    #[serde(rename = "dataPsmClass")]
    pub class: String,
}

/// Create an include splicing another class's properties into the owner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmCreateInclude {
    #[serde(rename = "dataPsmOwner")]
    pub owner: String,
    #[serde(rename = "dataPsmIncludes")]
    pub includes: String,
}

/// Create an empty or (choice) node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmCreateOr {}

// -- Data-PSM modify operations ---------------------------------------------

/// Replace a resource's human label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetHumanLabel {
    #[serde(rename = "dataPsmResource")]
    pub resource: String,
    #[serde(rename = "dataPsmHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,
}

/// Replace a resource's human description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetHumanDescription {
    #[serde(rename = "dataPsmResource")]
    pub resource: String,
    #[serde(
        rename = "dataPsmHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,
}

/// Replace a resource's technical label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetTechnicalLabel {
    #[serde(rename = "dataPsmResource")]
    pub resource: String,
    #[serde(
        rename = "dataPsmTechnicalLabel",
        skip_serializing_if = "Option::is_none"
    )]
    pub technical_label: Option<String>,
}

/// Replace an attribute's datatype.
///
/// The value is stored verbatim; empty-string normalization is a composite
/// layer concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetDatatype {
    #[serde(rename = "dataPsmAttribute")]
    pub attribute: String,
    #[serde(rename = "dataPsmDatatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

/// Replace the cardinality of an attribute or association end
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetCardinality {
    #[serde(rename = "dataPsmResource")]
    pub resource: String,
    #[serde(rename = "dataPsmCardinalityMin")]
    pub cardinality_min: u32,
    /// `None` means unbounded
    #[serde(
        rename = "dataPsmCardinalityMax",
        skip_serializing_if = "Option::is_none"
    )]
    pub cardinality_max: Option<u32>,
}

/// Replace an attribute's regex constraint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetRegex {
    #[serde(rename = "dataPsmAttribute")]
    pub attribute: String,
    #[serde(rename = "dataPsmRegex", skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

/// Replace an attribute's example value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetExample {
    #[serde(rename = "dataPsmAttribute")]
    pub attribute: String,
    #[serde(rename = "dataPsmExample", skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Replace the schema's ordered root list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetRoots {
    #[serde(rename = "dataPsmRoots", default)]
    pub roots: Vec<String>,
}

/// Move a property within its owner class's ordered property list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetOrder {
    #[serde(rename = "dataPsmOwnerClass")]
    pub owner: String,
    #[serde(rename = "dataPsmResourceToMove")]
    pub resource: String,
    /// Sibling to place the moved property after; `None` moves it to the front
    #[serde(rename = "dataPsmMoveAfter", skip_serializing_if = "Option::is_none")]
    pub move_after: Option<String>,
}

/// Replace a class's parent list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmSetExtends {
    #[serde(rename = "dataPsmClass")]
    pub class: String,
    #[serde(rename = "dataPsmExtends", default)]
    pub extends: Vec<String>,
}

/// Append a choice to an or node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmAddChoice {
    #[serde(rename = "dataPsmOr")]
    pub or: String,
    #[serde(rename = "dataPsmChoice")]
    pub choice: String,
}

/// Remove a choice from an or node, preserving sibling order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmRemoveChoice {
    #[serde(rename = "dataPsmOr")]
    pub or: String,
    #[serde(rename = "dataPsmChoice")]
    pub choice: String,
}

// -- Data-PSM delete operations ---------------------------------------------

/// Delete a class that is not currently a schema root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmDeleteClass {
    #[serde(rename = "dataPsmClass")]
    pub class: String,
}

/// Delete an attribute from its owner class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmDeleteAttribute {
    #[serde(rename = "dataPsmOwner")]
    pub owner: String,
    #[serde(rename = "dataPsmAttribute")]
    pub attribute: String,
}

/// Delete an association end from its owner class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmDeleteAssociationEnd {
    #[serde(rename = "dataPsmOwner")]
    pub owner: String,
    #[serde(rename = "dataPsmAssociationEnd")]
    pub association_end: String,
}

/// Delete an include from its owner class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmDeleteInclude {
    #[serde(rename = "dataPsmOwner")]
    pub owner: String,
    #[serde(rename = "dataPsmInclude")]
    pub include: String,
}

/// Delete an or node that is not currently a schema root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPsmDeleteOr {
    #[serde(rename = "dataPsmOr")]
    pub or: String,
}

// -- PIM operations ----------------------------------------------------------

/// Create an empty conceptual schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimCreateSchema {
    #[serde(rename = "pimHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,
    #[serde(
        rename = "pimHumanDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_description: Option<LanguageString>,
}

/// Create a conceptual class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimCreateClass {
    #[serde(rename = "pimInterpretation", skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    #[serde(rename = "pimHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,
}

/// Create a conceptual attribute owned by a class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimCreateAttribute {
    #[serde(rename = "pimOwnerClass")]
    pub owner_class: String,
    #[serde(rename = "pimDatatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(rename = "pimCardinalityMin", skip_serializing_if = "Option::is_none")]
    pub cardinality_min: Option<u32>,
    #[serde(rename = "pimCardinalityMax", skip_serializing_if = "Option::is_none")]
    pub cardinality_max: Option<u32>,
}

/// Replace a conceptual attribute's datatype
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimSetDatatype {
    #[serde(rename = "pimAttribute")]
    pub attribute: String,
    #[serde(rename = "pimDatatype", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

/// Replace a conceptual resource's human label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimSetHumanLabel {
    #[serde(rename = "pimResource")]
    pub resource: String,
    #[serde(rename = "pimHumanLabel", skip_serializing_if = "Option::is_none")]
    pub human_label: Option<LanguageString>,
}

/// Mark a conceptual class as a codelist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PimSetCodelist {
    #[serde(rename = "pimClass")]
    pub class: String,
    #[serde(rename = "pimIsCodelist")]
    pub is_codelist: bool,
    #[serde(rename = "pimCodelistUrl", default)]
    pub codelist_url: Vec<String>,
}

// -- The closed operation enum -----------------------------------------------

macro_rules! operations {
    ($( $tag:literal => $variant:ident, )+) => {
        /// Closed set of mutation operations, dispatched exhaustively.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Operation {
            $( $variant($variant), )+
        }

        impl Operation {
            /// The wire type tag for this operation
            pub fn wire_type(&self) -> &'static str {
                match self {
                    $( Operation::$variant(_) => $tag, )+
                }
            }

            fn fields_json(&self) -> serde_json::Result<Value> {
                match self {
                    $( Operation::$variant(op) => serde_json::to_value(op), )+
                }
            }

            fn from_tag(
                tag: &str,
                fields: Value,
            ) -> Result<Option<Operation>, OperationParseError> {
                let op = match tag {
                    $( $tag => Operation::$variant(serde_json::from_value(fields)?), )+
                    _ => return Ok(None),
                };
                Ok(Some(op))
            }
        }

        $(
            impl From<$variant> for Operation {
                fn from(op: $variant) -> Self {
                    Operation::$variant(op)
                }
            }
        )+
    };
}

operations! {
    "data-psm-action-create-schema" => DataPsmCreateSchema,
    "data-psm-action-create-class" => DataPsmCreateClass,
    "data-psm-action-create-attribute" => DataPsmCreateAttribute,
    "data-psm-action-create-association-end" => DataPsmCreateAssociationEnd,
    "data-psm-action-create-class-reference" => DataPsmCreateClassReference,
    "data-psm-action-create-include" => DataPsmCreateInclude,
    "data-psm-action-create-or" => DataPsmCreateOr,
    "data-psm-action-set-human-label" => DataPsmSetHumanLabel,
    "data-psm-action-set-human-description" => DataPsmSetHumanDescription,
    "data-psm-action-set-technical-label" => DataPsmSetTechnicalLabel,
    "data-psm-action-set-datatype" => DataPsmSetDatatype,
    "data-psm-action-set-cardinality" => DataPsmSetCardinality,
    "data-psm-action-set-regex" => DataPsmSetRegex,
    "data-psm-action-set-example" => DataPsmSetExample,
    "data-psm-action-set-roots" => DataPsmSetRoots,
    "data-psm-action-set-order" => DataPsmSetOrder,
    "data-psm-action-set-extends" => DataPsmSetExtends,
    "data-psm-action-add-choice" => DataPsmAddChoice,
    "data-psm-action-remove-choice" => DataPsmRemoveChoice,
    "data-psm-action-delete-class" => DataPsmDeleteClass,
    "data-psm-action-delete-attribute" => DataPsmDeleteAttribute,
    "data-psm-action-delete-association-end" => DataPsmDeleteAssociationEnd,
    "data-psm-action-delete-include" => DataPsmDeleteInclude,
    "data-psm-action-delete-or" => DataPsmDeleteOr,
    "pim-action-create-schema" => PimCreateSchema,
    "pim-action-create-class" => PimCreateClass,
    "pim-action-create-attribute" => PimCreateAttribute,
    "pim-action-set-datatype" => PimSetDatatype,
    "pim-action-set-human-label" => PimSetHumanLabel,
    "pim-action-set-codelist" => PimSetCodelist,
}

impl Operation {
    /// Serialize to the wire form `{types: [tag], ...fields}`
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let mut map = Map::new();
        map.insert(
            "types".to_string(),
            Value::Array(vec![Value::String(self.wire_type().to_string())]),
        );
        if let Value::Object(fields) = self.fields_json()? {
            for (key, value) in fields {
                map.insert(key, value);
            }
        }
        Ok(Value::Object(map))
    }

    /// Deserialize from the wire form.
    ///
    /// The first recognized tag in `types` selects the operation kind; a
    /// value with no recognized tag is an unknown operation, reported without
    /// touching any store state.
    pub fn from_json(value: Value) -> Result<Operation, OperationParseError> {
        let Value::Object(mut map) = value else {
            return Err(OperationParseError::InvalidOperation(
                "operation must be a JSON object".to_string(),
            ));
        };
        let tags: Vec<String> = match map.remove("types") {
            Some(Value::Array(tags)) => tags
                .into_iter()
                .map(|t| match t {
                    Value::String(s) => Ok(s),
                    other => Err(OperationParseError::InvalidOperation(format!(
                        "non-string entry in `types`: {other}"
                    ))),
                })
                .collect::<Result<_, _>>()?,
            _ => {
                return Err(OperationParseError::InvalidOperation(
                    "missing array field `types`".to_string(),
                ))
            }
        };

        let fields = Value::Object(map);
        for tag in &tags {
            if let Some(op) = Operation::from_tag(tag, fields.clone())? {
                return Ok(op);
            }
        }
        Err(OperationParseError::UnknownOperation(tags.join(", ")))
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Operation::from_json(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_wire_round_trip() {
        let op: Operation = DataPsmSetDatatype {
            attribute: "http://example.com/attr".to_string(),
            datatype: Some("xsd:integer".to_string()),
        }
        .into();

        let wire = op.to_json().unwrap();
        assert_eq!(
            wire,
            json!({
                "types": ["data-psm-action-set-datatype"],
                "dataPsmAttribute": "http://example.com/attr",
                "dataPsmDatatype": "xsd:integer",
            })
        );
        assert_eq!(Operation::from_json(wire).unwrap(), op);
    }

    #[test]
    fn test_unknown_operation_tag() {
        let wire = json!({
            "types": ["vendor-action-frobnicate"],
            "target": "http://example.com/x",
        });
        assert!(matches!(
            Operation::from_json(wire),
            Err(OperationParseError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_non_string_type_tag_is_rejected() {
        let wire = json!({
            "types": ["data-psm-action-set-roots", 7],
            "dataPsmRoots": [],
        });
        assert!(matches!(
            Operation::from_json(wire),
            Err(OperationParseError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_missing_types() {
        assert!(matches!(
            Operation::from_json(json!({"dataPsmRoots": []})),
            Err(OperationParseError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_set_roots_defaults() {
        let op = Operation::from_json(json!({
            "types": ["data-psm-action-set-roots"],
            "dataPsmRoots": ["http://class"],
        }))
        .unwrap();
        assert_eq!(
            op,
            Operation::DataPsmSetRoots(DataPsmSetRoots {
                roots: vec!["http://class".to_string()],
            })
        );
    }
}
