//! Primitive datatype catalog
//!
//! Attribute datatypes are matched against a fixed catalog of well-known
//! IRIs; unmatched IRIs are preserved as opaque custom types rather than
//! rejected. Both the full XSD IRI and the compact `xsd:name` notation are
//! accepted.

use crate::vocab::{xsd, LANG_STRING};
use serde::{Deserialize, Serialize};

/// Well-known primitive datatypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveType {
    String,
    LangString,
    Integer,
    Decimal,
    Double,
    Boolean,
    Date,
    DateTime,
    Time,
    AnyUri,
}

impl PrimitiveType {
    /// Match a datatype IRI against the catalog.
    ///
    /// Returns `None` for IRIs outside the catalog; callers keep those opaque.
    pub fn from_iri(iri: &str) -> Option<Self> {
        let expanded = expand_xsd_prefix(iri);
        match expanded.as_ref() {
            xsd::STRING => Some(PrimitiveType::String),
            LANG_STRING => Some(PrimitiveType::LangString),
            xsd::INTEGER => Some(PrimitiveType::Integer),
            xsd::DECIMAL => Some(PrimitiveType::Decimal),
            xsd::DOUBLE => Some(PrimitiveType::Double),
            xsd::BOOLEAN => Some(PrimitiveType::Boolean),
            xsd::DATE => Some(PrimitiveType::Date),
            xsd::DATE_TIME => Some(PrimitiveType::DateTime),
            xsd::TIME => Some(PrimitiveType::Time),
            xsd::ANY_URI => Some(PrimitiveType::AnyUri),
            _ => None,
        }
    }

    /// The canonical full IRI for this datatype
    pub fn iri(&self) -> &'static str {
        match self {
            PrimitiveType::String => xsd::STRING,
            PrimitiveType::LangString => LANG_STRING,
            PrimitiveType::Integer => xsd::INTEGER,
            PrimitiveType::Decimal => xsd::DECIMAL,
            PrimitiveType::Double => xsd::DOUBLE,
            PrimitiveType::Boolean => xsd::BOOLEAN,
            PrimitiveType::Date => xsd::DATE,
            PrimitiveType::DateTime => xsd::DATE_TIME,
            PrimitiveType::Time => xsd::TIME,
            PrimitiveType::AnyUri => xsd::ANY_URI,
        }
    }
}

/// Expand compact `xsd:name` notation to the full namespace IRI
fn expand_xsd_prefix(iri: &str) -> std::borrow::Cow<'_, str> {
    match iri.strip_prefix(xsd::PREFIX) {
        Some(name) => std::borrow::Cow::Owned(format!("{}{}", xsd::NAMESPACE, name)),
        None => std::borrow::Cow::Borrowed(iri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_full_iri() {
        assert_eq!(
            PrimitiveType::from_iri("http://www.w3.org/2001/XMLSchema#integer"),
            Some(PrimitiveType::Integer)
        );
        assert_eq!(
            PrimitiveType::from_iri("http://www.w3.org/2001/XMLSchema#dateTime"),
            Some(PrimitiveType::DateTime)
        );
    }

    #[test]
    fn test_catalog_compact_notation() {
        assert_eq!(PrimitiveType::from_iri("xsd:integer"), Some(PrimitiveType::Integer));
        assert_eq!(PrimitiveType::from_iri("xsd:string"), Some(PrimitiveType::String));
        assert_eq!(PrimitiveType::from_iri("xsd:anyURI"), Some(PrimitiveType::AnyUri));
    }

    #[test]
    fn test_unmatched_iri_stays_opaque() {
        assert_eq!(PrimitiveType::from_iri("https://example.com/ns#money"), None);
        assert_eq!(PrimitiveType::from_iri("xsd:gYearMonth"), None);
    }

    #[test]
    fn test_iri_round_trip() {
        for dt in [
            PrimitiveType::String,
            PrimitiveType::LangString,
            PrimitiveType::Integer,
            PrimitiveType::Boolean,
            PrimitiveType::Date,
        ] {
            assert_eq!(PrimitiveType::from_iri(dt.iri()), Some(dt));
        }
    }
}
