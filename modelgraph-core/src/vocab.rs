//! Vocabulary constants for the modelgraph ecosystem
//!
//! Centralizes the resource type tags and common datatype IRIs used
//! throughout the workspace.
//!
//! # Organization
//!
//! - `data_psm` - type tags for platform-specific (structural) resources
//! - `pim` - type tags for platform-independent (conceptual) resources
//! - `xsd` - XSD datatype IRIs (http://www.w3.org/2001/XMLSchema#)

/// Data-PSM resource type tags
pub mod data_psm {
    /// Schema root resource
    pub const SCHEMA: &str = "data-psm-schema";

    /// Structural class
    pub const CLASS: &str = "data-psm-class";

    /// Attribute (primitive-valued property)
    pub const ATTRIBUTE: &str = "data-psm-attribute";

    /// Association end (class-valued property)
    pub const ASSOCIATION_END: &str = "data-psm-association-end";

    /// Reference to a class owned by another schema
    pub const CLASS_REFERENCE: &str = "data-psm-class-reference";

    /// Splice of another class's properties into the owning context
    pub const INCLUDE: &str = "data-psm-include";

    /// Alternative sub-structures (tagged union at the model level)
    pub const OR: &str = "data-psm-or";
}

/// PIM resource type tags
pub mod pim {
    /// Conceptual schema
    pub const SCHEMA: &str = "pim-schema";

    /// Conceptual class
    pub const CLASS: &str = "pim-class";

    /// Conceptual attribute
    pub const ATTRIBUTE: &str = "pim-attribute";
}

/// XSD datatype IRIs
pub mod xsd {
    /// XSD namespace prefix used in compact `xsd:name` notation
    pub const PREFIX: &str = "xsd:";

    /// XSD namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:time
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";

    /// xsd:anyURI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// rdf:langString IRI (language-tagged text)
pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
