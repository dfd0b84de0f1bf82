//! The derived structure model
//!
//! Classes live in an arena owned by the schema and reference each other by
//! [`ClassId`], so inheritance and association back-edges need no reference
//! counting and the whole model is plain `Clone` data.

use modelgraph_core::{LanguageString, PrimitiveType};

/// Index of a class in its schema's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub(crate) usize);

/// The root of one derived model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureSchema {
    pub iri: String,
    pub human_label: Option<LanguageString>,
    pub human_description: Option<LanguageString>,
    pub technical_label: Option<String>,
    /// Entry points in declaration order; a choice at the schema root
    /// flattens to one entry per alternative
    pub roots: Vec<ClassId>,
    classes: Vec<StructureClass>,
}

impl StructureSchema {
    pub fn class(&self, id: ClassId) -> &StructureClass {
        &self.classes[id.0]
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &StructureClass)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, class)| (ClassId(index), class))
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub(crate) fn reserve_class(&mut self) -> ClassId {
        self.classes.push(StructureClass::default());
        ClassId(self.classes.len() - 1)
    }

    pub(crate) fn class_mut(&mut self, id: ClassId) -> &mut StructureClass {
        &mut self.classes[id.0]
    }

    pub(crate) fn classes_mut(&mut self) -> impl Iterator<Item = &mut StructureClass> {
        self.classes.iter_mut()
    }
}

/// One class in the derived model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureClass {
    pub iri: String,
    /// IRI of the conceptual class this one interprets
    pub interpretation: Option<String>,
    /// Origin specification when the class entered the model through a
    /// cross-schema reference
    pub specification: Option<String>,
    pub technical_label: Option<String>,
    pub human_label: Option<LanguageString>,
    pub human_description: Option<LanguageString>,
    /// Parents by identity, not ownership
    pub extends: Vec<ClassId>,
    /// Declaration order; never re-sorted
    pub properties: Vec<StructureProperty>,
    pub is_codelist: bool,
    pub codelist_urls: Vec<String>,
}

/// One attribute or association of a class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureProperty {
    pub iri: String,
    pub technical_label: Option<String>,
    pub human_label: Option<LanguageString>,
    pub human_description: Option<LanguageString>,
    pub cardinality: Cardinality,
    /// Alternatives for this property's value; a choice target contributes
    /// one entry per alternative
    pub types: Vec<StructureType>,
    pub regex: Option<String>,
    pub example: Option<String>,
}

/// Value range of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub min: u32,
    /// `None` means unbounded
    pub max: Option<u32>,
}

impl Default for Cardinality {
    /// Optional single value
    fn default() -> Self {
        Cardinality { min: 0, max: Some(1) }
    }
}

/// One alternative for a property's value.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureType {
    /// A well-known datatype
    Primitive(PrimitiveType),
    /// A datatype IRI outside the known catalog, preserved verbatim
    Custom(String),
    /// An association to another class in the same model
    Class(ClassId),
}
