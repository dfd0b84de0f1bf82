//! Operation results
//!
//! An executor returns the full post-state of every resource it touched
//! rather than a patch. The store applies a delta atomically: either all of
//! its entries land or none do.

use modelgraph_core::Resource;
use std::collections::{BTreeMap, BTreeSet};

/// The effect of a single successfully executed operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationDelta {
    /// Freshly minted resources, keyed by IRI
    pub created: BTreeMap<String, Resource>,
    /// Existing resources with replaced content, keyed by IRI
    pub changed: BTreeMap<String, Resource>,
    /// Removed resource IRIs
    pub deleted: BTreeSet<String>,
}

impl OperationDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(mut self, resource: Resource) -> Self {
        debug_assert!(
            !self.changed.contains_key(&resource.iri) && !self.deleted.contains(&resource.iri),
            "delta sections must be disjoint"
        );
        self.created.insert(resource.iri.clone(), resource);
        self
    }

    pub fn change(mut self, resource: Resource) -> Self {
        debug_assert!(
            !self.created.contains_key(&resource.iri) && !self.deleted.contains(&resource.iri),
            "delta sections must be disjoint"
        );
        self.changed.insert(resource.iri.clone(), resource);
        self
    }

    pub fn delete(mut self, iri: impl Into<String>) -> Self {
        let iri = iri.into();
        debug_assert!(
            !self.created.contains_key(&iri) && !self.changed.contains_key(&iri),
            "delta sections must be disjoint"
        );
        self.deleted.insert(iri);
        self
    }

    /// IRIs of resources created by this delta, in deterministic order
    pub fn created_iris(&self) -> Vec<String> {
        self.created.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.changed.is_empty() && self.deleted.is_empty()
    }
}
