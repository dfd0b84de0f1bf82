//! Create an attribute with optional constraints in one intent

use crate::error::{ComplexError, Result};
use crate::normalize::{normalize_language_string, normalize_string};
use crate::operation::ComplexOperation;
use async_trait::async_trait;
use modelgraph_core::LanguageString;
use modelgraph_federation::FederatedStore;
use modelgraph_ops::operation::{
    DataPsmCreateAttribute, DataPsmSetCardinality, DataPsmSetExample, DataPsmSetHumanLabel,
    DataPsmSetRegex,
};

/// Create an attribute and apply whichever of label, regex, example and
/// cardinality the caller filled in.
///
/// All string inputs are normalized first, so an empty regex from a form
/// never becomes a stored constraint.
#[derive(Debug, Clone, Default)]
pub struct CreateDetailedAttribute {
    pub schema: String,
    /// Owning class IRI
    pub owner: String,
    pub interpretation: Option<String>,
    pub technical_label: Option<String>,
    pub human_label: Option<LanguageString>,
    pub datatype: Option<String>,
    pub regex: Option<String>,
    pub example: Option<String>,
    /// `(min, max)` where a `None` max means unbounded
    pub cardinality: Option<(u32, Option<u32>)>,
}

#[async_trait]
impl ComplexOperation for CreateDetailedAttribute {
    /// IRI of the created attribute
    type Output = String;

    async fn execute(&self, federation: &FederatedStore) -> Result<String> {
        let mut completed = 0;

        let create = DataPsmCreateAttribute {
            owner: self.owner.clone(),
            interpretation: normalize_string(self.interpretation.clone()),
            technical_label: normalize_string(self.technical_label.clone()),
            datatype: normalize_string(self.datatype.clone()),
        };
        let delta = federation
            .apply_operation(&self.schema, &create.into())
            .await
            .map_err(|source| ComplexError::after(completed, source))?;
        completed += 1;
        let attribute_iri = delta.created_iris().remove(0);

        if let Some(label) = normalize_language_string(self.human_label.clone()) {
            federation
                .apply_operation(
                    &self.schema,
                    &DataPsmSetHumanLabel {
                        resource: attribute_iri.clone(),
                        human_label: Some(label),
                    }
                    .into(),
                )
                .await
                .map_err(|source| ComplexError::after(completed, source))?;
            completed += 1;
        }

        if let Some(regex) = normalize_string(self.regex.clone()) {
            federation
                .apply_operation(
                    &self.schema,
                    &DataPsmSetRegex {
                        attribute: attribute_iri.clone(),
                        regex: Some(regex),
                    }
                    .into(),
                )
                .await
                .map_err(|source| ComplexError::after(completed, source))?;
            completed += 1;
        }

        if let Some(example) = normalize_string(self.example.clone()) {
            federation
                .apply_operation(
                    &self.schema,
                    &DataPsmSetExample {
                        attribute: attribute_iri.clone(),
                        example: Some(example),
                    }
                    .into(),
                )
                .await
                .map_err(|source| ComplexError::after(completed, source))?;
            completed += 1;
        }

        if let Some((min, max)) = self.cardinality {
            federation
                .apply_operation(
                    &self.schema,
                    &DataPsmSetCardinality {
                        resource: attribute_iri.clone(),
                        cardinality_min: min,
                        cardinality_max: max,
                    }
                    .into(),
                )
                .await
                .map_err(|source| ComplexError::after(completed, source))?;
        }

        Ok(attribute_iri)
    }
}
