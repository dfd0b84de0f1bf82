//! Codelist enrichment
//!
//! Whether a class is a codelist lives on the conceptual model, not the
//! structural one. This pass runs after the tree is built: it follows each
//! structural class's interpretation into the conceptual reader and copies
//! the codelist marking over, returning a new tree.

use crate::error::Result;
use crate::model::StructureSchema;
use modelgraph_core::ResourceReader;

/// Copy codelist markings from the conceptual model onto the structure model.
///
/// Classes without an interpretation, or whose interpretation is not a
/// conceptual class, are left as they are.
pub async fn enrich_with_codelists(
    schema: &StructureSchema,
    conceptual: &dyn ResourceReader,
) -> Result<StructureSchema> {
    let mut enriched = schema.clone();
    for class in enriched.classes_mut() {
        let Some(interpretation) = class.interpretation.as_deref() else {
            continue;
        };
        let Some(resource) = conceptual.read_resource(interpretation).await? else {
            continue;
        };
        if let Some(conceptual_class) = resource.as_pim_class() {
            if conceptual_class.is_codelist {
                class.is_codelist = true;
                class.codelist_urls = conceptual_class.codelist_url.clone();
            }
        }
    }
    Ok(enriched)
}
