use catalog::CatalogError;
use core_types::{AnalysisKind, Category};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    /// The requested `(category, analysis)` pair is not in the catalog.
    /// Surfaced explicitly, never coerced to an empty result.
    #[error("'{analysis}' is not an analysis under '{category}'")]
    UnknownSelection {
        category: Category,
        analysis: AnalysisKind,
    },

    #[error("Analysis requires the '{0}' parameter")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
