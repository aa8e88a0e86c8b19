use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The analysis depends on an optional column the loaded data does not
    /// carry. Distinct from an empty result so the caller can disable the
    /// option instead of rendering a misleading empty table.
    #[error("Analysis requires the '{0}' column, which is absent from the loaded data")]
    MissingColumn(&'static str),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Unknown season: {0}")]
    UnknownSeason(String),
}
