use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    /// Covers file I/O, missing required columns, and non-numeric values in
    /// numeric columns. All of these are fatal before any analysis runs.
    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Delivery data carries neither a 'batter' nor a 'batsman' column")]
    MissingBatterColumn,
}
