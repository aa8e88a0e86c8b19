use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The root settings structure for the application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data: DataPaths,
}

/// Where the two raw CSV collections live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub matches: PathBuf,
    pub deliveries: PathBuf,
}

/// Loads settings from `crease.toml` (or an explicit file), falling back to
/// the conventional file names in the working directory.
pub fn load_settings(file: Option<&Path>) -> Result<Settings, config::ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("data.matches", "matches.csv")?
        .set_default("data.deliveries", "deliveries.csv")?;

    builder = match file {
        Some(path) => builder.add_source(config::File::from(path.to_path_buf())),
        // The settings file is optional; the defaults above apply without it.
        None => builder.add_source(config::File::with_name("crease").required(false)),
    };

    builder.build()?.try_deserialize::<Settings>()
}
