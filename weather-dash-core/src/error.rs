use std::io;
use std::path::PathBuf;

use crate::model::CityId;

/// Why a favorite toggle was aborted
///
/// An aborted toggle dispatches nothing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("no current weather loaded for city {0}")]
    MissingSnapshot(CityId),
}

#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed data contains no cities")]
    Empty,
}
