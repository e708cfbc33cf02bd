use std::path::PathBuf;

use thiserror::Error;

/// Failures at the loading boundary. Engine computations themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: invalid selection {value:?}")]
    InvalidSelection { line: usize, value: String },

    #[error("game {game_id} references unknown team {team_id}")]
    UnknownTeam { game_id: String, team_id: String },

    #[error("team {0} appears more than once in the catalog")]
    DuplicateTeam(String),
}

pub type Result<T> = std::result::Result<T, Error>;
