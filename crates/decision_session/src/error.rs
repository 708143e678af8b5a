use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown policy option: {0}")]
    UnknownPolicy(String),

    #[error("No policy option selected")]
    NoPolicySelected,

    #[error("Simulation already ran for the selected policy")]
    AlreadyRan,

    #[error("Simulation has not been run yet")]
    SimulationNotRun,

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
