use crate::error::{Result, SessionError};
use std::{env, path::PathBuf};

const ENV_TRACE_OUTPUT_DIR: &str = "DECISION_TRACE_OUTPUT_DIR";
const DEFAULT_TRACE_DIR: &str = "trace";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(output_dir) = env::var(ENV_TRACE_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            let path = PathBuf::from(output_dir);

            if path.exists() && !path.is_dir() {
                return Err(SessionError::InvalidConfiguration(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            config.output_dir = Some(path);
        } else {
            config.output_dir = Some(PathBuf::from(DEFAULT_TRACE_DIR));
        }
        Ok(config)
    }
}
