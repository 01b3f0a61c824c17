use std::path::PathBuf;

use crate::domain::constants::USAGE;

#[derive(thiserror::Error, Debug)]
pub enum BriefError {
    #[error("{}", USAGE)]
    Usage,
    #[error("failed to read input {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input is not valid JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("Invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),
}
