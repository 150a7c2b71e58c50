use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read script {}: {source}", path.display())]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no script named `{0}` in the scripts directory")]
    ScriptNotFound(String),

    #[error("script parse error: {0}")]
    Parse(#[from] rhai::ParseError),

    #[error("script error: {0}")]
    Eval(#[from] Box<rhai::EvalAltResult>),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("editor session lock poisoned")]
    SessionPoisoned,

    #[error("{0}")]
    Usage(String),
}
