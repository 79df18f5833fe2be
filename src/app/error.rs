use std::fmt;
use thiserror::Error;

/// Which user-supplied hook failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackHook {
    Name,
    Value,
    Include,
}

impl fmt::Display for CallbackHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Value => "value",
            Self::Include => "include",
        };
        f.write_str(s)
    }
}

/// Failures of a single generation run. Any of these aborts the run before
/// output is produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid exclude pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("The {hook} callback failed for `{path}`")]
    Callback {
        hook: CallbackHook,
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
