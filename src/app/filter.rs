use crate::app::error::{CallbackHook, GenerateError, Result};
use crate::app::models::{GeneratorConfig, NamingMode};
use regex::Regex;
use std::path::Path;

/// Compiled exclude patterns.
///
/// Patterns are a light glob dialect: every `*` becomes `.*` and the result
/// is used as an unanchored regular expression. Other characters keep their
/// regex meaning, so `**` behaves exactly like `*` and crosses `/`.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<Regex>,
}

impl ExcludeSet {
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(&glob_to_regex(pattern)).map_err(|source| {
                    GenerateError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(relative_path))
    }
}

fn glob_to_regex(pattern: &str) -> String {
    pattern.replace('*', ".*")
}

/// Whether a file takes part in generation. Exclude patterns win outright;
/// the include callback is only asked about files no pattern matched.
pub fn is_included(
    path: &Path,
    relative_path: &str,
    config: &GeneratorConfig,
    excludes: &ExcludeSet,
) -> Result<bool> {
    if excludes.is_match(relative_path) {
        return Ok(false);
    }

    match &config.mode {
        NamingMode::Callback(callbacks) => match &callbacks.include_fn {
            Some(include_fn) => {
                include_fn(path, relative_path).map_err(|source| GenerateError::Callback {
                    hook: CallbackHook::Include,
                    path: path.display().to_string(),
                    source,
                })
            }
            None => Ok(true),
        },
        NamingMode::Static(_) => Ok(true),
    }
}
