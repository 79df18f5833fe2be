//! Identifier and value derivation for assets.
//!
//! Static mode turns a file or directory name into an identifier in four
//! steps:
//! - take the final path component, optionally drop its extension
//! - replace anything outside `[A-Za-z0-9_]` with `_`
//! - split on `_` and re-join according to the case convention
//! - prepend the configured prefix untouched
//!
//! `my-icon.svg` → `myIcon` (camelCase), `MyIcon` (PascalCase),
//! `my_icon` (snake_case).

use crate::app::error::{CallbackHook, GenerateError, Result};
use crate::app::models::{GeneratorConfig, NamingMode, NamingStrategy, StaticNaming};
use std::path::Path;

/// Identifier for `path` (a file path or a single directory segment).
pub fn name_for(path: &Path, relative_path: &str, config: &GeneratorConfig) -> Result<String> {
    match &config.mode {
        NamingMode::Static(naming) => Ok(static_name(&final_component(path), naming)),
        NamingMode::Callback(callbacks) => {
            (callbacks.name_fn)(path, relative_path).map_err(|source| GenerateError::Callback {
                hook: CallbackHook::Name,
                path: path.display().to_string(),
                source,
            })
        }
    }
}

/// Value bound to a file's identifier. Defaults to the root-absolute URL path.
pub fn value_for(path: &Path, relative_path: &str, config: &GeneratorConfig) -> Result<String> {
    if let NamingMode::Callback(callbacks) = &config.mode {
        if let Some(value_fn) = &callbacks.value_fn {
            return value_fn(path, relative_path).map_err(|source| GenerateError::Callback {
                hook: CallbackHook::Value,
                path: path.display().to_string(),
                source,
            });
        }
    }
    Ok(format!("/{}", relative_path))
}

pub fn static_name(name: &str, naming: &StaticNaming) -> String {
    let stem = if naming.include_extensions {
        name
    } else {
        strip_extension(name)
    };

    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    let cased = match naming.strategy {
        NamingStrategy::CamelCase => sanitized
            .split('_')
            .enumerate()
            .map(|(i, part)| if i == 0 { part.to_lowercase() } else { capitalize(part) })
            .collect::<String>(),
        NamingStrategy::PascalCase => sanitized.split('_').map(capitalize).collect(),
        NamingStrategy::SnakeCase => sanitized.to_lowercase(),
    };

    if naming.variable_prefix.is_empty() {
        cased
    } else {
        format!("{}{}", naming.variable_prefix, cased)
    }
}

/// Drops the last `.ext`. A trailing dot is not an extension.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn final_component(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
