//! Folds a file list into an [`AssetGroup`] and renders it.

use crate::app::error::Result;
use crate::app::filter::{is_included, ExcludeSet};
use crate::app::formatter::CodeEmitter;
use crate::app::models::GeneratorConfig;
use crate::app::naming::{name_for, value_for};
use crate::app::paths::relativize;
use crate::app::tree::AssetGroup;
use std::path::{Path, PathBuf};

/// Builds the asset tree for one run. Later files overwrite earlier ones that
/// land on the same identifier at the same level.
///
/// Exclude patterns are compiled once the first file reaches the filter, so
/// an empty file list never fails.
pub fn build_tree(files: &[PathBuf], config: &GeneratorConfig) -> Result<AssetGroup> {
    let mut root = AssetGroup::new();
    if files.is_empty() {
        return Ok(root);
    }

    let excludes = ExcludeSet::compile(&config.exclude_patterns)?;

    for path in files {
        let relative_path = relativize(path, &config.root_dir);
        if !is_included(path, &relative_path, config, &excludes)? {
            continue;
        }

        let mut segments: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();
        // the leaf name comes from the full path below
        segments.pop();

        let dirs = if config.group_by_directory {
            segments
                .iter()
                .map(|segment| name_for(Path::new(segment), segment, config))
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        let id = name_for(path, &relative_path, config)?;
        let value = value_for(path, &relative_path, config)?;
        root.insert(&dirs, id, value);
    }

    Ok(root)
}

/// Runs the whole pipeline: file list in, generated source text out.
pub fn generate(files: &[PathBuf], config: &GeneratorConfig) -> Result<String> {
    let tree = build_tree(files, config)?;
    Ok(CodeEmitter::render(&tree))
}
