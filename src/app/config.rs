use crate::app::cli::Cli;
use crate::app::models::{GeneratorConfig, NamingStrategy, StaticNaming};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT_DIR: &str = "assets";
pub const DEFAULT_OUTPUT_TARGET: &str = "src/assets.ts";

const LOCAL_CONFIG_FILES: [&str; 2] = ["assetgen.toml", "assetgen.json"];

/// On-disk configuration. Every key is optional; missing keys fall back to
/// the defaults above.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
struct FileConfig {
    root_dir: Option<PathBuf>,
    output_target: Option<PathBuf>,
    exclude_patterns: Option<Vec<String>>,
    group_by_directory: Option<bool>,
    naming_strategy: Option<NamingStrategy>,
    include_extensions_in_names: Option<bool>,
    variable_prefix: Option<String>,
}

/// Picks the config file: `--config` > local file in `cwd` > `~/.config/assetgen/config.toml`.
fn find_config_file(explicit: Option<&Path>, cwd: &Path, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(cwd.join(path));
    }

    if let Some(local) = LOCAL_CONFIG_FILES
        .iter()
        .map(|name| cwd.join(name))
        .find(|path| path.is_file())
    {
        return Some(local);
    }

    home.map(|home| home.join(".config").join("assetgen").join("config.toml"))
        .filter(|path| path.is_file())
}

fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {:?}", path))?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let parsed: FileConfig = if is_json {
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?
    } else {
        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?
    };

    Ok(parsed)
}

/// A broken config file is not fatal: it is reported and the defaults apply.
fn read_file_config(path: Option<&Path>) -> FileConfig {
    let Some(path) = path else {
        log::debug!("No config file found, using defaults");
        return FileConfig::default();
    };

    match load_config_file(path) {
        Ok(config) => {
            log::info!("Using config {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("{:#}; falling back to the default configuration", err);
            FileConfig::default()
        }
    }
}

fn merge_vecs(file_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = file_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// Reads a `--x` / `--no-x` flag pair. `None` when neither was given.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// The config file a CLI run reads, if any.
pub fn config_file_path(cli: &Cli, cwd: &Path) -> Option<PathBuf> {
    find_config_file(cli.config.as_deref(), cwd, dirs::home_dir())
}

/// Builds the static-mode configuration for a CLI run. Relative paths are
/// resolved against `cwd`. The config file is read again on every call.
pub fn resolve_config(cli: &Cli, cwd: &Path) -> GeneratorConfig {
    let path = config_file_path(cli, cwd);
    let file = read_file_config(path.as_deref());

    let root_dir = cli
        .root_dir
        .clone()
        .or(file.root_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT_DIR));
    let output_target = cli
        .output
        .clone()
        .or(file.output_target)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_TARGET));

    let naming = StaticNaming {
        strategy: cli.naming.or(file.naming_strategy).unwrap_or_default(),
        include_extensions: flag_pair(cli.include_extensions, cli.no_include_extensions)
            .or(file.include_extensions_in_names)
            .unwrap_or(false),
        variable_prefix: cli.prefix.clone().or(file.variable_prefix).unwrap_or_default(),
    };

    GeneratorConfig::new(cwd.join(root_dir), cwd.join(output_target))
        .with_excludes(merge_vecs(file.exclude_patterns, cli.exclude.clone()))
        .with_grouping(
            flag_pair(cli.no_flat, cli.flat)
                .or(file.group_by_directory)
                .unwrap_or(true),
        )
        .with_static(naming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::NamingMode;
    use tempfile::TempDir;

    fn static_naming(config: &GeneratorConfig) -> &StaticNaming {
        match &config.mode {
            NamingMode::Static(naming) => naming,
            NamingMode::Callback(_) => panic!("config files always give static mode"),
        }
    }

    fn cli_with_config(path: &Path) -> Cli {
        Cli {
            config: Some(path.to_path_buf()),
            ..Cli::default()
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let config = resolve_config(&cli_with_config(&missing), dir.path());

        assert_eq!(config.root_dir, dir.path().join(DEFAULT_ROOT_DIR));
        assert_eq!(config.output_target, dir.path().join(DEFAULT_OUTPUT_TARGET));
        assert!(config.exclude_patterns.is_empty());
        assert!(config.group_by_directory);
        assert_eq!(static_naming(&config), &StaticNaming::default());
    }

    #[test]
    fn test_toml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assetgen.toml");
        fs::write(
            &path,
            r#"
rootDir = "public"
outputTarget = "src/generated/assets.ts"
excludePatterns = ["*.map"]
groupByDirectory = false
namingStrategy = "snake_case"
includeExtensionsInNames = true
variablePrefix = "asset_"
"#,
        )
        .unwrap();

        let config = resolve_config(&Cli::default(), dir.path());
        assert_eq!(config.root_dir, dir.path().join("public"));
        assert_eq!(config.output_target, dir.path().join("src/generated/assets.ts"));
        assert_eq!(config.exclude_patterns, ["*.map"]);
        assert!(!config.group_by_directory);
        let naming = static_naming(&config);
        assert_eq!(naming.strategy, NamingStrategy::SnakeCase);
        assert!(naming.include_extensions);
        assert_eq!(naming.variable_prefix, "asset_");
    }

    #[test]
    fn test_json_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assetgen.json");
        fs::write(&path, r#"{ "namingStrategy": "PascalCase", "somethingElse": 1 }"#).unwrap();

        let config = resolve_config(&Cli::default(), dir.path());
        assert_eq!(static_naming(&config).strategy, NamingStrategy::PascalCase);
        assert!(config.group_by_directory);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "rootDir = [").unwrap();

        let config = resolve_config(&cli_with_config(&path), dir.path());
        assert_eq!(config.root_dir, dir.path().join(DEFAULT_ROOT_DIR));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assetgen.toml");
        fs::write(
            &path,
            "rootDir = \"public\"\nexcludePatterns = [\"*.map\", \"*.tmp\"]\nvariablePrefix = \"f_\"\n",
        )
        .unwrap();

        let cli = Cli {
            root_dir: Some(PathBuf::from("/abs/static")),
            exclude: Some(vec!["*.tmp".into(), "drafts/*".into()]),
            flat: true,
            naming: Some(NamingStrategy::PascalCase),
            prefix: Some("C_".into()),
            ..Cli::default()
        };
        let config = resolve_config(&cli, dir.path());

        assert_eq!(config.root_dir, PathBuf::from("/abs/static"));
        assert_eq!(config.exclude_patterns, ["*.map", "*.tmp", "drafts/*"]);
        assert!(!config.group_by_directory);
        let naming = static_naming(&config);
        assert_eq!(naming.strategy, NamingStrategy::PascalCase);
        assert_eq!(naming.variable_prefix, "C_");
    }

    #[test]
    fn test_negated_flags_undo_file_settings() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("assetgen.toml"),
            "groupByDirectory = false\nincludeExtensionsInNames = true\n",
        )
        .unwrap();

        let config = resolve_config(&Cli::default(), dir.path());
        assert!(!config.group_by_directory);
        assert!(static_naming(&config).include_extensions);

        let cli = Cli {
            no_flat: true,
            no_include_extensions: true,
            ..Cli::default()
        };
        let config = resolve_config(&cli, dir.path());
        assert!(config.group_by_directory);
        assert!(!static_naming(&config).include_extensions);
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("assetgen.toml"), "").unwrap();
        fs::write(dir.path().join("assetgen.json"), "{}").unwrap();

        let found = find_config_file(None, dir.path(), None);
        assert_eq!(found, Some(dir.path().join("assetgen.toml")));
    }

    #[test]
    fn test_find_config_in_home() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        assert_eq!(find_config_file(None, cwd.path(), Some(home.path().to_path_buf())), None);

        let global = home.path().join(".config/assetgen/config.toml");
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(&global, "").unwrap();
        assert_eq!(
            find_config_file(None, cwd.path(), Some(home.path().to_path_buf())),
            Some(global)
        );
    }
}
