use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Case convention applied to identifiers in static mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
pub enum NamingStrategy {
    #[default]
    #[serde(rename = "camelCase")]
    #[value(name = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    #[value(name = "PascalCase")]
    PascalCase,
    #[serde(rename = "snake_case")]
    #[value(name = "snake_case")]
    SnakeCase,
}

/// Fixed-rule naming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticNaming {
    pub strategy: NamingStrategy,
    pub include_extensions: bool,
    pub variable_prefix: String,
}

/// Hook receiving `(path, relative_path)`.
pub type PathFn<T> = Arc<dyn Fn(&Path, &str) -> anyhow::Result<T> + Send + Sync>;

/// User-supplied naming, value, and inclusion functions.
#[derive(Clone)]
pub struct Callbacks {
    pub name_fn: PathFn<String>,
    pub value_fn: Option<PathFn<String>>,
    pub include_fn: Option<PathFn<bool>>,
}

impl Callbacks {
    pub fn new<F>(name_fn: F) -> Self
    where
        F: Fn(&Path, &str) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Self {
            name_fn: Arc::new(name_fn),
            value_fn: None,
            include_fn: None,
        }
    }

    pub fn with_value<F>(mut self, value_fn: F) -> Self
    where
        F: Fn(&Path, &str) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.value_fn = Some(Arc::new(value_fn));
        self
    }

    pub fn with_include<F>(mut self, include_fn: F) -> Self
    where
        F: Fn(&Path, &str) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        self.include_fn = Some(Arc::new(include_fn));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("value_fn", &self.value_fn.is_some())
            .field("include_fn", &self.include_fn.is_some())
            .finish_non_exhaustive()
    }
}

/// How identifiers, values, and inclusion are decided. Fixed when the
/// configuration is built.
#[derive(Debug, Clone)]
pub enum NamingMode {
    Static(StaticNaming),
    Callback(Callbacks),
}

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub root_dir: PathBuf,
    pub output_target: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub group_by_directory: bool,
    pub mode: NamingMode,
}

impl GeneratorConfig {
    /// Static-mode configuration with default naming and grouping enabled.
    pub fn new(root_dir: impl Into<PathBuf>, output_target: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            output_target: output_target.into(),
            exclude_patterns: Vec::new(),
            group_by_directory: true,
            mode: NamingMode::Static(StaticNaming::default()),
        }
    }

    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_grouping(mut self, group_by_directory: bool) -> Self {
        self.group_by_directory = group_by_directory;
        self
    }

    pub fn with_static(mut self, naming: StaticNaming) -> Self {
        self.mode = NamingMode::Static(naming);
        self
    }

    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.mode = NamingMode::Callback(callbacks);
        self
    }
}
