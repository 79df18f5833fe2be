use crate::app::models::GeneratorConfig;
use crate::app::paths::absolutize;
use ignore::WalkBuilder;
use std::env;
use std::path::{Path, PathBuf};

/// Lists every file under the asset root.
pub struct Scanner {
    root: PathBuf,
    output_target: PathBuf,
}

impl Scanner {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            root: resolve(&config.root_dir),
            output_target: resolve(&config.output_target),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_target(&self) -> &Path {
        &self.output_target
    }

    /// Absolute paths of all files below the root, sorted. Hidden and
    /// git-ignored files are listed too. The generated file and `.git` are
    /// skipped.
    pub fn scan(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            log::warn!("Asset directory {} does not exist", self.root.display());
            return Vec::new();
        }

        let mut files = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|t| t.is_file());
                    if is_file && entry.path() != self.output_target {
                        files.push(entry.into_path());
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        // walk order is platform dependent
        files.sort();
        log::debug!("Found {} files under {}", files.len(), self.root.display());
        files
    }
}

/// Like [`absolutize`], but reports when the current directory is unusable
/// and the path has to stay relative.
fn resolve(path: &Path) -> PathBuf {
    if path.is_relative() {
        if let Err(err) = env::current_dir() {
            log::warn!(
                "Cannot resolve {} against the current directory: {}",
                path.display(),
                err
            );
        }
    }
    absolutize(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lists_files_only() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("assets");
        fs::create_dir_all(root.join("images/ui")).unwrap();
        fs::write(root.join("images/ui/close.svg"), "<svg/>").unwrap();
        fs::write(root.join("logo.png"), [0u8; 4]).unwrap();
        fs::write(root.join(".hidden"), "").unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/HEAD"), "ref").unwrap();

        let scanner = Scanner::new(&GeneratorConfig::new(&root, dir.path().join("out.ts")));
        let files = scanner.scan();

        assert_eq!(
            files,
            vec![
                root.join(".hidden"),
                root.join("images/ui/close.svg"),
                root.join("logo.png"),
            ]
        );
    }

    #[test]
    fn test_skips_output_inside_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.png"), "").unwrap();
        fs::write(dir.path().join("assets.ts"), "").unwrap();

        let config = GeneratorConfig::new(dir.path(), dir.path().join("assets.ts"));
        assert_eq!(Scanner::new(&config).scan(), vec![dir.path().join("a.png")]);
    }

    #[test]
    fn test_relative_paths_resolve_against_cwd() {
        let cwd = env::current_dir().unwrap();
        let scanner = Scanner::new(&GeneratorConfig::new("assets/../static", "src/assets.ts"));
        assert_eq!(scanner.root(), cwd.join("static"));
        assert_eq!(scanner.output_target(), cwd.join("src/assets.ts"));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new(dir.path().join("nope"), dir.path().join("out.ts"));
        assert!(Scanner::new(&config).scan().is_empty());
    }
}
