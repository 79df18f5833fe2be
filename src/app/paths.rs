use pathdiff::diff_paths;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Expresses `file_path` relative to `root_dir`, using `/` as separator.
///
/// A relative `file_path` is taken to be relative to the root already, so
/// feeding the result back in returns it unchanged. Files outside the root
/// come back with a leading `../`.
pub fn relativize(file_path: &Path, root_dir: &Path) -> String {
    let root = absolutize(root_dir);
    let file = if file_path.is_absolute() {
        normalize(file_path)
    } else {
        normalize(&root.join(file_path))
    };

    let relative = diff_paths(&file, &root).unwrap_or(file);
    to_slash(&relative)
}

/// Resolves `path` against the current directory and collapses dot segments.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    match env::current_dir() {
        Ok(cwd) => normalize(&cwd.join(path)),
        Err(_) => normalize(path),
    }
}

/// Lexical normalization: drops `.`, folds `..` into its parent. A `..` at
/// the filesystem root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
