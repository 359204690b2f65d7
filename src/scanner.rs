use crate::error::{PomgenError, Result};
use globset::GlobSet;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A directory entry that matched the marker substring.
///
/// `file_name` is the bare entry name; `relative_path` is the path below the
/// scan directory with `/` separators. In a shallow scan the two are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JarEntry {
    pub file_name: String,
    pub relative_path: String,
}

impl JarEntry {
    fn shallow(file_name: String) -> Self {
        let relative_path = file_name.clone();
        Self {
            file_name,
            relative_path,
        }
    }
}

/// Keeps only the names containing `marker` as a literal substring,
/// preserving the input order. Pure helper behind [`list_entries`].
pub fn filter_matching<I>(names: I, marker: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| name.contains(marker))
        .collect()
}

fn excluded(relative_path: &str, exclude: Option<&GlobSet>) -> bool {
    exclude.is_some_and(|set| set.is_match(relative_path))
}

/// Lists the entries of `dir` (one shallow `read_dir` pass, listing order)
/// whose name contains `marker`. Entries of any kind count - regular files,
/// directories, and symlinks alike. Exclude globs match the entry name.
///
/// # Errors
///
/// - `PomgenError::EmptyMarker` if `marker` is empty.
/// - `PomgenError::DirectoryNotFound` if `dir` does not exist or is not a directory.
/// - `PomgenError::Io` for listing failures.
pub fn list_entries(dir: &Path, marker: &str, exclude: Option<&GlobSet>) -> Result<Vec<JarEntry>> {
    if marker.is_empty() {
        return Err(PomgenError::EmptyMarker);
    }
    if !dir.is_dir() {
        return Err(PomgenError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }

    Ok(filter_matching(names, marker)
        .into_iter()
        .filter(|name| !excluded(name, exclude))
        .map(JarEntry::shallow)
        .collect())
}

/// Recursive variant of [`list_entries`]: walks `dir` up to `max_depth`
/// levels below it. The marker filter applies to the file name, exclude
/// globs to the `/`-joined relative path.
///
/// # Errors
///
/// Same as [`list_entries`], plus `PomgenError::WalkDir` for traversal failures.
pub fn walk_entries(
    dir: &Path,
    marker: &str,
    exclude: Option<&GlobSet>,
    max_depth: Option<usize>,
) -> Result<Vec<JarEntry>> {
    if marker.is_empty() {
        return Err(PomgenError::EmptyMarker);
    }
    if !dir.is_dir() {
        return Err(PomgenError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth.unwrap_or(usize::MAX));

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains(marker) {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        if excluded(&relative_path, exclude) {
            continue;
        }

        entries.push(JarEntry {
            file_name: name,
            relative_path,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::{Glob, GlobSetBuilder};
    use std::fs;
    use tempfile::TempDir;

    fn glob_set(patterns: &[&str]) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for pat in patterns {
            builder.add(Glob::new(pat).unwrap());
        }
        builder.build().unwrap()
    }

    fn names(entries: &[JarEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.file_name.as_str()).collect()
    }

    #[test]
    fn test_filter_matching_order_preserved() {
        let listing = vec![
            "gamma.jar".to_string(),
            "beta.txt".to_string(),
            "alpha.jar".to_string(),
        ];
        let matched = filter_matching(listing, ".jar");
        assert_eq!(matched, vec!["gamma.jar", "alpha.jar"]);
    }

    #[test]
    fn test_filter_matching_infix_not_suffix() {
        // The marker is a literal infix filter, not a suffix check
        let listing = vec!["lib.jar.bak".to_string(), "notes.txt".to_string()];
        let matched = filter_matching(listing, ".jar");
        assert_eq!(matched, vec!["lib.jar.bak"]);
    }

    #[test]
    fn test_filter_matching_no_matches() {
        let listing = vec!["a.txt".to_string(), "b.md".to_string()];
        assert!(filter_matching(listing, ".jar").is_empty());
    }

    #[test]
    fn test_list_entries_basic() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("alpha.jar"), "").unwrap();
        fs::write(temp_dir.path().join("beta.txt"), "").unwrap();
        fs::write(temp_dir.path().join("gamma.jar"), "").unwrap();

        let mut matched = names(&list_entries(temp_dir.path(), ".jar", None).unwrap())
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        matched.sort();
        assert_eq!(matched, vec!["alpha.jar", "gamma.jar"]);
    }

    #[test]
    fn test_list_entries_shallow_paths_equal_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("alpha.jar"), "").unwrap();

        let entries = list_entries(temp_dir.path(), ".jar", None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, entries[0].relative_path);
    }

    #[test]
    fn test_list_entries_any_entry_kind_matches() {
        let temp_dir = TempDir::new().unwrap();
        // A directory whose name contains the marker still counts
        fs::create_dir(temp_dir.path().join("bundle.jar")).unwrap();

        let entries = list_entries(temp_dir.path(), ".jar", None).unwrap();
        assert_eq!(names(&entries), vec!["bundle.jar"]);
    }

    #[test]
    fn test_list_entries_does_not_recurse() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.jar"), "").unwrap();

        let entries = list_entries(temp_dir.path(), ".jar", None).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_list_entries_exclude_glob() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("keep.jar"), "").unwrap();
        fs::write(temp_dir.path().join("keep-sources.jar"), "").unwrap();

        let exclude = glob_set(&["*-sources.jar"]);
        let entries = list_entries(temp_dir.path(), ".jar", Some(&exclude)).unwrap();
        assert_eq!(names(&entries), vec!["keep.jar"]);
    }

    #[test]
    fn test_list_entries_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let result = list_entries(&missing, ".jar", None);
        assert!(matches!(
            result,
            Err(PomgenError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_list_entries_file_as_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();
        let result = list_entries(&file, ".jar", None);
        assert!(matches!(
            result,
            Err(PomgenError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_list_entries_empty_marker() {
        let temp_dir = TempDir::new().unwrap();
        let result = list_entries(temp_dir.path(), "", None);
        assert!(matches!(result, Err(PomgenError::EmptyMarker)));
    }

    #[test]
    fn test_walk_entries_nested() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("top.jar"), "").unwrap();
        let sub = temp_dir.path().join("vendor");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.jar"), "").unwrap();

        let entries = walk_entries(temp_dir.path(), ".jar", None, None).unwrap();
        let mut paths = entries
            .iter()
            .map(|e| e.relative_path.as_str())
            .collect::<Vec<_>>();
        paths.sort();
        assert_eq!(paths, vec!["top.jar", "vendor/deep.jar"]);

        let deep = entries
            .iter()
            .find(|e| e.relative_path == "vendor/deep.jar")
            .unwrap();
        assert_eq!(deep.file_name, "deep.jar");
    }

    #[test]
    fn test_walk_entries_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("top.jar"), "").unwrap();
        let sub = temp_dir.path().join("vendor");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.jar"), "").unwrap();

        let entries = walk_entries(temp_dir.path(), ".jar", None, Some(1)).unwrap();
        assert_eq!(names(&entries), vec!["top.jar"]);
    }

    #[test]
    fn test_walk_entries_exclude_on_relative_path() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("test-libs");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("mock.jar"), "").unwrap();
        fs::write(temp_dir.path().join("real.jar"), "").unwrap();

        let exclude = glob_set(&["test-libs/*"]);
        let entries = walk_entries(temp_dir.path(), ".jar", Some(&exclude), None).unwrap();
        assert_eq!(names(&entries), vec!["real.jar"]);
    }
}
