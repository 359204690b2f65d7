use crate::error::{PomgenError, Result};
use crate::scanner::{self, JarEntry};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default marker substring selecting jar entries
pub const DEFAULT_MARKER: &str = ".jar";
/// Default destination for the generated fragment
pub const DEFAULT_OUTPUT: &str = "pom_temp.xml";
/// Default prefix joined with the entry path in the `<systemPath>` field
pub const DEFAULT_PATH_PREFIX: &str = "${basedir}\\lib\\";

/// Configuration for fragment generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory whose entries are scanned
    pub scan_dir: PathBuf,
    /// Literal substring used both as the inclusion filter and as the text
    /// stripped from matched names to derive the group/artifact ids
    pub marker: String,
    /// Value of the `<scope>` field
    pub scope: String,
    /// Value of the `<version>` field
    pub version: String,
    /// Prefix joined with the entry's relative path in `<systemPath>`
    pub path_prefix: String,
    /// Walk subdirectories instead of a single shallow listing
    pub recursive: bool,
    /// Maximum depth for recursive scanning
    pub max_depth: Option<usize>,
    /// Entry names (or relative paths, when recursive) matching these globs
    /// are skipped
    pub exclude: Option<globset::GlobSet>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scan_dir: PathBuf::from("lib"),
            marker: DEFAULT_MARKER.to_string(),
            scope: "system".to_string(),
            version: "1.0".to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            recursive: false,
            max_depth: None,
            exclude: None,
        }
    }
}

/// Removes the first occurrence of `marker` from `file_name`.
///
/// This is literal substring removal, not suffix stripping: a marker
/// appearing mid-name is removed from where it stands.
pub fn stripped_name(file_name: &str, marker: &str) -> String {
    file_name.replacen(marker, "", 1)
}

/// Renders the `<dependency>` block for a single matched entry.
///
/// Pure (entry, config) -> text mapping; performs no I/O. The line layout,
/// tabs, and trailing spaces reproduce the historical fragment format
/// byte for byte.
pub fn render_block(entry: &JarEntry, config: &GeneratorConfig) -> String {
    let id = stripped_name(&entry.file_name, &config.marker);
    let mut block = String::new();
    block.push_str("<dependency> \n");
    let _ = writeln!(block, "\t<groupId>{id}</groupId> ");
    let _ = writeln!(block, "\t<artifactId>{id}</artifactId> ");
    let _ = writeln!(block, "\t<scope>{}</scope> ", config.scope);
    let _ = writeln!(block, "\t<version>{}</version>", config.version);
    let _ = writeln!(
        block,
        "\t<systemPath>{}{}</systemPath> ",
        config.path_prefix, entry.relative_path
    );
    block.push_str("</dependency>\n");
    block
}

/// Concatenates the blocks for `entries` in order. The result is a bare
/// block sequence with no header, footer, or enclosing root element.
pub fn render_fragment(entries: &[JarEntry], config: &GeneratorConfig) -> String {
    entries
        .iter()
        .map(|entry| render_block(entry, config))
        .collect()
}

/// Scans the configured directory for matching entries, in listing order.
///
/// # Errors
///
/// See [`scanner::list_entries`] and [`scanner::walk_entries`].
pub fn scan_entries(config: &GeneratorConfig) -> Result<Vec<JarEntry>> {
    if config.recursive {
        scanner::walk_entries(
            &config.scan_dir,
            &config.marker,
            config.exclude.as_ref(),
            config.max_depth,
        )
    } else {
        scanner::list_entries(&config.scan_dir, &config.marker, config.exclude.as_ref())
    }
}

/// Replaces the file at `path` with `contents`.
///
/// Writes to a temporary file in the destination's directory and renames it
/// into place, so the destination is never observed partially written and
/// the temporary is cleaned up on every exit path.
///
/// # Errors
///
/// Returns `PomgenError::OutputWrite` if the destination's directory is not
/// writable or the rename fails.
pub fn write_fragment(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let output_err = |source: std::io::Error| PomgenError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(output_err)?;
    tmp.write_all(contents.as_bytes()).map_err(output_err)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;
    Ok(())
}

/// End-to-end generation: scan, render, write. Returns the number of blocks
/// emitted. The destination is fully overwritten on every run; an empty match
/// set leaves it existing and zero-length.
///
/// # Errors
///
/// Fails fast on the first scan or write error; nothing is retried.
pub fn generate(output: &Path, config: &GeneratorConfig) -> Result<usize> {
    let entries = scan_entries(config)?;
    let fragment = render_fragment(&entries, config);
    write_fragment(output, &fragment)?;
    Ok(entries.len())
}
