//! # pomgen
//!
//! A library and CLI tool for generating Maven `<dependency>` declarations
//! from the jars sitting in a project's `lib/` directory. Scans a directory
//! for entries whose name contains a marker substring (`.jar` by default)
//! and writes one system-scope dependency block per match into a pom
//! fragment file, fully overwriting it on each run.
//!
//! ## Features
//!
//! - One shallow directory listing, filtered by a literal marker substring
//! - Optional recursive scanning with depth limits and glob excludes
//! - Pure, I/O-free block rendering for easy testing
//! - Atomic output: the fragment is replaced via temp-file-and-rename
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use pomgen::{GeneratorConfig, generate};
//! use std::path::Path;
//!
//! let config = GeneratorConfig::default();
//! match generate(Path::new("pom_temp.xml"), &config) {
//!     Ok(count) => println!("{count} dependency blocks written"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Scan ./lib and write pom_temp.xml
//! pomgen
//!
//! # Scan a different directory, recursively
//! pomgen vendor/jars --recursive
//!
//! # See what would be emitted without writing
//! pomgen --dry-run
//! ```

pub mod emit;
pub mod error;
pub mod scanner;

// Re-export main types and functions for convenience
pub use emit::{
    DEFAULT_MARKER, DEFAULT_OUTPUT, DEFAULT_PATH_PREFIX, GeneratorConfig, generate, render_block,
    render_fragment, scan_entries, stripped_name, write_fragment,
};
pub use error::{PomgenError, Result};
pub use scanner::{JarEntry, filter_matching, list_entries, walk_entries};
