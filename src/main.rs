use clap::{Parser, ValueEnum};
use globset::{Glob, GlobSetBuilder};
use pomgen::{
    DEFAULT_MARKER, DEFAULT_OUTPUT, DEFAULT_PATH_PREFIX, GeneratorConfig, JarEntry, Result,
    scan_entries, stripped_name,
};
use serde::Serialize;
use std::path::PathBuf;

const LONG_HELP: &str = r#"
Behavior:
  Scans DIR for entries whose name contains the marker substring and writes
  one <dependency> block per match to the output file. The output is fully
  overwritten on every run; when nothing matches it is left empty. The
  group and artifact ids are the entry name with the marker removed, the
  <systemPath> is the path prefix joined with the unmodified entry name.

Examples:
  # Generate pom_temp.xml from ./lib
  pomgen
  # Scan a different directory
  pomgen vendor/jars
  # Include jars in subdirectories
  pomgen --recursive
  # Skip source and javadoc jars
  pomgen -x '*-sources.jar' -x '*-javadoc.jar'
  # Check what would be emitted (dry run)
  pomgen --dry-run
  # List matches as JSON for scripting
  pomgen --list=json
  # Different scope, version, and path prefix
  pomgen --scope provided --dep-version 2.0 --path-prefix '${basedir}/jars/'

Output block:
  <dependency>
      <groupId>gmol</groupId>
      <artifactId>gmol</artifactId>
      <scope>system</scope>
      <version>1.0</version>
      <systemPath>${basedir}\lib\gmol.jar</systemPath>
  </dependency>
"#;

/// Maven dependency block generation from a jar directory.
#[derive(Parser, Debug)]
#[command(
    name = "pomgen",
    version,
    about = "Generate Maven system-scope dependency declarations from a jar directory.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Directory to scan for jar entries
    #[arg(value_name = "DIR", default_value = "lib", env = "POMGEN_LIB_DIR")]
    dir: PathBuf,

    /// Marker substring: inclusion filter and text stripped to derive ids
    #[arg(short, long, value_name = "TEXT", default_value = DEFAULT_MARKER)]
    marker: String,

    /// Output fragment file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Value for the <scope> field
    #[arg(long, value_name = "SCOPE", default_value = "system")]
    scope: String,

    /// Value for the <version> field
    #[arg(long, value_name = "VERSION", default_value = "1.0")]
    dep_version: String,

    /// Prefix joined with the entry path in <systemPath>
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_PATH_PREFIX)]
    path_prefix: String,

    /// Scan subdirectories instead of a single shallow listing
    #[arg(short, long)]
    recursive: bool,

    /// Maximum depth when scanning recursively
    #[arg(short = 'd', long, value_name = "DEPTH", requires = "recursive")]
    max_depth: Option<usize>,

    /// Exclude glob patterns (repeatable), matched against entry names
    #[arg(short = 'x', long = "exclude", value_name = "GLOB", action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Scan and report matches without writing the output file
    #[arg(long, conflicts_with = "list")]
    dry_run: bool,

    /// List matched entries (optionally with format: plain, detailed, json)
    #[arg(long, value_name = "FORMAT", num_args = 0..=1, default_missing_value = "plain", conflicts_with = "dry_run")]
    list: Option<ListFormat>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
enum ListFormat {
    /// Simple list of matched entry names
    Plain,
    /// Detailed information about each matched entry
    Detailed,
    /// JSON output for scripting
    Json,
}

#[derive(Serialize)]
struct EntryInfo {
    file_name: String,
    relative_path: String,
    artifact_id: String,
    system_path: String,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Error,
        (false, 0) => LogLevel::Warn,
        (false, 1) => LogLevel::Info,
        (false, 2) => LogLevel::Debug,
        (false, _) => LogLevel::Trace,
    };

    let mut config = GeneratorConfig {
        scan_dir: cli.dir.clone(),
        marker: cli.marker.clone(),
        scope: cli.scope.clone(),
        version: cli.dep_version.clone(),
        path_prefix: cli.path_prefix.clone(),
        recursive: cli.recursive,
        max_depth: cli.max_depth,
        exclude: None,
    };
    if !cli.exclude.is_empty() {
        let mut builder = GlobSetBuilder::new();
        for pat in &cli.exclude {
            match Glob::new(pat) {
                Ok(g) => {
                    builder.add(g);
                }
                Err(e) => {
                    eprintln!("[ERROR] Invalid exclude pattern '{pat}': {e}");
                    std::process::exit(2);
                }
            }
        }
        match builder.build() {
            Ok(set) => {
                config.exclude = Some(set);
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to build exclude set: {e}");
                std::process::exit(2);
            }
        }
    }

    let result = if cli.dry_run {
        dry_run(&config, &cli.output, log_level)
    } else if let Some(list_format) = cli.list {
        list_entries(&config, list_format, log_level)
    } else {
        generate(&config, &cli.output, log_level)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn generate(config: &GeneratorConfig, output: &std::path::Path, log_level: LogLevel) -> Result<()> {
    log(
        log_level,
        LogLevel::Info,
        &format!("Scanning {}", config.scan_dir.display()),
    );

    let count = pomgen::generate(output, config)?;

    log(
        log_level,
        LogLevel::Info,
        &format!(
            "Wrote {count} dependency block{} to {}",
            if count == 1 { "" } else { "s" },
            output.display()
        ),
    );
    Ok(())
}

fn dry_run(config: &GeneratorConfig, output: &std::path::Path, log_level: LogLevel) -> Result<()> {
    log(
        log_level,
        LogLevel::Info,
        "Performing dry run - scanning without writing...",
    );

    let entries = scan_entries(config)?;

    for entry in &entries {
        log(
            log_level,
            LogLevel::Info,
            &format!(
                "✓ {} -> {}",
                entry.relative_path,
                stripped_name(&entry.file_name, &config.marker)
            ),
        );
    }

    println!(
        "Summary: {} dependency block{} would be written to {}",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" },
        output.display()
    );

    Ok(())
}

fn list_entries(config: &GeneratorConfig, format: ListFormat, log_level: LogLevel) -> Result<()> {
    log(log_level, LogLevel::Debug, "Listing matched entries...");

    let entries = scan_entries(config)?;

    match format {
        ListFormat::Plain => {
            for entry in &entries {
                println!("{}", entry.relative_path);
            }
        }
        ListFormat::Detailed => {
            for entry in &entries {
                println!("Entry: {}", entry.relative_path);
                println!(
                    "  Artifact: {}",
                    stripped_name(&entry.file_name, &config.marker)
                );

                let path = config.scan_dir.join(&entry.relative_path);
                if path.is_file() {
                    if let Ok(metadata) = std::fs::metadata(&path) {
                        println!("  Type: File ({} bytes)", metadata.len());
                    }
                } else if path.is_dir() {
                    println!("  Type: Directory");
                }
                println!(
                    "  SystemPath: {}{}",
                    config.path_prefix, entry.relative_path
                );
                println!();
            }
        }
        ListFormat::Json => {
            let infos = entries
                .iter()
                .map(|entry: &JarEntry| EntryInfo {
                    file_name: entry.file_name.clone(),
                    relative_path: entry.relative_path.clone(),
                    artifact_id: stripped_name(&entry.file_name, &config.marker),
                    system_path: format!("{}{}", config.path_prefix, entry.relative_path),
                })
                .collect::<Vec<_>>();

            let json = serde_json::to_string_pretty(&infos)?;
            println!("{json}");
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn log(current_level: LogLevel, message_level: LogLevel, message: &str) {
    if message_level >= current_level {
        eprintln!(
            "[{}] {}",
            match message_level {
                LogLevel::Trace => "TRACE",
                LogLevel::Debug => "DEBUG",
                LogLevel::Info => "INFO",
                LogLevel::Warn => "WARN",
                LogLevel::Error => "ERROR",
            },
            message
        );
    }
}
