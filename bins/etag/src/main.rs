//! etag: CLI tool for computing, decoding and comparing HTTP entity tags.
//!
//! The library never touches the file system; this tool reads file
//! contents or metadata and hands them to it as entities.

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::Config;
use etag_core::{decode, encode, encode_batch, if_match, if_none_match, Entity, FileStat, Options};
use etag_telemetry::{TelemetryConfig, Timer};
use indicatif::{ProgressBar, ProgressStyle};
use output::Status;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Exit codes for CLI commands
mod exit_codes {
    pub const PRECONDITION_FAILED: i32 = 1;
    pub const NOT_DECODABLE: i32 = 2;
}

/// Files read per batch while scanning
const SCAN_CHUNK: usize = 64;

#[derive(Parser)]
#[command(name = "etag")]
#[command(about = "Compute, decode and compare HTTP entity tags")]
#[command(version)]
struct Cli {
    /// Configuration file (default: .etag.toml, etag.toml or .config/etag.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct TagArgs {
    /// Add the W/ prefix
    #[arg(long)]
    weak: bool,
    /// Tag from file size and modification time instead of content
    #[arg(long)]
    stat: bool,
}

impl TagArgs {
    /// Flags switch on what the configuration leaves off
    fn apply(self, defaults: Options) -> Options {
        defaults
            .with_weak(defaults.weak || self.weak)
            .with_stat_tag(defaults.stat_tag || self.stat)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the tag of a file
    Encode {
        /// Path to file
        path: PathBuf,
        #[command(flatten)]
        tag: TagArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the tag of a literal string
    Text {
        /// Text to tag
        text: String,
        /// Add the W/ prefix
        #[arg(long)]
        weak: bool,
    },
    /// Decode a previously issued tag
    Decode {
        /// Tag, optionally W/ prefixed and quoted
        tag: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate an If-Match header against a file
    IfMatch {
        /// Header value
        header: String,
        /// Path to file
        path: PathBuf,
        #[command(flatten)]
        tag: TagArgs,
    },
    /// Evaluate an If-None-Match header against a file
    IfNoneMatch {
        /// Header value
        header: String,
        /// Path to file
        path: PathBuf,
        #[command(flatten)]
        tag: TagArgs,
    },
    /// Compute tags for every file in a directory
    Scan {
        /// Directory to scan
        path: PathBuf,
        /// Tag from file size and modification time instead of content
        #[arg(long)]
        stat: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let level = if cli.verbose { "debug" } else { config.schema.logging.level.as_str() };
    etag_telemetry::init_with_config(TelemetryConfig::with_level(level))?;
    debug!(path = ?config.path, "Configuration loaded");

    let defaults = config.schema.encode;

    match cli.command {
        Commands::Encode { path, tag, json } => {
            let options = tag.apply(defaults);
            let etag = tag_file(&path, options)?;
            if json {
                let value = serde_json::json!({
                    "path": path.to_string_lossy(),
                    "etag": etag,
                    "weak": etag.starts_with("W/"),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", etag);
            }
        }

        Commands::Text { text, weak } => {
            // A literal has no file metadata, so only the weak default applies.
            let options = Options::from(defaults.weak || weak);
            println!("{}", encode(&text, options));
        }

        Commands::Decode { tag, json } => match decode(&tag) {
            Some(decoded) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&decoded)?);
                } else {
                    for line in output::describe(&decoded) {
                        println!("{}", line);
                    }
                }
            }
            None => {
                Status::error(&format!("Not a decodable entity tag: {}", tag));
                std::process::exit(exit_codes::NOT_DECODABLE);
            }
        },

        Commands::IfMatch { header, path, tag } => {
            let passed = evaluate(&path, tag.apply(defaults), |entity, options| {
                if_match(&header, entity, options)
            })?;
            report("If-Match", passed);
        }

        Commands::IfNoneMatch { header, path, tag } => {
            let passed = evaluate(&path, tag.apply(defaults), |entity, options| {
                if_none_match(&header, entity, options)
            })?;
            report("If-None-Match", passed);
        }

        Commands::Scan { path, stat, json } => {
            let options = defaults.with_stat_tag(defaults.stat_tag || stat);
            scan(&path, options, json)?;
        }
    }

    Ok(())
}

/// Tag a file by content, or by metadata when `stat_tag` is set
fn tag_file(path: &Path, options: Options) -> Result<String> {
    evaluate(path, options, |entity, options| encode(entity, options))
}

/// Acquire the file as an entity and run `f` on it
fn evaluate<T>(path: &Path, options: Options, f: impl FnOnce(Entity<'_>, Options) -> T) -> Result<T> {
    if options.stat_tag {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        let stat = FileStat::from(&metadata);
        debug!(path = %path.display(), size = stat.size, mtime = ?stat.mtime, "Using file metadata");
        Ok(f(Entity::Stat(stat), options))
    } else {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!(path = %path.display(), bytes = data.len(), "Using file content");
        Ok(f(Entity::Bytes(&data), options))
    }
}

fn report(header: &str, passed: bool) {
    debug!(header, passed, "Precondition evaluated");
    println!("{}", passed);
    Status::precondition(header, passed);
    if !passed {
        std::process::exit(exit_codes::PRECONDITION_FAILED);
    }
}

fn scan(root: &Path, options: Options, json: bool) -> Result<()> {
    let timer = Timer::start("scan");
    let files: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "Walk error");
                Status::error(&format!("Skipping: {}", e));
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    let pb = if json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")?
            .progress_chars("█▓░"));
        pb
    };

    let mut results = Vec::with_capacity(files.len());
    for chunk in files.chunks(SCAN_CHUNK) {
        let tags = if options.stat_tag {
            let stats = chunk
                .iter()
                .map(|path| {
                    std::fs::metadata(path)
                        .map(|m| Entity::Stat(FileStat::from(&m)))
                        .with_context(|| format!("Failed to stat {}", path.display()))
                })
                .collect::<Result<Vec<_>>>()?;
            encode_batch(&stats, options)
        } else {
            let contents = chunk
                .iter()
                .map(|path| {
                    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
                })
                .collect::<Result<Vec<_>>>()?;
            let entities: Vec<Entity> = contents.iter().map(Entity::from).collect();
            encode_batch(&entities, options)
        };

        results.extend(chunk.iter().zip(tags));
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    if json {
        let values: Vec<_> = results
            .iter()
            .map(|(path, etag)| serde_json::json!({ "path": path.to_string_lossy(), "etag": etag }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for (path, etag) in &results {
            println!("{}  {}", etag, path.display());
        }
    }

    let elapsed = timer.stop();
    debug!(files = results.len(), elapsed_ms = elapsed.as_millis(), "Scan finished");
    Ok(())
}
