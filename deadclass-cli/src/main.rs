//! deadclass CLI - dead CSS class detector for web projects.
//!
//! Features:
//! - Audits one stylesheet against any number of HTML documents
//! - Accepts HTML files or whole directories (recursively scanned)
//! - Rayon-powered parallel document reading
//! - Plaintext or JSON output, deadclass.toml configuration

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use deadclass_core::{
    gather_html_files, init_structured_logging, load_config, log_info, log_warn, print_json,
    print_plain, print_report_plain, Deadclass,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dead CSS class detector")]
pub struct Cli {
    /// Path to the stylesheet to audit
    css: PathBuf,

    /// HTML files or directories forming the document corpus
    html: Vec<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Class names or patterns to exclude from the dead list
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,

    /// Print the full usage report (every declared class with its count)
    #[arg(long)]
    all: bool,

    /// Show originating selectors for each reported class
    #[arg(long)]
    contexts: bool,

    /// Print summary statistics to stderr
    #[arg(long)]
    summary: bool,
}

/// Expands corpus arguments: directories are scanned recursively for
/// HTML files, plain files pass through untouched.
fn expand_corpus_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(
                gather_html_files(path)
                    .with_context(|| format!("Failed to scan {}", path.display()))?,
            );
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

/// Reads every corpus file in parallel. Unreadable files are logged and
/// skipped rather than aborting the audit.
fn read_corpus(files: &[PathBuf]) -> Vec<(PathBuf, String)> {
    files
        .par_iter()
        .filter_map(|path| match fs::read_to_string(path) {
            Ok(content) => Some((path.clone(), content)),
            Err(e) => {
                log_warn(&format!("skipping unreadable file {}: {}", path.display(), e));
                None
            }
        })
        .collect()
}

/// Resolves the output format: the --json flag wins, then deadclass.toml.
fn use_json_output(cli_json: bool, config_format: Option<&str>) -> bool {
    cli_json || config_format == Some("json")
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] deadclass internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Structured JSON logging to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();

    // Optional deadclass.toml next to the current directory
    let config = load_config(Path::new(".")).unwrap_or_default();
    let config_format = config
        .as_ref()
        .and_then(|c| c.output.as_ref())
        .and_then(|o| o.format.as_deref())
        .map(String::from);

    let mut ignore = cli.ignore.clone();
    if let Some(cfg) = &config {
        if let Some(patterns) = &cfg.ignore {
            ignore.extend(patterns.iter().cloned());
        }
    }

    let mut audit = Deadclass::new().ignore_patterns(ignore);
    audit
        .load_stylesheet_file(&cli.css)
        .with_context(|| format!("Failed to read stylesheet {}", cli.css.display()))?;

    let corpus_files = expand_corpus_paths(&cli.html)?;
    let documents = read_corpus(&corpus_files);
    log_info(&format!(
        "auditing {} against {} document(s)",
        cli.css.display(),
        documents.len()
    ));

    for (path, content) in documents {
        audit = audit.add_document(path.display().to_string(), content);
    }

    let result = audit.analyze()?;

    if use_json_output(cli.json, config_format.as_deref()) {
        print_json(&result);
    } else if cli.all {
        print_report_plain(&result.report, cli.contexts);
    } else {
        print_plain(&result.unused);
        if cli.contexts {
            for rec in result.unused.records() {
                for context in &rec.contexts {
                    println!("    {} <- {}", rec.name, context);
                }
            }
        }
    }

    if cli.summary {
        eprintln!(
            "declared: {}, used: {}, dead: {}",
            result.stats.declared_count, result.stats.used_count, result.stats.dead_count
        );
    }

    Ok(())
}
