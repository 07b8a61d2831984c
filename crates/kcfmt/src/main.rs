//
// main.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

//! kcfmt
//!
//! Reads a kernel resource document, decodes it as the requested record kind
//! and writes it back out in normalized form. Fields the record does not know
//! about are carried through unchanged, and kernel spec collections come out
//! in display order.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use kcresources::{
    Kernel, KernelSpec, KernelSpecs, Resource, ResourceError, Session, Spec, Terminal,
};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

/// The kinds of record a document can be decoded as
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// A collection of kernel specs (`/api/kernelspecs`)
    Kernelspecs,

    /// A single named kernel spec
    Kernelspec,

    /// A kernel launch spec (`kernel.json`)
    Spec,

    /// A running kernel (`/api/kernels/{id}`)
    Kernel,

    /// A session (`/api/sessions/{id}`)
    Session,

    /// A terminal (`/api/terminals/{name}`)
    Terminal,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The kind of record the document holds
    #[arg(short, long, value_enum)]
    kind: Kind,

    /// The document to read. If omitted, the document is read from stdin.
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Where to write the normalized document. If omitted, it is written to
    /// stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// The log level to use. Valid values are "trace", "debug", "info", "warn",
    /// and "error". If not specified, the default log level is "info", or the
    /// value of `RUST_LOG` if set.
    #[arg(short, long)]
    log_level: Option<String>,

    /// The path to a log file. If specified, log output will be written to this
    /// file in addition to stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Derive the log level from the arguments, falling back to `RUST_LOG` and
/// then to "info".
fn log_level(args: &Args) -> LevelFilter {
    let level = match args.log_level {
        Some(ref level) => level.to_string(),
        None => std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
    };

    match level.as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => {
            eprintln!("Invalid log level '{}'; using 'info'", level);
            LevelFilter::Info
        }
    }
}

/// Set up logging. Log output always goes to stderr, since stdout may carry
/// the normalized document.
fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = log_level(args);
    match args.log_file {
        Some(ref log_file) => {
            let file = File::create(log_file)
                .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
            CombinedLogger::init(vec![
                TermLogger::new(
                    level,
                    Config::default(),
                    TerminalMode::Stderr,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(level, Config::default(), file),
            ])
            .context("Failed to initialize combined file/terminal logging")?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )
            .context("Failed to initialize terminal logging")?;
        }
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match input {
        Some(path) => {
            log::debug!("Reading document from {}", path.display());
            File::open(path)
                .and_then(|mut file| file.read_to_end(&mut buffer))
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            log::debug!("Reading document from stdin");
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
        }
    }
    Ok(buffer)
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.write_all(b"\n"))
                .and_then(|_| stdout.flush())
                .context("Failed to write stdout")
        }
    }
}

/// Decode a document as `R` and encode it again.
fn normalize<R: Resource>(document: &[u8], pretty: bool) -> anyhow::Result<Vec<u8>> {
    let resource = R::from_slice(document)?;
    let unknown: Vec<&String> = resource.raw_fields().keys().collect();
    if unknown.is_empty() {
        log::info!("Decoded {}", R::KIND);
    } else {
        log::info!(
            "Decoded {}; keeping {} unknown field(s): {:?}",
            R::KIND,
            unknown.len(),
            unknown
        );
    }

    let encoded = if pretty {
        resource.to_vec_pretty()?
    } else {
        resource.to_vec()?
    };
    Ok(encoded)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let document = read_input(args.input.as_deref())?;
    let encoded = match args.kind {
        Kind::Kernelspecs => normalize::<KernelSpecs>(&document, args.pretty),
        Kind::Kernelspec => normalize::<KernelSpec>(&document, args.pretty),
        Kind::Spec => normalize::<Spec>(&document, args.pretty),
        Kind::Kernel => normalize::<Kernel>(&document, args.pretty),
        Kind::Session => normalize::<Session>(&document, args.pretty),
        Kind::Terminal => normalize::<Terminal>(&document, args.pretty),
    }?;
    write_output(args.output.as_deref(), &encoded)
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(err) = init_logging(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    // Logging is up, so failures are reported through the logger only; it
    // writes to stderr and to the log file, if any
    if let Err(err) = run(&args) {
        match err.downcast_ref::<ResourceError>() {
            Some(resource_err) => resource_err.log(),
            None => log::error!("{:#}", err),
        }
        std::process::exit(1);
    }
}
