//! Command-line interface for the SSF inter-chunk converter
//! Reads an intra-chunk SSF file and writes its inter-chunk form.
//!
//! Usage:
//!   ssf-interchunk --input `<path>` --output `<path>` [--config `<toml>`] [--verbose] [--no-dropped-warnings]

use clap::{Arg, ArgAction, ArgMatches, Command};
use ssf_config::Loader;
use ssf_parser::ssf::loader::{DocumentLoader, LoaderError};
use ssf_parser::ssf::DocumentConverter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() {
    let matches = Command::new("ssf-interchunk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert intra-chunk SSF annotations into inter-chunk SSF")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Intra-chunk SSF file to read")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Destination for the inter-chunk SSF output")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in settings"),
        )
        .arg(
            Arg::new("no-dropped-warnings")
                .long("no-dropped-warnings")
                .help("Do not warn about token lines left out for lacking chunkType")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log per-sentence progress")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "ssf_parser=debug,ssf_cli=debug"
    } else {
        "ssf_parser=info,ssf_cli=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let output = matches
        .get_one::<String>("output")
        .expect("output is a required argument");

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("no-dropped-warnings") {
        loader = loader.set_override("diagnostics.warn_dropped_tokens", false)?;
    }
    let settings = loader.build()?;

    let converter = DocumentConverter::new(settings.converter_options());
    let conversion = DocumentLoader::from_path(input)?.convert(&converter)?;
    write_output(Path::new(output), &conversion.text())?;

    let stats = conversion.stats;
    info!(
        "wrote {}: {} sentence(s), {} chunk(s), {} token(s), {} dropped",
        output, stats.sentences, stats.chunks, stats.tokens, stats.dropped_tokens
    );
    Ok(())
}

fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
