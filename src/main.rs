//! Command line front end: reads a patch request and writes the picture.
//!
//! ```bash
//! # writes patches.tikz next to the request
//! sc_tikz patches.txt
//!
//! # custom style, print to stdout
//! sc_tikz patches.txt --style thin.ron --stdout
//! ```
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sc_tikz::request::PatchRequest;
use sc_tikz::tikz::{assemble, default_output_path, TikzOptions};

#[derive(Parser, Debug)]
#[command(name = "sc_tikz")]
#[command(about = "Draw surface code patches as a TikZ picture")]
struct Args {
    /// Request file, one field per line
    input: PathBuf,

    /// Where to write the picture (defaults to the input with a .tikz extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the picture instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// RON file overriding the picture style
    #[arg(long)]
    style: Option<PathBuf>,

    /// More logging (-v debug, -vv trace). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = match &args.style {
        Some(path) => TikzOptions::from_file(path)?,
        None => TikzOptions::default(),
    };
    let request = PatchRequest::from_file(&args.input)
        .with_context(|| format!("loading request {}", args.input.display()))?;
    tracing::info!(
        input = %args.input.display(),
        patches = request.patches().len(),
        "loaded request"
    );

    let doc = assemble(&options, request.patches())?;
    if args.stdout {
        print!("{}", doc);
        return Ok(());
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    anyhow::ensure!(
        output != args.input,
        "refusing to overwrite the request file {}",
        output.display()
    );
    doc.to_file(&output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
