//! Termshot
//!
//! Reads styled terminal output from stdin or a file and writes a PNG that
//! looks like a screenshot of a terminal window.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termshot::{Config, Result, Scaffold};

/// CLI arguments for termshot
#[derive(Parser, Debug)]
#[command(name = "termshot")]
#[command(version)]
#[command(about = "Render terminal output as a screenshot-like PNG", long_about = None)]
struct CliArgs {
    /// Path to a JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the four *-Regular/Bold/Italic/BoldItalic.ttf files
    #[arg(long, value_name = "DIR")]
    font_dir: Option<PathBuf>,

    /// Wrap at this many columns (0 follows the terminal width)
    #[arg(short = 'C', long, value_name = "COLS", default_value_t = 0)]
    columns: usize,

    /// Do not draw the window buttons
    #[arg(long)]
    no_decoration: bool,

    /// Do not draw the drop shadow
    #[arg(long)]
    no_shadow: bool,

    /// Trim transparent borders from the image
    #[arg(long)]
    clip_canvas: bool,

    /// Read content from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PNG file
    #[arg(short, long, value_name = "FILE", default_value = "out.png")]
    filename: PathBuf,

    /// Write the plain text content to this file instead of a PNG
    #[arg(long, value_name = "FILE")]
    raw_write: Option<PathBuf>,

    /// Command line shown as a prompt above the content
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &args.font_dir {
        config.font_dir = dir.clone();
    }
    if args.no_decoration {
        config.draw_decorations = false;
    }
    if args.no_shadow {
        config.draw_shadow = false;
    }

    let mut scaffold = Scaffold::new(&config)?;
    scaffold.set_columns(args.columns);
    scaffold.set_clip_canvas(args.clip_canvas);

    if !args.command.is_empty() {
        scaffold.add_command(args.command.as_slice());
    }

    match &args.input {
        Some(path) => scaffold.add_content(File::open(path)?)?,
        None => scaffold.add_content(io::stdin().lock())?,
    }

    match &args.raw_write {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            scaffold.write_raw(&mut out)?;
            out.flush()?;
            tracing::info!("Wrote text to {}", path.display());
        },
        None => {
            let mut out = BufWriter::new(File::create(&args.filename)?);
            scaffold.write_png(&mut out)?;
            out.flush()?;
            tracing::info!("Wrote image to {}", args.filename.display());
        },
    }

    Ok(())
}
