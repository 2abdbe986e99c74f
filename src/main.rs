use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glyphgrid::core::config::{self, CliOverrides};
use glyphgrid::core::Report;
use glyphgrid::fetch::{DocumentSource, FileSource, HttpSource};
use glyphgrid::{print_character_grid, render_document, OutputFormat, PipelineError};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "glyphgrid", about = "Render a 'glyph,x,y' document as a character grid")]
struct Args {
    /// URL of the plain-text document (defaults to the configured URL)
    url: Option<String>,

    /// Read the document from a local file instead of fetching it
    #[arg(short, long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Abort the fetch after this many seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = config::load_config();
    let cli = CliOverrides {
        url: args.url.clone(),
        timeout_secs: args.timeout,
        log_level: args.log_level.clone(),
        log_file: args.log_file.clone(),
    };
    let resolved = match &loaded {
        Ok(file_config) => config::resolve(file_config, &cli),
        Err(_) => config::resolve(&Default::default(), &cli),
    };

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(path) = &resolved.log_file {
        // The logger is not up yet, so this can only go to stderr.
        match config::open_log_file(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
            }
            Err(e) => eprintln!(
                "Warning: failed to open log file {}: {e}, logging disabled",
                path.display()
            ),
        }
    }

    if let Err(e) = &loaded {
        log::warn!("Ignoring config file: {e}");
        eprintln!("Warning: {e}, using defaults");
    }

    let source: Box<dyn DocumentSource> = match &args.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => match HttpSource::new(resolved.url.clone(), resolved.timeout) {
            Ok(source) => Box::new(source),
            Err(e) => return fail(PipelineError::Fetch(e)),
        },
    };

    log::info!(
        "Glyphgrid starting: source={}, format={:?}",
        source.name(),
        args.format
    );

    let result = match args.format {
        OutputFormat::Text => {
            let mut out = io::stdout().lock();
            let mut err = io::stderr().lock();
            print_character_grid(source.as_ref(), &mut out, &mut err)
                .await
                .map(|_| ())
        }
        OutputFormat::Json => print_report(source.as_ref()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

async fn print_report(source: &dyn DocumentSource) -> Result<(), PipelineError> {
    let rendering = render_document(source, &mut io::stderr().lock()).await?;
    let report = Report::new(&rendering.grid, rendering.warnings);
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn fail(e: PipelineError) -> ExitCode {
    log::error!("{e}");
    eprintln!("Error: {e}");
    ExitCode::FAILURE
}
