//! Command-line interface for dirge.
//!
//! This binary reads a directory tree template and creates the directories it
//! describes, or prints them when simulating.

use clap::{ArgAction, Parser, ValueEnum};
use dirge::{DirgeBuilder, DirgeError, DirgeOptions, DirgeStream, Generated, output, read_template};
use std::path::PathBuf;
use std::process::exit;

/// dirge — directory generator
#[derive(Parser)]
#[command(name = "dirge", version, about, long_about = None)]
struct Cli {
    /// Template file describing the directory tree
    template: PathBuf,

    /// Simulate output. Don't create any directories, but print the paths
    #[arg(short, long)]
    simulate: bool,

    /// Print each directory's path as it is generated
    #[arg(short, long)]
    verbose: bool,

    /// Directory to place root-level template entries under
    #[arg(short, long)]
    parent: Option<PathBuf>,

    /// Output format used when simulating
    #[arg(long, value_enum, default_value_t = OutputFormat::Paths)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(long)]
    pretty: bool,

    /// Debug logging to stderr (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Paths,
    Tree,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Paths => output::OutputFormat::Paths,
            OutputFormat::Tree => output::OutputFormat::Tree,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (DirgeOptions, OutputFormat, bool, u8) {
        let mut builder = DirgeBuilder::new(self.template)
            .simulate(self.simulate)
            .verbose(self.verbose);

        builder = if let Some(parent) = self.parent {
            builder.parent(parent)
        } else {
            builder.no_parent()
        };

        (builder.build(), self.format, self.pretty, self.debug)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, debug) = cli.into_options();

    #[cfg(feature = "logging")]
    setup_logging(debug);
    #[cfg(not(feature = "logging"))]
    let _ = debug;

    if let Err(e) = run(&options, format, pretty) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(options: &DirgeOptions, format: OutputFormat, pretty: bool) -> Result<(), DirgeError> {
    let paths = read_template(&options.template, options.parent.as_deref())?;

    if options.simulate {
        let out = output::format_paths(&paths, options.parent.as_deref(), format.into(), pretty)?;
        print!("{}", out);
        return Ok(());
    }

    for generated in DirgeStream::new(paths) {
        match generated? {
            Generated::Created(path) => {
                if options.verbose {
                    println!("{}", path.display());
                }
            }
            Generated::Exists(path) => {
                eprintln!("\"{}\" exists, skipping...", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "logging")]
fn setup_logging(verbosity: u8) {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{Layer, fmt};

    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
