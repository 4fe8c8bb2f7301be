use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};

use sentseg::config::Config;
use sentseg::discovery::{self, DiscoveryConfig};
use sentseg::output::{DocumentWriter, OutputFormat};
use sentseg::reader::{DocumentReader, ReaderConfig};
use sentseg::Pipeline;

#[derive(Parser, Debug)]
#[command(name = "sentseg")]
#[command(about = "Split text documents into sentences, one per line")]
#[command(version)]
struct Args {
    /// Files or directories to segment (reads standard input when omitted)
    paths: Vec<PathBuf>,

    /// Keep the text as is: no hyphen joining, no `n't` replacement,
    /// offsets relative to the whole document
    #[arg(long)]
    preserve: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Bracketed asides shorter than this many characters stay inside the sentence
    #[arg(long)]
    max_aside_length: Option<usize>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Glob pattern selecting documents inside directory arguments
    #[arg(long, default_value = "**/*.txt")]
    glob: String,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Suppress console progress bars
    #[arg(long)]
    no_progress: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting sentseg v{}", env!("CARGO_PKG_VERSION"));
    info!(?args, "Parsed CLI arguments");

    let mut config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    if let Some(max_aside_length) = args.max_aside_length {
        if max_aside_length == 0 {
            anyhow::bail!("--max-aside-length must be positive");
        }
        config.max_aside_length = max_aside_length;
    }

    let pipeline = Pipeline::with_lexicon(config.segmenter_config(), config.build_lexicon())?;
    let mut writer = DocumentWriter::new(&pipeline, args.format, args.preserve);
    let mut out = BufWriter::new(std::io::stdout());

    let reader = DocumentReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        use_mmap: args.use_mmap,
        ..Default::default()
    });

    if args.paths.is_empty() {
        let document = reader.read_stdin().await?;
        let sentences = writer.write_document(&mut out, "-", &document)?;
        info!("Segmented standard input into {} sentences", sentences);
        out.flush()?;
        return Ok(());
    }

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
        pattern: args.glob.clone(),
    };
    let documents = discovery::collect_documents(args.paths.clone(), discovery_config).await?;

    let progress = progress_bar(documents.len() as u64, args.no_progress)?;
    let mut total_sentences = 0;
    let mut total_bytes = 0;
    let mut failed = 0;

    for document in &documents {
        progress.set_message(document.path.display().to_string());

        if document.error.is_some() {
            failed += 1;
            progress.inc(1);
            continue;
        }

        let (text, stats) = reader.read_document(&document.path).await?;
        match text {
            Some(text) => {
                let source = document.path.display().to_string();
                total_sentences += writer.write_document(&mut out, &source, &text)?;
                total_bytes += stats.bytes_read;
            }
            None => failed += 1,
        }
        progress.inc(1);
    }

    out.flush()?;
    progress.finish_with_message("done");

    info!(
        "Segmented {} documents ({} bytes) into {} sentences",
        documents.len() - failed,
        total_bytes,
        total_sentences
    );
    if failed > 0 {
        warn!("{} documents could not be read", failed);
    }

    Ok(())
}

fn progress_bar(total: u64, disabled: bool) -> Result<ProgressBar> {
    if disabled || total < 2 {
        return Ok(ProgressBar::hidden());
    }

    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")?
            .progress_chars("##-"),
    );
    Ok(progress)
}
