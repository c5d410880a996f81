use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fogline_core::{FetchConfig, Lexicon, LexiconPaths, METRIC_COLUMNS, PipelineConfig, analyze, pipeline};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;
use echo::{print_banner, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score batches of articles with lexicon sentiment and readability metrics
#[derive(Parser, Debug)]
#[command(name = "fogline")]
#[command(version = VERSION)]
#[command(about = "Sentiment and readability metrics for article batches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose progress output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, extract, and score every document in an input batch
    Run(RunArgs),
    /// Score a single local text file, or "-" for stdin, without fetching
    Score(ScoreArgs),
}

/// Locations of the lexicon resources, shared by both subcommands.
#[derive(Args, Debug)]
struct LexiconArgs {
    /// Positive sentiment word list
    #[arg(long, default_value = "positive-words.txt", value_name = "FILE")]
    positive_words: PathBuf,

    /// Negative sentiment word list
    #[arg(long, default_value = "negative-words.txt", value_name = "FILE")]
    negative_words: PathBuf,

    /// Directory scanned for stop-word files
    #[arg(long, default_value = ".", value_name = "DIR")]
    stop_words_dir: PathBuf,

    /// File-name prefix identifying stop-word files
    #[arg(long, default_value = "StopWords_", value_name = "PREFIX")]
    stop_words_prefix: String,
}

impl LexiconArgs {
    fn to_paths(&self) -> LexiconPaths {
        LexiconPaths {
            stop_words_dir: self.stop_words_dir.clone(),
            stop_words_prefix: self.stop_words_prefix.clone(),
            positive_words: self.positive_words.clone(),
            negative_words: self.negative_words.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Input CSV with URL_ID and URL columns
    #[arg(short, long, default_value = "Input.csv", value_name = "FILE")]
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "Output.csv", value_name = "FILE")]
    output: PathBuf,

    #[command(flatten)]
    lexicon: LexiconArgs,

    /// Save each document's extracted text under this directory
    #[arg(long, value_name = "DIR")]
    save_extracted: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "15", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Pacing delay between documents in milliseconds
    #[arg(long, default_value = "500", value_name = "MS")]
    delay_ms: u64,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Text file to score, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    #[command(flatten)]
    lexicon: LexiconArgs,

    /// Print the metrics as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => run_batch(args, cli.verbose).await,
        Command::Score(args) => score_one(args, cli.verbose),
    }
}

async fn run_batch(args: RunArgs, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        print_banner();
    }

    let config = PipelineConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        lexicon: args.lexicon.to_paths(),
        extracted_dir: args.save_extracted,
        fetch: FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
        },
        delay_ms: args.delay_ms,
    };

    if verbose {
        print_step(
            1,
            2,
            &format!("Scoring batch from {}", args.input.display().bright_white()),
        );
    }

    let summary = pipeline::run(&config).await.context("Batch run failed")?;

    if verbose {
        print_step(2, 2, "Writing output");
    }
    print_success(&format!(
        "Scored {} documents ({} substituted), output in {}",
        summary.scored,
        summary.substituted,
        args.output.display()
    ));

    Ok(())
}

fn score_one(args: ScoreArgs, verbose: bool) -> anyhow::Result<()> {
    let text = if args.input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        fs::read_to_string(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    let lexicon = Lexicon::load(&args.lexicon.to_paths());
    if verbose {
        print_info(&format!(
            "Lexicon sizes: {} stop, {} positive, {} negative",
            lexicon.stop_words.len(),
            lexicon.positive_words.len(),
            lexicon.negative_words.len()
        ));
    }

    let record = analyze(&text, &lexicon);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&record).context("Failed to encode metrics")?
        );
    } else {
        for (name, value) in METRIC_COLUMNS.iter().zip(record.column_values()) {
            let name = format!("{name:<34}");
            println!("{} {}", name.dimmed(), value);
        }
    }

    Ok(())
}
