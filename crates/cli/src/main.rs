//! sentisift CLI
//!
//! Filters junk out of a column of free-text feedback comments and
//! classifies the survivors' sentiment via an external NLP service.

mod config;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use sentisift_filters::{FilterPipeline, FilterStats};
use sentisift_formats::{open_comments, read_comments, write_annotated_csv, write_comments};
use sentisift_sentiment::{
    AnnotatedComment, GoogleNlClassifier, SentimentClassifier, SentimentLabel, SentimentReport,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::PipelineConfig;

#[derive(Parser)]
#[command(name = "sentisift")]
#[command(version, about = "Junk filtering and sentiment analysis for feedback comments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output statistics in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter junk comments without classifying sentiment
    Filter {
        /// Input file (CSV with one column, TXT, or JSONL)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for retained comments
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file with filter settings (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show statistics without writing output
        #[arg(long)]
        dry_run: bool,
    },

    /// Filter junk, classify sentiment, and write the annotated column
    Analyze {
        /// Input file (CSV with one column, TXT, or JSONL)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV with comment,sentiment rows
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file with filter and classifier settings (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Run the filters only; skip classification and output
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the first comments of an input file
    Inspect {
        /// Path to the input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of comments to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Count comments in an input file
    Count {
        /// Path to the input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.json)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Filter {
            input,
            output,
            config,
            dry_run,
        } => {
            filter(input, output, config, dry_run, cli.json)?;
        }
        Commands::Analyze {
            input,
            output,
            config,
            dry_run,
        } => {
            analyze(input, output, config, dry_run, cli.json).await?;
        }
        Commands::Inspect { input, limit } => {
            inspect(input, limit)?;
        }
        Commands::Count { input } => {
            count(input)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn filter(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    let config = PipelineConfig::load_or_default(config_path.as_deref())?;

    info!("Starting junk filtering");
    info!("  Input: {:?}", input);
    if let Some(ref output) = output {
        info!("  Output: {:?}", output);
    }
    info!("  Min valid words: {}", config.filters.min_valid_words);

    let comments = read_comments(&input)
        .with_context(|| format!("Failed to read comments from {}", input.display()))?;
    let pipeline = FilterPipeline::new(config.filters);
    let outcome = pipeline.run_parallel(&comments);

    print_filter_report(&outcome.stats, json_output)?;

    if let Some(output) = output {
        if dry_run {
            info!("Dry run: skipping output {:?}", output);
        } else {
            write_comments(&output, &outcome.kept)?;
        }
    }

    Ok(())
}

async fn analyze(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    let config = PipelineConfig::load_or_default(config_path.as_deref())?;

    info!("Starting sentiment analysis");
    info!("  Input: {:?}", input);
    if let Some(ref output) = output {
        info!("  Output: {:?}", output);
    }
    info!("  Language: {}", config.classifier.language);

    let comments = read_comments(&input)
        .with_context(|| format!("Failed to read comments from {}", input.display()))?;
    let pipeline = FilterPipeline::new(config.filters);
    let outcome = pipeline.run_parallel(&comments);

    print_filter_report(&outcome.stats, json_output)?;

    if dry_run {
        info!("Dry run: skipping classification of {} comments", outcome.kept.len());
        return Ok(());
    }

    let api_key = std::env::var(&config.classifier.api_key_env).with_context(|| {
        format!(
            "Missing API key: set {} or point api_key_env at another variable",
            config.classifier.api_key_env
        )
    })?;

    let mut classifier =
        GoogleNlClassifier::new(api_key).with_language(config.classifier.language.clone());
    if let Some(ref base_url) = config.classifier.base_url {
        classifier = classifier.with_base_url(base_url.clone());
    }

    let annotated = classify_with_progress(&classifier, &outcome.kept).await?;
    let report = SentimentReport::from_annotated(&annotated);

    print_sentiment_report(&report, json_output)?;

    if let Some(output) = output {
        let rows = annotated
            .iter()
            .map(|item| (item.comment.as_str(), item.label.as_str()));
        write_annotated_csv(&output, rows)?;
    }

    Ok(())
}

/// Classify the whole batch with a progress bar over the per-comment calls.
///
/// One request per comment, in order, so the annotated output joins
/// back to the filtered column without re-sorting.
async fn classify_with_progress(
    classifier: &dyn SentimentClassifier,
    comments: &[String],
) -> Result<Vec<AnnotatedComment>> {
    if comments.is_empty() {
        return Ok(Vec::new());
    }

    let bar = ProgressBar::new(comments.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} comments",
        )?
        .progress_chars("#>-"),
    );

    let mut annotated = Vec::with_capacity(comments.len());
    for comment in comments {
        let label = classifier.classify(comment).await?;
        annotated.push(AnnotatedComment {
            comment: comment.clone(),
            label,
        });
        bar.inc(1);
    }
    bar.finish();

    Ok(annotated)
}

fn inspect(input: PathBuf, limit: usize) -> Result<()> {
    let reader = open_comments(&input)?;

    for (i, comment) in reader.take(limit).enumerate() {
        let comment = comment?;
        println!("{:4}: {}", i + 1, comment);
    }

    Ok(())
}

fn count(input: PathBuf) -> Result<()> {
    let reader = open_comments(&input)?;
    let mut total = 0usize;
    for comment in reader {
        comment?;
        total += 1;
    }
    println!("{}", total);
    Ok(())
}

fn print_filter_report(stats: &FilterStats, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Filter report");
    println!("  Total comments:      {}", stats.total);
    println!(
        "  Kept:                {} ({:.1}%)",
        stats.kept,
        stats.retention_rate()
    );
    println!("  Dropped empty:       {}", stats.empty);
    println!("  Dropped generic:     {}", stats.generic);
    println!("  Dropped symbols:     {}", stats.symbols_only);
    println!("  Dropped repetitive:  {}", stats.repetitive);
    println!("  Dropped short:       {}", stats.too_few_words);

    Ok(())
}

fn print_sentiment_report(report: &SentimentReport, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Sentiment report");
    println!("  Classified:  {}", report.total);
    for label in [
        SentimentLabel::Positivo,
        SentimentLabel::Neutral,
        SentimentLabel::Negativo,
    ] {
        println!(
            "  {:10}  {} ({:.1}%)",
            label.as_str(),
            report.count(label),
            report.percentage(label)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_filter_command_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("comments.txt");
        let output = dir.path().join("kept.txt");

        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "NA").unwrap();
        writeln!(file, "the food was excellent and fresh").unwrap();
        writeln!(file, "....").unwrap();
        writeln!(file, "xx").unwrap();
        writeln!(file, "muy buena atención").unwrap();
        drop(file);

        filter(input, Some(output.clone()), None, false, false).unwrap();

        let kept = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = kept.lines().collect();
        assert_eq!(
            lines,
            vec!["the food was excellent and fresh", "muy buena atencion"]
        );
    }

    #[test]
    fn test_filter_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("comments.txt");
        let output = dir.path().join("kept.txt");

        std::fs::write(&input, "un comentario valido cualquiera\n").unwrap();

        filter(input, Some(output.clone()), None, true, false).unwrap();
        assert!(!output.exists());
    }
}
