use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

mod clipboard;
mod config;
mod output;
mod progress;
mod terminal;

use crate::config::{AppConfig, ConfigManager};
use crate::output::OutputFormat;
use getfilehash_core::{HashAlgorithm, HashEvent, HashRequest, HashSlot, HashTask};

#[derive(Parser)]
#[command(name = "getfilehash")]
#[command(author, version, about = "GetFileHash - file and text digest calculator", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the digest of a file
    File {
        /// File to hash
        path: PathBuf,

        /// Hash algorithm (MD5, SHA-1, SHA-256, SHA-384, SHA-512)
        #[arg(short, long, value_parser = parse_algorithm, default_value = "sha256")]
        algorithm: HashAlgorithm,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Disable progress bar display
        #[arg(long)]
        no_progress: bool,

        /// Place the digest on the system clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Calculate the digest of text (argument, or stdin when omitted)
    Text {
        /// Text to hash; read from stdin when not given
        text: Option<String>,

        /// Hash algorithm (MD5, SHA-1, SHA-256, SHA-384, SHA-512)
        #[arg(short, long, value_parser = parse_algorithm, default_value = "sha256")]
        algorithm: HashAlgorithm,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Place the digest on the system clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// List supported algorithms
    Algorithms,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_algorithm(s: &str) -> Result<HashAlgorithm, String> {
    s.parse::<HashAlgorithm>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("getfilehash_core", log::LevelFilter::Debug)
            .filter_module("getfilehash_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let manager = ConfigManager::new();
    log::debug!("loading configuration from {}", manager.path().display());
    let config = manager.load().context("Failed to load configuration")?;
    if !config.output.color_enabled {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::File {
            path,
            algorithm,
            format,
            no_progress,
            copy,
        } => file_command(&config, path, algorithm, format, no_progress, copy).await,
        Commands::Text {
            text,
            algorithm,
            format,
            copy,
        } => text_command(&config, text, algorithm, format, copy).await,
        Commands::Algorithms => {
            list_algorithms();
            Ok(())
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

async fn file_command(
    config: &AppConfig,
    path: PathBuf,
    algorithm: HashAlgorithm,
    format: Option<OutputFormat>,
    no_progress: bool,
    copy: bool,
) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.default_format);
    let show_progress = !no_progress
        && config.output.progress_enabled
        && format == OutputFormat::Text
        && terminal::should_show_progress_by_default();

    let mut slot = HashSlot::new();
    slot.begin()?;

    log::debug!("hashing file {} with {algorithm}", path.display());

    let mut task = HashTask::spawn(HashRequest::file(&path, algorithm), config.engine.clone());

    // Ctrl-C cancels the in-flight computation instead of killing it
    let cancel = task.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let bar = show_progress.then(|| progress::percent_bar(&path.display().to_string()));
    let mut outcome = None;

    while let Some(event) = task.recv().await {
        if let HashEvent::Progress { percent } = &event {
            if let Some(bar) = &bar {
                bar.set_position(*percent as u64);
            }
            continue;
        }
        outcome = Some(event);
    }
    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    let event = outcome.context("hash worker ended without a terminal event")?;
    slot.observe_terminal(&event)?;

    match event {
        HashEvent::Completed {
            algorithm,
            digest,
            input_size,
        } => {
            output::print_file_result(
                format,
                &path,
                &algorithm,
                &digest,
                input_size,
                config.output.color_enabled,
            );
            if copy {
                clipboard::copy_digest(&digest)?;
                eprintln!("{}", "Digest copied to clipboard".dimmed());
            }
            Ok(())
        }
        HashEvent::Failed { message } => bail!("{message}"),
        HashEvent::Cancelled => bail!("hash computation cancelled"),
        HashEvent::Progress { .. } => bail!("unexpected progress event after stream end"),
    }
}

async fn text_command(
    config: &AppConfig,
    text: Option<String>,
    algorithm: HashAlgorithm,
    format: Option<OutputFormat>,
    copy: bool,
) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.default_format);

    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };
    let characters = text.chars().count();

    let mut slot = HashSlot::new();
    slot.begin()?;

    let mut task = HashTask::spawn(HashRequest::text(text, algorithm), config.engine.clone());

    let mut outcome = None;
    while let Some(event) = task.recv().await {
        if event.is_terminal() {
            outcome = Some(event);
        }
    }

    let event = outcome.context("hash worker ended without a terminal event")?;
    slot.observe_terminal(&event)?;

    match event {
        HashEvent::Completed {
            algorithm,
            digest,
            input_size,
        } => {
            output::print_text_result(
                format,
                &algorithm,
                &digest,
                characters,
                input_size,
                config.output.color_enabled,
            );
            if copy {
                clipboard::copy_digest(&digest)?;
                eprintln!("{}", "Digest copied to clipboard".dimmed());
            }
            Ok(())
        }
        HashEvent::Failed { message } => bail!("{message}"),
        HashEvent::Cancelled => bail!("hash computation cancelled"),
        HashEvent::Progress { .. } => bail!("unexpected progress event for a text source"),
    }
}

fn list_algorithms() {
    for algorithm in HashAlgorithm::all() {
        println!(
            "{:<8} {:>4} hex chars  ({})",
            algorithm.label(),
            algorithm.digest_len(),
            algorithm.key()
        );
    }
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
