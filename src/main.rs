//! UEvent Organizer shell
//!
//! Reads commands from standard input, one per line, runs them against a
//! fresh in-memory organizer and prints each result.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uevent::command::HELP_TEXT;
use uevent::{generate_default_config, CommandExecutor, Config, LoggingConfig, OutputFormat, ShellConfig};

const BANNER: &str = "\
╔═════════════════════════════════════╗
║        ✨ UEvent Organizer ✨        ║
╚═════════════════════════════════════╝";

#[derive(Parser)]
#[command(name = "uevent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Organize school events from the terminal")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long)]
    format: Option<String>,

    /// No banner and no prompt (for piped input)
    #[arg(short, long)]
    quiet: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(format) = &cli.format {
        config.shell.output_format = format.parse()?;
    }
    if cli.quiet {
        config.shell.banner = false;
        config.shell.prompt.clear();
    }

    init_tracing(&config.logging);
    tracing::info!("UEvent Organizer v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&config.shell, stdin.lock(), stdout.lock())
}

/// Initialize logging on stderr so results on stdout stay clean
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("uevent={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Read-eval-print loop over any line source
fn run_shell<R: BufRead, W: Write>(shell: &ShellConfig, input: R, mut output: W) -> Result<()> {
    let mut executor = CommandExecutor::new();

    if shell.banner {
        writeln!(output, "{}", BANNER)?;
        writeln!(output, "{}", HELP_TEXT)?;
    }

    let mut lines = input.lines();
    loop {
        if !shell.prompt.is_empty() {
            write!(output, "{}", shell.prompt)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match executor.execute_str(trimmed) {
            Ok(result) => {
                writeln!(output, "{}", result.render(shell.output_format)?)?;
                if result.is_exit() {
                    break;
                }
            }
            Err(e) => match shell.output_format {
                OutputFormat::Table => writeln!(output, "Error: {}", e)?,
                OutputFormat::Json => writeln!(
                    output,
                    "{}",
                    serde_json::json!({ "kind": "error", "message": e.to_string() })
                )?,
            },
        }
    }

    let stats = executor.organizer().stats();
    tracing::info!(
        events = stats.events,
        seats_taken = stats.seats_taken,
        "Session ended"
    );
    Ok(())
}
