// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! codeglow main entry point - highlight a file or stdin to HTML.

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use codeglow::config::{self, CliOptions, ResolvedConfig};
use codeglow::highlight::{CodeHighlighter, HighlightEngine, TreeSitterEngine, PLAIN_TEXT};
use codeglow::telemetry::{init_telemetry, TelemetryConfig};

/// codeglow version string.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// codeglow - highlight source code into an HTML fragment.
#[derive(Parser)]
#[command(name = "codeglow")]
#[command(author, version, about = "Highlight source code into an HTML fragment", long_about = None)]
struct Cli {
    /// File to highlight (reads stdin when omitted; invalid UTF-8 is replaced)
    file: Option<PathBuf>,

    /// Language hint (defaults to the file extension)
    #[arg(short, long, env = "CODEGLOW_LANG")]
    lang: Option<String>,

    /// Wrap the fragment in <pre>
    #[arg(long)]
    pre: bool,

    /// CSS class prefix for highlight spans
    #[arg(long)]
    class_prefix: Option<String>,

    /// Config file to use instead of searching the current directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print highlight metrics to stderr when done
    #[arg(long)]
    stats: bool,

    /// Log filter directive, e.g. `codeglow=debug` (overrides RUST_LOG)
    #[arg(long, env = "CODEGLOW_LOG")]
    log: Option<String>,

    /// Increase logging (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved configuration
    Config,
    /// Create a config file in the current directory
    Init,
    /// List recognized languages
    Languages,
    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::for_cli(cli.verbose).with_ansi(io::stderr().is_terminal());
    if let Some(directive) = &cli.log {
        telemetry = telemetry.with_filter(directive.clone());
    }
    if let Err(e) = init_telemetry(&telemetry) {
        eprintln!("{} {}", "warning:".yellow(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cli_options = CliOptions {
        class_prefix: cli.class_prefix.clone(),
        wrap_pre: if cli.pre { Some(true) } else { None },
    };
    let config = load_config(cli.config.as_deref(), cli_options)?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let code = read_input(cli.file.as_deref())?;
    let lang = cli
        .lang
        .or_else(|| extension_hint(cli.file.as_deref()))
        .unwrap_or_else(|| PLAIN_TEXT.to_string());

    let highlighter = CodeHighlighter::with_engine(TreeSitterEngine::from_config(&config)?);
    let fragment = if config.wrap_pre {
        highlighter.highlight_block(&code, &lang)
    } else {
        highlighter.highlight(&code, &lang)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(fragment.as_bytes())?;
    stdout.flush()?;

    if cli.stats {
        eprint!("{}", highlighter.metrics().snapshot().format_report());
    }
    Ok(())
}

fn handle_command(command: Commands, config: &ResolvedConfig) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        Commands::Init => {
            let dir = std::env::current_dir()?;
            let path = config::init_config(&dir, None)?;
            println!("Created config file: {}", path.display());
        }
        Commands::Languages => {
            let engine = TreeSitterEngine::from_config(config)?;
            for name in engine.languages() {
                println!("{}", name.cyan());
            }
            for (alias, target) in &config.aliases {
                println!("{} {} {}", alias, "->".dimmed(), target);
            }
        }
        Commands::Version => {
            println!("codeglow {}", VERSION);
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>, cli_options: CliOptions) -> anyhow::Result<ResolvedConfig> {
    let config = match path {
        Some(path) => config::load_config_from(path, cli_options)
            .with_context(|| format!("loading {}", path.display()))?,
        None => config::load_config(&std::env::current_dir()?, cli_options)?,
    };
    Ok(config)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Ok(decode_input(bytes))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(decode_input(buf))
        }
    }
}

/// Decode input as UTF-8, replacing invalid sequences.
fn decode_input(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("Input is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

fn extension_hint(file: Option<&Path>) -> Option<String> {
    file?
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_input_replaces_invalid_utf8() {
        assert_eq!(decode_input(b"fn main() {}".to_vec()), "fn main() {}");
        assert_eq!(decode_input(vec![b'a', 0xFF, b'b']), "a\u{FFFD}b");
    }

    #[test]
    fn test_extension_hint() {
        assert_eq!(extension_hint(Some(Path::new("src/lib.rs"))), Some("rs".to_string()));
        assert_eq!(extension_hint(Some(Path::new("Makefile"))), None);
        assert_eq!(extension_hint(None), None);
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::parse_from(["codeglow", "-vv", "--lang", "rust"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.lang.as_deref(), Some("rust"));
    }
}
