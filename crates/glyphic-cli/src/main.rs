//! Glyphic CLI - command-line interface for the Glyphic translator.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use glyphic::{assemble, tokenize_with, Catalog, LexerConfig, StringPolicy};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, Level};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "glyphic",
    version = VERSION,
    about = "Translate mnemonic source into glyph notation",
    long_about = "Translate mnemonic source into glyph notation.\n\n\
        With no arguments the source is read from standard input and the \
        translation is written to standard output."
)]
struct Cli {
    /// Source file to translate (defaults to standard input)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Translate CODE instead of reading a file
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "file")]
    eval: Option<String>,

    /// Start a line-by-line translation prompt
    #[arg(short = 'i', long = "interactive", action = ArgAction::SetTrue)]
    interactive: bool,

    /// Print one token per line instead of the joined output
    #[arg(long = "tokens", action = ArgAction::SetTrue)]
    tokens: bool,

    /// Print the instruction table and exit
    #[arg(long = "catalog", action = ArgAction::SetTrue)]
    catalog: bool,

    /// Let an unterminated string run to end of input instead of failing
    #[arg(long = "lenient-strings", action = ArgAction::SetTrue)]
    lenient_strings: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn lexer_config(&self) -> LexerConfig {
        let unterminated_strings = if self.lenient_strings {
            StringPolicy::ExtendToEnd
        } else {
            StringPolicy::Reject
        };
        LexerConfig {
            unterminated_strings,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.catalog {
        return print_catalog();
    }

    let config = cli.lexer_config();

    let source = match (&cli.eval, &cli.file) {
        (Some(code), _) => Some(code.clone()),
        (None, Some(path)) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        (None, None) if cli.interactive => None,
        (None, None) => Some(read_stdin()?),
    };

    if let Some(source) = source {
        debug!(bytes = source.len(), "read source");
        let output = render(&source, config, cli.tokens)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", output).context("Failed to write output")?;
    }

    if cli.interactive {
        start_repl(config, cli.tokens)?;
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read standard input")?;
    Ok(source)
}

/// Translate `source`, or list its tokens when `tokens` is set.
fn render(source: &str, config: LexerConfig, tokens: bool) -> Result<String> {
    let toks = tokenize_with(source, config)?;
    if tokens {
        Ok(toks
            .iter()
            .map(|tok| tok.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    } else {
        Ok(assemble(&toks))
    }
}

fn print_catalog() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for inst in Catalog::standard() {
        writeln!(stdout, "{}", inst).context("Failed to write output")?;
    }
    Ok(())
}

fn start_repl(config: LexerConfig, tokens: bool) -> Result<()> {
    println!("Glyphic v{} - Type 'exit' or Ctrl+D to quit", VERSION);
    println!();

    let mut rl = DefaultEditor::new().context("Failed to create editor")?;

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "exit" || trimmed == "quit" {
                    println!("Goodbye!");
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed).ok(); // Ignore history errors

                match render(&line, config, tokens) {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                return Err(anyhow::anyhow!("Readline error: {}", e));
            }
        }
    }

    Ok(())
}
