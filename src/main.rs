//! Command-line interface for wordtok
//!
//! Usage:
//!   wordtok [OPTIONS] [TEXT]
//!   echo "I can't believe it" | wordtok

use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use wordtok::{ConfigError, Settings, SettingsFile, TokenReader, Tokenizer};

/// A fast word tokenizer with contraction, abbreviation and stop-word handling
#[derive(Parser, Debug)]
#[command(name = "wordtok", version, about)]
struct Cli {
    /// Text to tokenize; read from stdin when omitted
    text: Option<String>,

    /// Remove stop words
    #[arg(short = 's', long = "stop-words")]
    stop_words: bool,

    /// Emit separator characters as tokens
    #[arg(short = 'k', long)]
    keep_separators: bool,

    /// Characters that end a word
    #[arg(long, value_name = "CHARS")]
    separators: Option<String>,

    /// JSON settings file; command-line flags are applied on top of it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// NFC-normalize input before tokenizing
    #[arg(long)]
    nfc: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Tokenize stdin line by line, one output record per line
    #[arg(long)]
    lines: bool,
}

fn build_tokenizer(cli: &Cli) -> Result<Tokenizer, ConfigError> {
    let mut settings = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                ConfigError::InvalidLanguageData(format!("{}: {}", path.display(), e))
            })?;
            SettingsFile::from_json(&content)?.into_settings()?
        }
        None => Settings::new(),
    };

    if let Some(ref separators) = cli.separators {
        settings = settings.separators(separators.clone());
    }
    if cli.stop_words {
        settings = settings.remove_stop_words(true);
    }
    if cli.keep_separators {
        settings = settings.keep_separators(true);
    }
    if cli.nfc {
        settings = settings.normalize_unicode(true);
    }

    settings.build()
}

/// Make whitespace separator tokens visible
fn display_token(token: &str) -> String {
    token.escape_default().to_string()
}

fn print_tokens(tokens: &[String], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(tokens)?);
    } else {
        for token in tokens {
            println!("{}", display_token(token));
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = build_tokenizer(&cli)?;

    if let Some(ref text) = cli.text {
        print_tokens(&tokenizer.tokenize(text), cli.json)?;
        return Ok(());
    }

    let stdin = io::stdin();
    if cli.lines {
        for line in TokenReader::new(stdin.lock(), &tokenizer) {
            let tokens = line?;
            if cli.json {
                print_tokens(&tokens, true)?;
            } else {
                let shown: Vec<String> = tokens.iter().map(|t| display_token(t)).collect();
                println!("{}", shown.join("\t"));
            }
        }
        return Ok(());
    }

    let mut input = String::new();
    stdin.lock().read_to_string(&mut input)?;
    if input.is_empty() {
        return Err("no input text provided".into());
    }
    print_tokens(&tokenizer.tokenize(&input), cli.json)?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
