//! Chirp - tweet-text analysis engine.
//!
//! This binary provides the CLI interface to the chirp crates:
//! weighted-length parsing, entity extraction, autolinking, and hit
//! highlighting, with JSON or HTML output.

mod cli;

use chirp_config::Configuration;
use chirp_extractor::{parse, Extractor};
use chirp_render::{Autolinker, HitHighlighter};
use clap::Parser as ClapParser;
use cli::{AutolinkArgs, Cli, Command, ExtractArgs, HighlightArgs, ParseArgs};
use log::{debug, error, LevelFilter};
use std::io::{self, Read, Write};

fn main() {
    let cli = Cli::parse();

    setup_logging(&cli.log_level);
    debug!("chirp v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli.command) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run(command: Command) -> io::Result<()> {
    match command {
        Command::Parse(args) => run_parse(args),
        Command::Extract(args) => run_extract(args),
        Command::Autolink(args) => run_autolink(args),
        Command::Highlight(args) => run_highlight(args),
    }
}

/// Use the provided text, or read all of stdin.
fn input_text(arg: Option<String>) -> io::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            // Trailing newlines are shell noise, not tweet content.
            while buf.ends_with('\n') || buf.ends_with('\r') {
                buf.pop();
            }
            Ok(buf)
        }
    }
}

fn run_parse(args: ParseArgs) -> io::Result<()> {
    let text = input_text(args.text)?;
    let config = if let Some(path) = args.config {
        Configuration::from_path(&path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?
    } else if let Some(version) = args.preset {
        Configuration::from_version(version)
    } else {
        Configuration::default()
    };
    debug!("parsing with configuration v{}", config.version);

    let result = parse(&text, &config, args.weight_urls);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_extract(args: ExtractArgs) -> io::Result<()> {
    let text = input_text(args.text)?;
    let mut extractor = Extractor::new();
    extractor.set_extract_url_without_protocol(!args.no_bare_domains);

    let entities = match args.kind.as_str() {
        "all" => extractor.extract_entities_with_indices(&text),
        "urls" => extractor.extract_urls_with_indices(&text),
        "hashtags" => extractor.extract_hashtags_with_indices(&text),
        "cashtags" => extractor.extract_cashtags_with_indices(&text),
        "mentions" => extractor.extract_mentioned_screennames_with_indices(&text),
        "lists" => extractor.extract_mentions_or_lists_with_indices(&text),
        "reply" => extractor.extract_reply_username(&text).into_iter().collect(),
        other => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown entity kind: {}", other),
            ))
        }
    };

    println!("{}", serde_json::to_string_pretty(&entities)?);
    Ok(())
}

fn run_autolink(args: AutolinkArgs) -> io::Result<()> {
    let text = input_text(args.text)?;
    let linker = Autolinker::new(args.no_follow);

    let html = match args.kind.as_str() {
        "all" => linker.autolink(&text),
        "urls" => linker.autolink_urls(&text),
        "hashtags" => linker.autolink_hashtags(&text),
        "cashtags" => linker.autolink_cashtags(&text),
        "mentions" => linker.autolink_usernames_and_lists(&text),
        other => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown entity kind: {}", other),
            ))
        }
    };

    println!("{}", html);
    Ok(())
}

fn run_highlight(args: HighlightArgs) -> io::Result<()> {
    let hits = args.parse_hits();
    let text = input_text(args.text)?;
    let highlighter = HitHighlighter::with_tag(&args.tag);
    println!("{}", highlighter.highlight(&text, &hits));
    Ok(())
}
