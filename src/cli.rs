//! Command-line interface for chirp.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Chirp - tweet-text analysis from the command line.
///
/// Parses weighted tweet length, extracts entities, autolinks them
/// into HTML, and highlights arbitrary ranges.
#[derive(Parser, Debug)]
#[command(
    name = "chirp",
    author = "Chirp Contributors",
    version,
    about = "Tweet-text analysis: weighted length, entities, autolinking",
    after_help = "Examples:\n  \
                  chirp parse 'Hello #world'\n  \
                  chirp extract --kind hashtags 'Hello #world'\n  \
                  echo 'see http://example.com' | chirp autolink\n  \
                  chirp highlight --hits 0:5 'hello world'"
)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report weighted length, permillage, and validity as JSON
    Parse(ParseArgs),
    /// Extract entities as JSON
    Extract(ExtractArgs),
    /// Render entity references as HTML anchors
    Autolink(AutolinkArgs),
    /// Wrap ranges of the text in a highlight tag
    Highlight(HighlightArgs),
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Text to parse (reads from stdin if not provided)
    pub text: Option<String>,

    /// Load a configuration JSON file instead of the default preset
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Configuration preset version (1, 2, or 3)
    #[arg(long = "preset", conflicts_with = "config")]
    pub preset: Option<i32>,

    /// Weigh URLs at the configured transformed length
    #[arg(long = "weight-urls")]
    pub weight_urls: bool,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text to extract from (reads from stdin if not provided)
    pub text: Option<String>,

    /// Entity kind: all, urls, hashtags, cashtags, mentions, lists, reply
    #[arg(short = 'k', long = "kind", default_value = "all")]
    pub kind: String,

    /// Do not treat bare domains like example.com as URLs
    #[arg(long = "no-bare-domains")]
    pub no_bare_domains: bool,
}

#[derive(Args, Debug)]
pub struct AutolinkArgs {
    /// Text to autolink (reads from stdin if not provided)
    pub text: Option<String>,

    /// Add rel="nofollow" to generated links
    #[arg(long = "no-follow")]
    pub no_follow: bool,

    /// Entity kind: all, urls, hashtags, cashtags, mentions
    #[arg(short = 'k', long = "kind", default_value = "all")]
    pub kind: String,
}

#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// Text to highlight (reads from stdin if not provided)
    pub text: Option<String>,

    /// Hit ranges as start:end pairs, comma separated (UTF-16 offsets)
    #[arg(long = "hits", default_value = "")]
    pub hits: String,

    /// Tag to wrap hits in
    #[arg(long = "tag", default_value = "em")]
    pub tag: String,
}

impl HighlightArgs {
    /// Parse the `--hits` argument into ranges. Malformed pairs are
    /// skipped.
    pub fn parse_hits(&self) -> Vec<(usize, usize)> {
        self.hits
            .split(',')
            .filter_map(|pair| {
                let (start, end) = pair.split_once(':')?;
                Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_subcommand() {
        let cli = Cli::parse_from(["chirp", "parse", "hello"]);
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.text.as_deref(), Some("hello"));
                assert!(!args.weight_urls);
            }
            _ => panic!("expected parse subcommand"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_extract_kind_default() {
        let cli = Cli::parse_from(["chirp", "extract", "x"]);
        match cli.command {
            Command::Extract(args) => assert_eq!(args.kind, "all"),
            _ => panic!("expected extract subcommand"),
        }
    }

    #[test]
    fn test_parse_hits() {
        let cli = Cli::parse_from(["chirp", "highlight", "--hits", "0:5,7:9", "text"]);
        match cli.command {
            Command::Highlight(args) => {
                assert_eq!(args.parse_hits(), vec![(0, 5), (7, 9)]);
                assert_eq!(args.tag, "em");
            }
            _ => panic!("expected highlight subcommand"),
        }
    }

    #[test]
    fn test_parse_hits_skips_malformed() {
        let args = HighlightArgs {
            text: None,
            hits: "0:5,bad,7:".to_string(),
            tag: "em".to_string(),
        };
        assert_eq!(args.parse_hits(), vec![(0, 5)]);
    }
}
