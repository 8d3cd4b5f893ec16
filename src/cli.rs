use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "feedzip")]
#[command(version)]
#[command(about = "Read GTFS transit feeds straight out of their ZIP archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  feedzip feed.zip                      summarize a local feed\n  \
  feedzip -v feed.zip                   list archive members with sizes\n  \
  feedzip sample                        download a catalogued feed by id\n  \
  feedzip --sources                     show the built-in feed catalogue\n  \
  feedzip feed.zip --geojson out/       write stops and routes as GeoJSON")]
pub struct Cli {
    /// Feed archive: a file path, an HTTP(S) URL, or a catalogue id
    #[arg(value_name = "SOURCE", required_unless_present = "sources")]
    pub source: Option<String>,

    /// List archive members (short format)
    #[arg(short = 'l')]
    pub list: bool,

    /// List archive members verbosely
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Show the built-in feed source catalogue and exit
    #[arg(long)]
    pub sources: bool,

    /// Write stops.geojson and routes.geojson into DIR
    #[arg(long, value_name = "DIR")]
    pub geojson: Option<PathBuf>,

    /// Quiet mode (no table summary)
    #[arg(short = 'q')]
    pub quiet: bool,
}

/// Whether a source string is a URL rather than a path or catalogue id.
pub fn is_http_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments_are_wellformed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn source_is_optional_only_with_sources() {
        assert!(Cli::try_parse_from(["feedzip"]).is_err());
        assert!(Cli::try_parse_from(["feedzip", "--sources"]).is_ok());
        assert!(Cli::try_parse_from(["feedzip", "feed.zip"]).is_ok());
    }

    #[test]
    fn url_detection() {
        assert!(is_http_url("https://example.com/feed.zip"));
        assert!(is_http_url("http://example.com/feed.zip"));
        assert!(!is_http_url("feed.zip"));
        assert!(!is_http_url("sample"));
        assert!(!is_http_url("ftp://example.com/feed.zip"));
    }
}
