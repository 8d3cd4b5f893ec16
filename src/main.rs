//! Main entry point for the feedzip CLI.
//!
//! Resolves the feed source (local file, HTTP URL, or catalogue id), fetches
//! the archive, and dispatches to member listing, feed summary, or GeoJSON
//! output. Logs go to stderr so stdout stays pipeable.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedzip::cli::{self, Cli};
use feedzip::io::{FeedLoader, FileLoader, HttpLoader};
use feedzip::{FEED_MEMBERS, FeedCatalog, FeedData, ZipParser, extract_feed, geojson};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = FeedCatalog::builtin();

    if cli.sources {
        list_sources(&catalog);
        return Ok(());
    }

    // clap enforces this; the bail covers the type system, not the user.
    let Some(source) = cli.source.as_deref() else {
        bail!("a feed source is required (see --help)");
    };

    let data = load_source(&catalog, source).await?;

    if cli.list || cli.verbose {
        return list_members(&data, cli.verbose);
    }

    let feed = extract_feed(&data)?;

    if !cli.quiet {
        print_summary(&feed);
    }

    if let Some(dir) = cli.geojson.as_deref() {
        write_geojson(&feed, dir).await?;
    }

    Ok(())
}

/// Resolve a source string and fetch the archive bytes.
///
/// Resolution order: catalogue id first, then URL, then local path. Ids are
/// short and never contain a scheme or a slash, so the order cannot shadow a
/// real URL.
async fn load_source(catalog: &FeedCatalog, source: &str) -> Result<Vec<u8>> {
    if let Some(entry) = catalog.find(source) {
        info!(id = entry.id, url = entry.url, "resolved catalogue source");
        return HttpLoader::new(entry.url.to_string())?.load().await;
    }
    if cli::is_http_url(source) {
        return HttpLoader::new(source.to_string())?.load().await;
    }
    FileLoader::new(source).load().await
}

/// Print the built-in feed catalogue.
fn list_sources(catalog: &FeedCatalog) {
    for source in catalog.sources() {
        println!("{:<14}{} ({})", source.id, source.name, source.region);
        println!("{:<14}{}", "", source.description);
        println!("{:<14}{}", "", source.url);
    }
}

/// List archive members without extracting them.
///
/// Verbose mode prints a table with sizes and compression, marking the
/// members the feed pipeline would read.
fn list_members(data: &[u8], verbose: bool) -> Result<()> {
    let parser = ZipParser::new(data);
    let entries = parser.list_entries()?;

    if verbose {
        println!(
            "{:>10}  {:>10}  {:>5}  {:>9}  Name",
            "Length", "Size", "Cmpr", "Method"
        );
        println!("{}", "-".repeat(60));
    }

    let mut total_uncompressed = 0u64;
    let mut total_compressed = 0u64;

    for entry in &entries {
        if verbose {
            let ratio = compression_ratio(entry.compressed_size, entry.uncompressed_size);
            let marker = if FEED_MEMBERS.contains(&entry.name.as_str()) {
                "*"
            } else {
                " "
            };
            println!(
                "{:>10}  {:>10}  {}  {:>9}  {}{}",
                entry.uncompressed_size,
                entry.compressed_size,
                ratio,
                entry.method,
                marker,
                entry.name
            );
            total_uncompressed += u64::from(entry.uncompressed_size);
            total_compressed += u64::from(entry.compressed_size);
        } else {
            println!("{}", entry.name);
        }
    }

    if verbose {
        println!("{}", "-".repeat(60));
        println!(
            "{:>10}  {:>10}  {} members (* = feed table)",
            total_uncompressed,
            total_compressed,
            entries.len()
        );
    }

    Ok(())
}

/// Percentage of space saved by compression, as a right-aligned cell.
///
/// Deflate can expand incompressible input; such members read as a 0% saving.
fn compression_ratio(compressed: u32, uncompressed: u32) -> String {
    if uncompressed > 0 {
        format!(
            "{:>4}%",
            100u64.saturating_sub(u64::from(compressed) * 100 / u64::from(uncompressed))
        )
    } else {
        "  0%".to_string()
    }
}

/// Print per-table record counts and the geographic extent.
fn print_summary(feed: &FeedData) {
    println!("{:>8}  stops", feed.stops.len());
    println!("{:>8}  stop times", feed.stop_times.len());
    println!("{:>8}  trips", feed.trips.len());
    println!("{:>8}  routes", feed.routes.len());
    println!("{:>8}  calendar entries", feed.calendar.len());
    println!("{:>8}  calendar dates", feed.calendar_dates.len());
    println!("{:>8}  records total", feed.record_count());

    if let Some([[min_lon, min_lat], [max_lon, max_lat]]) = geojson::feed_bounds(&feed.stops) {
        println!("  bounds  {min_lon},{min_lat} .. {max_lon},{max_lat}");
    }
}

/// Write stops.geojson and routes.geojson into `dir`.
async fn write_geojson(feed: &FeedData, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let stops = geojson::stops_to_geojson(&feed.stops);
    let stops_path = dir.join("stops.geojson");
    fs::write(&stops_path, serde_json::to_vec_pretty(&stops)?)
        .await
        .with_context(|| format!("failed to write {}", stops_path.display()))?;
    info!(path = %stops_path.display(), features = stops.len(), "wrote stop features");

    let routes = geojson::routes_to_geojson(feed);
    let routes_path = dir.join("routes.geojson");
    fs::write(&routes_path, serde_json::to_vec_pretty(&routes)?)
        .await
        .with_context(|| format!("failed to write {}", routes_path.display()))?;
    info!(path = %routes_path.display(), features = routes.len(), "wrote route features");

    Ok(())
}
