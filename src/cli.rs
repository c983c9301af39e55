use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use rdeezer::clients::errors::Result;
use rdeezer::fetcher::MetadataFetcher;

#[derive(Parser)]
#[command(name = "rdeezer")]
#[command(version, about = "Fetch song metadata and cover art from Deezer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a song and print its metadata
    Search {
        /// Free-text song name
        query: String,
    },
    /// Download a cover image to a file
    Cover {
        /// Cover image URL
        url: String,
        /// Output file path
        #[arg(short, long, default_value = "cover.jpg")]
        output: PathBuf,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Search { query } => {
            search_song(query).await?;
        }
        Commands::Cover { url, output } => {
            download_cover(url, output).await?;
        }
    }
    Ok(())
}

async fn search_song(query: &str) -> Result<()> {
    let fetcher = MetadataFetcher::try_default()?;
    info!("Looking up {query:?} ...");
    match fetcher.get_song_data(query).await? {
        Some(metadata) => {
            println!("Title:  {}", metadata.title);
            println!("Artist: {}", metadata.artist.join(", "));
            println!("Album:  {}", metadata.album);
            println!("Cover:  {}", metadata.cover);
        }
        None => {
            println!("No matching track found for {query:?}");
        }
    }
    Ok(())
}

async fn download_cover(url: &str, output: &Path) -> Result<()> {
    let fetcher = MetadataFetcher::try_default()?;
    info!("Downloading cover from {url} ...");
    let bytes = fetcher.get_cover_image(url).await?;
    tokio::fs::write(output, &bytes).await?;
    println!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}
