use clap::Parser;
use clap::ValueEnum;
use playlist_scraper_init::init;
use spotify_playlist_api::scrape_playlist::scrape_playlist;
use tracing::debug;

/// Print every track of a Spotify playlist as a table.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Spotify ID of the playlist.
    playlist_id: String,

    #[arg(long, env = "SPOTIFY_CLIENT_ID")]
    client_id: String,

    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let args = Args::parse();
    debug!("Scraping playlist {}", args.playlist_id);

    let table = scrape_playlist(&args.playlist_id, &args.client_id, &args.client_secret).await?;
    match args.format {
        Format::Table => println!("{}", table),
        Format::Json => println!("{}", serde_json::to_string_pretty(table.rows())?),
    }

    Ok(())
}
