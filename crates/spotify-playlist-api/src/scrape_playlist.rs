use crate::auth::client_credentials::get_bearer_token_via_client_credentials;
use crate::credentials::ClientCredentials;
use crate::endpoints::SpotifyEndpoints;
use crate::get_playlist::get_playlist;
use crate::table::PlaylistTable;
use crate::table::flatten_playlist;
use tracing::info;

/// Fetch every track of a playlist's first page as a table of rows.
///
/// Authenticates with the client-credentials grant, fetches the playlist and
/// flattens it. Tokens are not reused between calls.
pub async fn scrape_playlist(
    playlist_id: &str,
    client_id: &str,
    client_secret: &str,
) -> eyre::Result<PlaylistTable> {
    scrape_playlist_with(
        &SpotifyEndpoints::default(),
        playlist_id,
        client_id,
        client_secret,
    )
    .await
}

pub async fn scrape_playlist_with(
    endpoints: &SpotifyEndpoints,
    playlist_id: &str,
    client_id: &str,
    client_secret: &str,
) -> eyre::Result<PlaylistTable> {
    let client = reqwest::Client::new();
    let credentials = ClientCredentials::new(client_id, client_secret);

    let bearer = get_bearer_token_via_client_credentials(&client, endpoints, &credentials).await?;
    let playlist = get_playlist(&client, endpoints, playlist_id, &bearer).await?;
    let table = flatten_playlist(&playlist, playlist_id)?;

    info!(
        "Scraped {} rows from playlist {:?} ({})",
        table.len(),
        playlist.name,
        playlist_id
    );
    Ok(table)
}
