use crate::bearer_token::BearerToken;
use crate::endpoints::SpotifyEndpoints;
use crate::fetch::fetch;
use crate::playlist::Playlist;

/// https://developer.spotify.com/documentation/web-api/reference/get-playlist
pub async fn get_playlist(
    client: &reqwest::Client,
    endpoints: &SpotifyEndpoints,
    playlist_id: &str,
    bearer: &BearerToken,
) -> eyre::Result<Playlist> {
    let url = endpoints.playlist_url(playlist_id);
    fetch(client, &url, bearer).await
}
