/// Base URLs of the accounts service and the Web API.
#[derive(Debug, Clone)]
pub struct SpotifyEndpoints {
    pub accounts: String,
    pub api: String,
}

impl Default for SpotifyEndpoints {
    fn default() -> Self {
        Self {
            accounts: "https://accounts.spotify.com".to_string(),
            api: "https://api.spotify.com".to_string(),
        }
    }
}

impl SpotifyEndpoints {
    pub fn new(accounts: impl Into<String>, api: impl Into<String>) -> Self {
        Self {
            accounts: accounts.into(),
            api: api.into(),
        }
    }

    /// https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts.trim_end_matches('/'))
    }

    /// https://developer.spotify.com/documentation/web-api/reference/get-playlist
    pub fn playlist_url(&self, playlist_id: &str) -> String {
        format!(
            "{}/v1/playlists/{}",
            self.api.trim_end_matches('/'),
            playlist_id
        )
    }
}
