pub mod bearer_token;
pub mod credentials;
pub mod endpoints;
pub mod fetch;
pub mod get_playlist;
pub mod playlist;
pub mod scrape_playlist;
pub mod table;
pub mod track_row;
pub mod auth {
    pub mod client_credentials;
}
