use serde::Serialize;
use tabled::Tabled;

/// One flattened playlist track. Serialises with the table's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct TrackRow {
    /// 1-based index of the item in the playlist, counting skipped items.
    pub position: usize,
    pub song: String,
    #[tabled(display = "display_optional")]
    pub song_id: Option<String>,
    pub artists: String,
    pub artists_id: String,
    pub album: String,
    #[tabled(display = "display_optional")]
    pub album_id: Option<String>,
    /// Milliseconds.
    pub duration: u64,
    #[tabled(display = "display_optional")]
    pub added_at: Option<String>,
    pub popularity: i64,
    pub playlist: String,
    #[serde(rename = "playlistid")]
    #[tabled(rename = "playlistid")]
    pub playlist_id: String,
}

fn display_optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
