use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// The subset of a playlist response that gets flattened into rows.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    pub tracks: PlaylistTracks,
}

/// First page of the playlist's items.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// The key must be present; its value may be null on old playlists.
    #[serde(deserialize_with = "present_or_null")]
    pub added_at: Option<String>,
    /// Null for tracks that are no longer available.
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

/// Track fields are all optional here: local files and episodes are skipped
/// on their album before anything else is read, so only kept items have the
/// rest of their fields checked.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    /// Null, absent or nameless for local files and episodes.
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub artists: Option<Vec<Artist>>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub popularity: Option<i64>,
    #[serde(default)]
    pub is_local: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::decode;

    #[test]
    fn added_at_may_be_null() {
        let item: PlaylistItem = decode(r#"{"added_at":null,"track":null}"#).unwrap();
        assert_eq!(item.added_at, None);
    }

    #[test]
    fn added_at_must_be_present() {
        assert!(decode::<PlaylistItem>(r#"{"track":null}"#).is_err());
    }

    #[test]
    fn episode_without_album_decodes() {
        let item: PlaylistItem = decode(
            r#"{"added_at":"2024-02-02T00:00:00Z","track":{"show":{"name":"Pod"},"name":"Ep 1","type":"episode"}}"#,
        )
        .unwrap();
        let track = item.track.unwrap();
        assert_eq!(track.album, None);
        assert_eq!(track.artists, None);
    }
}
