use crate::playlist::Playlist;
use crate::playlist::PlaylistItem;
use crate::track_row::TrackRow;
use eyre::Result;
use eyre::eyre;
use tracing::debug;
use tracing::warn;

/// Column names, in output order.
pub const COLUMNS: [&str; 12] = [
    "position",
    "song",
    "song_id",
    "artists",
    "artists_id",
    "album",
    "album_id",
    "duration",
    "added_at",
    "popularity",
    "playlist",
    "playlistid",
];

/// Ordered rows of a playlist, in playlist order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistTable {
    rows: Vec<TrackRow>,
}

impl PlaylistTable {
    pub fn new(rows: Vec<TrackRow>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[TrackRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlaylistTable {
    type Item = &'a TrackRow;
    type IntoIter = std::slice::Iter<'a, TrackRow>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl std::fmt::Display for PlaylistTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", tabled::Table::new(&self.rows))
    }
}

/// Flatten the first page of `playlist` into one row per track.
///
/// Items without a track, without an album or without an album name are
/// local files, episodes or unavailable tracks: they are skipped before any
/// other field is read and their position is not reused. A kept item with a
/// missing field is an error.
pub fn flatten_playlist(playlist: &Playlist, playlist_id: &str) -> Result<PlaylistTable> {
    if let Some(next) = &playlist.tracks.next {
        warn!(
            "Playlist {} has more items than the first page ({} of {:?}); next page {} is not read",
            playlist_id,
            playlist.tracks.items.len(),
            playlist.tracks.total,
            next
        );
    }

    let mut rows = Vec::with_capacity(playlist.tracks.items.len());
    for (i, item) in playlist.tracks.items.iter().enumerate() {
        let position = i + 1;
        if let Some(row) = flatten_item(item, position, &playlist.name, playlist_id)? {
            rows.push(row);
        }
    }

    debug!(
        "Flattened {} of {} items from {}",
        rows.len(),
        playlist.tracks.items.len(),
        playlist_id
    );
    Ok(PlaylistTable::new(rows))
}

fn flatten_item(
    item: &PlaylistItem,
    position: usize,
    playlist_name: &str,
    playlist_id: &str,
) -> Result<Option<TrackRow>> {
    let Some(track) = &item.track else {
        debug!("Skipping item {}: no track", position);
        return Ok(None);
    };
    let Some(album) = &track.album else {
        debug!("Skipping item {}: no album (local={})", position, track.is_local);
        return Ok(None);
    };
    let Some(album_name) = &album.name else {
        debug!("Skipping item {}: no album name (local={})", position, track.is_local);
        return Ok(None);
    };

    let missing = |field: &str| eyre!("Track on item {} has no {}", position, field);

    let artists = track.artists.as_ref().ok_or_else(|| missing("artists"))?;
    let artist_names = artists
        .iter()
        .map(|a| a.name.as_deref().ok_or_else(|| missing("artist name")))
        .collect::<Result<Vec<_>>>()?
        .join(", ");
    let artist_ids = artists
        .iter()
        .map(|a| a.id.as_deref().ok_or_else(|| missing("artist id")))
        .collect::<Result<Vec<_>>>()?
        .join(", ");
    let duration = track.duration_ms.ok_or_else(|| missing("duration_ms"))?;
    let song = track.name.clone().ok_or_else(|| missing("name"))?;
    let popularity = track.popularity.ok_or_else(|| missing("popularity"))?;

    Ok(Some(TrackRow {
        position,
        song,
        song_id: track.id.clone(),
        artists: artist_names,
        artists_id: artist_ids,
        album: album_name.clone(),
        album_id: album.id.clone(),
        duration,
        added_at: item.added_at.clone(),
        popularity,
        playlist: playlist_name.to_string(),
        playlist_id: playlist_id.to_string(),
    }))
}
