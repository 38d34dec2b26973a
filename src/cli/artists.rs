use tabled::Table;

use crate::{error, setlistfm::SetlistFmClient, types::ArtistTableRow, warning};

use super::spinner;

pub async fn search_artists(name: String, page: u32) {
    let client = match SetlistFmClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot set up setlist.fm client. Err: {}", e),
    };

    let pb = spinner(format!("Searching setlist.fm for \"{}\"...", name));
    let result = client.search_artists(&name, page).await;
    pb.finish_and_clear();

    let artists = match result {
        Ok(artists) => artists,
        Err(e) => error!("Failed to search artists. Err: {}", e),
    };

    if artists.is_empty() {
        warning!("No artists found for \"{}\" on page {}.", name, page);
        return;
    }

    let rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|a| ArtistTableRow {
            name: a.name,
            disambiguation: a.disambiguation.unwrap_or_default(),
            mbid: a.mbid,
        })
        .collect();

    println!("{}", Table::new(rows));
}
