use tabled::Table;

use crate::{
    error, info,
    setlistfm::SetlistFmClient,
    types::{Setlist, SetlistTableRow},
    warning,
};

use super::spinner;

pub async fn list_setlists(mbid: String, page: u32) {
    let client = match SetlistFmClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot set up setlist.fm client. Err: {}", e),
    };

    let pb = spinner(format!("Fetching setlists for {}...", mbid));
    let result = client.get_setlists(&mbid, page).await;
    pb.finish_and_clear();

    let setlists = match result {
        Ok(setlists) => setlists,
        Err(e) => error!("Failed to fetch setlists. Err: {}", e),
    };

    if setlists.setlist.is_empty() {
        warning!("No setlists found for {} on page {}.", mbid, page);
        return;
    }

    let pages = setlists.total.div_ceil(setlists.items_per_page.max(1));
    let rows: Vec<SetlistTableRow> = setlists.setlist.iter().map(to_row).collect();

    println!("{}", Table::new(rows));
    info!(
        "Page {} of {} ({} setlists in total)",
        setlists.page, pages, setlists.total
    );
}

fn to_row(setlist: &Setlist) -> SetlistTableRow {
    let venue = match &setlist.venue.city {
        Some(city) => format!("{}, {}", setlist.venue.name, city.name),
        None => setlist.venue.name.clone(),
    };

    SetlistTableRow {
        id: setlist.id.clone(),
        date: setlist
            .event_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| setlist.event_date.clone()),
        venue,
        sets: setlist.segments().len(),
        songs: setlist.song_count(),
    }
}
