//! Setlist to Playlist CLI Library
//!
//! This library looks up concert setlists on setlist.fm and turns the songs
//! performed at a show into a Spotify playlist. The interesting part is the
//! playlist pipeline: every performed title is matched against the catalog
//! one at a time, duplicates are dropped and the result is written into a new
//! playlist.
//!
//! # Modules
//!
//! - `catalog` - Streaming catalog capabilities the pipeline depends on
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all modules
//! - `matching` - Loose equivalence of song and artist names
//! - `playlist` - Track resolution, assembly and playlist building
//! - `setlistfm` - setlist.fm REST API client
//! - `spotify` - Spotify Web API client implementing `catalog::Catalog`
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use setlistify::{playlist, spotify::SpotifyClient, types::*};
//!
//! #[tokio::main]
//! async fn main() -> setlistify::error::Result<()> {
//!     let catalog = SpotifyClient::from_env()?;
//!     let request = playlist::PlaylistFromSetsRequest {
//!         access_token: AccessToken::new("BQC...")?,
//!         artist_name: "Radiohead".to_string(),
//!         segments: vec![PerformanceSegment::new(vec![Song::new("Creep")])],
//!         playlist: PlaylistSpec::new("Radiohead live"),
//!     };
//!     let outcome = playlist::create_playlist_from_sets(&catalog, &request).await?;
//!     println!("{} tracks added", outcome.tracks.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
mod http;
pub mod matching;
pub mod playlist;
pub mod setlistfm;
pub mod spotify;
pub mod types;

/// Prints a status line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Fetching setlist {}", setlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green checkmark once something finished.
///
/// ```
/// success!("Playlist {} created", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits the process with status 1.
///
/// Only for failures the CLI cannot continue after. Code following the
/// invocation is unreachable.
///
/// ```
/// error!("Cannot load setlist. Err: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr for recoverable problems.
///
/// ```
/// warning!("{} songs could not be matched", missing);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
