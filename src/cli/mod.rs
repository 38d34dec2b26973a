//! # CLI Module
//!
//! User-facing commands. Each command sets up the clients it needs from the
//! configuration, talks to the providers and prints the result with the
//! console macros from the crate root. Fatal problems end the process via
//! [`crate::error!`]; the library itself never exits.
//!
//! ## Commands
//!
//! - [`search_artists`] - find an artist on setlist.fm to get its MBID
//! - [`list_setlists`] - list an artist's setlists, newest first
//! - [`playlist`] - build a Spotify playlist from one setlist
//!
//! ## Typical session
//!
//! ```bash
//! setlistify artists "radiohead"
//! setlistify setlists a74b1b7f-71a5-4011-9441-d0b5e4122711
//! setlistify playlist 63de4613 --private
//! ```

mod artists;
mod playlist;
mod setlists;

use std::{borrow::Cow, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

pub use artists::search_artists;
pub use playlist::{PlaylistOptions, playlist};
pub use setlists::list_setlists;

fn spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
