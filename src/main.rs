use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use setlistify::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search artists on setlist.fm
    Artists(ArtistsOptions),

    /// List setlists of an artist
    Setlists(SetlistsOptions),

    /// Create a Spotify playlist from a setlist
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Artist name to search for
    pub name: String,

    /// Result page
    #[clap(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SetlistsOptions {
    /// MusicBrainz id of the artist (see `artists`)
    pub mbid: String,

    /// Result page
    #[clap(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// setlist.fm id of the show (see `setlists`)
    pub setlist_id: String,

    /// Playlist name, defaults to "<artist> @ <venue> (<date>)"
    #[clap(long)]
    pub name: Option<String>,

    /// Playlist description
    #[clap(long)]
    pub description: Option<String>,

    /// Create the playlist as private
    #[clap(long)]
    pub private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Artists(opt) => cli::search_artists(opt.name, opt.page).await,
        Command::Setlists(opt) => cli::list_setlists(opt.mbid, opt.page).await,
        Command::Playlist(opt) => {
            cli::playlist(
                opt.setlist_id,
                cli::PlaylistOptions {
                    name: opt.name,
                    description: opt.description,
                    private: opt.private,
                },
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
