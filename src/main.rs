use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use subcli::{
    Error, cli, config, error, output::OutputFormat, resolver::SelectionMode,
};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
  args_conflicts_with_subcommands = true // disallow mixing play flags with `setup`
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    #[clap(flatten)]
    play: PlayOptions,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run interactive setup to configure subcli
    Setup,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct PlayOptions {
    /// Shuffle the playlist
    #[clap(short, long)]
    shuffle: bool,

    /// Play a specific playlist by name or ID
    #[clap(short, long, value_name = "NAME|ID")]
    playlist: Option<String>,

    /// Play a specific album by ID
    #[clap(short, long, value_name = "ID")]
    album: Option<String>,

    /// Play albums from a specific artist by ID
    #[clap(short = 'r', long, value_name = "ID")]
    artist: Option<String>,

    /// Search for songs/albums/artists
    #[clap(short = 'q', long, value_name = "QUERY")]
    search: Option<String>,

    /// Search type: song, album, artist
    #[clap(short = 't', long = "type", default_value = "song")]
    search_type: String,

    /// Limit number of results (0 for no limit)
    #[clap(
        short = 'n',
        long,
        default_value_t = config::DEFAULT_LIMIT,
        allow_negative_numbers = true
    )]
    limit: i64,

    /// Play favorite songs
    #[clap(short, long)]
    favorites: bool,

    /// Output in M3U playlist format with metadata
    #[clap(short, long)]
    m3u: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

async fn play(opt: PlayOptions) -> subcli::Result<()> {
    let mode = SelectionMode::from_flags(
        opt.favorites,
        opt.playlist.as_deref(),
        opt.album.as_deref(),
        opt.artist.as_deref(),
        opt.search.as_deref(),
        &opt.search_type,
    )?;

    cli::play(mode, opt.limit, opt.shuffle, OutputFormat::from_m3u_flag(opt.m3u)).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Setup) => cli::setup().await,
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => play(cli.play).await,
    };

    match result {
        Ok(()) => {}
        Err(Error::NoResults) => error!("No songs found"),
        Err(e) if e.needs_setup() => error!(
            "{}\n    Run '{} setup' to configure your connection.",
            e,
            config::CLIENT_NAME
        ),
        Err(e) => error!("{}", e),
    }
}
