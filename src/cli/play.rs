use std::io::{self, ErrorKind, Write};

use rand::Rng;

use crate::{
    config,
    error::{Error, Result},
    management::ProfileManager,
    output::{self, OutputFormat},
    resolver::{Resolution, SelectionMode, SongResolver},
    subsonic::{CatalogClient, SubsonicClient},
    types::SkippedAlbum,
    utils, warning,
};

/// Resolves `mode` against the configured server and prints the tracks.
pub async fn play(
    mode: SelectionMode,
    limit: i64,
    shuffle: bool,
    format: OutputFormat,
) -> Result<()> {
    let manager = ProfileManager::load(config::config_path()).await?;
    let client = SubsonicClient::new(manager.credentials()?)?;

    client.ping().await.map_err(|e| match e {
        Error::Connection(_) => e,
        other => Error::Connection(other.to_string()),
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(
        &client,
        &mode,
        limit,
        shuffle,
        format,
        &mut rand::rng(),
        &mut out,
    )
    .await?;
    Ok(())
}

/// Resolves `mode` with `client` and writes the result to `out`.
///
/// Skipped albums are reported before the empty check, so a run where every
/// album failed still says why. The list is cut to `limit` first and shuffled
/// afterwards, so `--limit 10 --shuffle` plays the first ten tracks in random
/// order. Returns the albums that were skipped.
pub async fn run<C, R, W>(
    client: &C,
    mode: &SelectionMode,
    limit: i64,
    shuffle: bool,
    format: OutputFormat,
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<SkippedAlbum>>
where
    C: CatalogClient,
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let pb = utils::spinner("Fetching songs...");
    let resolution = SongResolver::new(client).resolve(mode).await;
    pb.finish_and_clear();

    let Resolution { mut tracks, skipped } = resolution?;
    for album in &skipped {
        warning!("Failed to get album {}: {}", album.name, album.reason);
    }

    if tracks.is_empty() {
        return Err(Error::NoResults);
    }

    utils::apply_limit(&mut tracks, limit);
    if shuffle {
        utils::shuffle_tracks(&mut tracks, rng);
    }

    match output::write_tracks(out, &tracks, format, client) {
        // the player quit before reading everything
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(skipped),
        other => other.map(|()| skipped).map_err(Error::from),
    }
}
