//! Rendering of resolved tracks for an external player.
//!
//! [`OutputFormat::Plain`] prints one stream URL per line, which `mpv
//! --playlist=-` reads directly. [`OutputFormat::M3u`] prints an extended M3U
//! playlist so players can show artist, title and length before a track
//! starts.

use std::io::{self, Write};

use crate::{subsonic::StreamUrlBuilder, types::Track};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    M3u,
}

impl OutputFormat {
    pub fn from_m3u_flag(m3u: bool) -> Self {
        if m3u {
            OutputFormat::M3u
        } else {
            OutputFormat::Plain
        }
    }
}

/// Writes `tracks` to `out` in `format`.
///
/// Stream URLs are built while writing and the writer is flushed after every
/// track, so a player reading from a pipe can start on the first URL right
/// away.
pub fn write_tracks<W, U>(
    out: &mut W,
    tracks: &[Track],
    format: OutputFormat,
    urls: &U,
) -> io::Result<()>
where
    W: Write + ?Sized,
    U: StreamUrlBuilder + ?Sized,
{
    if format == OutputFormat::M3u {
        writeln!(out, "#EXTM3U")?;
    }

    for track in tracks {
        if format == OutputFormat::M3u {
            writeln!(
                out,
                "#EXTINF:{},{} - {}",
                track.duration, track.artist, track.title
            )?;
        }
        writeln!(out, "{}", urls.stream_url(&track.id))?;
        out.flush()?;
    }

    Ok(())
}
