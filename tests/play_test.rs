mod common;

use std::collections::HashSet;

use common::{FakeCatalog, album, track};
use rand::{SeedableRng, rngs::StdRng};
use subcli::{
    Error, Result,
    cli::run,
    output::OutputFormat,
    resolver::{SearchKind, SelectionMode},
    types::{SkippedAlbum, Track},
};

fn numbered(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| track(&i.to_string(), "Title", "Artist", 60))
        .collect()
}

async fn drive(
    catalog: &FakeCatalog,
    mode: SelectionMode,
    limit: i64,
    shuffle: bool,
    format: OutputFormat,
    seed: u64,
) -> (Result<Vec<SkippedAlbum>>, String) {
    let mut out = Vec::new();
    let result = run(
        catalog,
        &mode,
        limit,
        shuffle,
        format,
        &mut StdRng::seed_from_u64(seed),
        &mut out,
    )
    .await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_empty_random_is_no_results() {
    let catalog = FakeCatalog::default();
    let (result, out) = drive(
        &catalog,
        SelectionMode::Random,
        50,
        false,
        OutputFormat::M3u,
        1,
    )
    .await;

    assert!(matches!(result, Err(Error::NoResults)));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_search_without_hits_writes_nothing() {
    let catalog = FakeCatalog::default();
    let mode = SelectionMode::Search {
        query: "nothing".to_string(),
        kind: SearchKind::Song,
    };
    let (result, out) = drive(&catalog, mode, 0, true, OutputFormat::M3u, 1).await;

    assert!(matches!(result, Err(Error::NoResults)));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_limit_is_applied_before_shuffle() {
    let catalog = FakeCatalog {
        starred: numbered(10),
        ..Default::default()
    };

    for seed in 0..20 {
        let (result, out) = drive(
            &catalog,
            SelectionMode::Favorites,
            3,
            true,
            OutputFormat::Plain,
            seed,
        )
        .await;
        result.unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        let got: HashSet<&str> = lines.into_iter().collect();
        let first_three: HashSet<&str> =
            ["http://s/t/0", "http://s/t/1", "http://s/t/2"].into_iter().collect();
        assert_eq!(got, first_three);
    }
}

#[tokio::test]
async fn test_unshuffled_keeps_server_order() {
    let catalog = FakeCatalog {
        starred: numbered(5),
        ..Default::default()
    };
    let (result, out) = drive(
        &catalog,
        SelectionMode::Favorites,
        0,
        false,
        OutputFormat::Plain,
        1,
    )
    .await;

    result.unwrap();
    assert_eq!(
        out,
        "http://s/t/0\nhttp://s/t/1\nhttp://s/t/2\nhttp://s/t/3\nhttp://s/t/4\n"
    );
}

#[tokio::test]
async fn test_m3u_through_driver() {
    let catalog = FakeCatalog::default().with_album(
        "42",
        vec![
            track("1", "So What", "Miles Davis", 562),
            track("2", "Blue in Green", "Miles Davis", 337),
        ],
    );
    let (result, out) = drive(
        &catalog,
        SelectionMode::Album("42".to_string()),
        50,
        false,
        OutputFormat::M3u,
        1,
    )
    .await;

    result.unwrap();
    assert_eq!(
        out,
        "#EXTM3U\n\
         #EXTINF:562,Miles Davis - So What\n\
         http://s/t/1\n\
         #EXTINF:337,Miles Davis - Blue in Green\n\
         http://s/t/2\n"
    );
}

#[tokio::test]
async fn test_skipped_albums_are_returned() {
    let mut catalog = FakeCatalog::default().with_album("a1", vec![track("1", "A", "X", 1)]);
    catalog.failing_albums.push("a2".to_string());
    catalog
        .artist_albums
        .insert("ar".to_string(), vec![album("a1", "One"), album("a2", "Two")]);

    let (result, out) = drive(
        &catalog,
        SelectionMode::Artist("ar".to_string()),
        0,
        false,
        OutputFormat::Plain,
        1,
    )
    .await;

    let skipped = result.unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].id, "a2");
    assert_eq!(out, "http://s/t/1\n");
}

#[tokio::test]
async fn test_all_albums_failing_is_no_results() {
    let mut catalog = FakeCatalog::default();
    catalog.failing_albums.push("r1".to_string());
    catalog.random_albums.push(album("r1", "Broken"));

    let (result, out) = drive(
        &catalog,
        SelectionMode::Random,
        0,
        false,
        OutputFormat::Plain,
        1,
    )
    .await;

    assert!(matches!(result, Err(Error::NoResults)));
    assert!(out.is_empty());
}
