//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which lays out a small media tree in a temporary
//! directory, registers catalog, picture, and filesystem providers over it,
//! and wraps the resulting [`MediaService`] in a full [`AppContext`].
//! [`get`] and [`get_json`] drive the router in-process via `oneshot`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use mediaaccess::backends::{Catalog, CatalogLibrary, LocalFileSystem, PictureFolders};
use mediaaccess::config::Config;
use mediaaccess::library::{FileStream, Items, MediaLibrary, MovieLibrary};
use mediaaccess::media::{
    Category, FileInfo, MovieBasic, MovieDetailed, MusicAlbumBasic, MusicArtistBasic,
    MusicTrackBasic, MusicTrackDetailed, SearchResult, TvEpisodeBasic, TvEpisodeDetailed,
    TvSeasonBasic, TvSeasonDetailed, TvShowBasic, TvShowDetailed,
};
use mediaaccess::registry::{Library, ProviderDescriptor, ProviderRegistry, RegistryBuilder};
use mediaaccess::server::{create_router, AppContext};
use mediaaccess::service::MediaService;
use mediaaccess_common::{CapabilityKind, ProviderId};

/// Bytes of the one movie file that exists on disk.
pub const MATRIX_BYTES: &[u8] = b"not really a matroska file";

/// Provider id of the backend that fails every call.
pub const FAILING_PROVIDER: u32 = 9;

/// Test harness wrapping a fully-constructed [`AppContext`] over a temporary
/// media tree.
pub struct TestHarness {
    pub ctx: AppContext,
    pub dir: TempDir,
}

impl TestHarness {
    /// Every fixture provider, all healthy.
    pub fn new() -> Self {
        Self::build(false)
    }

    /// The fixture providers plus movie provider [`FAILING_PROVIDER`], whose
    /// backend errors on every call.
    pub fn with_failing_movies() -> Self {
        Self::build(true)
    }

    fn build(failing: bool) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        write_media_tree(dir.path());

        let mut builder = ProviderRegistry::builder();
        register_fixtures(&mut builder, dir.path());
        if failing {
            builder
                .register(
                    ProviderDescriptor::new(CapabilityKind::Movie, FAILING_PROVIDER, "Broken", "stub"),
                    Library::Movie(Box::new(FailingLibrary)),
                )
                .expect("failing provider registers");
        }

        let service = MediaService::new(builder.build()).expect("standard path table builds");
        let ctx = AppContext::new(service, Config::default());
        Self { ctx, dir }
    }

    pub fn service(&self) -> &MediaService {
        &self.ctx.service
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone())
    }

    /// Absolute path of a fixture file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

fn write_media_tree(root: &Path) {
    let files: [(&str, &[u8]); 6] = [
        ("movies/matrix.mkv", MATRIX_BYTES),
        ("pictures/holiday/beach.jpg", b"jpeg"),
        ("pictures/holiday/sunset.png", b"png"),
        ("pictures/family/dinner.jpg", b"jpeg"),
        ("files/docs/readme.txt", b"hello"),
        ("files/video.mkv", b"mkv"),
    ];
    for (relative, content) in files {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
}

fn register_fixtures(builder: &mut RegistryBuilder, root: &Path) {
    let catalog = sample_catalog(root);

    builder
        .register(
            ProviderDescriptor::new(CapabilityKind::Movie, ProviderId::new(1), "Main movies", "catalog"),
            Library::Movie(Box::new(CatalogLibrary::new(catalog.clone(), CapabilityKind::Movie))),
        )
        .unwrap()
        .register(
            ProviderDescriptor::new(CapabilityKind::Movie, ProviderId::new(2), "Archive", "catalog"),
            Library::Movie(Box::new(CatalogLibrary::new(
                archive_catalog(),
                CapabilityKind::Movie,
            ))),
        )
        .unwrap()
        .register(
            ProviderDescriptor::new(CapabilityKind::TvShow, ProviderId::new(1), "Series", "catalog"),
            Library::TvShow(Box::new(CatalogLibrary::new(catalog.clone(), CapabilityKind::TvShow))),
        )
        .unwrap()
        .register(
            ProviderDescriptor::new(CapabilityKind::Music, ProviderId::new(1), "Records", "catalog"),
            Library::Music(Box::new(CatalogLibrary::new(catalog, CapabilityKind::Music))),
        )
        .unwrap()
        .register(
            ProviderDescriptor::new(CapabilityKind::Picture, ProviderId::new(1), "Photos", "pictures"),
            Library::Picture(Box::new(PictureFolders::new(vec![root.join("pictures")]))),
        )
        .unwrap()
        .register(
            ProviderDescriptor::new(CapabilityKind::FileSystem, ProviderId::new(1), "Disk", "filesystem"),
            Library::FileSystem(Box::new(LocalFileSystem::new(vec![root.join("files")]))),
        )
        .unwrap();
}

fn movie(id: &str, title: &str, year: i32, genres: &[&str], rating: Option<f32>) -> MovieDetailed {
    MovieDetailed {
        basic: MovieBasic {
            id: id.into(),
            title: title.into(),
            year: Some(year),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            rating,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn season(id: &str, show: &str, number: u32) -> TvSeasonDetailed {
    TvSeasonDetailed {
        basic: TvSeasonBasic {
            id: id.into(),
            show_id: show.into(),
            title: format!("Season {number}"),
            season_number: number,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn episode(id: &str, show: &str, season: &str, numbers: (u32, u32), title: &str) -> TvEpisodeDetailed {
    TvEpisodeDetailed {
        basic: TvEpisodeBasic {
            id: id.into(),
            show_id: show.into(),
            season_id: season.into(),
            title: title.into(),
            season_number: numbers.0,
            episode_number: numbers.1,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn track(id: &str, album: &str, number: u32, title: &str, genre: &str) -> MusicTrackDetailed {
    MusicTrackDetailed {
        basic: MusicTrackBasic {
            id: id.into(),
            title: title.into(),
            album_id: Some(album.into()),
            track_number: Some(number),
            genres: vec![genre.into()],
            ..Default::default()
        },
        ..Default::default()
    }
}

fn album(id: &str, title: &str, artist: &str, genre: &str) -> MusicAlbumBasic {
    MusicAlbumBasic {
        id: id.into(),
        title: title.into(),
        album_artist_id: Some(artist.into()),
        genres: vec![genre.into()],
        ..Default::default()
    }
}

/// Movies, TV, and music sharing one catalog, as a real catalog file would.
pub fn sample_catalog(root: &Path) -> Catalog {
    let classics = Category::new("c1", "Classics");

    let mut matrix = movie("m1", "The Matrix", 1999, &["Action", "Sci-Fi"], Some(8.7));
    matrix.basic.categories = vec![classics.clone()];
    matrix.basic.path = vec![root.join("movies/matrix.mkv").to_string_lossy().into_owned()];
    matrix.basic.cover_paths = vec![root.join("movies/missing.jpg").to_string_lossy().into_owned()];

    let mut heat = movie("m3", "Heat", 1995, &["Action", "Crime"], Some(8.3));
    heat.basic.categories = vec![classics];

    let mut breaking_bad = TvShowDetailed {
        basic: TvShowBasic {
            id: "s1".into(),
            title: "Breaking Bad".into(),
            genres: vec!["Drama".into()],
            ..Default::default()
        },
        ..Default::default()
    };
    breaking_bad.basic.season_count = 2;
    let the_wire = TvShowDetailed {
        basic: TvShowBasic {
            id: "s2".into(),
            title: "The Wire".into(),
            genres: vec!["Crime".into(), "Drama".into()],
            ..Default::default()
        },
        ..Default::default()
    };

    Catalog {
        movies: vec![
            matrix,
            movie("m2", "Alien", 1979, &["Horror", "Sci-Fi"], Some(8.5)),
            heat,
            movie("m4", "Brazil", 1985, &["Comedy"], None),
        ],
        tvshows: vec![breaking_bad, the_wire],
        seasons: vec![season("se1", "s1", 1), season("se2", "s1", 2), season("se3", "s2", 1)],
        episodes: vec![
            episode("e1", "s1", "se1", (1, 1), "Pilot"),
            episode("e2", "s1", "se1", (1, 2), "Cat's in the Bag"),
            episode("e3", "s1", "se2", (2, 1), "Seven Thirty-Seven"),
            episode("e4", "s2", "se3", (1, 1), "The Target"),
        ],
        tracks: vec![
            track("t1", "al1", 1, "Airbag", "Rock"),
            track("t2", "al1", 2, "Paranoid Android", "Rock"),
            track("t3", "al2", 1, "Everything In Its Right Place", "Electronic"),
        ],
        albums: vec![
            album("al1", "OK Computer", "ar1", "Rock"),
            album("al2", "Kid A", "ar1", "Electronic"),
        ],
        artists: vec![MusicArtistBasic {
            id: "ar1".into(),
            title: "Radiohead".into(),
            ..Default::default()
        }],
    }
}

/// A second movie catalog that reuses id `m1` for a different film.
pub fn archive_catalog() -> Catalog {
    Catalog {
        movies: vec![movie("m1", "Matrix Reloaded", 2003, &["Action"], Some(7.2))],
        ..Default::default()
    }
}

/// A movie backend whose every call fails.
pub struct FailingLibrary;

impl MediaLibrary for FailingLibrary {
    fn search(&self, _text: &str) -> anyhow::Result<Items<'_, SearchResult>> {
        anyhow::bail!("search index offline")
    }

    fn file_info(&self, _path: &str) -> anyhow::Result<FileInfo> {
        anyhow::bail!("storage offline")
    }

    fn open_file(&self, _path: &str) -> anyhow::Result<FileStream> {
        anyhow::bail!("storage offline")
    }
}

impl MovieLibrary for FailingLibrary {
    fn movies_basic(&self) -> anyhow::Result<Items<'_, MovieBasic>> {
        anyhow::bail!("database locked")
    }

    fn movies_detailed(&self) -> anyhow::Result<Items<'_, MovieDetailed>> {
        anyhow::bail!("database locked")
    }
}

/// Issue a GET against the router and collect the whole body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Issue a GET and parse the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
