use crate::media::{
    Category, Genre, ItemCount, MusicAlbumBasic, MusicArtistBasic, MusicTrackBasic,
    MusicTrackDetailed,
};
use crate::query::ListQuery;
use crate::server::{AppContext, AppError, ListParams, RangeParams};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use mediaaccess_common::{OrderBy, ProviderId, SortBy};
use serde::Deserialize;

/// List parameters for tracks. Tracks carry no categories; a `category`
/// parameter is ignored.
#[derive(Debug, Default, Deserialize)]
struct TrackParams {
    genre: Option<String>,
    sort: Option<SortBy>,
    order: Option<OrderBy>,
}

impl TrackParams {
    fn query(self) -> ListQuery {
        ListQuery {
            genre: self.genre,
            category: None,
            sort: self.sort.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}

pub fn music_routes() -> Router<AppContext> {
    Router::new()
        .route("/music/:provider/categories", get(categories))
        .route("/music/:provider/genres", get(genres))
        // Tracks
        .route("/music/:provider/tracks/count", get(track_count))
        .route("/music/:provider/tracks/basic", get(tracks_basic))
        .route("/music/:provider/tracks/detailed", get(tracks_detailed))
        .route("/music/:provider/tracks/range/basic", get(tracks_range_basic))
        .route("/music/:provider/tracks/range/detailed", get(tracks_range_detailed))
        .route("/music/:provider/track/:id/basic", get(track_basic))
        .route("/music/:provider/track/:id/detailed", get(track_detailed))
        // Albums
        .route("/music/:provider/albums/count", get(album_count))
        .route("/music/:provider/albums/basic", get(albums_basic))
        .route("/music/:provider/albums/range/basic", get(albums_range_basic))
        .route("/music/:provider/album/:id/basic", get(album_basic))
        .route("/music/:provider/album/:id/tracks/basic", get(album_tracks_basic))
        .route("/music/:provider/album/:id/tracks/detailed", get(album_tracks_detailed))
        // Artists
        .route("/music/:provider/artists/count", get(artist_count))
        .route("/music/:provider/artists/basic", get(artists_basic))
        .route("/music/:provider/artists/range/basic", get(artists_range_basic))
        .route("/music/:provider/artist/:id/basic", get(artist_basic))
        .route("/music/:provider/artist/:id/albums/basic", get(artist_albums_basic))
}

async fn categories(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
) -> Result<Json<Vec<Category>>, AppError> {
    ctx.run(move |s| s.music_categories(provider)).await.map(Json)
}

async fn genres(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
) -> Result<Json<Vec<Genre>>, AppError> {
    ctx.run(move |s| s.music_genres(provider)).await.map(Json)
}

async fn track_count(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<TrackParams>,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| s.music_track_count(provider, params.genre.as_deref()))
        .await
        .map(Json)
}

async fn tracks_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<TrackParams>,
) -> Result<Json<Vec<MusicTrackBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_tracks_basic(provider, &query)).await.map(Json)
}

async fn tracks_detailed(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<TrackParams>,
) -> Result<Json<Vec<MusicTrackDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_tracks_detailed(provider, &query)).await.map(Json)
}

async fn tracks_range_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(range): Query<RangeParams>,
    Query(params): Query<TrackParams>,
) -> Result<Json<Vec<MusicTrackBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_tracks_basic_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn tracks_range_detailed(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(range): Query<RangeParams>,
    Query(params): Query<TrackParams>,
) -> Result<Json<Vec<MusicTrackDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_tracks_detailed_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn track_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<MusicTrackBasic>, AppError> {
    ctx.run(move |s| s.music_track_basic_by_id(provider, &id)).await.map(Json)
}

async fn track_detailed(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<MusicTrackDetailed>, AppError> {
    ctx.run(move |s| s.music_track_detailed_by_id(provider, &id)).await.map(Json)
}

async fn album_count(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| {
        s.music_album_count(provider, params.genre.as_deref(), params.category.as_deref())
    })
    .await
    .map(Json)
}

async fn albums_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MusicAlbumBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_albums_basic(provider, &query)).await.map(Json)
}

async fn albums_range_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MusicAlbumBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_albums_basic_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn album_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<MusicAlbumBasic>, AppError> {
    ctx.run(move |s| s.music_album_basic_by_id(provider, &id)).await.map(Json)
}

async fn album_tracks_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
    Query(params): Query<TrackParams>,
) -> Result<Json<Vec<MusicTrackBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_tracks_basic_for_album(provider, &id, &query))
        .await
        .map(Json)
}

async fn album_tracks_detailed(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
    Query(params): Query<TrackParams>,
) -> Result<Json<Vec<MusicTrackDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_tracks_detailed_for_album(provider, &id, &query))
        .await
        .map(Json)
}

async fn artist_count(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| s.music_artist_count(provider, params.category.as_deref()))
        .await
        .map(Json)
}

async fn artists_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MusicArtistBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_artists_basic(provider, &query)).await.map(Json)
}

async fn artists_range_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MusicArtistBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_artists_basic_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn artist_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<MusicArtistBasic>, AppError> {
    ctx.run(move |s| s.music_artist_basic_by_id(provider, &id)).await.map(Json)
}

async fn artist_albums_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MusicAlbumBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.music_albums_basic_for_artist(provider, &id, &query))
        .await
        .map(Json)
}
