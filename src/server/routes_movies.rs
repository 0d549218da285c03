use crate::media::{Category, Genre, ItemCount, MovieBasic, MovieDetailed};
use crate::server::{AppContext, AppError, ListParams, RangeParams};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use mediaaccess_common::ProviderId;

pub fn movie_routes() -> Router<AppContext> {
    Router::new()
        .route("/movies/:provider/categories", get(categories))
        .route("/movies/:provider/genres", get(genres))
        .route("/movies/:provider/count", get(count))
        .route("/movies/:provider/basic", get(list_basic))
        .route("/movies/:provider/detailed", get(list_detailed))
        .route("/movies/:provider/range/basic", get(range_basic))
        .route("/movies/:provider/range/detailed", get(range_detailed))
        .route("/movies/:provider/movie/:id/basic", get(movie_basic))
        .route("/movies/:provider/movie/:id/detailed", get(movie_detailed))
}

async fn categories(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
) -> Result<Json<Vec<Category>>, AppError> {
    ctx.run(move |s| s.movie_categories(provider)).await.map(Json)
}

async fn genres(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
) -> Result<Json<Vec<Genre>>, AppError> {
    ctx.run(move |s| s.movie_genres(provider)).await.map(Json)
}

async fn count(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| {
        s.movie_count(provider, params.genre.as_deref(), params.category.as_deref())
    })
    .await
    .map(Json)
}

async fn list_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MovieBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.movies_basic(provider, &query)).await.map(Json)
}

async fn list_detailed(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MovieDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.movies_detailed(provider, &query)).await.map(Json)
}

async fn range_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MovieBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.movies_basic_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn range_detailed(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MovieDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.movies_detailed_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn movie_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<MovieBasic>, AppError> {
    ctx.run(move |s| s.movie_basic_by_id(provider, &id)).await.map(Json)
}

async fn movie_detailed(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<MovieDetailed>, AppError> {
    ctx.run(move |s| s.movie_detailed_by_id(provider, &id)).await.map(Json)
}
