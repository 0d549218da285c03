use crate::media::{
    Category, Genre, ItemCount, TvEpisodeBasic, TvEpisodeDetailed, TvSeasonBasic,
    TvSeasonDetailed, TvShowBasic, TvShowDetailed,
};
use crate::server::{AppContext, AppError, ListParams, RangeParams};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use mediaaccess_common::ProviderId;

pub fn tvshow_routes() -> Router<AppContext> {
    Router::new()
        .route("/tv/:provider/categories", get(categories))
        .route("/tv/:provider/genres", get(genres))
        // Shows
        .route("/tv/:provider/shows/count", get(show_count))
        .route("/tv/:provider/shows/basic", get(shows_basic))
        .route("/tv/:provider/shows/detailed", get(shows_detailed))
        .route("/tv/:provider/shows/range/basic", get(shows_range_basic))
        .route("/tv/:provider/shows/range/detailed", get(shows_range_detailed))
        .route("/tv/:provider/show/:id/basic", get(show_basic))
        .route("/tv/:provider/show/:id/detailed", get(show_detailed))
        // Seasons of a show
        .route("/tv/:provider/show/:id/seasons/count", get(season_count_for_show))
        .route("/tv/:provider/show/:id/seasons/basic", get(seasons_basic_for_show))
        .route("/tv/:provider/show/:id/seasons/detailed", get(seasons_detailed_for_show))
        // Episodes of a show
        .route("/tv/:provider/show/:id/episodes/count", get(episode_count_for_show))
        .route("/tv/:provider/show/:id/episodes/basic", get(episodes_basic_for_show))
        .route("/tv/:provider/show/:id/episodes/detailed", get(episodes_detailed_for_show))
        .route(
            "/tv/:provider/show/:id/episodes/range/basic",
            get(episodes_range_basic_for_show),
        )
        .route(
            "/tv/:provider/show/:id/episodes/range/detailed",
            get(episodes_range_detailed_for_show),
        )
        // Seasons
        .route("/tv/:provider/season/:id/basic", get(season_basic))
        .route("/tv/:provider/season/:id/detailed", get(season_detailed))
        .route("/tv/:provider/season/:id/episodes/count", get(episode_count_for_season))
        .route("/tv/:provider/season/:id/episodes/basic", get(episodes_basic_for_season))
        .route("/tv/:provider/season/:id/episodes/detailed", get(episodes_detailed_for_season))
        // Episodes
        .route("/tv/:provider/episodes/count", get(episode_count))
        .route("/tv/:provider/episodes/range/basic", get(episodes_range_basic))
        .route("/tv/:provider/episodes/range/detailed", get(episodes_range_detailed))
        .route("/tv/:provider/episode/:id/basic", get(episode_basic))
        .route("/tv/:provider/episode/:id/detailed", get(episode_detailed))
}

type Ctx = State<AppContext>;
type Provider = Path<ProviderId>;
type ProviderAndId = Path<(ProviderId, String)>;

async fn categories(State(ctx): Ctx, Path(provider): Provider) -> Result<Json<Vec<Category>>, AppError> {
    ctx.run(move |s| s.tvshow_categories(provider)).await.map(Json)
}

async fn genres(State(ctx): Ctx, Path(provider): Provider) -> Result<Json<Vec<Genre>>, AppError> {
    ctx.run(move |s| s.tvshow_genres(provider)).await.map(Json)
}

// -- Shows -------------------------------------------------------------------

async fn show_count(
    State(ctx): Ctx,
    Path(provider): Provider,
    Query(params): Query<ListParams>,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| {
        s.tvshow_count(provider, params.genre.as_deref(), params.category.as_deref())
    })
    .await
    .map(Json)
}

async fn shows_basic(
    State(ctx): Ctx,
    Path(provider): Provider,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvShowBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvshows_basic(provider, &query)).await.map(Json)
}

async fn shows_detailed(
    State(ctx): Ctx,
    Path(provider): Provider,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvShowDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvshows_detailed(provider, &query)).await.map(Json)
}

async fn shows_range_basic(
    State(ctx): Ctx,
    Path(provider): Provider,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvShowBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvshows_basic_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn shows_range_detailed(
    State(ctx): Ctx,
    Path(provider): Provider,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvShowDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvshows_detailed_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn show_basic(State(ctx): Ctx, Path((provider, id)): ProviderAndId) -> Result<Json<TvShowBasic>, AppError> {
    ctx.run(move |s| s.tvshow_basic_by_id(provider, &id)).await.map(Json)
}

async fn show_detailed(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<TvShowDetailed>, AppError> {
    ctx.run(move |s| s.tvshow_detailed_by_id(provider, &id)).await.map(Json)
}

// -- Seasons of a show -------------------------------------------------------

async fn season_count_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| s.tvseason_count_for_tvshow(provider, &id)).await.map(Json)
}

async fn seasons_basic_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvSeasonBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvseasons_basic_for_tvshow(provider, &id, &query))
        .await
        .map(Json)
}

async fn seasons_detailed_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvSeasonDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvseasons_detailed_for_tvshow(provider, &id, &query))
        .await
        .map(Json)
}

// -- Episodes of a show ------------------------------------------------------

async fn episode_count_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| s.tvepisode_count_for_tvshow(provider, &id)).await.map(Json)
}

async fn episodes_basic_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvepisodes_basic_for_tvshow(provider, &id, &query))
        .await
        .map(Json)
}

async fn episodes_detailed_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvepisodes_detailed_for_tvshow(provider, &id, &query))
        .await
        .map(Json)
}

async fn episodes_range_basic_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| {
        s.tvepisodes_basic_for_tvshow_by_range(provider, &id, range.start, range.end, &query)
    })
    .await
    .map(Json)
}

async fn episodes_range_detailed_for_show(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| {
        s.tvepisodes_detailed_for_tvshow_by_range(provider, &id, range.start, range.end, &query)
    })
    .await
    .map(Json)
}

// -- Seasons -----------------------------------------------------------------

async fn season_basic(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<TvSeasonBasic>, AppError> {
    ctx.run(move |s| s.tvseason_basic_by_id(provider, &id)).await.map(Json)
}

async fn season_detailed(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<TvSeasonDetailed>, AppError> {
    ctx.run(move |s| s.tvseason_detailed_by_id(provider, &id)).await.map(Json)
}

async fn episode_count_for_season(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| s.tvepisode_count_for_season(provider, &id)).await.map(Json)
}

async fn episodes_basic_for_season(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvepisodes_basic_for_season(provider, &id, &query))
        .await
        .map(Json)
}

async fn episodes_detailed_for_season(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvepisodes_detailed_for_season(provider, &id, &query))
        .await
        .map(Json)
}

// -- Episodes ----------------------------------------------------------------

async fn episode_count(State(ctx): Ctx, Path(provider): Provider) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| s.tvepisode_count(provider)).await.map(Json)
}

async fn episodes_range_basic(
    State(ctx): Ctx,
    Path(provider): Provider,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvepisodes_basic_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn episodes_range_detailed(
    State(ctx): Ctx,
    Path(provider): Provider,
    Query(range): Query<RangeParams>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TvEpisodeDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.tvepisodes_detailed_by_range(provider, range.start, range.end, &query))
        .await
        .map(Json)
}

async fn episode_basic(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<TvEpisodeBasic>, AppError> {
    ctx.run(move |s| s.tvepisode_basic_by_id(provider, &id)).await.map(Json)
}

async fn episode_detailed(
    State(ctx): Ctx,
    Path((provider, id)): ProviderAndId,
) -> Result<Json<TvEpisodeDetailed>, AppError> {
    ctx.run(move |s| s.tvepisode_detailed_by_id(provider, &id)).await.map(Json)
}
