use crate::media::{Category, ItemCount, PictureBasic, PictureDetailed};
use crate::server::{AppContext, AppError, ListParams};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use mediaaccess_common::ProviderId;

pub fn picture_routes() -> Router<AppContext> {
    Router::new()
        .route("/pictures/:provider/categories", get(categories))
        .route("/pictures/:provider/count", get(count))
        .route("/pictures/:provider/basic", get(list_basic))
        .route("/pictures/:provider/detailed", get(list_detailed))
        .route("/pictures/:provider/category/:id/basic", get(category_basic))
        .route("/pictures/:provider/category/:id/detailed", get(category_detailed))
        .route("/pictures/:provider/picture/:id/basic", get(picture_basic))
        .route("/pictures/:provider/picture/:id/detailed", get(picture_detailed))
}

async fn categories(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
) -> Result<Json<Vec<Category>>, AppError> {
    ctx.run(move |s| s.picture_categories(provider)).await.map(Json)
}

async fn count(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
) -> Result<Json<ItemCount>, AppError> {
    ctx.run(move |s| s.picture_count(provider)).await.map(Json)
}

async fn list_basic(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PictureBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.pictures_basic(provider, &query)).await.map(Json)
}

async fn list_detailed(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PictureDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.pictures_detailed(provider, &query)).await.map(Json)
}

async fn category_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PictureBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.pictures_basic_by_category(provider, &id, &query))
        .await
        .map(Json)
}

async fn category_detailed(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PictureDetailed>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.pictures_detailed_by_category(provider, &id, &query))
        .await
        .map(Json)
}

async fn picture_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<PictureBasic>, AppError> {
    ctx.run(move |s| s.picture_basic_by_id(provider, &id)).await.map(Json)
}

async fn picture_detailed(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<PictureDetailed>, AppError> {
    ctx.run(move |s| s.picture_detailed_by_id(provider, &id)).await.map(Json)
}
