use crate::media::{MediaItem, SearchResult};
use crate::server::{AppContext, AppError};
use crate::service::ServiceDescription;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use mediaaccess_common::{ProviderId, WebMediaType};
use serde::Deserialize;

pub fn general_routes() -> Router<AppContext> {
    Router::new()
        .route("/description", get(description))
        .route("/search", get(search))
        .route("/item/:provider/:type/:id", get(media_item))
}

async fn description(State(ctx): State<AppContext>) -> Result<Json<ServiceDescription>, AppError> {
    ctx.run(|s| Ok(s.service_description())).await.map(Json)
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn search(
    State(ctx): State<AppContext>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    ctx.run(move |s| s.search(&params.q)).await.map(Json)
}

async fn media_item(
    State(ctx): State<AppContext>,
    Path((provider, media_type, id)): Path<(ProviderId, String, String)>,
) -> Result<Json<MediaItem>, AppError> {
    let media_type: WebMediaType = media_type.parse()?;
    ctx.run(move |s| s.media_item(provider, media_type, &id))
        .await
        .map(Json)
}
