use crate::media::{DriveBasic, FileBasic, FolderBasic};
use crate::server::{AppContext, AppError, ListParams};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use mediaaccess_common::ProviderId;

pub fn filesystem_routes() -> Router<AppContext> {
    Router::new()
        .route("/filesystem/:provider/drives", get(drives))
        .route("/filesystem/:provider/folder/:id/basic", get(folder_basic))
        .route("/filesystem/:provider/folder/:id/folders", get(folders_listing))
        .route("/filesystem/:provider/folder/:id/files", get(files_listing))
        .route("/filesystem/:provider/file/:id/basic", get(file_basic))
}

async fn drives(
    State(ctx): State<AppContext>,
    Path(provider): Path<ProviderId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<DriveBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.filesystem_drives(provider, &query)).await.map(Json)
}

async fn folder_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<FolderBasic>, AppError> {
    ctx.run(move |s| s.filesystem_folder_basic_by_id(provider, &id))
        .await
        .map(Json)
}

async fn folders_listing(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FolderBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.filesystem_folders_listing(provider, &id, &query))
        .await
        .map(Json)
}

async fn files_listing(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FileBasic>>, AppError> {
    let query = params.query();
    ctx.run(move |s| s.filesystem_files_listing(provider, &id, &query))
        .await
        .map(Json)
}

async fn file_basic(
    State(ctx): State<AppContext>,
    Path((provider, id)): Path<(ProviderId, String)>,
) -> Result<Json<FileBasic>, AppError> {
    ctx.run(move |s| s.filesystem_file_basic_by_id(provider, &id))
        .await
        .map(Json)
}
