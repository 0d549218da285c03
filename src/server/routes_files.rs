//! File descriptors, raw paths and byte streams for any media entity.
//!
//! The media type and file role segments are parsed by hand so that an
//! unknown value surfaces as `invalid_media_type` rather than a generic
//! path rejection.

use crate::library::FileStream;
use crate::media::FileInfo;
use crate::server::{AppContext, AppError};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use mediaaccess_common::{paths, FileRole, ProviderId, WebMediaType};
use std::io::Read;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

const CHUNK_SIZE: usize = 64 * 1024;

pub fn file_routes() -> Router<AppContext> {
    Router::new()
        .route("/paths/:provider/:type/:role/:id", get(path_list))
        .route("/files/:provider/:type/:role/:id/:offset/info", get(file_info))
        .route("/files/:provider/:type/:role/:id/:offset/local", get(is_local_file))
        .route("/files/:provider/:type/:role/:id/:offset/stream", get(stream_file))
}

/// A parsed `/files/...` address.
struct FileTarget {
    provider: ProviderId,
    media_type: WebMediaType,
    role: FileRole,
    id: String,
    offset: usize,
}

impl FileTarget {
    fn parse(
        (provider, media_type, role, id, offset): (ProviderId, String, String, String, usize),
    ) -> Result<Self, AppError> {
        Ok(Self {
            provider,
            media_type: media_type.parse()?,
            role: role.parse()?,
            id,
            offset,
        })
    }
}

type FilePath = Path<(ProviderId, String, String, String, usize)>;

async fn path_list(
    State(ctx): State<AppContext>,
    Path((provider, media_type, role, id)): Path<(ProviderId, String, String, String)>,
) -> Result<Json<Vec<String>>, AppError> {
    let media_type: WebMediaType = media_type.parse()?;
    let role: FileRole = role.parse()?;
    ctx.run(move |s| s.path_list(provider, media_type, role, &id))
        .await
        .map(Json)
}

async fn file_info(State(ctx): State<AppContext>, Path(raw): FilePath) -> Result<Response, AppError> {
    let t = FileTarget::parse(raw)?;
    let info: FileInfo = ctx
        .run(move |s| Ok(s.file_info(t.provider, t.media_type, t.role, &t.id, t.offset)))
        .await?;

    let status = if info.exists {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(info)).into_response())
}

async fn is_local_file(
    State(ctx): State<AppContext>,
    Path(raw): FilePath,
) -> Result<Json<bool>, AppError> {
    let t = FileTarget::parse(raw)?;
    ctx.run(move |s| Ok(s.is_local_file(t.provider, t.media_type, t.role, &t.id, t.offset)))
        .await
        .map(Json)
}

async fn stream_file(State(ctx): State<AppContext>, Path(raw): FilePath) -> Result<Response, AppError> {
    let t = FileTarget::parse(raw)?;
    let opened = ctx
        .run(move |s| Ok(s.open_described(t.provider, t.media_type, t.role, &t.id, t.offset)))
        .await?;

    let Some((info, stream)) = opened else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let content_type = info
        .name
        .as_deref()
        .map(|name| paths::content_type(std::path::Path::new(name)))
        .unwrap_or("application/octet-stream");

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type);
    if info.size > 0 {
        response = response.header(header::CONTENT_LENGTH, info.size);
    }

    response
        .body(Body::from_stream(body_stream(stream)))
        .map_err(|e| AppError::new(mediaaccess_common::Error::Internal(e.to_string())))
}

/// Pump a blocking reader into a channel-backed body stream.
fn body_stream(mut reader: FileStream) -> ReceiverStream<std::io::Result<Bytes>> {
    let (tx, rx) = mpsc::channel(4);

    tokio::task::spawn_blocking(move || {
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.blocking_send(Ok(Bytes::copy_from_slice(&buf[..n]))).is_err() {
                        // Client went away
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!("File stream read failed: {}", e);
                    let _ = tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    ReceiverStream::new(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::io::Cursor;

    #[tokio::test]
    async fn body_stream_yields_all_bytes_in_chunks() {
        let data = vec![7u8; CHUNK_SIZE + 10];
        let reader: FileStream = Box::new(Cursor::new(data.clone()));

        let chunks: Vec<Bytes> = body_stream(reader)
            .map(|chunk| chunk.unwrap())
            .collect()
            .await;

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.concat(), data);
    }

    #[tokio::test]
    async fn body_stream_of_empty_reader_ends_immediately() {
        let reader: FileStream = Box::new(Cursor::new(Vec::new()));
        let chunks: Vec<_> = body_stream(reader).collect().await;
        assert!(chunks.is_empty());
    }

    #[test]
    fn target_rejects_unknown_role() {
        let raw = (ProviderId::new(1), "movie".into(), "thumb".into(), "m1".into(), 0);
        assert!(FileTarget::parse(raw).is_err());
    }
}
