//! Axum request handlers for the HTTP API.
use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::jobs::JobKind;

pub async fn root() -> &'static str {
    "Stylize API Gateway"
}

pub async fn transform_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Json<Value> {
    submit(state, JobKind::Image, multipart).await
}

pub async fn animate_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Json<Value> {
    submit(state, JobKind::Video, multipart).await
}

pub async fn transform_status(
    State(state): State<Arc<AppState>>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Json<Value> {
    status(state, JobKind::Image, params).await
}

pub async fn animate_status(
    State(state): State<Arc<AppState>>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Json<Value> {
    status(state, JobKind::Video, params).await
}

// Every failure path answers {"ok": false}; causes are only logged. A bad
// request or a provider outage must never take the process down.
async fn submit(state: Arc<AppState>, kind: JobKind, multipart: Multipart) -> Json<Value> {
    let (image, content_type, style_id) = match read_upload(multipart).await {
        Ok(parts) => parts,
        Err(e) => {
            tracing::warn!("Rejected upload: {}", e);
            return Json(json!({"ok": false}));
        }
    };
    match state.submitter.submit(kind, &image, content_type.as_deref(), &style_id).await {
        Ok(receipt) => Json(json!({"ok": true, "id": receipt.id()})),
        Err(e) => {
            tracing::error!("Failed to submit job: {:?}", e);
            Json(json!({"ok": false}))
        }
    }
}

async fn status(
    state: Arc<AppState>,
    kind: JobKind,
    params: std::collections::HashMap<String, String>,
) -> Json<Value> {
    let id = match params.get("id").filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => {
            tracing::warn!("Status query without an id");
            return Json(json!({"ok": false}));
        }
    };
    match state.tracker.resolve_status(&state.provider_client, kind, id).await {
        Ok(job) => {
            let mut body = json!({"ok": true, "status": job.status});
            if let Some(url) = job.output_url {
                body["output_url"] = json!(url);
            }
            Json(body)
        }
        Err(e) => {
            tracing::error!("Failed to resolve status for '{}': {:?}", id, e);
            Json(json!({"ok": false}))
        }
    }
}

/// Pull the image bytes and style identifier out of a multipart upload.
///
/// A missing style field is fine (it resolves to the default spec); a
/// missing or empty image field is not.
async fn read_upload(mut multipart: Multipart) -> Result<(Vec<u8>, Option<String>, String), String> {
    let mut image: Option<(Vec<u8>, Option<String>)> = None;
    let mut style_id = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read multipart field: {}", e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read image data: {}", e))?;
                image = Some((data.to_vec(), content_type));
            }
            Some("style") => {
                style_id = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read style field: {}", e))?;
            }
            other => {
                tracing::debug!("Ignoring multipart field: {:?}", other);
            }
        }
    }

    let (data, content_type) = image.ok_or_else(|| "Missing 'image' field in multipart request".to_string())?;
    if data.is_empty() {
        return Err("Uploaded 'image' field is empty".to_string());
    }
    Ok((data, content_type, style_id))
}
