use std::collections::HashMap;
use axum::{
    extract::{FromRequest, Multipart, Query, Request, State},
    extract::rejection::QueryRejection,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use log::{debug, error, warn};

use crate::layout::SAMPLE_MARKDOWN;
use crate::server::app::AppState;

/// Body fields that may carry the markdown, in order of preference
const MARKDOWN_FIELDS: [&str; 2] = ["md", "markdown"];

/// First value of each form field. `None` marks a file upload.
type FormFields = HashMap<String, Option<String>>;

/// `GET /`: render the first `md` query parameter, or the sample document
pub async fn render_from_query(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let source = match query {
        Ok(Query(pairs)) => pairs.into_iter().find(|(name, _)| name == "md").map(|(_, value)| value),
        Err(e) => {
            warn!("Ignoring malformed query string: {}", e);
            None
        }
    };

    render_page(&state, source.as_deref().unwrap_or(SAMPLE_MARKDOWN))
}

/// `POST /`: render markdown read from the request body, or the sample document
pub async fn render_from_body(State(state): State<AppState>, request: Request) -> Response {
    let source = read_markdown_from_body(request).await;
    render_page(&state, source.as_deref().unwrap_or(SAMPLE_MARKDOWN))
}

/// Render `source` into a full page response
fn render_page(state: &AppState, source: &str) -> Response {
    let rendered = state.renderer.render(source);

    match state.pages.render(source, &rendered) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Pull the markdown out of a request body according to its content type.
///
/// Returns `None` when the body holds no usable markdown, including every
/// case where the body cannot be decoded.
pub async fn read_markdown_from_body(request: Request) -> Option<String> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    debug!("Reading markdown from a {:?} body", content_type);

    if content_type.contains("application/json") {
        read_json(request).await
    } else if content_type.contains("application/x-www-form-urlencoded") {
        read_form(request).await
    } else if content_type.contains("multipart/form-data") {
        read_multipart(request).await
    } else {
        read_raw(request).await
    }
}

async fn read_json(request: Request) -> Option<String> {
    match Json::<serde_json::Value>::from_request(request, &()).await {
        Ok(Json(payload)) => markdown_from_json(&payload),
        Err(e) => {
            warn!("Falling back to the sample document, invalid JSON body: {}", e);
            None
        }
    }
}

/// `md` wins over `markdown` whenever it is present and not null, even if it
/// is not a string
fn markdown_from_json(payload: &serde_json::Value) -> Option<String> {
    let value = MARKDOWN_FIELDS
        .iter()
        .filter_map(|field| payload.get(*field))
        .find(|value| !value.is_null())?;

    value.as_str().map(str::to_string)
}

/// `md` wins over `markdown` whenever it is present, even as a file upload,
/// which carries no markdown
fn markdown_from_fields(mut fields: FormFields) -> Option<String> {
    MARKDOWN_FIELDS
        .iter()
        .find_map(|field| fields.remove(*field))
        .flatten()
}

async fn read_form(request: Request) -> Option<String> {
    match Form::<Vec<(String, String)>>::from_request(request, &()).await {
        Ok(Form(pairs)) => {
            let mut fields = FormFields::new();
            for (name, value) in pairs {
                fields.entry(name).or_insert(Some(value));
            }
            markdown_from_fields(fields)
        }
        Err(e) => {
            warn!("Falling back to the sample document, invalid form body: {}", e);
            None
        }
    }
}

async fn read_multipart(request: Request) -> Option<String> {
    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(e) => {
            warn!("Falling back to the sample document, invalid multipart body: {}", e);
            return None;
        }
    };

    let mut fields = FormFields::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Falling back to the sample document, invalid multipart body: {}", e);
                return None;
            }
        };

        let name = match field.name() {
            Some(name) if MARKDOWN_FIELDS.contains(&name) && !fields.contains_key(name) => {
                name.to_string()
            }
            _ => continue,
        };

        if field.file_name().is_some() {
            fields.insert(name, None);
            continue;
        }

        match field.text().await {
            Ok(text) => {
                fields.insert(name, Some(text));
            }
            Err(e) => {
                warn!("Falling back to the sample document, unreadable multipart field: {}", e);
                return None;
            }
        }
    }

    markdown_from_fields(fields)
}

async fn read_raw(request: Request) -> Option<String> {
    match String::from_request(request, &()).await {
        Ok(raw) if !raw.trim().is_empty() => Some(raw),
        Ok(_) => None,
        Err(e) => {
            warn!("Falling back to the sample document, unreadable body: {}", e);
            None
        }
    }
}
