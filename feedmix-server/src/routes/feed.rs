use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::errors::ApiError;
use crate::request::FeedRequest;
use crate::state::AppState;

/// GET /?count=&offset=
///
/// Responds with the window as a JSON array. The array may be shorter than `count`
/// when providers could not fill every position.
pub async fn feed_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let req = FeedRequest::parse(&query, &headers, peer, &state.limits)?;
    let window = req.window()?;

    let items = state.feed.feed(window, &req.user_ip.to_string()).await;

    // Encode fully before writing so a failure still yields a clean 500.
    let body = serde_json::to_vec(&items).context("encoding feed response")?;

    tracing::debug!(
        user_ip = %req.user_ip,
        offset = req.offset,
        count = req.count,
        returned = items.len(),
        "served feed"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
