//! HTTP facade over the metadata fetcher.
//!
//! Exposes `GET /song?name=<query>` returning the metadata record as JSON
//! and `GET /cover?url=<url>` returning raw image bytes.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use log::{error, info};
use serde::Deserialize;

use rdeezer::clients::DeezerClient;
use rdeezer::fetcher::MetadataFetcher;

type Fetcher = Arc<MetadataFetcher<DeezerClient>>;

#[derive(Deserialize)]
struct SongParams {
    name: String,
}

#[derive(Deserialize)]
struct CoverParams {
    url: String,
}

async fn get_song(State(fetcher): State<Fetcher>, Query(params): Query<SongParams>) -> Response {
    match fetcher.get_song_data(&params.name).await {
        Ok(Some(metadata)) => Json(metadata).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "no matching track").into_response(),
        Err(err) => {
            error!("Song lookup failed: {err}");
            (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
        }
    }
}

async fn get_cover(State(fetcher): State<Fetcher>, Query(params): Query<CoverParams>) -> Response {
    match fetcher.get_cover_image(&params.url).await {
        Ok(bytes) => bytes.into_response(),
        Err(err) => {
            error!("Cover fetch failed: {err}");
            (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let fetcher: Fetcher = Arc::new(MetadataFetcher::try_default()?);
    let app = Router::new()
        .route("/song", get(get_song))
        .route("/cover", get(get_cover))
        .with_state(fetcher);

    let addr = std::env::var("HTTP_API_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
