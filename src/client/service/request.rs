use dioxus_logger::tracing;
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::error::{api::classify_error, ApiError};

async fn send(request: Request, url: &str) -> Result<Response, ApiError> {
    let response = request
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            ApiError::Request(e.to_string())
        })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = classify_error(status, &body);
    tracing::warn!("Request to {} returned {}: {}", url, status, error);

    Err(error)
}

fn with_json_body<B: Serialize>(request: Request, body: &B) -> Result<Request, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))?;

    Ok(request
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .body(body))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let request = Request::get(url).header("Accept", "application/json");
    let response = send(request, url).await?;

    parse_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_json_body(Request::post(url), body)?;
    let response = send(request, url).await?;

    parse_json(response).await
}

/// Sends a JSON body and ignores whatever the server answers with on success.
pub async fn send_json<B: Serialize>(request: Request, url: &str, body: &B) -> Result<(), ApiError> {
    let request = with_json_body(request, body)?;
    send(request, url).await.map(|_| ())
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    send(Request::delete(url), url).await.map(|_| ())
}
