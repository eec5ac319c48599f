use crate::error::ApiError;
use crate::models::ErrorBody;
use log::{error, info};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

pub mod admin;
pub mod auth;
pub mod complaints;
pub mod polls;

pub fn upload_url(base_url: &str, image_path: &str) -> String {
    format!("{}/uploads/{}", base_url, image_path.trim_start_matches('/'))
}

/// Decodes a backend reply. A 2xx body that is an `{"error": ..}` object is still a failure.
pub(crate) fn parse_reply<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }

    let value: serde_json::Value = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::Value::Object(Default::default())
    } else {
        serde_json::from_slice(body)?
    };

    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: message.to_owned(),
        });
    }

    Ok(serde_json::from_value(value)?)
}

async fn read_reply<T: DeserializeOwned>(path: &str, resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    match parse_reply(status, &body) {
        Ok(reply) => {
            info!("{} succeeded", path);
            Ok(reply)
        }
        Err(e) => {
            error!("{} failed: {}", path, e);
            Err(e)
        }
    }
}

pub(crate) async fn post_json<B, T>(
    client: &Client,
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = format!("{}{}", base_url, path);
    let resp = client.post(&url).json(body).send().await.map_err(|e| {
        error!("{} could not be reached: {}", path, e);
        ApiError::Network(e)
    })?;
    read_reply(path, resp).await
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let url = format!("{}{}", base_url, path);
    let resp = client.get(&url).query(query).send().await.map_err(|e| {
        error!("{} could not be reached: {}", path, e);
        ApiError::Network(e)
    })?;
    read_reply(path, resp).await
}
