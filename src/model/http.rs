/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Sends a single HTTP request and returns the status together with the raw body
///
/// No status code is treated as a failure here: Marketo reports business errors
/// inside the body, and the caller decides what an unparsable body means. There is
/// no retry; a transport failure is returned as `AppError::Transport`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query string parameters
/// * `body` - Optional request body, serialized as JSON
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<(StatusCode, String), AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        AppError::Transport(e)
    })?;
    let status = response.status();
    debug!("Response status: {}", status);

    let text = response.text().await?;
    Ok((status, text))
}

/// Parses a raw reply into the Marketo envelope
///
/// # Errors
/// `AppError::MalformedResponse` when the body is not a JSON envelope, whatever the
/// status code was.
pub fn parse_api_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<ApiResponse<T>, AppError> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(response) => {
            if !status.is_success() {
                warn!(
                    "HTTP {} carried a Marketo envelope (request {}), using its success flag",
                    status, response.request_id
                );
            }
            Ok(response)
        }
        Err(e) => {
            error!("Malformed response with status {}: {}", status, e);
            Err(AppError::MalformedResponse {
                status,
                message: e.to_string(),
            })
        }
    }
}
