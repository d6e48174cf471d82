//! Shared request policy for the hosted embedding and chat services.
//!
//! One bounded retry with fixed backoff on transient failures (timeout,
//! HTTP 429, HTTP 5xx). Auth rejections and client errors are never
//! retried. Status codes are mapped to typed errors here so callers only
//! ever see [`ScholarError`] variants, not raw HTTP failures.

use std::time::Instant;

use reqwest::blocking::Response;

use crate::constants::RETRY_BACKOFF;
use crate::error::{Result, ScholarError};

/// Execute `send`, retrying once on a retryable failure.
///
/// `send` must build a fresh request on every call; blocking request
/// builders are not reusable across attempts.
pub(crate) fn send_with_retry<F>(service: &str, send: F) -> Result<Response>
where
    F: Fn() -> std::result::Result<Response, reqwest::Error>,
{
    match attempt(service, &send) {
        Ok(response) => Ok(response),
        Err(err) if err.is_retryable() => {
            tracing::warn!(service, error = %err, "transient upstream failure, retrying once");
            std::thread::sleep(RETRY_BACKOFF);
            attempt(service, &send)
        }
        Err(err) => Err(err),
    }
}

fn attempt<F>(service: &str, send: &F) -> Result<Response>
where
    F: Fn() -> std::result::Result<Response, reqwest::Error>,
{
    let started = Instant::now();
    let response = send().map_err(|err| {
        if err.is_timeout() {
            ScholarError::Timeout {
                service: service.to_string(),
                elapsed_ms: started.elapsed().as_millis() as u64,
            }
        } else {
            ScholarError::Transport(err)
        }
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        401 | 403 => Err(ScholarError::Auth {
            service: service.to_string(),
            status: status.as_u16(),
        }),
        429 => Err(ScholarError::RateLimited {
            service: service.to_string(),
        }),
        code => {
            let message = response.text().unwrap_or_default();
            let message = message.chars().take(200).collect();
            Err(ScholarError::Api {
                service: service.to_string(),
                status: code,
                message,
            })
        }
    }
}
