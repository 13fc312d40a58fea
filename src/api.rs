//! Task Service Client
//!
//! HTTP bindings to the task REST service. One async function per
//! operation; no retries, no timeouts, no batching.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Task, TaskDraft};

/// Fixed collection resource; per-id operations append `/{id}`.
const API_URL: &str = "http://localhost:5000/api/tasks";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the task service: {0}")]
    Transport(String),
    #[error("the task no longer exists on the server")]
    NotFound,
    #[error("the server rejected the task data: {0}")]
    Validation(String),
    #[error("the server returned status {0}")]
    Http(u16),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Map a non-2xx status (and its body) to the error taxonomy
fn classify(status: u16, body: String) -> ApiError {
    match status {
        404 => ApiError::NotFound,
        400 | 422 => ApiError::Validation(body),
        other => ApiError::Http(other),
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify(status.as_u16(), body))
}

/// GET the collection; the full current server-side task list
pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let response = reqwest::Client::new().get(API_URL).send().await?;
    Ok(check(response).await?.json().await?)
}

/// POST a draft; returns the full Task with the server-assigned id
pub async fn create_task(draft: &TaskDraft) -> Result<Task, ApiError> {
    let response = reqwest::Client::new()
        .post(API_URL)
        .json(draft)
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

/// PUT fields (partial draft or merged full task); returns the
/// authoritative updated Task
pub async fn update_task<T: Serialize + ?Sized>(id: &str, fields: &T) -> Result<Task, ApiError> {
    let response = reqwest::Client::new()
        .put(format!("{API_URL}/{id}"))
        .json(fields)
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

/// DELETE by id; success carries no body contract beyond 2xx
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .delete(format!("{API_URL}/{id}"))
        .send()
        .await?;
    check(response).await?;
    Ok(())
}
