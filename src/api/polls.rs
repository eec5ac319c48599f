use super::{get_json, post_json};
use crate::error::ApiError;
use crate::models::auth::Role;
use crate::models::poll::{CreatePollRequest, DeletePollRequest, Poll, VoteRequest};
use crate::models::{MessageResponse, RecordId};
use reqwest::Client;

/// With a user id the backend fills in `has_voted` and `user_vote`.
pub async fn get_polls(
    client: &Client,
    base_url: &str,
    user_id: Option<&RecordId>,
) -> Result<Vec<Poll>, ApiError> {
    let user_id = user_id.map(ToString::to_string).unwrap_or_default();
    get_json(client, base_url, "/get_polls", &[("user_id", user_id)]).await
}

pub async fn create_poll(
    client: &Client,
    base_url: &str,
    request: &CreatePollRequest,
) -> Result<MessageResponse, ApiError> {
    post_json(client, base_url, "/create_poll", request).await
}

pub async fn vote_poll(
    client: &Client,
    base_url: &str,
    poll_id: &RecordId,
    user_id: &RecordId,
    option: &str,
) -> Result<MessageResponse, ApiError> {
    let request = VoteRequest {
        poll_id: poll_id.clone(),
        user_id: user_id.clone(),
        option: option.to_string(),
    };
    post_json(client, base_url, "/vote_poll", &request).await
}

pub async fn delete_poll(
    client: &Client,
    base_url: &str,
    poll_id: &RecordId,
    user_role: Role,
) -> Result<MessageResponse, ApiError> {
    let request = DeletePollRequest {
        poll_id: poll_id.clone(),
        user_role,
    };
    post_json(client, base_url, "/delete_poll", &request).await
}
