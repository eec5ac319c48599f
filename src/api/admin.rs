use super::{get_json, post_json};
use crate::error::ApiError;
use crate::models::admin::{
    AddUserRequest, Alert, CreateAlertRequest, DeleteAlertRequest, DeleteUserRequest,
    HouseChangeRequest, ProcessRequestBody, RegistrationRequest, UserRecord,
};
use crate::models::auth::Role;
use crate::models::{Decision, MessageResponse, RecordId};
use reqwest::Client;

pub async fn get_users(client: &Client, base_url: &str) -> Result<Vec<UserRecord>, ApiError> {
    get_json(client, base_url, "/get_users", &[]).await
}

pub async fn add_user(
    client: &Client,
    base_url: &str,
    request: &AddUserRequest,
) -> Result<MessageResponse, ApiError> {
    post_json(client, base_url, "/add_user", request).await
}

pub async fn delete_user(
    client: &Client,
    base_url: &str,
    user_id: &RecordId,
) -> Result<MessageResponse, ApiError> {
    let request = DeleteUserRequest {
        user_id: user_id.clone(),
    };
    post_json(client, base_url, "/delete_user", &request).await
}

pub async fn get_registration_requests(
    client: &Client,
    base_url: &str,
) -> Result<Vec<RegistrationRequest>, ApiError> {
    get_json(client, base_url, "/get_registration_requests", &[]).await
}

pub async fn process_registration_request(
    client: &Client,
    base_url: &str,
    request_id: &RecordId,
    action: Decision,
) -> Result<MessageResponse, ApiError> {
    let request = ProcessRequestBody {
        request_id: request_id.clone(),
        action,
    };
    post_json(client, base_url, "/process_registration_request", &request).await
}

pub async fn get_house_change_requests(
    client: &Client,
    base_url: &str,
) -> Result<Vec<HouseChangeRequest>, ApiError> {
    get_json(client, base_url, "/get_house_change_requests", &[]).await
}

pub async fn process_house_change_request(
    client: &Client,
    base_url: &str,
    request_id: &RecordId,
    action: Decision,
) -> Result<MessageResponse, ApiError> {
    let request = ProcessRequestBody {
        request_id: request_id.clone(),
        action,
    };
    post_json(client, base_url, "/process_house_change_request", &request).await
}

pub async fn get_alerts(client: &Client, base_url: &str) -> Result<Vec<Alert>, ApiError> {
    get_json(client, base_url, "/get_alerts", &[]).await
}

pub async fn create_alert(
    client: &Client,
    base_url: &str,
    message: &str,
    user_id: &RecordId,
    user_role: Role,
) -> Result<MessageResponse, ApiError> {
    let request = CreateAlertRequest {
        message: message.to_string(),
        user_id: user_id.clone(),
        user_role,
    };
    post_json(client, base_url, "/create_alert", &request).await
}

pub async fn delete_alert(
    client: &Client,
    base_url: &str,
    alert_id: &RecordId,
    user_role: Role,
) -> Result<MessageResponse, ApiError> {
    let request = DeleteAlertRequest {
        alert_id: alert_id.clone(),
        user_role,
    };
    post_json(client, base_url, "/delete_alert", &request).await
}
