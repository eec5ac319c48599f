use super::post_json;
use crate::error::ApiError;
use crate::models::auth::{
    ChangePasswordRequest, HouseChangeBody, LoginRequest, RegisterRequest, Role, Session,
};
use crate::models::{MessageResponse, RecordId};
use log::debug;
use reqwest::Client;

pub async fn register(
    client: &Client,
    base_url: &str,
    request: &RegisterRequest,
) -> Result<MessageResponse, ApiError> {
    debug!("Submitting registration request for {}", request.email);
    post_json(client, base_url, "/register", request).await
}

pub async fn login(
    client: &Client,
    base_url: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<Session, ApiError> {
    debug!("Logging in {} as {}", email, role);
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        role,
    };
    post_json(client, base_url, "/login", &request).await
}

pub async fn change_password(
    client: &Client,
    base_url: &str,
    user_id: &RecordId,
    current_password: &str,
    new_password: &str,
) -> Result<MessageResponse, ApiError> {
    let request = ChangePasswordRequest {
        id: user_id.clone(),
        current_password: current_password.to_string(),
        new_password: new_password.to_string(),
    };
    post_json(client, base_url, "/change_password", &request).await
}

pub async fn request_house_change(
    client: &Client,
    base_url: &str,
    user_id: &RecordId,
    new_house_number: &str,
) -> Result<MessageResponse, ApiError> {
    let request = HouseChangeBody {
        user_id: user_id.clone(),
        new_house_number: new_house_number.to_string(),
    };
    post_json(client, base_url, "/request_house_change", &request).await
}
