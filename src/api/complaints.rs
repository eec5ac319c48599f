use super::{get_json, post_json, read_reply};
use crate::error::ApiError;
use crate::models::auth::Role;
use crate::models::complaint::{
    Complaint, ComplaintStatus, ComplaintView, DeleteComplaintRequest, LikeRequest, LikeResponse,
    NewComplaint, UpdateStatusRequest,
};
use crate::models::{MessageResponse, RecordId};
use log::{debug, error};
use reqwest::{multipart, Client};

pub async fn submit_complaint(
    client: &Client,
    base_url: &str,
    user_id: &RecordId,
    complaint: &NewComplaint,
) -> Result<MessageResponse, ApiError> {
    let mut form = multipart::Form::new()
        .text("title", complaint.title.clone())
        .text("description", complaint.description.clone())
        .text("category", complaint.category.clone())
        .text("user_id", user_id.to_string());

    if let Some(path) = &complaint.image {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_owned());
        debug!("Attaching {} ({} bytes)", file_name, bytes.len());
        form = form.part("image", multipart::Part::bytes(bytes).file_name(file_name));
    }

    let url = format!("{}/submit_complaint", base_url);
    let resp = client.post(&url).multipart(form).send().await.map_err(|e| {
        error!("/submit_complaint could not be reached: {}", e);
        ApiError::Network(e)
    })?;
    read_reply("/submit_complaint", resp).await
}

pub async fn get_complaints(
    client: &Client,
    base_url: &str,
    user_id: Option<&RecordId>,
    view: ComplaintView,
) -> Result<Vec<Complaint>, ApiError> {
    let user_id = user_id.map(ToString::to_string).unwrap_or_default();
    get_json(
        client,
        base_url,
        "/get_complaints",
        &[("user_id", user_id), ("view_type", view.as_str().to_owned())],
    )
    .await
}

pub async fn update_complaint_status(
    client: &Client,
    base_url: &str,
    request: &UpdateStatusRequest,
) -> Result<MessageResponse, ApiError> {
    post_json(client, base_url, "/update_complaint_status", request).await
}

pub async fn reopen_complaint(
    client: &Client,
    base_url: &str,
    complaint_id: &RecordId,
    user_id: &RecordId,
) -> Result<MessageResponse, ApiError> {
    let request = UpdateStatusRequest {
        complaint_id: complaint_id.clone(),
        new_status: ComplaintStatus::Open,
        user_role: Role::Resident,
        user_id: Some(user_id.clone()),
    };
    update_complaint_status(client, base_url, &request).await
}

pub async fn delete_complaint(
    client: &Client,
    base_url: &str,
    complaint_id: &RecordId,
    user_role: Role,
) -> Result<MessageResponse, ApiError> {
    let request = DeleteComplaintRequest {
        complaint_id: complaint_id.clone(),
        user_role,
    };
    post_json(client, base_url, "/delete_complaint", &request).await
}

pub async fn like_complaint(
    client: &Client,
    base_url: &str,
    complaint_id: &RecordId,
    user_id: &RecordId,
) -> Result<LikeResponse, ApiError> {
    let request = LikeRequest {
        complaint_id: complaint_id.clone(),
        user_id: user_id.clone(),
    };
    post_json(client, base_url, "/like_complaint", &request).await
}
