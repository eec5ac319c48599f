use super::auth::Role;
use super::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
    Other(String),
}

impl ComplaintStatus {
    pub const SELECTABLE: [ComplaintStatus; 3] = [
        ComplaintStatus::Open,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Other(s) => s,
        }
    }
}

impl From<String> for ComplaintStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Open" => ComplaintStatus::Open,
            "in-progress" => ComplaintStatus::InProgress,
            "resolved" => ComplaintStatus::Resolved,
            _ => ComplaintStatus::Other(value),
        }
    }
}

impl From<ComplaintStatus> for String {
    fn from(value: ComplaintStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slice of the complaint collection a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintView {
    My,
    All,
    Admin,
    Worker,
}

impl ComplaintView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintView::My => "my",
            ComplaintView::All => "all",
            ComplaintView::Admin => "admin",
            ComplaintView::Worker => "worker",
        }
    }

    /// The triage listing for staff: admins get the admin view, everyone else the worker view.
    pub fn triage_for(role: Role) -> Self {
        if role == Role::Admin {
            ComplaintView::Admin
        } else {
            ComplaintView::Worker
        }
    }

    pub fn has_filters(&self) -> bool {
        !matches!(self, ComplaintView::My)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Complaint {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, alias = "image_url")]
    pub image_path: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub user_has_liked: bool,
}

#[derive(Serialize, Debug)]
pub struct UpdateStatusRequest {
    pub complaint_id: RecordId,
    pub new_status: ComplaintStatus,
    pub user_role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RecordId>,
}

#[derive(Serialize, Debug)]
pub struct DeleteComplaintRequest {
    pub complaint_id: RecordId,
    pub user_role: Role,
}

#[derive(Serialize, Debug)]
pub struct LikeRequest {
    pub complaint_id: RecordId,
    pub user_id: RecordId,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    Liked,
    Unliked,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LikeResponse {
    pub action: LikeAction,
    #[serde(default)]
    pub new_like_count: Option<u64>,
}

/// Fields of the multipart `/submit_complaint` form.
#[derive(Debug, Clone, Default)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: Option<std::path::PathBuf>,
}
