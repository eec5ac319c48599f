use crate::api;
use crate::error::ApiError;
use crate::models::admin::AddUserRequest;
use crate::models::auth::{Role, Session};
use crate::models::complaint::{ComplaintStatus, ComplaintView, LikeResponse, NewComplaint, UpdateStatusRequest};
use crate::models::poll::{yes_no, CreatePollRequest, PollView};
use crate::models::{Decision, MessageResponse, RecordId};
use crate::router::{Load, Section};
use log::info;
use reqwest::Client;

pub const POLL_FROM_COMPLAINT_DESCRIPTION: &str =
    "This poll was created from a complaint to gather resident feedback.";

/// Forms that show their outcome inline rather than in a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    SubmitComplaint,
    ChangePassword,
    HouseChange,
    CreatePoll,
    CreateAlert,
    AddUser,
}

#[derive(Debug, Clone)]
pub enum Action {
    Like { complaint_id: RecordId },
    Vote { poll_id: RecordId, option: String },
    ChangeStatus { complaint_id: RecordId, status: ComplaintStatus },
    Reopen { complaint_id: RecordId },
    DeleteComplaint { complaint_id: RecordId },
    CreatePollFromComplaint { title: String },
    CreatePoll { question: String, description: String },
    DeletePoll { poll_id: RecordId },
    CreateAlert { message: String },
    DeleteAlert { alert_id: RecordId },
    AddUser(AddUserRequest),
    DeleteUser { user_id: RecordId, name: String },
    ProcessRegistration { request_id: RecordId, decision: Decision },
    RequestHouseChange { new_house_number: String },
    ProcessHouseChange { request_id: RecordId, decision: Decision },
    SubmitComplaint(NewComplaint),
    ChangePassword { current: String, new: String },
}

#[derive(Debug, Clone)]
pub struct LikePatch {
    pub complaint_id: RecordId,
    pub reply: LikeResponse,
}

/// What the UI should do after a successful write.
#[derive(Debug, Default)]
pub struct Outcome {
    pub message: Option<String>,
    pub refresh: Vec<Load>,
    pub then_enter: Option<Section>,
    pub like: Option<LikePatch>,
}

impl Outcome {
    fn refresh(message: Option<String>, refresh: Vec<Load>) -> Self {
        Outcome {
            message,
            refresh,
            ..Default::default()
        }
    }
}

enum Requires {
    AnyUser(&'static str),
    Resident(&'static str),
    Staff(&'static str),
    Admin(&'static str),
}

impl Action {
    fn requires(&self) -> Requires {
        match self {
            Action::Like { .. } => Requires::AnyUser("You must be logged in to like a complaint."),
            Action::Vote { .. } => Requires::Resident("Only logged-in residents can vote."),
            Action::ChangeStatus { .. } => Requires::Staff("Unauthorized action."),
            Action::Reopen { .. } => Requires::Resident("This action is for residents only."),
            Action::DeleteComplaint { .. } => {
                Requires::Admin("Unauthorized action. Only administrators can delete complaints.")
            }
            Action::CreatePollFromComplaint { .. } | Action::CreateAlert { .. } | Action::DeleteAlert { .. } => {
                Requires::Admin("Unauthorized action.")
            }
            Action::DeletePoll { .. } => Requires::Admin("Unauthorized action. Only admins can delete polls."),
            Action::CreatePoll { .. }
            | Action::AddUser(_)
            | Action::DeleteUser { .. }
            | Action::ProcessRegistration { .. }
            | Action::ProcessHouseChange { .. } => Requires::Admin("Unauthorized."),
            Action::RequestHouseChange { .. } | Action::SubmitComplaint(_) | Action::ChangePassword { .. } => {
                Requires::AnyUser("You must be logged in.")
            }
        }
    }

    /// Role check against the cached session, made before any request is sent.
    pub fn authorize<'a>(&self, session: Option<&'a Session>) -> Result<&'a Session, ApiError> {
        let (allowed, message) = match self.requires() {
            Requires::AnyUser(m) => (session.is_some(), m),
            Requires::Resident(m) => (session.is_some_and(|s| s.role == Role::Resident), m),
            Requires::Staff(m) => (session.is_some_and(|s| s.role != Role::Resident), m),
            Requires::Admin(m) => (session.is_some_and(|s| s.role == Role::Admin), m),
        };
        match session {
            Some(session) if allowed => Ok(session),
            _ => Err(ApiError::unauthorized(message)),
        }
    }

    /// Prompt the user must accept before a destructive action is sent.
    pub fn confirmation(&self) -> Option<String> {
        match self {
            Action::Reopen { .. } => Some(
                "Are you sure you want to reopen this complaint? This will set its status back to 'Open' for admin review."
                    .to_owned(),
            ),
            Action::DeleteComplaint { complaint_id } => Some(format!(
                "Are you sure you want to permanently delete complaint #{}? This action cannot be undone.",
                complaint_id
            )),
            Action::CreatePollFromComplaint { title } => Some(format!(
                "Are you sure you want to create a poll for the complaint: \"{}\"?",
                title
            )),
            Action::DeletePoll { poll_id } => Some(format!(
                "Are you sure you want to permanently delete poll #{}?",
                poll_id
            )),
            Action::DeleteAlert { .. } => Some("Are you sure you want to delete this alert?".to_owned()),
            Action::DeleteUser { user_id, name } => Some(format!("Delete user: {} (ID: {})?", name, user_id)),
            Action::ProcessRegistration { decision, .. } | Action::ProcessHouseChange { decision, .. } => Some(
                format!("Are you sure you want to {} this request?", decision.as_str()),
            ),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<Form> {
        match self {
            Action::SubmitComplaint(_) => Some(Form::SubmitComplaint),
            Action::ChangePassword { .. } => Some(Form::ChangePassword),
            Action::RequestHouseChange { .. } => Some(Form::HouseChange),
            Action::CreatePoll { .. } => Some(Form::CreatePoll),
            Action::CreateAlert { .. } => Some(Form::CreateAlert),
            Action::AddUser(_) => Some(Form::AddUser),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Action::Like { .. } => "like",
            Action::Vote { .. } => "vote",
            Action::ChangeStatus { .. } => "change-status",
            Action::Reopen { .. } => "reopen",
            Action::DeleteComplaint { .. } => "delete-complaint",
            Action::CreatePollFromComplaint { .. } => "create-poll-from-complaint",
            Action::CreatePoll { .. } => "create-poll",
            Action::DeletePoll { .. } => "delete-poll",
            Action::CreateAlert { .. } => "create-alert",
            Action::DeleteAlert { .. } => "delete-alert",
            Action::AddUser(_) => "add-user",
            Action::DeleteUser { .. } => "delete-user",
            Action::ProcessRegistration { .. } => "process-registration-request",
            Action::RequestHouseChange { .. } => "request-house-change",
            Action::ProcessHouseChange { .. } => "process-house-change-request",
            Action::SubmitComplaint(_) => "submit-complaint",
            Action::ChangePassword { .. } => "change-password",
        }
    }

    /// Prefix for a failure message shown to the user.
    pub fn failure_context(&self) -> &'static str {
        match self {
            Action::Like { .. } => "Could not process like",
            Action::Vote { .. } => "Failed to submit vote",
            Action::ChangeStatus { .. } => "Failed to update status",
            Action::Reopen { .. } => "Failed to reopen complaint",
            Action::DeleteComplaint { .. } => "Failed to delete complaint",
            Action::CreatePollFromComplaint { .. } | Action::CreatePoll { .. } => "Failed to create poll",
            Action::DeletePoll { .. } => "Failed to delete poll",
            Action::CreateAlert { .. } => "Failed to create alert",
            Action::DeleteAlert { .. } => "Failed to delete alert",
            Action::AddUser(_) => "Failed to add user",
            Action::DeleteUser { .. } => "Failed to delete user",
            Action::ProcessRegistration { .. } | Action::ProcessHouseChange { .. } => "Failed",
            Action::RequestHouseChange { .. } => "Failed to request house change",
            Action::SubmitComplaint(_) => "Submission failed",
            Action::ChangePassword { .. } => "Failed to change password",
        }
    }
}

fn message_or(reply: MessageResponse, fallback: impl Into<String>) -> Option<String> {
    Some(reply.message.unwrap_or_else(|| fallback.into()))
}

/// Authorizes, sends exactly one write, and reports what needs refreshing.
pub async fn dispatch(
    client: &Client,
    base_url: &str,
    session: Option<&Session>,
    action: &Action,
) -> Result<Outcome, ApiError> {
    let me = action.authorize(session)?;
    info!("Dispatching {} for user {}", action.kind(), me.id);

    let outcome = match action {
        Action::Like { complaint_id } => {
            let reply = api::complaints::like_complaint(client, base_url, complaint_id, &me.id).await?;
            Outcome {
                like: Some(LikePatch {
                    complaint_id: complaint_id.clone(),
                    reply,
                }),
                ..Default::default()
            }
        }
        Action::Vote { poll_id, option } => {
            api::polls::vote_poll(client, base_url, poll_id, &me.id, option).await?;
            Outcome::refresh(None, vec![Load::Polls(PollView::Resident)])
        }
        Action::ChangeStatus { complaint_id, status } => {
            let request = UpdateStatusRequest {
                complaint_id: complaint_id.clone(),
                new_status: status.clone(),
                user_role: me.role,
                user_id: None,
            };
            api::complaints::update_complaint_status(client, base_url, &request).await?;
            Outcome::refresh(None, vec![Load::Complaints(ComplaintView::triage_for(me.role))])
        }
        Action::Reopen { complaint_id } => {
            let reply = api::complaints::reopen_complaint(client, base_url, complaint_id, &me.id).await?;
            Outcome::refresh(
                message_or(reply, "Complaint reopened successfully."),
                vec![Load::Complaints(ComplaintView::My)],
            )
        }
        Action::DeleteComplaint { complaint_id } => {
            api::complaints::delete_complaint(client, base_url, complaint_id, me.role).await?;
            Outcome::refresh(
                Some(format!("Complaint #{} deleted successfully.", complaint_id)),
                vec![Load::Complaints(ComplaintView::Admin)],
            )
        }
        Action::CreatePollFromComplaint { title } => {
            let request = CreatePollRequest {
                question: title.clone(),
                description: POLL_FROM_COMPLAINT_DESCRIPTION.to_owned(),
                options: yes_no(),
                created_by: me.id.clone(),
            };
            api::polls::create_poll(client, base_url, &request).await?;
            Outcome {
                message: Some("Poll created successfully! Residents can now vote on this issue.".to_owned()),
                refresh: vec![Load::Complaints(ComplaintView::Admin)],
                then_enter: Some(Section::AdminPolls),
                like: None,
            }
        }
        Action::CreatePoll { question, description } => {
            let request = CreatePollRequest {
                question: question.clone(),
                description: description.clone(),
                options: yes_no(),
                created_by: me.id.clone(),
            };
            let reply = api::polls::create_poll(client, base_url, &request).await?;
            Outcome::refresh(
                message_or(reply, "Poll created successfully"),
                vec![Load::Polls(PollView::Admin)],
            )
        }
        Action::DeletePoll { poll_id } => {
            api::polls::delete_poll(client, base_url, poll_id, me.role).await?;
            Outcome::refresh(
                Some(format!("Poll #{} deleted successfully.", poll_id)),
                vec![Load::Polls(PollView::Admin)],
            )
        }
        Action::CreateAlert { message } => {
            let reply = api::admin::create_alert(client, base_url, message, &me.id, me.role).await?;
            Outcome::refresh(message_or(reply, "Alert created successfully"), vec![Load::AdminAlerts])
        }
        Action::DeleteAlert { alert_id } => {
            let reply = api::admin::delete_alert(client, base_url, alert_id, me.role).await?;
            Outcome::refresh(message_or(reply, "Alert deleted."), vec![Load::AdminAlerts])
        }
        Action::AddUser(request) => {
            let reply = api::admin::add_user(client, base_url, request).await?;
            Outcome::refresh(message_or(reply, "User added."), vec![Load::Users])
        }
        Action::DeleteUser { user_id, name } => {
            api::admin::delete_user(client, base_url, user_id).await?;
            Outcome::refresh(Some(format!("User {} deleted.", name)), vec![Load::Users])
        }
        Action::ProcessRegistration { request_id, decision } => {
            let reply =
                api::admin::process_registration_request(client, base_url, request_id, *decision).await?;
            let mut refresh = vec![Load::RegistrationRequests];
            if *decision == Decision::Approve {
                refresh.push(Load::Users);
            }
            Outcome::refresh(message_or(reply, "Request processed."), refresh)
        }
        Action::ProcessHouseChange { request_id, decision } => {
            let reply =
                api::admin::process_house_change_request(client, base_url, request_id, *decision).await?;
            let mut refresh = vec![Load::HouseChangeRequests];
            if *decision == Decision::Approve {
                refresh.push(Load::Users);
            }
            Outcome::refresh(message_or(reply, "Request processed."), refresh)
        }
        Action::RequestHouseChange { new_house_number } => {
            let reply = api::auth::request_house_change(client, base_url, &me.id, new_house_number).await?;
            Outcome::refresh(message_or(reply, "House number change requested."), Vec::new())
        }
        Action::SubmitComplaint(complaint) => {
            let reply = api::complaints::submit_complaint(client, base_url, &me.id, complaint).await?;
            Outcome::refresh(
                message_or(reply, "Complaint submitted successfully"),
                vec![Load::Complaints(ComplaintView::My)],
            )
        }
        Action::ChangePassword { current, new } => {
            let reply = api::auth::change_password(client, base_url, &me.id, current, new).await?;
            Outcome::refresh(message_or(reply, "Password changed successfully"), Vec::new())
        }
    };

    Ok(outcome)
}
