use super::auth::Role;
use super::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollView {
    Resident,
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Poll {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub question: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub vote_counts: HashMap<String, u64>,
    #[serde(default)]
    pub total_votes: u64,
    #[serde(default)]
    pub user_vote: Option<String>,
    #[serde(default)]
    pub has_voted: bool,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct CreatePollRequest {
    pub question: String,
    pub description: String,
    pub options: Vec<String>,
    pub created_by: RecordId,
}

#[derive(Serialize, Debug)]
pub struct VoteRequest {
    pub poll_id: RecordId,
    pub user_id: RecordId,
    pub option: String,
}

#[derive(Serialize, Debug)]
pub struct DeletePollRequest {
    pub poll_id: RecordId,
    pub user_role: Role,
}

pub fn yes_no() -> Vec<String> {
    vec!["Yes".to_owned(), "No".to_owned()]
}
