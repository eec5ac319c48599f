use super::auth::Role;
use super::{Decision, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub house_number: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct AddUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub house_number: String,
}

#[derive(Serialize, Debug)]
pub struct DeleteUserRequest {
    pub user_id: RecordId,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RegistrationRequest {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct HouseChangeRequest {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub current_house_number: Option<String>,
    pub requested_house_number: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Debug)]
pub struct ProcessRequestBody {
    pub request_id: RecordId,
    pub action: Decision,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Alert {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub message: String,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Debug)]
pub struct CreateAlertRequest {
    pub message: String,
    pub user_id: RecordId,
    pub user_role: Role,
}

#[derive(Serialize, Debug)]
pub struct DeleteAlertRequest {
    pub alert_id: RecordId,
    pub user_role: Role,
}
