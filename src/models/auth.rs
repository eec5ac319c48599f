use super::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Resident,
    Worker,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Resident => "resident",
            Role::Worker => "worker",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as returned by `/login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
}

impl Session {
    pub fn house(&self) -> Option<&str> {
        self.house_number.as_deref().filter(|h| !h.trim().is_empty())
    }
}

#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Serialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub house_number: String,
}

#[derive(Serialize, Debug)]
pub struct ChangePasswordRequest {
    pub id: RecordId,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, Debug)]
pub struct HouseChangeBody {
    pub user_id: RecordId,
    pub new_house_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_login_reply() {
        let json = r#"{"_id":"abc","name":"Asha","role":"resident","email":"a@x.io","house_number":"B-12"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, RecordId::Text("abc".to_owned()));
        assert_eq!(session.role, Role::Resident);
        assert_eq!(session.house(), Some("B-12"));
    }

    #[test]
    fn test_blank_house_is_none() {
        let json = r#"{"id":3,"name":"Ravi","role":"worker","house_number":""}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.house(), None);
        assert_eq!(session.role.to_string(), "worker");
    }
}
