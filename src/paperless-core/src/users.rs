use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::resource::Resource;

/// User account on the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: Option<DateTime<FixedOffset>>,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub groups: Vec<u64>,
    pub user_permissions: Vec<String>,
    pub inherited_permissions: Vec<String>,
    pub is_mfa_enabled: bool,
}

/// UserRequest is the partial record for creating or updating a user.
/// `password` is write-only; the server never returns it.
#[derive(Clone, Default, Serialize)]
pub struct UserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_permissions: Option<Vec<String>>,
}

impl fmt::Debug for UserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("is_staff", &self.is_staff)
            .field("is_active", &self.is_active)
            .field("is_superuser", &self.is_superuser)
            .field("groups", &self.groups)
            .field("user_permissions", &self.user_permissions)
            .finish()
    }
}

impl Resource for User {
    type Request = UserRequest;
    const SEGMENT: &'static str = "users";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub permissions: Vec<String>, // Django codenames, e.g. "view_document"
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Resource for Group {
    type Request = GroupRequest;
    const SEGMENT: &'static str = "groups";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_only_sent_when_set() {
        let req = UserRequest {
            username: Some("bob".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"username": "bob"}));

        let req = UserRequest {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"password": "hunter2"}));
    }

    #[test]
    fn test_debug_hides_password() {
        let req = UserRequest {
            username: Some("bob".to_string()),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let printed = format!("{:?}", req);

        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("bob"));
    }

    #[test]
    fn test_user_deserializes() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "username": "alice",
            "email": "alice@example.com",
            "date_joined": "2023-11-20T12:00:00+00:00",
            "is_active": true,
            "groups": [1],
            "user_permissions": ["view_document"]
        }))
        .unwrap();

        assert_eq!(user.username, "alice");
        assert!(user.is_active);
        assert!(!user.is_superuser);
        assert_eq!(user.groups, vec![1]);
        assert!(user.date_joined.is_some());
    }
}
