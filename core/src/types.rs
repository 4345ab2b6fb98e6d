//! Domain DTOs for the dashboard modules.
//!
//! # Design
//! These types mirror the seed API's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift between the
//! two. Unknown JSON fields in API responses (`userId`, `completed`, ...)
//! are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// Items fetched from the seed endpoint carry a `title`; items created
/// locally carry `text` typed into the input buffer. Both shapes share the
/// list, so each field defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A user record as persisted by the remote API. `id` is server-assigned on
/// create and addresses update/delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// The user form buffer, doubling as the create/update request payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
