//! Member types

use serde::{Deserialize, Serialize};

/// A member record.
///
/// `id` is `None` until the store assigns one; a record coming back from the
/// store always carries `Some(id)`. The same type binds incoming form fields
/// on create, where `id` is usually omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
}

impl Member {
    /// A member with no id yet, as submitted at creation time.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_assigned_id() {
        let member = Member {
            id: Some(1),
            username: "member1".to_string(),
            email: "email1".to_string(),
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "member1", "email": "email1"})
        );
    }

    #[test]
    fn serializes_null_id_before_assignment() {
        let member = Member::new("x", "y");
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": null, "username": "x", "email": "y"})
        );
    }

    #[test]
    fn deserializes_without_id_field() {
        // Form posts arrive without an id field at all.
        let member: Member =
            serde_json::from_value(serde_json::json!({"username": "x", "email": "y"})).unwrap();
        assert_eq!(member, Member::new("x", "y"));
    }
}
