use serde::{Deserialize, Serialize};

/// User model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Request body for create and update.
///
/// Any `id` in the body is ignored: create takes the id the database assigns,
/// update takes the id from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub age: i32,
}

impl UserPayload {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_flat() {
        let user = User {
            id: 7,
            name: "test user".to_string(),
            age: 30,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "test user", "age": 30})
        );
    }

    #[test]
    fn test_payload_ignores_id() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"id": 99, "name": "X", "age": 21}"#).unwrap();

        let user = payload.into_user(3);
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "X");
        assert_eq!(user.age, 21);
    }

    #[test]
    fn test_payload_requires_name_and_age() {
        assert!(serde_json::from_str::<UserPayload>(r#"{"name": "X"}"#).is_err());
        assert!(serde_json::from_str::<UserPayload>(r#"{"age": 21}"#).is_err());
        assert!(serde_json::from_str::<UserPayload>(r#"{"name": "X", "age": "21"}"#).is_err());
    }
}
