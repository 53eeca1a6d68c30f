use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The account behind the current session, as returned by `GET /users/current`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    /// Organization name given at sign-up
    pub name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub confirmed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub confirmed_by_organization: bool,
}

impl UserDto {
    /// Whether the user confirmed their email and was approved by their organization.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some() && self.confirmed_by_organization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserDto {
        UserDto {
            id: 1,
            email: "dean@univ.example".to_string(),
            name: "University".to_string(),
            website: "https://univ.example".to_string(),
            confirmed_at: None,
            confirmed_by_organization: false,
        }
    }

    #[test]
    fn test_is_confirmed_requires_both_flags() {
        let mut user = user();
        assert!(!user.is_confirmed());

        user.confirmed_at = chrono::DateTime::from_timestamp(1_700_000_000, 0).map(|d| d.naive_utc());
        assert!(!user.is_confirmed());

        user.confirmed_by_organization = true;
        assert!(user.is_confirmed());
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let user: UserDto =
            serde_json::from_str(r#"{"id":7,"email":"a@b.c","name":"Org"}"#).unwrap();

        assert_eq!(user.website, "");
        assert_eq!(user.confirmed_at, None);
        assert!(!user.confirmed_by_organization);
    }
}
