use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Candidate,
    Recruiter,
    Admin,
}

impl Role {
    /// Case-insensitive parse. Anything unrecognised falls back to `Candidate`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_uppercase()).as_deref() {
            Some("RECRUITER") => Role::Recruiter,
            Some("ADMIN") => Role::Admin,
            _ => Role::Candidate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "CANDIDATE",
            Role::Recruiter => "RECRUITER",
            Role::Admin => "ADMIN",
        }
    }
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse_or_default(Some(&self.role))
    }

    pub fn can_post_jobs(&self) -> bool {
        matches!(self.role(), Role::Recruiter | Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::parse_or_default(Some("recruiter")), Role::Recruiter);
        assert_eq!(Role::parse_or_default(Some(" Admin ")), Role::Admin);
        assert_eq!(Role::parse_or_default(Some("CANDIDATE")), Role::Candidate);
    }

    #[test]
    fn test_unknown_or_missing_role_is_candidate() {
        assert_eq!(Role::parse_or_default(Some("superuser")), Role::Candidate);
        assert_eq!(Role::parse_or_default(Some("")), Role::Candidate);
        assert_eq!(Role::parse_or_default(None), Role::Candidate);
    }

    #[test]
    fn test_role_round_trips_through_column_value() {
        for role in [Role::Candidate, Role::Recruiter, Role::Admin] {
            assert_eq!(Role::parse_or_default(Some(role.as_str())), role);
        }
    }

    #[test]
    fn test_only_recruiters_and_admins_post_jobs() {
        assert!(user_with_role("RECRUITER").can_post_jobs());
        assert!(user_with_role("ADMIN").can_post_jobs());
        assert!(!user_with_role("CANDIDATE").can_post_jobs());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let mut user = user_with_role("CANDIDATE");
        user.password_hash = "pbkdf2-sha256$1$c2FsdA==$aGFzaA==".to_string();
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "jane@example.com");
    }
}
