use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - the full `Users` row.
///
/// Served as-is by the single-user view; list views go through
/// [`UserProfile`] so the password column never leaves the detail path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: String,
    pub bio: String,
    pub created_on: DateTime<Utc>,
    pub active: bool,
}

/// Input shape for registration and full-record updates.
///
/// Carries every client-writable column; `id`, `created_on` and `active`
/// stay under storage control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: String,
    pub bio: String,
}

/// List view of a user: the full record minus the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub username: String,
    pub profile_image_url: String,
    pub created_on: DateTime<Utc>,
    pub active: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            bio: user.bio,
            username: user.username,
            profile_image_url: user.profile_image_url,
            created_on: user.created_on,
            active: user.active,
        }
    }
}

/// Management view: name and contact columns only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_drops_the_password() {
        let user = User {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            profile_image_url: "default_image_url".to_string(),
            bio: "first programmer".to_string(),
            created_on: Utc::now(),
            active: true,
        };

        let profile = UserProfile::from(user);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["username"], "ada");
        assert!(json.get("password").is_none());
    }
}
