//! Common types and data structures

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// SERVER ENTITIES
// ============================================================================

/// A skill listed on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// Present on newer backends, absent on older ones
    #[serde(default)]
    pub category: String,
}

/// A marketplace user as served by GET /users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills_offered: Vec<Skill>,
    #[serde(default)]
    pub skills_seeking: Vec<Skill>,
}

impl User {
    pub fn location_or_unset(&self) -> &str {
        match self.location.as_deref() {
            Some(loc) if !loc.is_empty() => loc,
            _ => "Location not set",
        }
    }
}

/// Lifecycle of a swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
}

impl SwapStatus {
    pub fn label(self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Rejected => "rejected",
        }
    }
}

/// A proposed exchange of one user's offered skill for another's
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swap {
    pub id: i64,
    pub status: SwapStatus,
    #[serde(default)]
    pub message: String,
    /// ISO-8601 naive UTC, as the backend emits
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    pub proposer: User,
    pub receiver: User,
    pub offered_skill: Skill,
    pub requested_skill: Skill,
}

// ============================================================================
// NAVIGATION
// ============================================================================

/// Page set of the client, one variant per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Browse,
    MyProfile,
    /// Another user's profile, by user id
    UserProfile(i64),
    MySwaps,
}

/// Column to sort by in the browse list view
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Username,
    Location,
    Offers,
    Seeking,
}

/// Sort direction for the browse list view
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

// ============================================================================
// BACKGROUND REQUEST PLUMBING
// ============================================================================

/// Which handler a failed request belonged to, so the UI can clear the right
/// busy flag and pick a modal title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Sync,
    Login,
    Signup,
    ProfileSave,
    SwapPropose,
    SwapRespond(i64),
}

/// Results posted by background fetch tasks, drained once per frame
#[derive(Debug)]
pub enum ApiEvent {
    DirectoryLoaded { users: Vec<User>, skills: Vec<Skill> },
    SwapsLoaded(Vec<Swap>),
    SignedIn(User),
    ProfileSaved(User),
    SwapProposed(Swap),
    SwapResolved(Swap),
    Failed { kind: RequestKind, message: String },
}

// ============================================================================
// FORM DRAFTS
// ============================================================================

/// Editable copy of the current user's profile, skills as comma-separated text
#[derive(Default, Clone)]
pub struct ProfileDraft {
    pub username: String,
    pub location: String,
    pub bio: String,
    pub skills_offered: String,
    pub skills_seeking: String,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        let join = |skills: &[Skill]| {
            skills
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            username: user.username.clone(),
            location: user.location.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            skills_offered: join(&user.skills_offered),
            skills_seeking: join(&user.skills_seeking),
        }
    }

    /// Split a comma-separated skills field into trimmed, non-empty names
    pub fn parse_skills(field: &str) -> Vec<String> {
        field
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// In-progress swap proposal shown in the proposal dialog
#[derive(Clone)]
pub struct SwapDraft {
    pub receiver_id: i64,
    pub receiver_username: String,
    /// (skill id, skill name) options from the proposer's offered list
    pub offer_options: Vec<(i64, String)>,
    /// (skill id, skill name) options from the receiver's offered list
    pub request_options: Vec<(i64, String)>,
    pub offered_skill_id: i64,
    pub requested_skill_id: i64,
    pub message: String,
}

/// Generic title + message dialog state
#[derive(Debug, Clone)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 3,
            "username": "ada",
            "email": "ada@example.com",
            "location": "London",
            "bio": null,
            "skills_offered": [{"id": 1, "name": "Rust", "category": "Programming"}],
            "skills_seeking": [{"id": 2, "name": "Baking", "category": "Cooking"}]
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.skills_offered[0].name, "Rust");
        assert_eq!(user.skills_seeking[0].category, "Cooking");
        assert!(user.bio.is_none());
    }

    #[test]
    fn user_tolerates_missing_optional_fields() {
        let json = r#"{"id": 1, "username": "bo", "email": "bo@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.skills_offered.is_empty());
        assert_eq!(user.location_or_unset(), "Location not set");
    }

    #[test]
    fn skill_tolerates_missing_category() {
        let skill: Skill = serde_json::from_str(r#"{"id": 9, "name": "Chess"}"#).unwrap();
        assert_eq!(skill.category, "");
    }

    #[test]
    fn swap_status_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&SwapStatus::Accepted).unwrap(), "\"accepted\"");
        let status: SwapStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, SwapStatus::Pending);
    }

    #[test]
    fn swap_parses_naive_backend_timestamp() {
        let json = r#"{
            "id": 7,
            "status": "pending",
            "message": "hi",
            "timestamp": "2024-05-01T12:30:45.123456",
            "proposer": {"id": 1, "username": "a", "email": "a@x.com"},
            "receiver": {"id": 2, "username": "b", "email": "b@x.com"},
            "offered_skill": {"id": 1, "name": "Rust"},
            "requested_skill": {"id": 2, "name": "Go"}
        }"#;
        let swap: Swap = serde_json::from_str(json).unwrap();
        assert_eq!(swap.status, SwapStatus::Pending);
        let ts = swap.timestamp.unwrap();
        assert_eq!(ts.format("%Y-%m-%d").to_string(), "2024-05-01");
    }

    #[test]
    fn profile_draft_round_trips_skills() {
        let names = ProfileDraft::parse_skills(" Rust,  , Baking ,Chess, ");
        assert_eq!(names, vec!["Rust", "Baking", "Chess"]);
    }
}
