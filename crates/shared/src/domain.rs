use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user. Opaque string so mock-data ids ("u1")
/// and future auth-issued ids share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Mentor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub school: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub media_link: Option<String>,
    pub avatar: Option<String>,
    pub role: Role,
}

/// Weekly availability captured during registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub hours_per_week: u32,
    pub paid: bool,
}

/// In-progress registration draft. Always present in the app state;
/// [`RegistrationData::default`] is the empty draft at step 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationData {
    pub step: u32,
    pub name: String,
    pub email: String,
    pub school: String,
    pub bio: String,
    pub media_link: Option<String>,
    pub role: Option<Role>,
    pub skills: Vec<String>,
    pub looking_for: Vec<String>,
    pub availability: Availability,
}

impl Default for RegistrationData {
    fn default() -> Self {
        Self {
            step: 1,
            name: String::new(),
            email: String::new(),
            school: String::new(),
            bio: String::new(),
            media_link: None,
            role: None,
            skills: Vec::new(),
            looking_for: Vec::new(),
            availability: Availability::default(),
        }
    }
}

/// Partial update for the registration draft. Fields left as `None` are
/// untouched by [`RegistrationUpdate::apply`]; supplied fields overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationUpdate {
    pub step: Option<u32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub school: Option<String>,
    pub bio: Option<String>,
    pub media_link: Option<String>,
    pub role: Option<Role>,
    pub skills: Option<Vec<String>>,
    pub looking_for: Option<Vec<String>>,
    pub availability: Option<Availability>,
}

impl RegistrationUpdate {
    pub fn apply(self, draft: &mut RegistrationData) {
        if let Some(step) = self.step {
            draft.step = step;
        }
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(school) = self.school {
            draft.school = school;
        }
        if let Some(bio) = self.bio {
            draft.bio = bio;
        }
        if let Some(media_link) = self.media_link {
            draft.media_link = Some(media_link);
        }
        if let Some(role) = self.role {
            draft.role = Some(role);
        }
        if let Some(skills) = self.skills {
            draft.skills = skills;
        }
        if let Some(looking_for) = self.looking_for {
            draft.looking_for = looking_for;
        }
        if let Some(availability) = self.availability {
            draft.availability = availability;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, link: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            summary: summary.into(),
            link,
            created_at: Utc::now(),
        }
    }
}
