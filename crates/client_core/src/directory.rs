use shared::domain::{Role, User, UserId};

/// Supplies candidate users for development seeding plus the display-only
/// social-proof strings shown in the activity ticker and FOMO notices.
pub trait DirectoryProvider: Send + Sync {
    /// Non-empty, ordered list of user records.
    fn candidate_users(&self) -> Vec<User>;
    fn activity_entries(&self) -> Vec<String>;
    fn fomo_notices(&self) -> Vec<String>;
}

/// Built-in mock data used until a real directory backend exists.
pub struct MockDirectory;

impl DirectoryProvider for MockDirectory {
    fn candidate_users(&self) -> Vec<User> {
        vec![
            User {
                id: UserId::new("u1"),
                display_name: "Maya Chen".to_string(),
                email: "maya@riverdale.edu".to_string(),
                school: "Riverdale High".to_string(),
                skills: vec!["figma".to_string(), "illustration".to_string()],
                bio: "Designing zines and app mockups between classes.".to_string(),
                media_link: Some("https://portfolio.example/maya".to_string()),
                avatar: None,
                role: Role::Student,
            },
            User {
                id: UserId::new("u2"),
                display_name: "Devon Park".to_string(),
                email: "devon@eastside.edu".to_string(),
                school: "Eastside Prep".to_string(),
                skills: vec!["python".to_string(), "robotics".to_string()],
                bio: "Building a line-following robot for regionals.".to_string(),
                media_link: None,
                avatar: None,
                role: Role::Student,
            },
            User {
                id: UserId::new("m1"),
                display_name: "Priya Raman".to_string(),
                email: "priya@studio.example".to_string(),
                school: "Studio Northwind".to_string(),
                skills: vec!["product design".to_string(), "mentoring".to_string()],
                bio: "Design lead, ten years in consumer apps.".to_string(),
                media_link: Some("https://studio.example/priya".to_string()),
                avatar: None,
                role: Role::Mentor,
            },
        ]
    }

    fn activity_entries(&self) -> Vec<String> {
        vec![
            "Maya published a new project".to_string(),
            "Devon joined the robotics channel".to_string(),
            "Priya is taking on two new mentees".to_string(),
            "Sam finished the onboarding tour".to_string(),
        ]
    }

    fn fomo_notices(&self) -> Vec<String> {
        vec![
            "3 mentors viewed your profile today".to_string(),
            "A new project matches your skills".to_string(),
            "Your school's channel is trending".to_string(),
        ]
    }
}
