use super::*;
use shared::domain::{Project, RegistrationData, RegistrationUpdate, Role, User, UserId};
use storage::Storage;

fn sample_user(id: &str) -> User {
    User {
        id: UserId::new(id),
        display_name: "Ada Lovelace".to_string(),
        email: "ada@school.edu".to_string(),
        school: "Analytical High".to_string(),
        skills: vec!["math".to_string()],
        bio: String::new(),
        media_link: None,
        avatar: None,
        role: Role::Student,
    }
}

async fn memory_storage() -> Storage {
    Storage::new("sqlite::memory:").await.expect("db")
}

fn file_database_url(dir: &tempfile::TempDir) -> String {
    let path = dir.path().join("client.db");
    format!("sqlite://{}", path.to_string_lossy().replace('\\', "/"))
}

#[tokio::test]
async fn fresh_storage_loads_defaults() {
    let store = AppStore::load(memory_storage().await).await;
    assert!(store.user().is_none());
    assert_eq!(store.registration(), &RegistrationData::default());
    assert_eq!(store.current_event(), DEFAULT_EVENT);
    assert!(store.projects().is_empty());
}

#[tokio::test]
async fn update_registration_merges_only_supplied_fields() {
    let mut store = AppStore::load(memory_storage().await).await;

    store
        .update_registration(RegistrationUpdate {
            step: Some(2),
            name: Some("Ada".to_string()),
            ..Default::default()
        })
        .await;

    let draft = store.registration();
    assert_eq!(draft.step, 2);
    assert_eq!(draft.name, "Ada");
    assert_eq!(draft.email, "");
    assert_eq!(draft.school, "");
}

#[tokio::test]
async fn later_updates_keep_earlier_fields() {
    let mut store = AppStore::load(memory_storage().await).await;

    store
        .update_registration(RegistrationUpdate {
            name: Some("Ada".to_string()),
            email: Some("ada@school.edu".to_string()),
            ..Default::default()
        })
        .await;
    store
        .update_registration(RegistrationUpdate {
            step: Some(3),
            skills: Some(vec!["math".to_string(), "poetry".to_string()]),
            ..Default::default()
        })
        .await;

    let draft = store.registration();
    assert_eq!(draft.step, 3);
    assert_eq!(draft.name, "Ada");
    assert_eq!(draft.email, "ada@school.edu");
    assert_eq!(draft.skills.len(), 2);
}

#[tokio::test]
async fn set_user_replaces_current_user() {
    let mut store = AppStore::load(memory_storage().await).await;
    store.set_user(sample_user("u1")).await;
    store.set_user(sample_user("u2")).await;
    assert_eq!(store.user().map(|u| u.id.as_str()), Some("u2"));
}

#[tokio::test]
async fn add_project_appends_in_call_order() {
    let mut store = AppStore::load(memory_storage().await).await;

    for title in ["first", "second", "third"] {
        store.add_project(Project::new(title, "demo", None)).await;
    }

    let titles: Vec<&str> = store.projects().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn clear_user_resets_session_state_but_keeps_event() {
    let mut store = AppStore::load(memory_storage().await).await;
    store.set_user(sample_user("u1")).await;
    store
        .update_registration(RegistrationUpdate {
            step: Some(4),
            name: Some("Ada".to_string()),
            ..Default::default()
        })
        .await;
    store.add_project(Project::new("zine", "demo", None)).await;
    store.set_current_event("hackweek").await;

    store.clear_user().await;

    assert!(store.user().is_none());
    assert_eq!(store.registration(), &RegistrationData::default());
    assert!(store.projects().is_empty());
    assert_eq!(store.current_event(), "hackweek");
}

#[tokio::test]
async fn snapshot_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let database_url = file_database_url(&dir);

    {
        let storage = Storage::new(&database_url).await.expect("db");
        let mut store = AppStore::load(storage).await;
        store.set_user(sample_user("u1")).await;
        store.set_current_event("spring-cohort").await;
        store.add_project(Project::new("robot", "demo", None)).await;
    }

    let storage = Storage::new(&database_url).await.expect("reopen");
    let store = AppStore::load(storage).await;
    assert_eq!(store.user().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(store.current_event(), "spring-cohort");
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.projects()[0].title, "robot");
}

#[tokio::test]
async fn malformed_snapshot_falls_back_to_defaults() {
    let storage = memory_storage().await;
    storage
        .put(STATE_KEY, "{not valid json")
        .await
        .expect("seed garbage");

    let store = AppStore::load(storage).await;
    assert!(store.user().is_none());
    assert_eq!(store.registration(), &RegistrationData::default());
    assert_eq!(store.current_event(), DEFAULT_EVENT);
}

#[tokio::test]
async fn persisted_snapshot_uses_contract_field_names() {
    let storage = memory_storage().await;
    let mut store = AppStore::load(storage.clone()).await;
    store.set_current_event("hackweek").await;

    let raw = storage
        .get(STATE_KEY)
        .await
        .expect("get")
        .expect("snapshot present");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert!(value.get("registrationData").is_some());
    assert_eq!(
        value.get("currentEvent").and_then(|v| v.as_str()),
        Some("hackweek")
    );
    assert!(value.get("projects").is_some());
    assert!(value.get("user").is_some());
}

#[tokio::test]
async fn dev_seed_adopts_first_candidate_only_when_empty() {
    let mut store = AppStore::load(memory_storage().await).await;

    store.seed_dev_user_if_empty(&MockDirectory).await;
    assert_eq!(store.user().map(|u| u.id.as_str()), Some("u1"));

    // An existing user is never replaced by the seed.
    store.set_user(sample_user("u9")).await;
    store.seed_dev_user_if_empty(&MockDirectory).await;
    assert_eq!(store.user().map(|u| u.id.as_str()), Some("u9"));
}
