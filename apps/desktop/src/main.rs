use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use client_core::{
    config, ActivityRotator, AppStore, DirectoryProvider, MockDirectory, OnboardingTracker,
    TourPrompt,
};
use storage::Storage;
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    /// Sqlite URL for durable client storage.
    #[arg(long)]
    database_url: Option<String>,
    /// Adopt the first mock-directory user when no user is persisted.
    #[arg(long)]
    seed_dev_user: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(database_url) = args.database_url {
        settings.database_url = database_url;
    }
    if args.seed_dev_user {
        settings.seed_dev_user = true;
    }

    let storage = Storage::new(&settings.database_url).await?;
    storage.health_check().await?;
    info!(database_url = %settings.database_url, "client storage ready");

    let mut store = AppStore::load(storage.clone()).await;
    if settings.seed_dev_user {
        store.seed_dev_user_if_empty(&MockDirectory).await;
    }

    match store.user() {
        Some(user) => println!("Signed in as {} ({})", user.display_name, user.id),
        None => println!(
            "No signed-in user; registration draft at step {}",
            store.registration().step
        ),
    }
    println!("Current event: {}", store.current_event());
    println!("Projects: {}", store.projects().len());

    let rotator = ActivityRotator::start(
        MockDirectory.activity_entries(),
        Duration::from_millis(settings.rotation_interval_ms),
    );
    println!("Activity: {}", rotator.current());

    let tracker = OnboardingTracker::new(storage);
    if let Some(user) = store.user() {
        let first = tracker.track_feature_use(Some(&user.id), "search").await;
        let again = tracker.track_feature_use(Some(&user.id), "search").await;
        println!("Search feature first use: {first}, repeat: {again}");

        let prompt = TourPrompt::arm(
            tracker.clone(),
            user.id.clone(),
            Duration::from_millis(settings.tour_delay_ms),
        );
        let mut rx = prompt.subscribe();
        let wait = Duration::from_millis(settings.tour_delay_ms + 250);
        match tokio::time::timeout(wait, rx.changed()).await {
            Ok(Ok(())) if prompt.should_show() => println!("Showing first-run tour"),
            _ => println!("Tour already completed; not showing"),
        }
    }

    Ok(())
}
