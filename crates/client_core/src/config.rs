use std::{collections::HashMap, fs};

use crate::DEFAULT_EVENT;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub seed_dev_user: bool,
    pub tour_delay_ms: u64,
    pub rotation_interval_ms: u64,
    pub current_event: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/client.db".into(),
            seed_dev_user: false,
            tour_delay_ms: 1500,
            rotation_interval_ms: 4000,
            current_event: DEFAULT_EVENT.into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_file_values(&mut settings, &file_cfg);
        }
    }

    if let Ok(v) = std::env::var("APP__DATABASE_URL") {
        settings.database_url = v;
    }
    if let Ok(v) = std::env::var("APP__SEED_DEV_USER") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.seed_dev_user = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__TOUR_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.tour_delay_ms = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__ROTATION_INTERVAL_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.rotation_interval_ms = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__CURRENT_EVENT") {
        settings.current_event = v;
    }

    settings
}

fn apply_file_values(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("database_url") {
        settings.database_url = v.clone();
    }
    if let Some(v) = file_cfg.get("seed_dev_user") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.seed_dev_user = parsed;
        }
    }
    if let Some(v) = file_cfg.get("tour_delay_ms") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.tour_delay_ms = parsed;
        }
    }
    if let Some(v) = file_cfg.get("rotation_interval_ms") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.rotation_interval_ms = parsed;
        }
    }
    if let Some(v) = file_cfg.get("current_event") {
        settings.current_event = v.clone();
    }
}
