//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use dicetray::config::Config;
use dicetray::dice::RngRoller;
use dicetray::ui::app::App;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Seeded roller so rolls are reproducible across runs.
pub fn seeded_roller(seed: u64) -> RngRoller<StdRng> {
    RngRoller::new(StdRng::seed_from_u64(seed))
}

/// App with default config, a seeded roller and `input` in the count field.
pub fn seeded_app(input: &str) -> App {
    App::with_roller(
        &Config::default(),
        Some(input.to_string()),
        Box::new(seeded_roller(11)),
    )
}

/// Type `text` into the count field key by key.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.on_char(ch);
    }
}
