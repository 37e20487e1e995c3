// SPDX-License-Identifier: MPL-2.0
use flipbook::catalog::{self, Catalog};
use flipbook::config::{self, Config, ViewerConfig};
use flipbook::i18n::fluent::I18n;
use flipbook::media::{self, ImageCache, ImageStatus, Source};
use flipbook::ui::flipbook::{Effect, Message, Settings, State};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn viewer(now: Instant) -> State {
    let catalog = Catalog::sample();
    State::new(
        catalog.pages,
        catalog.project_name,
        true,
        Settings::default(),
        now,
    )
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn viewer_settings_follow_config_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        "[viewer]\nflip_duration_ms = 500\nswipe_threshold = 80.0\nprefetch_radius = 9\n",
    )
    .expect("write config");

    let loaded = config::load_from_path(&config_path).expect("load config");
    let settings = Settings::from_config(&loaded.viewer);
    assert_eq!(settings.flip_duration.as_millis(), 500);
    assert!((settings.swipe_threshold.value() - 80.0).abs() < f32::EPSILON);
    assert_eq!(settings.prefetch_radius, config::MAX_PREFETCH_RADIUS);

    let defaults = Settings::from_config(&ViewerConfig::default());
    assert_eq!(defaults, Settings::default());
}

#[test]
fn catalog_file_drives_viewer_page_count() {
    let dir = tempdir().expect("tempdir");
    let catalog_path = dir.path().join("book.toml");
    std::fs::write(
        &catalog_path,
        r#"
project_name = "Three Pages"

[[pages]]
id = "one"
image = "one.png"

[[pages]]
id = "two"
image = "two.png"
title = "Second"

[[pages]]
id = "three"
image = "https://example.com/three.png"
"#,
    )
    .expect("write catalog");

    let catalog = catalog::load_from_path(&catalog_path).expect("catalog");
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.pages[0].source(),
        Source::Local(dir.path().join("one.png"))
    );
    assert!(catalog.pages[2].source().is_remote());

    let now = Instant::now();
    let state = State::new(catalog.pages, catalog.project_name, true, Settings::default(), now);
    assert_eq!(state.page_count(), 3);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn full_walk_through_the_book() {
    let start = Instant::now();
    let mut state = viewer(start);
    let flip = Settings::default().flip_duration.as_duration();
    let mut now = start;

    for expected in 1..state.page_count() {
        assert_eq!(
            state.handle_message_at(Message::Advance, now),
            Effect::None
        );
        now += flip + Duration::from_millis(1);
        let _ = state.handle_message_at(Message::Tick(now), now);
        assert_eq!(state.current_index(), expected);
        assert!(!state.is_transitioning());
    }

    // Already on the last page.
    let _ = state.handle_message_at(Message::Advance, now);
    assert!(!state.is_transitioning());

    let _ = state.handle_message_at(Message::JumpTo(0), now);
    now += flip + Duration::from_millis(1);
    let _ = state.handle_message_at(Message::Tick(now), now);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn close_is_reported_only_when_closable() {
    let now = Instant::now();
    let mut closable = viewer(now);
    assert_eq!(closable.handle_message_at(Message::Close, now), Effect::Close);

    let catalog = Catalog::sample();
    let mut pinned = State::new(catalog.pages, "Pinned", false, Settings::default(), now);
    assert_eq!(pinned.handle_message_at(Message::Close, now), Effect::None);
}

#[test]
fn empty_catalog_opens_without_navigation() {
    let now = Instant::now();
    let mut state = State::new(Vec::new(), "Empty", true, Settings::default(), now);
    let _ = state.handle_message_at(Message::Advance, now);
    let _ = state.handle_message_at(Message::Retreat, now);
    assert_eq!(state.page_count(), 0);
    assert!(!state.is_transitioning());
    assert!(state.wanted_pages().is_empty());
}

#[tokio::test]
async fn local_image_is_decoded_and_cached() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("page.png");
    image_rs::RgbaImage::from_pixel(6, 4, image_rs::Rgba([200, 10, 10, 255]))
        .save(&path)
        .expect("write png");

    let data = media::load_image(Source::Local(path))
        .await
        .expect("decode");
    assert_eq!((data.width, data.height), (6, 4));

    let mut cache = ImageCache::default();
    assert!(cache.begin_load("page"));
    cache.insert("page".to_string(), data);
    assert!(matches!(cache.status("page"), ImageStatus::Ready(_)));
}

#[tokio::test]
async fn missing_image_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let result = media::load_image(Source::Local(dir.path().join("nope.png"))).await;
    assert!(result.is_err());
}
