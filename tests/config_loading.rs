// Integration test for sequence definition files
// Tests the complete save/load cycle and drives a sequencer from the result

use event_sequencer::config::{
    ConfigError, EventConfig, SequenceConfig, build_events, load_config, save_config,
};
use event_sequencer::sequencer::{Command, Sequencer, SequencerStatus};
use event_sequencer::timer::{ManualClock, Timer};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;

fn sample_config() -> SequenceConfig {
    let mut config = SequenceConfig::new(
        "Washing Cycle",
        vec![
            EventConfig::new("Fill", 200),
            EventConfig::new("Wash", 500),
            EventConfig::new("Drain", 100),
        ],
    );
    config.tick_interval_ms = 5;
    config
}

#[test]
fn test_ron_save_load_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cycles").join("washing.ron");

    let config = sample_config();
    save_config(&config, &path).unwrap();
    assert!(path.exists());

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.tick_interval(), Duration::from_millis(5));
}

#[test]
fn test_json_save_load_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("washing.json");

    let mut config = sample_config();
    config.wrap = true;
    save_config(&config, &path).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.wrap);
}

#[test]
fn test_hand_written_ron_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("minimal.ron");
    std::fs::write(
        &path,
        r#"(
            name: "Minimal",
            events: [
                (name: "Only", duration_ms: 50),
            ],
        )"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert!(!config.wrap);
    assert_eq!(config.tick_interval_ms, 10);
    assert_eq!(config.events.len(), 1);
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("washing.yaml");
    std::fs::write(&path, "name: Washing").unwrap();

    let result = load_config(&path);
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));

    let result = save_config(&sample_config(), temp_dir.path().join("washing"));
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    std::fs::write(&path, r#"{"name": "Empty", "events": []}"#).unwrap();

    let result = load_config(&path);
    assert!(matches!(result, Err(ConfigError::InvalidStructure(_))));
}

#[test]
fn test_malformed_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let ron_path = temp_dir.path().join("broken.ron");
    std::fs::write(&ron_path, "(name: \"Broken\", events: [").unwrap();
    assert!(matches!(
        load_config(&ron_path),
        Err(ConfigError::SerializationError(_))
    ));

    let json_path = temp_dir.path().join("broken.json");
    std::fs::write(&json_path, "{ not json").unwrap();
    assert!(load_config(&json_path).is_err());
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config(temp_dir.path().join("missing.ron"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_loaded_sequence_runs_to_completion() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("washing.ron");
    save_config(&sample_config(), &path).unwrap();

    let config = load_config(&path).unwrap();
    let executed = Rc::new(Cell::new(0));
    let events = build_events(&config, |_| {
        let executed = Rc::clone(&executed);
        Some(Box::new(move || executed.set(executed.get() + 1)) as Box<dyn Command>)
    });

    let clock = ManualClock::new();
    let mut sequencer =
        Sequencer::with_timer(&events, Timer::new(clock.clone()), |_, _| {}, config.wrap)
            .unwrap();

    sequencer.start();
    for event in &config.events {
        clock.advance(event.duration());
        sequencer.tick();
    }

    assert_eq!(sequencer.status(), SequencerStatus::Done);
    assert_eq!(executed.get(), 3);
}
