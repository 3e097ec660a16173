// Sequence definitions loaded from RON or JSON files
// Turns a declarative event list into an event table for the sequencer

pub mod serialization;
pub mod types;

use crate::sequencer::{Command, Event};
use log::debug;
use std::path::Path;

pub use serialization::{
    deserialize_from_json, deserialize_from_ron, serialize_to_json, serialize_to_ron,
};
pub use types::{EventConfig, SequenceConfig};

/// Maximum length of sequence and event names
const MAX_NAME_LEN: usize = 255;

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid sequence definition: {0}")]
    InvalidStructure(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and validate a sequence definition
///
/// The format is picked from the file extension: `.ron` or `.json`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SequenceConfig, ConfigError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;

    let config = match extension(path)?.as_str() {
        "ron" => deserialize_from_ron(&data)?,
        "json" => deserialize_from_json(&data)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };
    validate_config(&config)?;

    debug!(
        "Loaded sequence '{}' ({} events) from {}",
        config.name,
        config.events.len(),
        path.display()
    );
    Ok(config)
}

/// Save a sequence definition, picking the format from the file extension
pub fn save_config<P: AsRef<Path>>(config: &SequenceConfig, path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let data = match extension(path)?.as_str() {
        "ron" => serialize_to_ron(config)?,
        "json" => serialize_to_json(config)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

fn extension(path: &Path) -> Result<String, ConfigError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| ConfigError::UnsupportedFormat(format!("{}", path.display())))
}

/// Check a sequence definition before building events from it
pub fn validate_config(config: &SequenceConfig) -> Result<(), ConfigError> {
    if config.name.trim().is_empty() {
        return Err(ConfigError::InvalidStructure(
            "Sequence name cannot be empty".to_string(),
        ));
    }

    if config.name.len() > MAX_NAME_LEN {
        return Err(ConfigError::InvalidStructure(
            "Sequence name cannot exceed 255 characters".to_string(),
        ));
    }

    if config.tick_interval_ms == 0 {
        return Err(ConfigError::InvalidStructure(
            "Tick interval must be at least 1 ms".to_string(),
        ));
    }

    if config.events.is_empty() {
        return Err(ConfigError::InvalidStructure(
            "Sequence must have at least one event".to_string(),
        ));
    }

    for (index, event) in config.events.iter().enumerate() {
        if event.name.trim().is_empty() {
            return Err(ConfigError::InvalidStructure(format!(
                "Event {} name cannot be empty",
                index + 1
            )));
        }

        if event.name.len() > MAX_NAME_LEN {
            return Err(ConfigError::InvalidStructure(format!(
                "Event {} name cannot exceed 255 characters",
                index + 1
            )));
        }
    }

    Ok(())
}

/// Build an owned event table from a sequence definition
///
/// `resolve` is asked once per event, in order, for the command to attach
/// (by event name); returning `None` leaves the event without a command.
pub fn build_events<F>(config: &SequenceConfig, mut resolve: F) -> Vec<Event>
where
    F: FnMut(&EventConfig) -> Option<Box<dyn Command>>,
{
    config
        .events
        .iter()
        .map(|entry| {
            Event::new(entry.name.clone(), entry.duration()).with_boxed_command(resolve(entry))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&SequenceConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_events() {
        let config = SequenceConfig::new("Empty", Vec::new());
        let result = validate_config(&config);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("at least one event")
        );
    }

    #[test]
    fn test_validate_blank_event_name() {
        let config = SequenceConfig::new("Blank", vec![EventConfig::new("  ", 10)]);
        let result = validate_config(&config);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Event 1 name cannot be empty")
        );
    }

    #[test]
    fn test_validate_zero_tick_interval() {
        let mut config = SequenceConfig::default();
        config.tick_interval_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_long_name() {
        let config = SequenceConfig::new("x".repeat(256), vec![EventConfig::new("A", 1)]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_duration_is_valid() {
        let config = SequenceConfig::new("Instant", vec![EventConfig::new("Now", 0)]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_build_events_resolves_commands() {
        let config = SequenceConfig::default();
        let events = build_events(&config, |entry| {
            if entry.name == "Green" {
                Some(Box::new(|| {}) as Box<dyn Command>)
            } else {
                None
            }
        });

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].name(), "Red");
        assert_eq!(events[0].duration(), Duration::from_millis(3000));
        assert!(!events[0].has_command());
        assert!(events[1].has_command());
    }

    #[test]
    fn test_huge_durations_do_not_overflow() {
        let config = SequenceConfig::new("Long", vec![EventConfig::new("Long", u64::MAX); 2]);
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.run_limit(1), Some(config.total_duration()));
        assert_eq!(config.run_limit(u32::MAX), None);

        // Past ~1000 of these the sum no longer fits in a Duration
        let events = vec![EventConfig::new("Long", u64::MAX); 1100];
        let config = SequenceConfig::new("Forever", events);
        assert_eq!(config.total_duration(), Duration::MAX);
        assert_eq!(config.run_limit(2), None);

        assert_eq!(
            SequenceConfig::default().run_limit(2),
            Some(Duration::from_millis(12000))
        );
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(
            SequenceConfig::default().total_duration(),
            Duration::from_millis(6000)
        );
    }
}
