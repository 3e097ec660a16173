// Serialization utilities for sequence definitions

use crate::config::ConfigError;
use crate::config::types::SequenceConfig;
use ron::ser::PrettyConfig;

/// Serialize a sequence definition to pretty RON
pub fn serialize_to_ron(config: &SequenceConfig) -> Result<String, ConfigError> {
    ron::ser::to_string_pretty(config, PrettyConfig::default()).map_err(|e| {
        ConfigError::SerializationError(format!("Failed to serialize to RON: {}", e))
    })
}

/// Deserialize a sequence definition from RON
pub fn deserialize_from_ron(ron_data: &str) -> Result<SequenceConfig, ConfigError> {
    ron::from_str(ron_data).map_err(|e| {
        ConfigError::SerializationError(format!("Failed to deserialize from RON: {}", e))
    })
}

/// Serialize a sequence definition to pretty JSON
pub fn serialize_to_json(config: &SequenceConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Deserialize a sequence definition from JSON
pub fn deserialize_from_json(json_data: &str) -> Result<SequenceConfig, ConfigError> {
    Ok(serde_json::from_str(json_data)?)
}
