use std::path::Path;

use trendwatch_detector::DetectionConfig;

use crate::error::Result;

/// Load detection configuration from a JSON file
///
/// Missing keys fall back to their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DetectionConfig> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config = load_config_from_str(&content)?;
    log::info!("Loaded detection config from {}", path.as_ref().display());
    Ok(config)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<DetectionConfig> {
    let config: DetectionConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<DetectionConfig> {
    let default_config = include_str!("detection_config.json");
    load_config_from_str(default_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnerError;
    use trendwatch_detector::{DayErrorPolicy, DetectionError};

    #[test]
    fn test_load_default_config() {
        let config = load_default_config().unwrap();
        assert_eq!(config, DetectionConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config =
            load_config_from_str(r#"{ "primary_fraction": 0.25, "on_day_error": "skip_day" }"#)
                .unwrap();
        assert_eq!(config.primary_fraction, 0.25);
        assert_eq!(config.on_day_error, DayErrorPolicy::SkipDay);
        assert_eq!(config.context_limit, 10);
        assert_eq!(config.threshold.min_distinct_scores, 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = load_config_from_str(r#"{ "smoothing_factor": 1.0 }"#);
        assert!(matches!(
            result,
            Err(RunnerError::Detection(DetectionError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_config_from_str("{ not json"),
            Err(RunnerError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/trendwatch.json"),
            Err(RunnerError::Io(_))
        ));
    }
}
