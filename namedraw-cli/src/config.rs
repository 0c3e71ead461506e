use namedraw_core::{FlowConfig, NamedrawError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub flow: FlowConfig,
    /// Continue from a menu instead of the reveal timer
    pub manual_reveal: bool,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            flow: FlowConfig::default(),
            manual_reveal: false,
            verbose: false,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("namedraw")
        .join("config.json")
}

impl CliConfig {
    /// Read the config at `path`, falling back to defaults when it is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.flow.validate()?;
        Ok(config)
    }

    /// Like [`CliConfig::load`], but when `recover` is set an unreadable file
    /// yields defaults plus the error that was skipped.
    pub fn load_or_recover(
        path: &Path,
        recover: bool,
    ) -> Result<(Self, Option<NamedrawError>)> {
        match Self::load(path) {
            Ok(config) => Ok((config, None)),
            Err(e) if recover => Ok((Self::default(), Some(e))),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Command line flags win over the file
    pub fn apply_overrides(&mut self, reveal_secs: Option<u64>, manual: bool, verbose: bool) {
        if let Some(secs) = reveal_secs {
            self.flow.reveal_dwell = Duration::from_secs(secs);
        }
        self.manual_reveal |= manual;
        self.verbose |= verbose;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = CliConfig::load(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let mut config = CliConfig::default();
        config.apply_overrides(Some(5), true, false);
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.flow.reveal_dwell, Duration::from_secs(5));
        assert!(loaded.manual_reveal);
        assert!(!loaded.verbose);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "manual_reveal": true }"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert!(config.manual_reveal);
        assert_eq!(config.flow, FlowConfig::default());
    }

    #[test]
    fn test_invalid_dwell_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "flow": { "reveal_dwell": { "secs": 600, "nanos": 0 } } }"#,
        )
        .unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(matches!(err, NamedrawError::Config(_)));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(matches!(err, NamedrawError::Serialization(_)));
    }

    #[test]
    fn test_broken_file_recovered_only_when_asked() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(CliConfig::load_or_recover(&path, false).is_err());

        let (config, skipped) = CliConfig::load_or_recover(&path, true).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(matches!(skipped, Some(NamedrawError::Serialization(_))));
    }

    #[test]
    fn test_out_of_range_file_recovered() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "flow": { "reveal_dwell": { "secs": 600, "nanos": 0 } } }"#,
        )
        .unwrap();

        let (config, skipped) = CliConfig::load_or_recover(&path, true).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(matches!(skipped, Some(NamedrawError::Config(_))));
    }

    #[test]
    fn test_good_file_has_nothing_skipped() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "verbose": true }"#).unwrap();

        let (config, skipped) = CliConfig::load_or_recover(&path, true).unwrap();
        assert!(config.verbose);
        assert!(skipped.is_none());
    }

    #[test]
    fn test_flags_override_file() {
        let mut config = CliConfig::default();
        config.apply_overrides(None, false, true);
        assert_eq!(config.flow, FlowConfig::default());
        assert!(config.verbose);

        config.apply_overrides(Some(0), false, false);
        assert_eq!(config.flow.reveal_dwell, Duration::ZERO);
        assert!(config.verbose);
    }
}
